//! Trạng thái phiên làm việc và kiểm tra điều kiện của các luồng
//!
//! Toàn bộ trạng thái chỉ sống trong bộ nhớ suốt một phiên xem trang:
//! không lưu trữ, không khôi phục. Ba luồng gọi model không loại trừ
//! lẫn nhau; luồng nào hoàn thành thì ghi đè phần dữ liệu của nó
//! (last write wins).

use crate::types::{ScriptOutput, ThemeSuggestion, VocabItem};

/// Số dòng từ vựng của danh sách làm việc
pub const VOCAB_SLOTS: usize = 5;

/// Thông báo kiểm tra: chưa có bối cảnh khi tạo từ vựng
pub const MSG_CONTEXT_REQUIRED: &str =
    "Hãy chọn chủ đề hoặc nhập ý tưởng của bạn vào ô 'Bối cảnh' nhé!";

/// Thông báo kiểm tra: chưa có từ vựng khi tạo kịch bản
pub const MSG_VOCAB_REQUIRED: &str = "Vui lòng nhập từ vựng trước khi tạo kịch bản nha!";

/// Thông báo lỗi của luồng phân tích ảnh
pub const MSG_IMAGE_FAILED: &str = "Bạn ơi, ảnh này hơi khó xem một chút, thử lại nhé!";

/// Thông báo lỗi của luồng tạo từ vựng
pub const MSG_VOCAB_FAILED: &str = "Có lỗi khi tạo từ vựng rồi, hãy thử lại bạn nhé!";

/// Thông báo lỗi của luồng tạo kịch bản
pub const MSG_SCRIPT_FAILED: &str = "Kịch bản đang gặp chút trục trặc, hãy thử lại xem sao!";

/// Một ô trong dòng từ vựng
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VocabField {
    Vi,
    En,
    Ipa,
    Sentence,
}

/// Trạng thái phiên: bối cảnh, ảnh tham chiếu, danh sách từ vựng,
/// chủ đề gợi ý và kịch bản đã tạo
#[derive(Debug, Clone, PartialEq)]
pub struct LessonSession {
    pub context: String,
    /// Ảnh tham chiếu dạng data URL, nếu có
    pub image: Option<String>,
    pub vocab_list: Vec<VocabItem>,
    pub theme_suggestions: Vec<ThemeSuggestion>,
    pub result: Option<ScriptOutput>,
}

impl LessonSession {
    /// Phiên mới: 5 dòng từ vựng rỗng, chưa có gì khác
    pub fn new() -> Self {
        Self {
            context: String::new(),
            image: None,
            vocab_list: vec![VocabItem::default(); VOCAB_SLOTS],
            theme_suggestions: Vec::new(),
            result: None,
        }
    }

    /// Sửa một ô của một dòng từ vựng; index ngoài phạm vi thì bỏ qua
    pub fn edit_vocab(&mut self, index: usize, field: VocabField, value: String) {
        if let Some(item) = self.vocab_list.get_mut(index) {
            match field {
                VocabField::Vi => item.vi = value,
                VocabField::En => item.en = value,
                VocabField::Ipa => item.ipa = value,
                VocabField::Sentence => item.sentence = value,
            }
        }
    }

    /// Thay toàn bộ danh sách từ vựng (không merge)
    pub fn replace_vocab(&mut self, vocabs: Vec<VocabItem>) {
        self.vocab_list = vocabs;
    }

    /// Lưu ảnh tham chiếu mới
    pub fn set_image(&mut self, data_url: String) {
        self.image = Some(data_url);
    }

    /// Bỏ ảnh: xoá luôn danh sách chủ đề gợi ý
    pub fn clear_image(&mut self) {
        self.image = None;
        self.theme_suggestions.clear();
    }

    pub fn set_theme_suggestions(&mut self, themes: Vec<ThemeSuggestion>) {
        self.theme_suggestions = themes;
    }

    /// Chọn một chủ đề (gợi ý từ ảnh hoặc chủ đề liên quan):
    /// ghi đè bối cảnh và xoá kịch bản cũ
    pub fn apply_theme(&mut self, context: &str) {
        self.context = context.to_string();
        self.result = None;
    }

    /// Thay toàn bộ kết quả kịch bản
    pub fn set_result(&mut self, script: ScriptOutput) {
        self.result = Some(script);
    }

    pub fn has_context(&self) -> bool {
        !self.context.is_empty()
    }

    /// Có ít nhất một dòng từ vựng với ô tiếng Anh khác rỗng
    pub fn has_vocab(&self) -> bool {
        self.vocab_list.iter().any(|v| !v.en.is_empty())
    }

    /// Điều kiện của luồng tạo từ vựng, kiểm tra trước khi gọi model
    pub fn ensure_context(&self) -> Result<(), &'static str> {
        if self.has_context() {
            Ok(())
        } else {
            Err(MSG_CONTEXT_REQUIRED)
        }
    }

    /// Điều kiện của luồng tạo kịch bản, kiểm tra trước khi gọi model
    pub fn ensure_vocab(&self) -> Result<(), &'static str> {
        if self.has_vocab() {
            Ok(())
        } else {
            Err(MSG_VOCAB_REQUIRED)
        }
    }
}

impl Default for LessonSession {
    fn default() -> Self {
        Self::new()
    }
}
