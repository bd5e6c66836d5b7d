//! Sinh prompt cho ba luồng gọi model
//!
//! Dùng chung cho mọi front end:
//! - SYSTEM_INSTRUCTION: quy tắc cố định cho luồng tạo kịch bản
//! - build_theme_prompt: prompt phân tích ảnh
//! - build_vocab_prompt: prompt tạo từ vựng
//! - build_script_prompt: prompt tạo kịch bản

use crate::types::VocabItem;

/// System instruction cho luồng tạo kịch bản: ràng buộc người nói/ngôn ngữ,
/// cấu trúc lời thoại, yêu cầu của prompt ảnh và prompt video
pub const SYSTEM_INSTRUCTION: &str = r#"BẠN LÀ "PROMPT ENGINEER" CHUYÊN TẠO PROMPT ẢNH + PROMPT VIDEO + LỜI THOẠI CHO KÊNH "HỌC TIẾNG ANH CÙNG BÉ".

# QUY TẮC CỐT LÕI (BẮT BUỘC TUYỆT ĐỐI)
1. ĐỊNH DANH NHÂN VẬT (SPEAKER):
   - MẸ (MOTHER): Luôn nói tiếng Việt 100%. Phải gắn nhãn là 'MOTHER'.
   - BÉ (CHILD): Luôn nói tiếng Anh 100%. Phải gắn nhãn là 'CHILD'.
   - TUYỆT ĐỐI KHÔNG NHẦM LẪN: Không được gắn nhãn 'CHILD' cho lời thoại tiếng Việt của Mẹ.

2. CẤU TRÚC LỜI THOẠI (DIALOGUE):
   - Dưới 30 từ mỗi cảnh.
   - Mẹ hỏi: "Từ [X] tiếng Anh nói thế nào?" hoặc dẫn dắt bằng tiếng Việt.
   - Bé trả lời: [Từ vựng] + [IPA] + [Câu mẫu ngắn] bằng tiếng Anh.
   - Mẹ khen: "Giỏi quá!" hoặc "Đúng rồi!" bằng tiếng Việt.

3. PROMPTS:
   - Image Prompt: Mô tả chi tiết để tạo ảnh, có câu "Keep mother and child faces exactly as in the reference photo".
   - Video Prompt: Mô tả chuyển động cinematic 4k. Bao gồm cả kịch bản hội thoại ở cuối prompt.
"#;

/// Prompt phân tích ảnh mẹ và bé, yêu cầu 3 chủ đề gợi ý
pub fn build_theme_prompt() -> String {
    "Phân tích ảnh mẹ và bé này và đề xuất 3 chủ đề sáng tạo (title, context) để dạy tiếng Anh. Trả về JSON list.".to_string()
}

/// Prompt tạo 5 mục từ vựng theo bối cảnh
///
/// # Arguments
/// * `context` - bối cảnh bài học do người dùng nhập hoặc chọn từ gợi ý
pub fn build_vocab_prompt(context: &str) -> String {
    format!(
        "Dựa trên bối cảnh: \"{context}\", hãy tạo 5 mục từ vựng tiếng Anh phù hợp nhất để mẹ dạy bé. Trả về JSON list gồm: vi, en, ipa, sentence."
    )
}

/// Prompt tạo kịch bản hoàn chỉnh
///
/// # Arguments
/// * `vocab_list` - danh sách từ vựng hiện tại (các mục rỗng vẫn được liệt kê)
/// * `context` - bối cảnh bài học
pub fn build_script_prompt(vocab_list: &[VocabItem], context: &str) -> String {
    let pairs = vocab_list
        .iter()
        .map(|v| format!("{} ({})", v.en, v.vi))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"
INPUT:
- 5 từ vựng: {pairs}
- Bối cảnh: {context}

YÊU CẦU:
1. Tạo 5 cảnh phim cinematic.
2. LỜI THOẠI (<30 từ/cảnh): MẸ (MOTHER) nói tiếng Việt, BÉ (CHILD) nói tiếng Anh.
3. PHẢI ĐỊNH DANH ĐÚNG: 'MOTHER' cho người hỏi tiếng Việt, 'CHILD' cho người trả lời tiếng Anh.
4. IMAGE PROMPT: Phải yêu cầu giữ khuôn mặt nhân vật đồng nhất (consistent faces).
5. VIDEO PROMPT: Bao quát cả kịch bản lời thoại ở cuối để dễ copy.
"#
    )
}
