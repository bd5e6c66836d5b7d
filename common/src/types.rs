//! Định nghĩa kiểu dữ liệu của kịch bản
//!
//! Các kiểu dùng chung giữa lớp gọi API và phần hiển thị:
//! - VocabItem: một mục từ vựng (5 mục tạo thành danh sách làm việc)
//! - ThemeSuggestion: chủ đề gợi ý từ phân tích ảnh
//! - Scene / DialoguePart: một cảnh phim và lời thoại trong cảnh
//! - ScriptOutput: kịch bản hoàn chỉnh (đối tượng gốc của response)

use serde::{Deserialize, Serialize};

/// Nhãn người nói trên wire
pub const SPEAKER_MOTHER: &str = "MOTHER";
pub const SPEAKER_CHILD: &str = "CHILD";

/// Một mục từ vựng: tiếng Việt, tiếng Anh, phiên âm IPA, câu mẫu
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabItem {
    pub vi: String,
    pub en: String,
    pub ipa: String,
    pub sentence: String,
}

/// Chủ đề gợi ý sau khi phân tích ảnh
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSuggestion {
    pub title: String,
    pub context: String,
}

/// Một câu thoại trong cảnh
///
/// `speaker` giữ nguyên chuỗi từ model ("MOTHER" hoặc "CHILD") - ràng buộc
/// ngôn ngữ chỉ được yêu cầu qua instruction, không kiểm tra cục bộ.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialoguePart {
    pub speaker: String,
    pub text: String,
}

impl DialoguePart {
    pub fn is_mother(&self) -> bool {
        self.speaker == SPEAKER_MOTHER
    }

    /// Nhãn hiển thị: MOTHER -> "MẸ", còn lại -> "BÉ"
    pub fn display_speaker(&self) -> &'static str {
        if self.is_mother() { "MẸ" } else { "BÉ" }
    }
}

/// Một cảnh phim
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scene {
    pub scene_number: u32,
    pub duration_seconds: f64,
    pub vocab: VocabItem,
    pub image_prompt: String,
    pub video_prompt: String,
    pub camera: String,
    pub action: String,
    pub dialogue: Vec<DialoguePart>,
    pub sfx_ambience: String,
}

impl Scene {
    /// Khối văn bản để copy cả bộ câu lệnh của một cảnh
    /// (prompt ảnh + prompt video + lời thoại)
    pub fn copy_payload(&self) -> String {
        let dialogue = self
            .dialogue
            .iter()
            .map(|d| format!("{}: \"{}\"", d.display_speaker(), d.text))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "IMAGE PROMPT:\n{}\n\nVIDEO PROMPT:\n{}\n\nDIALOGUE:\n{}",
            self.image_prompt, self.video_prompt, dialogue
        )
    }
}

/// Phong cách hình ảnh chung của cả kịch bản
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalVisualStyle {
    pub look: String,
    pub character_consistency_rule: String,
}

/// Một kênh lồng tiếng
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceoverTrack {
    pub role: String,
    pub language: String,
    pub accent: String,
    pub gender: String,
}

/// Thông số âm thanh (không nằm trong schema khai báo - chỉ deserialize
/// khi model trả về, thiếu thì dùng giá trị mặc định)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSpec {
    pub music: String,
    pub voiceover: Vec<VoiceoverTrack>,
    pub subtitles: bool,
}

/// Chủ đề liên quan được model đề xuất kèm kịch bản
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelatedSuggestion {
    pub title: String,
    pub description: String,
    pub context: String,
    pub suggested_vocab: Vec<String>,
}

/// Kịch bản hoàn chỉnh - đối tượng gốc của response, thay thế toàn bộ
/// kết quả cũ khi thành công (không merge)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptOutput {
    pub project_title: String,
    pub global_visual_style: GlobalVisualStyle,
    pub audio: AudioSpec,
    pub scenes: Vec<Scene>,
    pub final_notes: Vec<String>,
    pub related_suggestions: Vec<RelatedSuggestion>,
}
