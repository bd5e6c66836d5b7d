//! Parse response của model
//!
//! Response rỗng được coi là mảng rỗng / object mặc định (fallback trước
//! khi parse); JSON hỏng là lỗi Parse, lớp flow sẽ đổi thành thông báo
//! thân thiện. Không bao giờ trả kết quả một phần.

use crate::error::{Error, Result};
use crate::types::{ScriptOutput, ThemeSuggestion, VocabItem};

/// Trích phần JSON từ response
///
/// Thứ tự ưu tiên:
/// 1. Khối ```json ... ```
/// 2. Mảng [...] hoặc object {...} thô
/// 3. Lỗi
///
/// Với responseSchema model thường trả JSON trần, nhưng vẫn giữ bước
/// trích để chịu được response bọc trong văn bản.
pub fn extract_json(response: &str) -> Result<&str> {
    // khối ```json ... ```
    if let Some(start_marker) = response.find("```json") {
        let start = start_marker + 7; // độ dài của "```json"
        if let Some(end_offset) = response[start..].find("```") {
            let end = start + end_offset;
            return Ok(response[start..end].trim());
        }
    }

    // mảng hoặc object thô, lấy loại xuất hiện trước
    let array_start = response.find('[');
    let object_start = response.find('{');
    let (start, close) = match (array_start, object_start) {
        (Some(a), Some(o)) if a < o => (a, ']'),
        (Some(a), None) => (a, ']'),
        (_, Some(o)) => (o, '}'),
        (None, None) => return Err(Error::Parse("không tìm thấy JSON".into())),
    };
    if let Some(end) = response.rfind(close) {
        if end >= start {
            return Ok(&response[start..=end]);
        }
    }

    Err(Error::Parse("không tìm thấy JSON".into()))
}

/// Parse response của luồng phân tích ảnh
///
/// Response rỗng -> danh sách rỗng (không phải lỗi)
pub fn parse_theme_response(response: &str) -> Result<Vec<ThemeSuggestion>> {
    if response.trim().is_empty() {
        return Ok(Vec::new());
    }
    let json_str = extract_json(response)?;
    let themes: Vec<ThemeSuggestion> = serde_json::from_str(json_str.trim())
        .map_err(|e| Error::Parse(format!("lỗi parse JSON chủ đề: {}", e)))?;
    Ok(themes)
}

/// Parse response của luồng tạo từ vựng
///
/// Response rỗng -> danh sách rỗng; số lượng 5 mục do schema và
/// instruction đảm nhiệm, không kiểm tra cục bộ
pub fn parse_vocab_response(response: &str) -> Result<Vec<VocabItem>> {
    if response.trim().is_empty() {
        return Ok(Vec::new());
    }
    let json_str = extract_json(response)?;
    let vocabs: Vec<VocabItem> = serde_json::from_str(json_str.trim())
        .map_err(|e| Error::Parse(format!("lỗi parse JSON từ vựng: {}", e)))?;
    Ok(vocabs)
}

/// Parse response của luồng tạo kịch bản
///
/// Response rỗng -> ScriptOutput mặc định; nội dung giữ nguyên như model
/// trả về, kể cả khi nhãn người nói không đúng quy tắc
pub fn parse_script_response(response: &str) -> Result<ScriptOutput> {
    if response.trim().is_empty() {
        return Ok(ScriptOutput::default());
    }
    let json_str = extract_json(response)?;
    let script: ScriptOutput = serde_json::from_str(json_str.trim())
        .map_err(|e| Error::Parse(format!("lỗi parse JSON kịch bản: {}", e)))?;
    Ok(script)
}

#[cfg(test)]
mod tests {
    use super::*;

    // =============================================
    // extract_json
    // =============================================

    #[test]
    fn test_extract_json_with_block() {
        let response = "Đây là kết quả:\n```json\n[{\"title\": \"Trong bếp\", \"context\": \"Bé tập làm bánh\"}]\n```\nHết.";
        let json = extract_json(response).unwrap();
        assert!(json.starts_with('['));
        assert!(json.contains("Trong bếp"));
    }

    #[test]
    fn test_extract_json_raw_array() {
        let response = r#"[{"title": "a", "context": "b"}]"#;
        let json = extract_json(response).unwrap();
        assert_eq!(json, response);
    }

    #[test]
    fn test_extract_json_raw_object() {
        let response = r#"{"project_title": "t"}"#;
        let json = extract_json(response).unwrap();
        assert_eq!(json, response);
    }

    #[test]
    fn test_extract_json_object_with_surrounding_text() {
        let response = r#"Kết quả: {"project_title": "t", "scenes": []} xong."#;
        let json = extract_json(response).unwrap();
        assert_eq!(json, r#"{"project_title": "t", "scenes": []}"#);
    }

    #[test]
    fn test_extract_json_array_containing_objects() {
        // mảng đứng trước object thì lấy cả mảng
        let response = r#"[{"title": "a"}, {"title": "b"}]"#;
        let json = extract_json(response).unwrap();
        assert_eq!(json, response);
    }

    #[test]
    fn test_extract_json_error() {
        let result = extract_json("Không có JSON ở đây.");
        assert!(result.is_err());
        if let Err(Error::Parse(msg)) = result {
            assert!(msg.contains("không tìm thấy JSON"));
        } else {
            panic!("Expected Parse error");
        }
    }

    // =============================================
    // parse_theme_response
    // =============================================

    #[test]
    fn test_parse_theme_response() {
        let response = r#"[
            {"title": "Trong bếp", "context": "Bé và mẹ tập làm bánh"},
            {"title": "Đi siêu thị", "context": "Bé học tên rau củ"},
            {"title": "Công viên", "context": "Bé chơi ở công viên"}
        ]"#;
        let themes = parse_theme_response(response).unwrap();
        assert_eq!(themes.len(), 3);
        assert_eq!(themes[0].title, "Trong bếp");
        assert_eq!(themes[2].context, "Bé chơi ở công viên");
    }

    #[test]
    fn test_parse_theme_response_empty_fallback() {
        // response rỗng -> mảng rỗng, không phải lỗi
        assert_eq!(parse_theme_response("").unwrap(), Vec::new());
        assert_eq!(parse_theme_response("   \n").unwrap(), Vec::new());
    }

    #[test]
    fn test_parse_theme_response_malformed() {
        let result = parse_theme_response(r#"[{"title": "#);
        assert!(result.is_err());
    }

    // =============================================
    // parse_vocab_response
    // =============================================

    #[test]
    fn test_parse_vocab_response() {
        let response = r#"```json
[
  {"vi": "quả táo", "en": "apple", "ipa": "/ˈæp.əl/", "sentence": "I eat an apple."},
  {"vi": "con chó", "en": "dog", "ipa": "/dɒɡ/", "sentence": "The dog runs."}
]
```"#;
        let vocabs = parse_vocab_response(response).unwrap();
        assert_eq!(vocabs.len(), 2);
        assert_eq!(vocabs[0].en, "apple");
        assert_eq!(vocabs[1].ipa, "/dɒɡ/");
    }

    #[test]
    fn test_parse_vocab_response_empty_fallback() {
        assert!(parse_vocab_response("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_vocab_response_missing_fields_default() {
        let response = r#"[{"en": "cat"}]"#;
        let vocabs = parse_vocab_response(response).unwrap();
        assert_eq!(vocabs[0].en, "cat");
        assert_eq!(vocabs[0].vi, ""); // giá trị mặc định
    }

    #[test]
    fn test_parse_vocab_response_malformed() {
        assert!(parse_vocab_response("not json at all").is_err());
    }

    // =============================================
    // parse_script_response
    // =============================================

    #[test]
    fn test_parse_script_response() {
        let response = r#"{
            "project_title": "Bé học trong bếp",
            "global_visual_style": {"look": "warm", "character_consistency_rule": "keep faces"},
            "scenes": [
                {
                    "scene_number": 1,
                    "duration_seconds": 8,
                    "vocab": {"vi": "quả táo", "en": "apple", "ipa": "/ˈæp.əl/", "sentence": "I eat an apple."},
                    "image_prompt": "kitchen",
                    "video_prompt": "dolly-in",
                    "dialogue": [
                        {"speaker": "MOTHER", "text": "Từ 'quả táo' tiếng Anh nói thế nào?"},
                        {"speaker": "CHILD", "text": "Apple! /ˈæp.əl/. I eat an apple."},
                        {"speaker": "MOTHER", "text": "Giỏi quá!"}
                    ]
                }
            ],
            "final_notes": ["note"],
            "related_suggestions": []
        }"#;
        let script = parse_script_response(response).unwrap();
        assert_eq!(script.project_title, "Bé học trong bếp");
        assert_eq!(script.scenes.len(), 1);
        assert_eq!(script.scenes[0].dialogue.len(), 3);
        assert_eq!(script.scenes[0].dialogue[2].text, "Giỏi quá!");
    }

    #[test]
    fn test_parse_script_response_empty_fallback() {
        // response rỗng -> object mặc định
        let script = parse_script_response("").unwrap();
        assert_eq!(script, ScriptOutput::default());
    }

    #[test]
    fn test_parse_script_response_malformed() {
        assert!(parse_script_response(r#"{"project_title": }"#).is_err());
    }

    #[test]
    fn test_parse_script_response_mislabeled_dialogue_passthrough() {
        // vi phạm quy tắc người nói/ngôn ngữ vẫn đi qua nguyên vẹn:
        // client không sửa, không loại bỏ
        let response = r#"{
            "project_title": "t",
            "scenes": [{
                "scene_number": 1,
                "vocab": {},
                "image_prompt": "i",
                "video_prompt": "v",
                "dialogue": [
                    {"speaker": "CHILD", "text": "Con chào mẹ ạ"},
                    {"speaker": "MOTHER", "text": "What a lovely day"}
                ]
            }]
        }"#;
        let script = parse_script_response(response).unwrap();
        let dialogue = &script.scenes[0].dialogue;
        assert_eq!(dialogue[0].speaker, "CHILD");
        assert_eq!(dialogue[0].text, "Con chào mẹ ạ");
        assert_eq!(dialogue[1].speaker, "MOTHER");
        assert_eq!(dialogue[1].text, "What a lovely day");
    }

    #[test]
    fn test_parse_script_response_scene_numbers_kept_verbatim() {
        // scene_number giữ nguyên theo response, không đánh số lại
        let response = r#"{
            "project_title": "t",
            "scenes": [
                {"scene_number": 7, "vocab": {}, "image_prompt": "", "video_prompt": "", "dialogue": []},
                {"scene_number": 3, "vocab": {}, "image_prompt": "", "video_prompt": "", "dialogue": []}
            ]
        }"#;
        let script = parse_script_response(response).unwrap();
        let numbers: Vec<u32> = script.scenes.iter().map(|s| s.scene_number).collect();
        assert_eq!(numbers, vec![7, 3]);
    }
}
