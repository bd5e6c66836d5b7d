//! Khai báo responseSchema cho Gemini API
//!
//! Kiểu dữ liệu của schema theo REST API v1beta (tên kiểu viết hoa:
//! ARRAY / OBJECT / STRING / NUMBER). Model chịu trách nhiệm tuân thủ
//! schema, phía client không kiểm tra lại cấu trúc.

use serde_json::{json, Value};

/// Schema cho luồng phân tích ảnh: mảng {title, context}
pub fn theme_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "title": { "type": "STRING" },
                "context": { "type": "STRING" }
            },
            "required": ["title", "context"]
        }
    })
}

/// Schema cho luồng tạo từ vựng: mảng {vi, en, ipa, sentence}
pub fn vocab_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "vi": { "type": "STRING" },
                "en": { "type": "STRING" },
                "ipa": { "type": "STRING" },
                "sentence": { "type": "STRING" }
            },
            "required": ["vi", "en", "ipa", "sentence"]
        }
    })
}

fn vocab_object() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "vi": { "type": "STRING" },
            "en": { "type": "STRING" },
            "ipa": { "type": "STRING" },
            "sentence": { "type": "STRING" }
        }
    })
}

/// Schema cho luồng tạo kịch bản: đối tượng ScriptOutput đầy đủ
///
/// Lưu ý: audio không được khai báo (theo hợp đồng gốc), phía client
/// deserialize với giá trị mặc định khi thiếu.
pub fn script_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "project_title": { "type": "STRING" },
            "global_visual_style": {
                "type": "OBJECT",
                "properties": {
                    "look": { "type": "STRING" },
                    "character_consistency_rule": { "type": "STRING" }
                }
            },
            "scenes": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "scene_number": { "type": "NUMBER" },
                        "vocab": vocab_object(),
                        "image_prompt": { "type": "STRING" },
                        "video_prompt": { "type": "STRING" },
                        "dialogue": {
                            "type": "ARRAY",
                            "items": {
                                "type": "OBJECT",
                                "properties": {
                                    "speaker": { "type": "STRING" },
                                    "text": { "type": "STRING" }
                                },
                                "required": ["speaker", "text"]
                            }
                        },
                        "sfx_ambience": { "type": "STRING" },
                        "camera": { "type": "STRING" },
                        "action": { "type": "STRING" },
                        "duration_seconds": { "type": "NUMBER" }
                    },
                    "required": ["scene_number", "vocab", "image_prompt", "video_prompt", "dialogue"]
                }
            },
            "final_notes": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            },
            "related_suggestions": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "description": { "type": "STRING" },
                        "context": { "type": "STRING" },
                        "suggested_vocab": {
                            "type": "ARRAY",
                            "items": { "type": "STRING" }
                        }
                    }
                }
            }
        },
        "required": ["project_title", "global_visual_style", "scenes", "final_notes", "related_suggestions"]
    })
}
