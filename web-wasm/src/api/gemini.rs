//! Gọi Gemini API cho ba luồng độc lập
//!
//! - analyze_image_themes: phân tích ảnh -> chủ đề gợi ý
//! - generate_vocab: bối cảnh (+ ảnh) -> 5 mục từ vựng
//! - generate_script: từ vựng + bối cảnh (+ ảnh) -> kịch bản hoàn chỉnh
//!
//! Mỗi luồng là một request/response riêng, ràng buộc đầu ra bằng
//! responseSchema. Không retry, không cancel, không cache.

use base64::Engine;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use lesson_ai_common::{
    build_script_prompt, build_theme_prompt, build_vocab_prompt,
    parse_script_response, parse_theme_response, parse_vocab_response,
    script_schema, theme_schema, vocab_schema,
    ScriptOutput, ThemeSuggestion, VocabItem, SYSTEM_INSTRUCTION,
};

const GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-flash-preview:generateContent";

/// Request gửi lên Gemini API
#[derive(Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(rename = "systemInstruction", skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
    #[serde(rename = "responseSchema")]
    response_schema: serde_json::Value,
}

impl GenerationConfig {
    fn json_with_schema(schema: serde_json::Value) -> Self {
        Self {
            response_mime_type: "application/json".to_string(),
            response_schema: schema,
        }
    }
}

/// Response của Gemini API
#[derive(Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: ResponseContent,
}

#[derive(Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

/// Trích phần base64 từ data URL
///
/// # Arguments
/// * `data_url` - chuỗi dạng "data:image/jpeg;base64,/9j/4AAQ..."
///
/// # Returns
/// Phần dữ liệu sau dấu phẩy, hoặc None nếu không có
pub fn extract_base64_from_data_url(data_url: &str) -> Option<&str> {
    data_url.split(',').nth(1)
}

/// Trích MIME type từ data URL, mặc định "image/jpeg"
pub fn extract_mime_type_from_data_url(data_url: &str) -> &str {
    data_url
        .split(':')
        .nth(1)
        .and_then(|s| s.split(';').next())
        .unwrap_or("image/jpeg")
}

/// Dựng phần ảnh inline của request
///
/// Payload base64 phải decode được; data URL hỏng làm luồng thất bại
/// trước khi có bất kỳ request mạng nào.
fn image_part(data_url: &str) -> Result<Part, JsValue> {
    let data = extract_base64_from_data_url(data_url)
        .ok_or_else(|| JsValue::from_str("Invalid data URL"))?;

    base64::engine::general_purpose::STANDARD
        .decode(data)
        .map_err(|e| JsValue::from_str(&format!("Invalid base64 payload: {}", e)))?;

    let mime_type = extract_mime_type_from_data_url(data_url);
    Ok(Part::InlineData {
        inline_data: InlineData {
            mime_type: mime_type.to_string(),
            data: data.to_string(),
        },
    })
}

/// Gọi Gemini API (phần chung của ba luồng)
///
/// Trả về text của candidate đầu tiên; response không có candidate/part
/// thì trả chuỗi rỗng để lớp parse áp fallback
async fn call_gemini_api(api_key: &str, request: &GeminiRequest) -> Result<String, JsValue> {
    let url = format!("{}?key={}", GEMINI_API_URL, api_key);
    let body = serde_json::to_string(request)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(&url, &opts)?;
    request.headers().set("Content-Type", "application/json")?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!("API error: {}", resp.status())));
    }

    let json = JsFuture::from(resp.json()?).await?;
    let response: GeminiResponse = serde_wasm_bindgen::from_value(json)?;

    Ok(response
        .candidates
        .first()
        .and_then(|c| c.content.parts.first())
        .map(|p| p.text.clone())
        .unwrap_or_default())
}

/// Phân tích ảnh mẹ và bé, đề xuất chủ đề bài học
///
/// # Arguments
/// * `api_key` - Gemini API key
/// * `data_url` - ảnh tham chiếu dạng data URL
pub async fn analyze_image_themes(
    api_key: &str,
    data_url: &str,
) -> Result<Vec<ThemeSuggestion>, JsValue> {
    let parts = vec![
        Part::Text { text: build_theme_prompt() },
        image_part(data_url)?,
    ];

    let request = GeminiRequest {
        contents: vec![Content { parts }],
        system_instruction: None,
        generation_config: GenerationConfig::json_with_schema(theme_schema()),
    };

    let response_text = call_gemini_api(api_key, &request).await?;

    parse_theme_response(&response_text)
        .map_err(|e| JsValue::from_str(&format!("Theme parse error: {}", e)))
}

/// Tạo 5 mục từ vựng theo bối cảnh, kèm ảnh nếu có
pub async fn generate_vocab(
    api_key: &str,
    context: &str,
    image: Option<&str>,
) -> Result<Vec<VocabItem>, JsValue> {
    let mut parts = vec![Part::Text { text: build_vocab_prompt(context) }];
    if let Some(data_url) = image {
        parts.push(image_part(data_url)?);
    }

    let request = GeminiRequest {
        contents: vec![Content { parts }],
        system_instruction: None,
        generation_config: GenerationConfig::json_with_schema(vocab_schema()),
    };

    let response_text = call_gemini_api(api_key, &request).await?;

    parse_vocab_response(&response_text)
        .map_err(|e| JsValue::from_str(&format!("Vocab parse error: {}", e)))
}

/// Tạo kịch bản hoàn chỉnh từ danh sách từ vựng và bối cảnh
///
/// Luồng duy nhất mang system instruction (quy tắc người nói/ngôn ngữ,
/// độ dài lời thoại, yêu cầu của hai prompt)
pub async fn generate_script(
    api_key: &str,
    vocab_list: &[VocabItem],
    context: &str,
    image: Option<&str>,
) -> Result<ScriptOutput, JsValue> {
    let mut parts = vec![Part::Text { text: build_script_prompt(vocab_list, context) }];
    if let Some(data_url) = image {
        parts.push(image_part(data_url)?);
    }

    let request = GeminiRequest {
        contents: vec![Content { parts }],
        system_instruction: Some(Content {
            parts: vec![Part::Text { text: SYSTEM_INSTRUCTION.to_string() }],
        }),
        generation_config: GenerationConfig::json_with_schema(script_schema()),
    };

    let response_text = call_gemini_api(api_key, &request).await?;

    parse_script_response(&response_text)
        .map_err(|e| JsValue::from_str(&format!("Script parse error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    // =============================================
    // Trích data URL
    // =============================================

    #[test]
    fn test_extract_base64_from_data_url_jpeg() {
        let data_url = "data:image/jpeg;base64,/9j/4AAQSkZJRg==";
        assert_eq!(extract_base64_from_data_url(data_url), Some("/9j/4AAQSkZJRg=="));
    }

    #[test]
    fn test_extract_base64_from_data_url_png() {
        let data_url = "data:image/png;base64,iVBORw0KGgo=";
        assert_eq!(extract_base64_from_data_url(data_url), Some("iVBORw0KGgo="));
    }

    #[test]
    fn test_extract_base64_from_data_url_invalid() {
        assert_eq!(extract_base64_from_data_url("not a data url"), None);
        assert_eq!(extract_base64_from_data_url(""), None);
    }

    #[test]
    fn test_extract_mime_type_jpeg() {
        let data_url = "data:image/jpeg;base64,/9j/4AAQ";
        assert_eq!(extract_mime_type_from_data_url(data_url), "image/jpeg");
    }

    #[test]
    fn test_extract_mime_type_png() {
        let data_url = "data:image/png;base64,iVBORw0KGgo=";
        assert_eq!(extract_mime_type_from_data_url(data_url), "image/png");
    }

    #[test]
    fn test_extract_mime_type_default() {
        // format sai thì trả mặc định
        assert_eq!(extract_mime_type_from_data_url("invalid"), "image/jpeg");
    }

    // =============================================
    // image_part - kiểm tra payload
    // =============================================

    #[test]
    fn test_image_part_valid() {
        let part = image_part("data:image/png;base64,aGVsbG8=").expect("payload hợp lệ");
        let json = serde_json::to_string(&part).expect("lỗi serialize");
        assert!(json.contains("\"mime_type\":\"image/png\""));
        assert!(json.contains("\"data\":\"aGVsbG8=\""));
    }

    #[test]
    fn test_image_part_missing_payload() {
        assert!(image_part("just text").is_err());
    }

    #[test]
    fn test_image_part_undecodable_payload() {
        // payload không phải base64 bị chặn trước khi gửi request
        assert!(image_part("data:image/jpeg;base64,not-valid-base64!!!").is_err());
    }

    // =============================================
    // Serialize request / deserialize response
    // =============================================

    #[test]
    fn test_gemini_request_serialize_without_system_instruction() {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part::Text { text: "prompt thử".to_string() }],
            }],
            system_instruction: None,
            generation_config: GenerationConfig::json_with_schema(theme_schema()),
        };

        let json = serde_json::to_string(&request).expect("lỗi serialize");
        assert!(json.contains("\"contents\""));
        assert!(json.contains("\"generationConfig\""));
        assert!(json.contains("\"responseMimeType\":\"application/json\""));
        assert!(json.contains("\"responseSchema\""));
        // không có system instruction thì field biến mất hẳn
        assert!(!json.contains("systemInstruction"));
    }

    #[test]
    fn test_gemini_request_serialize_with_system_instruction() {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part::Text { text: "prompt".to_string() }],
            }],
            system_instruction: Some(Content {
                parts: vec![Part::Text { text: "quy tắc".to_string() }],
            }),
            generation_config: GenerationConfig::json_with_schema(script_schema()),
        };

        let json = serde_json::to_string(&request).expect("lỗi serialize");
        assert!(json.contains("\"systemInstruction\""));
        assert!(json.contains("quy tắc"));
    }

    #[test]
    fn test_part_text_serialize() {
        let part = Part::Text { text: "Hello".to_string() };
        let json = serde_json::to_string(&part).expect("lỗi serialize");
        assert_eq!(json, r#"{"text":"Hello"}"#);
    }

    #[test]
    fn test_part_inline_data_serialize() {
        let part = Part::InlineData {
            inline_data: InlineData {
                mime_type: "image/jpeg".to_string(),
                data: "base64data".to_string(),
            },
        };
        let json = serde_json::to_string(&part).expect("lỗi serialize");
        assert!(json.contains("\"inline_data\""));
        assert!(json.contains("\"mime_type\":\"image/jpeg\""));
        assert!(json.contains("\"data\":\"base64data\""));
    }

    #[test]
    fn test_gemini_response_deserialize() {
        let json = r#"{
            "candidates": [{
                "content": {
                    "parts": [{
                        "text": "[{\"title\": \"Trong bếp\", \"context\": \"Bé tập làm bánh\"}]"
                    }]
                }
            }]
        }"#;

        let response: GeminiResponse = serde_json::from_str(json).expect("lỗi deserialize");
        assert_eq!(response.candidates.len(), 1);
        assert!(response.candidates[0].content.parts[0].text.contains("Trong bếp"));
    }

    #[test]
    fn test_gemini_response_deserialize_no_candidates() {
        // response không có candidates vẫn deserialize được
        let response: GeminiResponse = serde_json::from_str("{}").expect("lỗi deserialize");
        assert!(response.candidates.is_empty());
    }
}
