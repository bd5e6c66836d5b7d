//! Lesson AI Common Library
//!
//! Các kiểu dữ liệu và tiện ích dùng chung cho phần Web (WASM)

pub mod types;
pub mod error;
pub mod prompts;
pub mod schema;
pub mod parser;
pub mod session;

pub use types::{
    VocabItem, ThemeSuggestion, DialoguePart, Scene, ScriptOutput,
    RelatedSuggestion, GlobalVisualStyle, AudioSpec, VoiceoverTrack,
};
pub use error::{Error, Result};
pub use prompts::{SYSTEM_INSTRUCTION, build_theme_prompt, build_vocab_prompt, build_script_prompt};
pub use schema::{theme_schema, vocab_schema, script_schema};
pub use parser::{extract_json, parse_theme_response, parse_vocab_response, parse_script_response};
pub use session::{
    LessonSession, VocabField, VOCAB_SLOTS,
    MSG_CONTEXT_REQUIRED, MSG_VOCAB_REQUIRED,
    MSG_IMAGE_FAILED, MSG_VOCAB_FAILED, MSG_SCRIPT_FAILED,
};
