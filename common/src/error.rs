//! Định nghĩa kiểu lỗi

use thiserror::Error;

/// Kiểu lỗi dùng chung
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Alias cho Result
pub type Result<T> = std::result::Result<T, Error>;
