//! Lớp gọi Gemini API

pub mod gemini;
