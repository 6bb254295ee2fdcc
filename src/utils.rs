use std::io;
use thiserror::Error;

/// Full-width period closing every sentence, paragraph and text block
pub const TERMINATOR: char = '。';

/// Custom error types for the lorem generator
#[derive(Error, Debug)]
pub enum LoremError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Unknown formatter: {0}")]
    UnknownFormatter(String),

    #[error("Unknown locale: {0}")]
    UnknownLocale(String),
}

/// Result type for lorem operations
pub type Result<T> = std::result::Result<T, LoremError>;

/// Number of characters (not bytes) in `text`
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Whether `text` contains any Unicode whitespace
pub fn has_whitespace(text: &str) -> bool {
    text.chars().any(char::is_whitespace)
}

/// Trait extension for Option<T> to convert to LoremError
pub trait OptionExt<T> {
    fn ok_or_locale_err<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_locale_err<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| LoremError::UnknownLocale(f()))
    }
}
