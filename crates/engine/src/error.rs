use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to read input: {0}")]
    Read(#[source] std::io::Error),

    #[error("Line {line_number} is longer than {limit} bytes")]
    LineTooLong { line_number: u64, limit: usize },

    #[error("Malformed record on line {line_number}: missing ';' in {line:?}")]
    MalformedRecord { line_number: u64, line: String },

    #[error("Malformed number on line {line_number}: {text:?}")]
    MalformedNumber { line_number: u64, text: String },

    #[error("Key {key:?} is not valid UTF-8 and cannot be written as JSON")]
    NonUtf8Key { key: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write report: {0}")]
    Write(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
