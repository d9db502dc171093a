// src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Engine(#[from] keystats_engine::error::EngineError),

    #[error("Failed to open '{path}': {source}")]
    Open {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Generate error: {0}")]
    Generate(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
