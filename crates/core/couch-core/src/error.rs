use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Generic IO error: {0}")]
    IoGeneric(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing translation for '{key}' in locale '{locale}'")]
    MissingTranslation { locale: String, key: String },

    #[error("Unknown filter: {0}")]
    UnknownFilter(String),

    #[error("Filter already registered: {0}")]
    DuplicateFilter(String),

    #[error("Invalid filter expression '{expr}': {reason}")]
    FilterSyntax { expr: String, reason: String },

    #[error("Invalid template at byte {offset}: {reason}")]
    TemplateSyntax { offset: usize, reason: String },
}

pub type AppResult<T> = Result<T, AppError>;
