use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnvilError {
    #[error("View [{identifier}] not found (searched {} paths)", attempted.len())]
    ViewNotFound {
        identifier: String,
        attempted: Vec<PathBuf>,
    },

    #[error("Menu not found: {0}")]
    MenuNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, AnvilError>;
