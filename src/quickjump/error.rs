use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuickJumpError {
    #[error("Bookmark database {} is corrupt: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("No such bookmark: {0}")]
    NotFound(String),

    #[error("No free bookmark key for {path} after {attempts} attempts")]
    CollisionExhausted { path: String, attempts: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(serde_json::Error),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, QuickJumpError>;
