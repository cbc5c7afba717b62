use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, WeeklyError>;

#[derive(Error, Debug)]
pub enum WeeklyError {
    #[error("Path error: {path}: {source}")]
    Path {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Path error: {0} is not a directory")]
    NotADirectory(PathBuf),
    #[error("Subprocess error: `{command}` {reason}")]
    Subprocess { command: String, reason: String },
    #[error("Config error: {0}")]
    Config(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl WeeklyError {
    pub fn path(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        WeeklyError::Path {
            path: path.into(),
            source,
        }
    }
}
