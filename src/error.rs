//! 错误类型

use crate::parser::ParseError;
use std::path::PathBuf;

/// 导入过程中的错误
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Resource directory {0} does not exist")]
    MissingResourceDir(PathBuf),

    #[error("Artifact store failure: {0}")]
    Store(String),
}

impl ImportError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, ImportError>;
