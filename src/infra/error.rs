use std::path::PathBuf;

use thiserror::Error;

use crate::domain::color::ColorParseError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to read config file at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to read catalog file at {path}: {source}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog file at {path}: {source}")]
    CatalogParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid catalog: {0}")]
    Catalog(#[from] CatalogError),
    #[error("failed to open log file at {path}: {source}")]
    LogFileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to initialize logging: {0}")]
    LoggingInit(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
    #[error(transparent)]
    Other(anyhow::Error),
}

/// Integrity violations detected while building a group store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("duplicate group id {0:?}")]
    DuplicateGroupId(String),
    #[error("duplicate message id {message_id:?} in group {group_id:?}")]
    DuplicateMessageId {
        group_id: String,
        message_id: String,
    },
    #[error("message history for unknown group {0:?}")]
    OrphanHistory(String),
    #[error("group {group_id:?} has an invalid color: {source}")]
    InvalidColor {
        group_id: String,
        #[source]
        source: ColorParseError,
    },
}
