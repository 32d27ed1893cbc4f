use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SysdeckError {
    #[error("config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("category not found: {0}")]
    CategoryNotFound(String),

    #[error("entry '{entry}' not found in category '{category}'")]
    EntryNotFound { category: String, entry: String },

    #[error("unsupported config version {0} (expected 1)")]
    UnsupportedVersion(u32),

    #[error("home directory not found: set HOME environment variable")]
    HomeNotFound,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, SysdeckError>;
