use crate::dispatch::DispatchConfig;
use crate::error::{Result, SysdeckError};
use crate::registry::{builtin_categories, Registry};
use crate::types::{Category, ConfigWarning};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_VERSION: u32 = 1;
pub const DEFAULT_TITLE: &str = "StormOS Utilities v6.1";

// ---------------------------------------------------------------------------
// Config (top-level)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub dispatch: DispatchConfig,
    /// Replaces the built-in tabs when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<Category>>,
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            title: default_title(),
            dispatch: DispatchConfig::default(),
            categories: None,
        }
    }
}

impl Config {
    /// Defaults with the built-in tabs written out, for `config init`.
    pub fn with_builtin_categories() -> Self {
        Self {
            categories: Some(builtin_categories()),
            ..Self::default()
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SysdeckError::ConfigNotFound(path.to_path_buf()));
        }
        let data = std::fs::read_to_string(path)?;
        Self::parse(&data)
    }

    /// Like [`Config::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using built-in tables");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn parse(data: &str) -> Result<Self> {
        let cfg: Config = serde_yaml::from_str(data)?;
        if cfg.version != CONFIG_VERSION {
            return Err(SysdeckError::UnsupportedVersion(cfg.version));
        }
        Ok(cfg)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(path, data.as_bytes())
    }

    pub fn registry(&self) -> Registry {
        match &self.categories {
            Some(cats) => Registry::new(cats.clone()),
            None => Registry::builtin(),
        }
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if self.dispatch.terminal.trim().is_empty() {
            warnings.push(ConfigWarning::error("dispatch.terminal is empty"));
        }
        if self.dispatch.shell.trim().is_empty() {
            warnings.push(ConfigWarning::error("dispatch.shell is empty"));
        }
        if self.dispatch.url_opener.trim().is_empty() {
            warnings.push(ConfigWarning::warning(
                "dispatch.url_opener is empty; only https:// actions open directly",
            ));
        }

        if matches!(&self.categories, Some(c) if c.is_empty()) {
            warnings.push(ConfigWarning::warning(
                "categories is an empty list; the menu will have no tabs",
            ));
        }

        warnings.extend(self.registry().validate());
        warnings
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
