use anyhow::Context;
use std::path::{Path, PathBuf};

/// Resolve the config file location.
///
/// Priority:
/// 1. `--config` flag / `SYSDECK_CONFIG` env var (passed in as `explicit`)
/// 2. `$XDG_CONFIG_HOME/sysdeck/config.yaml`
/// 3. `~/.config/sysdeck/config.yaml`
///
/// The file does not have to exist.
pub fn resolve_config_path(explicit: Option<&Path>) -> anyhow::Result<PathBuf> {
    if let Some(p) = explicit {
        return Ok(p.to_path_buf());
    }
    sysdeck_core::paths::default_config_path().context("cannot locate the config directory")
}
