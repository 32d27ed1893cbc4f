use crate::error::{Result, SysdeckError};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const APP_DIR: &str = "sysdeck";
pub const CONFIG_FILE: &str = "config.yaml";

pub const DEFAULT_DATA_DIRS: &str = "/usr/local/share:/usr/share";
pub const PIXMAPS_DIR: &str = "/usr/share/pixmaps";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn home_dir() -> Result<PathBuf> {
    home::home_dir().ok_or(SysdeckError::HomeNotFound)
}

/// Non-empty, absolute value of an XDG variable. Relative values are ignored
/// per the XDG base directory rules.
fn xdg_var(name: &str) -> Option<PathBuf> {
    std::env::var_os(name)
        .map(PathBuf::from)
        .filter(|p| p.is_absolute())
}

/// `$XDG_CONFIG_HOME`, falling back to `~/.config`.
pub fn config_home() -> Result<PathBuf> {
    match xdg_var("XDG_CONFIG_HOME") {
        Some(p) => Ok(p),
        None => Ok(home_dir()?.join(".config")),
    }
}

/// `~/.config/sysdeck/config.yaml` (or the `XDG_CONFIG_HOME` equivalent).
pub fn default_config_path() -> Result<PathBuf> {
    Ok(config_home()?.join(APP_DIR).join(CONFIG_FILE))
}

/// Icon search roots in lookup order: user icons, each XDG data dir, pixmaps.
pub fn icon_search_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();

    let data_home = xdg_var("XDG_DATA_HOME")
        .or_else(|| home::home_dir().map(|h| h.join(".local/share")));
    if let Some(d) = data_home {
        dirs.push(d.join("icons"));
    }

    let data_dirs = std::env::var("XDG_DATA_DIRS")
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_DATA_DIRS.to_string());
    dirs.extend(data_dirs_icons(&data_dirs));

    dirs.push(PathBuf::from(PIXMAPS_DIR));
    dirs
}

fn data_dirs_icons(data_dirs: &str) -> impl Iterator<Item = PathBuf> + '_ {
    data_dirs
        .split(':')
        .map(Path::new)
        .filter(|p| p.is_absolute())
        .map(|p| p.join("icons"))
}
