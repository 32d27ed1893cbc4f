use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// ActionEntry
// ---------------------------------------------------------------------------

/// One launcher button: what the user sees and the command line it runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionEntry {
    pub label: String,
    pub action: String,
    /// Freedesktop icon theme name, e.g. `system-software-update`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl ActionEntry {
    pub fn new(label: impl Into<String>, action: impl Into<String>, icon: Option<&str>) -> Self {
        Self {
            label: label.into(),
            action: action.into(),
            icon: icon.map(str::to_string),
        }
    }

    pub fn slug(&self) -> String {
        slugify(&self.label)
    }

    /// Hover text shown for the entry in the menu.
    pub fn tooltip(&self) -> String {
        format!("Execute: {}", self.action)
    }
}

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// A named tab. Entry order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub entries: Vec<ActionEntry>,
}

impl Category {
    pub fn new(name: impl Into<String>, entries: Vec<ActionEntry>) -> Self {
        Self {
            name: name.into(),
            entries,
        }
    }

    pub fn slug(&self) -> String {
        slugify(&self.name)
    }
}

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

impl ConfigWarning {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: WarnLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: WarnLevel::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// Slugs
// ---------------------------------------------------------------------------

static NON_ALNUM_RE: OnceLock<Regex> = OnceLock::new();

fn non_alnum_re() -> &'static Regex {
    NON_ALNUM_RE.get_or_init(|| Regex::new(r"[^a-z0-9]+").unwrap())
}

/// Lowercase `text` and collapse every non-alphanumeric run into one `-`.
pub fn slugify(text: &str) -> String {
    let lower = text.to_lowercase();
    non_alnum_re()
        .replace_all(&lower, "-")
        .trim_matches('-')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("Games/Utils"), "games-utils");
        assert_eq!(slugify("Add/Remove Software"), "add-remove-software");
        assert_eq!(slugify("  Arch   University "), "arch-university");
        assert_eq!(slugify("Nvidia-390xx"), "nvidia-390xx");
        assert_eq!(slugify("///"), "");
    }

    #[test]
    fn icon_omitted_when_absent() {
        let entry = ActionEntry::new("ReadMe", "/usr/local/bin/data/about", None);
        let yaml = serde_yaml::to_string(&entry).unwrap();
        assert!(!yaml.contains("icon"));
    }

    #[test]
    fn tooltip_names_the_action() {
        let entry = ActionEntry::new("Logout", "xfce4-session-logout", Some("system-log-out"));
        assert_eq!(entry.tooltip(), "Execute: xfce4-session-logout");
    }
}
