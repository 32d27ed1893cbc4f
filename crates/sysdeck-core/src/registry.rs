use crate::error::{Result, SysdeckError};
use crate::types::{slugify, ActionEntry, Category, ConfigWarning};
use std::collections::HashSet;

// ---------------------------------------------------------------------------
// Built-in tables
// ---------------------------------------------------------------------------

type Row = (&'static str, &'static str, &'static str);

#[rustfmt::skip]
const MAINTENANCE: &[Row] = &[
    ("Refresh Mirrors", "sudo reflector --verbose -l 20 --sort rate --save /etc/pacman.d/mirrorlist", "view-refresh"),
    ("System Updates", "sudo pacman -Syyu --noconfirm", "system-software-update"),
    ("Aur Updates", "yay -Syyu --noconfirm", "system-software-update"),
    ("Keyring Updater", "upkeyring", "system-lock-screen"),
    ("Renew Keyring", "upsystem", "system-lock-screen"),
    ("Install Teamviewer", "tinstall", "applications-internet"),
    ("Install Lshw", "sudo pacman -S lshw --noconfirm", "applications-system"),
    ("Install i2c-tools", "sudo pacman -S i2c-tools --noconfirm", "applications-system"),
    ("Nvidia Drivers", "sudo pacman -S nvidia-dkms lib32-nvidia-utils lib32-opencl-nvidia lib32-primus_vk lib32-libvdpau cuda-tools cuda opencl-nvidia primus_vk --noconfirm", "video-display"),
    ("Nvidia-390xx", "sudo pacman -S nvidia-390xx-dkms nvidia-390xx-utils opencl-nvidia-390xx --noconfirm", "video-display"),
];

#[rustfmt::skip]
const GAMES_UTILS: &[Row] = &[
    ("Steam Native", "sudo pacman -S --noconfirm steam-native-runtime gamemode", "applications-games"),
    ("Heroic Launcher", "yay -S --noconfirm heroic-games-launcher-bin gamemode", "applications-games"),
    ("Lutris Launcher", "sudo pacman -S --noconfirm lutris gamemode", "applications-games"),
    ("ProtonGE Updater", "yay -S --noconfirm proton-community-updater", "applications-games"),
    ("Mangohud/Goverlay", "yay -S --noconfirm mangohud goverlay-bin", "applications-games"),
    ("Bottles Launcher", "yay -S --noconfirm bottles", "applications-games"),
    ("Warpinator", "sudo pacman -S warpinator --noconfirm", "applications-internet"),
    ("Calculator", "sudo pacman -S gnome-calculator --noconfirm", "accessories-calculator"),
    ("Flameshot", "sudo pacman -S flameshot --noconfirm", "accessories-screenshot"),
    ("Transmission", "sudo pacman -S transmission-gtk --noconfirm", "network-workgroup"),
    ("Thunderbird", "sudo pacman -S thunderbird --noconfirm", "internet-mail"),
    ("Xed Editor", "sudo pacman -S xed --noconfirm", "accessories-text-editor"),
    ("OnlyOffice", "yay -S onlyoffice-bin --noconfirm", "applications-office"),
    ("Media Stream", "minstaller", "multimedia-video-player"),
    ("Minimize Tray", "trayinjector", "system-run"),
];

#[rustfmt::skip]
const PRINTERS: &[Row] = &[
    ("Enable Cups", "systemctl enable --now cups", "printer"),
    ("Cups Web", "xdg-open http://localhost:631", "applications-internet"),
    ("Epson Drivers", "epsoninstaller", "printer"),
    ("HP Drivers", "eom", "printer"),
];

#[rustfmt::skip]
const ARCH_UNIVERSITY: &[Row] = &[
    ("Arch Commands", "/usr/local/bin/data/commands", "utilities-terminal"),
    ("Arch Wiki", "xdg-open https://wiki.archlinux.org/", "internet-web-browser"),
    ("Arch Website", "xdg-open https://archlinux.org/", "internet-web-browser"),
    ("Pacman Guide", "xdg-open https://wiki.archlinux.org/title/Pacman", "internet-web-browser"),
    ("AUR Website", "xdg-open https://aur.archlinux.org/", "internet-web-browser"),
    ("Pacman Tutorial", "xdg-open https://www.youtube.com/watch?v=TQaHfQrwnXo", "applications-multimedia"),
    ("Advanced Pacman", "xdg-open https://www.youtube.com/watch?v=-dEuXTMzRKs", "applications-multimedia"),
];

/// Session and system shortcuts appended below the Arch University links.
#[rustfmt::skip]
const SESSION: &[Row] = &[
    ("Logout", "xfce4-session-logout", "system-log-out"),
    ("System Info", "xfce4-terminal -H -x sudo lshw -short", "system-help"),
    ("System Resources", "xfce4-terminal -H -x top", "utilities-system-monitor"),
    ("Update Utility", "utilityup", "view-refresh"),
    ("Add/Remove Software", "/usr/bin/octopi %U", "system-software-install"),
    ("Add to Tray", "alltray -H sysconfig", "utilities-terminal"),
];

#[rustfmt::skip]
const ABOUT: &[Row] = &[
    ("Discord", "sudo pacman -S discord --noconfirm", "internet-chat"),
    ("Join Us", "xdg-open https://discord.gg/stormos", "internet-web-browser"),
    ("Distrowatch", "xdg-open https://distrowatch.com/stormos", "internet-web-browser"),
    ("Gofundme", "xdg-open https://gofund.me/stormos", "internet-web-browser"),
    ("Patreon", "xdg-open https://patreon.com/stormos", "internet-web-browser"),
    ("StormOS Site", "https://stormos.org", "internet-web-browser"),
    ("ReadMe", "/usr/local/bin/data/about", "text-x-generic"),
];

fn category(name: &str, tables: &[&[Row]]) -> Category {
    let entries = tables
        .iter()
        .flat_map(|rows| rows.iter())
        .map(|(label, action, icon)| ActionEntry::new(*label, *action, Some(icon)))
        .collect();
    Category::new(name, entries)
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Ordered set of tabs. Iteration order is tab order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    categories: Vec<Category>,
}

impl Registry {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn builtin() -> Self {
        Self::new(builtin_categories())
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn into_categories(self) -> Vec<Category> {
        self.categories
    }

    /// Find a tab by name (case-insensitive), slug, or 1-based position.
    pub fn category(&self, query: &str) -> Result<&Category> {
        find_by(&self.categories, query, |c| c.name.as_str())
            .ok_or_else(|| SysdeckError::CategoryNotFound(query.to_string()))
    }

    /// Resolve a `(category, entry)` pair in one step.
    pub fn entry(&self, category: &str, entry: &str) -> Result<&ActionEntry> {
        let cat = self.category(category)?;
        find_by(&cat.entries, entry, |e| e.label.as_str()).ok_or_else(|| {
            SysdeckError::EntryNotFound {
                category: cat.name.clone(),
                entry: entry.to_string(),
            }
        })
    }

    pub fn entry_count(&self) -> usize {
        self.categories.iter().map(|c| c.entries.len()).sum()
    }

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();
        let mut seen_categories = HashSet::new();

        for cat in &self.categories {
            if cat.name.trim().is_empty() {
                warnings.push(ConfigWarning::error("category with an empty name"));
            } else if !seen_categories.insert(cat.slug()) {
                warnings.push(ConfigWarning::warning(format!(
                    "duplicate category '{}' (only the first is reachable by name)",
                    cat.name
                )));
            }

            if cat.entries.is_empty() {
                warnings.push(ConfigWarning::warning(format!(
                    "category '{}' has no entries",
                    cat.name
                )));
            }

            let mut seen_entries = HashSet::new();
            for (i, entry) in cat.entries.iter().enumerate() {
                if entry.label.trim().is_empty() {
                    warnings.push(ConfigWarning::error(format!(
                        "entry #{} in '{}' has an empty label",
                        i + 1,
                        cat.name
                    )));
                } else if !seen_entries.insert(entry.slug()) {
                    warnings.push(ConfigWarning::warning(format!(
                        "duplicate entry '{}' in '{}'",
                        entry.label, cat.name
                    )));
                }

                if entry.action.trim().is_empty() {
                    warnings.push(ConfigWarning::error(format!(
                        "entry '{}' in '{}' has an empty action",
                        entry.label, cat.name
                    )));
                }
            }
        }

        warnings
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

pub fn builtin_categories() -> Vec<Category> {
    vec![
        category("Maintenance", &[MAINTENANCE]),
        category("Games/Utils", &[GAMES_UTILS]),
        category("Printers", &[PRINTERS]),
        category("Arch University", &[ARCH_UNIVERSITY, SESSION]),
        category("About", &[ABOUT]),
    ]
}

fn find_by<'a, T>(items: &'a [T], query: &str, name: impl Fn(&T) -> &str) -> Option<&'a T> {
    let query = query.trim();
    if let Some(hit) = items.iter().find(|it| name(it).eq_ignore_ascii_case(query)) {
        return Some(hit);
    }
    let wanted = slugify(query);
    if !wanted.is_empty() {
        if let Some(hit) = items.iter().find(|it| slugify(name(it)) == wanted) {
            return Some(hit);
        }
    }
    match query.parse::<usize>() {
        Ok(n) if n >= 1 => items.get(n - 1),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tab_order_is_stable() {
        let reg = Registry::builtin();
        let names: Vec<&str> = reg.categories().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            ["Maintenance", "Games/Utils", "Printers", "Arch University", "About"]
        );
    }

    #[test]
    fn builtin_entries_have_label_and_action() {
        for cat in Registry::builtin().categories() {
            for entry in &cat.entries {
                assert!(!entry.label.is_empty(), "empty label in {}", cat.name);
                assert!(!entry.action.is_empty(), "empty action for {}", entry.label);
            }
        }
    }

    #[test]
    fn builtin_counts() {
        let reg = Registry::builtin();
        let counts: Vec<usize> = reg.categories().iter().map(|c| c.entries.len()).collect();
        assert_eq!(counts, [10, 15, 4, 13, 7]);
        assert_eq!(reg.entry_count(), 49);
    }

    #[test]
    fn session_entries_follow_arch_links() {
        let reg = Registry::builtin();
        let cat = reg.category("Arch University").unwrap();
        assert_eq!(cat.entries[6].label, "Advanced Pacman");
        assert_eq!(cat.entries[7].label, "Logout");
        assert_eq!(cat.entries.last().unwrap().label, "Add to Tray");
    }

    #[test]
    fn builtin_is_clean() {
        assert!(Registry::builtin().validate().is_empty());
    }

    #[test]
    fn category_lookup_by_name_slug_and_position() {
        let reg = Registry::builtin();
        assert_eq!(reg.category("printers").unwrap().name, "Printers");
        assert_eq!(reg.category("games-utils").unwrap().name, "Games/Utils");
        assert_eq!(reg.category("Games/Utils").unwrap().name, "Games/Utils");
        assert_eq!(reg.category("5").unwrap().name, "About");
        assert!(matches!(
            reg.category("0"),
            Err(SysdeckError::CategoryNotFound(_))
        ));
        assert!(matches!(
            reg.category("nope"),
            Err(SysdeckError::CategoryNotFound(_))
        ));
    }

    #[test]
    fn entry_lookup() {
        let reg = Registry::builtin();
        let e = reg.entry("maintenance", "system updates").unwrap();
        assert_eq!(e.action, "sudo pacman -Syyu --noconfirm");
        let e = reg.entry("about", "7").unwrap();
        assert_eq!(e.label, "ReadMe");
        let err = reg.entry("about", "Nothing").unwrap_err();
        assert_eq!(
            err.to_string(),
            "entry 'Nothing' not found in category 'About'"
        );
    }

    #[test]
    fn validate_flags_empty_fields_and_duplicates() {
        let reg = Registry::new(vec![
            Category::new(
                "Tools",
                vec![
                    ActionEntry::new("", "htop", None),
                    ActionEntry::new("Top", "  ", None),
                    ActionEntry::new("top", "top", None),
                ],
            ),
            Category::new("tools", vec![]),
        ]);
        let warnings = reg.validate();
        let errors = warnings
            .iter()
            .filter(|w| w.level == crate::types::WarnLevel::Error)
            .count();
        assert_eq!(errors, 2);
        assert!(warnings.iter().any(|w| w.message.contains("duplicate entry 'top'")));
        assert!(warnings.iter().any(|w| w.message.contains("duplicate category")));
        assert!(warnings.iter().any(|w| w.message.contains("has no entries")));
    }
}
