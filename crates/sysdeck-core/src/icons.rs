use crate::paths;
use std::path::{Path, PathBuf};

const EXTENSIONS: &[&str] = &["png", "svg", "xpm"];

/// Themes nest icons as `<theme>/<size>/<context>/<name>.png`.
const MAX_DEPTH: usize = 4;

/// Finds icon files by theme name. Lookup never fails loudly: unreadable
/// directories are skipped and a miss is just `None`.
#[derive(Debug, Clone)]
pub struct IconResolver {
    roots: Vec<PathBuf>,
}

impl IconResolver {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    pub fn system() -> Self {
        Self::new(paths::icon_search_dirs())
    }

    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        if name.is_empty() || name.contains('/') {
            return None;
        }
        self.roots.iter().find_map(|root| search(root, name, 0))
    }
}

fn search(dir: &Path, name: &str, depth: usize) -> Option<PathBuf> {
    let entries = std::fs::read_dir(dir).ok()?;
    let mut subdirs = Vec::new();

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            subdirs.push(path);
        } else if is_icon_named(&path, name) {
            return Some(path);
        }
    }

    if depth >= MAX_DEPTH {
        return None;
    }
    // read_dir order is unspecified
    subdirs.sort();
    subdirs
        .iter()
        .find_map(|sub| search(sub, name, depth + 1))
}

fn is_icon_named(path: &Path, name: &str) -> bool {
    let stem_matches = path.file_stem().and_then(|s| s.to_str()) == Some(name);
    let ext_ok = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| EXTENSIONS.contains(&e));
    stem_matches && ext_ok
}
