use crate::output::print_json;
use anyhow::Context;
use clap::Subcommand;
use std::path::Path;
use sysdeck_core::config::Config;
use sysdeck_core::types::WarnLevel;

// ---------------------------------------------------------------------------
// Subcommand types
// ---------------------------------------------------------------------------

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Print the config file location
    Path,

    /// Print the effective config (built-in tabs when none are configured)
    Show,

    /// Write a config file containing the built-in tabs
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Validate the config for common mistakes
    Validate,
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

pub fn run(path: &Path, subcmd: ConfigSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        ConfigSubcommand::Path => show_path(path, json),
        ConfigSubcommand::Show => show(path, json),
        ConfigSubcommand::Init { force } => init(path, force),
        ConfigSubcommand::Validate => validate(path, json),
    }
}

fn load(path: &Path) -> anyhow::Result<Config> {
    Config::load_or_default(path).with_context(|| format!("failed to load {}", path.display()))
}

// ---------------------------------------------------------------------------
// path
// ---------------------------------------------------------------------------

fn show_path(path: &Path, json: bool) -> anyhow::Result<()> {
    if json {
        return print_json(&serde_json::json!({
            "path": path,
            "exists": path.exists(),
        }));
    }
    println!("{}", path.display());
    Ok(())
}

// ---------------------------------------------------------------------------
// show
// ---------------------------------------------------------------------------

fn show(path: &Path, json: bool) -> anyhow::Result<()> {
    let mut config = load(path)?;
    if config.categories.is_none() {
        config.categories = Some(config.registry().into_categories());
    }
    if json {
        return print_json(&config);
    }
    print!("{}", serde_yaml::to_string(&config)?);
    Ok(())
}

// ---------------------------------------------------------------------------
// init
// ---------------------------------------------------------------------------

fn init(path: &Path, force: bool) -> anyhow::Result<()> {
    let config = Config::with_builtin_categories();
    let data = serde_yaml::to_string(&config)?;

    let written = if force {
        sysdeck_core::io::atomic_write(path, data.as_bytes())?;
        true
    } else {
        sysdeck_core::io::write_if_missing(path, data.as_bytes())?
    };

    if written {
        println!("Wrote {}", path.display());
    } else {
        println!("{} already exists; use --force to overwrite.", path.display());
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// validate
// ---------------------------------------------------------------------------

fn validate(path: &Path, json: bool) -> anyhow::Result<()> {
    let config = load(path)?;
    let warnings = config.validate();

    if json {
        print_json(&serde_json::json!({ "warnings": warnings }))?;
    } else if warnings.is_empty() {
        println!("Config is valid. No warnings.");
    } else {
        for w in &warnings {
            let prefix = match w.level {
                WarnLevel::Warning => "warning",
                WarnLevel::Error => "error",
            };
            println!("[{prefix}] {}", w.message);
        }
    }

    if warnings.iter().any(|w| w.level == WarnLevel::Error) {
        anyhow::bail!("config validation found errors");
    }
    Ok(())
}
