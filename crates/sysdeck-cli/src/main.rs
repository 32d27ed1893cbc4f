mod app;
mod cmd;
mod config_path;
mod output;

use anyhow::Context;
use app::AppContext;
use clap::{Parser, Subcommand};
use cmd::config::ConfigSubcommand;
use std::path::PathBuf;
use sysdeck_core::config::Config;

#[derive(Parser)]
#[command(
    name = "sysdeck",
    about = "Tabbed launcher for maintenance commands, installers, and links",
    version,
    propagate_version = true
)]
struct Cli {
    /// Config file (default: $XDG_CONFIG_HOME/sysdeck/config.yaml)
    #[arg(long, global = true, env = "SYSDECK_CONFIG")]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive tabbed menu (default)
    Menu,

    /// List tabs and how many entries each holds
    List,

    /// Show the entries of one tab
    Show {
        /// Tab name, slug, or 1-based position
        category: String,

        /// Resolve icon hints against the installed icon themes
        #[arg(long)]
        icons: bool,
    },

    /// Launch one entry
    Run {
        /// Tab name, slug, or 1-based position
        category: String,

        /// Entry label, slug, or 1-based position
        entry: String,

        /// Print the derived command line instead of launching it
        #[arg(long)]
        dry_run: bool,
    },

    /// Launch an arbitrary action string
    Exec {
        action: String,

        /// Print the derived command line instead of launching it
        #[arg(long)]
        dry_run: bool,
    },

    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },

    /// Check that the terminal, URL opener, and shell are installed
    Doctor,
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        None | Some(Commands::Menu) => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let path = config_path::resolve_config_path(cli.config.as_deref())?;

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Config { subcommand } => cmd::config::run(&path, subcommand, cli.json),
        command => {
            let config = Config::load_or_default(&path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            let ctx = AppContext::from_config(&config);
            run_with_context(&ctx, command, cli.json)
        }
    }
}

fn run_with_context(ctx: &AppContext, command: Commands, json: bool) -> anyhow::Result<()> {
    match command {
        Commands::Menu => cmd::menu::run(ctx),
        Commands::List => cmd::list::run(ctx, json),
        Commands::Show { category, icons } => cmd::show::run(ctx, &category, icons, json),
        Commands::Run {
            category,
            entry,
            dry_run,
        } => cmd::launch::run_entry(ctx, &category, &entry, dry_run, json),
        Commands::Exec { action, dry_run } => cmd::launch::run_action(ctx, &action, dry_run, json),
        Commands::Doctor => cmd::doctor::run(ctx, json),
        Commands::Config { .. } => unreachable!("config subcommands run before loading"),
    }
}
