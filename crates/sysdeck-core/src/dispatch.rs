//! Turning an action string into a running process.
//!
//! Every entry goes through [`plan`], which picks one of three strategies:
//!
//! - **Direct**: the action calls the URL opener or is an `https://` link.
//! - **Wrapped**: a bare command; it is run inside the terminal emulator
//!   (`<terminal> -e '<action>'`) so its output stays visible.
//! - **Verbatim**: already a terminal invocation or an absolute path.
//!
//! The resulting command line is handed to `<shell> -c`. Spawning is
//! fire-and-forget: [`Dispatcher::execute`] never reports the outcome to its
//! caller, and a failed spawn is only logged.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::process::{Command, Stdio};

// ---------------------------------------------------------------------------
// DispatchConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchConfig {
    #[serde(default = "default_terminal")]
    pub terminal: String,
    #[serde(default = "default_url_opener")]
    pub url_opener: String,
    #[serde(default = "default_shell")]
    pub shell: String,
}

fn default_terminal() -> String {
    "xfce4-terminal".to_string()
}

fn default_url_opener() -> String {
    "xdg-open".to_string()
}

fn default_shell() -> String {
    "sh".to_string()
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            terminal: default_terminal(),
            url_opener: default_url_opener(),
            shell: default_shell(),
        }
    }
}

// ---------------------------------------------------------------------------
// Planning
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Direct,
    Wrapped,
    Verbatim,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Direct => "direct",
            Strategy::Wrapped => "wrapped",
            Strategy::Verbatim => "verbatim",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invocation {
    pub strategy: Strategy,
    pub command_line: String,
}

/// Decide how `action` is launched. Pure; nothing is spawned.
pub fn plan(action: &str, config: &DispatchConfig) -> Invocation {
    let opens_url = (!config.url_opener.is_empty() && action.starts_with(&config.url_opener))
        || action.starts_with("https://");
    if opens_url {
        return Invocation {
            strategy: Strategy::Direct,
            command_line: action.to_string(),
        };
    }

    if !action.starts_with(&config.terminal) && !action.starts_with('/') {
        return Invocation {
            strategy: Strategy::Wrapped,
            command_line: format!("{} -e '{}'", config.terminal, quote_inner(action)),
        };
    }

    Invocation {
        strategy: Strategy::Verbatim,
        command_line: action.to_string(),
    }
}

/// Escape `'` for use inside a single-quoted shell word.
fn quote_inner(action: &str) -> String {
    action.replace('\'', r"'\''")
}

// ---------------------------------------------------------------------------
// Spawning
// ---------------------------------------------------------------------------

/// Launches a shell command line without waiting for it.
pub trait Spawner {
    fn spawn(&self, shell: &str, command_line: &str) -> std::io::Result<()>;
}

/// Runs `<shell> -c <command_line>` as a real child process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellSpawner;

impl Spawner for ShellSpawner {
    fn spawn(&self, shell: &str, command_line: &str) -> std::io::Result<()> {
        let mut child = Command::new(shell)
            .arg("-c")
            .arg(command_line)
            .stdin(Stdio::null())
            .spawn()?;
        // Reap in the background so long-running menus don't collect zombies.
        std::thread::spawn(move || {
            let _ = child.wait();
        });
        Ok(())
    }
}

pub struct Dispatcher<S: Spawner = ShellSpawner> {
    config: DispatchConfig,
    spawner: S,
}

impl Dispatcher<ShellSpawner> {
    pub fn new(config: DispatchConfig) -> Self {
        Self::with_spawner(config, ShellSpawner)
    }
}

impl<S: Spawner> Dispatcher<S> {
    pub fn with_spawner(config: DispatchConfig, spawner: S) -> Self {
        Self { config, spawner }
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    pub fn spawner(&self) -> &S {
        &self.spawner
    }

    pub fn plan(&self, action: &str) -> Invocation {
        plan(action, &self.config)
    }

    /// Launch `action` and return immediately. Failures are logged, not returned.
    pub fn execute(&self, action: &str) {
        let invocation = self.plan(action);
        tracing::info!(
            strategy = %invocation.strategy,
            command = %invocation.command_line,
            "dispatching"
        );
        if let Err(e) = self.spawner.spawn(&self.config.shell, &invocation.command_line) {
            tracing::warn!(
                shell = %self.config.shell,
                command = %invocation.command_line,
                "spawn failed: {e}"
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Tool checks
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct ToolStatus {
    pub role: &'static str,
    pub name: String,
    pub path: Option<PathBuf>,
}

impl ToolStatus {
    pub fn found(&self) -> bool {
        self.path.is_some()
    }
}

/// Look up the terminal, URL opener, and shell on `PATH`.
pub fn check_tools(config: &DispatchConfig) -> Vec<ToolStatus> {
    [
        ("terminal", &config.terminal),
        ("url_opener", &config.url_opener),
        ("shell", &config.shell),
    ]
    .into_iter()
    .map(|(role, name)| ToolStatus {
        role,
        name: name.clone(),
        path: which::which(name).ok(),
    })
    .collect()
}
