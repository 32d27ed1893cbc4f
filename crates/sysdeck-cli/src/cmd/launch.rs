use crate::app::AppContext;
use crate::output::print_json;
use anyhow::Context;
use sysdeck_core::dispatch::Spawner;

// ---------------------------------------------------------------------------
// run <category> <entry>
// ---------------------------------------------------------------------------

pub fn run_entry<S: Spawner>(
    ctx: &AppContext<S>,
    category: &str,
    entry: &str,
    dry_run: bool,
    json: bool,
) -> anyhow::Result<()> {
    let found = ctx
        .registry
        .entry(category, entry)
        .context("run 'sysdeck show <tab>' to see available entries")?;
    tracing::debug!(label = %found.label, "entry resolved");
    run_action(ctx, &found.action, dry_run, json)
}

// ---------------------------------------------------------------------------
// exec <action>
// ---------------------------------------------------------------------------

pub fn run_action<S: Spawner>(
    ctx: &AppContext<S>,
    action: &str,
    dry_run: bool,
    json: bool,
) -> anyhow::Result<()> {
    if action.trim().is_empty() {
        anyhow::bail!("action is empty");
    }

    if !dry_run {
        // Fire-and-forget: the outcome of the child is never reported here.
        ctx.dispatcher.execute(action);
        return Ok(());
    }

    let invocation = ctx.dispatcher.plan(action);
    if json {
        print_json(&serde_json::json!({
            "action": action,
            "strategy": invocation.strategy,
            "shell": ctx.dispatcher.config().shell,
            "command_line": invocation.command_line,
        }))?;
    } else {
        println!("strategy: {}", invocation.strategy);
        println!("command:  {}", invocation.command_line);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::testing::RecordingSpawner;
    use sysdeck_core::config::Config;

    fn ctx() -> AppContext<RecordingSpawner> {
        AppContext::with_spawner(&Config::default(), RecordingSpawner::default())
    }

    #[test]
    fn run_entry_dispatches_wrapped_command() {
        let ctx = ctx();
        run_entry(&ctx, "Maintenance", "System Updates", false, false).unwrap();
        assert_eq!(
            ctx.dispatcher.spawner().calls(),
            ["xfce4-terminal -e 'sudo pacman -Syyu --noconfirm'"]
        );
    }

    #[test]
    fn dry_run_spawns_nothing() {
        let ctx = ctx();
        run_action(&ctx, "xdg-open https://archlinux.org/", true, false).unwrap();
        assert!(ctx.dispatcher.spawner().calls().is_empty());
    }

    #[test]
    fn unknown_entry_fails_without_spawning() {
        let ctx = ctx();
        let err = run_entry(&ctx, "printers", "fax", false, false).unwrap_err();
        assert!(format!("{err:#}").contains("entry 'fax' not found in category 'Printers'"));
        assert!(ctx.dispatcher.spawner().calls().is_empty());
    }

    #[test]
    fn empty_action_rejected() {
        assert!(run_action(&ctx(), "   ", false, false).is_err());
    }
}
