use crate::app::AppContext;
use crate::output::{print_json, print_table};
use sysdeck_core::dispatch::{check_tools, Spawner};

pub fn run<S: Spawner>(ctx: &AppContext<S>, json: bool) -> anyhow::Result<()> {
    let report = check_tools(ctx.dispatcher.config());

    if json {
        print_json(&report)?;
    } else {
        let rows: Vec<Vec<String>> = report
            .iter()
            .map(|t| {
                vec![
                    t.role.to_string(),
                    t.name.clone(),
                    t.path
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "not found".to_string()),
                ]
            })
            .collect();
        print_table(&["ROLE", "COMMAND", "PATH"], rows);
    }

    for tool in report.iter().filter(|t| !t.found()) {
        tracing::warn!(role = tool.role, "'{}' is not on PATH", tool.name);
    }

    // Nothing launches without a shell; the others only break some entries.
    if report.iter().any(|t| t.role == "shell" && !t.found()) {
        anyhow::bail!("shell '{}' not found on PATH", ctx.dispatcher.config().shell);
    }
    Ok(())
}
