use crate::app::AppContext;
use crate::output::{print_json, print_table};
use anyhow::Context;
use sysdeck_core::dispatch::Spawner;
use sysdeck_core::icons::IconResolver;

pub fn run<S: Spawner>(
    ctx: &AppContext<S>,
    category: &str,
    icons: bool,
    json: bool,
) -> anyhow::Result<()> {
    let cat = ctx
        .registry
        .category(category)
        .context("run 'sysdeck list' to see available tabs")?;
    let resolver = icons.then(IconResolver::system);
    let icon_path = |name: Option<&String>| -> Option<String> {
        let resolver = resolver.as_ref()?;
        resolver.resolve(name?).map(|p| p.display().to_string())
    };

    if json {
        let entries: Vec<serde_json::Value> = cat
            .entries
            .iter()
            .map(|e| {
                let mut value = serde_json::json!({
                    "label": e.label,
                    "slug": e.slug(),
                    "action": e.action,
                    "icon": e.icon,
                    "command_line": ctx.dispatcher.plan(&e.action).command_line,
                });
                if icons {
                    value["icon_path"] = serde_json::json!(icon_path(e.icon.as_ref()));
                }
                value
            })
            .collect();
        return print_json(&serde_json::json!({
            "name": cat.name,
            "entries": entries,
        }));
    }

    println!("{}", cat.name);
    println!();
    if cat.entries.is_empty() {
        println!("No entries.");
        return Ok(());
    }

    let mut headers = vec!["#", "LABEL", "ACTION", "ICON"];
    if icons {
        headers.push("ICON PATH");
    }
    let rows: Vec<Vec<String>> = cat
        .entries
        .iter()
        .enumerate()
        .map(|(i, e)| {
            let mut row = vec![
                (i + 1).to_string(),
                e.label.clone(),
                e.action.clone(),
                e.icon.clone().unwrap_or_else(|| "-".to_string()),
            ];
            if icons {
                row.push(icon_path(e.icon.as_ref()).unwrap_or_else(|| "-".to_string()));
            }
            row
        })
        .collect();
    print_table(&headers, rows);
    Ok(())
}
