use crate::app::AppContext;
use crate::output::{print_json, print_table};
use sysdeck_core::dispatch::Spawner;

pub fn run<S: Spawner>(ctx: &AppContext<S>, json: bool) -> anyhow::Result<()> {
    let categories = ctx.registry.categories();

    if json {
        return print_json(&categories);
    }

    if categories.is_empty() {
        println!("No tabs configured.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = categories
        .iter()
        .enumerate()
        .map(|(i, c)| {
            vec![
                (i + 1).to_string(),
                c.name.clone(),
                c.slug(),
                c.entries.len().to_string(),
            ]
        })
        .collect();
    print_table(&["#", "TAB", "SLUG", "ENTRIES"], rows);
    println!();
    println!("{} entries in {} tabs", ctx.registry.entry_count(), categories.len());
    Ok(())
}
