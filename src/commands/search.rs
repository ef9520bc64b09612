use crate::context::DevlogContext;
use crate::store::LogStore;
use anyhow::{Context, Result};
use colored::Colorize;

pub async fn handle_search(ctx: &DevlogContext, query: &str) -> Result<()> {
    let results = LogStore::new(ctx.log_dir())
        .search(query)
        .await
        .context("Failed to search logs")?;

    if results.is_empty() {
        println!("{}", format!("No logs found matching \"{query}\".").yellow());
        return Ok(());
    }

    for record in &results {
        print!("{}", record.to_console_block(true));
    }
    Ok(())
}
