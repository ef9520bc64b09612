use crate::context::DevlogContext;
use crate::store::LogStore;
use anyhow::{Context, Result};
use colored::Colorize;

pub async fn handle_list(ctx: &DevlogContext) -> Result<()> {
    let records = LogStore::new(ctx.log_dir())
        .list_all()
        .await
        .context("Failed to read logs")?;

    if records.is_empty() {
        println!("{}", "No logs found.".yellow());
        return Ok(());
    }

    for record in &records {
        print!("{}", record.to_console_block(false));
    }
    Ok(())
}
