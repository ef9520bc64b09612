use crate::context::{DevlogContext, TimelineFormat};
use crate::errors::DevlogError;
use crate::store::{sort_chronologically, LogStore};
use crate::timeline::{render_html, render_markdown};
use anyhow::{Context, Result};
use colored::Colorize;
use tokio::fs;

pub async fn handle_timeline(ctx: &DevlogContext, format: TimelineFormat) -> Result<()> {
    let mut records = LogStore::new(ctx.log_dir())
        .list_all()
        .await
        .context("Failed to read logs")?;

    if records.is_empty() {
        println!("{}", "No logs found.".yellow());
        return Ok(());
    }

    sort_chronologically(&mut records);
    let title = &ctx.config.timeline.title;
    let content = match format {
        TimelineFormat::Markdown => render_markdown(&records, title),
        TimelineFormat::Html => render_html(&records, title),
    };

    let devlog_dir = ctx.devlog_dir();
    fs::create_dir_all(&devlog_dir)
        .await
        .map_err(|e| DevlogError::filesystem(&devlog_dir, e))?;
    let out_path = ctx.timeline_path(format);
    fs::write(&out_path, content)
        .await
        .map_err(|e| DevlogError::filesystem(&out_path, e))?;

    let label = match format {
        TimelineFormat::Markdown => "Markdown",
        TimelineFormat::Html => "HTML",
    };
    println!(
        "{} {}",
        format!("✅ {label} timeline generated at").green(),
        out_path.display()
    );
    Ok(())
}
