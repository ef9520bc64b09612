use crate::context::DevlogContext;
use crate::git;
use crate::record::{parse_annotation, Record};
use crate::store::LogStore;
use anyhow::{Context, Result};
use chrono::{SubsecRound, Utc};
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Input};
use std::io::{IsTerminal, Write};
use tokio::io::{AsyncBufReadExt, BufReader};

const PROMPT: &str = "Log (why | notes)";

/// Reads one line of `why | notes`, blocking until it is submitted. No timeout.
async fn prompt_annotation() -> Result<String> {
    println!(
        "\n{}",
        "💬 Want to log this commit? (leave empty to skip)".bold()
    );

    if std::io::stdin().is_terminal() {
        let input: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(PROMPT)
            .allow_empty(true)
            .interact_text()?;
        return Ok(input);
    }

    print!("> {PROMPT}: ");
    std::io::stdout().flush()?;
    let mut line = String::new();
    BufReader::new(tokio::io::stdin())
        .read_line(&mut line)
        .await
        .context("Failed to read annotation from stdin")?;
    Ok(line)
}

pub async fn handle_annotate(ctx: &DevlogContext) -> Result<()> {
    let commit = git::get_commit_info(ctx.repo_root()).await?;
    let timestamp = Utc::now().trunc_subsecs(3);
    log::debug!("Annotating commit {}", commit.short_hash);

    let input = prompt_annotation().await?;
    let Some((why, notes)) = parse_annotation(&input) else {
        log::info!("Empty annotation, skipping commit {}", commit.short_hash);
        return Ok(());
    };

    let record = Record::new(timestamp, commit.short_hash, commit.message, why, notes);
    let path = LogStore::new(ctx.log_dir())
        .append(&record)
        .await
        .context("Failed to save log")?;
    log::debug!("Wrote {}", path.display());

    println!("{}", "✅ Log saved to .devlog/logs/".green());
    Ok(())
}
