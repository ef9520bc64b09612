use crate::context::DevlogContext;
use crate::hook::install_post_commit_hook;
use anyhow::{Context, Result};
use colored::Colorize;

pub async fn handle_init(ctx: &DevlogContext) -> Result<()> {
    let installed = install_post_commit_hook(ctx)
        .await
        .context("Failed to install git hook")?;

    if let Some(backup) = &installed.backup_path {
        println!(
            "{}",
            format!("⚠️ Existing post-commit hook backed up to {}", backup.display()).yellow()
        );
    }
    println!(
        "{} {}",
        "✅ Git post-commit hook installed successfully at:".green(),
        installed.hook_path.display()
    );

    // the hook re-runs this command inside a fresh terminal
    let command = &ctx.config.hook.command;
    if let Some(program) = command.split_whitespace().next() {
        if which::which(program).is_err() {
            log::warn!("Hook command `{program}` was not found on PATH");
            eprintln!(
                "{}",
                format!("Warning: `{program}` is not on PATH; the hook will not be able to run `{command}`.")
                    .yellow()
            );
        }
    }

    Ok(())
}
