//! src/git.rs

use crate::errors::DevlogError;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;

/// Metadata of the most recent commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInfo {
    pub short_hash: String,
    pub message: String,
}

pub async fn run_git_command(dir: Option<&Path>, args: &[&str]) -> Result<String> {
    let mut command = Command::new("git");
    command
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    if let Some(dir) = dir {
        command.current_dir(dir);
    }

    let output = command
        .output()
        .await
        .context("Failed to execute git command")?;

    if output.status.success() {
        Ok(String::from_utf8(output.stdout).context("Failed to parse git command output")?)
    } else {
        let stderr = String::from_utf8(output.stderr)
            .unwrap_or_else(|_| "Could not read stderr".to_string());
        Err(DevlogError::GitCommand {
            args: args.join(" "),
            stderr,
        }
        .into())
    }
}

/// Absolute path of the working tree containing the current directory.
pub async fn get_repo_root() -> Result<PathBuf> {
    let output = run_git_command(None, &["rev-parse", "--show-toplevel"])
        .await
        .map_err(|e| {
            log::debug!("Repository probe failed: {e:#}");
            DevlogError::NotARepository
        })?;
    Ok(PathBuf::from(output.trim()))
}

pub async fn get_short_hash(repo_root: &Path) -> Result<String> {
    let output = run_git_command(Some(repo_root), &["rev-parse", "--short", "HEAD"]).await?;
    Ok(output.trim().to_string())
}

pub async fn get_last_commit_message(repo_root: &Path) -> Result<String> {
    let output = run_git_command(Some(repo_root), &["log", "-1", "--pretty=%B"]).await?;
    Ok(output.trim().to_string())
}

/// Reads `(short hash, full message)` of HEAD. Any git failure, including a
/// repository without commits, surfaces as `NotARepository`.
pub async fn get_commit_info(repo_root: &Path) -> Result<CommitInfo> {
    let short_hash = get_short_hash(repo_root)
        .await
        .map_err(|_| DevlogError::NotARepository)?;
    let message = get_last_commit_message(repo_root)
        .await
        .map_err(|_| DevlogError::NotARepository)?;

    Ok(CommitInfo {
        short_hash,
        message,
    })
}
