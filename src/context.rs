//! src/context.rs

use crate::config::{self, Config};
use crate::git;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub const DEVLOG_DIR: &str = ".devlog";
pub const LOGS_DIR: &str = "logs";

/// Output format of a rendered timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineFormat {
    Markdown,
    Html,
}

impl TimelineFormat {
    pub fn file_name(self) -> &'static str {
        match self {
            TimelineFormat::Markdown => "timeline.md",
            TimelineFormat::Html => "timeline.html",
        }
    }
}

/// Repository state resolved once at startup and handed to every command.
#[derive(Debug, Clone)]
pub struct DevlogContext {
    repo_root: PathBuf,
    pub config: Config,
}

impl DevlogContext {
    pub fn new(repo_root: impl Into<PathBuf>, config: Config) -> Self {
        Self {
            repo_root: repo_root.into(),
            config,
        }
    }

    /// Resolves the enclosing repository from the current directory and loads its config.
    pub async fn discover() -> Result<Self> {
        let repo_root = git::get_repo_root().await?;
        let config = config::load_config(&repo_root.join(DEVLOG_DIR)).await?;
        log::debug!("Resolved repository root {}", repo_root.display());
        Ok(Self::new(repo_root, config))
    }

    pub fn repo_root(&self) -> &Path {
        &self.repo_root
    }

    pub fn devlog_dir(&self) -> PathBuf {
        self.repo_root.join(DEVLOG_DIR)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.devlog_dir().join(LOGS_DIR)
    }

    pub fn hooks_dir(&self) -> PathBuf {
        self.repo_root.join(".git").join("hooks")
    }

    pub fn timeline_path(&self, format: TimelineFormat) -> PathBuf {
        self.devlog_dir().join(format.file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_hang_off_the_repository_root() {
        let ctx = DevlogContext::new("/work/project", Config::default());
        assert_eq!(ctx.log_dir(), PathBuf::from("/work/project/.devlog/logs"));
        assert_eq!(ctx.hooks_dir(), PathBuf::from("/work/project/.git/hooks"));
        assert_eq!(
            ctx.timeline_path(TimelineFormat::Markdown),
            PathBuf::from("/work/project/.devlog/timeline.md")
        );
        assert_eq!(
            ctx.timeline_path(TimelineFormat::Html),
            PathBuf::from("/work/project/.devlog/timeline.html")
        );
    }
}
