//! src/hook.rs

use crate::context::DevlogContext;
use crate::errors::DevlogError;
use anyhow::Result;
use std::path::{Path, PathBuf};
use tokio::fs;

pub const HOOK_NAME: &str = "post-commit";

/// How to open a terminal on one `uname` family. `{dir}` is the quoted
/// repository path, `{raw_dir}` the unquoted one, `{cmd}` the devlog command.
struct LaunchRule {
    pattern: &'static str,
    body: &'static str,
}

const LAUNCH_RULES: &[LaunchRule] = &[
    LaunchRule {
        pattern: "Darwin",
        body: r#"      osascript <<EOF
tell application "Terminal"
  do script "cd {dir}; {cmd}; echo Done. Press any key to exit; read -n 1"
  activate
end tell
EOF"#,
    },
    LaunchRule {
        pattern: "Linux",
        body: r#"      if command -v gnome-terminal > /dev/null; then
        gnome-terminal --working-directory={dir} -- bash -c "{cmd}; echo; echo 'Done. Press any key to exit'; read -n 1; exec bash"
      elif command -v x-terminal-emulator > /dev/null; then
        x-terminal-emulator -e bash -c "cd {dir}; {cmd}; echo; echo 'Done. Press any key to exit'; read -n 1; exec bash"
      else
        echo "Please run '{cmd}' manually, no supported terminal found."
      fi"#,
    },
    LaunchRule {
        pattern: "MINGW*|MSYS*|CYGWIN*",
        body: r#"      start "" cmd /k "cd /d {raw_dir} && {cmd} && pause""#,
    },
    LaunchRule {
        pattern: "*",
        body: r#"      echo "Unsupported OS. Please run '{cmd}' manually.""#,
    },
];

/// Result of a hook installation.
#[derive(Debug)]
pub struct HookInstall {
    pub hook_path: PathBuf,
    pub backup_path: Option<PathBuf>,
}

fn shell_quote(raw: &str) -> String {
    format!("'{}'", raw.replace('\'', r"'\''"))
}

/// Builds the `post-commit` script for a repository at `repo_root`.
pub fn render_hook_script(repo_root: &Path, command: &str) -> String {
    let raw_dir = repo_root.display().to_string();
    let dir = shell_quote(&raw_dir);

    let mut script = String::from("#!/bin/sh\n# Post-commit hook installed by gitdevlog\n\nopen_new_terminal() {\n  case \"$(uname)\" in\n");
    for rule in LAUNCH_RULES {
        let body = rule
            .body
            .replace("{dir}", &dir)
            .replace("{raw_dir}", &raw_dir)
            .replace("{cmd}", command);
        script.push_str(&format!("    {})\n{}\n      ;;\n", rule.pattern, body));
    }
    script.push_str("  esac\n}\n\nopen_new_terminal\n");
    script
}

/// Installs the hook, moving any existing `post-commit` aside first.
pub async fn install_post_commit_hook(ctx: &DevlogContext) -> Result<HookInstall> {
    let hooks_dir = ctx.hooks_dir();
    if !hooks_dir.is_dir() {
        log::debug!("Hooks directory {} is missing", hooks_dir.display());
        return Err(DevlogError::NotARepository.into());
    }

    let hook_path = hooks_dir.join(HOOK_NAME);
    let backup_path = if hook_path.exists() {
        let backup = hooks_dir.join(format!(
            "{HOOK_NAME}.backup-{}",
            chrono::Utc::now().timestamp_millis()
        ));
        fs::rename(&hook_path, &backup)
            .await
            .map_err(|e| DevlogError::filesystem(&hook_path, e))?;
        Some(backup)
    } else {
        None
    };

    let hook_script = render_hook_script(ctx.repo_root(), &ctx.config.hook.command);
    fs::write(&hook_path, hook_script)
        .await
        .map_err(|e| DevlogError::filesystem(&hook_path, e))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(&hook_path)
            .await
            .map_err(|e| DevlogError::filesystem(&hook_path, e))?
            .permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&hook_path, perms)
            .await
            .map_err(|e| DevlogError::filesystem(&hook_path, e))?;
    }

    Ok(HookInstall {
        hook_path,
        backup_path,
    })
}
