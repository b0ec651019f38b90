//! Pre and post hook execution

use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info};

use crate::error::HookError;

/// Shell used to interpret hook commands
pub const HOOK_SHELL: &str = "bash";

/// Run a hook command through a login shell and wait for it to finish
///
/// The child is killed if the returned future is dropped before it exits.
pub async fn run_hook(command: &str) -> Result<(), HookError> {
    debug!("Running hook: {}", command);

    let output = Command::new(HOOK_SHELL)
        .args(["-lc", command])
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .output()
        .await
        .map_err(|source| HookError::Spawn {
            command: command.to_string(),
            source,
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(HookError::Failed {
            command: command.to_string(),
            status: output.status,
            stderr,
        });
    }

    info!("Hook finished: {}", command);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_successful_hook() {
        let dir = tempdir().unwrap();
        let marker = dir.path().join("ran");
        run_hook(&format!("touch '{}'", marker.display())).await.unwrap();
        assert!(marker.exists());
    }

    #[tokio::test]
    async fn test_failing_hook_reports_status_and_stderr() {
        let err = run_hook("echo broken >&2; exit 3").await.unwrap_err();
        match err {
            HookError::Failed { status, stderr, .. } => {
                assert_eq!(status.code(), Some(3));
                assert!(stderr.ends_with("broken"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
