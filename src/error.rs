//! Error types for configuration loading, hooks and the countdown run

use std::{fmt, io, path::PathBuf, process::ExitStatus};
use thiserror::Error;

/// Errors raised while locating or loading the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("home directory could not be determined")]
    HomeDirNotFound,

    #[error("failed to read config file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Errors raised by a pre or post hook command
#[derive(Debug, Error)]
pub enum HookError {
    #[error("failed to execute `{command}`")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("`{command}` exited with {status}{}", stderr_suffix(.stderr))]
    Failed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },
}

fn stderr_suffix(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {}", stderr)
    }
}

/// Which hook failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookStage {
    Pre,
    Post,
}

impl fmt::Display for HookStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pre => f.write_str("pre"),
            Self::Post => f.write_str("post"),
        }
    }
}

/// Every way a countdown run can end other than normal completion
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{stage} hook failed")]
    Hook {
        stage: HookStage,
        #[source]
        source: HookError,
    },

    /// The user asked the run to stop. Fatal, but not a defect.
    #[error("interrupted")]
    Interrupted,

    #[error("failed to write display file {}", .path.display())]
    DisplayWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Only ever logged, never decides the exit status.
    #[error("failed to remove display file {}", .path.display())]
    DisplayRemove {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl RunError {
    /// Whether this error was caused by a cancellation request
    pub fn is_interrupted(&self) -> bool {
        matches!(self, Self::Interrupted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(err: impl std::error::Error + Send + Sync + 'static) -> String {
        format!("{:#}", anyhow::Error::new(err))
    }

    #[test]
    fn test_config_error_mentions_path() {
        let err = ConfigError::Read {
            path: PathBuf::from("/nowhere/pomodoro.toml"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };
        assert_eq!(err.to_string(), "failed to read config file /nowhere/pomodoro.toml");
        assert_eq!(
            chain(err),
            "failed to read config file /nowhere/pomodoro.toml: No such file or directory"
        );
    }

    #[test]
    fn test_hook_error_carries_stage() {
        let err = RunError::Hook {
            stage: HookStage::Post,
            source: HookError::Spawn {
                command: "notify-send done".to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "bash not found"),
            },
        };
        assert_eq!(err.to_string(), "post hook failed");
        assert_eq!(
            chain(err),
            "post hook failed: failed to execute `notify-send done`: bash not found"
        );
    }

    #[test]
    fn test_interrupted() {
        assert!(RunError::Interrupted.is_interrupted());
        assert_eq!(RunError::Interrupted.to_string(), "interrupted");
        let err = RunError::DisplayWrite {
            path: PathBuf::from("/tmp/x"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(!err.is_interrupted());
    }
}
