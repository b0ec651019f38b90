//! Configuration and CLI argument handling

use std::{
    ffi::OsString,
    fmt, fs,
    path::{Path, PathBuf},
};

use clap::Parser;
use serde::Deserialize;
use tracing::debug;

use crate::error::ConfigError;

/// Display file name, relative to the home directory
pub const DEFAULT_DISPLAY_FILE: &str = ".tmux-pomodoro";
/// Config file name, relative to the home directory
pub const DEFAULT_CONFIG_FILE: &str = ".tmux-pomodoro.toml";

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "tmux-pomodoro")]
#[command(about = "A pomodoro countdown that writes its remaining time to a file for tmux")]
#[command(version)]
pub struct Cli {
    /// Count down the break duration instead of the work duration
    #[arg(short = 'b', long = "break")]
    pub break_time: bool,

    /// Detach and keep counting in the background
    #[arg(short, long)]
    pub daemon: bool,

    /// File the remaining time is written to [default: ~/.tmux-pomodoro]
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Path to the config file [default: ~/.tmux-pomodoro.toml]
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Which duration to count down
    pub fn session(&self) -> Session {
        if self.break_time {
            Session::Break
        } else {
            Session::Work
        }
    }

    /// Path of the display file, falling back to the home directory
    pub fn display_path(&self) -> Result<PathBuf, ConfigError> {
        resolve(self.file.as_deref(), DEFAULT_DISPLAY_FILE)
    }

    /// Path of the config file, falling back to the home directory
    pub fn config_path(&self) -> Result<PathBuf, ConfigError> {
        resolve(self.config.as_deref(), DEFAULT_CONFIG_FILE)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Arguments that reproduce this invocation in a detached child
    ///
    /// Paths are resolved up front so the child does not depend on the
    /// parent's working directory.
    pub fn daemon_child_args(&self) -> Result<Vec<OsString>, ConfigError> {
        let mut args = Vec::new();
        if self.break_time {
            args.push(OsString::from("--break"));
        }
        if self.verbose {
            args.push(OsString::from("--verbose"));
        }
        args.push(OsString::from("--file"));
        args.push(absolute(self.display_path()?).into_os_string());
        args.push(OsString::from("--config"));
        args.push(absolute(self.config_path()?).into_os_string());
        Ok(args)
    }
}

fn resolve(explicit: Option<&Path>, default_name: &str) -> Result<PathBuf, ConfigError> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => dirs::home_dir()
            .map(|home| home.join(default_name))
            .ok_or(ConfigError::HomeDirNotFound),
    }
}

fn absolute(path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        return path;
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(&path))
        .unwrap_or(path)
}

/// Kind of session to count down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Session {
    Work,
    Break,
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Work => f.write_str("work"),
            Self::Break => f.write_str("break"),
        }
    }
}

fn default_pomodoro_minutes() -> u32 {
    25
}

fn default_break_minutes() -> u32 {
    5
}

/// Run parameters loaded from the config file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Work session length in minutes
    #[serde(rename = "pomodoro", default = "default_pomodoro_minutes")]
    pub pomodoro_minutes: u32,
    /// Break session length in minutes
    #[serde(rename = "break", default = "default_break_minutes")]
    pub break_minutes: u32,
    /// Shell command run before the countdown starts
    #[serde(default)]
    pub pre: Option<String>,
    /// Shell command run after the countdown completes
    #[serde(default)]
    pub post: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pomodoro_minutes: default_pomodoro_minutes(),
            break_minutes: default_break_minutes(),
            pre: None,
            post: None,
        }
    }
}

impl Config {
    /// Read and parse the config file at `path`
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Session length in minutes
    pub fn minutes_for(&self, session: Session) -> u32 {
        match session {
            Session::Work => self.pomodoro_minutes,
            Session::Break => self.break_minutes,
        }
    }

    /// Pre-hook command, if one is set
    pub fn pre_hook(&self) -> Option<&str> {
        non_blank(self.pre.as_deref())
    }

    /// Post-hook command, if one is set
    pub fn post_hook(&self) -> Option<&str> {
        non_blank(self.post.as_deref())
    }
}

fn non_blank(command: Option<&str>) -> Option<&str> {
    command.filter(|c| !c.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["tmux-pomodoro"]);
        assert_eq!(cli.session(), Session::Work);
        assert!(!cli.daemon);
        assert!(cli.file.is_none());
        assert!(cli.config.is_none());
        assert_eq!(cli.log_level(), "info");
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from([
            "tmux-pomodoro", "-bdv", "-f", "/tmp/pomo", "-c", "/tmp/pomo.toml",
        ]);
        assert_eq!(cli.session(), Session::Break);
        assert!(cli.daemon);
        assert_eq!(cli.log_level(), "debug");
        assert_eq!(cli.display_path().unwrap(), PathBuf::from("/tmp/pomo"));
        assert_eq!(cli.config_path().unwrap(), PathBuf::from("/tmp/pomo.toml"));
    }

    #[test]
    fn test_daemon_child_args_drop_daemon_flag() {
        let cli = Cli::parse_from([
            "tmux-pomodoro", "--daemon", "--break", "--file", "/tmp/pomo", "--config", "/tmp/c.toml",
        ]);
        let args = cli.daemon_child_args().unwrap();
        assert!(!args.iter().any(|a| a == "--daemon" || a == "-d"));

        let child = Cli::parse_from(std::iter::once(OsString::from("tmux-pomodoro")).chain(args));
        assert!(!child.daemon);
        assert_eq!(child.session(), Session::Break);
        assert_eq!(child.file, Some(PathBuf::from("/tmp/pomo")));
        assert_eq!(child.config, Some(PathBuf::from("/tmp/c.toml")));
    }

    #[test]
    fn test_daemon_child_args_are_absolute() {
        let cli = Cli::parse_from(["tmux-pomodoro", "-f", "pomo", "-c", "pomo.toml"]);
        let args = cli.daemon_child_args().unwrap();
        assert!(args.iter().skip(1).step_by(2).all(|a| Path::new(a).is_absolute()));
    }

    #[test]
    fn test_load_full_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pomodoro.toml");
        fs::write(
            &path,
            "pomodoro = 50\nbreak = 10\npre = \"echo start\"\npost = \"echo done\"\n",
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.minutes_for(Session::Work), 50);
        assert_eq!(config.minutes_for(Session::Break), 10);
        assert_eq!(config.pre_hook(), Some("echo start"));
        assert_eq!(config.post_hook(), Some("echo done"));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: Config = toml::from_str("pomodoro = 30\n").unwrap();
        assert_eq!(config.pomodoro_minutes, 30);
        assert_eq!(config.break_minutes, 5);
        assert_eq!(config.pre_hook(), None);
        assert_eq!(config.post_hook(), None);
    }

    #[test]
    fn test_blank_hooks_are_absent() {
        let config: Config = toml::from_str("pre = \"\"\npost = \"   \"\n").unwrap();
        assert_eq!(config.pre_hook(), None);
        assert_eq!(config.post_hook(), None);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let config: Config = toml::from_str("pomodoro = 50\ntheme = \"dark\"\n").unwrap();
        assert_eq!(config.pomodoro_minutes, 50);
    }

    #[test]
    fn test_negative_duration_rejected() {
        assert!(toml::from_str::<Config>("pomodoro = -5\n").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = Config::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "pomodoro = \"twenty five\"\n").unwrap();
        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
