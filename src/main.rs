//! tmux-pomodoro - A pomodoro countdown for the tmux status line
//!
//! This is the main entry point for the tmux-pomodoro application.

use std::process::ExitCode;

use anyhow::Context;
use tracing::{error, info};

use tmux_pomodoro::{
    config::{Cli, Config},
    runner::Runner,
    utils::{shutdown_signal, spawn_detached},
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("tmux_pomodoro={}", cli.log_level()))
        .with_writer(std::io::stderr)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // The detached child can not report errors, so validate before forking
    let config = Config::load(&cli.config_path()?)?;

    if cli.daemon {
        let args = cli.daemon_child_args()?;
        spawn_detached(&args).context("failed to start background process")?;
        return Ok(());
    }

    let display_path = cli.display_path()?;
    let cancel = shutdown_signal().context("failed to register signal handlers")?;

    info!("Starting tmux-pomodoro v{}", env!("CARGO_PKG_VERSION"));
    Runner::new(config, cli.session(), display_path)
        .run(cancel)
        .await?;

    Ok(())
}
