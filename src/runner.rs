//! Countdown runner
//!
//! A run goes through three stages. Starting runs the pre hook. Running
//! drives the countdown loop, racing ticks, display write failures and
//! cancellation. Terminated runs the post hook after a completed countdown
//! and then removes the display file.

use std::{error::Error as StdError, future::Future, path::PathBuf, pin::Pin, time::Duration};
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

use crate::{
    config::{Config, Session},
    error::{HookStage, RunError},
    services::{remove_display, render, run_hook},
    state::Span,
    tasks::{spawn_display_writer, spawn_ticker},
};

/// Time between two ticks of a real countdown
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Owns one countdown from pre hook to post hook
#[derive(Debug, Clone)]
pub struct Runner {
    config: Config,
    session: Session,
    display_path: PathBuf,
    tick_period: Duration,
}

impl Runner {
    pub fn new(config: Config, session: Session, display_path: PathBuf) -> Self {
        Self {
            config,
            session,
            display_path,
            tick_period: TICK_PERIOD,
        }
    }

    /// Count down in units of `period` instead of seconds
    pub fn with_tick_period(mut self, period: Duration) -> Self {
        self.tick_period = period;
        self
    }

    /// The span the countdown starts from
    pub fn initial_span(&self) -> Span {
        Span::from_minutes(self.config.minutes_for(self.session))
    }

    /// Run the countdown until it completes, fails or `cancel` resolves
    ///
    /// Cancellation is honoured while either hook runs and during the
    /// countdown itself; it ends the run with [`RunError::Interrupted`] and
    /// the post hook is skipped. The post hook runs while the display still
    /// shows the last second. The display file is removed on every path out
    /// of the countdown. A failed removal is only logged.
    pub async fn run<C>(self, cancel: C) -> Result<(), RunError>
    where
        C: Future<Output = ()>,
    {
        tokio::pin!(cancel);

        let mut outcome = self.countdown(cancel.as_mut()).await;
        if outcome.is_ok() {
            outcome = self.post_hook(cancel.as_mut()).await;
        }

        if let Err(e) = remove_display(&self.display_path).await {
            warn!(error = &e as &(dyn StdError + 'static), "Display file left behind");
        }
        outcome?;

        info!("{} session complete", self.session);
        Ok(())
    }

    async fn post_hook<C>(&self, mut cancel: Pin<&mut C>) -> Result<(), RunError>
    where
        C: Future<Output = ()>,
    {
        let Some(command) = self.config.post_hook() else {
            return Ok(());
        };

        info!("Running post hook");
        tokio::select! {
            result = run_hook(command) => {
                result.map_err(|source| RunError::Hook { stage: HookStage::Post, source })
            }
            () = cancel.as_mut() => {
                warn!("Interrupted while the post hook was running");
                Err(RunError::Interrupted)
            }
        }
    }

    async fn countdown<C>(&self, mut cancel: Pin<&mut C>) -> Result<(), RunError>
    where
        C: Future<Output = ()>,
    {
        if let Some(command) = self.config.pre_hook() {
            info!("Running pre hook");
            tokio::select! {
                result = run_hook(command) => {
                    result.map_err(|source| RunError::Hook { stage: HookStage::Pre, source })?;
                }
                () = cancel.as_mut() => {
                    warn!("Interrupted while the pre hook was running");
                    return Err(RunError::Interrupted);
                }
            }
        }

        let initial = self.initial_span();
        let mut span = initial;
        info!(
            "Starting {} session of {} (display: {})",
            self.session,
            span,
            self.display_path.display()
        );

        let (tick_tx, mut tick_rx) = mpsc::channel(1);
        let (text_tx, text_rx) = watch::channel(String::new());
        let (error_tx, mut error_rx) = mpsc::channel(1);

        let ticker = spawn_ticker(self.tick_period, tick_tx);
        let writer = spawn_display_writer(self.display_path.clone(), text_rx, error_tx);

        let result = loop {
            tokio::select! {
                Some(count) = tick_rx.recv() => {
                    let next = span.tick();
                    if next.is_expired() {
                        info!("Countdown finished after {} ticks", count);
                        break Ok(());
                    }
                    debug!("{} left", next);
                    text_tx.send_replace(render(&next));
                    span = next;
                }
                Some(e) = error_rx.recv() => {
                    break Err(e);
                }
                () = cancel.as_mut() => {
                    info!(
                        "Countdown interrupted after {} ticks with {} left",
                        initial.rest_seconds - span.rest_seconds,
                        span
                    );
                    break Err(RunError::Interrupted);
                }
            }
        };

        // Let the writer drain so nothing lands after the file is removed
        ticker.abort();
        drop(text_tx);
        if let Err(e) = writer.await {
            warn!("Display writer ended abnormally: {}", e);
        }
        if result.is_ok() {
            if let Ok(e) = error_rx.try_recv() {
                warn!(error = &e as &(dyn StdError + 'static), "Last display update was lost");
            }
        }

        result
    }
}
