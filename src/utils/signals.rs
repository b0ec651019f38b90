//! Signal handling for cancelling a run

use std::{future::Future, io};

use futures::stream::StreamExt;
use signal_hook_tokio::Signals;
use tracing::info;

/// Register for shutdown signals (SIGTERM, SIGINT)
///
/// Registration happens immediately, so the default handlers stop killing
/// the process from this point on. The returned future resolves once the
/// first signal arrives.
pub fn shutdown_signal() -> io::Result<impl Future<Output = ()>> {
    let mut signals = Signals::new([
        signal_hook::consts::SIGTERM,
        signal_hook::consts::SIGINT,
    ])?;

    Ok(async move {
        if let Some(signal) = signals.next().await {
            info!("Received signal: {}", signal);
        }
    })
}
