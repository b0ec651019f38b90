//! Countdown ticker task

use std::time::Duration;
use tokio::{
    sync::mpsc,
    task::JoinHandle,
    time::{interval_at, Instant, MissedTickBehavior},
};
use tracing::{debug, trace};

/// Emit one event per elapsed `period`, measured from the moment of spawning
///
/// Tick `n` is due at `start + n * period`, so a late wake-up does not push
/// the following ticks back. Missed ticks are delivered in a burst. The
/// payload is the tick number, starting at 1. The task ends once the
/// receiver is gone.
pub fn spawn_ticker(period: Duration, tick_tx: mpsc::Sender<u64>) -> JoinHandle<()> {
    tokio::spawn(async move {
        debug!("Starting ticker with a {:?} period", period);

        let start = Instant::now();
        let mut interval = interval_at(start + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Burst);

        let mut count = 0u64;
        loop {
            interval.tick().await;
            count += 1;
            trace!("Tick {} after {:?}", count, start.elapsed());
            if tick_tx.send(count).await.is_err() {
                break;
            }
        }

        debug!("Ticker stopped after {} ticks", count);
    })
}
