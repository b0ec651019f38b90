//! Display writer task

use std::{error::Error as StdError, path::PathBuf};
use tokio::{
    sync::{mpsc, watch},
    task::JoinHandle,
};
use tracing::{debug, trace};

use crate::{error::RunError, services::write_display};

/// Persist the latest rendered text every time it changes
///
/// The watch channel holds a single slot, so a value that is replaced before
/// the writer gets to it is never written and the file can not go back to an
/// older countdown. The first failed write is sent on `error_tx` and ends the
/// task. The task also ends when the sender side is dropped, after writing
/// any value still pending.
pub fn spawn_display_writer(
    path: PathBuf,
    mut text_rx: watch::Receiver<String>,
    error_tx: mpsc::Sender<RunError>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        debug!("Starting display writer for {}", path.display());

        while text_rx.changed().await.is_ok() {
            let text = text_rx.borrow_and_update().clone();
            trace!("Writing {:?} to {}", text, path.display());

            if let Err(e) = write_display(&path, &text).await {
                debug!(error = &e as &(dyn StdError + 'static), "Display write failed");
                let _ = error_tx.send(e).await;
                return;
            }
        }

        debug!("Display writer stopped");
    })
}
