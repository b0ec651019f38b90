//! Display file rendering and persistence
//!
//! The display file holds one formatted countdown, framed in tmux style
//! markup, and is read by the status line on every refresh.

use std::{io, path::Path};
use tracing::{debug, info};

use crate::{error::RunError, state::Span};

/// Markup written before the remaining time
pub const MARKUP_PREFIX: &str = "#[fg=mycolor,bg=mycolor]#[fg=default]";
/// Markup written after the remaining time
pub const MARKUP_SUFFIX: &str = "#[fg=mycolor,bg=mycolor]";

/// Render a span the way the status line expects it
pub fn render(span: &Span) -> String {
    format!("{}{}{}", MARKUP_PREFIX, span, MARKUP_SUFFIX)
}

/// Replace the display file contents with `text`
pub async fn write_display(path: &Path, text: &str) -> Result<(), RunError> {
    tokio::fs::write(path, text)
        .await
        .map_err(|source| RunError::DisplayWrite {
            path: path.to_path_buf(),
            source,
        })
}

/// Remove the display file
///
/// Returns `false` if there was nothing to remove.
pub async fn remove_display(path: &Path) -> Result<bool, RunError> {
    match tokio::fs::remove_file(path).await {
        Ok(()) => {
            info!("Removed display file {}", path.display());
            Ok(true)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("Display file {} already absent", path.display());
            Ok(false)
        }
        Err(source) => Err(RunError::DisplayRemove {
            path: path.to_path_buf(),
            source,
        }),
    }
}
