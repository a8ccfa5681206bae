//! Data sources the bar polls itself.  Everything else arrives through the
//! snapshot feed.

pub mod backlight;

use mybar_core::Message;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time;
use tracing::{debug, warn};

/// Spawn a background Tokio task that samples the backlight at `dir` every
/// `interval` and forwards the result as a [`Message`].
///
/// Failed reads are reported as [`Message::SourceFailed`] and retried on
/// the next tick.  The task stops automatically when the receiver is dropped.
pub fn spawn_backlight(dir: PathBuf, interval: Duration) -> mpsc::Receiver<Message> {
    let (tx, rx) = mpsc::channel(4);

    tokio::spawn(async move {
        let mut ticker = time::interval(interval);

        loop {
            ticker.tick().await;

            let msg = match backlight::read_backlight(&dir) {
                Ok(pct) => {
                    debug!("backlight at {pct:.0}%");
                    Message::BacklightChanged(pct)
                }
                Err(e) => {
                    warn!("backlight: {e}");
                    Message::SourceFailed {
                        source: "backlight".to_string(),
                        error:  e.to_string(),
                    }
                }
            };

            if tx.send(msg).await.is_err() {
                break; // all receivers dropped
            }
        }
    });

    rx
}
