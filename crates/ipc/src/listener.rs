use crate::update::parse_update;
use mybar_core::{BarError, Message, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::net::{UnixListener, UnixStream};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// First pause after a failed `accept`; doubles per consecutive failure.
const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);
const ACCEPT_BACKOFF_MAX: Duration = Duration::from_secs(5);

/// Pause before retrying `accept` after `failures` consecutive errors.
fn accept_backoff(failures: u32) -> Duration {
    ACCEPT_BACKOFF
        .saturating_mul(1 << failures.saturating_sub(1).min(16))
        .min(ACCEPT_BACKOFF_MAX)
}

/// Snapshot feed server.
///
/// Listens on a Unix socket; every connected collector writes
/// newline-delimited JSON updates which are forwarded as
/// [`Message::Snapshot`].
pub struct FeedListener {
    path:     PathBuf,
    listener: UnixListener,
}

impl FeedListener {
    /// Bind the feed socket at `path`.
    ///
    /// A leftover socket file from a previous run is removed; if another
    /// process is still accepting on it, binding fails instead.
    pub fn bind(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if path.exists() {
            if std::os::unix::net::UnixStream::connect(&path).is_ok() {
                return Err(BarError::Ipc(format!(
                    "'{}' is in use — is another mybar running?",
                    path.display()
                )));
            }
            std::fs::remove_file(&path)
                .map_err(|e| BarError::Ipc(format!("remove stale '{}': {e}", path.display())))?;
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let listener = UnixListener::bind(&path)
            .map_err(|e| BarError::Ipc(format!("bind '{}': {e}", path.display())))?;

        info!("Snapshot feed listening on {}", path.display());
        Ok(Self { path, listener })
    }

    /// Path of the bound socket.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Spawn the accept loop.  Each connection gets its own reader task;
    /// updates from all of them arrive on the returned channel.
    ///
    /// The loop stops when the receiver is dropped.
    pub fn spawn(self) -> mpsc::Receiver<Message> {
        let (tx, rx) = mpsc::channel(32);

        tokio::spawn(async move {
            let mut failures: u32 = 0;
            loop {
                match self.listener.accept().await {
                    Ok((stream, _)) => {
                        failures = 0;
                        debug!("Collector connected");
                        tokio::spawn(read_collector(stream, tx.clone()));
                    }
                    Err(e) => {
                        // EMFILE and friends persist; don't spin on them.
                        failures = failures.saturating_add(1);
                        let wait = accept_backoff(failures);
                        error!("Feed accept failed: {e}; retrying in {wait:?}");
                        tokio::time::sleep(wait).await;
                    }
                }
                if tx.is_closed() {
                    break;
                }
            }
            let _ = std::fs::remove_file(&self.path);
        });

        rx
    }
}

/// Forward every update one collector sends until it disconnects.
async fn read_collector(stream: UnixStream, tx: mpsc::Sender<Message>) {
    let mut lines = BufReader::new(stream).lines();

    loop {
        match lines.next_line().await {
            Ok(Some(line)) => match parse_update(&line) {
                Ok(Some(update)) => {
                    if tx.send(Message::Snapshot(update)).await.is_err() {
                        return; // all receivers dropped
                    }
                }
                Ok(None) => {}
                Err(e) => warn!("{e}"),
            },
            Ok(None) => break,
            Err(e) => {
                warn!("Collector read failed: {e}");
                break;
            }
        }
    }

    debug!("Collector disconnected");
}

#[cfg(test)]
mod tests {
    use super::*;
    use mybar_core::Update;
    use tokio::io::AsyncWriteExt;

    #[tokio::test]
    async fn forwards_updates_and_skips_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("feed.sock");
        let mut rx = FeedListener::bind(&path).unwrap().spawn();

        let mut client = UnixStream::connect(&path).await.unwrap();
        client
            .write_all(
                b"garbage\n\n{\"source\":\"cputemp\",\"value\":{\"celsius\":55.0}}\n",
            )
            .await
            .unwrap();

        match rx.recv().await {
            Some(Message::Snapshot(Update::Cputemp(t))) => assert_eq!(t.celsius, 55.0),
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn accept_backoff_grows_and_caps() {
        assert_eq!(accept_backoff(1), Duration::from_millis(100));
        assert_eq!(accept_backoff(2), Duration::from_millis(200));
        assert_eq!(accept_backoff(4), Duration::from_millis(800));
        assert_eq!(accept_backoff(10), ACCEPT_BACKOFF_MAX);
        assert_eq!(accept_backoff(u32::MAX), ACCEPT_BACKOFF_MAX);
    }

    #[tokio::test]
    async fn stale_socket_file_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("feed.sock");
        std::fs::write(&path, b"").unwrap();

        let feed = FeedListener::bind(&path).unwrap();
        assert_eq!(feed.path(), path.as_path());
    }

    #[tokio::test]
    async fn live_socket_is_not_stolen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("feed.sock");
        let _first = FeedListener::bind(&path).unwrap();

        assert!(matches!(FeedListener::bind(&path), Err(BarError::Ipc(_))));
    }
}
