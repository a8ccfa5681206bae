//! i3bar front end for `mybar`.
//!
//! Owns the run loop and wires together all background tasks:
//! - Snapshot feed socket (external collectors)
//! - Backlight poller
//! - Config file watcher (live reload on change)
//! - Click events from i3bar on stdin
//! - 1-second timer (clock, media position)

pub mod markup;
pub mod protocol;
pub mod spawn;

use chrono::Local;
use mybar_config::{feed_socket_path, BarConfig, ConfigWatcher};
use mybar_core::{AppState, Message, Result};
use mybar_ipc::FeedListener;
use mybar_renderer::BarLayout;
use mybar_theme::Theme;
use mybar_widgets::Action;
use protocol::{parse_click, Block, Header, StatusWriter};
use std::ops::ControlFlow;
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Redraw interval for time-driven widgets.
const TICK: Duration = Duration::from_secs(1);

// ── Entry point ───────────────────────────────────────────────────────────────

/// Run the bar until i3bar closes our stdin.
///
/// Fails at startup if the theme cannot be built or the feed socket cannot
/// be bound, and later only if stdout goes away.
pub async fn run(config_path: PathBuf, config: BarConfig) -> Result<()> {
    let mut bar = Bar::new(config_path.clone(), config)?;

    let mut writer = StatusWriter::new(tokio::io::stdout());
    writer.start(&Header::default()).await?;

    let mut feed = FeedListener::bind(feed_socket_path(&bar.config.global))?.spawn();
    let mut backlight = backlight_stream(&bar);
    let (_watcher, mut reload) = ConfigWatcher::spawn(&config_path);
    let mut clicks = click_stream();
    let mut ticker = tokio::time::interval(TICK);

    loop {
        let msg = tokio::select! {
            _ = ticker.tick() => Message::Tick,
            Some(msg) = feed.recv() => msg,
            Some(msg) = recv_optional(&mut backlight) => msg,
            Some(()) = reload.recv() => Message::ConfigReloaded,
            Some(msg) = clicks.recv() => msg,
        };

        if bar.update(msg).is_break() {
            break;
        }
        writer.write(&bar.view()).await?;
    }

    info!("stdin closed; shutting down");
    Ok(())
}

// ── State ─────────────────────────────────────────────────────────────────────

/// The bar: latest snapshots, the layout built from config, and the theme.
pub struct Bar {
    state:       AppState,
    config:      BarConfig,
    config_path: PathBuf,
    theme:       Theme,
    layout:      BarLayout,
}

impl Bar {
    pub fn new(config_path: PathBuf, config: BarConfig) -> Result<Self> {
        let theme  = Theme::from_config(&config)?;
        let layout = BarLayout::from_config(&config);
        let state  = AppState {
            group_collapsed: config.global.start_collapsed,
            ..AppState::default()
        };

        info!("Layout: {}", layout.kinds().join(", "));

        Ok(Self { state, config, config_path, theme, layout })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    // ── Update ────────────────────────────────────────────────────────────────

    /// Apply one event.  Breaks when the bar should stop.
    pub fn update(&mut self, message: Message) -> ControlFlow<()> {
        match message {
            Message::Tick => {
                self.state.time = Local::now();
            }
            Message::Snapshot(update) => {
                debug!("snapshot from {}", update.source());
                self.state.apply(update);
            }
            Message::BacklightChanged(pct) => {
                self.state.set_backlight(pct);
            }
            Message::SourceFailed { source, error } => {
                self.state.errors.insert(source, error);
            }
            Message::Click(click) => {
                if let Some(action) = self.layout.click(&click) {
                    self.perform(action);
                }
            }
            Message::ConfigReloaded => self.reload(),
            Message::Shutdown => return ControlFlow::Break(()),
        }
        ControlFlow::Continue(())
    }

    fn perform(&mut self, action: Action) {
        match action {
            Action::Spawn(cmdline) => spawn::spawn_command(&cmdline),
            Action::ToggleGroup => {
                self.state.group_collapsed = !self.state.group_collapsed;
            }
        }
    }

    /// Re-read the config file and rebuild theme and layout.  A broken file
    /// keeps the running config.  Feed socket and backlight device changes
    /// need a restart.
    fn reload(&mut self) {
        let loaded = mybar_config::load(&self.config_path)
            .and_then(|cfg| Theme::from_config(&cfg).map(|theme| (cfg, theme)));

        match loaded {
            Ok((cfg, theme)) => {
                self.layout = BarLayout::from_config(&cfg);
                self.theme  = theme;
                self.config = cfg;
                info!("Config reloaded");
            }
            Err(e) => warn!("Config reload failed: {e}"),
        }
    }

    // ── View ──────────────────────────────────────────────────────────────────

    /// The current status line.
    pub fn view(&self) -> Vec<Block> {
        self.layout
            .render(&self.state, &self.theme)
            .iter()
            .map(|r| Block::from_rendered(r, &self.theme))
            .collect()
    }
}

// ── Background streams ────────────────────────────────────────────────────────

/// Backlight samples, when the layout shows the backlight at all.
fn backlight_stream(bar: &Bar) -> Option<mpsc::Receiver<Message>> {
    if !bar.layout.kinds().contains(&"backlight") {
        return None;
    }
    let dir = mybar_system::backlight::device_dir(&bar.config.devices.backlight);
    let every = Duration::from_secs(bar.config.global.backlight_interval_secs.max(1));
    Some(mybar_system::spawn_backlight(dir, every))
}

/// Reads i3bar click events from stdin; sends `Shutdown` at end of input.
fn click_stream() -> mpsc::Receiver<Message> {
    let (tx, rx) = mpsc::channel(8);

    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            match lines.next_line().await {
                Ok(Some(line)) => match parse_click(&line) {
                    Ok(Some(click)) => {
                        if tx.send(Message::Click(click)).await.is_err() {
                            return;
                        }
                    }
                    Ok(None) => {}
                    Err(e) => warn!("{e}"),
                },
                Ok(None) => break,
                Err(e) => {
                    warn!("stdin read failed: {e}");
                    break;
                }
            }
        }

        let _ = tx.send(Message::Shutdown).await;
    });

    rx
}

async fn recv_optional(rx: &mut Option<mpsc::Receiver<Message>>) -> Option<Message> {
    match rx {
        Some(rx) => rx.recv().await,
        None => std::future::pending().await,
    }
}
