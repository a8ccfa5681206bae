use crate::state::Update;

/// All messages (events) that can flow through the application event bus.
///
/// Sources:
/// - Snapshot feed socket  → `Snapshot`
/// - i3bar stdin           → `Click`
/// - Backlight poller      → `BacklightChanged`, `SourceFailed`
/// - Config watcher task   → `ConfigReloaded`
/// - Timer                 → `Tick`
#[derive(Debug, Clone)]
pub enum Message {
    // ── Data sources ──────────────────────────────────────────────────────────
    /// A collector pushed a fresh snapshot (or an error) for one source.
    Snapshot(Update),
    /// New backlight level in percent.
    BacklightChanged(f64),
    /// A locally polled source failed on this tick.
    SourceFailed { source: String, error: String },

    // ── User actions ──────────────────────────────────────────────────────────
    /// The host bar reported a click on one of our blocks.
    Click(Click),

    // ── Config ────────────────────────────────────────────────────────────────
    /// Config file changed on disk — triggers a live reload.
    ConfigReloaded,

    // ── Internal ──────────────────────────────────────────────────────────────
    /// One-second timer tick — keeps the clock and media position moving.
    Tick,
    /// Graceful shutdown requested (stdin closed).
    Shutdown,
}

/// A click on a block, addressed by the block's `name` / `instance`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Click {
    pub name:     String,
    pub instance: Option<String>,
    pub button:   MouseButton,
}

/// Mouse buttons, numbered the way X11 and i3bar number them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    ScrollUp,
    ScrollDown,
    ScrollLeft,
    ScrollRight,
    Back,
    Forward,
    Other(u8),
}

impl From<u8> for MouseButton {
    fn from(n: u8) -> Self {
        match n {
            1 => Self::Left,
            2 => Self::Middle,
            3 => Self::Right,
            4 => Self::ScrollUp,
            5 => Self::ScrollDown,
            6 => Self::ScrollLeft,
            7 => Self::ScrollRight,
            8 => Self::Back,
            9 => Self::Forward,
            n => Self::Other(n),
        }
    }
}
