//! Snapshot feed: external collectors push one JSON [`Update`] per line
//! over a Unix socket.
//!
//! [`Update`]: mybar_core::Update

pub mod listener;
pub mod update;

pub use listener::FeedListener;
pub use update::parse_update;
