pub mod battery;
pub mod brightness;
pub mod clock;
pub mod format;
pub mod group;
pub mod load;
pub mod media;
pub mod memory;
pub mod network;
pub mod output;
pub mod registry;
pub mod temperature;
pub mod threshold;
pub mod volume;
pub mod vpn;
pub mod weather;
pub mod wifi;

pub use battery::BatteryWidget;
pub use brightness::BacklightWidget;
pub use clock::ClockWidget;
pub use group::GroupToggle;
pub use load::LoadWidget;
pub use media::MediaWidget;
pub use memory::MemoryWidget;
pub use network::NetSpeedWidget;
pub use output::{spacer, Output, Size, Span};
pub use registry::build;
pub use temperature::TempWidget;
pub use volume::VolumeWidget;
pub use vpn::VpnWidget;
pub use weather::WeatherWidget;
pub use wifi::WlanWidget;

use mybar_core::{AppState, Click};
use mybar_theme::Theme;

/// Every bar segment implements this trait.
///
/// Widgets are pure formatters: they read the latest snapshot from
/// `AppState` and return what to show, or `None` to hide the segment.
/// Clicks are answered with an [`Action`] for the run loop to carry out.
pub trait Widget: Send + Sync + std::fmt::Debug {
    /// Block name, e.g. `"clock"`; clicks are routed back by this name.
    fn kind(&self) -> &str;

    /// Device or player this instance is bound to, if any.
    fn instance(&self) -> Option<&str> {
        None
    }

    fn render(&self, state: &AppState, theme: &Theme) -> Option<Output>;

    fn on_click(&self, _click: &Click) -> Option<Action> {
        None
    }
}

/// Side effects requested by a click handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Launch an external command line.
    Spawn(String),
    /// Show or hide the collapsible widget group.
    ToggleGroup,
}
