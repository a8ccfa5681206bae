use crate::output::{spacer, Output, Span};
use crate::Widget;
use mybar_core::AppState;
use mybar_theme::{IconFamily, Theme};

/// Displays screen brightness as a percentage.
///
/// Hidden until the backlight poller has produced a sample.
#[derive(Debug)]
pub struct BacklightWidget {
    device: String,
}

impl BacklightWidget {
    pub fn new(device: impl Into<String>) -> Self {
        Self { device: device.into() }
    }
}

impl Widget for BacklightWidget {
    fn kind(&self) -> &str {
        "backlight"
    }

    fn instance(&self) -> Option<&str> {
        Some(&self.device)
    }

    fn render(&self, state: &AppState, theme: &Theme) -> Option<Output> {
        let pct = state.backlight?;
        Some(Output::new(vec![
            Span::icon(theme.icon(IconFamily::MaterialCommunity, "lightbulb")),
            spacer(),
            Span::text(format!("{pct:.0}%")),
        ]))
    }
}
