use crate::output::{Output, Span};
use crate::threshold::battery_severity;
use crate::Widget;
use mybar_core::AppState;
use mybar_theme::{IconFamily, Theme};

/// Displays battery charge with a plugged / unplugged icon.
///
/// Hidden entirely when no battery has reported (desktop / VM).
#[derive(Debug, Default)]
pub struct BatteryWidget;

impl BatteryWidget {
    pub fn new() -> Self {
        Self
    }
}

impl Widget for BatteryWidget {
    fn kind(&self) -> &str {
        "battery"
    }

    fn render(&self, state: &AppState, theme: &Theme) -> Option<Output> {
        let bat = state.battery.as_ref()?;
        let plug = if bat.plugged_in() { "power-plug" } else { "power-plug-off" };

        let out = Output::new(vec![
            Span::icon(theme.icon(IconFamily::MaterialCommunity, plug)),
            Span::text(format!("{}%", bat.percent)),
        ]);
        Some(out.severity(battery_severity(bat), theme))
    }
}
