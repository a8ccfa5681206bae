use crate::output::{spacer, Output, Span};
use crate::threshold::signal_severity;
use crate::Widget;
use mybar_core::AppState;
use mybar_theme::{IconFamily, Theme};

/// Displays the SSID of the connected wireless network.
///
/// Hidden when not associated.  Weak links are coloured.
#[derive(Debug)]
pub struct WlanWidget {
    interface: String,
}

impl WlanWidget {
    pub fn new(interface: impl Into<String>) -> Self {
        Self { interface: interface.into() }
    }
}

impl Widget for WlanWidget {
    fn kind(&self) -> &str {
        "wlan"
    }

    fn instance(&self) -> Option<&str> {
        Some(&self.interface)
    }

    fn render(&self, state: &AppState, theme: &Theme) -> Option<Output> {
        let wlan = state.wlan.as_ref()?;
        if wlan.ssid.is_empty() {
            return None;
        }

        let out = Output::new(vec![
            Span::icon(theme.icon(IconFamily::Material, "wifi")),
            spacer(),
            Span::text(wlan.ssid.clone()),
        ]);
        Some(out.severity(signal_severity(wlan), theme))
    }
}
