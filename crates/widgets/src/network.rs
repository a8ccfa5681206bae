use crate::format::format_byterate;
use crate::output::{spacer, Output, Size, Span};
use crate::Widget;
use mybar_core::AppState;
use mybar_theme::{IconFamily, Theme};

/// Displays transmit / receive rates of one interface.
#[derive(Debug)]
pub struct NetSpeedWidget {
    interface: String,
}

impl NetSpeedWidget {
    pub fn new(interface: impl Into<String>) -> Self {
        Self { interface: interface.into() }
    }
}

impl Widget for NetSpeedWidget {
    fn kind(&self) -> &str {
        "netspeed"
    }

    fn instance(&self) -> Option<&str> {
        Some(&self.interface)
    }

    fn render(&self, state: &AppState, theme: &Theme) -> Option<Output> {
        let speeds = state.netspeed?;
        let up = theme.icon(IconFamily::MaterialCommunity, "arrow-up");
        let down = theme.icon(IconFamily::MaterialCommunity, "arrow-down");

        Some(Output::new(vec![
            Span::icon(up),
            spacer(),
            Span::text(format!("{:>5}", format_byterate(speeds.tx_bytes_per_sec))),
            Span::text(" ").size(Size::Small),
            Span::icon(down),
            spacer(),
            Span::text(format!("{:>5}", format_byterate(speeds.rx_bytes_per_sec))),
        ]))
    }
}
