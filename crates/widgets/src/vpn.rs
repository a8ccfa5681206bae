use crate::output::Output;
use crate::Widget;
use mybar_core::state::{AppState, VpnState};
use mybar_core::Severity;
use mybar_theme::Theme;

/// `VPN` while the tunnel is up, `...` while it connects, nothing otherwise.
#[derive(Debug)]
pub struct VpnWidget {
    interface: String,
}

impl VpnWidget {
    pub fn new(interface: impl Into<String>) -> Self {
        Self { interface: interface.into() }
    }
}

impl Widget for VpnWidget {
    fn kind(&self) -> &str {
        "vpn"
    }

    fn instance(&self) -> Option<&str> {
        Some(&self.interface)
    }

    fn render(&self, state: &AppState, theme: &Theme) -> Option<Output> {
        match state.vpn?.state {
            VpnState::Connected    => Some(Output::text("VPN")),
            VpnState::Waiting      => Some(Output::text("...").severity(Severity::Degraded, theme)),
            VpnState::Disconnected => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mybar_core::state::Vpn;

    #[test]
    fn states() {
        let theme = Theme::default();
        let widget = VpnWidget::new("vpn0");
        let mut state = AppState::default();
        assert!(widget.render(&state, &theme).is_none());

        state.vpn = Some(Vpn { state: VpnState::Connected });
        assert_eq!(widget.render(&state, &theme).unwrap().plain_text(), "VPN");

        state.vpn = Some(Vpn { state: VpnState::Waiting });
        let out = widget.render(&state, &theme).unwrap();
        assert_eq!(out.plain_text(), "...");
        assert_eq!(out.color, theme.color("degraded"));

        state.vpn = Some(Vpn { state: VpnState::Disconnected });
        assert!(widget.render(&state, &theme).is_none());
    }
}
