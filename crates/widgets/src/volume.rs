use crate::output::{spacer, Output, Span};
use crate::Widget;
use mybar_core::{AppState, Severity};
use mybar_theme::{IconFamily, Theme};

/// Displays the mixer volume, or `MUT` when muted.
#[derive(Debug)]
pub struct VolumeWidget {
    mixer: String,
}

impl VolumeWidget {
    pub fn new(mixer: impl Into<String>) -> Self {
        Self { mixer: mixer.into() }
    }
}

/// Icon name for a volume level.
pub fn volume_icon(pct: u32) -> &'static str {
    if pct > 66 {
        "volume-high"
    } else if pct > 33 {
        "volume-medium"
    } else {
        "volume-low"
    }
}

impl Widget for VolumeWidget {
    fn kind(&self) -> &str {
        "volume"
    }

    fn instance(&self) -> Option<&str> {
        Some(&self.mixer)
    }

    fn render(&self, state: &AppState, theme: &Theme) -> Option<Output> {
        let vol = state.volume.as_ref()?;

        if vol.muted {
            let out = Output::new(vec![
                Span::icon(theme.icon(IconFamily::Ionicons, "volume-mute")),
                Span::text("MUT"),
            ]);
            return Some(out.severity(Severity::Degraded, theme));
        }

        let pct = vol.percent();
        Some(Output::new(vec![
            Span::icon(theme.icon(IconFamily::Ionicons, volume_icon(pct))),
            spacer(),
            Span::text(format!("{pct:2}%")),
        ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mybar_core::state::Volume;

    #[test]
    fn icon_steps() {
        assert_eq!(volume_icon(0), "volume-low");
        assert_eq!(volume_icon(33), "volume-low");
        assert_eq!(volume_icon(34), "volume-medium");
        assert_eq!(volume_icon(66), "volume-medium");
        assert_eq!(volume_icon(67), "volume-high");
    }

    #[test]
    fn muted_and_level() {
        let theme = Theme::default();
        let widget = VolumeWidget::new("default");
        let mut state = AppState::default();

        state.volume = Some(Volume { level: 5, min: 0, max: 100, muted: false });
        let out = widget.render(&state, &theme).unwrap();
        assert!(out.plain_text().ends_with(" 5%"));
        assert!(out.color.is_none());

        state.volume = Some(Volume { level: 5, min: 0, max: 100, muted: true });
        let out = widget.render(&state, &theme).unwrap();
        assert!(out.plain_text().ends_with("MUT"));
        assert_eq!(out.color, theme.color("degraded"));
    }
}
