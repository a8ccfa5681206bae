use crate::output::{spacer, Output, Span};
use crate::threshold::temperature_severity;
use crate::Widget;
use mybar_core::{AppState, Severity};
use mybar_theme::{IconFamily, Theme};

/// Displays the CPU package temperature.
///
/// Hot readings are coloured; past the urgent cutoff the block is flagged
/// urgent and keeps the `bad` colour.
#[derive(Debug, Default)]
pub struct TempWidget;

impl TempWidget {
    pub fn new() -> Self {
        Self
    }
}

impl Widget for TempWidget {
    fn kind(&self) -> &str {
        "cputemp"
    }

    fn render(&self, state: &AppState, theme: &Theme) -> Option<Output> {
        let celsius = state.cpu_temp?.celsius;

        let out = Output::new(vec![
            Span::icon(theme.icon(IconFamily::MaterialCommunity, "fan")),
            spacer(),
            Span::text(format!("{:2}℃", celsius.trunc() as i64)),
        ]);

        Some(match temperature_severity(celsius) {
            Severity::Urgent => out.color(theme.severity_color(Severity::Bad)).urgent(true),
            other => out.severity(other, theme),
        })
    }
}
