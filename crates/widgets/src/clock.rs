use crate::output::{spacer, Output, Span};
use crate::{Action, Widget};
use mybar_core::{AppState, Click, MouseButton};
use mybar_theme::{IconFamily, Theme};

/// Displays the date and the time with dimmed icons.
///
/// Reads `state.time`, which is updated every second via `Message::Tick`.
/// Left-click opens the calendar.
#[derive(Debug)]
pub struct ClockWidget {
    calendar: String,
}

impl ClockWidget {
    pub fn new(calendar: impl Into<String>) -> Self {
        Self { calendar: calendar.into() }
    }
}

impl Widget for ClockWidget {
    fn kind(&self) -> &str {
        "clock"
    }

    fn render(&self, state: &AppState, theme: &Theme) -> Option<Output> {
        let dim = theme.color("dim-icon");

        Some(Output::new(vec![
            Span::icon(theme.icon(IconFamily::Material, "today")).color(dim),
            spacer(),
            Span::text(state.time.format("%a %b %-d ").to_string()),
            Span::icon(theme.icon(IconFamily::Material, "access-time")).color(dim),
            spacer(),
            Span::text(state.time.format("%H:%M:%S").to_string()),
        ]))
    }

    fn on_click(&self, click: &Click) -> Option<Action> {
        (click.button == MouseButton::Left).then(|| Action::Spawn(self.calendar.clone()))
    }
}
