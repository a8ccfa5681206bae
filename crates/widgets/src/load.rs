use crate::output::Output;
use crate::threshold::load_severity;
use crate::{Action, Widget};
use mybar_core::{AppState, Click, MouseButton};
use mybar_theme::Theme;

/// Displays the 1- and 15-minute load averages.
///
/// Left-click opens the task manager.
#[derive(Debug)]
pub struct LoadWidget {
    task_manager: String,
}

impl LoadWidget {
    pub fn new(task_manager: impl Into<String>) -> Self {
        Self { task_manager: task_manager.into() }
    }
}

impl Widget for LoadWidget {
    fn kind(&self) -> &str {
        "sysinfo"
    }

    fn render(&self, state: &AppState, theme: &Theme) -> Option<Output> {
        let info = state.sysinfo.as_ref()?;
        let out = Output::text(format!("{:.2} {:.2}", info.loads[0], info.loads[2]));
        Some(out.severity(load_severity(info), theme))
    }

    fn on_click(&self, click: &Click) -> Option<Action> {
        (click.button == MouseButton::Left).then(|| Action::Spawn(self.task_manager.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mybar_core::state::SysInfo;

    #[test]
    fn shows_two_averages() {
        let mut state = AppState::default();
        state.sysinfo = Some(SysInfo { loads: [0.5, 1.25, 40.0], uptime_secs: 86_400 });

        let out = LoadWidget::new("top").render(&state, &Theme::default()).unwrap();
        assert_eq!(out.plain_text(), "0.50 40.00");
        assert!(!out.has_markup());
        assert_eq!(out.color, Theme::default().color("bad"));
    }
}
