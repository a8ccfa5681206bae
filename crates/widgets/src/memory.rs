use crate::format::format_ibytes;
use crate::output::{Output, Span};
use crate::threshold::memory_severity;
use crate::{Action, Widget};
use mybar_core::{AppState, Click, MouseButton};
use mybar_theme::{IconFamily, Theme};

/// Displays memory available to new processes.
///
/// Left-click opens the task manager.
#[derive(Debug)]
pub struct MemoryWidget {
    task_manager: String,
}

impl MemoryWidget {
    pub fn new(task_manager: impl Into<String>) -> Self {
        Self { task_manager: task_manager.into() }
    }
}

impl Widget for MemoryWidget {
    fn kind(&self) -> &str {
        "meminfo"
    }

    fn render(&self, state: &AppState, theme: &Theme) -> Option<Output> {
        let available = state.meminfo.as_ref()?.available();

        let out = Output::new(vec![
            Span::icon(theme.icon(IconFamily::Material, "memory")),
            Span::text(format_ibytes(available)),
        ]);
        Some(out.severity(memory_severity(available), theme))
    }

    fn on_click(&self, click: &Click) -> Option<Action> {
        (click.button == MouseButton::Left).then(|| Action::Spawn(self.task_manager.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mybar_core::state::MemInfo;

    fn render(available: u64) -> Output {
        let mut state = AppState::default();
        state.meminfo = Some(MemInfo { available, ..MemInfo::default() });
        MemoryWidget::new("xfce4-taskmanager").render(&state, &Theme::default()).unwrap()
    }

    #[test]
    fn shows_binary_size() {
        assert!(render(3 * 1024 * 1024 * 1024).plain_text().ends_with("3.0 GiB"));
    }

    #[test]
    fn low_memory_is_flagged() {
        let theme = Theme::default();
        assert!(render(300_000_000).urgent);
        assert_eq!(render(800_000_000).color, theme.color("bad"));
        assert_eq!(render(20_000_000_000).color, theme.color("good"));
    }

    #[test]
    fn click_opens_task_manager() {
        let click = Click { name: "meminfo".into(), instance: None, button: MouseButton::Left };
        assert_eq!(
            MemoryWidget::new("htop").on_click(&click),
            Some(Action::Spawn("htop".into()))
        );
    }
}
