use crate::output::Output;
use crate::{Action, Widget};
use mybar_core::{AppState, Click};
use mybar_theme::Theme;

/// Expand / collapse button for the collapsible widget group.
///
/// Shows `+` while the group is hidden and `-` while it is shown.
#[derive(Debug, Default)]
pub struct GroupToggle;

impl GroupToggle {
    pub fn new() -> Self {
        Self
    }
}

impl Widget for GroupToggle {
    fn kind(&self) -> &str {
        "group-toggle"
    }

    fn render(&self, state: &AppState, _theme: &Theme) -> Option<Output> {
        Some(Output::text(if state.group_collapsed { "+" } else { "-" }))
    }

    fn on_click(&self, _click: &Click) -> Option<Action> {
        Some(Action::ToggleGroup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mybar_core::MouseButton;

    #[test]
    fn label_follows_state() {
        let mut state = AppState::default();
        let theme = Theme::default();
        state.group_collapsed = true;
        assert_eq!(GroupToggle.render(&state, &theme).unwrap().plain_text(), "+");
        state.group_collapsed = false;
        assert_eq!(GroupToggle.render(&state, &theme).unwrap().plain_text(), "-");
    }

    #[test]
    fn any_click_toggles() {
        let click = Click { name: "group-toggle".into(), instance: None, button: MouseButton::Middle };
        assert_eq!(GroupToggle.on_click(&click), Some(Action::ToggleGroup));
    }
}
