//! Layout for the status bar: which widgets appear, in what order, and
//! which of them fold away with the collapsible group.

use mybar_config::BarConfig;
use mybar_core::{AppState, Click};
use mybar_theme::Theme;
use mybar_widgets::{Action, Output, Widget};
use tracing::{debug, warn};

/// One widget slot in the bar.
#[derive(Debug)]
struct Slot {
    widget:      Box<dyn Widget>,
    collapsible: bool,
}

/// A widget's output for one refresh, tagged with where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub name:     String,
    pub instance: Option<String>,
    pub output:   Output,
}

/// The ordered list of widgets shown on the bar.
#[derive(Debug, Default)]
pub struct BarLayout {
    slots: Vec<Slot>,
}

impl BarLayout {
    /// Build a [`BarLayout`] from the loaded configuration.  Unknown widget
    /// kinds are skipped with a warning.
    pub fn from_config(config: &BarConfig) -> Self {
        let slots = config
            .layout
            .order
            .iter()
            .filter_map(|kind| match mybar_widgets::build(kind, config) {
                Some(widget) => Some(Slot {
                    widget,
                    collapsible: config.layout.collapsible.iter().any(|k| k == kind),
                }),
                None => {
                    warn!("Unknown widget kind '{kind}' in layout; skipping");
                    None
                }
            })
            .collect();
        Self { slots }
    }

    /// Widget kinds in display order.
    pub fn kinds(&self) -> Vec<&str> {
        self.slots.iter().map(|s| s.widget.kind()).collect()
    }

    /// Render every visible widget, left to right.
    ///
    /// Collapsed group members are skipped, a source with a pending error
    /// shows an urgent `Error` block, and widgets returning `None` vanish.
    pub fn render(&self, state: &AppState, theme: &Theme) -> Vec<Rendered> {
        self.slots
            .iter()
            .filter(|slot| !(slot.collapsible && state.group_collapsed))
            .filter_map(|slot| {
                let widget = slot.widget.as_ref();
                let output = match state.error_for(widget.kind()) {
                    Some(err) => {
                        debug!("{} is failing: {err}", widget.kind());
                        error_output()
                    }
                    None => widget.render(state, theme)?,
                };
                Some(Rendered {
                    name:     widget.kind().to_string(),
                    instance: widget.instance().map(str::to_string),
                    output,
                })
            })
            .collect()
    }

    /// Route a click to the widget it landed on.
    pub fn click(&self, click: &Click) -> Option<Action> {
        let slot = self.slots.iter().find(|slot| {
            slot.widget.kind() == click.name
                && match (&click.instance, slot.widget.instance()) {
                    (Some(clicked), Some(ours)) => clicked == ours,
                    _ => true,
                }
        })?;
        slot.widget.on_click(click)
    }
}

/// Placeholder shown in place of a widget whose source is failing.
fn error_output() -> Output {
    Output::text("Error").urgent(true)
}
