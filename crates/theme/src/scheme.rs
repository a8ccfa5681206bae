use crate::colors::Color;
use mybar_core::Severity;
use std::collections::HashMap;
use tracing::warn;

/// Registry of named colours, loaded once from the `[colors]` table.
#[derive(Debug, Clone, Default)]
pub struct ColorScheme {
    colors: HashMap<String, Color>,
}

impl ColorScheme {
    /// Build the registry from name → hex pairs.  Entries that fail to parse
    /// are skipped with a warning.
    pub fn from_map<'a>(entries: impl IntoIterator<Item = (&'a String, &'a String)>) -> Self {
        let mut colors = HashMap::new();
        for (name, hex) in entries {
            match Color::from_hex(hex) {
                Some(c) => {
                    colors.insert(name.clone(), c);
                }
                None => warn!("Ignoring colour '{name}': '{hex}' is not a hex colour"),
            }
        }
        Self { colors }
    }

    /// Look up a named colour.
    pub fn get(&self, name: &str) -> Option<Color> {
        self.colors.get(name).copied()
    }

    /// Colour used to draw a reading of the given severity.
    pub fn for_severity(&self, severity: Severity) -> Option<Color> {
        severity.scheme_name().and_then(|name| self.get(name))
    }
}
