use mybar_config::IconStyle;
use mybar_core::{BarError, Result};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

/// Icon font families the bar draws glyphs from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconFamily {
    /// Google's Material Design icons.
    Material,
    /// The community Material Design Icons webfont.
    MaterialCommunity,
    Ionicons,
}

/// A resolved glyph together with the font that contains it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    pub glyph: char,
    pub font:  &'static str,
}

/// Glyph lookup table for every icon family.
#[derive(Debug, Clone)]
pub struct Icons {
    style:  IconStyle,
    glyphs: HashMap<(IconFamily, String), char>,
}

// Names the widgets ask for, with their codepoints in each icon style.
const MATERIAL: &[(&str, u32, u32)] = &[
    ("today",       0xe8df, 0xf00f6),
    ("access-time", 0xe192, 0xf0150),
    ("memory",      0xe322, 0xf035b),
    ("wifi",        0xe63e, 0xf05a9),
];

const MATERIAL_COMMUNITY: &[(&str, u32, u32)] = &[
    ("music",                0xf075a, 0xf075a),
    ("fan",                  0xf0210, 0xf0210),
    ("arrow-up",             0xf005d, 0xf005d),
    ("arrow-down",           0xf0045, 0xf0045),
    ("power-plug",           0xf06a5, 0xf06a5),
    ("power-plug-off",       0xf06a6, 0xf06a6),
    ("lightbulb",            0xf0335, 0xf0335),
    ("warning-outline",      0xf002a, 0xf002a),
    ("weather-stormy",       0xf0593, 0xf0593),
    ("weather-shower",       0xf0597, 0xf0597),
    ("weather-downpour",     0xf0596, 0xf0596),
    ("weather-snow",         0xf0598, 0xf0598),
    ("weather-windy-cloudy", 0xf0591, 0xf0591),
    ("weather-night",        0xf0594, 0xf0594),
    ("weather-sunny",        0xf0599, 0xf0599),
    ("weather-partly-sunny", 0xf0595, 0xf0595),
    ("weather-cloudy",       0xf0590, 0xf0590),
    ("weather-windy",        0xf059d, 0xf059d),
];

const IONICONS: &[(&str, u32, u32)] = &[
    ("volume-high",   0xf123, 0xf057e),
    ("volume-medium", 0xf132, 0xf0580),
    ("volume-low",    0xf131, 0xf057f),
    ("volume-mute",   0xf133, 0xf0581),
];

const NERD_FONT: &str = "Symbols Nerd Font";

impl Icons {
    /// The compiled-in glyph tables for `style`.
    pub fn builtin(style: IconStyle) -> Self {
        let mut glyphs = HashMap::new();
        for (family, table) in [
            (IconFamily::Material, MATERIAL),
            (IconFamily::MaterialCommunity, MATERIAL_COMMUNITY),
            (IconFamily::Ionicons, IONICONS),
        ] {
            for &(name, webfont, nerd) in table {
                let code = match style {
                    IconStyle::Material => webfont,
                    IconStyle::Nerd     => nerd,
                };
                if let Some(glyph) = char::from_u32(code) {
                    glyphs.insert((family, name.to_string()), glyph);
                }
            }
        }
        Self { style, glyphs }
    }

    /// Merge glyphs from a `codepoints` file in `dir` into `family`.
    ///
    /// Each line is `name hexcode`; underscores in names are read as
    /// dashes.  A missing directory or file leaves the built-in table in
    /// place and returns `Ok(0)`.
    pub fn load_codepoints(&mut self, family: IconFamily, dir: &Path) -> Result<usize> {
        let file = dir.join("codepoints");
        if !file.exists() {
            debug!("No codepoints file in '{}'; using built-in glyphs", dir.display());
            return Ok(0);
        }

        let raw = std::fs::read_to_string(&file)
            .map_err(|e| BarError::Config(format!("cannot read '{}': {e}", file.display())))?;

        let mut loaded = 0;
        for (lineno, line) in raw.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let parsed = line
                .split_once(char::is_whitespace)
                .and_then(|(name, code)| {
                    let code = u32::from_str_radix(code.trim().trim_start_matches("0x"), 16).ok()?;
                    Some((name.replace('_', "-"), char::from_u32(code)?))
                });
            match parsed {
                Some((name, glyph)) => {
                    self.glyphs.insert((family, name), glyph);
                    loaded += 1;
                }
                None => warn!("{}:{}: unreadable codepoint entry", file.display(), lineno + 1),
            }
        }
        Ok(loaded)
    }

    /// Look up a glyph.  Returns `None` for names no table knows.
    pub fn get(&self, family: IconFamily, name: &str) -> Option<Icon> {
        let glyph = *self.glyphs.get(&(family, name.to_string()))?;
        Some(Icon { glyph, font: self.font(family) })
    }

    /// Font family name to request for `family`'s glyphs.
    pub fn font(&self, family: IconFamily) -> &'static str {
        match (self.style, family) {
            (IconStyle::Nerd, _)                          => NERD_FONT,
            (IconStyle::Material, IconFamily::Material)   => "Material Icons",
            (IconStyle::Material, IconFamily::MaterialCommunity) => "Material Design Icons",
            (IconStyle::Material, IconFamily::Ionicons)   => "Ionicons",
        }
    }
}
