pub mod colors;
pub mod icons;
pub mod scheme;

pub use colors::Color;
pub use icons::{Icon, IconFamily, Icons};
pub use scheme::ColorScheme;

use mybar_config::{BarConfig, IconStyle};
use mybar_core::{Result, Severity};
use tracing::info;

/// Compiled theme derived from [`BarConfig`]: the colour registry, the
/// icon glyph tables and block spacing.
#[derive(Debug, Clone)]
pub struct Theme {
    pub scheme: ColorScheme,
    pub icons:  Icons,
    /// Ask the host bar to draw a separator after each block.
    pub separator: bool,
    /// Gap after each block in pixels.
    pub separator_block_width: u32,
}

impl Theme {
    /// Build a [`Theme`] from the loaded config, reading any `codepoints`
    /// files from the configured font directories.
    ///
    /// Fails when the home directory cannot be resolved.
    pub fn from_config(cfg: &BarConfig) -> Result<Self> {
        let mut icons = Icons::builtin(cfg.icons.style);

        if cfg.icons.style == IconStyle::Material {
            let mut dirs = vec![
                (IconFamily::Material, mybar_config::home(&cfg.icons.material_dir)?),
                (
                    IconFamily::MaterialCommunity,
                    mybar_config::home(&cfg.icons.material_community_dir)?,
                ),
            ];
            if let Some(dir) = &cfg.icons.ionicons_dir {
                dirs.push((IconFamily::Ionicons, mybar_config::home(dir)?));
            }
            for (family, dir) in dirs {
                let n = icons.load_codepoints(family, &dir)?;
                if n > 0 {
                    info!("Loaded {n} {family:?} glyphs from {}", dir.display());
                }
            }
        }

        Ok(Self {
            scheme: ColorScheme::from_map(&cfg.colors.0),
            icons,
            separator: cfg.global.separator,
            separator_block_width: cfg.global.separator_block_width,
        })
    }

    /// Named colour from the scheme.
    pub fn color(&self, name: &str) -> Option<Color> {
        self.scheme.get(name)
    }

    /// Colour for a severity level (`None` for normal and urgent).
    pub fn severity_color(&self, severity: Severity) -> Option<Color> {
        self.scheme.for_severity(severity)
    }

    pub fn icon(&self, family: IconFamily, name: &str) -> Option<Icon> {
        self.icons.get(family, name)
    }
}

impl Default for Theme {
    /// Built-in colours and glyphs, without touching the filesystem.
    fn default() -> Self {
        let cfg = BarConfig::default();
        Self {
            scheme: ColorScheme::from_map(&cfg.colors.0),
            icons:  Icons::builtin(cfg.icons.style),
            separator: cfg.global.separator,
            separator_block_width: cfg.global.separator_block_width,
        }
    }
}
