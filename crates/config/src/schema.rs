use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Root configuration structure parsed from `mybar.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BarConfig {
    /// Global runtime settings.
    pub global: GlobalConfig,
    /// Named colours used by widgets (`good`, `degraded`, `bad`, `dim-icon`, …).
    pub colors: ColorsConfig,
    /// Icon font selection and glyph table locations.
    pub icons: IconsConfig,
    /// Device names handed to each data source.
    pub devices: DevicesConfig,
    /// External commands launched from click handlers.
    pub commands: CommandsConfig,
    /// Widget order and the collapsible group.
    pub layout: LayoutConfig,
}

/// Global settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Unix socket the snapshot feed listens on.  `None` → `$XDG_RUNTIME_DIR/mybar.sock`.
    pub feed_socket: Option<PathBuf>,
    /// Backlight poll interval in seconds.
    pub backlight_interval_secs: u64,
    /// Whether the collapsible group starts hidden.
    pub start_collapsed: bool,
    /// Draw i3bar's separator line after each block.
    pub separator: bool,
    /// Horizontal gap after each block in pixels.
    pub separator_block_width: u32,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            feed_socket:             None,
            backlight_interval_secs: 30,
            start_collapsed:         true,
            separator:               true,
            separator_block_width:   9,
        }
    }
}

/// Colour name → hex code table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorsConfig(pub BTreeMap<String, String>);

impl Default for ColorsConfig {
    fn default() -> Self {
        Self(
            [
                ("good", "#6d6"),
                ("degraded", "#dd6"),
                ("bad", "#d66"),
                ("dim-icon", "#777"),
            ]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        )
    }
}

/// Which glyph set to draw icons from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IconStyle {
    /// Material Design, Material Design community and Ionicons webfonts.
    #[default]
    Material,
    /// A single Nerd Font patched with the same icon families.
    Nerd,
}

/// Icon font settings.  Directories are relative to the home directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IconsConfig {
    pub style:                  IconStyle,
    pub material_dir:           PathBuf,
    pub material_community_dir: PathBuf,
    pub ionicons_dir:           Option<PathBuf>,
}

impl Default for IconsConfig {
    fn default() -> Self {
        Self {
            style:                  IconStyle::Material,
            material_dir:           PathBuf::from(".fonts/material-design-icons"),
            material_community_dir: PathBuf::from(".fonts/MaterialDesign-Webfont"),
            ionicons_dir:           None,
        }
    }
}

/// Device / instance names for each data source.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DevicesConfig {
    pub net_interface: String,
    pub wlan:          String,
    pub vpn:           String,
    pub media_player:  String,
    pub mixer:         String,
    /// Directory name under `/sys/class/backlight`.
    pub backlight:     String,
}

impl Default for DevicesConfig {
    fn default() -> Self {
        Self {
            net_interface: "eno1".to_string(),
            wlan:          "wlp2s0".to_string(),
            vpn:           "vpn0".to_string(),
            media_player:  "DeaDBeeF".to_string(),
            mixer:         "default".to_string(),
            backlight:     "intel_backlight".to_string(),
        }
    }
}

/// External programs launched on left-click.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandsConfig {
    pub calendar:     String,
    pub task_manager: String,
}

impl Default for CommandsConfig {
    fn default() -> Self {
        Self {
            calendar:     "gsimplecal".to_string(),
            task_manager: "xfce4-taskmanager".to_string(),
        }
    }
}

/// Widget order, left to right.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Widget kinds in display order.  `"group-toggle"` places the
    /// collapse/expand button.
    pub order: Vec<String>,
    /// Widget kinds hidden while the group is collapsed.
    pub collapsible: Vec<String>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        let kinds = |list: &[&str]| list.iter().map(|s| s.to_string()).collect();
        Self {
            order: kinds(&[
                "media",
                "wlan",
                "vpn",
                "netspeed",
                "cputemp",
                "backlight",
                "meminfo",
                "group-toggle",
                "sysinfo",
                "volume",
                "weather",
                "battery",
                "clock",
            ]),
            collapsible: kinds(&["wlan", "vpn", "netspeed", "cputemp", "backlight", "meminfo"]),
        }
    }
}
