pub mod schema;
pub mod watcher;

pub use schema::{
    BarConfig, ColorsConfig, CommandsConfig, DevicesConfig, GlobalConfig, IconStyle, IconsConfig,
    LayoutConfig,
};
pub use watcher::ConfigWatcher;

use mybar_core::{BarError, Result};
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file.  Returns `BarConfig::default()` if
/// the file doesn't exist so the bar always has sensible defaults.
pub fn load(path: impl AsRef<Path>) -> Result<BarConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(BarConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| BarError::Config(format!("cannot read '{}': {e}", path.display())))?;

    parse(&raw)
}

/// Parse a config document.  Colour names missing from `[colors]` keep
/// their built-in values.
pub fn parse(raw: &str) -> Result<BarConfig> {
    let mut config: BarConfig =
        toml::from_str(raw).map_err(|e| BarError::Config(format!("TOML parse error: {e}")))?;

    for (name, hex) in ColorsConfig::default().0 {
        config.colors.0.entry(name).or_insert(hex);
    }

    Ok(config)
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("mybar").join("mybar.toml")
}

/// Resolve `path` against the current user's home directory.
///
/// Absolute paths are returned unchanged.  Fails when `$HOME` is unset or
/// empty; callers treat that as fatal at startup.
pub fn home(path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    match std::env::var_os("HOME") {
        Some(dir) if !dir.is_empty() => Ok(PathBuf::from(dir).join(path)),
        _ => Err(BarError::Config("cannot resolve home directory: $HOME is not set".into())),
    }
}

/// Socket path for the snapshot feed.
pub fn feed_socket_path(global: &GlobalConfig) -> PathBuf {
    if let Some(path) = &global.feed_socket {
        return path.clone();
    }
    let runtime_dir = std::env::var("XDG_RUNTIME_DIR").unwrap_or_else(|_| "/tmp".to_string());
    PathBuf::from(runtime_dir).join("mybar.sock")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load(dir.path().join("nope.toml")).unwrap();
        assert_eq!(cfg.devices.net_interface, "eno1");
        assert_eq!(cfg.layout.order.first().map(String::as_str), Some("media"));
        assert_eq!(cfg.layout.order.last().map(String::as_str), Some("clock"));
    }

    #[test]
    fn partial_colors_keep_builtin_names() {
        let cfg = parse("[colors]\nbad = \"#f00\"\nspecial = \"#123456\"\n").unwrap();
        assert_eq!(cfg.colors.0.get("bad").map(String::as_str), Some("#f00"));
        assert_eq!(cfg.colors.0.get("good").map(String::as_str), Some("#6d6"));
        assert_eq!(cfg.colors.0.get("special").map(String::as_str), Some("#123456"));
    }

    #[test]
    fn file_overrides_sections() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[devices]\nnet_interface = \"enp3s0\"\n\n[icons]\nstyle = \"nerd\"\n\n[layout]\norder = [\"clock\"]\n"
        )
        .unwrap();

        let cfg = load(file.path()).unwrap();
        assert_eq!(cfg.devices.net_interface, "enp3s0");
        assert_eq!(cfg.devices.wlan, "wlp2s0");
        assert_eq!(cfg.icons.style, IconStyle::Nerd);
        assert_eq!(cfg.layout.order, vec!["clock".to_string()]);
        assert!(!cfg.layout.collapsible.is_empty());
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(matches!(parse("[global"), Err(BarError::Config(_))));
    }

    #[test]
    fn absolute_paths_skip_home() {
        let p = home("/usr/share/fonts").unwrap();
        assert_eq!(p, PathBuf::from("/usr/share/fonts"));
    }

    #[test]
    fn explicit_feed_socket_wins() {
        let global = GlobalConfig {
            feed_socket: Some(PathBuf::from("/run/bar.sock")),
            ..GlobalConfig::default()
        };
        assert_eq!(feed_socket_path(&global), PathBuf::from("/run/bar.sock"));
    }
}
