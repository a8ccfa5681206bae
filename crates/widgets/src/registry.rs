use crate::{
    BacklightWidget, BatteryWidget, ClockWidget, GroupToggle, LoadWidget, MediaWidget,
    MemoryWidget, NetSpeedWidget, TempWidget, VolumeWidget, VpnWidget, WeatherWidget, Widget,
    WlanWidget,
};
use mybar_config::BarConfig;

/// Construct the widget for a layout entry, wired to the configured
/// devices and commands.  Returns `None` for unknown kinds.
pub fn build(kind: &str, cfg: &BarConfig) -> Option<Box<dyn Widget>> {
    let dev = &cfg.devices;
    let cmd = &cfg.commands;

    let widget: Box<dyn Widget> = match kind {
        "media"        => Box::new(MediaWidget::new(&dev.media_player)),
        "wlan"         => Box::new(WlanWidget::new(&dev.wlan)),
        "vpn"          => Box::new(VpnWidget::new(&dev.vpn)),
        "netspeed"     => Box::new(NetSpeedWidget::new(&dev.net_interface)),
        "cputemp"      => Box::new(TempWidget::new()),
        "backlight"    => Box::new(BacklightWidget::new(&dev.backlight)),
        "meminfo"      => Box::new(MemoryWidget::new(&cmd.task_manager)),
        "group-toggle" => Box::new(GroupToggle::new()),
        "sysinfo"      => Box::new(LoadWidget::new(&cmd.task_manager)),
        "volume"       => Box::new(VolumeWidget::new(&dev.mixer)),
        "weather"      => Box::new(WeatherWidget::new()),
        "battery"      => Box::new(BatteryWidget::new()),
        "clock"        => Box::new(ClockWidget::new(&cmd.calendar)),
        _ => return None,
    };
    Some(widget)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_is_fully_buildable() {
        let cfg = BarConfig::default();
        for kind in &cfg.layout.order {
            let widget = build(kind, &cfg).unwrap_or_else(|| panic!("cannot build {kind}"));
            assert_eq!(widget.kind(), kind);
        }
    }

    #[test]
    fn devices_become_instances() {
        let cfg = BarConfig::default();
        let net = build("netspeed", &cfg).unwrap();
        assert_eq!(net.instance(), Some("eno1"));
    }

    #[test]
    fn unknown_kind() {
        assert!(build("spotify", &BarConfig::default()).is_none());
    }
}
