//! Severity cutoffs for each metric the bar colours.
//!
//! Tables are ordered most severe first; the first cutoff a value crosses
//! decides its severity, and a value that crosses none is normal.

use mybar_core::state::{Battery, BatteryStatus, SysInfo, Wlan};
pub use mybar_core::Severity;
use std::time::Duration;

/// Which side of the limit counts as crossing it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cutoff {
    Above(f64),
    Below(f64),
}

impl Cutoff {
    pub fn crossed_by(self, value: f64) -> bool {
        match self {
            Self::Above(limit) => value > limit,
            Self::Below(limit) => value < limit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold {
    pub severity: Severity,
    pub cutoff:   Cutoff,
}

const fn above(severity: Severity, limit: f64) -> Threshold {
    Threshold { severity, cutoff: Cutoff::Above(limit) }
}

const fn below(severity: Severity, limit: f64) -> Threshold {
    Threshold { severity, cutoff: Cutoff::Below(limit) }
}

/// Severity of `value` under `table`.
pub fn classify(value: f64, table: &[Threshold]) -> Severity {
    table
        .iter()
        .find(|t| t.cutoff.crossed_by(value))
        .map_or(Severity::Normal, |t| t.severity)
}

/// 1-minute load average.
pub const LOAD_1: &[Threshold] = &[
    above(Severity::Urgent, 128.0),
    above(Severity::Bad, 64.0),
    above(Severity::Degraded, 32.0),
];

/// 15-minute load average.
pub const LOAD_15: &[Threshold] = &[
    above(Severity::Urgent, 64.0),
    above(Severity::Bad, 32.0),
    above(Severity::Degraded, 16.0),
];

/// Load averages run high right after boot; no colour until this much uptime.
pub const LOAD_WARMUP: Duration = Duration::from_secs(10 * 60);

/// Available memory in gigabytes (10⁹ bytes).
pub const FREE_MEMORY_GB: &[Threshold] = &[
    below(Severity::Urgent, 0.5),
    below(Severity::Bad, 1.0),
    below(Severity::Degraded, 2.0),
    above(Severity::Good, 12.0),
];

/// CPU package temperature in °C.
pub const CPU_TEMP_C: &[Threshold] = &[
    above(Severity::Urgent, 90.0),
    above(Severity::Bad, 70.0),
    above(Severity::Degraded, 60.0),
];

/// Battery time remaining in minutes.
pub const BATTERY_MINUTES: &[Threshold] = &[
    below(Severity::Urgent, 5.0),
    below(Severity::Bad, 10.0),
    below(Severity::Degraded, 30.0),
    above(Severity::Good, 45.0),
];

/// Wifi link quality in percent.
pub const WIFI_SIGNAL_PCT: &[Threshold] = &[
    below(Severity::Bad, 25.0),
    below(Severity::Degraded, 50.0),
];

/// Worse of the 1- and 15-minute load severities; normal during warm-up.
pub fn load_severity(info: &SysInfo) -> Severity {
    if info.uptime() < LOAD_WARMUP {
        return Severity::Normal;
    }
    classify(info.loads[0], LOAD_1).max(classify(info.loads[2], LOAD_15))
}

pub fn memory_severity(available_bytes: u64) -> Severity {
    classify(available_bytes as f64 / 1e9, FREE_MEMORY_GB)
}

pub fn temperature_severity(celsius: f64) -> Severity {
    classify(celsius, CPU_TEMP_C)
}

/// Only a discharging battery with a known estimate is judged.
pub fn battery_severity(battery: &Battery) -> Severity {
    match (battery.status, battery.remaining_time()) {
        (BatteryStatus::Discharging, Some(left)) => {
            classify(left.as_secs_f64() / 60.0, BATTERY_MINUTES)
        }
        _ => Severity::Normal,
    }
}

pub fn signal_severity(wlan: &Wlan) -> Severity {
    wlan.signal_percent
        .map_or(Severity::Normal, |pct| classify(f64::from(pct), WIFI_SIGNAL_PCT))
}
