use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// Central application state — all widgets read from this snapshot.
///
/// Every data source keeps only its latest value; `None` means the source
/// has not reported yet.
#[derive(Debug, Clone)]
pub struct AppState {
    pub weather:   Option<Weather>,
    pub battery:   Option<Battery>,
    pub media:     Option<Media>,
    pub volume:    Option<Volume>,
    pub sysinfo:   Option<SysInfo>,
    pub meminfo:   Option<MemInfo>,
    pub cpu_temp:  Option<CpuTemp>,
    pub netspeed:  Option<NetSpeed>,
    pub wlan:      Option<Wlan>,
    pub vpn:       Option<Vpn>,
    /// Screen backlight level in percent.
    pub backlight: Option<f64>,
    /// Latest error per source name; cleared by the next good snapshot.
    pub errors:    HashMap<String, String>,
    /// Whether the collapsible widget group is currently hidden.
    pub group_collapsed: bool,
    /// Current local time (updated every second).
    pub time:      DateTime<Local>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            weather:   None,
            battery:   None,
            media:     None,
            volume:    None,
            sysinfo:   None,
            meminfo:   None,
            cpu_temp:  None,
            netspeed:  None,
            wlan:      None,
            vpn:       None,
            backlight: None,
            errors:    HashMap::new(),
            group_collapsed: true,
            time:      Local::now(),
        }
    }
}

impl AppState {
    /// Store a fresh snapshot, replacing the previous one for its source.
    pub fn apply(&mut self, update: Update) {
        let source = update.source().to_string();
        match update {
            Update::Weather(w)  => self.weather  = Some(w),
            Update::Battery(b)  => self.battery  = Some(b),
            Update::Media(m)    => self.media    = Some(m),
            Update::Volume(v)   => self.volume   = Some(v),
            Update::Sysinfo(s)  => self.sysinfo  = Some(s),
            Update::Meminfo(m)  => self.meminfo  = Some(m),
            Update::Cputemp(t)  => self.cpu_temp = Some(t),
            Update::Netspeed(n) => self.netspeed = Some(n),
            Update::Wlan(w)     => self.wlan     = Some(w),
            Update::Vpn(v)      => self.vpn      = Some(v),
            Update::Error { message, .. } => {
                self.errors.insert(source, message);
                return;
            }
        }
        self.errors.remove(&source);
    }

    pub fn set_backlight(&mut self, pct: f64) {
        self.backlight = Some(pct);
        self.errors.remove("backlight");
    }

    pub fn error_for(&self, source: &str) -> Option<&str> {
        self.errors.get(source).map(String::as_str)
    }
}

/// One message from the snapshot feed.
///
/// Wire shape: `{"source": "battery", "value": { ... }}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "source", content = "value", rename_all = "snake_case")]
pub enum Update {
    Weather(Weather),
    Battery(Battery),
    Media(Media),
    Volume(Volume),
    Sysinfo(SysInfo),
    Meminfo(MemInfo),
    Cputemp(CpuTemp),
    Netspeed(NetSpeed),
    Wlan(Wlan),
    Vpn(Vpn),
    /// The collector for `source` failed on this tick.
    Error { source: String, message: String },
}

impl Update {
    /// Name of the source this update belongs to (matches the widget kind).
    pub fn source(&self) -> &str {
        match self {
            Self::Weather(_)  => "weather",
            Self::Battery(_)  => "battery",
            Self::Media(_)    => "media",
            Self::Volume(_)   => "volume",
            Self::Sysinfo(_)  => "sysinfo",
            Self::Meminfo(_)  => "meminfo",
            Self::Cputemp(_)  => "cputemp",
            Self::Netspeed(_) => "netspeed",
            Self::Wlan(_)     => "wlan",
            Self::Vpn(_)      => "vpn",
            Self::Error { source, .. } => source,
        }
    }
}

// ── Weather ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Weather {
    pub condition:     Condition,
    pub temperature_c: f64,
    /// Today's sunset, when the provider reports one.
    #[serde(default)]
    pub sunset:        Option<DateTime<Local>>,
}

/// Weather condition categories reported by the weather collector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Thunderstorm,
    TropicalStorm,
    Hurricane,
    Drizzle,
    Hail,
    Rain,
    Snow,
    Sleet,
    Mist,
    Smoke,
    Whirls,
    Haze,
    Fog,
    Clear,
    PartlyCloudy,
    Cloudy,
    Overcast,
    Tornado,
    Windy,
    Dust,
    Sand,
    Ash,
    Squalls,
    Hot,
    Cold,
    #[serde(other)]
    Unknown,
}

impl Condition {
    pub const ALL: [Condition; 26] = [
        Self::Thunderstorm, Self::TropicalStorm, Self::Hurricane, Self::Drizzle,
        Self::Hail, Self::Rain, Self::Snow, Self::Sleet, Self::Mist, Self::Smoke,
        Self::Whirls, Self::Haze, Self::Fog, Self::Clear, Self::PartlyCloudy,
        Self::Cloudy, Self::Overcast, Self::Tornado, Self::Windy, Self::Dust,
        Self::Sand, Self::Ash, Self::Squalls, Self::Hot, Self::Cold, Self::Unknown,
    ];
}

// ── Battery ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Battery {
    pub status:  BatteryStatus,
    /// Charge level (0–100).
    pub percent: u8,
    /// Estimated time until empty (discharging) or full (charging).
    #[serde(default)]
    pub remaining_secs: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatteryStatus {
    Charging,
    Discharging,
    Full,
    NotCharging,
    #[serde(other)]
    Unknown,
}

impl Battery {
    #[must_use]
    pub fn plugged_in(&self) -> bool {
        matches!(self.status, BatteryStatus::Charging | BatteryStatus::Full)
    }

    #[must_use]
    pub fn remaining_time(&self) -> Option<Duration> {
        self.remaining_secs.map(Duration::from_secs)
    }
}

// ── Media ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Media {
    pub status: PlaybackStatus,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub title:  String,
    /// Playback position at `updated_at`, in seconds.
    #[serde(default)]
    pub position_secs: f64,
    /// Track length in seconds.
    #[serde(default)]
    pub length_secs:   f64,
    /// When the collector sampled `position_secs`.
    #[serde(default)]
    pub updated_at:    Option<DateTime<Local>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackStatus {
    Playing,
    Paused,
    Stopped,
    Disconnected,
}

impl Media {
    /// Current playback position, extrapolated from the last sample while
    /// playing and clamped to the track length.
    #[must_use]
    pub fn position(&self, now: DateTime<Local>) -> Duration {
        let mut pos = self.position_secs.max(0.0);
        if self.status == PlaybackStatus::Playing {
            if let Some(at) = self.updated_at {
                let elapsed = (now - at).num_milliseconds().max(0) as f64 / 1000.0;
                pos += elapsed;
            }
        }
        if self.length_secs > 0.0 {
            pos = pos.min(self.length_secs);
        }
        seconds(pos)
    }

    #[must_use]
    pub fn length(&self) -> Duration {
        seconds(self.length_secs)
    }
}

/// Seconds reported by a collector; negative values count as zero and values
/// too large for a `Duration` saturate.
fn seconds(secs: f64) -> Duration {
    Duration::try_from_secs_f64(secs.max(0.0)).unwrap_or(Duration::MAX)
}

// ── Volume ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Volume {
    pub level: i64,
    #[serde(default)]
    pub min:   i64,
    pub max:   i64,
    #[serde(default)]
    pub muted: bool,
}

impl Volume {
    /// Volume as a rounded percentage of the mixer range.
    #[must_use]
    pub fn percent(&self) -> u32 {
        if self.max <= self.min {
            return 0;
        }
        let span = i128::from(self.max) - i128::from(self.min);
        let frac = (i128::from(self.level) - i128::from(self.min)) as f64 / span as f64;
        (frac.clamp(0.0, 1.0) * 100.0).round() as u32
    }
}

// ── System ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SysInfo {
    /// 1, 5 and 15 minute load averages.
    pub loads: [f64; 3],
    pub uptime_secs: u64,
}

impl SysInfo {
    #[must_use]
    pub fn uptime(&self) -> Duration {
        Duration::from_secs(self.uptime_secs)
    }
}

/// Memory counters from `/proc/meminfo`, in bytes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MemInfo {
    pub available: u64,
    pub free:      u64,
    pub buffers:   u64,
    pub cached:    u64,
}

impl MemInfo {
    /// Memory available to new processes. Older kernels lack `MemAvailable`,
    /// in which case free + buffers + cached is used instead.
    #[must_use]
    pub fn available(&self) -> u64 {
        if self.available > 0 {
            self.available
        } else {
            self.free.saturating_add(self.buffers).saturating_add(self.cached)
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CpuTemp {
    pub celsius: f64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct NetSpeed {
    pub tx_bytes_per_sec: f64,
    pub rx_bytes_per_sec: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Wlan {
    #[serde(default)]
    pub ssid: String,
    /// Link quality (0–100), when the driver reports it.
    #[serde(default)]
    pub signal_percent: Option<u8>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Vpn {
    pub state: VpnState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VpnState {
    Connected,
    Waiting,
    Disconnected,
}
