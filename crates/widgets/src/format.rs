//! Text formatting helpers shared by the widgets.

use std::time::Duration;

/// Shorten `text` to at most `max` characters, replacing the tail with `⋯`.
///
/// Text that already fits is returned unchanged.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(max - 1).collect();
    out.push('⋯');
    out
}

/// Split a duration into whole hours, minutes and seconds, each truncated.
pub fn hms(d: Duration) -> (u64, u64, u64) {
    let secs = d.as_secs();
    (secs / 3600, secs / 60 % 60, secs % 60)
}

/// `H:MM:SS` when there is at least one hour, else `M:SS`.
pub fn format_media_time(d: Duration) -> String {
    let (h, m, s) = hms(d);
    if h > 0 {
        format!("{h}:{m:02}:{s:02}")
    } else {
        format!("{m}:{s:02}")
    }
}

const IEC_UNITS: &[&str] = &["B", "KiB", "MiB", "GiB", "TiB", "PiB", "EiB"];
const SI_UNITS: &[&str] = &["B", "kB", "MB", "GB", "TB", "PB", "EB"];

/// Byte count in binary units, e.g. `"7.3 GiB"` or `"512 MiB"`.
pub fn format_ibytes(bytes: u64) -> String {
    humanize(bytes as f64, 1024.0, IEC_UNITS)
}

/// Transfer rate in decimal units, e.g. `"1.2 MB/s"`.
pub fn format_byterate(bytes_per_sec: f64) -> String {
    format!("{}/s", humanize(bytes_per_sec.max(0.0).floor(), 1000.0, SI_UNITS))
}

/// Scale `value` to the largest unit it reaches, round to one decimal and
/// show that decimal only below 10.
fn humanize(value: f64, base: f64, units: &[&str]) -> String {
    if value < 10.0 {
        return format!("{} {}", value as u64, units[0]);
    }

    let mut scaled = value;
    let mut exp = 0;
    while scaled >= base && exp + 1 < units.len() {
        scaled /= base;
        exp += 1;
    }

    let rounded = (scaled * 10.0 + 0.5).floor() / 10.0;
    if rounded < 10.0 {
        format!("{rounded:.1} {}", units[exp])
    } else {
        format!("{rounded:.0} {}", units[exp])
    }
}
