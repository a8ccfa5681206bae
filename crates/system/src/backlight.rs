use mybar_core::{BarError, Result};
use std::path::{Path, PathBuf};

/// Root of the Linux sysfs backlight class.
pub const SYSFS_BACKLIGHT: &str = "/sys/class/backlight";

/// Sysfs directory of the backlight device called `name`.
pub fn device_dir(name: &str) -> PathBuf {
    Path::new(SYSFS_BACKLIGHT).join(name)
}

/// Read the current brightness of the backlight at `dir` as a percentage
/// of its maximum.
pub fn read_backlight(dir: &Path) -> Result<f64> {
    let max   = read_level(&dir.join("max_brightness"))?;
    let level = read_level(&dir.join("brightness"))?;

    if max <= 0.0 {
        return Err(BarError::System(format!(
            "'{}' reports a max brightness of {max}",
            dir.display()
        )));
    }

    Ok(level / max * 100.0)
}

fn read_level(path: &Path) -> Result<f64> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| BarError::System(format!("cannot read '{}': {e}", path.display())))?;
    raw.trim()
        .parse::<f64>()
        .map_err(|e| BarError::System(format!("bad value in '{}': {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fake_device(brightness: &str, max: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("brightness"), brightness).unwrap();
        std::fs::write(dir.path().join("max_brightness"), max).unwrap();
        dir
    }

    #[test]
    fn percentage_of_max() {
        let dev = fake_device("375\n", "1500\n");
        let pct = read_backlight(dev.path()).unwrap();
        assert!((pct - 25.0).abs() < 1e-9);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("max_brightness"), "100").unwrap();
        assert!(matches!(read_backlight(dir.path()), Err(BarError::System(_))));
    }

    #[test]
    fn zero_max_is_an_error() {
        let dev = fake_device("0", "0");
        assert!(read_backlight(dev.path()).is_err());
    }

    #[test]
    fn garbage_is_an_error() {
        let dev = fake_device("bright", "100");
        assert!(read_backlight(dev.path()).is_err());
    }
}
