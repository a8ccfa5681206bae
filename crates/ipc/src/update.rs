use mybar_core::{BarError, Result, Update};

/// Parse one feed line into an [`Update`].
///
/// Blank lines are keep-alives and yield `Ok(None)`.
pub fn parse_update(line: &str) -> Result<Option<Update>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    serde_json::from_str(line)
        .map(Some)
        .map_err(|e| BarError::Ipc(format!("bad update '{}': {e}", preview(line))))
}

/// First few characters of a line for log messages.
fn preview(line: &str) -> String {
    const MAX: usize = 48;
    if line.chars().count() <= MAX {
        line.to_string()
    } else {
        let head: String = line.chars().take(MAX).collect();
        format!("{head}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mybar_core::state::{Condition, VpnState};

    #[test]
    fn parse_weather_update() {
        let update = parse_update(
            r#"{"source":"weather","value":{"condition":"partly_cloudy","temperature_c":17.8}}"#,
        )
        .unwrap()
        .unwrap();
        match update {
            Update::Weather(w) => {
                assert_eq!(w.condition, Condition::PartlyCloudy);
                assert_eq!(w.temperature_c, 17.8);
            }
            other => panic!("wrong variant: {other:?}"),
        }
    }

    #[test]
    fn parse_vpn_update() {
        let update = parse_update(r#"{"source":"vpn","value":{"state":"waiting"}}"#)
            .unwrap()
            .unwrap();
        assert!(matches!(update, Update::Vpn(v) if v.state == VpnState::Waiting));
    }

    #[test]
    fn parse_error_update() {
        let update = parse_update(
            r#"{"source":"error","value":{"source":"weather","message":"HTTP 503"}}"#,
        )
        .unwrap()
        .unwrap();
        assert_eq!(update.source(), "weather");
    }

    #[test]
    fn blank_line_is_keepalive() {
        assert!(parse_update("   ").unwrap().is_none());
    }

    #[test]
    fn unknown_source_is_rejected() {
        let err = parse_update(r#"{"source":"gpu","value":{}}"#).unwrap_err();
        assert!(matches!(err, BarError::Ipc(_)));
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(parse_update("{not json").is_err());
    }
}
