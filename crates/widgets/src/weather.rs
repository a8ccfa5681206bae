use crate::output::{spacer, Output, Span};
use crate::Widget;
use chrono::{DateTime, Local};
use mybar_core::state::{AppState, Condition};
use mybar_theme::{IconFamily, Theme};

/// Icon shown for conditions without a dedicated glyph.
pub const FALLBACK_ICON: &str = "warning-outline";

/// Icon name for a weather condition.
///
/// Clear skies show the night icon once `now` is past a known `sunset`.
pub fn icon_name(
    condition: Condition,
    sunset: Option<DateTime<Local>>,
    now: DateTime<Local>,
) -> &'static str {
    use Condition::*;
    match condition {
        Thunderstorm | TropicalStorm | Hurricane => "weather-stormy",
        Drizzle | Hail => "weather-shower",
        Rain => "weather-downpour",
        Snow | Sleet => "weather-snow",
        Mist | Smoke | Whirls | Haze | Fog => "weather-windy-cloudy",
        Clear => match sunset {
            Some(sunset) if now > sunset => "weather-night",
            _ => "weather-sunny",
        },
        PartlyCloudy => "weather-partly-sunny",
        Cloudy | Overcast => "weather-cloudy",
        Tornado | Windy => "weather-windy",
        Dust | Sand | Ash | Squalls | Hot | Cold | Unknown => FALLBACK_ICON,
    }
}

/// Current conditions icon and temperature in whole degrees Celsius.
#[derive(Debug, Default)]
pub struct WeatherWidget;

impl WeatherWidget {
    pub fn new() -> Self {
        Self
    }
}

impl Widget for WeatherWidget {
    fn kind(&self) -> &str {
        "weather"
    }

    fn render(&self, state: &AppState, theme: &Theme) -> Option<Output> {
        let w = state.weather.as_ref()?;
        let icon = icon_name(w.condition, w.sunset, state.time);

        Some(Output::new(vec![
            Span::icon(theme.icon(IconFamily::MaterialCommunity, icon)),
            spacer(),
            Span::text(format!("{}℃", w.temperature_c.trunc() as i64)),
        ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use mybar_core::state::Weather;

    fn at(hour: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 6, 1, hour, 0, 0).unwrap()
    }

    #[test]
    fn every_condition_has_an_icon() {
        let theme = Theme::default();
        for c in Condition::ALL {
            let name = icon_name(c, None, at(12));
            assert!(!name.is_empty());
            assert!(
                theme.icon(IconFamily::MaterialCommunity, name).is_some(),
                "{c:?} → {name} has no glyph"
            );
        }
    }

    #[test]
    fn table_entries() {
        assert_eq!(icon_name(Condition::Hurricane, None, at(12)), "weather-stormy");
        assert_eq!(icon_name(Condition::Hail, None, at(12)), "weather-shower");
        assert_eq!(icon_name(Condition::Rain, None, at(12)), "weather-downpour");
        assert_eq!(icon_name(Condition::Sleet, None, at(12)), "weather-snow");
        assert_eq!(icon_name(Condition::Haze, None, at(12)), "weather-windy-cloudy");
        assert_eq!(icon_name(Condition::PartlyCloudy, None, at(12)), "weather-partly-sunny");
        assert_eq!(icon_name(Condition::Overcast, None, at(12)), "weather-cloudy");
        assert_eq!(icon_name(Condition::Tornado, None, at(12)), "weather-windy");
    }

    #[test]
    fn unmapped_conditions_fall_back() {
        assert_eq!(icon_name(Condition::Dust, None, at(12)), FALLBACK_ICON);
        assert_eq!(icon_name(Condition::Unknown, None, at(12)), FALLBACK_ICON);
    }

    #[test]
    fn clear_sky_day_and_night() {
        let sunset = Some(at(21));
        assert_eq!(icon_name(Condition::Clear, sunset, at(12)), "weather-sunny");
        assert_eq!(icon_name(Condition::Clear, sunset, at(22)), "weather-night");
        // Without a sunset the day icon is used.
        assert_eq!(icon_name(Condition::Clear, None, at(23)), "weather-sunny");
    }

    #[test]
    fn renders_truncated_temperature() {
        let theme = Theme::default();
        let mut state = AppState::default();
        state.time = at(12);
        state.weather = Some(Weather {
            condition: Condition::Rain,
            temperature_c: -3.7,
            sunset: None,
        });

        let out = WeatherWidget::new().render(&state, &theme).unwrap();
        assert!(out.plain_text().ends_with(" -3℃"));
        assert!(out.has_markup());

        state.weather = None;
        assert!(WeatherWidget::new().render(&state, &theme).is_none());
    }
}
