use crate::format::{format_media_time, truncate};
use crate::output::{spacer, Output, Span};
use crate::Widget;
use mybar_core::state::{AppState, Media, PlaybackStatus};
use mybar_theme::{Color, IconFamily, Theme};

/// Colour of the music icon and playback position.
const ACCENT: Color = Color::rgb(0xff, 0x77, 0x00);

/// Combined character budget for title and artist.
const BUDGET: usize = 40;
/// Soft share of the budget each of title and artist starts with.
const SHARE: usize = 20;

/// Displays the current track of one media player.
///
/// Hidden while the player is stopped or gone.
#[derive(Debug)]
pub struct MediaWidget {
    player: String,
}

impl MediaWidget {
    pub fn new(player: impl Into<String>) -> Self {
        Self { player: player.into() }
    }
}

/// Fit artist and title into [`BUDGET`] characters.  The artist gets up to
/// [`SHARE`] first; a short title hands its unused room back to the artist.
pub fn fit_track(artist: &str, title: &str) -> (String, String) {
    let mut fitted_artist = truncate(artist, SHARE);
    let fitted_title = truncate(title, BUDGET - fitted_artist.chars().count());
    let title_len = fitted_title.chars().count();
    if title_len < SHARE {
        fitted_artist = truncate(artist, BUDGET - title_len);
    }
    (fitted_artist, fitted_title)
}

fn format_track(media: &Media, state: &AppState, theme: &Theme) -> Output {
    let (artist, title) = fit_track(&media.artist, &media.title);
    let music = Span::icon(theme.icon(IconFamily::MaterialCommunity, "music")).color(Some(ACCENT));

    let mut spans = vec![music];
    if media.status == PlaybackStatus::Playing {
        spans.push(spacer().color(Some(ACCENT)));
        spans.push(
            Span::text(format!(
                "{}/{}",
                format_media_time(media.position(state.time)),
                format_media_time(media.length()),
            ))
            .color(Some(ACCENT)),
        );
    }
    spans.extend([spacer(), Span::text(title), Span::text(" - "), Span::text(artist)]);

    Output::new(spans)
}

impl Widget for MediaWidget {
    fn kind(&self) -> &str {
        "media"
    }

    fn instance(&self) -> Option<&str> {
        Some(&self.player)
    }

    fn render(&self, state: &AppState, theme: &Theme) -> Option<Output> {
        let media = state.media.as_ref()?;
        match media.status {
            PlaybackStatus::Stopped | PlaybackStatus::Disconnected => None,
            PlaybackStatus::Playing | PlaybackStatus::Paused => {
                Some(format_track(media, state, theme))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn media(status: PlaybackStatus, artist: &str, title: &str) -> Media {
        Media {
            status,
            artist: artist.into(),
            title: title.into(),
            position_secs: 75.0,
            length_secs: 3725.0,
            updated_at: None,
        }
    }

    fn render(m: Media) -> Option<Output> {
        let mut state = AppState::default();
        state.time = Local.with_ymd_and_hms(2024, 3, 3, 10, 0, 0).unwrap();
        state.media = Some(m);
        MediaWidget::new("DeaDBeeF").render(&state, &Theme::default())
    }

    #[test]
    fn hidden_when_stopped_or_gone() {
        assert!(render(media(PlaybackStatus::Stopped, "a", "b")).is_none());
        assert!(render(media(PlaybackStatus::Disconnected, "a", "b")).is_none());
    }

    #[test]
    fn playing_shows_position() {
        let out = render(media(PlaybackStatus::Playing, "Boards of Canada", "Roygbiv")).unwrap();
        let text = out.plain_text();
        assert!(text.contains("1:15/1:02:05"), "{text}");
        assert!(text.ends_with("Roygbiv - Boards of Canada"));
        assert_eq!(out.spans[0].color, Some(ACCENT));
        assert_eq!(out.spans[2].color, Some(ACCENT));
    }

    #[test]
    fn paused_shows_only_icon() {
        let out = render(media(PlaybackStatus::Paused, "Air", "La femme d'argent")).unwrap();
        assert!(!out.plain_text().contains('/'));
        assert_eq!(out.spans.len(), 5);
    }

    #[test]
    fn long_fields_share_the_budget() {
        let artist = "A".repeat(30);
        let title = "T".repeat(60);
        let (a, t) = fit_track(&artist, &title);
        assert_eq!(a.chars().count(), 20);
        assert_eq!(t.chars().count(), 20);
        assert!(a.ends_with('⋯') && t.ends_with('⋯'));
    }

    #[test]
    fn short_title_gives_room_to_artist() {
        let artist = "A".repeat(30);
        let (a, t) = fit_track(&artist, "Intro");
        assert_eq!(t, "Intro");
        assert_eq!(a, artist);

        let very_long = "B".repeat(50);
        let (a, _) = fit_track(&very_long, "Intro");
        assert_eq!(a.chars().count(), 35);
    }

    #[test]
    fn budget_counts_characters_not_bytes() {
        // 20 characters, 40 bytes.
        let artist = "é".repeat(20);
        let title = "ü".repeat(20);
        let (a, t) = fit_track(&artist, &title);
        assert_eq!(a, artist);
        assert_eq!(t, title);
    }
}
