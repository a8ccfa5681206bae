use mybar_core::Severity;
use mybar_theme::{Color, Icon, Theme};

/// Relative font sizes, named the way pango names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Size {
    XXSmall,
    XSmall,
    Small,
    Large,
}

impl Size {
    pub fn as_pango(self) -> &'static str {
        match self {
            Self::XXSmall => "xx-small",
            Self::XSmall  => "x-small",
            Self::Small   => "small",
            Self::Large   => "large",
        }
    }
}

/// A run of text with optional styling.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Span {
    pub text:  String,
    pub font:  Option<&'static str>,
    pub color: Option<Color>,
    pub size:  Option<Size>,
}

impl Span {
    pub fn text(text: impl Into<String>) -> Self {
        Self { text: text.into(), ..Self::default() }
    }

    /// An icon glyph in its font.  Unknown icons render as nothing.
    pub fn icon(icon: Option<Icon>) -> Self {
        match icon {
            Some(icon) => Self {
                text: icon.glyph.to_string(),
                font: Some(icon.font),
                ..Self::default()
            },
            None => Self::default(),
        }
    }

    #[must_use]
    pub fn color(mut self, color: Option<Color>) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    /// `true` when the span carries no styling at all.
    pub fn is_plain(&self) -> bool {
        self.font.is_none() && self.color.is_none() && self.size.is_none()
    }
}

/// A single tiny space used between an icon and its text.
pub fn spacer() -> Span {
    Span::text(" ").size(Size::XXSmall)
}

/// What one widget shows for one refresh: styled spans, plus a block-wide
/// colour and urgency flag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Output {
    pub spans:  Vec<Span>,
    pub color:  Option<Color>,
    pub urgent: bool,
}

impl Output {
    pub fn new(spans: Vec<Span>) -> Self {
        Self { spans, ..Self::default() }
    }

    /// Unstyled text.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(vec![Span::text(text)])
    }

    #[must_use]
    pub fn color(mut self, color: Option<Color>) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn urgent(mut self, urgent: bool) -> Self {
        self.urgent = urgent;
        self
    }

    /// Style the block for `severity`: urgent sets the flag, the other
    /// non-normal levels pick their scheme colour.
    #[must_use]
    pub fn severity(self, severity: Severity, theme: &Theme) -> Self {
        match severity {
            Severity::Urgent => self.urgent(true),
            Severity::Normal => self,
            other => self.color(theme.severity_color(other)),
        }
    }

    /// All span text concatenated, without styling.
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// Whether any span needs markup to display.
    pub fn has_markup(&self) -> bool {
        self.spans.iter().any(|s| !s.is_plain())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_styles_block() {
        let theme = Theme::default();
        let out = Output::text("x").severity(Severity::Urgent, &theme);
        assert!(out.urgent);
        assert!(out.color.is_none());

        let out = Output::text("x").severity(Severity::Degraded, &theme);
        assert!(!out.urgent);
        assert_eq!(out.color, Color::from_hex("#dd6"));

        let out = Output::text("x").severity(Severity::Normal, &theme);
        assert_eq!(out, Output::text("x"));
    }

    #[test]
    fn markup_detection() {
        assert!(!Output::text("plain").has_markup());
        assert!(Output::new(vec![Span::text("a"), spacer()]).has_markup());
    }

    #[test]
    fn unknown_icon_is_empty() {
        assert_eq!(Span::icon(None).text, "");
    }
}
