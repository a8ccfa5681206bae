/// How alarming a reading is.  Ordered from least to most severe, so the
/// worse of two readings is simply their `max`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Comfortably within limits; shown in the scheme's `good` colour.
    Good,
    /// No colour, no flag.
    #[default]
    Normal,
    Degraded,
    Bad,
    /// Sets the block's urgent flag.
    Urgent,
}

impl Severity {
    /// Colour scheme entry for this level, if it is drawn with one.
    pub fn scheme_name(self) -> Option<&'static str> {
        match self {
            Self::Good     => Some("good"),
            Self::Degraded => Some("degraded"),
            Self::Bad      => Some("bad"),
            Self::Normal | Self::Urgent => None,
        }
    }
}
