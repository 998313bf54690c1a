//! Feed selection mode
//!
//! Which ordering a feed request asks for. Parsing never fails: an unknown or
//! missing mode selects the chronological feed.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedMode {
    /// Every post, shuffled
    Random,
    /// Posts inside the recent window, newest first
    LastMinute,
    /// Every post, oldest first
    #[default]
    Chronological,
}

impl FeedMode {
    /// Resolve a raw `mode` query value. Matching is exact.
    pub fn from_param(mode: &str) -> Self {
        match mode {
            "random" => FeedMode::Random,
            "last_minute" => FeedMode::LastMinute,
            "chronological" => FeedMode::Chronological,
            _ => FeedMode::default(),
        }
    }
}

impl From<Option<&str>> for FeedMode {
    fn from(mode: Option<&str>) -> Self {
        mode.map(FeedMode::from_param).unwrap_or_default()
    }
}

impl std::fmt::Display for FeedMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedMode::Random => write!(f, "random"),
            FeedMode::LastMinute => write!(f, "last_minute"),
            FeedMode::Chronological => write!(f, "chronological"),
        }
    }
}
