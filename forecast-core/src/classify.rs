//! WMO weather-code classification.
//!
//! The upstream widget used different code bands for its icons and its text
//! captions (the rain icon covered codes up to 67, snow up to 77, while the
//! captions split at 59/69/79/84). Here a single banding drives both, so a
//! card's icon never disagrees with its caption.

/// Display category for a weather code, used to pick the card icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkyKind {
    Clear,
    Cloudy,
    Precipitation,
    Frozen,
    Storm,
}

impl SkyKind {
    pub const fn glyph(self) -> &'static str {
        match self {
            SkyKind::Clear => "☀",
            SkyKind::Cloudy => "☁",
            SkyKind::Precipitation => "☂",
            SkyKind::Frozen => "❄",
            SkyKind::Storm => "⚡",
        }
    }
}

/// Icon category plus short caption for one weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conditions {
    pub kind: SkyKind,
    pub description: &'static str,
}

/// Maps a WMO-style code to a display category and caption using ascending
/// threshold bands. Codes outside 0-99 fall back to an unknown-cloudy card.
pub const fn classify(code: u16) -> Conditions {
    let (kind, description) = match code {
        0 => (SkyKind::Clear, "Clear sky"),
        1 => (SkyKind::Clear, "Mainly clear"),
        2 => (SkyKind::Cloudy, "Partly cloudy"),
        3 => (SkyKind::Cloudy, "Overcast"),
        4..=49 => (SkyKind::Cloudy, "Foggy"),
        50..=59 => (SkyKind::Precipitation, "Drizzle"),
        60..=69 => (SkyKind::Precipitation, "Rain"),
        70..=79 => (SkyKind::Frozen, "Snow"),
        80..=84 => (SkyKind::Precipitation, "Rain showers"),
        85..=99 => (SkyKind::Storm, "Thunderstorm"),
        _ => (SkyKind::Cloudy, "Unknown"),
    };
    Conditions { kind, description }
}
