use serde::{Deserialize, Serialize};

/// One lookup request: a free-text place name or a coordinate pair.
/// Exactly one variant is active per lookup; no history is kept.
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    Place(String),
    Coords { lat: f64, lon: f64 },
}

/// Device position as reported by a locator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl From<Coordinates> for Query {
    fn from(c: Coordinates) -> Self {
        Query::Coords { lat: c.lat, lon: c.lon }
    }
}

/// Normalized weather result for one query at one point in time.
///
/// A snapshot only exists for a provider response that signalled success;
/// any other outcome is surfaced as an error instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub location_name: String,
    pub description: String,
    /// Provider icon code, e.g. "01d". Mapped to a glyph at render time.
    pub icon_code: String,
    pub temperature_c: f64,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    /// Offset of the location's local clock from UTC, in seconds.
    pub utc_offset_secs: i32,
}
