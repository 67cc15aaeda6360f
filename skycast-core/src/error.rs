use thiserror::Error;

/// Failures of a single lookup or share action. All of these are recovered
/// locally: the app converts them to a visible message and the user can
/// retry with a new query.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The provider answered, but the body signalled a non-success status.
    #[error("No data found")]
    NoData { status: u16, message: Option<String> },

    #[error("Failed to fetch weather data")]
    Transport(#[source] reqwest::Error),

    #[error("Failed to fetch weather data")]
    Parse(#[source] serde_json::Error),

    #[error("Failed to get your location. Please enable location access.")]
    Location(#[from] LocationError),

    #[error("No weather data to share.")]
    NothingToShare,
}

/// Failures while acquiring the device position.
#[derive(Debug, Error)]
pub enum LocationError {
    #[error("Location access denied")]
    Denied,

    #[error("Location service unavailable")]
    Unavailable,

    #[error("Location error: {0}")]
    Other(String),
}
