use thiserror::Error;

/// Errors that can occur while fetching or parsing the settings payload.
///
/// Per-item validation failures (a bad announcement, an invalid cadence
/// config) are *not* errors — they are contained and defaulted during parse.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Transport failure or non-success HTTP status.
    #[error("Settings fetch failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The top-level payload is not the expected JSON shape.
    #[error("Malformed settings payload: {0}")]
    Payload(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SettingsError>;
