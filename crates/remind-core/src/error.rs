use thiserror::Error;

/// Errors raised by the core crate itself.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Engine configuration file / env overrides failed to load.
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
