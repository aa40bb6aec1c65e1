//! Motion token error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while parsing token names or loading override files
#[derive(Error, Debug)]
pub enum MotionError {
    /// A token name that is not part of the fixed token set
    #[error("unknown motion token: {0}")]
    UnknownToken(String),

    /// A curve value that is neither a known name nor four coefficients
    #[error("invalid curve: {0}")]
    InvalidCurve(String),

    /// Malformed override file, including unrecognized keys
    #[error("invalid motion config: {0}")]
    Config(#[from] toml::de::Error),

    /// Overrides that cannot be written as TOML, such as sub-millisecond durations
    #[error("failed to serialize motion config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Override file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for motion token operations
pub type Result<T> = std::result::Result<T, MotionError>;
