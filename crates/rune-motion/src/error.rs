//! Error types for loading animation sets and parsing timing functions.
//!
//! Registry operations themselves are total and never produce these.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for animation set operations.
pub type Result<T> = std::result::Result<T, MotionError>;

/// Errors that can occur while loading an animation set.
#[derive(Error, Debug)]
pub enum MotionError {
    /// The animation set file could not be read.
    #[error("failed to read animation set {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The JSON document is not a valid animation set.
    #[error("invalid JSON animation set: {0}")]
    Json(#[from] serde_json::Error),

    /// The TOML document is not a valid animation set.
    #[error("invalid TOML animation set: {0}")]
    Toml(#[from] toml::de::Error),

    /// The file extension is neither `.json` nor `.toml`.
    #[error("unsupported animation set format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
}

/// Errors produced when a CSS timing function string is malformed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EasingParseError {
    /// Not a known keyword or function.
    #[error("unknown timing function `{0}`")]
    Unknown(String),

    /// The function is known but its arguments are not.
    #[error("invalid arguments for {function}(): `{arguments}`")]
    InvalidArguments {
        function: &'static str,
        arguments: String,
    },

    /// A `cubic-bezier()` x coordinate lies outside `[0, 1]`.
    #[error("cubic-bezier x values must be in [0, 1], got {x1} and {x2}")]
    ControlPointOutOfRange { x1: f32, x2: f32 },

    /// `steps()` was given fewer intervals than its position allows.
    #[error("steps() needs at least {minimum} interval(s), got {count}")]
    TooFewSteps { count: u32, minimum: u32 },
}
