/// Convenience result type used across keytrack.
pub type KeytrackResult<T> = Result<T, KeytrackError>;

/// Top-level error taxonomy used by library APIs.
#[derive(thiserror::Error, Debug)]
pub enum KeytrackError {
    /// Malformed control points handed to a track constructor.
    #[error("invalid track: {0}")]
    InvalidTrack(String),

    /// A sample time that is not a finite number.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// Invalid composition or stage data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl KeytrackError {
    /// Build a [`KeytrackError::InvalidTrack`] value.
    pub fn invalid_track(msg: impl Into<String>) -> Self {
        Self::InvalidTrack(msg.into())
    }

    /// Build a [`KeytrackError::InvalidQuery`] value.
    pub fn invalid_query(msg: impl Into<String>) -> Self {
        Self::InvalidQuery(msg.into())
    }

    /// Build a [`KeytrackError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`KeytrackError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
