/// Convenience result type used across Quadlife.
pub type QuadlifeResult<T> = Result<T, QuadlifeError>;

/// Top-level error taxonomy used by the library APIs.
#[derive(thiserror::Error, Debug)]
pub enum QuadlifeError {
    /// Invalid user-provided configuration or grid data.
    #[error("validation error: {0}")]
    Validation(String),

    /// The upstream contribution calendar was missing or rejected.
    #[error("calendar error: {0}")]
    Calendar(String),

    /// Errors while producing or rasterizing markup.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl QuadlifeError {
    /// Build a [`QuadlifeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`QuadlifeError::Calendar`] value.
    pub fn calendar(msg: impl Into<String>) -> Self {
        Self::Calendar(msg.into())
    }

    /// Build a [`QuadlifeError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`QuadlifeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for QuadlifeError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
