/// Convenience result type used across fluxreel.
pub type FluxResult<T> = Result<T, FluxError>;

/// Error taxonomy for the kernel and the value types built on it.
#[derive(thiserror::Error, Debug)]
pub enum FluxError {
    /// Malformed string input (hex colors, timecodes, curve or preset names).
    #[error("format error: {0}")]
    Format(String),

    /// Degenerate numeric input with no defined fallback (e.g. a zero-width range).
    #[error("domain error: {0}")]
    Domain(String),

    /// Invalid composite values such as unsorted keyframes or negative durations.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FluxError {
    /// Build a [`FluxError::Format`] value.
    pub fn format(msg: impl Into<String>) -> Self {
        Self::Format(msg.into())
    }

    /// Build a [`FluxError::Domain`] value.
    pub fn domain(msg: impl Into<String>) -> Self {
        Self::Domain(msg.into())
    }

    /// Build a [`FluxError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FluxError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Return `true` for [`FluxError::Format`].
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format(_))
    }

    /// Return `true` for [`FluxError::Domain`].
    pub fn is_domain(&self) -> bool {
        matches!(self, Self::Domain(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
