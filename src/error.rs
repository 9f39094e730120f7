/// Convenience result type used across viewnav.
pub type ViewnavResult<T> = Result<T, ViewnavError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Errors only arise from host-supplied configuration or counter specs; all
/// runtime paths self-heal (duration flooring, unmeasurable-section skipping)
/// and never surface an error to the host.
#[derive(thiserror::Error, Debug)]
pub enum ViewnavError {
    /// Invalid host-provided configuration or counter spec data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while setting up or wiring counter animations.
    #[error("animation error: {0}")]
    Animation(String),

    /// Wrapped lower-level error from the host integration.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ViewnavError {
    /// Build a [`ViewnavError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ViewnavError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }
}
