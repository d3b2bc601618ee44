//! Error types for the interaction engine.
//!
//! Most invalid input in this engine is absorbed silently by design:
//! selecting, expanding or navigating to an unknown key is a no-op, and
//! structural misconfiguration degrades to a standard-compliant subset of
//! attributes. Errors exist only at the boundary with the host UI — an
//! [`OverlayHost`](crate::overlay::OverlayHost) may fail to apply scroll
//! locking or background inerting, and those failures surface from
//! [`OverlayController::open`](crate::overlay::OverlayController::open).

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur at the host boundary.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The host failed to lock background scrolling for a modal overlay.
    #[error("failed to lock host scrolling: {0}")]
    ScrollLock(String),

    /// The host failed to update the inert state of background content.
    #[error("failed to update background inert state: {0}")]
    InertBackground(String),

    /// Any other host adapter failure.
    #[error("overlay host error: {0}")]
    Host(String),
}

impl Error {
    /// Create a scroll-lock error.
    pub fn scroll_lock(message: impl Into<String>) -> Self {
        Self::ScrollLock(message.into())
    }

    /// Create an inert-background error.
    pub fn inert_background(message: impl Into<String>) -> Self {
        Self::InertBackground(message.into())
    }

    /// Create a generic host error.
    pub fn host(message: impl Into<String>) -> Self {
        Self::Host(message.into())
    }
}
