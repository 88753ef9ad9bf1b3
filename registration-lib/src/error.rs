//! Error types

/// Failure while replacing the registration screen with the next one.
#[derive(Debug, thiserror::Error)]
pub enum NavigationError {
    /// The target screen could not be loaded.
    #[error("Screen '{screen}' is not available")]
    ScreenUnavailable { screen: String },

    /// Terminal or window I/O failed while switching screens.
    #[error("I/O error while switching screens: {0}")]
    Io(#[from] std::io::Error),
}

impl NavigationError {
    /// Creates a new screen unavailable error.
    pub fn screen_unavailable(screen: impl Into<String>) -> Self {
        Self::ScreenUnavailable {
            screen: screen.into(),
        }
    }
}
