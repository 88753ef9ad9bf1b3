use registration_lib::NavigationError;

/// Fatal errors that end the application.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Terminal error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Navigation(#[from] NavigationError),
}

pub type Result<T> = std::result::Result<T, AppError>;
