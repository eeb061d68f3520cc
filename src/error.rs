use thiserror::Error;

#[derive(Error, Debug)]
pub enum ColouredTextError {
    #[error("Log file error: {0}")]
    IO(#[from] std::io::Error),

    #[error("Logger error: {0}")]
    Logger(#[from] log::SetLoggerError),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, ColouredTextError>;
