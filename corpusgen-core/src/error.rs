use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid size argument: {0:?}")]
    InvalidSize(String),

    #[error("walk error: {0}")]
    Walk(String),
}

// Convenient crate-wide result type
pub type Result<T> = std::result::Result<T, GenError>;
