use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Index {index} out of bounds for {len} pages")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Invalid auto-scroll duration: {0} (must be a positive number of seconds)")]
    InvalidDuration(f64),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
