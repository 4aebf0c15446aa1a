// One error type for the whole app.
// Every variant states *where* things went wrong.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Creating the window failed.
    #[error("Window init error: {0}")]
    WindowInit(String),

    /// Updating the window buffer failed.
    #[error("Window update error: {0}")]
    WindowUpdate(String),

    /// Mechanism parameters outside `R >= 1`, `1 <= r < R`, `d >= 0`.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Filesystem failure (save directory, config file).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// PNG encoding failed.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Config file is not valid JSON for `Config`.
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
