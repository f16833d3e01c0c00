//! Error types shared by the demo crates.

use thiserror::Error;

/// Result type for demo operations that write output.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering demo output.
#[derive(Error, Debug)]
pub enum Error {
    /// The output sink rejected a write.
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    /// The pretty printer produced bytes that are not valid UTF-8.
    #[error("Rendered output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// The requested line width is outside what the printer supports.
    #[error("Line width must be between 1 and 65536, got {0}")]
    Columns(usize),

    /// Logging was already installed for this process.
    #[error("Failed to install logging: {0}")]
    Logging(String),
}
