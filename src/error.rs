use std::io;

use thiserror::Error;

/// Result alias used by the document driver.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("cannot read sentence {sentence}: {message}")]
    Read { sentence: usize, message: String },
}
