//! Error type shared by the signature arithmetic, the dictionary loader and the search.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnagramError {
    /// `subtract(x, y)` was asked to remove letters `x` does not have.
    /// `available` is 0 when the letter is missing from `x` entirely.
    #[error("invalid subtraction: cannot remove {requested} of {letter:?}, only {available} available")]
    InvalidSubtraction {
        letter: char,
        available: usize,
        requested: usize,
    },

    /// Caller-supplied pairs break the signature invariants.
    #[error("malformed signature: {reason}")]
    MalformedSignature { reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
