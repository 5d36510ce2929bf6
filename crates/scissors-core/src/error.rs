// Author: Dustin Pilgrim
// License: MIT

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColourError {
    #[error("colour must start with #")]
    MissingHash,

    #[error("colour must be 6 or 8 hex digits (RRGGBB or AARRGGBB), got {0}")]
    BadLength(usize),

    #[error("invalid hex colour")]
    InvalidHex,
}
