// Author: Dustin Pilgrim
// License: MIT

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {message}", path.display())]
    Read { path: PathBuf, message: String },

    #[error("config error at {key}: {message}")]
    Invalid { key: String, message: String },
}

#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("invalid surface size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    #[error("png export failed: {0}")]
    Png(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("bad step \"{step}\": {reason}")]
    BadStep { step: String, reason: String },

    #[error("no rect #{0}")]
    NoSuchRect(usize),
}
