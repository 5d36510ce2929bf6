// Author: Dustin Pilgrim
// License: MIT

pub mod config;
pub mod damage;
pub mod error;
pub mod logging;
pub mod paths;
pub mod pixmap;
pub mod scene;

pub use damage::DamageTracker;
pub use error::{ConfigError, ScriptError, SurfaceError};
pub use pixmap::PixmapSurface;
pub use scene::{Scene, Step};
