// Author: Dustin Pilgrim
// License: MIT

pub mod corner;
pub mod error;
pub mod host;
pub mod listener;
pub mod rect;
pub mod selectable;
pub mod style;
pub mod surface;

pub use corner::{Corner, CORNERBOX_SIZE};
pub use error::ColourError;
pub use host::{RectHost, RectId, RectRegistry};
pub use listener::RectChangeListener;
pub use rect::{Point, Rect};
pub use selectable::SelectableRect;
pub use style::{parse_hex_colour, RenderStyle};
pub use surface::Surface;
