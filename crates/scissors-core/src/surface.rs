// Author: Dustin Pilgrim
// License: MIT

use crate::rect::{Point, Rect};

/// 2D drawing sink used by `SelectableRect::render`.
///
/// Colours are `0xAARRGGBB`.
pub trait Surface {
    fn fill_rect(&mut self, rect: Rect, argb: u32);

    fn stroke_dashed_rect(&mut self, rect: Rect, argb: u32, width: f32, dash: f32);

    /// `origin` is the left end of the text baseline.
    fn draw_text(&mut self, text: &str, origin: Point, size: f32, argb: u32);
}
