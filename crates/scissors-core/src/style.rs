// Author: Dustin Pilgrim
// License: MIT

use crate::error::ColourError;

/// Colours and stroke settings for drawing crop rects.
///
/// Built once (defaults or config) and passed by reference to every render
/// call; nothing here is mutated while drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    pub fill: u32,          // ARGB
    pub fill_selected: u32, // ARGB
    pub label: u32,
    pub label_selected: u32,
    pub border: u32,
    pub handle: u32,
    pub border_width: f32,
    pub dash: f32,
    pub label_size: f32,
    pub label_offset: (i32, i32),
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            fill: 0x5555_5555,
            fill_selected: 0x5500_0077,
            label: 0xFF80_8080,
            label_selected: 0xFF00_00FF,
            border: 0xFF00_0000,
            handle: 0xFF00_0000,
            border_width: 1.0,
            dash: 9.0,
            label_size: 24.0,
            label_offset: (5, 2),
        }
    }
}

impl RenderStyle {
    pub fn fill_for(&self, selected: bool) -> u32 {
        if selected { self.fill_selected } else { self.fill }
    }

    pub fn label_for(&self, selected: bool) -> u32 {
        if selected { self.label_selected } else { self.label }
    }
}

/// Parses `#RRGGBB` (opaque) or `#AARRGGBB`.
pub fn parse_hex_colour(s: &str) -> Result<u32, ColourError> {
    let hex = s.trim().strip_prefix('#').ok_or(ColourError::MissingHash)?;

    if hex.len() != 6 && hex.len() != 8 {
        return Err(ColourError::BadLength(hex.len()));
    }
    // from_str_radix would accept a leading sign
    if !hex.bytes().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColourError::InvalidHex);
    }
    let value = u32::from_str_radix(hex, 16).map_err(|_| ColourError::InvalidHex)?;

    if hex.len() == 6 {
        Ok(0xFF00_0000 | value)
    } else {
        Ok(value)
    }
}

#[inline]
pub fn a(argb: u32) -> u8 {
    ((argb >> 24) & 0xFF) as u8
}
#[inline]
pub fn r(argb: u32) -> u8 {
    ((argb >> 16) & 0xFF) as u8
}
#[inline]
pub fn g(argb: u32) -> u8 {
    ((argb >> 8) & 0xFF) as u8
}
#[inline]
pub fn b(argb: u32) -> u8 {
    (argb & 0xFF) as u8
}
