// Author: Dustin Pilgrim
// License: MIT

use serde::{Deserialize, Serialize};

use crate::rect::{Point, Rect};

/// Side length of the square grab box drawn on each corner of a selected rect.
pub const CORNERBOX_SIZE: i32 = 6;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    BottomLeft,
    BottomRight,
    TopRight,
}

impl Corner {
    /// Hit-test order for corner boxes.
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::BottomLeft,
        Corner::BottomRight,
        Corner::TopRight,
    ];

    pub fn opposite(self) -> Corner {
        match self {
            Corner::TopLeft => Corner::BottomRight,
            Corner::BottomLeft => Corner::TopRight,
            Corner::BottomRight => Corner::TopLeft,
            Corner::TopRight => Corner::BottomLeft,
        }
    }

    pub fn point_on(self, r: &Rect) -> Point {
        match self {
            Corner::TopLeft => r.top_left(),
            Corner::BottomLeft => r.bottom_left(),
            Corner::BottomRight => r.bottom_right(),
            Corner::TopRight => r.top_right(),
        }
    }

    /// Grab box centred on this corner of `r`.
    pub fn box_on(self, r: &Rect) -> Rect {
        let half = CORNERBOX_SIZE / 2;
        let c = self.point_on(r);
        Rect::new(
            c.x.saturating_sub(half),
            c.y.saturating_sub(half),
            CORNERBOX_SIZE,
            CORNERBOX_SIZE,
        )
    }
}
