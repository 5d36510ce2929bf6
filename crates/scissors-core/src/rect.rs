// Author: Dustin Pilgrim
// License: MIT

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned integer rectangle in page (canvas) coordinates.
///
/// `w` and `h` are never negative; a rect built from a single point has zero
/// area and contains nothing.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub const fn from_point(p: Point) -> Self {
        Self { x: p.x, y: p.y, w: 0, h: 0 }
    }

    /// Smallest rect whose corners include both points, or `None` when its
    /// size doesn't fit in `i32`.
    pub fn spanning(a: Point, b: Point) -> Option<Self> {
        let left = a.x.min(b.x);
        let top = a.y.min(b.y);
        Some(Self {
            x: left,
            y: top,
            w: a.x.max(b.x).checked_sub(left)?,
            h: a.y.max(b.y).checked_sub(top)?,
        })
    }

    /// Saturates at `i32::MAX`.
    pub const fn right(&self) -> i32 {
        self.x.saturating_add(self.w)
    }

    /// Saturates at `i32::MAX`.
    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add(self.h)
    }

    pub const fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    pub const fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub const fn top_right(&self) -> Point {
        Point::new(self.right(), self.y)
    }

    pub const fn bottom_left(&self) -> Point {
        Point::new(self.x, self.bottom())
    }

    pub const fn bottom_right(&self) -> Point {
        Point::new(self.right(), self.bottom())
    }

    /// Half-open containment: the left/top edges are inside, right/bottom are not.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.y >= self.y && p.x < self.right() && p.y < self.bottom()
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Bounding box of both rects. Zero-area rects still count as points.
    pub fn union(&self, other: &Rect) -> Rect {
        let left = self.x.min(other.x);
        let top = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect::new(
            left,
            top,
            right.saturating_sub(left),
            bottom.saturating_sub(top),
        )
    }

    /// Expand every side outwards, saturating at the `i32` range.
    pub fn grow(&self, dx: i32, dy: i32) -> Rect {
        let x = self.x.saturating_sub(dx);
        let y = self.y.saturating_sub(dy);
        Rect::new(
            x,
            y,
            self.right().saturating_add(dx).saturating_sub(x),
            self.bottom().saturating_add(dy).saturating_sub(y),
        )
    }

    /// `None` when the new origin or far edge doesn't fit in `i32`.
    pub fn translated(&self, dx: i32, dy: i32) -> Option<Rect> {
        let x = self.x.checked_add(dx)?;
        let y = self.y.checked_add(dy)?;
        x.checked_add(self.w)?;
        y.checked_add(self.h)?;
        Some(Rect::new(x, y, self.w, self.h))
    }

    /// True when the rect lies inside `[0, width] x [0, height]`.
    pub fn is_within(&self, width: i32, height: i32) -> bool {
        let right = i64::from(self.x) + i64::from(self.w);
        let bottom = i64::from(self.y) + i64::from(self.h);
        self.x >= 0
            && self.y >= 0
            && self.w >= 0
            && self.h >= 0
            && right <= i64::from(width)
            && bottom <= i64::from(height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spanning_orders_coordinates() {
        let r = Rect::spanning(Point::new(150, 20), Point::new(50, 120));
        assert_eq!(r, Some(Rect::new(50, 20, 100, 100)));
    }

    #[test]
    fn spanning_too_wide_is_none() {
        assert_eq!(Rect::spanning(Point::new(i32::MIN, 0), Point::new(i32::MAX, 10)), None);
        assert_eq!(Rect::spanning(Point::new(0, -1), Point::new(0, i32::MAX)), None);
        assert_eq!(
            Rect::spanning(Point::new(0, 0), Point::new(i32::MAX, i32::MAX)),
            Some(Rect::new(0, 0, i32::MAX, i32::MAX))
        );
    }

    #[test]
    fn translated_overflow_is_none() {
        let r = Rect::new(50, 50, 100, 70);
        assert_eq!(r.translated(i32::MAX - 100, 0), None);
        assert_eq!(r.translated(0, i32::MIN), Some(Rect::new(50, i32::MIN + 50, 100, 70)));
        assert_eq!(r.translated(i32::MIN, 0).and_then(|m| m.translated(i32::MIN, 0)), None);
        assert_eq!(r.translated(-50, 10), Some(Rect::new(0, 60, 100, 70)));
    }

    #[test]
    fn within_check_does_not_wrap() {
        assert!(!Rect::new(i32::MAX - 10, 0, 100, 10).is_within(800, 600));
        assert!(!Rect::new(0, 0, i32::MAX, i32::MAX).is_within(800, 600));
        assert!(Rect::new(0, 0, i32::MAX, i32::MAX).is_within(i32::MAX, i32::MAX));
    }

    #[test]
    fn edges_saturate() {
        let r = Rect::new(i32::MAX - 1, i32::MIN, 10, 10);
        assert_eq!(r.right(), i32::MAX);
        assert_eq!(r.bottom(), i32::MIN + 10);
        let g = Rect::new(i32::MIN, 0, 4, 4).grow(3, 3);
        assert_eq!((g.x, g.y, g.w, g.h), (i32::MIN, -3, 7, 10));
    }

    #[test]
    fn contains_is_half_open() {
        let r = Rect::new(0, 0, 10, 10);
        assert!(r.contains(Point::new(0, 0)));
        assert!(r.contains(Point::new(9, 9)));
        assert!(!r.contains(Point::new(10, 10)));
        assert!(!r.contains(Point::new(10, 5)));
        assert!(!r.contains(Point::new(-1, 5)));
    }

    #[test]
    fn zero_area_contains_and_intersects_nothing() {
        let p = Rect::from_point(Point::new(5, 5));
        assert!(!p.contains(Point::new(5, 5)));
        assert!(!p.intersects(&Rect::new(0, 0, 10, 10)));
    }

    #[test]
    fn union_treats_points_as_extent() {
        let p = Rect::from_point(Point::new(50, 50));
        let r = Rect::new(50, 50, 100, 70);
        assert_eq!(p.union(&r), r);

        let far = Rect::from_point(Point::new(200, 10));
        assert_eq!(r.union(&far), Rect::new(50, 10, 150, 110));
    }

    #[test]
    fn intersects_excludes_touching_edges() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(a.intersects(&Rect::new(9, 9, 5, 5)));
        assert!(!a.intersects(&Rect::new(10, 0, 5, 5)));
    }

    #[test]
    fn grow_and_within() {
        let r = Rect::new(10, 10, 20, 30).grow(3, 3);
        assert_eq!(r, Rect::new(7, 7, 26, 36));

        assert!(Rect::new(0, 0, 800, 600).is_within(800, 600));
        assert!(!Rect::new(1, 0, 800, 600).is_within(800, 600));
        assert!(!Rect::new(-1, 0, 10, 10).is_within(800, 600));
    }
}
