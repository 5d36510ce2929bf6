// Author: Dustin Pilgrim
// License: MIT

use std::rc::{Rc, Weak};

use crate::corner::{Corner, CORNERBOX_SIZE};
use crate::host::{RectHost, RectId};
use crate::listener::{Listeners, RectChangeListener};
use crate::rect::{Point, Rect};
use crate::style::RenderStyle;
use crate::surface::Surface;

/// One crop rectangle on a page: bounds, selection state and the corner
/// boxes used to resize it.
///
/// Mutations that would leave the container are dropped without touching
/// state or notifying anyone.
#[derive(Debug)]
pub struct SelectableRect {
    id: RectId,
    bounds: Rect,
    selected: bool,
    listeners: Listeners,
    host: Weak<dyn RectHost>,
}

impl SelectableRect {
    /// Zero-size rect at `start`, unselected.
    pub fn new<H: RectHost + 'static>(start: Point, host: &Rc<H>) -> Self {
        let weak: Weak<H> = Rc::downgrade(host);
        let host: Weak<dyn RectHost> = weak;
        Self {
            id: RectId::next(),
            bounds: Rect::from_point(start),
            selected: false,
            listeners: Listeners::default(),
            host,
        }
    }

    pub fn id(&self) -> RectId {
        self.id
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Registers `listener` once; the rect only keeps a weak reference, so
    /// the caller must hold on to its own `Rc`.
    pub fn add_listener(&mut self, listener: Rc<dyn RectChangeListener>) {
        self.listeners.add(listener);
    }

    /// Matches by identity (same allocation), so pass the registered value,
    /// e.g. `&*rc`.
    pub fn remove_listener(&mut self, listener: &dyn RectChangeListener) -> bool {
        self.listeners.remove(listener)
    }

    pub fn remove_all_listeners(&mut self) {
        self.listeners.clear();
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Resize to the smallest rect spanning `anchor` and `end`.
    ///
    /// Returns false (and changes nothing) when the result would leave
    /// `[0, container_w] x [0, container_h]`.
    pub fn resize(&mut self, anchor: Point, end: Point, container_w: i32, container_h: i32) -> bool {
        match Rect::spanning(anchor, end) {
            Some(candidate) => self.commit(candidate, container_w, container_h),
            None => false,
        }
    }

    pub fn translate(&mut self, dx: i32, dy: i32, container_w: i32, container_h: i32) -> bool {
        match self.bounds.translated(dx, dy) {
            Some(candidate) => self.commit(candidate, container_w, container_h),
            None => false,
        }
    }

    /// Always notifies: corner boxes appear or disappear either way.
    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
        self.notify(self.bounds, true);
    }

    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Corner boxes in hit-test order: top-left, bottom-left, bottom-right, top-right.
    pub fn corner_handle_rects(&self) -> [Rect; 4] {
        Corner::ALL.map(|c| c.box_on(&self.bounds))
    }

    pub fn handle_at(&self, p: Point) -> Option<Corner> {
        if !self.selected {
            return None;
        }
        Corner::ALL
            .into_iter()
            .find(|c| c.box_on(&self.bounds).contains(p))
    }

    /// Fixed corner for a resize drag started at `p`, i.e. the corner
    /// diagonally opposite the grabbed box. `None` if no box was grabbed.
    pub fn anchor_for_resize(&self, p: Point) -> Option<Point> {
        self.handle_at(p)
            .map(|c| c.opposite().point_on(&self.bounds))
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S, clip: Rect, style: &RenderStyle) {
        if !self.bounds.intersects(&clip) {
            return;
        }
        let r = self.bounds;

        surface.fill_rect(r, style.fill_for(self.selected));

        if let Some(index) = self.host.upgrade().and_then(|h| h.index_of(self.id)) {
            let origin = Point::new(
                r.x.saturating_add(style.label_offset.0),
                r.y.saturating_add(style.label_size.round() as i32)
                    .saturating_add(style.label_offset.1),
            );
            surface.draw_text(
                &(index + 1).to_string(),
                origin,
                style.label_size,
                style.label_for(self.selected),
            );
        }

        surface.stroke_dashed_rect(r, style.border, style.border_width, style.dash);

        if self.selected {
            for handle in self.corner_handle_rects() {
                surface.fill_rect(handle, style.handle);
            }
        }
    }

    fn commit(&mut self, candidate: Rect, container_w: i32, container_h: i32) -> bool {
        if !candidate.is_within(container_w, container_h) {
            return false;
        }
        let old = self.bounds;
        self.bounds = candidate;
        self.notify(old.union(&candidate), self.selected);
        true
    }

    fn notify(&mut self, area: Rect, with_corner_boxes: bool) {
        let region = if with_corner_boxes {
            area.grow(CORNERBOX_SIZE / 2, CORNERBOX_SIZE / 2)
        } else {
            area
        };

        let snapshot = self.listeners.snapshot();
        for listener in &snapshot {
            listener.rect_changed(self, region);
        }
    }
}
