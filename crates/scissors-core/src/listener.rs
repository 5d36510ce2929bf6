// Author: Dustin Pilgrim
// License: MIT

use std::rc::{Rc, Weak};

use crate::rect::Rect;
use crate::selectable::SelectableRect;

/// Receives a region to repaint whenever a rect's visible footprint changes.
///
/// Called synchronously from inside the mutating call. The region is always
/// concrete; hosts are free to widen it.
pub trait RectChangeListener {
    fn rect_changed(&self, rect: &SelectableRect, region: Rect);
}

/// Weakly held listeners in registration order.
#[derive(Default)]
pub(crate) struct Listeners {
    entries: Vec<Weak<dyn RectChangeListener>>,
}

fn same_allocation(weak: &Weak<dyn RectChangeListener>, listener: &dyn RectChangeListener) -> bool {
    std::ptr::eq(
        weak.as_ptr().cast::<()>(),
        (listener as *const dyn RectChangeListener).cast::<()>(),
    )
}

impl Listeners {
    pub(crate) fn add(&mut self, listener: Rc<dyn RectChangeListener>) {
        if self.entries.iter().any(|w| same_allocation(w, &*listener)) {
            return;
        }
        self.entries.push(Rc::downgrade(&listener));
    }

    pub(crate) fn remove(&mut self, listener: &dyn RectChangeListener) -> bool {
        match self.entries.iter().position(|w| same_allocation(w, listener)) {
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    /// Drops registrations whose listener is gone and returns strong handles
    /// to the rest, so callbacks can't disturb the iteration.
    pub(crate) fn snapshot(&mut self) -> Vec<Rc<dyn RectChangeListener>> {
        self.entries.retain(|w| w.strong_count() > 0);
        self.entries.iter().filter_map(Weak::upgrade).collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.iter().filter(|w| w.strong_count() > 0).count()
    }
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners").field("len", &self.len()).finish()
    }
}
