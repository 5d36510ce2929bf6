// Author: Dustin Pilgrim
// License: MIT

use std::cell::{Cell, RefCell};

use scissors_core::{Rect, RectChangeListener, SelectableRect};

/// Collects redraw regions from rect notifications until the next repaint.
#[derive(Debug, Default)]
pub struct DamageTracker {
    pending: RefCell<Option<Rect>>,
    events: Cell<usize>,
}

impl DamageTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Union of everything reported since the last call.
    pub fn take(&self) -> Option<Rect> {
        self.pending.borrow_mut().take()
    }

    pub fn is_dirty(&self) -> bool {
        self.pending.borrow().is_some()
    }

    /// Total notifications received.
    pub fn events(&self) -> usize {
        self.events.get()
    }
}

impl RectChangeListener for DamageTracker {
    fn rect_changed(&self, _rect: &SelectableRect, region: Rect) {
        let mut pending = self.pending.borrow_mut();
        *pending = Some(match *pending {
            Some(prev) => prev.union(&region),
            None => region,
        });
        self.events.set(self.events.get() + 1);
    }
}
