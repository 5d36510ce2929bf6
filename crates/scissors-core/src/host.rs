// Author: Dustin Pilgrim
// License: MIT

use std::cell::RefCell;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Process-unique identity of a `SelectableRect`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RectId(u64);

impl RectId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        RectId(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

/// Whatever owns the full set of rects on a page.
///
/// Rects only ever hold a weak reference to their host; it is queried when
/// drawing the order label.
pub trait RectHost {
    /// 0-based position of `id` among the host's rects, if it knows it.
    fn index_of(&self, id: RectId) -> Option<usize>;
}

/// Ordered list of rect ids; the order is the display numbering.
#[derive(Debug, Default)]
pub struct RectRegistry {
    ids: RefCell<Vec<RectId>>,
}

impl RectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `id` unless it is already registered.
    pub fn push(&self, id: RectId) {
        let mut ids = self.ids.borrow_mut();
        if !ids.contains(&id) {
            ids.push(id);
        }
    }

    pub fn remove(&self, id: RectId) -> bool {
        let mut ids = self.ids.borrow_mut();
        match ids.iter().position(|x| *x == id) {
            Some(pos) => {
                ids.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.ids.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.borrow().is_empty()
    }

    pub fn ids(&self) -> Vec<RectId> {
        self.ids.borrow().clone()
    }
}

impl RectHost for RectRegistry {
    fn index_of(&self, id: RectId) -> Option<usize> {
        self.ids.borrow().iter().position(|x| *x == id)
    }
}
