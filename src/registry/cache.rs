//! Version-keyed lazy index cells.
//!
//! Each derived index is a `{valid, data}` cell keyed on the registry's
//! version counter. Invalidation is implicit: a version bump makes every
//! cell stale, and the next reader rebuilds exactly once for that version.

use std::cell::RefCell;

pub struct IndexCell<T> {
    state: RefCell<CellState<T>>,
}

struct CellState<T> {
    built_version: u64,
    data: Option<T>,
}

impl<T> IndexCell<T> {
    pub fn new() -> Self {
        Self {
            state: RefCell::new(CellState {
                built_version: 0,
                data: None,
            }),
        }
    }

    /// Read through the cell, rebuilding at most once per version.
    ///
    /// Later readers of the same version reuse the stored data; a reader
    /// arriving with a newer version drops the stale data and rebuilds.
    pub fn with<R>(
        &self,
        version: u64,
        build: impl FnOnce() -> T,
        read: impl FnOnce(&T) -> R,
    ) -> R {
        let mut state = self.state.borrow_mut();
        if state.built_version != version {
            state.data = None;
            state.built_version = version;
        }
        let data = state.data.get_or_insert_with(build);
        read(data)
    }

    /// Drop any built data regardless of version; next read rebuilds.
    pub fn invalidate(&self) {
        self.state.borrow_mut().data = None;
    }
}

impl<T> Default for IndexCell<T> {
    fn default() -> Self {
        Self::new()
    }
}
