//! The current-record selection.
//!
//! The directory itself knows nothing about selection; the cursor is a
//! separate value the command layer threads through every call. It either
//! points at a store index or at nothing, and only three things ever
//! happen to it: a successful add, select, or field change points it at
//! the touched record, a successful delete clears it, and a failed
//! operation leaves it alone.

/// Points at the current record, or at nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor(Option<usize>);

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// The selected index, if any.
    pub fn index(&self) -> Option<usize> {
        self.0
    }

    pub fn is_none(&self) -> bool {
        self.0.is_none()
    }

    pub fn select(&mut self, index: usize) {
        self.0 = Some(index);
    }

    pub fn clear(&mut self) {
        self.0 = None;
    }
}
