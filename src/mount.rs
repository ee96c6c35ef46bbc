use std::cell::RefCell;

/// Holds the currently mounted globe.
///
/// [`MountSlot::release`] moves the value out before dropping it, so guards
/// whose drop code re-enters the slot (or calls [`MountSlot::is_mounted`])
/// never hit a live borrow.
pub struct MountSlot<T> {
    inner: RefCell<Option<T>>,
}

impl<T> Default for MountSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MountSlot<T> {
    pub const fn new() -> Self {
        Self {
            inner: RefCell::new(None),
        }
    }

    /// Store `value`, releasing whatever was mounted before.
    pub fn install(&self, value: T) {
        let previous = self.inner.borrow_mut().replace(value);
        drop(previous);
    }

    /// Drop the mounted value. Returns false when nothing was mounted.
    pub fn release(&self) -> bool {
        let taken = self.inner.borrow_mut().take();
        let had = taken.is_some();
        drop(taken);
        had
    }

    pub fn is_mounted(&self) -> bool {
        self.inner.borrow().is_some()
    }
}
