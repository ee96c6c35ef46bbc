//! Host environment seam.
//!
//! The browser implementation lives in the web frontend. [`ManualHost`] is
//! a headless stand-in whose signals are set by hand, used for tests and for
//! embedding the core where there is no window to introspect.

use crate::capability::DeviceSignals;
use crate::error::Result;
use crate::subscription::Subscription;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

pub type ResizeHandler = Box<dyn FnMut()>;

/// Device and viewport introspection plus resize notifications.
///
/// Every accessor returns `None` when the underlying primitive is missing.
pub trait HostEnvironment {
    fn user_agent(&self) -> Option<String>;
    fn touch_capable(&self) -> Option<bool>;
    fn viewport_width(&self) -> Option<f64>;

    /// Register `handler` for viewport resizes. The returned guard
    /// deregisters it.
    fn on_resize(&self, handler: ResizeHandler) -> Result<Subscription>;

    fn signals(&self) -> DeviceSignals {
        DeviceSignals {
            user_agent: self.user_agent(),
            touch_capable: self.touch_capable(),
            viewport_width: self.viewport_width(),
        }
    }
}

type SharedHandler = Rc<RefCell<ResizeHandler>>;

#[derive(Default)]
struct Handlers {
    next_id: u64,
    entries: Vec<(u64, SharedHandler)>,
}

/// Host whose signals are driven explicitly.
#[derive(Clone, Default)]
pub struct ManualHost {
    signals: Rc<RefCell<DeviceSignals>>,
    handlers: Rc<RefCell<Handlers>>,
}

impl ManualHost {
    pub fn new(signals: DeviceSignals) -> Self {
        Self {
            signals: Rc::new(RefCell::new(signals)),
            handlers: Rc::default(),
        }
    }

    /// Change the viewport width and notify resize listeners.
    pub fn resize(&self, width: f64) {
        self.signals.borrow_mut().viewport_width = Some(width);
        self.notify_resize();
    }

    pub fn notify_resize(&self) {
        // Snapshot so handlers may (de)register while running.
        let snapshot: Vec<SharedHandler> = self
            .handlers
            .borrow()
            .entries
            .iter()
            .map(|(_, h)| h.clone())
            .collect();
        for h in snapshot {
            if let Ok(mut h) = h.try_borrow_mut() {
                (*h)();
            }
        }
    }

    pub fn resize_listener_count(&self) -> usize {
        self.handlers.borrow().entries.len()
    }
}

impl HostEnvironment for ManualHost {
    fn user_agent(&self) -> Option<String> {
        self.signals.borrow().user_agent.clone()
    }

    fn touch_capable(&self) -> Option<bool> {
        self.signals.borrow().touch_capable
    }

    fn viewport_width(&self) -> Option<f64> {
        self.signals.borrow().viewport_width
    }

    fn on_resize(&self, handler: ResizeHandler) -> Result<Subscription> {
        let id = {
            let mut hs = self.handlers.borrow_mut();
            let id = hs.next_id;
            hs.next_id += 1;
            hs.entries.push((id, Rc::new(RefCell::new(handler))));
            id
        };
        let weak: Weak<RefCell<Handlers>> = Rc::downgrade(&self.handlers);
        Ok(Subscription::new(move || {
            if let Some(hs) = weak.upgrade() {
                hs.borrow_mut().entries.retain(|(i, _)| *i != id);
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn resize_notifies_until_released() {
        let host = ManualHost::default();
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        let sub = host
            .on_resize(Box::new(move || h.set(h.get() + 1)))
            .unwrap();
        host.resize(500.0);
        assert_eq!(hits.get(), 1);
        assert_eq!(host.viewport_width(), Some(500.0));
        drop(sub);
        assert_eq!(host.resize_listener_count(), 0);
        host.resize(900.0);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn default_host_reports_nothing() {
        let s = ManualHost::default().signals();
        assert_eq!(s, DeviceSignals::default());
    }
}
