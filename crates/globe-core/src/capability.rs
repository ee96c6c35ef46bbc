//! Device-capability classification.
//!
//! A client is "constrained" when its user agent names a mobile OS, or when
//! it has touch input and a viewport no wider than the tablet breakpoint.
//! Constrained clients get no automatic rotation so that touch dragging is
//! not fought by the animation.
//!
//! The value lives in a [`CapabilityCell`]: one writer (the detector, on
//! init and on every resize) and any number of readers and subscribers.

use crate::constants::CONSTRAINED_MAX_VIEWPORT_WIDTH;
use crate::host::HostEnvironment;
use crate::subscription::Subscription;
use regex::Regex;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::sync::OnceLock;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Pointer-driven or large screen.
    #[default]
    Full,
    /// Touch-driven small screen or mobile OS.
    Constrained,
}

impl Capability {
    #[inline]
    pub fn is_constrained(self) -> bool {
        matches!(self, Capability::Constrained)
    }

    #[inline]
    pub fn from_constrained(constrained: bool) -> Self {
        if constrained {
            Capability::Constrained
        } else {
            Capability::Full
        }
    }
}

/// Raw host readings. `None` means the primitive was unavailable.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeviceSignals {
    pub user_agent: Option<String>,
    pub touch_capable: Option<bool>,
    pub viewport_width: Option<f64>,
}

fn mobile_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)android|webos|iphone|ipad|ipod|blackberry|iemobile|opera mini")
            .expect("mobile user-agent pattern is valid")
    })
}

pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    mobile_pattern().is_match(user_agent)
}

/// Classify from whatever signals are available; missing ones count as
/// "not constrained", so a host with no introspection is `Full`.
pub fn classify(signals: &DeviceSignals) -> Capability {
    let mobile_ua = signals
        .user_agent
        .as_deref()
        .is_some_and(is_mobile_user_agent);
    let small_touch = signals.touch_capable == Some(true)
        && signals
            .viewport_width
            .is_some_and(|w| w <= CONSTRAINED_MAX_VIEWPORT_WIDTH);
    Capability::from_constrained(mobile_ua || small_touch)
}

type Listener = Rc<dyn Fn(Capability)>;

#[derive(Default)]
struct CellInner {
    value: Cell<Capability>,
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(u64, Listener)>>,
}

/// Observable capability value shared between the detector and its readers.
///
/// Cloning shares the same cell.
#[derive(Clone, Default)]
pub struct CapabilityCell {
    inner: Rc<CellInner>,
}

impl CapabilityCell {
    pub fn new(initial: Capability) -> Self {
        let cell = Self::default();
        cell.inner.value.set(initial);
        cell
    }

    #[inline]
    pub fn get(&self) -> Capability {
        self.inner.value.get()
    }

    #[inline]
    pub fn is_constrained(&self) -> bool {
        self.get().is_constrained()
    }

    /// Store `value`; listeners run only on a transition. Returns whether
    /// the value changed.
    pub fn set(&self, value: Capability) -> bool {
        if self.inner.value.replace(value) == value {
            return false;
        }
        log::info!("[capability] now {:?}", value);
        // Snapshot first so listeners may read, subscribe or unsubscribe.
        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| l.clone())
            .collect();
        for l in listeners {
            l(value);
        }
        true
    }

    /// Call `listener` on every future transition until the guard drops.
    pub fn subscribe(&self, listener: impl Fn(Capability) + 'static) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));
        let weak: Weak<CellInner> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.listeners.borrow_mut().retain(|(i, _)| *i != id);
            }
        })
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }
}

impl std::fmt::Debug for CapabilityCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CapabilityCell")
            .field("value", &self.get())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Keeps a [`CapabilityCell`] in sync with a host until dropped.
pub struct DetectorHandle {
    cell: CapabilityCell,
    // Field order: the listener is released before the host is dropped.
    resize: Subscription,
    _host: Rc<dyn HostEnvironment>,
}

impl std::fmt::Debug for DetectorHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DetectorHandle")
            .field("cell", &self.cell)
            .field("resize", &self.resize)
            .finish()
    }
}

impl DetectorHandle {
    pub fn cell(&self) -> &CapabilityCell {
        &self.cell
    }

    pub fn capability(&self) -> Capability {
        self.cell.get()
    }

    /// Whether resize notifications are still being received.
    pub fn is_listening(&self) -> bool {
        self.resize.is_active()
    }
}

pub struct CapabilityDetector;

impl CapabilityDetector {
    /// One-shot classification of the host's current state.
    pub fn detect(host: &dyn HostEnvironment) -> Capability {
        classify(&host.signals())
    }

    /// Write the current classification into `cell` and re-run it on every
    /// resize until the returned handle drops.
    pub fn attach(host: Rc<dyn HostEnvironment>, cell: CapabilityCell) -> DetectorHandle {
        cell.set(Self::detect(host.as_ref()));
        log::debug!("[capability] initial {:?}", cell.get());

        let weak_host: Weak<dyn HostEnvironment> = Rc::downgrade(&host);
        let target = cell.clone();
        let handler = Box::new(move || {
            if let Some(host) = weak_host.upgrade() {
                target.set(Self::detect(host.as_ref()));
            }
        });
        let resize = match host.on_resize(handler) {
            Ok(sub) => sub,
            Err(e) => {
                log::warn!("[capability] resize tracking unavailable: {e}");
                Subscription::noop()
            }
        };
        DetectorHandle {
            cell,
            resize,
            _host: host,
        }
    }
}
