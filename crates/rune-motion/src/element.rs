//! Element identity for per-element animation overrides.
//!
//! Every animatable element owns one [`ElementHandle`]. The handle carries a
//! process-unique [`ElementId`] and a liveness token; the custom store keeps
//! only a weak reference to that token, so it can tell when an element is
//! gone without ever keeping it alive.

use std::fmt;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicU64, Ordering};

/// Unique identifier for an element. Never reused within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u64);

impl ElementId {
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "element#{}", self.0)
    }
}

/// Identity and liveness of one element.
///
/// Deliberately not `Clone`: two handles would be two identities.
#[derive(Debug)]
pub struct ElementHandle {
    id: ElementId,
    liveness: Rc<()>,
}

impl ElementHandle {
    /// Allocate a fresh identity.
    pub fn new() -> Self {
        Self {
            id: ElementId::next(),
            liveness: Rc::new(()),
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub(crate) fn liveness(&self) -> Weak<()> {
        Rc::downgrade(&self.liveness)
    }
}

impl Default for ElementHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Anything that can carry per-element animation overrides.
pub trait AnimationTarget {
    fn element_handle(&self) -> &ElementHandle;

    fn element_id(&self) -> ElementId {
        self.element_handle().id()
    }
}

impl AnimationTarget for ElementHandle {
    fn element_handle(&self) -> &ElementHandle {
        self
    }
}
