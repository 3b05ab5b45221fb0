//! Boolean memory cell with change-triggered observers.

use std::collections::HashSet;

use super::types::ComponentId;

/// A boolean cell that remembers which components read it.
///
/// The cell only records observers; the [`Network`](super::Network) owning
/// it performs the actual notification, since recomputing a component needs
/// mutable access to every other wire.
#[derive(Debug, Clone, Default)]
pub struct Signal {
    value: bool,
    /// Observers in registration order
    observers: Vec<ComponentId>,
    /// Membership index for `observers`
    registered: HashSet<ComponentId>,
}

impl Signal {
    /// Create a cell holding `value` with no observers.
    pub fn new(value: bool) -> Self {
        Self {
            value,
            ..Self::default()
        }
    }

    /// Read the value, registering `observer` if it is not yet known.
    pub fn get(&mut self, observer: Option<ComponentId>) -> bool {
        if let Some(id) = observer {
            if self.registered.insert(id) {
                self.observers.push(id);
            }
        }
        self.value
    }

    /// Read the value without subscribing.
    pub fn value(&self) -> bool {
        self.value
    }

    /// Store `value`. Returns `true` if it differs from the previous value,
    /// in which case the caller must notify [`Signal::observers`].
    pub fn set(&mut self, value: bool) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        true
    }

    /// Store `value` without reporting a change.
    pub fn silent_set(&mut self, value: bool) {
        self.value = value;
    }

    /// Registered observers in registration order.
    pub fn observers(&self) -> &[ComponentId] {
        &self.observers
    }
}
