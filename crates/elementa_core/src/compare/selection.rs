//! Comparison pin selection store.
//!
//! # Responsibility
//! - Hold the 0..=2 elements pinned for comparison, in pin order.
//! - Enforce the pair limit with FIFO eviction of the oldest pin.
//!
//! # Invariants
//! - Pins are unique by atomic number.
//! - Turning comparison mode off never leaves stale pins behind.

use crate::model::element::{AtomicNumber, Element};

/// Comparisons are restricted to exactly pairs by design.
const MAX_PINNED: usize = 2;

/// Ordered pin list plus the comparison-mode flag.
///
/// Owned by the single controlling UI component; every mutation is a
/// synchronous, non-failing operation (duplicate adds and unknown removes
/// are no-ops, not errors).
#[derive(Debug, Clone, Default)]
pub struct ComparisonSelection {
    pinned: Vec<Element>,
    mode_active: bool,
}

impl ComparisonSelection {
    /// Empty selection with comparison mode off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pins an element for comparison.
    ///
    /// No-op when the element is already pinned. When two elements are
    /// pinned the oldest is evicted, keeping `[second, new]`.
    pub fn add(&mut self, element: Element) {
        if self.pinned.iter().any(|e| e.number == element.number) {
            return;
        }
        if self.pinned.len() >= MAX_PINNED {
            self.pinned.remove(0);
        }
        self.pinned.push(element);
    }

    /// Unpins the element with the given atomic number, if present.
    pub fn remove(&mut self, number: AtomicNumber) {
        self.pinned.retain(|e| e.number != number);
    }

    /// Drops every pin unconditionally.
    pub fn clear(&mut self) {
        self.pinned.clear();
    }

    /// Flips comparison mode; leaving the mode clears the pins so normal
    /// browsing never starts with stale selections.
    pub fn toggle_mode(&mut self) {
        if self.mode_active {
            self.clear();
        }
        self.mode_active = !self.mode_active;
    }

    /// Whether comparison mode is currently active.
    pub fn mode_active(&self) -> bool {
        self.mode_active
    }

    /// Pinned elements in pin order.
    pub fn pinned(&self) -> &[Element] {
        &self.pinned
    }

    /// The pinned pair, only when exactly two elements are pinned.
    ///
    /// With 0 or 1 pins there is no result and callers render the
    /// "select N more" placeholder instead.
    pub fn pair(&self) -> Option<(&Element, &Element)> {
        match self.pinned.as_slice() {
            [first, second] => Some((first, second)),
            _ => None,
        }
    }

    /// How many more pins are needed before a comparison can run.
    pub fn remaining_slots(&self) -> usize {
        MAX_PINNED - self.pinned.len()
    }
}
