//! Write-once element collection store.
//!
//! # Responsibility
//! - Own the loaded element collection as an explicit, injectable object.
//! - Provide keyed lookup and facet option derivation for filter UIs.
//!
//! # Invariants
//! - Atomic numbers are unique; construction fails otherwise.
//! - The collection is populated once and read-only thereafter.

use crate::dataset::{DatasetError, DatasetResult};
use crate::model::element::{AtomicNumber, Element, ElementCategory, Phase};
use std::collections::HashMap;

/// Facet values offered to the category/state/period/group dropdowns.
///
/// Category and phase lists are fixed; period and group lists are derived
/// from the data actually present, distinct and ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetOptions {
    pub categories: Vec<ElementCategory>,
    pub phases: Vec<Phase>,
    pub periods: Vec<u32>,
    pub groups: Vec<u32>,
}

/// Immutable in-memory element collection, keyed by atomic number.
///
/// Replaces the ad-hoc global `allElements` state of earlier revisions with
/// an owned object handed to consumers after a successful load.
#[derive(Debug, Clone)]
pub struct ElementStore {
    elements: Vec<Element>,
    by_number: HashMap<AtomicNumber, usize>,
}

impl ElementStore {
    /// Builds the store from validated elements, preserving their order.
    ///
    /// # Errors
    /// - [`DatasetError::DuplicateNumber`] when two elements share an
    ///   atomic number.
    pub fn from_elements(elements: Vec<Element>) -> DatasetResult<Self> {
        let mut by_number = HashMap::with_capacity(elements.len());
        for (index, element) in elements.iter().enumerate() {
            if by_number.insert(element.number, index).is_some() {
                return Err(DatasetError::DuplicateNumber(element.number));
            }
        }
        Ok(Self {
            elements,
            by_number,
        })
    }

    /// All elements in feed order.
    pub fn all(&self) -> &[Element] {
        &self.elements
    }

    /// Number of elements in the collection.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Looks up one element by atomic number.
    pub fn get(&self, number: AtomicNumber) -> Option<&Element> {
        self.by_number
            .get(&number)
            .map(|&index| &self.elements[index])
    }

    /// Derives the dropdown option sets from the loaded collection.
    pub fn facet_options(&self) -> FacetOptions {
        let mut periods: Vec<u32> = self.elements.iter().map(|e| e.period).collect();
        periods.sort_unstable();
        periods.dedup();

        let mut groups: Vec<u32> = self.elements.iter().filter_map(|e| e.group).collect();
        groups.sort_unstable();
        groups.dedup();

        FacetOptions {
            categories: ElementCategory::ALL.to_vec(),
            phases: Phase::ALL.to_vec(),
            periods,
            groups,
        }
    }
}
