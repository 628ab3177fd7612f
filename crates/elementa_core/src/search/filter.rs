//! Free-text search and facet filter engine.
//!
//! # Responsibility
//! - Evaluate search/facet criteria against the loaded collection.
//! - Report marker visibility and the auto-open candidate alongside the
//!   visible subset.
//!
//! # Invariants
//! - Output order is a stable subsequence of input order; no re-sort.
//! - Free-text search and facet filters are mutually exclusive modes;
//!   criteria setters clear the opposite mode.
//! - Synthetic lanthanide/actinide grid markers never appear in the
//!   visible subset or its counts.

use crate::model::element::{AtomicNumber, Element, ElementCategory, Phase};

/// Transient filter state, recreated on every user input event.
///
/// An unset facet means "all". A non-empty search term always wins over
/// facets, matching the UI behavior where activating one mode resets the
/// other's controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    search_term: String,
    category: Option<ElementCategory>,
    phase: Option<Phase>,
    period: Option<u32>,
    group: Option<u32>,
}

impl FilterCriteria {
    /// Criteria with every facet at "all" and no search term.
    pub fn none() -> Self {
        Self::default()
    }

    /// Free-text search criteria; resets all facet filters.
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search_term: term.into(),
            ..Self::default()
        }
    }

    /// Sets the category facet and clears the search term.
    pub fn with_category(mut self, category: ElementCategory) -> Self {
        self.search_term.clear();
        self.category = Some(category);
        self
    }

    /// Sets the state facet and clears the search term.
    pub fn with_phase(mut self, phase: Phase) -> Self {
        self.search_term.clear();
        self.phase = Some(phase);
        self
    }

    /// Sets the period facet and clears the search term.
    pub fn with_period(mut self, period: u32) -> Self {
        self.search_term.clear();
        self.period = Some(period);
        self
    }

    /// Sets the group facet and clears the search term.
    pub fn with_group(mut self, group: u32) -> Self {
        self.search_term.clear();
        self.group = Some(group);
        self
    }

    /// Normalized search term; empty when search mode is inactive.
    fn normalized_term(&self) -> String {
        self.search_term.trim().to_lowercase()
    }

    fn any_facet_active(&self) -> bool {
        self.category.is_some()
            || self.phase.is_some()
            || self.period.is_some()
            || self.group.is_some()
    }

    /// Whether any constraint is active at all.
    pub fn is_active(&self) -> bool {
        !self.normalized_term().is_empty() || self.any_facet_active()
    }

    /// Whether the only active constraint is the category facet.
    fn is_category_only(&self) -> bool {
        self.category.is_some()
            && self.phase.is_none()
            && self.period.is_none()
            && self.group.is_none()
            && self.normalized_term().is_empty()
    }
}

/// Visibility of the two synthetic inner-block grid markers.
///
/// Markers are layout placeholders at the lanthanide/actinide rows, not
/// elements: they are shown when nothing is filtered and while a search
/// term is active, shown under a category-only filter iff the category
/// matches, and hidden under any other facet filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerVisibility {
    pub lanthanide: bool,
    pub actinide: bool,
}

/// Result of one filter evaluation over the full collection.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome {
    /// Visible elements in original collection order.
    pub visible: Vec<Element>,
    /// Size of the full collection, for the "Showing N of M" indicator.
    pub total: usize,
    /// Element whose symbol equals the search term exactly, if any.
    pub exact_match: Option<AtomicNumber>,
    /// Element whose detail view should open automatically: the exact
    /// symbol match first, else a lone visible element.
    pub auto_open: Option<AtomicNumber>,
    /// Synthetic grid marker visibility under these criteria.
    pub markers: MarkerVisibility,
}

impl FilterOutcome {
    /// Count for the "Showing N of M" indicator; markers never counted.
    pub fn shown(&self) -> usize {
        self.visible.len()
    }

    /// Whether the indicator should be hidden (nothing filtered out).
    pub fn is_complete(&self) -> bool {
        self.visible.len() == self.total
    }
}

/// Evaluates criteria against the collection, preserving input order.
///
/// Pure predicate evaluation: an out-of-range period or group simply
/// yields an empty subset, never an error.
pub fn apply_filters(all: &[Element], criteria: &FilterCriteria) -> FilterOutcome {
    let term = criteria.normalized_term();

    if !term.is_empty() {
        return apply_search(all, &term);
    }
    if criteria.any_facet_active() {
        return apply_facets(all, criteria);
    }

    FilterOutcome {
        visible: all.to_vec(),
        total: all.len(),
        exact_match: None,
        auto_open: None,
        markers: MarkerVisibility {
            lanthanide: true,
            actinide: true,
        },
    }
}

fn apply_search(all: &[Element], term: &str) -> FilterOutcome {
    let mut visible = Vec::new();
    let mut exact_match = None;

    for element in all {
        let exact = element.symbol.eq_ignore_ascii_case(term);
        if exact || matches_term(element, term) {
            if exact && exact_match.is_none() {
                exact_match = Some(element.number);
            }
            visible.push(element.clone());
        }
    }

    let auto_open = exact_match.or_else(|| lone_visible(&visible));
    FilterOutcome {
        visible,
        total: all.len(),
        exact_match,
        auto_open,
        // Search never touches the layout placeholders: both markers stay
        // in place while a term is active.
        markers: MarkerVisibility {
            lanthanide: true,
            actinide: true,
        },
    }
}

fn apply_facets(all: &[Element], criteria: &FilterCriteria) -> FilterOutcome {
    let visible: Vec<Element> = all
        .iter()
        .filter(|element| matches_facets(element, criteria))
        .cloned()
        .collect();

    let markers = if criteria.is_category_only() {
        MarkerVisibility {
            lanthanide: criteria.category == Some(ElementCategory::Lanthanide),
            actinide: criteria.category == Some(ElementCategory::Actinide),
        }
    } else {
        MarkerVisibility {
            lanthanide: false,
            actinide: false,
        }
    };

    let auto_open = lone_visible(&visible);
    FilterOutcome {
        visible,
        total: all.len(),
        exact_match: None,
        auto_open,
        markers,
    }
}

/// Substring match over the searchable text facets of one element.
///
/// A blank electron configuration is simply skipped, not an error.
fn matches_term(element: &Element, term: &str) -> bool {
    element.symbol.to_lowercase().contains(term)
        || element.name.to_lowercase().contains(term)
        || element.number.to_string().contains(term)
        || element.category.label().contains(term)
        || element.phase.label().contains(term)
        || (!element.electron_configuration.is_empty()
            && element.electron_configuration.to_lowercase().contains(term))
}

fn matches_facets(element: &Element, criteria: &FilterCriteria) -> bool {
    if let Some(category) = criteria.category {
        if element.category != category {
            return false;
        }
    }
    if let Some(phase) = criteria.phase {
        if element.phase != phase {
            return false;
        }
    }
    if let Some(period) = criteria.period {
        if element.period != period {
            return false;
        }
    }
    if let Some(group) = criteria.group {
        if element.group != Some(group) {
            return false;
        }
    }
    true
}

fn lone_visible(visible: &[Element]) -> Option<AtomicNumber> {
    match visible {
        [only] => Some(only.number),
        _ => None,
    }
}
