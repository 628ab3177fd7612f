//! Comparison analytics over a pinned element pair.
//!
//! # Responsibility
//! - Reduce two elements to per-property deltas, percent differences and
//!   0-100 normalized values for chart rendering.
//! - Rank properties by divergence for space-limited charts.
//!
//! # Invariants
//! - A property absent on either element is excluded, never treated as 0.
//! - Percent difference over a zero minimum is "not computed", never
//!   infinity or NaN.
//! - Divergence ranking is stable; ties keep catalog order.

use crate::model::element::Element;

/// Display cap for divergence-ranked charts.
pub const TOP_DIVERGENT_DEFAULT: usize = 6;

/// Numeric properties the comparison charts know how to plot, in the
/// fixed catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    AtomicMass,
    Density,
    ElectronegativityPauling,
    ElectronAffinity,
    IonizationEnergy,
    Boil,
    Melt,
    MolarHeat,
}

impl PropertyKey {
    /// Full comparison catalog in display order.
    pub const CATALOG: [PropertyKey; 8] = [
        Self::AtomicMass,
        Self::Density,
        Self::ElectronegativityPauling,
        Self::ElectronAffinity,
        Self::IonizationEnergy,
        Self::Boil,
        Self::Melt,
        Self::MolarHeat,
    ];

    /// Reads this property off an element; `None` when absent.
    pub fn value_of(self, element: &Element) -> Option<f64> {
        match self {
            Self::AtomicMass => Some(element.atomic_mass),
            Self::Density => element.density,
            Self::ElectronegativityPauling => element.electronegativity_pauling,
            Self::ElectronAffinity => element.electron_affinity,
            Self::IonizationEnergy => element.ionization_energy,
            Self::Boil => element.boil,
            Self::Melt => element.melt,
            Self::MolarHeat => element.molar_heat,
        }
    }

    /// Human-readable chart label.
    pub fn label(self) -> &'static str {
        match self {
            Self::AtomicMass => "Atomic Mass",
            Self::Density => "Density",
            Self::ElectronegativityPauling => "Electronegativity",
            Self::ElectronAffinity => "Electron Affinity",
            Self::IonizationEnergy => "Ionization Energy",
            Self::Boil => "Boiling Point",
            Self::Melt => "Melting Point",
            Self::MolarHeat => "Molar Heat",
        }
    }

    /// Unit suffix for axis/tooltip rendering; `None` for unitless values.
    pub fn unit(self) -> Option<&'static str> {
        match self {
            Self::AtomicMass => Some("u"),
            Self::Density => Some("g/cm³"),
            Self::ElectronegativityPauling => None,
            Self::ElectronAffinity => Some("kJ/mol"),
            Self::IonizationEnergy => Some("kJ/mol"),
            Self::Boil => Some("K"),
            Self::Melt => Some("K"),
            Self::MolarHeat => Some("J/(mol·K)"),
        }
    }
}

/// Comparison facts for one property present on both elements.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyComparison {
    pub key: PropertyKey,
    pub raw_value_1: f64,
    pub raw_value_2: f64,
    /// `|v1 - v2|`, the divergence-ranking sort key.
    pub absolute_difference: f64,
    /// `|v1 - v2| / min(v1, v2) * 100`; `None` when the minimum is zero.
    pub percent_difference: Option<f64>,
    /// Each value scaled against the pair maximum, 0-100.
    pub normalized_value_1: f64,
    pub normalized_value_2: f64,
}

/// Catalog keys with a present numeric value on BOTH elements.
pub fn comparable_properties(e1: &Element, e2: &Element) -> Vec<PropertyKey> {
    PropertyKey::CATALOG
        .into_iter()
        .filter(|key| key.value_of(e1).is_some() && key.value_of(e2).is_some())
        .collect()
}

/// Percent difference relative to the smaller value.
///
/// Returns `None` when the smaller value is zero: the division is
/// undefined and callers omit the annotation rather than show infinity.
pub fn percent_difference(v1: f64, v2: f64) -> Option<f64> {
    let min = v1.min(v2);
    if min == 0.0 {
        return None;
    }
    Some((v1 - v2).abs() / min * 100.0)
}

/// Scales both values against their maximum onto 0-100.
///
/// A zero maximum yields `(0, 0)` by definition, not a division by zero.
pub fn normalize(v1: f64, v2: f64) -> (f64, f64) {
    let max = v1.max(v2);
    if max == 0.0 {
        return (0.0, 0.0);
    }
    (v1 / max * 100.0, v2 / max * 100.0)
}

/// Derives the full comparison for a pinned pair, in catalog order.
///
/// Purely derived and cheap (one pass over the catalog); recomputed on
/// demand instead of cached.
pub fn compare(e1: &Element, e2: &Element) -> Vec<PropertyComparison> {
    PropertyKey::CATALOG
        .into_iter()
        .filter_map(|key| {
            let (v1, v2) = key.value_of(e1).zip(key.value_of(e2))?;
            let (normalized_value_1, normalized_value_2) = normalize(v1, v2);
            Some(PropertyComparison {
                key,
                raw_value_1: v1,
                raw_value_2: v2,
                absolute_difference: (v1 - v2).abs(),
                percent_difference: percent_difference(v1, v2),
                normalized_value_1,
                normalized_value_2,
            })
        })
        .collect()
}

/// Sorts comparisons by descending absolute difference, stably.
pub fn rank_by_divergence(mut comparisons: Vec<PropertyComparison>) -> Vec<PropertyComparison> {
    comparisons.sort_by(|a, b| {
        b.absolute_difference
            .partial_cmp(&a.absolute_difference)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    comparisons
}

/// The `n` most divergent comparable properties for space-limited charts.
pub fn top_divergent(e1: &Element, e2: &Element, n: usize) -> Vec<PropertyComparison> {
    let mut ranked = rank_by_divergence(compare(e1, e2));
    ranked.truncate(n);
    ranked
}
