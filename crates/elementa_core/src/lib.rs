//! Core data pipeline for the interactive periodic table.
//! This crate is the single source of truth for dataset, filter and
//! comparison invariants; rendering layers consume it read-only.

pub mod compare;
pub mod dataset;
pub mod logging;
pub mod model;
pub mod search;
pub mod store;

pub use compare::analytics::{
    comparable_properties, compare, normalize, percent_difference, rank_by_divergence,
    top_divergent, PropertyComparison, PropertyKey, TOP_DIVERGENT_DEFAULT,
};
pub use compare::selection::ComparisonSelection;
pub use dataset::{load, parse_dataset, DatasetError, DatasetResult, DEFAULT_DATASET_URL};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::element::{AtomicNumber, Element, ElementCategory, Phase};
pub use model::shells::{parse_electron_configuration, shell_distribution, ShellParseError};
pub use search::filter::{apply_filters, FilterCriteria, FilterOutcome, MarkerVisibility};
pub use store::{ElementStore, FacetOptions};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
