//! One-shot element dataset loader.
//!
//! # Responsibility
//! - Issue the single HTTP GET for the element feed and decode it.
//! - Validate raw records into domain [`Element`]s, dropping malformed ones.
//!
//! # Invariants
//! - Non-success status and transport failures are terminal; no retry.
//! - A record missing a mandatory field is skipped with a warning, not
//!   allowed to fail the whole load.
//! - Atomic numbers are unique across the returned store.

use crate::dataset::{DatasetError, DatasetResult};
use crate::model::element::{Element, ElementCategory, Phase};
use crate::store::ElementStore;
use log::{info, warn};
use serde::Deserialize;

/// Periodic-Table-JSON feed consumed by the reference deployment.
pub const DEFAULT_DATASET_URL: &str =
    "https://raw.githubusercontent.com/Bowserinator/Periodic-Table-JSON/master/PeriodicTableJSON.json";

/// Top-level payload shape: `{ "elements": [...] }`.
#[derive(Debug, Deserialize)]
struct RawDataset {
    elements: Vec<RawElement>,
}

/// Dataset record before mandatory-field validation.
///
/// Everything is optional here so that one bad record cannot poison
/// deserialization of the whole payload.
#[derive(Debug, Deserialize)]
struct RawElement {
    number: Option<u32>,
    symbol: Option<String>,
    name: Option<String>,
    category: Option<String>,
    atomic_mass: Option<f64>,
    period: Option<u32>,
    group: Option<u32>,
    phase: Option<String>,
    density: Option<f64>,
    electronegativity_pauling: Option<f64>,
    electron_affinity: Option<f64>,
    ionization_energy: Option<f64>,
    /// The feed publishes ionization energies as an array; the first entry
    /// is the scalar the comparison catalog uses.
    ionization_energies: Option<Vec<f64>>,
    melt: Option<f64>,
    boil: Option<f64>,
    molar_heat: Option<f64>,
    electron_configuration: Option<String>,
}

impl RawElement {
    /// Promotes a raw record into a domain element.
    ///
    /// Returns the name of the first missing mandatory field on failure so
    /// the skip log can say what was wrong.
    fn into_element(self) -> Result<Element, &'static str> {
        let number = self.number.ok_or("number")?;
        let symbol = self.symbol.ok_or("symbol")?;
        let name = self.name.ok_or("name")?;
        let category = self.category.ok_or("category")?;
        let atomic_mass = self.atomic_mass.ok_or("atomic_mass")?;
        let phase = self.phase.ok_or("phase")?;
        let period = self.period.ok_or("period")?;

        let ionization_energy = self
            .ionization_energy
            .or_else(|| self.ionization_energies.as_ref().and_then(|v| v.first().copied()));

        Ok(Element {
            number,
            symbol,
            name,
            category: ElementCategory::canonicalize(&category),
            atomic_mass,
            period,
            group: self.group,
            phase: Phase::canonicalize(&phase),
            density: self.density,
            electronegativity_pauling: self.electronegativity_pauling,
            electron_affinity: self.electron_affinity,
            ionization_energy,
            melt: self.melt,
            boil: self.boil,
            molar_heat: self.molar_heat,
            electron_configuration: self.electron_configuration.unwrap_or_default(),
        })
    }
}

/// Fetches the element dataset once and returns the populated store.
///
/// # Errors
/// - [`DatasetError::Http`] on transport failure.
/// - [`DatasetError::Status`] on a non-2xx response.
/// - Decode/validation failures as documented on [`parse_dataset`].
pub fn load(url: &str) -> DatasetResult<ElementStore> {
    let response = reqwest::blocking::get(url)?;
    let status = response.status();
    if !status.is_success() {
        warn!(
            "event=dataset_fetch module=dataset status=error http_status={}",
            status.as_u16()
        );
        return Err(DatasetError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.text()?;
    let elements = parse_dataset(&body)?;
    let store = ElementStore::from_elements(elements)?;
    info!(
        "event=dataset_load module=dataset status=ok count={}",
        store.len()
    );
    Ok(store)
}

/// Decodes the JSON payload into validated elements, preserving feed order.
///
/// Records missing a mandatory field (`number`, `symbol`, `name`,
/// `category`, `atomic_mass`, `phase`, `period`) are dropped with a
/// warning instead of failing the load.
///
/// # Errors
/// - [`DatasetError::Decode`] when the payload is not the expected shape.
/// - [`DatasetError::EmptyDataset`] when nothing survives validation.
pub fn parse_dataset(json: &str) -> DatasetResult<Vec<Element>> {
    let raw: RawDataset = serde_json::from_str(json)?;
    let total = raw.elements.len();

    let mut elements = Vec::with_capacity(total);
    for (index, record) in raw.elements.into_iter().enumerate() {
        match record.into_element() {
            Ok(element) => elements.push(element),
            Err(missing_field) => warn!(
                "event=record_dropped module=dataset status=warn index={index} missing={missing_field}"
            ),
        }
    }

    if elements.is_empty() {
        return Err(DatasetError::EmptyDataset);
    }
    if elements.len() < total {
        warn!(
            "event=dataset_partial module=dataset status=warn kept={} dropped={}",
            elements.len(),
            total - elements.len()
        );
    }

    Ok(elements)
}
