//! Element domain model.
//!
//! # Responsibility
//! - Define the canonical record for one chemical element.
//! - Normalize the dataset's free-text category and phase fields into
//!   closed enums at ingest.
//!
//! # Invariants
//! - `number` is stable and never reused for another element.
//! - `category` and `phase` are always canonical; raw dataset spellings
//!   ("lanthanoid", "diatomic nonmetal", ...) never leak past the loader.

use crate::model::shells::{parse_electron_configuration, shell_distribution};
use serde::{Deserialize, Serialize};

/// Atomic number, the stable identifier for every element.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type AtomicNumber = u32;

/// Canonical chemical family for an element.
///
/// The source dataset carries this as free text with inconsistent forms;
/// [`ElementCategory::canonicalize`] maps every observed spelling onto one
/// of these variants so filtering can use plain equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementCategory {
    AlkaliMetal,
    AlkalineEarthMetal,
    TransitionMetal,
    PostTransitionMetal,
    Metalloid,
    Nonmetal,
    Halogen,
    NobleGas,
    Lanthanide,
    Actinide,
    Unknown,
}

impl ElementCategory {
    /// All categories in legend display order.
    pub const ALL: [ElementCategory; 11] = [
        Self::AlkaliMetal,
        Self::AlkalineEarthMetal,
        Self::TransitionMetal,
        Self::PostTransitionMetal,
        Self::Metalloid,
        Self::Nonmetal,
        Self::Halogen,
        Self::NobleGas,
        Self::Lanthanide,
        Self::Actinide,
        Self::Unknown,
    ];

    /// Maps raw dataset category text onto a canonical variant.
    ///
    /// Handles the spellings observed in the Periodic-Table-JSON feed:
    /// "lanthanoid"/"actinoid" suffix forms, the "diatomic"/"polyatomic
    /// nonmetal" split, and hedged values like
    /// "unknown, probably transition metal".
    pub fn canonicalize(raw: &str) -> Self {
        let text = raw.trim().to_ascii_lowercase();
        if text.starts_with("unknown") {
            return Self::Unknown;
        }
        match text.as_str() {
            "alkali metal" => Self::AlkaliMetal,
            "alkaline earth metal" => Self::AlkalineEarthMetal,
            "transition metal" => Self::TransitionMetal,
            "post-transition metal" | "post transition metal" => Self::PostTransitionMetal,
            "metalloid" => Self::Metalloid,
            "nonmetal" | "diatomic nonmetal" | "polyatomic nonmetal" => Self::Nonmetal,
            "halogen" => Self::Halogen,
            "noble gas" => Self::NobleGas,
            "lanthanide" | "lanthanoid" => Self::Lanthanide,
            "actinide" | "actinoid" => Self::Actinide,
            _ => Self::Unknown,
        }
    }

    /// Canonical lowercase display label, also used for text search.
    pub fn label(self) -> &'static str {
        match self {
            Self::AlkaliMetal => "alkali metal",
            Self::AlkalineEarthMetal => "alkaline earth metal",
            Self::TransitionMetal => "transition metal",
            Self::PostTransitionMetal => "post-transition metal",
            Self::Metalloid => "metalloid",
            Self::Nonmetal => "nonmetal",
            Self::Halogen => "halogen",
            Self::NobleGas => "noble gas",
            Self::Lanthanide => "lanthanide",
            Self::Actinide => "actinide",
            Self::Unknown => "unknown",
        }
    }

    /// Accent color keyword consumed by card/legend/chart rendering.
    pub fn accent_color(self) -> &'static str {
        match self {
            Self::AlkaliMetal => "red",
            Self::AlkalineEarthMetal => "orange",
            Self::TransitionMetal => "gold",
            Self::PostTransitionMetal => "green",
            Self::Metalloid => "teal",
            Self::Nonmetal => "blue",
            Self::Halogen => "indigo",
            Self::NobleGas => "purple",
            Self::Lanthanide => "pink",
            Self::Actinide => "fuchsia",
            Self::Unknown => "gray",
        }
    }
}

/// Physical state at standard temperature and pressure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Solid,
    Liquid,
    Gas,
    Unknown,
}

impl Phase {
    /// All phases offered by the state facet filter.
    pub const ALL: [Phase; 3] = [Self::Solid, Self::Liquid, Self::Gas];

    /// Parses the dataset's phase text case-insensitively.
    ///
    /// Anything outside solid/liquid/gas maps to [`Phase::Unknown`] rather
    /// than failing the record.
    pub fn canonicalize(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "solid" => Self::Solid,
            "liquid" => Self::Liquid,
            "gas" => Self::Gas,
            _ => Self::Unknown,
        }
    }

    /// Lowercase display label, also used for text search.
    pub fn label(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Liquid => "liquid",
            Self::Gas => "gas",
            Self::Unknown => "unknown",
        }
    }
}

/// Canonical record for one chemical element.
///
/// Built once by the dataset loader and never mutated afterwards. Optional
/// numeric properties are genuinely absent for some elements; absence is
/// represented as `None`, never as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Atomic number, the unique stable key.
    pub number: AtomicNumber,
    /// Chemical symbol, e.g. "He".
    pub symbol: String,
    /// Element name, e.g. "Helium".
    pub name: String,
    /// Canonicalized chemical family.
    pub category: ElementCategory,
    /// Average atomic mass in atomic mass units.
    pub atomic_mass: f64,
    /// Row position in the periodic table.
    pub period: u32,
    /// Column position; `None` for the lanthanide/actinide inner block.
    pub group: Option<u32>,
    /// Physical state at STP.
    pub phase: Phase,
    /// Density in g/cm3.
    pub density: Option<f64>,
    /// Pauling electronegativity.
    pub electronegativity_pauling: Option<f64>,
    /// Electron affinity in kJ/mol.
    pub electron_affinity: Option<f64>,
    /// First ionization energy in kJ/mol.
    pub ionization_energy: Option<f64>,
    /// Melting point in kelvin.
    pub melt: Option<f64>,
    /// Boiling point in kelvin.
    pub boil: Option<f64>,
    /// Molar heat capacity in J/(mol·K).
    pub molar_heat: Option<f64>,
    /// Full orbital notation, e.g. "1s2 2s2 2p4".
    pub electron_configuration: String,
}

impl Element {
    /// Electrons per shell for the atomic-structure visualization.
    ///
    /// Prefers the parsed electron configuration; falls back to the
    /// capacity-fill distribution over the atomic number when the
    /// configuration text is blank or malformed.
    pub fn electron_shells(&self) -> Vec<u32> {
        match parse_electron_configuration(&self.electron_configuration) {
            Ok(shells) if !shells.is_empty() => shells,
            _ => shell_distribution(self.number),
        }
    }
}
