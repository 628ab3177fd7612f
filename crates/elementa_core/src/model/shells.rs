//! Electron shell derivation for the atomic-structure view.
//!
//! # Responsibility
//! - Parse full orbital notation into per-shell electron counts.
//! - Provide the capacity-fill fallback when no configuration is available.
//!
//! # Invariants
//! - Shell counts always sum to the input electron total.
//! - Parsing never panics on arbitrary dataset text.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Maximum electrons per shell following the 2n² rule.
const SHELL_CAPACITY: [u32; 6] = [2, 8, 18, 32, 50, 72];

static ORBITAL_TERM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)([spdfg])(\d+)$").expect("valid orbital term regex"));

/// Parse error for orbital notation text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellParseError {
    /// A whitespace-separated token is not an `NlE` orbital term.
    MalformedTerm(String),
    /// An orbital term names principal quantum number zero.
    InvalidShellNumber(String),
}

impl Display for ShellParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedTerm(term) => write!(f, "malformed orbital term `{term}`"),
            Self::InvalidShellNumber(term) => {
                write!(f, "orbital term `{term}` has shell number 0")
            }
        }
    }
}

impl Error for ShellParseError {}

/// Distributes electrons into shells by filling each to capacity.
///
/// Any remainder past the last known capacity goes into the last shell,
/// so the returned counts always sum to `electron_count`.
pub fn shell_distribution(electron_count: u32) -> Vec<u32> {
    let mut shells = Vec::new();
    let mut remaining = electron_count;

    for capacity in SHELL_CAPACITY {
        if remaining == 0 {
            break;
        }
        let filled = remaining.min(capacity);
        shells.push(filled);
        remaining -= filled;
    }

    if remaining > 0 {
        if let Some(last) = shells.last_mut() {
            *last += remaining;
        }
    }

    shells
}

/// Parses full orbital notation (`"1s2 2s2 2p4"`) into per-shell counts.
///
/// Occupancies of terms sharing a principal quantum number are summed, so
/// index 0 of the result is shell n=1. Blank input yields an empty vector.
///
/// # Errors
/// - [`ShellParseError::MalformedTerm`] when a token does not match `NlE`.
/// - [`ShellParseError::InvalidShellNumber`] for a `0l...` term.
pub fn parse_electron_configuration(text: &str) -> Result<Vec<u32>, ShellParseError> {
    let mut shells: Vec<u32> = Vec::new();

    for term in text.split_whitespace() {
        let captures = ORBITAL_TERM_RE
            .captures(term)
            .ok_or_else(|| ShellParseError::MalformedTerm(term.to_string()))?;

        let shell: usize = captures[1]
            .parse()
            .map_err(|_| ShellParseError::MalformedTerm(term.to_string()))?;
        let electrons: u32 = captures[3]
            .parse()
            .map_err(|_| ShellParseError::MalformedTerm(term.to_string()))?;

        if shell == 0 {
            return Err(ShellParseError::InvalidShellNumber(term.to_string()));
        }

        if shells.len() < shell {
            shells.resize(shell, 0);
        }
        shells[shell - 1] += electrons;
    }

    Ok(shells)
}

#[cfg(test)]
mod tests {
    use super::{parse_electron_configuration, shell_distribution, ShellParseError};

    #[test]
    fn shell_distribution_fills_by_capacity() {
        assert_eq!(shell_distribution(1), vec![1]);
        assert_eq!(shell_distribution(2), vec![2]);
        assert_eq!(shell_distribution(11), vec![2, 8, 1]);
        assert_eq!(shell_distribution(26), vec![2, 8, 16]);
    }

    #[test]
    fn shell_distribution_overflow_lands_in_last_shell() {
        let total: u32 = [2u32, 8, 18, 32, 50, 72].iter().sum();
        let shells = shell_distribution(total + 5);
        assert_eq!(shells.len(), 6);
        assert_eq!(shells[5], 72 + 5);
        assert_eq!(shells.iter().sum::<u32>(), total + 5);
    }

    #[test]
    fn parse_oxygen_configuration() {
        let shells = parse_electron_configuration("1s2 2s2 2p4").expect("valid notation");
        assert_eq!(shells, vec![2, 6]);
    }

    #[test]
    fn parse_sums_terms_per_shell() {
        let shells =
            parse_electron_configuration("1s2 2s2 2p6 3s2 3p6 3d6 4s2").expect("valid notation");
        assert_eq!(shells, vec![2, 8, 14, 2]);
        assert_eq!(shells.iter().sum::<u32>(), 26);
    }

    #[test]
    fn parse_rejects_noble_gas_shorthand() {
        let error = parse_electron_configuration("[Ne] 3s1").expect_err("shorthand must fail");
        assert_eq!(error, ShellParseError::MalformedTerm("[Ne]".to_string()));
    }

    #[test]
    fn parse_blank_input_is_empty() {
        assert_eq!(parse_electron_configuration("  ").expect("blank is ok"), Vec::<u32>::new());
    }
}
