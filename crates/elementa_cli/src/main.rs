//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `elementa_core` linkage.
//! - Load a local dataset file and print a deterministic summary for
//!   quick local sanity checks.

use elementa_core::{apply_filters, parse_dataset, ElementStore, FilterCriteria};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("elementa_core version={}", elementa_core::core_version());

    let Some(path) = std::env::args().nth(1) else {
        println!("usage: elementa_cli <dataset.json> [search-term]");
        return ExitCode::SUCCESS;
    };

    let json = match std::fs::read_to_string(&path) {
        Ok(json) => json,
        Err(err) => {
            eprintln!("failed to read `{path}`: {err}");
            return ExitCode::FAILURE;
        }
    };

    let store = match parse_dataset(&json).and_then(ElementStore::from_elements) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("failed to load dataset: {err}");
            return ExitCode::FAILURE;
        }
    };
    println!("elements={}", store.len());

    if let Some(term) = std::env::args().nth(2) {
        let outcome = apply_filters(store.all(), &FilterCriteria::search(&term));
        println!(
            "search `{term}`: showing {} of {}",
            outcome.shown(),
            outcome.total
        );
        for element in &outcome.visible {
            println!(
                "  {:>3} {:<3} {} ({})",
                element.number,
                element.symbol,
                element.name,
                element.category.label()
            );
        }
    }

    ExitCode::SUCCESS
}
