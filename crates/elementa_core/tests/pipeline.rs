//! End-to-end flow: decode a feed, search it, pin a pair, derive charts.

use elementa_core::{
    apply_filters, compare, parse_dataset, ComparisonSelection, ElementStore, FilterCriteria,
    PropertyKey,
};

const FEED: &str = r#"{
    "elements": [
        {
            "number": 1,
            "symbol": "H",
            "name": "Hydrogen",
            "category": "diatomic nonmetal",
            "atomic_mass": 1.008,
            "period": 1,
            "group": 1,
            "phase": "Gas",
            "electron_configuration": "1s1"
        },
        {
            "number": 2,
            "symbol": "He",
            "name": "Helium",
            "category": "noble gas",
            "atomic_mass": 4.0026,
            "period": 1,
            "group": 18,
            "phase": "Gas",
            "electron_configuration": "1s2"
        }
    ]
}"#;

#[test]
fn load_search_pin_and_compare() {
    let store = parse_dataset(FEED)
        .and_then(ElementStore::from_elements)
        .expect("feed should load");

    let outcome = apply_filters(store.all(), &FilterCriteria::search("H"));
    assert_eq!(outcome.shown(), 2);
    assert_eq!(outcome.exact_match, Some(1));

    let mut selection = ComparisonSelection::new();
    selection.toggle_mode();
    for element in &outcome.visible {
        selection.add(element.clone());
    }

    let (hydrogen, helium) = selection.pair().expect("both matches pinned");
    let comparisons = compare(hydrogen, helium);
    assert_eq!(comparisons.len(), 1);
    assert_eq!(comparisons[0].key, PropertyKey::AtomicMass);

    let percent = comparisons[0]
        .percent_difference
        .expect("masses are non-zero");
    assert!((percent - 297.1).abs() < 0.5, "got {percent}");

    // Atomic-structure view input is derivable for both pins.
    assert_eq!(hydrogen.electron_shells(), vec![1]);
    assert_eq!(helium.electron_shells(), vec![2]);
}
