use elementa_core::{ComparisonSelection, Element, ElementCategory, Phase};

fn element(number: u32, symbol: &str) -> Element {
    Element {
        number,
        symbol: symbol.to_string(),
        name: symbol.to_string(),
        category: ElementCategory::Unknown,
        atomic_mass: number as f64,
        period: 1,
        group: Some(1),
        phase: Phase::Solid,
        density: None,
        electronegativity_pauling: None,
        electron_affinity: None,
        ionization_energy: None,
        melt: None,
        boil: None,
        molar_heat: None,
        electron_configuration: String::new(),
    }
}

#[test]
fn add_pins_up_to_two_elements_in_order() {
    let mut selection = ComparisonSelection::new();
    assert_eq!(selection.remaining_slots(), 2);
    assert!(selection.pair().is_none());

    selection.add(element(1, "H"));
    assert_eq!(selection.remaining_slots(), 1);
    assert!(selection.pair().is_none());

    selection.add(element(2, "He"));
    assert_eq!(selection.remaining_slots(), 0);
    let (first, second) = selection.pair().expect("two pins form a pair");
    assert_eq!(first.number, 1);
    assert_eq!(second.number, 2);
}

#[test]
fn third_add_evicts_the_oldest_pin() {
    let mut selection = ComparisonSelection::new();
    selection.add(element(1, "H"));
    selection.add(element(2, "He"));
    selection.add(element(3, "Li"));

    let numbers: Vec<u32> = selection.pinned().iter().map(|e| e.number).collect();
    assert_eq!(numbers, vec![2, 3]);
}

#[test]
fn duplicate_add_is_a_no_op() {
    let mut selection = ComparisonSelection::new();
    selection.add(element(1, "H"));
    selection.add(element(2, "He"));
    selection.add(element(1, "H"));

    let numbers: Vec<u32> = selection.pinned().iter().map(|e| e.number).collect();
    assert_eq!(numbers, vec![1, 2]);
}

#[test]
fn remove_unpins_only_the_matching_number() {
    let mut selection = ComparisonSelection::new();
    selection.add(element(1, "H"));
    selection.add(element(2, "He"));

    selection.remove(1);
    assert_eq!(selection.pinned().len(), 1);
    assert_eq!(selection.pinned()[0].number, 2);

    // Unknown number: no-op, never an error.
    selection.remove(99);
    assert_eq!(selection.pinned().len(), 1);
}

#[test]
fn clear_empties_unconditionally() {
    let mut selection = ComparisonSelection::new();
    selection.clear();
    assert!(selection.pinned().is_empty());

    selection.add(element(1, "H"));
    selection.clear();
    assert!(selection.pinned().is_empty());
}

#[test]
fn leaving_comparison_mode_clears_pins() {
    let mut selection = ComparisonSelection::new();
    assert!(!selection.mode_active());

    selection.toggle_mode();
    assert!(selection.mode_active());

    selection.add(element(1, "H"));
    selection.add(element(2, "He"));
    selection.toggle_mode();

    assert!(!selection.mode_active());
    assert!(selection.pinned().is_empty());

    // Re-entering the mode starts from a clean selection.
    selection.toggle_mode();
    assert!(selection.mode_active());
    assert_eq!(selection.remaining_slots(), 2);
}
