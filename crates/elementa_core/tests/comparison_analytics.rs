use elementa_core::{
    comparable_properties, compare, normalize, percent_difference, rank_by_divergence,
    top_divergent, Element, ElementCategory, Phase, PropertyKey, TOP_DIVERGENT_DEFAULT,
};

fn element(number: u32, symbol: &str, atomic_mass: f64) -> Element {
    Element {
        number,
        symbol: symbol.to_string(),
        name: symbol.to_string(),
        category: ElementCategory::Unknown,
        atomic_mass,
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
fn percent_difference_relative_to_smaller_value() {
    assert_eq!(percent_difference(10.0, 5.0), Some(100.0));
    assert_eq!(percent_difference(5.0, 10.0), Some(100.0));
    assert_eq!(percent_difference(5.0, 5.0), Some(0.0));
}

#[test]
fn percent_difference_over_zero_minimum_is_not_computed() {
    assert_eq!(percent_difference(0.0, 5.0), None);
    assert_eq!(percent_difference(5.0, 0.0), None);
    assert_eq!(percent_difference(0.0, 0.0), None);
}

#[test]
fn normalize_scales_against_the_pair_maximum() {
    assert_eq!(normalize(50.0, 100.0), (50.0, 100.0));
    assert_eq!(normalize(100.0, 50.0), (100.0, 50.0));
    assert_eq!(normalize(0.0, 0.0), (0.0, 0.0));
}

#[test]
fn comparable_properties_require_presence_on_both_elements() {
    let mut first = element(1, "H", 1.008);
    first.density = Some(0.08988);
    first.boil = Some(20.271);

    let mut second = element(2, "He", 4.0026);
    second.boil = Some(4.222);
    second.melt = Some(0.95);

    let keys = comparable_properties(&first, &second);
    // density only on the first, melt only on the second: both excluded.
    assert_eq!(keys, vec![PropertyKey::AtomicMass, PropertyKey::Boil]);
}

#[test]
fn compare_excludes_one_sided_properties_entirely() {
    let mut first = element(1, "H", 1.008);
    first.density = Some(0.08988);

    let mut second = element(2, "He", 4.0026);
    second.melt = Some(0.95);

    // density and melt exist on only one element each: no row, and never
    // a zero-substituted value.
    let comparisons = compare(&first, &second);
    let keys: Vec<PropertyKey> = comparisons.iter().map(|c| c.key).collect();
    assert_eq!(keys, vec![PropertyKey::AtomicMass]);
    assert!(comparisons.iter().all(|c| c.raw_value_1 != 0.0));
}

#[test]
fn compare_hydrogen_helium_atomic_mass() {
    let hydrogen = element(1, "H", 1.008);
    let helium = element(2, "He", 4.0026);

    let comparisons = compare(&hydrogen, &helium);
    assert_eq!(comparisons.len(), 1);

    let mass = &comparisons[0];
    assert_eq!(mass.key, PropertyKey::AtomicMass);
    assert_eq!(mass.raw_value_1, 1.008);
    assert_eq!(mass.raw_value_2, 4.0026);

    let percent = mass.percent_difference.expect("non-zero minimum");
    assert!((percent - 297.1).abs() < 0.5, "got {percent}");

    // Helium is the larger value, so it pegs the 100 end of the scale.
    assert!((mass.normalized_value_2 - 100.0).abs() < f64::EPSILON);
    assert!(mass.normalized_value_1 < 26.0);
}

#[test]
fn compare_keeps_catalog_order() {
    let mut first = element(3, "Li", 6.94);
    first.density = Some(0.534);
    first.melt = Some(453.65);
    first.boil = Some(1603.0);

    let mut second = element(11, "Na", 22.99);
    second.density = Some(0.968);
    second.melt = Some(370.944);
    second.boil = Some(1156.09);

    let keys: Vec<PropertyKey> = compare(&first, &second).into_iter().map(|c| c.key).collect();
    assert_eq!(
        keys,
        vec![
            PropertyKey::AtomicMass,
            PropertyKey::Density,
            PropertyKey::Boil,
            PropertyKey::Melt,
        ]
    );
}

#[test]
fn rank_by_divergence_sorts_descending_and_is_stable_on_ties() {
    let mut first = element(3, "Li", 10.0);
    first.density = Some(1.0);
    first.melt = Some(100.0);
    first.boil = Some(300.0);

    let mut second = element(11, "Na", 15.0);
    second.density = Some(6.0);
    second.melt = Some(200.0);
    second.boil = Some(200.0);

    let ranked = rank_by_divergence(compare(&first, &second));
    let keys: Vec<PropertyKey> = ranked.iter().map(|c| c.key).collect();

    // boil and melt tie at |100|; boil precedes melt in the catalog and
    // must stay ahead.
    assert_eq!(
        keys,
        vec![
            PropertyKey::Boil,
            PropertyKey::Melt,
            PropertyKey::AtomicMass,
            PropertyKey::Density,
        ]
    );
}

#[test]
fn top_divergent_caps_the_chart_rows() {
    let mut first = element(26, "Fe", 55.845);
    first.density = Some(7.874);
    first.electronegativity_pauling = Some(1.83);
    first.electron_affinity = Some(14.785);
    first.ionization_energy = Some(762.5);
    first.melt = Some(1811.0);
    first.boil = Some(3134.0);
    first.molar_heat = Some(25.1);

    let mut second = element(79, "Au", 196.966);
    second.density = Some(19.3);
    second.electronegativity_pauling = Some(2.54);
    second.electron_affinity = Some(222.747);
    second.ionization_energy = Some(890.1);
    second.melt = Some(1337.33);
    second.boil = Some(3243.0);
    second.molar_heat = Some(25.418);

    assert_eq!(comparable_properties(&first, &second).len(), 8);

    let top = top_divergent(&first, &second, TOP_DIVERGENT_DEFAULT);
    assert_eq!(top.len(), 6);
    for pair in top.windows(2) {
        assert!(pair[0].absolute_difference >= pair[1].absolute_difference);
    }
}

#[test]
fn percent_difference_annotation_is_omitted_for_zero_valued_property() {
    let mut first = element(1, "A", 1.0);
    first.electron_affinity = Some(0.0);
    let mut second = element(2, "B", 2.0);
    second.electron_affinity = Some(50.0);

    let comparisons = compare(&first, &second);
    let affinity = comparisons
        .iter()
        .find(|c| c.key == PropertyKey::ElectronAffinity)
        .expect("present on both elements");

    assert_eq!(affinity.percent_difference, None);
    // Normalization still works: the zero value sits at 0 on the scale.
    assert_eq!(affinity.normalized_value_1, 0.0);
    assert_eq!(affinity.normalized_value_2, 100.0);
}
