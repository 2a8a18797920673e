use ecotracker::core::Core;
use ecotracker::core::calculator::suggestions::{
    CARPOOL_TIPS, HIGH_CARBON_TIPS, HIGH_WATER_TIPS, MODERATE_CARBON_TIPS, MODERATE_WATER_TIPS,
    POSITIVE_MESSAGES, WASTE_TIPS,
};
use ecotracker::models::ActivityKind;
use ecotracker::models::summary::Verdict;
use ecotracker::store::ActivityStore;

mod common;
use common::SAMPLE_DOCUMENT;

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "expected {b}, got {a}");
}

fn contains_all(haystack: &[&str], needles: &[&str]) -> bool {
    needles.iter().all(|n| haystack.contains(n))
}

fn contains_any(haystack: &[&str], needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

#[test]
fn test_total_emissions_mixed_kinds() {
    let mut store = ActivityStore::new();
    store.add_transport("car", 10.0).unwrap();
    store.add_electricity(20.0).unwrap();
    store.add_waste(5.0).unwrap();
    store.add_water(500.0).unwrap();

    assert_eq!(Core::total_emissions(&store), 13.71);
}

#[test]
fn test_total_water_only_counts_water() {
    let mut store = ActivityStore::new();
    store.add_water(50.0).unwrap();
    store.add_water(30.0).unwrap();
    store.add_waste(7.0).unwrap();

    assert_eq!(Core::total_water(&store), 80.0);
}

#[test]
fn test_totals_are_rounded_to_two_decimals() {
    let mut store = ActivityStore::new();
    store.add_transport("bus", 1.0).unwrap(); // 0.089
    store.add_transport("train", 1.0).unwrap(); // 0.041
    store.add_water(0.333).unwrap();
    store.add_water(0.333).unwrap();

    assert_eq!(Core::total_emissions(&store), 0.13);
    assert_eq!(Core::total_water(&store), 0.67);
}

#[test]
fn test_huge_totals_stay_finite() {
    let mut store = ActivityStore::new();
    store.add_water(1e307).unwrap();
    store.add_water(1e307).unwrap();
    store.add_electricity(1e307).unwrap();

    let water = Core::total_water(&store);
    assert!(water.is_finite());
    assert_eq!(water, 2e307);
    assert!(Core::total_emissions(&store).is_finite());
}

#[test]
fn test_totals_of_empty_store_are_zero() {
    let store = ActivityStore::new();
    assert_eq!(Core::total_emissions(&store), 0.0);
    assert_eq!(Core::total_water(&store), 0.0);
}

#[test]
fn test_breakdown_by_type() {
    let mut store = ActivityStore::new();
    store.deserialize(SAMPLE_DOCUMENT).unwrap();
    store.add_transport("bus", 10.0).unwrap();

    let stats = Core::statistics(&store);

    let transport = stats.get(ActivityKind::Transport);
    assert_eq!(transport.count, 2);
    assert_close(transport.total, 22.5);
    assert_close(transport.emissions_kg, 2.1375 + 0.89);

    let electricity = stats.get(ActivityKind::Electricity);
    assert_eq!(electricity.count, 1);
    assert_close(electricity.total, 10.0);
    assert_close(electricity.emissions_kg, 4.75);

    let water = stats.get(ActivityKind::Water);
    assert_eq!(water.count, 1);
    assert_close(water.total, 80.0);
    assert_close(water.emissions_kg, 0.0);

    let waste = stats.get(ActivityKind::Waste);
    assert_eq!(waste.count, 1);
    assert_close(waste.total, 3.0);
    assert_close(waste.emissions_kg, 1.5);
}

#[test]
fn test_breakdown_lists_every_kind_in_order() {
    let stats = Core::statistics(&ActivityStore::new());
    let kinds: Vec<ActivityKind> = stats.kinds.iter().map(|k| k.kind).collect();
    assert_eq!(kinds, ActivityKind::ALL.to_vec());
    assert!(stats.kinds.iter().all(|k| k.count == 0));
}

#[test]
fn test_summary_counts() {
    let mut store = ActivityStore::new();
    store.deserialize(SAMPLE_DOCUMENT).unwrap();

    let summary = Core::summary(&store);
    assert_eq!(summary.activity_count, 4);
    assert_eq!(summary.total_emissions_kg, Core::total_emissions(&store));
    assert!((summary.total_emissions_kg - 8.3875).abs() <= 0.005 + 1e-9);
    assert_eq!(summary.total_water_litres, 80.0);
    assert_eq!(summary.breakdown.get(ActivityKind::Waste).count, 1);
}

#[test]
fn test_suggestions_for_empty_store_are_positive() {
    let store = ActivityStore::new();
    assert_eq!(Core::suggestions(&store), POSITIVE_MESSAGES.to_vec());
}

#[test]
fn test_high_footprint_excludes_moderate_tips() {
    let mut store = ActivityStore::new();
    store.add_electricity(100.0).unwrap(); // 47.5
    store.add_waste(5.0).unwrap(); // 2.5
    store.add_transport("car", 100.0).unwrap(); // 17.1 → 67.1 total

    let tips = Core::suggestions(&store);
    assert!(contains_all(&tips, HIGH_CARBON_TIPS));
    assert!(!contains_any(&tips, MODERATE_CARBON_TIPS));
    assert!(!contains_any(&tips, POSITIVE_MESSAGES));
}

#[test]
fn test_footprint_of_sixty_gives_high_tips() {
    let mut store = ActivityStore::new();
    store.add_waste(120.0).unwrap(); // exactly 60 kg CO2
    assert_eq!(Core::total_emissions(&store), 60.0);

    let tips = Core::suggestions(&store);
    let mut expected = HIGH_CARBON_TIPS.to_vec();
    expected.extend_from_slice(WASTE_TIPS);
    assert_eq!(tips, expected);
}

#[test]
fn test_moderate_footprint() {
    let mut store = ActivityStore::new();
    store.add_electricity(40.0).unwrap(); // 19.0

    assert_eq!(Core::suggestions(&store), MODERATE_CARBON_TIPS.to_vec());
}

#[test]
fn test_thresholds_are_strict() {
    let mut store = ActivityStore::new();
    store.add_waste(20.0).unwrap(); // 10 kg CO2, 20 kg waste
    store.add_water(100.0).unwrap();

    // waste above 10 kg still fires; emissions and water sit on the boundary
    assert_eq!(Core::suggestions(&store), WASTE_TIPS.to_vec());

    let mut store = ActivityStore::new();
    store.add_waste(10.0).unwrap();
    assert_eq!(Core::suggestions(&store), POSITIVE_MESSAGES.to_vec());
}

#[test]
fn test_water_tiers_are_mutually_exclusive() {
    let mut store = ActivityStore::new();
    store.add_water(600.0).unwrap();
    let tips = Core::suggestions(&store);
    assert_eq!(tips, HIGH_WATER_TIPS.to_vec());

    let mut store = ActivityStore::new();
    store.add_water(150.0).unwrap();
    let tips = Core::suggestions(&store);
    assert_eq!(tips, MODERATE_WATER_TIPS.to_vec());
}

#[test]
fn test_carpool_tip_needs_more_than_five_car_trips() {
    let mut store = ActivityStore::new();
    for _ in 0..5 {
        store.add_transport("car", 0.0).unwrap();
    }
    assert_eq!(Core::suggestions(&store), POSITIVE_MESSAGES.to_vec());

    store.add_transport("car", 0.0).unwrap();
    assert_eq!(Core::suggestions(&store), CARPOOL_TIPS.to_vec());
}

#[test]
fn test_bus_trips_do_not_count_as_car_trips() {
    let mut store = ActivityStore::new();
    for _ in 0..8 {
        store.add_transport("bus", 0.0).unwrap();
    }
    assert_eq!(Core::suggestions(&store), POSITIVE_MESSAGES.to_vec());
}

#[test]
fn test_all_rules_fire_in_order() {
    let mut store = ActivityStore::new();
    for _ in 0..6 {
        store.add_transport("car", 100.0).unwrap(); // 102.6 kg CO2
    }
    store.add_water(700.0).unwrap();
    store.add_waste(12.0).unwrap();

    let mut expected = HIGH_CARBON_TIPS.to_vec();
    expected.extend_from_slice(HIGH_WATER_TIPS);
    expected.extend_from_slice(WASTE_TIPS);
    expected.extend_from_slice(CARPOOL_TIPS);

    assert_eq!(Core::suggestions(&store), expected);
}

#[test]
fn test_compare_empty_store_is_at_or_below() {
    let cmp = Core::compare(&ActivityStore::new());
    assert_eq!(cmp.carbon.verdict, Verdict::AtOrBelow);
    assert_eq!(cmp.water.verdict, Verdict::AtOrBelow);
    assert_eq!(cmp.carbon.reference, 11.0);
    assert_eq!(cmp.water.reference, 150.0);
}

#[test]
fn test_compare_boundary_and_above() {
    let mut store = ActivityStore::new();
    store.add_waste(22.0).unwrap(); // 11.0 kg CO2
    store.add_water(151.0).unwrap();

    let cmp = Core::compare(&store);
    assert_eq!(cmp.carbon.yours, 11.0);
    assert_eq!(cmp.carbon.verdict, Verdict::AtOrBelow);
    assert_eq!(cmp.water.yours, 151.0);
    assert_eq!(cmp.water.verdict, Verdict::Above);
}
