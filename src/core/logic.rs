use crate::core::calculator::{breakdown, reference, suggestions, totals};
use crate::models::summary::{Breakdown, Comparison, Summary};
use crate::store::ActivityStore;

/// Read-only reporting over an [`ActivityStore`].
pub struct Core;

impl Core {
    pub fn total_emissions(store: &ActivityStore) -> f64 {
        totals::total_emissions(store.activities())
    }

    pub fn total_water(store: &ActivityStore) -> f64 {
        totals::total_water(store.activities())
    }

    pub fn statistics(store: &ActivityStore) -> Breakdown {
        breakdown::breakdown_by_type(store.activities())
    }

    pub fn summary(store: &ActivityStore) -> Summary {
        Summary {
            total_emissions_kg: Self::total_emissions(store),
            total_water_litres: Self::total_water(store),
            activity_count: store.len(),
            breakdown: Self::statistics(store),
        }
    }

    pub fn suggestions(store: &ActivityStore) -> Vec<&'static str> {
        suggestions::suggestions(store.activities())
    }

    pub fn compare(store: &ActivityStore) -> Comparison {
        reference::compare_to_reference(store.activities())
    }
}
