use super::totals::{total_emissions, total_water};
use crate::core::factors::{REFERENCE_DAILY_CARBON_KG, REFERENCE_DAILY_WATER_LITRES};
use crate::models::Activity;
use crate::models::summary::{Comparison, ReferenceCheck, Verdict};

fn check(yours: f64, reference: f64) -> ReferenceCheck {
    let verdict = if yours <= reference {
        Verdict::AtOrBelow
    } else {
        Verdict::Above
    };
    ReferenceCheck {
        yours,
        reference,
        verdict,
    }
}

pub fn compare_to_reference(activities: &[Activity]) -> Comparison {
    Comparison {
        carbon: check(total_emissions(activities), REFERENCE_DAILY_CARBON_KG),
        water: check(total_water(activities), REFERENCE_DAILY_WATER_LITRES),
    }
}
