use crate::models::Activity;
use crate::utils::formatting::round2;

/// Sum of emissions over every record that carries them, rounded to 2 decimals.
pub fn total_emissions(activities: &[Activity]) -> f64 {
    round2(activities.iter().filter_map(Activity::emissions_kg).sum())
}

/// Sum of litres over water records, rounded to 2 decimals.
pub fn total_water(activities: &[Activity]) -> f64 {
    round2(
        activities
            .iter()
            .filter_map(|a| match a {
                Activity::Water { litres, .. } => Some(*litres),
                _ => None,
            })
            .sum(),
    )
}

pub fn total_waste(activities: &[Activity]) -> f64 {
    activities
        .iter()
        .filter_map(|a| match a {
            Activity::Waste { kg, .. } => Some(*kg),
            _ => None,
        })
        .sum()
}
