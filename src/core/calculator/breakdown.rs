use crate::models::summary::{Breakdown, KindStats};
use crate::models::{Activity, ActivityKind};

/// Count, kind total and emissions for each of the four kinds.
pub fn breakdown_by_type(activities: &[Activity]) -> Breakdown {
    let mut kinds = ActivityKind::ALL.map(KindStats::empty);

    for a in activities {
        let stats = &mut kinds[a.kind() as usize];
        stats.count += 1;
        stats.total += a.quantity();
        stats.emissions_kg += a.emissions_kg().unwrap_or(0.0);
    }

    Breakdown { kinds }
}
