use super::activity_kind::ActivityKind;

/// Aggregates for one activity kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KindStats {
    pub kind: ActivityKind,
    pub count: usize,
    /// km, kWh, litres or kg depending on `kind`
    pub total: f64,
    pub emissions_kg: f64,
}

impl KindStats {
    pub fn empty(kind: ActivityKind) -> Self {
        Self {
            kind,
            count: 0,
            total: 0.0,
            emissions_kg: 0.0,
        }
    }
}

/// Per-kind statistics, always in `ActivityKind::ALL` order.
#[derive(Debug, Clone, PartialEq)]
pub struct Breakdown {
    pub kinds: [KindStats; 4],
}

impl Breakdown {
    pub fn get(&self, kind: ActivityKind) -> &KindStats {
        // kinds[] is filled in ActivityKind::ALL order
        &self.kinds[kind as usize]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total_emissions_kg: f64,
    pub total_water_litres: f64,
    pub activity_count: usize,
    pub breakdown: Breakdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    AtOrBelow,
    Above,
}

/// One axis of the comparison against reference daily values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceCheck {
    pub yours: f64,
    pub reference: f64,
    pub verdict: Verdict,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    pub carbon: ReferenceCheck,
    pub water: ReferenceCheck,
}
