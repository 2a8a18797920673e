//! Rule-based sustainability suggestions.
//!
//! Every rule in [`RULES`] is evaluated, in order, against the same
//! [`Facts`]. A rule contributes zero or more fixed messages; when no rule
//! contributes anything the positive-reinforcement messages are returned.

use super::totals::{total_emissions, total_waste, total_water};
use crate::models::{Activity, TransportMode};

pub const HIGH_CARBON_TIPS: &[&str] = &[
    "🚌 Your carbon footprint is high! Consider using public transport or cycling more often",
    "💡 Reduce electricity usage by turning off unused devices",
];

pub const MODERATE_CARBON_TIPS: &[&str] = &[
    "🚶 Try to walk or bike for short distances to reduce emissions",
    "💡 Switch to LED bulbs and energy-efficient appliances",
];

pub const HIGH_WATER_TIPS: &[&str] = &[
    "🚿 Your water usage is high! Take shorter showers to conserve water",
    "🔧 Fix any leaking taps in your home",
];

pub const MODERATE_WATER_TIPS: &[&str] = &[
    "💧 Consider collecting rainwater for plants",
    "🚰 Turn off taps while brushing teeth or washing dishes",
];

pub const WASTE_TIPS: &[&str] = &[
    "♻️  Practice recycling and composting to reduce waste",
    "🛍️  Use reusable bags and containers",
];

pub const CARPOOL_TIPS: &[&str] =
    &["🚗 Consider carpooling or using public transport for your commute"];

pub const POSITIVE_MESSAGES: &[&str] = &[
    "🌟 Great job! Keep maintaining your eco-friendly habits",
    "🌱 You're making a positive impact on the environment!",
];

pub const HIGH_CARBON_KG: f64 = 50.0;
pub const MODERATE_CARBON_KG: f64 = 10.0;
pub const HIGH_WATER_LITRES: f64 = 500.0;
pub const MODERATE_WATER_LITRES: f64 = 100.0;
pub const WASTE_KG: f64 = 10.0;
pub const CAR_TRIPS: usize = 5;

/// Inputs shared by all rules, computed once per evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Facts {
    pub carbon_kg: f64,
    pub water_litres: f64,
    pub waste_records: usize,
    pub waste_kg: f64,
    pub car_trips: usize,
}

impl Facts {
    pub fn gather(activities: &[Activity]) -> Self {
        Self {
            carbon_kg: total_emissions(activities),
            water_litres: total_water(activities),
            waste_records: activities
                .iter()
                .filter(|a| matches!(a, Activity::Waste { .. }))
                .count(),
            waste_kg: total_waste(activities),
            car_trips: activities
                .iter()
                .filter(|a| a.transport_mode() == Some(TransportMode::Car))
                .count(),
        }
    }
}

pub struct Rule {
    pub name: &'static str,
    pub eval: fn(&Facts) -> &'static [&'static str],
}

/// High and moderate tiers of one axis live in the same rule, so at most one fires.
pub const RULES: &[Rule] = &[
    Rule {
        name: "carbon",
        eval: carbon_rule,
    },
    Rule {
        name: "water",
        eval: water_rule,
    },
    Rule {
        name: "waste",
        eval: waste_rule,
    },
    Rule {
        name: "carpool",
        eval: carpool_rule,
    },
];

fn carbon_rule(f: &Facts) -> &'static [&'static str] {
    if f.carbon_kg > HIGH_CARBON_KG {
        HIGH_CARBON_TIPS
    } else if f.carbon_kg > MODERATE_CARBON_KG {
        MODERATE_CARBON_TIPS
    } else {
        &[]
    }
}

fn water_rule(f: &Facts) -> &'static [&'static str] {
    if f.water_litres > HIGH_WATER_LITRES {
        HIGH_WATER_TIPS
    } else if f.water_litres > MODERATE_WATER_LITRES {
        MODERATE_WATER_TIPS
    } else {
        &[]
    }
}

fn waste_rule(f: &Facts) -> &'static [&'static str] {
    if f.waste_records > 0 && f.waste_kg > WASTE_KG {
        WASTE_TIPS
    } else {
        &[]
    }
}

fn carpool_rule(f: &Facts) -> &'static [&'static str] {
    if f.car_trips > CAR_TRIPS {
        CARPOOL_TIPS
    } else {
        &[]
    }
}

pub fn suggestions(activities: &[Activity]) -> Vec<&'static str> {
    let facts = Facts::gather(activities);

    let mut out: Vec<&'static str> = Vec::new();
    for rule in RULES {
        let fired = (rule.eval)(&facts);
        if !fired.is_empty() {
            tracing::debug!(rule = rule.name, messages = fired.len(), "suggestion rule fired");
        }
        out.extend_from_slice(fired);
    }

    if out.is_empty() {
        out.extend_from_slice(POSITIVE_MESSAGES);
    }

    out
}
