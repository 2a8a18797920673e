//! Fixed emission factors (kg CO2 per unit) and reference daily values.

pub const CAR_KG_PER_KM: f64 = 0.171;
pub const BUS_KG_PER_KM: f64 = 0.089;
pub const TRAIN_KG_PER_KM: f64 = 0.041;
pub const BIKE_KG_PER_KM: f64 = 0.0;
pub const WALK_KG_PER_KM: f64 = 0.0;

pub const ELECTRICITY_KG_PER_KWH: f64 = 0.475;
pub const WASTE_KG_PER_KG: f64 = 0.5;

/// Global average, kg CO2 per person per day.
pub const REFERENCE_DAILY_CARBON_KG: f64 = 11.0;
/// Global average, litres per person per day.
pub const REFERENCE_DAILY_WATER_LITRES: f64 = 150.0;
