use crate::core::factors;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Car,
    Bus,
    Train,
    Bike,
    Walk,
}

impl TransportMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Car => "car",
            TransportMode::Bus => "bus",
            TransportMode::Train => "train",
            TransportMode::Bike => "bike",
            TransportMode::Walk => "walk",
        }
    }

    /// Parse a mode typed by the user (case-insensitive, surrounding blanks ignored).
    pub fn from_code(code: &str) -> AppResult<Self> {
        match code.trim().to_lowercase().as_str() {
            "car" => Ok(TransportMode::Car),
            "bus" => Ok(TransportMode::Bus),
            "train" => Ok(TransportMode::Train),
            "bike" => Ok(TransportMode::Bike),
            "walk" => Ok(TransportMode::Walk),
            _ => Err(AppError::InvalidTransportMode(code.to_string())),
        }
    }

    /// kg CO2 per km.
    pub fn factor(&self) -> f64 {
        match self {
            TransportMode::Car => factors::CAR_KG_PER_KM,
            TransportMode::Bus => factors::BUS_KG_PER_KM,
            TransportMode::Train => factors::TRAIN_KG_PER_KM,
            TransportMode::Bike => factors::BIKE_KG_PER_KM,
            TransportMode::Walk => factors::WALK_KG_PER_KM,
        }
    }
}
