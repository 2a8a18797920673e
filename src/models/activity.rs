use super::{activity_kind::ActivityKind, transport_mode::TransportMode};
use crate::core::factors;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One logged activity.
///
/// Serialized as a flat JSON object: the variant becomes the `type`
/// discriminator, fields keep the names of the persisted document
/// (`subtype`, `distance`, `kwh`, `litres`, `kg`, `emissions`, `date`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Activity {
    Transport {
        #[serde(rename = "subtype")]
        mode: TransportMode,
        #[serde(rename = "distance")]
        distance_km: f64,
        #[serde(rename = "emissions")]
        emissions_kg: f64,
        date: NaiveDate,
    },
    Electricity {
        kwh: f64,
        #[serde(rename = "emissions")]
        emissions_kg: f64,
        date: NaiveDate,
    },
    Water {
        litres: f64,
        date: NaiveDate,
    },
    Waste {
        kg: f64,
        #[serde(rename = "emissions")]
        emissions_kg: f64,
        date: NaiveDate,
    },
}

/// A raw measured quantity, before emissions and date are attached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measurement {
    Transport { mode: TransportMode, distance_km: f64 },
    Electricity { kwh: f64 },
    Water { litres: f64 },
    Waste { kg: f64 },
}

impl Measurement {
    pub fn kind(&self) -> ActivityKind {
        match self {
            Measurement::Transport { .. } => ActivityKind::Transport,
            Measurement::Electricity { .. } => ActivityKind::Electricity,
            Measurement::Water { .. } => ActivityKind::Water,
            Measurement::Waste { .. } => ActivityKind::Waste,
        }
    }

    pub fn quantity(&self) -> f64 {
        match *self {
            Measurement::Transport { distance_km, .. } => distance_km,
            Measurement::Electricity { kwh } => kwh,
            Measurement::Water { litres } => litres,
            Measurement::Waste { kg } => kg,
        }
    }

    /// Quantities must be finite and non-negative.
    pub fn validate(&self) -> AppResult<()> {
        let q = self.quantity();
        if !q.is_finite() {
            return Err(AppError::InvalidInput(format!(
                "{} amount must be a number, got {}",
                self.kind().label(),
                q
            )));
        }
        if q < 0.0 {
            return Err(AppError::InvalidInput(format!(
                "{} amount cannot be negative ({} {})",
                self.kind().label(),
                q,
                self.kind().unit()
            )));
        }
        Ok(())
    }
}

impl Activity {
    /// Build a record from a measurement, applying the fixed emission factor.
    pub fn record(measurement: Measurement, date: NaiveDate) -> Self {
        match measurement {
            Measurement::Transport { mode, distance_km } => Activity::Transport {
                mode,
                distance_km,
                emissions_kg: mode.factor() * distance_km,
                date,
            },
            Measurement::Electricity { kwh } => Activity::Electricity {
                kwh,
                emissions_kg: factors::ELECTRICITY_KG_PER_KWH * kwh,
                date,
            },
            Measurement::Water { litres } => Activity::Water { litres, date },
            Measurement::Waste { kg } => Activity::Waste {
                kg,
                emissions_kg: factors::WASTE_KG_PER_KG * kg,
                date,
            },
        }
    }

    pub fn kind(&self) -> ActivityKind {
        match self {
            Activity::Transport { .. } => ActivityKind::Transport,
            Activity::Electricity { .. } => ActivityKind::Electricity,
            Activity::Water { .. } => ActivityKind::Water,
            Activity::Waste { .. } => ActivityKind::Waste,
        }
    }

    pub fn date(&self) -> NaiveDate {
        match self {
            Activity::Transport { date, .. }
            | Activity::Electricity { date, .. }
            | Activity::Water { date, .. }
            | Activity::Waste { date, .. } => *date,
        }
    }

    pub fn date_str(&self) -> String {
        self.date().format("%Y-%m-%d").to_string()
    }

    /// Measured quantity in the unit of its kind (km, kWh, litres, kg).
    pub fn quantity(&self) -> f64 {
        match *self {
            Activity::Transport { distance_km, .. } => distance_km,
            Activity::Electricity { kwh, .. } => kwh,
            Activity::Water { litres, .. } => litres,
            Activity::Waste { kg, .. } => kg,
        }
    }

    /// `None` for water, which carries no emissions field.
    pub fn emissions_kg(&self) -> Option<f64> {
        match *self {
            Activity::Transport { emissions_kg, .. }
            | Activity::Electricity { emissions_kg, .. }
            | Activity::Waste { emissions_kg, .. } => Some(emissions_kg),
            Activity::Water { .. } => None,
        }
    }

    pub fn transport_mode(&self) -> Option<TransportMode> {
        match self {
            Activity::Transport { mode, .. } => Some(*mode),
            _ => None,
        }
    }
}
