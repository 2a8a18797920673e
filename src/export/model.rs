// src/export/model.rs

use crate::models::Activity;
use serde::Serialize;

/// Flat row for CSV export. Fields that do not apply to a kind stay empty.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ActivityExport {
    pub index: usize,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub subtype: Option<String>,
    pub quantity: f64,
    pub unit: String,
    pub emissions_kg: Option<f64>,
}

impl ActivityExport {
    /// `index` is the 1-based log position.
    pub fn from_activity(index: usize, a: &Activity) -> Self {
        Self {
            index,
            date: a.date_str(),
            kind: a.kind().as_str().to_string(),
            subtype: a.transport_mode().map(|m| m.as_str().to_string()),
            quantity: a.quantity(),
            unit: a.kind().unit().to_string(),
            emissions_kg: a.emissions_kg(),
        }
    }
}

pub(crate) fn to_rows(activities: &[Activity]) -> Vec<ActivityExport> {
    activities
        .iter()
        .enumerate()
        .map(|(i, a)| ActivityExport::from_activity(i + 1, a))
        .collect()
}
