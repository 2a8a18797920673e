//! In-memory activity log with JSON persistence.

pub mod document;
pub mod file;

use crate::errors::{AppError, AppResult};
use crate::models::{Activity, Measurement, TransportMode};
use crate::utils::date;
use std::path::Path;
use tracing::{debug, info};

/// Ordered collection of logged activities. Insertion order is log order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityStore {
    activities: Vec<Activity>,
}

impl ActivityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Activity> {
        self.activities.iter()
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    // ---------------------------
    // Mutations
    // ---------------------------

    /// Validate `measurement`, stamp it with today's date and append it.
    pub fn add(&mut self, measurement: Measurement) -> AppResult<&Activity> {
        measurement.validate()?;

        let activity = Activity::record(measurement, date::today());
        debug!(
            kind = activity.kind().as_str(),
            quantity = activity.quantity(),
            emissions = activity.emissions_kg(),
            "activity added"
        );

        self.activities.push(activity);
        match self.activities.last() {
            Some(added) => Ok(added),
            None => unreachable!("activity pushed above"),
        }
    }

    pub fn add_transport(&mut self, mode: &str, distance_km: f64) -> AppResult<&Activity> {
        let mode = TransportMode::from_code(mode)?;
        self.add(Measurement::Transport { mode, distance_km })
    }

    pub fn add_electricity(&mut self, kwh: f64) -> AppResult<&Activity> {
        self.add(Measurement::Electricity { kwh })
    }

    pub fn add_water(&mut self, litres: f64) -> AppResult<&Activity> {
        self.add(Measurement::Water { litres })
    }

    pub fn add_waste(&mut self, kg: f64) -> AppResult<&Activity> {
        self.add(Measurement::Waste { kg })
    }

    /// Remove the activity at 1-based position `index`.
    pub fn delete(&mut self, index: usize) -> AppResult<Activity> {
        let len = self.activities.len();
        if index < 1 || index > len {
            return Err(AppError::IndexOutOfRange { index, len });
        }

        let removed = self.activities.remove(index - 1);
        debug!(index, remaining = self.activities.len(), "activity deleted");
        Ok(removed)
    }

    pub fn clear(&mut self) {
        debug!(removed = self.activities.len(), "activity log cleared");
        self.activities.clear();
    }

    // ---------------------------
    // Serialization
    // ---------------------------

    pub fn serialize(&self) -> AppResult<String> {
        document::render(&self.activities)
    }

    /// Replace the contents with the activities in `doc`.
    /// The store is left untouched when parsing fails.
    pub fn deserialize(&mut self, doc: &str) -> AppResult<()> {
        let parsed = document::parse(doc)?;
        self.activities = parsed;
        Ok(())
    }

    // ---------------------------
    // Persistence
    // ---------------------------

    pub fn save(&self, path: &Path) -> AppResult<()> {
        file::write_activities(path, &self.activities)?;
        info!(path = %path.display(), count = self.activities.len(), "activities saved");
        Ok(())
    }

    /// Replace the contents with the document at `path`, returning the number
    /// of activities loaded. The store is left untouched on any failure.
    pub fn load(&mut self, path: &Path) -> AppResult<usize> {
        let parsed = file::read_activities(path)?;
        self.activities = parsed;
        info!(path = %path.display(), count = self.activities.len(), "activities loaded");
        Ok(self.activities.len())
    }

    /// Load `path` if it exists, otherwise start from an empty log.
    pub fn open(path: &Path) -> AppResult<Self> {
        let mut store = Self::new();
        match store.load(path) {
            Ok(_) => Ok(store),
            Err(AppError::FileNotFound(_)) => {
                debug!(path = %path.display(), "no data file yet, starting empty");
                Ok(store)
            }
            Err(e) => Err(e),
        }
    }
}

impl<'a> IntoIterator for &'a ActivityStore {
    type Item = &'a Activity;
    type IntoIter = std::slice::Iter<'a, Activity>;

    fn into_iter(self) -> Self::IntoIter {
        self.activities.iter()
    }
}
