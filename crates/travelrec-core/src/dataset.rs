//! In-memory travel dataset and the lookup tables derived from it.
//!
//! The dataset is read once at startup. Zones, states and cities keep the
//! order in which they first appear in the file.

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::types::{DatasetStats, Destination};

#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Destination>,
    zones: Vec<String>,
    states_by_zone: HashMap<String, Vec<String>>,
    cities_by_state: HashMap<String, Vec<String>>,
}

impl Dataset {
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            Error::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
        })?;
        let dataset = Self::from_reader(file)?;
        info!(
            path = %path.display(),
            rows = dataset.len(),
            zones = dataset.zones.len(),
            "loaded travel dataset"
        );
        Ok(dataset)
    }

    /// Reads CSV with a header row. Unknown columns are ignored.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);
        let mut records = Vec::new();
        for row in csv_reader.deserialize::<Destination>() {
            records.push(row?);
        }
        Ok(Self::from_records(records))
    }

    pub fn from_records(records: Vec<Destination>) -> Self {
        let mut zones = Vec::new();
        let mut states_by_zone: HashMap<String, Vec<String>> = HashMap::new();
        let mut cities_by_state: HashMap<String, Vec<String>> = HashMap::new();
        for r in &records {
            push_unique(&mut zones, &r.zone);
            push_unique(states_by_zone.entry(r.zone.clone()).or_default(), &r.state);
            push_unique(cities_by_state.entry(r.state.clone()).or_default(), &r.city);
        }
        debug!(
            states = cities_by_state.len(),
            "built zone/state lookup tables"
        );
        Self { records, zones, states_by_zone, cities_by_state }
    }

    pub fn records(&self) -> &[Destination] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&Destination> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn zones(&self) -> &[String] {
        &self.zones
    }

    /// Distinct states of `zone`; empty for an unknown zone.
    pub fn states_for_zone(&self, zone: &str) -> &[String] {
        self.states_by_zone.get(zone).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Distinct cities of `state`; empty for an unknown state.
    pub fn cities_for_state(&self, state: &str) -> &[String] {
        self.cities_by_state.get(state).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn stats(&self) -> DatasetStats {
        DatasetStats {
            destinations: self.records.len(),
            zones: self.zones.len(),
            states: self.cities_by_state.len(),
            // a city name listed under two states counts once
            cities: self.cities_by_state.values().flatten().collect::<HashSet<_>>().len(),
        }
    }
}

fn push_unique(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|v| v == value) {
        values.push(value.to_string());
    }
}
