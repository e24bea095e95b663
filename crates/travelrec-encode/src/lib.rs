//! travelrec-encode
//!
//! Loads the pre-fit per-column label encoders and turns the seven
//! categorical inputs of a query into the numeric vector the neighbor index
//! was fit on.

pub mod label;

pub use label::LabelEncoder;

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::{debug, info};
use travelrec_core::traits::FeatureEncoder;
use travelrec_core::types::{RecommendationQuery, FEATURE_COLUMNS, FEATURE_DIM};
use travelrec_core::{Error, Result};

/// One encoder per feature column, held in [`FEATURE_COLUMNS`] order.
#[derive(Debug, Clone)]
pub struct EncoderSet {
    encoders: Vec<LabelEncoder>,
}

impl EncoderSet {
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            Error::NotFound(format!("Encoders not found at {}: {}", path.display(), e))
        })?;
        let set = Self::from_reader(BufReader::new(file))?;
        info!(path = %path.display(), columns = set.encoders.len(), "loaded label encoders");
        Ok(set)
    }

    /// Reads a JSON object of `column -> [class, ...]`.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: HashMap<String, Vec<String>> = serde_json::from_reader(reader)?;
        Self::from_map(raw)
    }

    /// Every feature column must be present; other columns are dropped.
    pub fn from_map(mut raw: HashMap<String, Vec<String>>) -> Result<Self> {
        let mut encoders = Vec::with_capacity(FEATURE_DIM);
        for column in FEATURE_COLUMNS {
            let classes = raw.remove(column).ok_or_else(|| {
                Error::InvalidArtifact(format!("no encoder for column {column}"))
            })?;
            encoders.push(LabelEncoder::from_classes(column, classes)?);
        }
        if !raw.is_empty() {
            debug!(ignored = ?raw.keys().collect::<Vec<_>>(), "ignoring encoders for non-feature columns");
        }
        Ok(Self { encoders })
    }

    pub fn encoder(&self, column: &str) -> Option<&LabelEncoder> {
        self.encoders.iter().find(|e| e.column() == column)
    }

    pub fn encoders(&self) -> &[LabelEncoder] {
        &self.encoders
    }

    /// Maps an encoded vector back to its labels.
    pub fn decode(&self, vector: &[f32]) -> Result<Vec<&str>> {
        if vector.len() != self.encoders.len() {
            return Err(Error::DimensionMismatch { expected: self.encoders.len(), actual: vector.len() });
        }
        self.encoders
            .iter()
            .zip(vector)
            .map(|(enc, &code)| {
                if code < 0.0 || code.fract() != 0.0 {
                    return Err(Error::InvalidArtifact(format!(
                        "{} code {code} is not a class index",
                        enc.column()
                    )));
                }
                enc.inverse_transform(code as usize)
            })
            .collect()
    }
}

impl FeatureEncoder for EncoderSet {
    fn dim(&self) -> usize {
        self.encoders.len()
    }

    fn encode(&self, query: &RecommendationQuery) -> Result<Vec<f32>> {
        self.encoders
            .iter()
            .zip(query.features())
            .map(|(enc, (_, value))| enc.transform(value).map(|code| code as f32))
            .collect()
    }
}
