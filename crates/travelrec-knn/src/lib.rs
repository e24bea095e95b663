//! travelrec-knn
//!
//! Brute-force nearest-neighbor index over the encoded dataset rows. The
//! index is fit elsewhere and shipped as a JSON artifact; this crate only
//! loads and queries it.

pub mod metric;
pub mod search;

pub use metric::DistanceMetric;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;
use travelrec_core::{Error, Result};

/// On-disk form of a fitted index.
///
/// Row `i` of `fit_x` is the encoded form of dataset row `i`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexArtifact {
    pub n_neighbors: usize,
    #[serde(default)]
    pub metric: DistanceMetric,
    pub fit_x: Vec<Vec<f32>>,
}

#[derive(Debug, Clone)]
pub struct NeighborIndex {
    n_neighbors: usize,
    metric: DistanceMetric,
    dim: usize,
    /// Row-major fitted matrix, `rows * dim` values.
    data: Vec<f32>,
}

impl NeighborIndex {
    pub fn new(fit_x: Vec<Vec<f32>>, n_neighbors: usize, metric: DistanceMetric) -> Result<Self> {
        let rows = fit_x.len();
        if rows == 0 {
            return Err(Error::InvalidArtifact("index has no fitted rows".to_string()));
        }
        let dim = fit_x[0].len();
        if dim == 0 {
            return Err(Error::InvalidArtifact("index rows have no features".to_string()));
        }
        if n_neighbors == 0 || n_neighbors > rows {
            return Err(Error::InvalidNeighbors { k: n_neighbors, rows });
        }
        if let DistanceMetric::Minkowski(p) = metric {
            if !(p >= 1.0 && p.is_finite()) {
                return Err(Error::InvalidArtifact(format!("minkowski p must be >= 1, got {p}")));
            }
        }
        let mut data = Vec::with_capacity(rows * dim);
        for (i, row) in fit_x.into_iter().enumerate() {
            if row.len() != dim {
                return Err(Error::InvalidArtifact(format!(
                    "row {i} has {} features, expected {dim}",
                    row.len()
                )));
            }
            if row.iter().any(|v| !v.is_finite()) {
                return Err(Error::InvalidArtifact(format!("row {i} has a non-finite value")));
            }
            data.extend(row);
        }
        Ok(Self { n_neighbors, metric, dim, data })
    }

    pub fn from_artifact(artifact: IndexArtifact) -> Result<Self> {
        Self::new(artifact.fit_x, artifact.n_neighbors, artifact.metric)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let artifact: IndexArtifact = serde_json::from_reader(reader)?;
        Self::from_artifact(artifact)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            Error::NotFound(format!("Index not found at {}: {}", path.display(), e))
        })?;
        let index = Self::from_reader(BufReader::new(file))?;
        info!(
            path = %path.display(),
            rows = index.rows(),
            dim = index.dim,
            n_neighbors = index.n_neighbors,
            metric = ?index.metric,
            "loaded neighbor index"
        );
        Ok(index)
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn rows(&self) -> usize {
        self.data.len() / self.dim
    }

    pub fn metric(&self) -> DistanceMetric {
        self.metric
    }

    pub fn row(&self, index: usize) -> Option<&[f32]> {
        let start = index.checked_mul(self.dim)?;
        self.data.get(start..start.checked_add(self.dim)?)
    }
}
