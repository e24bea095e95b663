use std::sync::Arc;

use tracing::{debug, info};
use travelrec_core::config::Settings;
use travelrec_core::dataset::Dataset;
use travelrec_core::traits::{FeatureEncoder, NeighborSearch, Recommend};
use travelrec_core::types::{Neighbor, Recommendation, RecommendationQuery};
use travelrec_core::{Error, Result};
use travelrec_encode::EncoderSet;
use travelrec_knn::NeighborIndex;

/// The concrete recommender the server runs with.
pub type TravelRecommender = Recommender<EncoderSet, NeighborIndex>;

pub struct Recommender<E, I> where E: FeatureEncoder, I: NeighborSearch {
    dataset: Arc<Dataset>,
    encoder: E,
    index: I,
    k: usize,
}

impl<E, I> Recommender<E, I> where E: FeatureEncoder, I: NeighborSearch {
    /// Fitted rows must line up one-to-one with dataset rows.
    pub fn new(dataset: Arc<Dataset>, encoder: E, index: I) -> Result<Self> {
        if index.len() != dataset.len() {
            return Err(Error::InvalidArtifact(format!(
                "index has {} rows but the dataset has {}",
                index.len(),
                dataset.len()
            )));
        }
        if encoder.dim() != index.dim() {
            return Err(Error::DimensionMismatch { expected: index.dim(), actual: encoder.dim() });
        }
        let k = index.default_k();
        Ok(Self { dataset, encoder, index, k })
    }

    pub fn with_neighbors(mut self, k: usize) -> Result<Self> {
        if k == 0 || k > self.index.len() {
            return Err(Error::InvalidNeighbors { k, rows: self.index.len() });
        }
        self.k = k;
        Ok(self)
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn encoder(&self) -> &E {
        &self.encoder
    }

    pub fn index(&self) -> &I {
        &self.index
    }

    /// Encodes the query and returns the nearest fitted rows, closest first.
    pub fn neighbors(&self, query: &RecommendationQuery) -> Result<Vec<Neighbor>> {
        let q_vec = self.encoder.encode(query)?;
        self.index.search_vec(&q_vec, self.k)
    }
}

impl<E, I> Recommend for Recommender<E, I> where E: FeatureEncoder, I: NeighborSearch {
    fn recommend(&self, query: &RecommendationQuery) -> Result<Vec<Recommendation>> {
        let hits = self.neighbors(query)?;
        let recs = hits
            .iter()
            .map(|h| {
                self.dataset
                    .get(h.index)
                    .map(Recommendation::from)
                    .ok_or_else(|| Error::Operation(format!("neighbor row {} is outside the dataset", h.index)))
            })
            .collect::<Result<Vec<_>>>()?;
        debug!(zone = %query.zone, city = %query.city, results = recs.len(), "recommendation");
        Ok(recs)
    }
}

impl TravelRecommender {
    /// Loads the dataset, encoders and index named by `settings`.
    pub fn load(settings: &Settings) -> Result<Self> {
        let dataset = Arc::new(Dataset::load(&settings.dataset_path())?);
        let encoders = EncoderSet::load(&settings.encoders_path())?;
        let index = NeighborIndex::load(&settings.index_path())?;
        let mut recommender = Self::new(dataset, encoders, index)?;
        if let Some(k) = settings.model.neighbors {
            recommender = recommender.with_neighbors(k)?;
        }
        info!(rows = recommender.dataset.len(), k = recommender.k, "recommender ready");
        Ok(recommender)
    }
}
