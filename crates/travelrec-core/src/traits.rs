use crate::error::Result;
use crate::types::{Neighbor, Recommendation, RecommendationQuery};

/// Turns the categorical inputs of a query into a numeric feature vector.
pub trait FeatureEncoder: Send + Sync {
    fn dim(&self) -> usize;
    fn encode(&self, query: &RecommendationQuery) -> Result<Vec<f32>>;
}

/// A pre-fit nearest-neighbor index over encoded dataset rows.
pub trait NeighborSearch: Send + Sync {
    /// Width of the fitted feature vectors.
    fn dim(&self) -> usize;
    /// Number of fitted rows.
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Neighbor count the index was fit with.
    fn default_k(&self) -> usize;
    /// The `k` closest rows to `query_vec`, closest first.
    fn search_vec(&self, query_vec: &[f32], k: usize) -> Result<Vec<Neighbor>>;
}

pub trait Recommend: Send + Sync {
    fn recommend(&self, query: &RecommendationQuery) -> Result<Vec<Recommendation>>;
}
