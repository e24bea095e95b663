use tracing::debug;
use travelrec_core::traits::NeighborSearch;
use travelrec_core::types::Neighbor;
use travelrec_core::{Error, Result};

use crate::NeighborIndex;

impl NeighborSearch for NeighborIndex {
    fn dim(&self) -> usize {
        self.dim
    }

    fn len(&self) -> usize {
        self.rows()
    }

    fn default_k(&self) -> usize {
        self.n_neighbors
    }

    fn search_vec(&self, query_vec: &[f32], k: usize) -> Result<Vec<Neighbor>> {
        if query_vec.len() != self.dim {
            return Err(Error::DimensionMismatch { expected: self.dim, actual: query_vec.len() });
        }
        let rows = self.rows();
        if k == 0 || k > rows {
            return Err(Error::InvalidNeighbors { k, rows });
        }
        let mut hits: Vec<Neighbor> = self
            .data
            .chunks_exact(self.dim)
            .enumerate()
            .map(|(index, row)| Neighbor { index, distance: self.metric.distance(query_vec, row) })
            .collect();
        // equal distances keep fitted row order
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance).then(a.index.cmp(&b.index)));
        hits.truncate(k);
        debug!(k, nearest = ?hits.first(), "neighbor query");
        Ok(hits)
    }
}
