use serde::{Deserialize, Serialize};

/// Distance used to rank fitted rows against a query vector.
///
/// Serialized as `"euclidean"`, `"manhattan"` or `{"minkowski": p}`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMetric {
    #[default]
    Euclidean,
    Manhattan,
    Minkowski(f32),
}

impl DistanceMetric {
    pub fn distance(&self, a: &[f32], b: &[f32]) -> f32 {
        let pairs = a.iter().zip(b);
        match *self {
            DistanceMetric::Euclidean => pairs.map(|(x, y)| (x - y) * (x - y)).sum::<f32>().sqrt(),
            DistanceMetric::Manhattan => pairs.map(|(x, y)| (x - y).abs()).sum(),
            DistanceMetric::Minkowski(p) => {
                pairs.map(|(x, y)| (x - y).abs().powf(p)).sum::<f32>().powf(1.0 / p)
            }
        }
    }
}
