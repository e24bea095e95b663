//! Domain types shared by the dataset, encoder, index and server crates.

use serde::{Deserialize, Serialize};

/// Encoder columns in the order they appear in a query vector.
pub const FEATURE_COLUMNS: [&str; 7] = [
    "Zone",
    "State",
    "City",
    "Age Group",
    "Gender",
    "Ideal Travel Months",
    "Budget",
];

/// Width of an encoded query vector.
pub const FEATURE_DIM: usize = FEATURE_COLUMNS.len();

/// One row of the travel dataset.
///
/// Column names follow the CSV header; columns not listed here are ignored
/// when reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    #[serde(rename = "Zone")]
    pub zone: String,
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Destination")]
    pub destination: String,
    #[serde(rename = "Age Group")]
    pub age_group: String,
    #[serde(rename = "Gender")]
    pub gender: String,
    #[serde(rename = "Ideal Travel Months")]
    pub ideal_months: String,
    #[serde(rename = "Budget")]
    pub budget: String,
}

/// The seven categorical inputs of a recommendation request.
///
/// Field names match the HTML form posted to `/recommend`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationQuery {
    pub zone: String,
    pub state: String,
    pub city: String,
    pub age_group: String,
    pub gender: String,
    pub ideal_months: String,
    pub budget: String,
}

impl RecommendationQuery {
    /// Pairs each input with its encoder column, in [`FEATURE_COLUMNS`] order.
    pub fn features(&self) -> [(&'static str, &str); FEATURE_DIM] {
        [
            (FEATURE_COLUMNS[0], self.zone.as_str()),
            (FEATURE_COLUMNS[1], self.state.as_str()),
            (FEATURE_COLUMNS[2], self.city.as_str()),
            (FEATURE_COLUMNS[3], self.age_group.as_str()),
            (FEATURE_COLUMNS[4], self.gender.as_str()),
            (FEATURE_COLUMNS[5], self.ideal_months.as_str()),
            (FEATURE_COLUMNS[6], self.budget.as_str()),
        ]
    }
}

/// A recommended destination as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Destination")]
    pub destination: String,
}

impl From<&Destination> for Recommendation {
    fn from(d: &Destination) -> Self {
        Self { category: d.category.clone(), destination: d.destination.clone() }
    }
}

/// A single nearest-neighbor hit.
///
/// `index` is the row position in the fitted matrix, which is also the row
/// position in the dataset. Lower `distance` is closer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Neighbor {
    pub index: usize,
    pub distance: f32,
}

/// Row and vocabulary counts for a loaded dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetStats {
    pub destinations: usize,
    pub zones: usize,
    pub states: usize,
    pub cities: usize,
}
