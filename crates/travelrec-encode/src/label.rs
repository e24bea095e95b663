use travelrec_core::{Error, Result};

/// A fitted categorical encoder for one dataset column.
///
/// Classes are held in ascending byte order and a label's code is its
/// position, so encoding is a binary search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelEncoder {
    column: String,
    classes: Vec<String>,
}

impl LabelEncoder {
    /// Rejects empty, unsorted or duplicated class lists.
    pub fn from_classes(column: impl Into<String>, classes: Vec<String>) -> Result<Self> {
        let column = column.into();
        if classes.is_empty() {
            return Err(Error::InvalidArtifact(format!("encoder for {column} has no classes")));
        }
        if let Some(pair) = classes.windows(2).find(|w| w[0] >= w[1]) {
            return Err(Error::InvalidArtifact(format!(
                "encoder for {column} classes are not strictly ascending at {:?} / {:?}",
                pair[0], pair[1]
            )));
        }
        Ok(Self { column, classes })
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn transform(&self, value: &str) -> Result<usize> {
        self.classes
            .binary_search_by(|c| c.as_str().cmp(value))
            .map_err(|_| Error::UnknownCategory {
                column: self.column.clone(),
                value: value.to_string(),
            })
    }

    /// A code past the last class means the artifact and its caller disagree.
    pub fn inverse_transform(&self, code: usize) -> Result<&str> {
        self.classes.get(code).map(String::as_str).ok_or_else(|| {
            Error::InvalidArtifact(format!(
                "{} code {code} is out of range for {} classes",
                self.column,
                self.classes.len()
            ))
        })
    }
}
