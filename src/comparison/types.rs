use serde::{Deserialize, Serialize};

/// Five similarity scores between two scanpaths. 1.0 means identical.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Similarity {
    pub vector: f64,
    pub direction: f64,
    pub length: f64,
    pub position: f64,
    pub duration: f64,
}

impl Similarity {
    /// Scores in the order vector, direction, length, position, duration.
    pub fn to_array(&self) -> [f64; 5] {
        [
            self.vector,
            self.direction,
            self.length,
            self.position,
            self.duration,
        ]
    }
}

/// Median raw dissimilarities along the alignment path, before normalisation.
///
/// Spatial values are in pixels, `direction` in radians, `duration` is already
/// a relative difference.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dissimilarity {
    pub vector: f64,
    pub direction: f64,
    pub length: f64,
    pub position: f64,
    pub duration: f64,
}

/// Minimum-cost correspondence between the saccades of two scanpaths.
#[derive(Debug, Clone, PartialEq)]
pub struct Alignment {
    /// `(i, j)` pairs from `(0, 0)` to the last saccade of each scanpath
    pub path: Vec<(usize, usize)>,

    /// Sum of the distances of all cells on the path
    pub cost: f64,
}
