use super::Coordinate;
use serde::Serialize;
use std::collections::BTreeSet;

/// A corpus document selected by the similarity index
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Neighbor {
    /// Position of the document in the corpus
    pub index: usize,
    /// Cosine distance to the query (0 = same direction, 1 = nothing shared)
    pub distance: f64,
}

impl Neighbor {
    pub fn new(index: usize, distance: f64) -> Self {
        Self { index, distance }
    }
}

/// Recommendation value object: coordinates suggested for one manifest
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    coordinates: BTreeSet<Coordinate>,
    neighbors: Vec<Neighbor>,
}

impl Recommendation {
    pub fn new(coordinates: BTreeSet<Coordinate>, neighbors: Vec<Neighbor>) -> Self {
        Self {
            coordinates,
            neighbors,
        }
    }

    pub fn coordinates(&self) -> &BTreeSet<Coordinate> {
        &self.coordinates
    }

    pub fn neighbors(&self) -> &[Neighbor] {
        &self.neighbors
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// Drops coordinates rejected by `keep`
    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&Coordinate) -> bool,
    {
        self.coordinates.retain(keep);
    }
}
