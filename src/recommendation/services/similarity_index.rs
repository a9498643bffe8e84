use super::tfidf_vectorizer::SparseVector;
use crate::recommendation::domain::Neighbor;

/// Number of neighbors consulted per query unless configured otherwise
pub const DEFAULT_NEIGHBORS: usize = 2;

/// SimilarityIndex service: exhaustive cosine nearest-neighbor search
///
/// Stores the L2-normalized document vectors, so cosine similarity is a dot
/// product. Corpora are expected to hold hundreds to low thousands of
/// documents, which a linear scan handles comfortably.
#[derive(Debug, Clone)]
pub struct SimilarityIndex {
    vectors: Vec<SparseVector>,
}

impl SimilarityIndex {
    pub fn new(vectors: Vec<SparseVector>) -> Self {
        Self { vectors }
    }

    /// Returns up to `k` documents closest to `query`
    ///
    /// Neighbors are ordered by ascending cosine distance; equal distances
    /// keep ascending document index order.
    pub fn query(&self, query: &SparseVector, k: usize) -> Vec<Neighbor> {
        let mut neighbors: Vec<Neighbor> = self
            .vectors
            .iter()
            .enumerate()
            .map(|(index, vector)| Neighbor::new(index, cosine_distance(query, vector)))
            .collect();

        neighbors.sort_by(|a, b| {
            a.distance
                .total_cmp(&b.distance)
                .then(a.index.cmp(&b.index))
        });
        neighbors.truncate(k);
        neighbors
    }

    /// Cached document vectors in corpus order
    pub fn vectors(&self) -> &[SparseVector] {
        &self.vectors
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}

/// `1 - cos(a, b)` for L2-normalized vectors; a zero vector is at distance 1 from everything
fn cosine_distance(a: &SparseVector, b: &SparseVector) -> f64 {
    (1.0 - a.dot(b)).max(0.0)
}
