use super::CoordinateExtractor;
use crate::recommendation::domain::{Coordinate, Document};
use std::collections::BTreeSet;

/// RecommendationAggregator service turning neighbor manifests into new suggestions
///
/// Pure business logic; no I/O.
pub struct RecommendationAggregator;

impl RecommendationAggregator {
    /// Unions the coordinates of every neighbor document and removes the
    /// coordinates the query manifest already declares
    ///
    /// A neighbor whose text does not parse contributes nothing.
    pub fn aggregate(
        query_coordinates: &[Coordinate],
        neighbor_documents: &[&Document],
    ) -> BTreeSet<Coordinate> {
        let mut libraries: BTreeSet<Coordinate> = neighbor_documents
            .iter()
            .filter_map(|document| CoordinateExtractor::extract(document.text()).ok())
            .flatten()
            .collect();

        for coordinate in query_coordinates {
            libraries.remove(coordinate);
        }

        libraries
    }
}
