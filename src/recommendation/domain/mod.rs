pub mod coordinate;
pub mod corpus;
pub mod recommendation;
pub mod recommendation_metadata;

pub use coordinate::Coordinate;
pub use corpus::{Corpus, Document, DOCUMENT_DELIMITER};
pub use recommendation::{Neighbor, Recommendation};
pub use recommendation_metadata::RecommendationMetadata;
