mod coordinate_extractor;
mod coordinate_filter;
mod recommendation_aggregator;
mod similarity_index;
mod tfidf_vectorizer;

pub use coordinate_extractor::{CoordinateExtractor, POM_NAMESPACE};
pub use coordinate_filter::CoordinateFilter;
pub use recommendation_aggregator::RecommendationAggregator;
pub use similarity_index::{SimilarityIndex, DEFAULT_NEIGHBORS};
pub use tfidf_vectorizer::{SparseVector, TfIdfVectorizer, Vocabulary};
