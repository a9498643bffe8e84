//! Recommendation domain: corpus, coordinates, and the TF-IDF
//! nearest-neighbor engine built from them.
pub mod domain;
pub mod engine;
pub mod services;

pub use engine::RecommendationEngine;
