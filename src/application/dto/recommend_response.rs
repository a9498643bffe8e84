use crate::recommendation::domain::{Recommendation, RecommendationMetadata};

/// Result of processing one manifest
#[derive(Debug, Clone)]
pub enum RecommendationOutcome {
    /// The manifest parsed; the recommendation may still be empty
    Recommended(Recommendation),
    /// The manifest could not be read or parsed
    Rejected { error: String },
}

/// Outcome for one requested manifest
#[derive(Debug, Clone)]
pub struct ManifestRecommendation {
    /// Where the manifest came from (path as given by the caller)
    pub manifest: String,
    pub outcome: RecommendationOutcome,
}

impl ManifestRecommendation {
    pub fn recommended(manifest: String, recommendation: Recommendation) -> Self {
        Self {
            manifest,
            outcome: RecommendationOutcome::Recommended(recommendation),
        }
    }

    pub fn rejected(manifest: String, error: String) -> Self {
        Self {
            manifest,
            outcome: RecommendationOutcome::Rejected { error },
        }
    }

    pub fn recommendation(&self) -> Option<&Recommendation> {
        match &self.outcome {
            RecommendationOutcome::Recommended(recommendation) => Some(recommendation),
            RecommendationOutcome::Rejected { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            RecommendationOutcome::Recommended(_) => None,
            RecommendationOutcome::Rejected { error } => Some(error),
        }
    }
}

/// RecommendResponse - Internal response DTO from the recommendation use case
#[derive(Debug, Clone)]
pub struct RecommendResponse {
    /// One entry per requested manifest, in request order
    pub results: Vec<ManifestRecommendation>,
    /// Report metadata (timestamp, tool info)
    pub metadata: RecommendationMetadata,
    /// Number of documents in the fitted corpus
    pub corpus_size: usize,
    /// Number of distinct coordinates in the fitted vocabulary
    pub vocabulary_size: usize,
}

impl RecommendResponse {
    pub fn new(
        results: Vec<ManifestRecommendation>,
        metadata: RecommendationMetadata,
        corpus_size: usize,
        vocabulary_size: usize,
    ) -> Self {
        Self {
            results,
            metadata,
            corpus_size,
            vocabulary_size,
        }
    }

    /// Whether any manifest was rejected (drives the process exit code)
    pub fn has_rejections(&self) -> bool {
        self.results.iter().any(|r| r.error().is_some())
    }
}
