use crate::application::dto::{ManifestRecommendation, RecommendResponse, RecommendationOutcome};
use crate::ports::outbound::RecommendationFormatter;
use crate::recommendation::domain::{Coordinate, Neighbor, RecommendationMetadata};
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Report<'a> {
    metadata: Metadata<'a>,
    results: Vec<ResultEntry<'a>>,
}

#[derive(Debug, Serialize)]
struct Metadata<'a> {
    timestamp: &'a str,
    tool: Tool<'a>,
    corpus: CorpusSummary,
}

#[derive(Debug, Serialize)]
struct Tool<'a> {
    name: &'a str,
    version: &'a str,
}

#[derive(Debug, Serialize)]
struct CorpusSummary {
    documents: usize,
    vocabulary: usize,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum ResultEntry<'a> {
    Recommended {
        manifest: &'a str,
        recommendations: Vec<&'a Coordinate>,
        neighbors: &'a [Neighbor],
    },
    Rejected {
        manifest: &'a str,
        error: &'a str,
    },
}

/// JsonFormatter adapter rendering the report as pretty-printed JSON
///
/// Successful manifests carry `recommendations` as `group:artifact`
/// strings; rejected manifests carry an `error` string instead.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }

    fn build_metadata<'a>(
        &self,
        metadata: &'a RecommendationMetadata,
        response: &RecommendResponse,
    ) -> Metadata<'a> {
        Metadata {
            timestamp: metadata.timestamp(),
            tool: Tool {
                name: metadata.tool_name(),
                version: metadata.tool_version(),
            },
            corpus: CorpusSummary {
                documents: response.corpus_size,
                vocabulary: response.vocabulary_size,
            },
        }
    }

    fn build_entry<'a>(&self, result: &'a ManifestRecommendation) -> ResultEntry<'a> {
        match &result.outcome {
            RecommendationOutcome::Recommended(recommendation) => ResultEntry::Recommended {
                manifest: &result.manifest,
                recommendations: recommendation.coordinates().iter().collect(),
                neighbors: recommendation.neighbors(),
            },
            RecommendationOutcome::Rejected { error } => ResultEntry::Rejected {
                manifest: &result.manifest,
                error,
            },
        }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommendationFormatter for JsonFormatter {
    fn format(&self, response: &RecommendResponse) -> Result<String> {
        let report = Report {
            metadata: self.build_metadata(&response.metadata, response),
            results: response.results.iter().map(|r| self.build_entry(r)).collect(),
        };

        serde_json::to_string_pretty(&report).map_err(Into::into)
    }
}
