use crate::application::dto::{ManifestRecommendation, RecommendResponse, RecommendationOutcome};
use crate::ports::outbound::RecommendationFormatter;
use crate::recommendation::domain::{Coordinate, Recommendation};
use crate::shared::Result;

/// Markdown table header for recommended coordinates
const TABLE_HEADER: &str = "| Group ID | Artifact ID |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str = "|----------|-------------|\n";

/// Artifact page on Maven Central
const MAVEN_CENTRAL_ARTIFACT_URL: &str = "https://central.sonatype.com/artifact";

/// MarkdownFormatter adapter rendering the report as human-readable Markdown
///
/// One section per manifest, in request order. Artifact IDs link to their
/// Maven Central page.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn artifact_link(coordinate: &Coordinate) -> String {
        format!(
            "[{}]({}/{}/{})",
            Self::escape_markdown_table_cell(coordinate.artifact_id()),
            MAVEN_CENTRAL_ARTIFACT_URL,
            coordinate.group_id(),
            coordinate.artifact_id()
        )
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, response: &RecommendResponse) {
        output.push_str("# Dependency Recommendations\n\n");
        output.push_str(&format!(
            "Generated by {} {} at {}.\n\n",
            response.metadata.tool_name(),
            response.metadata.tool_version(),
            response.metadata.timestamp()
        ));
        output.push_str(&format!(
            "Corpus: {} manifest(s), {} distinct coordinate(s).\n\n",
            response.corpus_size, response.vocabulary_size
        ));
    }

    fn render_result(&self, output: &mut String, result: &ManifestRecommendation) {
        output.push_str(&format!("## {}\n\n", result.manifest));

        match &result.outcome {
            RecommendationOutcome::Recommended(recommendation) => {
                self.render_recommendation(output, recommendation)
            }
            RecommendationOutcome::Rejected { error } => {
                output.push_str(&format!("> ❌ {}\n\n", error.replace('\n', " ")));
            }
        }
    }

    fn render_recommendation(&self, output: &mut String, recommendation: &Recommendation) {
        if recommendation.is_empty() {
            output.push_str("*No new dependencies recommended*\n\n");
        } else {
            output.push_str(TABLE_HEADER);
            output.push_str(TABLE_SEPARATOR);
            for coordinate in recommendation.coordinates() {
                output.push_str(&format!(
                    "| {} | {} |\n",
                    Self::escape_markdown_table_cell(coordinate.group_id()),
                    Self::artifact_link(coordinate)
                ));
            }
            output.push('\n');
        }

        let neighbors: Vec<String> = recommendation
            .neighbors()
            .iter()
            .map(|n| format!("#{} (distance {:.4})", n.index, n.distance))
            .collect();
        if !neighbors.is_empty() {
            output.push_str(&format!("Nearest corpus manifests: {}\n\n", neighbors.join(", ")));
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommendationFormatter for MarkdownFormatter {
    fn format(&self, response: &RecommendResponse) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, response);
        for result in &response.results {
            self.render_result(&mut output, result);
        }

        Ok(output)
    }
}
