use crate::application::dto::RecommendResponse;
use crate::shared::Result;

/// RecommendationFormatter port for rendering a recommendation report
///
/// Implemented once per output format (JSON, Markdown).
pub trait RecommendationFormatter {
    /// Formats every manifest outcome of the response, including rejected ones
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, response: &RecommendResponse) -> Result<String>;
}
