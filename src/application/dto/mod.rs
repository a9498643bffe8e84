/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod output_format;
mod recommend_request;
mod recommend_response;

pub use output_format::OutputFormat;
pub use recommend_request::RecommendRequest;
pub use recommend_response::{ManifestRecommendation, RecommendResponse, RecommendationOutcome};
