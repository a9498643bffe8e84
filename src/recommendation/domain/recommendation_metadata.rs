use chrono::{SecondsFormat, Utc};

/// RecommendationMetadata value object describing a report run
#[derive(Debug, Clone)]
pub struct RecommendationMetadata {
    timestamp: String,
    tool_name: String,
    tool_version: String,
}

impl RecommendationMetadata {
    pub fn new(timestamp: String, tool_name: String, tool_version: String) -> Self {
        Self {
            timestamp,
            tool_name,
            tool_version,
        }
    }

    /// Metadata for a run happening now, stamped with this crate's name and version
    pub fn now() -> Self {
        Self::new(
            Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            env!("CARGO_PKG_NAME").to_string(),
            env!("CARGO_PKG_VERSION").to_string(),
        )
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }
}
