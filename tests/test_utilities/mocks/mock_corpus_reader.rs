use pom_recommender::prelude::*;
use std::path::Path;

/// Mock CorpusReader holding a delimiter-framed corpus in memory
pub struct MockCorpusReader {
    raw: String,
    should_fail: bool,
}

impl MockCorpusReader {
    pub fn new(raw: String) -> Self {
        Self {
            raw,
            should_fail: false,
        }
    }

    /// Builds the raw corpus from individual manifests
    pub fn from_manifests(manifests: &[String]) -> Self {
        let delimiter = format!(
            "\n{}\n",
            pom_recommender::recommendation::domain::DOCUMENT_DELIMITER
        );
        Self::new(manifests.join(&delimiter))
    }

    pub fn with_failure() -> Self {
        Self {
            raw: String::new(),
            should_fail: true,
        }
    }
}

impl CorpusReader for MockCorpusReader {
    fn read_corpus(&self, source: &Path) -> Result<Corpus> {
        if self.should_fail {
            anyhow::bail!("Mock corpus read failure: {}", source.display());
        }
        Corpus::load(&self.raw)
    }
}
