use pom_recommender::prelude::*;
use pom_recommender::shared::error::RecommendError;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock ManifestReader serving manifests from memory by path
#[derive(Default)]
pub struct MockManifestReader {
    manifests: HashMap<PathBuf, String>,
}

impl MockManifestReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_manifest(mut self, path: &str, content: impl Into<String>) -> Self {
        self.manifests.insert(PathBuf::from(path), content.into());
        self
    }
}

impl ManifestReader for MockManifestReader {
    fn read_manifest(&self, path: &Path) -> Result<String> {
        self.manifests.get(path).cloned().ok_or_else(|| {
            RecommendError::ManifestNotFound {
                path: path.to_path_buf(),
            }
            .into()
        })
    }
}
