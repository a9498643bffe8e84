use crate::recommendation::services::DEFAULT_NEIGHBORS;
use std::path::PathBuf;

/// RecommendRequest - Internal request DTO for the recommendation use case
#[derive(Debug, Clone)]
pub struct RecommendRequest {
    /// Corpus file (delimiter-framed) or directory (one pom.xml per file)
    pub corpus_path: PathBuf,
    /// Manifests to recommend dependencies for
    pub manifest_paths: Vec<PathBuf>,
    /// Number of nearest corpus manifests consulted per query
    pub neighbors: usize,
    /// Patterns for hiding recommended coordinates
    pub exclude_patterns: Vec<String>,
}

impl RecommendRequest {
    pub fn new(corpus_path: PathBuf, manifest_paths: Vec<PathBuf>) -> Self {
        Self {
            corpus_path,
            manifest_paths,
            neighbors: DEFAULT_NEIGHBORS,
            exclude_patterns: Vec::new(),
        }
    }

    pub fn with_neighbors(mut self, neighbors: usize) -> Self {
        self.neighbors = neighbors;
        self
    }

    pub fn with_exclude_patterns(mut self, exclude_patterns: Vec<String>) -> Self {
        self.exclude_patterns = exclude_patterns;
        self
    }
}
