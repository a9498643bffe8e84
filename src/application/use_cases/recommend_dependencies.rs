use crate::application::dto::{
    ManifestRecommendation, RecommendRequest, RecommendResponse, RecommendationOutcome,
};
use crate::ports::outbound::{CorpusReader, ManifestReader, ProgressReporter};
use crate::recommendation::domain::{Recommendation, RecommendationMetadata};
use crate::recommendation::services::CoordinateFilter;
use crate::recommendation::RecommendationEngine;
use crate::shared::Result;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Maximum number of corpus indices listed in the unparseable-document warning
const MAX_LISTED_INDICES: usize = 10;

/// RecommendDependenciesUseCase - Core use case for dependency recommendation
///
/// Loads the corpus, fits the engine once, then recommends dependencies for
/// every requested manifest. A manifest that cannot be read or parsed is
/// reported in the response; it never aborts the rest of the batch.
///
/// # Type Parameters
/// * `CR` - CorpusReader implementation
/// * `MR` - ManifestReader implementation
/// * `PR` - ProgressReporter implementation
pub struct RecommendDependenciesUseCase<CR, MR, PR> {
    corpus_reader: CR,
    manifest_reader: MR,
    progress_reporter: PR,
}

impl<CR, MR, PR> RecommendDependenciesUseCase<CR, MR, PR>
where
    CR: CorpusReader,
    MR: ManifestReader,
    PR: ProgressReporter,
{
    /// Creates a new RecommendDependenciesUseCase with injected dependencies
    pub fn new(corpus_reader: CR, manifest_reader: MR, progress_reporter: PR) -> Self {
        Self {
            corpus_reader,
            manifest_reader,
            progress_reporter,
        }
    }

    /// Executes the recommendation use case
    ///
    /// # Errors
    /// Returns an error if the exclude patterns are invalid, or if the corpus
    /// cannot be loaded or fitted. Per-manifest failures are not errors.
    pub fn execute(&self, request: RecommendRequest) -> Result<RecommendResponse> {
        // Step 1: Validate filters before the expensive fit
        let filter = if request.exclude_patterns.is_empty() {
            None
        } else {
            Some(CoordinateFilter::new(request.exclude_patterns.clone())?)
        };

        // Step 2: Build the engine
        let engine = self.build_engine(&request)?;

        // Step 3: Recommend for every manifest
        let mut results = self.recommend_all(&engine, &request.manifest_paths);

        // Step 4: Hide excluded coordinates
        if let Some(filter) = filter.as_ref() {
            self.apply_exclusion_filter(filter, &mut results);
        }

        let rejected = results.iter().filter(|r| r.error().is_some()).count();
        self.progress_reporter.report_completion(&format!(
            "✅ Recommendations ready: {} manifest(s) processed, {} rejected",
            results.len(),
            rejected
        ));

        Ok(RecommendResponse::new(
            results,
            RecommendationMetadata::now(),
            engine.corpus().len(),
            engine.vocabulary().len(),
        ))
    }

    /// Loads the corpus and fits the engine, reporting progress
    fn build_engine(&self, request: &RecommendRequest) -> Result<RecommendationEngine> {
        self.progress_reporter.report(&format!(
            "📖 Loading corpus from: {}",
            request.corpus_path.display()
        ));

        let corpus = self.corpus_reader.read_corpus(&request.corpus_path)?;
        self.progress_reporter
            .report(&format!("✅ Loaded {} manifest(s) into the corpus", corpus.len()));

        let engine = RecommendationEngine::fit(corpus, request.neighbors)?;

        let unparseable = engine.unparseable_documents();
        if !unparseable.is_empty() {
            let listed: Vec<String> = unparseable
                .iter()
                .take(MAX_LISTED_INDICES)
                .map(|i| i.to_string())
                .collect();
            let more = if unparseable.len() > MAX_LISTED_INDICES {
                ", ..."
            } else {
                ""
            };
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: {} corpus document(s) could not be parsed and contribute no dependencies (index {}{})",
                unparseable.len(),
                listed.join(", "),
                more
            ));
        }

        self.progress_reporter.report(&format!(
            "🧮 Fitted TF-IDF model: {} distinct coordinate(s), {} neighbor(s) per query",
            engine.vocabulary().len(),
            engine.neighbors()
        ));

        Ok(engine)
    }

    /// Reads every manifest, then recommends for all of them in parallel
    ///
    /// Reading goes through the port on this thread. Recommendation runs on
    /// the rayon pool with the engine shared by reference; results keep the
    /// input order.
    fn recommend_all(
        &self,
        engine: &RecommendationEngine,
        manifest_paths: &[PathBuf],
    ) -> Vec<ManifestRecommendation> {
        let total = manifest_paths.len();
        self.progress_reporter.report(&format!(
            "🔍 Recommending dependencies for {} manifest(s)...",
            total
        ));

        let manifests: Vec<(String, Result<String>)> = manifest_paths
            .iter()
            .map(|path| (display_name(path), self.manifest_reader.read_manifest(path)))
            .collect();

        let outcomes: Vec<(String, Result<Recommendation>)> = manifests
            .into_par_iter()
            .map(|(name, text)| {
                let outcome = text.and_then(|text| engine.recommend(&text));
                (name, outcome)
            })
            .collect();

        outcomes
            .into_iter()
            .enumerate()
            .map(|(i, (name, outcome))| {
                self.progress_reporter
                    .report_progress(i + 1, total, Some(&name));

                match outcome {
                    Ok(recommendation) => ManifestRecommendation::recommended(name, recommendation),
                    Err(e) => {
                        self.progress_reporter
                            .report_error(&format!("❌ {}: {}", name, e));
                        ManifestRecommendation::rejected(name, format!("Error: {}", e))
                    }
                }
            })
            .collect()
    }

    /// Applies the exclusion filter to every successful recommendation
    fn apply_exclusion_filter(
        &self,
        filter: &CoordinateFilter,
        results: &mut [ManifestRecommendation],
    ) {
        let mut excluded = 0;
        for result in results.iter_mut() {
            if let RecommendationOutcome::Recommended(recommendation) = &mut result.outcome {
                excluded += filter.apply(recommendation);
            }
        }

        if excluded > 0 {
            self.progress_reporter.report(&format!(
                "🚫 Excluded {} recommendation(s) based on filters",
                excluded
            ));
        }

        for pattern in filter.unmatched_patterns() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Exclude pattern '{}' did not match any recommendation.",
                pattern
            ));
        }
    }
}

fn display_name(path: &Path) -> String {
    path.display().to_string()
}
