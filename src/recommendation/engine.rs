use crate::recommendation::domain::{Corpus, Document, Recommendation};
use crate::recommendation::services::{
    CoordinateExtractor, RecommendationAggregator, SimilarityIndex, TfIdfVectorizer, Vocabulary,
    DEFAULT_NEIGHBORS,
};
use crate::shared::error::RecommendError;
use crate::shared::Result;

/// RecommendationEngine - the fitted, immutable model behind every query
///
/// Owns the corpus, the TF-IDF vocabulary and the cached document vectors.
/// Nothing is mutated after construction, so one engine can serve any number
/// of concurrent `recommend` calls by shared reference.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    corpus: Corpus,
    vectorizer: TfIdfVectorizer,
    index: SimilarityIndex,
    neighbors: usize,
    unparseable_documents: Vec<usize>,
}

impl RecommendationEngine {
    /// Loads a delimiter-framed corpus and fits the model with the default
    /// neighbor count
    ///
    /// # Errors
    /// Returns `RecommendError::CorpusLoadError` if the corpus is empty or
    /// yields an empty vocabulary
    pub fn initialize(raw_corpus_source: &str) -> Result<Self> {
        Self::fit(Corpus::load(raw_corpus_source)?, DEFAULT_NEIGHBORS)
    }

    /// Fits the model on an already-loaded corpus
    ///
    /// Documents that fail to parse stay in the corpus with an empty token
    /// list: they still count towards IDF and can never share a token with a
    /// query.
    ///
    /// # Errors
    /// - `RecommendError::Validation` if `neighbors` is zero
    /// - `RecommendError::CorpusLoadError` if no document declares a dependency
    pub fn fit(corpus: Corpus, neighbors: usize) -> Result<Self> {
        if neighbors == 0 {
            return Err(RecommendError::Validation {
                message: "Neighbor count must be at least 1".to_string(),
            }
            .into());
        }

        let mut unparseable_documents = Vec::new();
        let token_documents: Vec<Vec<String>> = corpus
            .documents()
            .iter()
            .map(|document| {
                CoordinateExtractor::extract_tokens(document.text()).unwrap_or_else(|_| {
                    unparseable_documents.push(document.index());
                    Vec::new()
                })
            })
            .collect();

        let (vectorizer, vectors) = TfIdfVectorizer::fit(&token_documents)?;

        Ok(Self {
            corpus,
            vectorizer,
            index: SimilarityIndex::new(vectors),
            neighbors,
            unparseable_documents,
        })
    }

    /// Recommends dependencies that the manifest's nearest corpus neighbors
    /// use and the manifest does not
    ///
    /// An empty result is valid: the neighbors declare nothing new.
    ///
    /// # Errors
    /// Returns `RecommendError::ManifestParseError` if the manifest is not XML
    pub fn recommend(&self, manifest_text: &str) -> Result<Recommendation> {
        let query_coordinates = CoordinateExtractor::extract(manifest_text)?;
        let tokens: Vec<String> = query_coordinates.iter().map(|c| c.to_token()).collect();

        let query_vector = self.vectorizer.transform(&tokens);
        let neighbors = self.index.query(&query_vector, self.neighbors);

        let neighbor_documents: Vec<&Document> = neighbors
            .iter()
            .filter_map(|neighbor| self.corpus.get(neighbor.index))
            .collect();
        let coordinates =
            RecommendationAggregator::aggregate(&query_coordinates, &neighbor_documents);

        Ok(Recommendation::new(coordinates, neighbors))
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        self.vectorizer.vocabulary()
    }

    pub fn neighbors(&self) -> usize {
        self.neighbors
    }

    /// Indices of corpus documents that were not parseable at fit time
    pub fn unparseable_documents(&self) -> &[usize] {
        &self.unparseable_documents
    }
}
