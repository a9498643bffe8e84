use crate::recommendation::domain::Corpus;
use crate::shared::Result;
use std::path::Path;

/// CorpusReader port for loading the historical manifest corpus
///
/// This port abstracts where the corpus lives and how its documents are
/// framed (one delimited blob, one file per manifest, ...).
pub trait CorpusReader {
    /// Reads and frames the corpus found at `source`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The source does not exist or cannot be read
    /// - The source holds no manifest documents
    fn read_corpus(&self, source: &Path) -> Result<Corpus>;
}
