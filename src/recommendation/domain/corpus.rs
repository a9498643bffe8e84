use crate::shared::error::RecommendError;
use crate::shared::Result;

/// Line separating two manifests in a single-file corpus
pub const DOCUMENT_DELIMITER: &str = "----------------------------------------------";

/// Marker that starts every stored document
const XML_DECLARATION_MARKER: &str = "<?xml";

/// Document value object: one corpus manifest stored verbatim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    index: usize,
    text: String,
}

impl Document {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Corpus aggregate: ordered, 0-indexed collection of historical manifests
///
/// Built once and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    /// Loads a corpus from one blob holding many manifests separated by
    /// [`DOCUMENT_DELIMITER`] lines
    ///
    /// # Errors
    /// Returns `RecommendError::CorpusLoadError` if the source is empty or
    /// yields no documents
    pub fn load(raw_source: &str) -> Result<Self> {
        if raw_source.trim().is_empty() {
            return Err(RecommendError::CorpusLoadError {
                details: "Corpus source is empty".to_string(),
            }
            .into());
        }

        let mut chunks = Vec::new();
        let mut current: Vec<&str> = Vec::new();
        for line in raw_source.split('\n') {
            if line.trim_end() == DOCUMENT_DELIMITER {
                chunks.push(current.join("\n"));
                current.clear();
            } else {
                current.push(line);
            }
        }
        chunks.push(current.join("\n"));

        Self::from_documents(chunks)
    }

    /// Builds a corpus from already-framed documents (one manifest each)
    ///
    /// Leading content before the XML declaration is trimmed, and blank
    /// documents are dropped.
    pub fn from_documents<I, S>(texts: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let documents: Vec<Document> = texts
            .into_iter()
            .filter_map(|text| {
                let text = text.as_ref();
                // Blank chunks (e.g. a trailing delimiter) are dropped on
                // purpose, so indices are assigned after filtering.
                if text.trim().is_empty() {
                    None
                } else {
                    Some(trim_before_declaration(text).to_string())
                }
            })
            .enumerate()
            .map(|(index, text)| Document { index, text })
            .collect();

        if documents.is_empty() {
            return Err(RecommendError::CorpusLoadError {
                details: "Corpus contains no manifest documents".to_string(),
            }
            .into());
        }

        Ok(Self { documents })
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn get(&self, index: usize) -> Option<&Document> {
        self.documents.get(index)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Drops anything preceding the first `<?xml`; text without the marker is kept as-is
fn trim_before_declaration(text: &str) -> &str {
    match text.find(XML_DECLARATION_MARKER) {
        Some(start) => &text[start..],
        None => text,
    }
}
