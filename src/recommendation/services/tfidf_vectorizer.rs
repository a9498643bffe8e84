use crate::shared::error::RecommendError;
use crate::shared::Result;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

/// Sparse vector over vocabulary columns
///
/// Entries are `(column, weight)` pairs kept sorted by column with no zero weights.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    /// Builds an L2-normalized vector from raw column weights
    fn normalized(weights: BTreeMap<usize, f64>) -> Self {
        let norm = weights.values().map(|w| w * w).sum::<f64>().sqrt();
        if norm == 0.0 {
            return Self::default();
        }
        Self {
            entries: weights
                .into_iter()
                .filter(|(_, w)| *w != 0.0)
                .map(|(column, w)| (column, w / norm))
                .collect(),
        }
    }

    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
    }

    /// Dot product via a merge walk over both sorted entry lists
    pub fn dot(&self, other: &Self) -> f64 {
        let mut a = self.entries.iter();
        let mut b = other.entries.iter();
        let mut a_next = a.next();
        let mut b_next = b.next();
        let mut dot = 0.0;

        while let (Some(&(ia, va)), Some(&(ib, vb))) = (a_next, b_next) {
            match ia.cmp(&ib) {
                Ordering::Equal => {
                    dot += va * vb;
                    a_next = a.next();
                    b_next = b.next();
                }
                Ordering::Less => a_next = a.next(),
                Ordering::Greater => b_next = b.next(),
            }
        }
        dot
    }
}

/// Vocabulary learned at fit time: token columns, document frequencies and IDF weights
#[derive(Debug, Clone, PartialEq)]
pub struct Vocabulary {
    columns: BTreeMap<String, usize>,
    document_frequencies: Vec<usize>,
    idf: Vec<f64>,
    document_count: usize,
}

impl Vocabulary {
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn column(&self, token: &str) -> Option<usize> {
        self.columns.get(token).copied()
    }

    pub fn document_frequency(&self, token: &str) -> Option<usize> {
        self.column(token).map(|c| self.document_frequencies[c])
    }

    pub fn idf(&self, token: &str) -> Option<f64> {
        self.column(token).map(|c| self.idf[c])
    }

    /// Number of documents the vocabulary was fit on
    pub fn document_count(&self) -> usize {
        self.document_count
    }

    /// Tokens in column order
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }
}

/// TfIdfVectorizer service turning token bags into TF-IDF vectors
///
/// - tf: raw count of the token in the document
/// - idf: `ln((1 + N) / (1 + df)) + 1`
/// - every output vector is L2-normalized
#[derive(Debug, Clone, PartialEq)]
pub struct TfIdfVectorizer {
    vocabulary: Vocabulary,
}

impl TfIdfVectorizer {
    /// Learns the vocabulary from per-document token lists and returns the
    /// fitted vectorizer with one document vector per input document
    ///
    /// # Errors
    /// Returns `RecommendError::CorpusLoadError` when no document contains a token
    pub fn fit<S: AsRef<str>>(token_documents: &[Vec<S>]) -> Result<(Self, Vec<SparseVector>)> {
        let distinct: BTreeSet<&str> = token_documents
            .iter()
            .flat_map(|tokens| tokens.iter().map(|t| t.as_ref()))
            .collect();

        if distinct.is_empty() {
            return Err(RecommendError::CorpusLoadError {
                details: "No dependency coordinates found in any corpus document (empty vocabulary)"
                    .to_string(),
            }
            .into());
        }

        let columns: BTreeMap<String, usize> = distinct
            .into_iter()
            .enumerate()
            .map(|(column, token)| (token.to_string(), column))
            .collect();

        let mut document_frequencies = vec![0usize; columns.len()];
        for tokens in token_documents {
            let seen: BTreeSet<usize> = tokens
                .iter()
                .filter_map(|t| columns.get(t.as_ref()).copied())
                .collect();
            for column in seen {
                document_frequencies[column] += 1;
            }
        }

        let n = token_documents.len() as f64;
        let idf = document_frequencies
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        let vectorizer = Self {
            vocabulary: Vocabulary {
                columns,
                document_frequencies,
                idf,
                document_count: token_documents.len(),
            },
        };

        let vectors = token_documents
            .iter()
            .map(|tokens| vectorizer.transform(tokens))
            .collect();

        Ok((vectorizer, vectors))
    }

    /// Weights a token bag with the frozen vocabulary; unseen tokens are dropped
    pub fn transform<S: AsRef<str>>(&self, tokens: &[S]) -> SparseVector {
        let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
        for token in tokens {
            if let Some(column) = self.vocabulary.column(token.as_ref()) {
                *counts.entry(column).or_insert(0) += 1;
            }
        }

        let weights = counts
            .into_iter()
            .map(|(column, count)| (column, count as f64 * self.vocabulary.idf[column]))
            .collect();

        SparseVector::normalized(weights)
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }
}
