use crate::ports::outbound::{CorpusReader, ManifestReader};
use crate::recommendation::domain::Corpus;
use crate::shared::error::RecommendError;
use crate::shared::security::read_regular_file;
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Extension of manifest files in a corpus directory
const CORPUS_FILE_EXTENSION: &str = "xml";

/// FileSystemReader adapter for reading the corpus and manifests from disk
///
/// A corpus source is either one delimiter-framed text file or a directory
/// holding one `*.xml` manifest per file. Directory entries are read in
/// file-name order so document indices are reproducible.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    fn corpus_error(source: &Path, details: impl std::fmt::Display) -> anyhow::Error {
        RecommendError::CorpusLoadError {
            details: format!("{}: {}", source.display(), details),
        }
        .into()
    }

    fn corpus_files(&self, directory: &Path) -> Result<Vec<PathBuf>> {
        let entries =
            fs::read_dir(directory).map_err(|e| Self::corpus_error(directory, e))?;

        let mut files = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| Self::corpus_error(directory, e))?.path();
            let is_manifest = path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case(CORPUS_FILE_EXTENSION));
            if is_manifest {
                files.push(path);
            }
        }

        if files.is_empty() {
            return Err(Self::corpus_error(
                directory,
                "directory contains no *.xml manifests",
            ));
        }

        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(files)
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl CorpusReader for FileSystemReader {
    fn read_corpus(&self, source: &Path) -> Result<Corpus> {
        if !source.exists() {
            return Err(Self::corpus_error(source, "corpus source does not exist"));
        }

        if source.is_dir() {
            let texts = self
                .corpus_files(source)?
                .iter()
                .map(|path| {
                    read_regular_file(path, "corpus manifest")
                        .map_err(|e| Self::corpus_error(path, e))
                })
                .collect::<Result<Vec<String>>>()?;
            return Corpus::from_documents(texts);
        }

        let raw = read_regular_file(source, "corpus").map_err(|e| Self::corpus_error(source, e))?;
        Corpus::load(&raw)
    }
}

impl ManifestReader for FileSystemReader {
    fn read_manifest(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(RecommendError::ManifestNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }

        read_regular_file(path, "manifest").map_err(|e| {
            RecommendError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
