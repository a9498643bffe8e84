use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between a rejected manifest
/// and a tool that could not start at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - every manifest received a recommendation
    Success = 0,
    /// At least one manifest could not be read or parsed
    ManifestRejected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (corpus load failure, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ManifestRejected => write!(f, "Manifest Rejected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for dependency recommendation.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum RecommendError {
    #[error("Failed to load corpus\nDetails: {details}\n\n💡 Hint: The corpus must contain at least one pom.xml document with dependency declarations")]
    CorpusLoadError { details: String },

    #[error("Failed to parse manifest: {details}")]
    ManifestParseError { details: String },

    #[error("Manifest file not found: {path}\n\n💡 Hint: Please verify the path to the pom.xml file")]
    ManifestNotFound { path: PathBuf },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for arguments and configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl RecommendError {
    /// Whether the error describes bad caller input rather than a broken engine
    pub fn is_bad_input(&self) -> bool {
        matches!(
            self,
            RecommendError::ManifestParseError { .. }
                | RecommendError::ManifestNotFound { .. }
                | RecommendError::FileReadError { .. }
        )
    }
}
