//! pom-recommender - dependency recommendations for Maven projects
//!
//! Given a corpus of historical pom.xml manifests, recommends dependencies
//! that the most similar projects declare and a query manifest does not.
//! Similarity is cosine distance between TF-IDF vectors over
//! `groupId:artifactId` coordinates.
//!
//! # Architecture
//!
//! - **Domain Layer** (`recommendation`): coordinates, corpus, TF-IDF model,
//!   similarity index and the fitted engine
//! - **Application Layer** (`application`): use case, DTOs and factories
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): filesystem, console and formatter implementations
//! - **Shared** (`shared`): error types, result alias and file-safety helpers
//!
//! # Example
//!
//! ```no_run
//! use pom_recommender::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = RecommendDependenciesUseCase::new(
//!     FileSystemReader::new(),
//!     FileSystemReader::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = RecommendRequest::new(
//!     PathBuf::from("corpus/poms.txt"),
//!     vec![PathBuf::from("pom.xml")],
//! );
//! let response = use_case.execute(request)?;
//!
//! println!("{}", JsonFormatter::new().format(&response)?);
//! # Ok(())
//! # }
//! ```
//!
//! The engine can also be used directly:
//!
//! ```
//! use pom_recommender::recommendation::RecommendationEngine;
//!
//! let corpus = r#"<?xml version="1.0"?>
//! <project xmlns="http://maven.apache.org/POM/4.0.0"><dependencies>
//!   <dependency><groupId>a</groupId><artifactId>x</artifactId></dependency>
//!   <dependency><groupId>a</groupId><artifactId>y</artifactId></dependency>
//! </dependencies></project>"#;
//!
//! let engine = RecommendationEngine::initialize(corpus).unwrap();
//! let manifest = r#"<project xmlns="http://maven.apache.org/POM/4.0.0"><dependencies>
//!   <dependency><groupId>a</groupId><artifactId>x</artifactId></dependency>
//! </dependencies></project>"#;
//!
//! let recommendation = engine.recommend(manifest).unwrap();
//! assert_eq!(recommendation.coordinates().len(), 1);
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod recommendation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::application::dto::{
        ManifestRecommendation, OutputFormat, RecommendRequest, RecommendResponse,
        RecommendationOutcome,
    };
    pub use crate::application::use_cases::RecommendDependenciesUseCase;
    pub use crate::ports::outbound::{
        CorpusReader, ManifestReader, OutputPresenter, ProgressReporter, RecommendationFormatter,
    };
    pub use crate::recommendation::domain::{
        Coordinate, Corpus, Document, Neighbor, Recommendation, RecommendationMetadata,
    };
    pub use crate::recommendation::RecommendationEngine;
    pub use crate::shared::Result;
}
