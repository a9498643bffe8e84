mod cli;

use cli::Args;
use pom_recommender::adapters::outbound::console::StderrProgressReporter;
use pom_recommender::adapters::outbound::filesystem::FileSystemReader;
use pom_recommender::application::dto::RecommendRequest;
use pom_recommender::application::factories::{
    FormatterFactory, PresenterFactory, PresenterType,
};
use pom_recommender::application::use_cases::RecommendDependenciesUseCase;
use pom_recommender::config::{self, ConfigFile, CONFIG_FILENAME};
use pom_recommender::ports::outbound::{OutputPresenter, RecommendationFormatter};
use pom_recommender::shared::error::{ExitCode, RecommendError};
use pom_recommender::shared::Result;
use std::path::Path;
use std::process;

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };

    process::exit(exit_code.as_i32());
}

fn run() -> Result<ExitCode> {
    let args = Args::parse_args();
    let config = load_config(&args)?.unwrap_or_default();

    let corpus_path = args.corpus.or(config.corpus.clone()).ok_or_else(|| {
        RecommendError::Validation {
            message: format!(
                "No corpus given.\n\n💡 Hint: Pass --corpus <PATH> or set 'corpus' in {}",
                CONFIG_FILENAME
            ),
        }
    })?;
    let format = match args.format {
        Some(format) => format,
        None => config.output_format()?.unwrap_or_default(),
    };

    let mut request = RecommendRequest::new(corpus_path, args.manifests)
        .with_exclude_patterns(merge_exclude_patterns(args.exclude, &config));
    if let Some(neighbors) = args.neighbors.or(config.neighbors) {
        request = request.with_neighbors(neighbors);
    }

    // Create adapters (Dependency Injection)
    let use_case = RecommendDependenciesUseCase::new(
        FileSystemReader::new(),
        FileSystemReader::new(),
        StderrProgressReporter::new(),
    );
    let response = use_case.execute(request)?;

    eprintln!("{}", FormatterFactory::progress_message(format));
    let formatted_output = FormatterFactory::create(format).format(&response)?;

    PresenterFactory::create(PresenterType::from_output(args.output))
        .present(&formatted_output)?;

    if response.has_rejections() {
        Ok(ExitCode::ManifestRejected)
    } else {
        Ok(ExitCode::Success)
    }
}

/// Explicit `--config` must exist; otherwise the current directory is searched
fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    if let Some(path) = args.config.as_deref() {
        let config = config::load_config_from_path(path)?;
        eprintln!("📋 Loaded config from: {}", path.display());
        return Ok(Some(config));
    }

    let discovered = config::discover_config(Path::new("."))?;
    if discovered.is_some() {
        eprintln!("📋 Auto-discovered config file: {}", CONFIG_FILENAME);
    }
    Ok(discovered)
}

/// CLI patterns first, then config patterns not already given
fn merge_exclude_patterns(cli_patterns: Vec<String>, config: &ConfigFile) -> Vec<String> {
    let mut patterns = cli_patterns;
    for pattern in config.exclude_coordinates.iter().flatten() {
        if !patterns.contains(pattern) {
            patterns.push(pattern.clone());
        }
    }
    patterns
}
