use clap::Parser;
use pom_recommender::application::dto::OutputFormat;
use std::path::PathBuf;

/// Recommend Maven dependencies for pom.xml manifests from a corpus of similar projects
#[derive(Parser, Debug)]
#[command(name = "pom-recommender")]
#[command(version)]
#[command(about = "Recommend Maven dependencies from similar pom.xml manifests", long_about = None)]
pub struct Args {
    /// pom.xml manifests to recommend dependencies for
    #[arg(value_name = "MANIFEST", required = true, num_args = 1..)]
    pub manifests: Vec<PathBuf>,

    /// Corpus file (delimiter-separated manifests) or directory of *.xml manifests
    #[arg(short, long, value_name = "PATH")]
    pub corpus: Option<PathBuf>,

    /// Output format: json or markdown [default: json]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Number of nearest corpus manifests to draw recommendations from [default: 2]
    #[arg(short = 'k', long, value_parser = parse_neighbors)]
    pub neighbors: Option<usize>,

    /// Hide recommendations matching patterns (supports wildcards: *)
    /// Can be specified multiple times: -e "junit:*" -e "*:lombok"
    #[arg(short, long = "exclude", value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Path to a config file (defaults to ./pom-recommender.config.yml if present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

fn parse_neighbors(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}
