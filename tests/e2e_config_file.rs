/// End-to-end tests for config file loading and CLI option merging.
///
/// Each test runs the binary inside its own temporary directory so
/// auto-discovery only ever sees the config file the test wrote.
use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Copy the corpus and one manifest into a fresh working directory.
fn create_workspace() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::copy(
        fixtures_path().join("corpus/poms.txt"),
        dir.path().join("poms.txt"),
    )
    .unwrap();
    fs::copy(
        fixtures_path().join("manifests/web-app.xml"),
        dir.path().join("pom.xml"),
    )
    .unwrap();
    dir
}

fn write_config(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
}

fn run_in(dir: &Path, args: &[&str]) -> std::process::Output {
    cargo_bin_cmd!("pom-recommender")
        .current_dir(dir)
        .args(args)
        .output()
        .unwrap()
}

fn recommendations(output: &std::process::Output) -> Vec<String> {
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    json["results"][0]["recommendations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect()
}

// ============================================================================
// Config File Auto-Discovery Tests
// ============================================================================

mod auto_discovery_tests {
    use super::*;

    #[test]
    fn test_auto_discovery_supplies_corpus() {
        let dir = create_workspace();
        write_config(
            &dir.path().join("pom-recommender.config.yml"),
            "corpus: poms.txt\n",
        );

        let output = run_in(dir.path(), &["pom.xml"]);

        assert!(output.status.success());
        assert!(recommendations(&output).contains(&"junit:junit".to_string()));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Auto-discovered config file"));
    }

    #[test]
    fn test_auto_discovery_applies_format_and_excludes() {
        let dir = create_workspace();
        write_config(
            &dir.path().join("pom-recommender.config.yml"),
            r#"
corpus: poms.txt
format: markdown
exclude_coordinates:
  - "junit:*"
"#,
        );

        let output = run_in(dir.path(), &["pom.xml"]);

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("# Dependency Recommendations"));
        assert!(!stdout.contains("| junit |"));
    }

    #[test]
    fn test_no_config_and_no_corpus_is_an_error() {
        let dir = create_workspace();

        let output = run_in(dir.path(), &["pom.xml"]);

        assert_eq!(output.status.code(), Some(3));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("No corpus given"));
    }

    #[test]
    fn test_unknown_field_warns() {
        let dir = create_workspace();
        write_config(
            &dir.path().join("pom-recommender.config.yml"),
            "corpus: poms.txt\ncheck_cve: true\n",
        );

        let output = run_in(dir.path(), &["pom.xml"]);

        assert!(output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Unknown config field 'check_cve'"));
    }
}

// ============================================================================
// Explicit Config Path (`--config`) Tests
// ============================================================================

mod explicit_config_tests {
    use super::*;

    #[test]
    fn test_explicit_config_path_loads_successfully() {
        let dir = create_workspace();
        let config_dir = dir.path().join("settings");
        fs::create_dir(&config_dir).unwrap();
        // relative corpus path is resolved against the config file's directory
        write_config(&config_dir.join("custom.yml"), "corpus: ../poms.txt\nneighbors: 1\n");

        let output = run_in(dir.path(), &["--config", "settings/custom.yml", "pom.xml"]);

        assert!(output.status.success());
        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["results"][0]["neighbors"].as_array().unwrap().len(), 1);
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Loaded config from:"));
    }

    #[test]
    fn test_explicit_config_nonexistent_file_error() {
        let dir = create_workspace();
        let output = run_in(
            dir.path(),
            &["--config", "nonexistent-config.yml", "-c", "poms.txt", "pom.xml"],
        );
        assert_eq!(output.status.code(), Some(3));
    }

    #[test]
    fn test_invalid_config_value_error() {
        let dir = create_workspace();
        write_config(&dir.path().join("pom-recommender.config.yml"), "neighbors: 0\n");

        let output = run_in(dir.path(), &["-c", "poms.txt", "pom.xml"]);

        assert_eq!(output.status.code(), Some(3));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("neighbors must be at least 1"));
    }
}

// ============================================================================
// CLI + Config Merge Tests
// ============================================================================

mod merge_tests {
    use super::*;

    #[test]
    fn test_cli_and_config_exclude_patterns_merged() {
        let dir = create_workspace();
        write_config(
            &dir.path().join("pom-recommender.config.yml"),
            r#"
corpus: poms.txt
exclude_coordinates:
  - "junit:junit"
"#,
        );

        let output = run_in(dir.path(), &["-e", "org.slf4j:*", "pom.xml"]);

        assert!(output.status.success());
        assert_eq!(
            recommendations(&output),
            vec!["ch.qos.logback:logback-classic", "org.mockito:mockito-core"]
        );
    }

    #[test]
    fn test_cli_format_overrides_config() {
        let dir = create_workspace();
        write_config(
            &dir.path().join("pom-recommender.config.yml"),
            "corpus: poms.txt\nformat: markdown\n",
        );

        let output = run_in(dir.path(), &["-f", "json", "pom.xml"]);

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.trim_start().starts_with('{'));
    }

    #[test]
    fn test_cli_corpus_and_neighbors_override_config() {
        let dir = create_workspace();
        write_config(
            &dir.path().join("pom-recommender.config.yml"),
            "corpus: missing.txt\nneighbors: 1\n",
        );
        let corpus_dir = fixtures_path().join("corpus-dir");

        let output = run_in(
            dir.path(),
            &["-c", corpus_dir.to_str().unwrap(), "-k", "3", "pom.xml"],
        );

        assert!(output.status.success());
        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["results"][0]["neighbors"].as_array().unwrap().len(), 3);
    }
}
