/// Integration tests for the application layer
mod test_utilities;

use pom_recommender::shared::error::RecommendError;
use std::path::PathBuf;
use test_utilities::mocks::*;
use pom_recommender::prelude::*;

fn pom(coordinates: &[(&str, &str)]) -> String {
    let dependencies: String = coordinates
        .iter()
        .map(|(g, a)| {
            format!(
                "\n    <dependency>\n      <groupId>{}</groupId>\n      <artifactId>{}</artifactId>\n      <version>1.0</version>\n    </dependency>",
                g, a
            )
        })
        .collect();
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<project xmlns=\"http://maven.apache.org/POM/4.0.0\">\n  <modelVersion>4.0.0</modelVersion>\n  <dependencies>{}\n  </dependencies>\n</project>\n",
        dependencies
    )
}

fn scenario_corpus() -> MockCorpusReader {
    MockCorpusReader::from_manifests(&[
        pom(&[("a", "x"), ("a", "y")]),
        pom(&[("a", "x"), ("a", "z")]),
        pom(&[("b", "w")]),
    ])
}

fn coordinates(result: &ManifestRecommendation) -> Vec<String> {
    result
        .recommendation()
        .expect("manifest should be recommended")
        .coordinates()
        .iter()
        .map(ToString::to_string)
        .collect()
}

#[test]
fn test_recommend_happy_path() {
    let progress_reporter = MockProgressReporter::new();
    let use_case = RecommendDependenciesUseCase::new(
        scenario_corpus(),
        MockManifestReader::new().with_manifest("pom.xml", pom(&[("a", "x")])),
        progress_reporter.clone(),
    );

    let request = RecommendRequest::new(PathBuf::from("poms.txt"), vec![PathBuf::from("pom.xml")]);
    let response = use_case.execute(request).unwrap();

    assert_eq!(response.results.len(), 1);
    assert_eq!(coordinates(&response.results[0]), vec!["a:y", "a:z"]);

    let neighbors: Vec<usize> = response.results[0]
        .recommendation()
        .unwrap()
        .neighbors()
        .iter()
        .map(|n| n.index)
        .collect();
    assert_eq!(neighbors, vec![0, 1]);

    assert!(progress_reporter.contains("Loading corpus from: poms.txt"));
    assert!(progress_reporter.contains("Progress: 1/1 - pom.xml"));
    assert!(progress_reporter.contains("Completed:"));
}

#[test]
fn test_batch_keeps_request_order_and_isolates_failures() {
    let use_case = RecommendDependenciesUseCase::new(
        scenario_corpus(),
        MockManifestReader::new()
            .with_manifest("first.xml", pom(&[("b", "w")]))
            .with_manifest("broken.xml", "<project><dependencies>")
            .with_manifest("last.xml", pom(&[("a", "x")])),
        MockProgressReporter::new(),
    );

    let request = RecommendRequest::new(
        PathBuf::from("poms.txt"),
        vec![
            PathBuf::from("first.xml"),
            PathBuf::from("broken.xml"),
            PathBuf::from("absent.xml"),
            PathBuf::from("last.xml"),
        ],
    );
    let response = use_case.execute(request).unwrap();

    let manifests: Vec<&str> = response.results.iter().map(|r| r.manifest.as_str()).collect();
    assert_eq!(manifests, vec!["first.xml", "broken.xml", "absent.xml", "last.xml"]);

    assert!(response.results[0].recommendation().is_some());
    assert!(response.results[1]
        .error()
        .unwrap()
        .starts_with("Error: Failed to parse manifest"));
    assert!(response.results[2].error().unwrap().contains("absent.xml"));
    assert_eq!(coordinates(&response.results[3]), vec!["a:y", "a:z"]);
    assert!(response.has_rejections());
}

#[test]
fn test_identical_query_recommends_nothing_new_from_itself() {
    let use_case = RecommendDependenciesUseCase::new(
        scenario_corpus(),
        MockManifestReader::new().with_manifest("pom.xml", pom(&[("a", "x"), ("a", "y")])),
        MockProgressReporter::new(),
    );

    let request = RecommendRequest::new(PathBuf::from("poms.txt"), vec![PathBuf::from("pom.xml")]);
    let response = use_case.execute(request).unwrap();

    // nearest is the identical document, second nearest adds a:z
    assert_eq!(coordinates(&response.results[0]), vec!["a:z"]);
    let first = response.results[0].recommendation().unwrap().neighbors()[0];
    assert_eq!(first.index, 0);
    assert!(first.distance.abs() < 1e-9);
}

#[test]
fn test_exclude_patterns_hide_recommendations() {
    let progress_reporter = MockProgressReporter::new();
    let use_case = RecommendDependenciesUseCase::new(
        scenario_corpus(),
        MockManifestReader::new().with_manifest("pom.xml", pom(&[("a", "x")])),
        progress_reporter.clone(),
    );

    let request = RecommendRequest::new(PathBuf::from("poms.txt"), vec![PathBuf::from("pom.xml")])
        .with_exclude_patterns(vec!["*:z".to_string(), "org.unused:*".to_string()]);
    let response = use_case.execute(request).unwrap();

    assert_eq!(coordinates(&response.results[0]), vec!["a:y"]);
    assert!(progress_reporter.contains("Excluded 1 recommendation(s)"));
    assert!(progress_reporter.contains("'org.unused:*' did not match"));
}

#[test]
fn test_neighbor_count_is_configurable() {
    let use_case = RecommendDependenciesUseCase::new(
        scenario_corpus(),
        MockManifestReader::new().with_manifest("pom.xml", pom(&[("a", "x")])),
        MockProgressReporter::new(),
    );

    let request = RecommendRequest::new(PathBuf::from("poms.txt"), vec![PathBuf::from("pom.xml")])
        .with_neighbors(3);
    let response = use_case.execute(request).unwrap();

    assert_eq!(coordinates(&response.results[0]), vec!["a:y", "a:z", "b:w"]);
}

#[test]
fn test_corpus_read_failure_is_fatal() {
    let use_case = RecommendDependenciesUseCase::new(
        MockCorpusReader::with_failure(),
        MockManifestReader::new(),
        MockProgressReporter::new(),
    );

    let request = RecommendRequest::new(PathBuf::from("poms.txt"), vec![PathBuf::from("pom.xml")]);
    let err = use_case.execute(request).unwrap_err();
    assert!(err.to_string().contains("Mock corpus read failure"));
}

#[test]
fn test_corpus_without_dependencies_is_fatal() {
    let use_case = RecommendDependenciesUseCase::new(
        MockCorpusReader::from_manifests(&[pom(&[]), pom(&[])]),
        MockManifestReader::new(),
        MockProgressReporter::new(),
    );

    let request = RecommendRequest::new(PathBuf::from("poms.txt"), vec![]);
    let err = use_case.execute(request).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<RecommendError>(),
        Some(RecommendError::CorpusLoadError { .. })
    ));
}

#[test]
fn test_unparseable_corpus_documents_are_reported() {
    let progress_reporter = MockProgressReporter::new();
    let use_case = RecommendDependenciesUseCase::new(
        MockCorpusReader::from_manifests(&[pom(&[("a", "x")]), "<?xml version=\"1.0\"?><broken".to_string()]),
        MockManifestReader::new().with_manifest("pom.xml", pom(&[("a", "x")])),
        progress_reporter.clone(),
    );

    let request = RecommendRequest::new(PathBuf::from("poms.txt"), vec![PathBuf::from("pom.xml")]);
    let response = use_case.execute(request).unwrap();

    assert_eq!(response.corpus_size, 2);
    assert!(response.results[0].recommendation().unwrap().is_empty());
    assert!(progress_reporter.contains("1 corpus document(s) could not be parsed"));
}

#[test]
fn test_formatters_render_use_case_response() {
    let use_case = RecommendDependenciesUseCase::new(
        scenario_corpus(),
        MockManifestReader::new().with_manifest("pom.xml", pom(&[("a", "x")])),
        MockProgressReporter::new(),
    );
    let request = RecommendRequest::new(PathBuf::from("poms.txt"), vec![PathBuf::from("pom.xml")]);
    let response = use_case.execute(request).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&JsonFormatter::new().format(&response).unwrap()).unwrap();
    assert_eq!(json["results"][0]["recommendations"], serde_json::json!(["a:y", "a:z"]));

    let markdown = MarkdownFormatter::new().format(&response).unwrap();
    assert!(markdown.contains("[z](https://central.sonatype.com/artifact/a/z)"));
}
