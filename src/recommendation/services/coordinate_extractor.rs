use crate::recommendation::domain::Coordinate;
use crate::shared::error::RecommendError;
use crate::shared::Result;
use roxmltree::{Node, ParsingOptions};

/// XML namespace of Maven POM documents
pub const POM_NAMESPACE: &str = "http://maven.apache.org/POM/4.0.0";

const DEPENDENCY_ELEMENT: &str = "dependency";
const GROUP_ID_ELEMENT: &str = "groupId";
const ARTIFACT_ID_ELEMENT: &str = "artifactId";

/// CoordinateExtractor service for reading dependency coordinates out of a pom.xml
///
/// Pure and stateless; shared by corpus fitting and per-request queries.
pub struct CoordinateExtractor;

impl CoordinateExtractor {
    /// Extracts every `groupId:artifactId` declared by `dependency` elements
    ///
    /// Coordinates come back in document order with duplicates preserved.
    /// Declarations missing a group or artifact identifier are skipped.
    ///
    /// # Errors
    /// Returns `RecommendError::ManifestParseError` if the text is not XML
    pub fn extract(manifest_text: &str) -> Result<Vec<Coordinate>> {
        let mut options = ParsingOptions::default();
        options.allow_dtd = true;
        let document = roxmltree::Document::parse_with_options(manifest_text, options).map_err(
            |e| RecommendError::ManifestParseError {
                details: e.to_string(),
            },
        )?;

        let coordinates = document
            .descendants()
            .filter(|node| node.has_tag_name((POM_NAMESPACE, DEPENDENCY_ELEMENT)))
            .filter_map(|dependency| {
                let group_id = child_text(dependency, GROUP_ID_ELEMENT)?;
                let artifact_id = child_text(dependency, ARTIFACT_ID_ELEMENT)?;
                Some(Coordinate::new(group_id, artifact_id))
            })
            .collect();

        Ok(coordinates)
    }

    /// Extracts coordinates and renders them as vector space tokens
    pub fn extract_tokens(manifest_text: &str) -> Result<Vec<String>> {
        Ok(Self::extract(manifest_text)?
            .iter()
            .map(Coordinate::to_token)
            .collect())
    }
}

/// Trimmed text of the first direct child named `name`; None when absent or blank
fn child_text<'a>(parent: Node<'a, '_>, name: &str) -> Option<&'a str> {
    parent
        .children()
        .find(|child| child.has_tag_name((POM_NAMESPACE, name)))
        .and_then(|child| child.text())
        .map(str::trim)
        .filter(|text| !text.is_empty())
}
