use serde::{Serialize, Serializer};

/// Dependency coordinate value object (`group_id:artifact_id`)
///
/// Coordinates are version-agnostic. Equality, ordering and hashing use the
/// joined `group_id:artifact_id` string, the same string the vector space
/// model uses as its token. Identifiers may themselves contain `:`, so
/// `("a:b", "c")` and `("a", "b:c")` are the same coordinate.
#[derive(Debug, Clone)]
pub struct Coordinate {
    rendered: String,
    group_len: usize,
}

impl Coordinate {
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        let mut rendered = group_id.into();
        let group_len = rendered.len();
        rendered.push(':');
        rendered.push_str(&artifact_id.into());
        Self {
            rendered,
            group_len,
        }
    }

    pub fn group_id(&self) -> &str {
        &self.rendered[..self.group_len]
    }

    pub fn artifact_id(&self) -> &str {
        &self.rendered[self.group_len + 1..]
    }

    /// The token used by the vector space model
    pub fn to_token(&self) -> String {
        self.rendered.clone()
    }

    pub fn as_str(&self) -> &str {
        &self.rendered
    }
}

impl PartialEq for Coordinate {
    fn eq(&self, other: &Self) -> bool {
        self.rendered == other.rendered
    }
}

impl Eq for Coordinate {}

impl std::hash::Hash for Coordinate {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.rendered.hash(state);
    }
}

impl PartialOrd for Coordinate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coordinate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rendered.cmp(&other.rendered)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.rendered)
    }
}

impl Serialize for Coordinate {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
