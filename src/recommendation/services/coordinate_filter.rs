use crate::recommendation::domain::Recommendation;
use crate::shared::error::RecommendError;
use crate::shared::Result;
use std::cell::Cell;

/// Maximum number of exclude patterns
const MAX_EXCLUDE_PATTERNS: usize = 64;

/// Maximum length of a single exclude pattern
const MAX_PATTERN_LENGTH: usize = 255;

/// CoordinateFilter - hides recommended coordinates matching exclusion patterns
///
/// Patterns are matched against the `group:artifact` form and support '*'
/// to match zero or more characters. Matching is case-sensitive.
#[derive(Debug)]
pub struct CoordinateFilter {
    patterns: Vec<ExcludePattern>,
}

impl CoordinateFilter {
    /// Creates a new CoordinateFilter from raw pattern strings
    ///
    /// # Errors
    /// - Too many patterns (> MAX_EXCLUDE_PATTERNS)
    /// - Invalid pattern format (length, characters, wildcard-only)
    pub fn new(patterns: Vec<String>) -> Result<Self> {
        if patterns.len() > MAX_EXCLUDE_PATTERNS {
            return Err(RecommendError::Validation {
                message: format!(
                    "Too many exclusion patterns: {} (maximum: {})",
                    patterns.len(),
                    MAX_EXCLUDE_PATTERNS
                ),
            }
            .into());
        }

        let patterns = patterns
            .into_iter()
            .map(ExcludePattern::new)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Removes every excluded coordinate from the recommendation
    ///
    /// # Returns
    /// Number of coordinates removed
    pub fn apply(&self, recommendation: &mut Recommendation) -> usize {
        let before = recommendation.coordinates().len();
        recommendation.retain(|coordinate| !self.matches(&coordinate.to_string()));
        before - recommendation.coordinates().len()
    }

    /// Checks if a coordinate matches any exclusion pattern
    pub fn matches(&self, coordinate: &str) -> bool {
        // every pattern is evaluated so unmatched-pattern tracking stays accurate
        self.patterns
            .iter()
            .fold(false, |hit, p| p.matches(coordinate) || hit)
    }

    /// Patterns that have not matched any coordinate so far
    pub fn unmatched_patterns(&self) -> Vec<String> {
        self.patterns
            .iter()
            .filter(|p| !p.matched.get())
            .map(|p| p.original.clone())
            .collect()
    }
}

/// A single exclusion pattern with its compiled matcher
#[derive(Debug)]
struct ExcludePattern {
    original: String,
    matcher: PatternMatcher,
    matched: Cell<bool>,
}

impl ExcludePattern {
    fn new(pattern: String) -> Result<Self> {
        validate_pattern(&pattern)?;
        let matcher = PatternMatcher::compile(&pattern);

        Ok(Self {
            original: pattern,
            matcher,
            matched: Cell::new(false),
        })
    }

    fn matches(&self, coordinate: &str) -> bool {
        let is_match = self.matcher.matches(coordinate);
        if is_match {
            self.matched.set(true);
        }
        is_match
    }
}

#[derive(Debug)]
enum PatternMatcher {
    /// "org.slf4j:slf4j-api"
    Exact(String),
    /// "*:junit"
    EndsWith(String),
    /// "org.springframework*"
    StartsWith(String),
    /// "*logging*"
    Contains(String),
    /// "org.*:*-core" - parts must appear in order, anchored where the
    /// pattern does not start or end with '*'
    Glob {
        parts: Vec<String>,
        anchored_start: bool,
        anchored_end: bool,
    },
}

impl PatternMatcher {
    fn compile(pattern: &str) -> Self {
        let anchored_start = !pattern.starts_with('*');
        let anchored_end = !pattern.ends_with('*');
        let parts: Vec<String> = pattern
            .split('*')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        match (parts.as_slice(), anchored_start, anchored_end) {
            ([only], true, true) => PatternMatcher::Exact(only.clone()),
            ([only], false, true) => PatternMatcher::EndsWith(only.clone()),
            ([only], true, false) => PatternMatcher::StartsWith(only.clone()),
            ([only], false, false) => PatternMatcher::Contains(only.clone()),
            _ => PatternMatcher::Glob {
                parts,
                anchored_start,
                anchored_end,
            },
        }
    }

    fn matches(&self, coordinate: &str) -> bool {
        match self {
            PatternMatcher::Exact(s) => coordinate == s,
            PatternMatcher::EndsWith(suffix) => coordinate.ends_with(suffix.as_str()),
            PatternMatcher::StartsWith(prefix) => coordinate.starts_with(prefix.as_str()),
            PatternMatcher::Contains(middle) => coordinate.contains(middle.as_str()),
            PatternMatcher::Glob {
                parts,
                anchored_start,
                anchored_end,
            } => glob_matches(coordinate, parts, *anchored_start, *anchored_end),
        }
    }
}

fn glob_matches(text: &str, parts: &[String], anchored_start: bool, anchored_end: bool) -> bool {
    let (first, rest) = match parts.split_first() {
        Some(split) => split,
        None => return true,
    };

    let mut position = if anchored_start {
        if !text.starts_with(first.as_str()) {
            return false;
        }
        first.len()
    } else {
        match text.find(first.as_str()) {
            Some(found) => found + first.len(),
            None => return false,
        }
    };

    for (i, part) in rest.iter().enumerate() {
        let is_last = i + 1 == rest.len();
        if is_last && anchored_end {
            return text.len() >= position + part.len() && text[position..].ends_with(part.as_str());
        }
        match text[position..].find(part.as_str()) {
            Some(found) => position += found + part.len(),
            None => return false,
        }
    }

    !anchored_end || (rest.is_empty() && position == text.len())
}

fn validate_pattern(pattern: &str) -> Result<()> {
    let invalid = |message: String| -> Result<()> {
        Err(RecommendError::Validation { message }.into())
    };

    if pattern.is_empty() {
        return invalid("Exclusion pattern cannot be empty".to_string());
    }

    if pattern.len() > MAX_PATTERN_LENGTH {
        return invalid(format!(
            "Exclusion pattern is too long: {} chars. Maximum: {} chars",
            pattern.len(),
            MAX_PATTERN_LENGTH
        ));
    }

    if let Some(ch) = pattern.chars().find(|c| !is_valid_pattern_char(*c)) {
        return invalid(format!(
            "Exclusion pattern contains invalid character '{}' in pattern '{}'. \
             Only alphanumeric, hyphens, underscores, dots, colons, brackets, and asterisks (*) are allowed.",
            ch, pattern
        ));
    }

    if pattern.chars().all(|c| c == '*') {
        return invalid(format!(
            "Exclusion pattern cannot contain only wildcards: '{}'",
            pattern
        ));
    }

    Ok(())
}

fn is_valid_pattern_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | ':' | '[' | ']' | '*')
}
