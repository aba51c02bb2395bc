use crate::errors::Result;
use regex::Regex;
use std::sync::OnceLock;

/// Character-class scan used by the default extraction rule.
///
/// Deliberately permissive: it keeps every run of selector-ish characters,
/// so pruning errs toward retaining CSS rather than removing a selector
/// that was actually used.
pub const TOKEN_PATTERN: &str = "[A-Za-z0-9-_:/]+";

fn token_regex() -> &'static Regex {
    static TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();
    TOKEN_REGEX.get_or_init(|| Regex::new(TOKEN_PATTERN).expect("TOKEN_PATTERN is a valid regex"))
}

/// Extract candidate selector tokens from source text.
///
/// Matches are non-overlapping and returned left-to-right. Characters
/// outside the token class act as separators and are dropped. Text with no
/// matching run yields an empty vector; this function never fails.
pub fn tokens(content: &str) -> Vec<&str> {
    token_regex().find_iter(content).map(|m| m.as_str()).collect()
}

/// The token-extraction rule an [`Extractor`](crate::Extractor) applies to
/// the files it governs.
#[derive(Debug, Clone)]
pub enum ExtractionRule {
    /// The default scan over [`TOKEN_PATTERN`].
    Broad,

    /// A caller-supplied pattern, compiled once at construction.
    Custom(Regex),
}

impl ExtractionRule {
    /// Compile a custom extraction pattern.
    pub fn custom(pattern: &str) -> Result<Self> {
        Ok(Self::Custom(Regex::new(pattern)?))
    }

    /// Run the rule over source text.
    ///
    /// Same contract as [`tokens`]: ordered, non-overlapping, empty vector
    /// when nothing matches, pure and stateless.
    pub fn apply<'a>(&self, content: &'a str) -> Vec<&'a str> {
        match self {
            Self::Broad => tokens(content),
            Self::Custom(re) => re.find_iter(content).map(|m| m.as_str()).collect(),
        }
    }

    /// The pattern source this rule scans with.
    pub fn pattern(&self) -> &str {
        match self {
            Self::Broad => TOKEN_PATTERN,
            Self::Custom(re) => re.as_str(),
        }
    }
}

impl Default for ExtractionRule {
    fn default() -> Self {
        Self::Broad
    }
}

impl PartialEq for ExtractionRule {
    fn eq(&self, other: &Self) -> bool {
        self.pattern() == other.pattern()
    }
}
