use crate::errors::{ConfigError, Result};
use crate::extractor::ExtractionRule;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// An extraction rule paired with the file extensions it governs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawExtractor", into = "RawExtractor")]
pub struct Extractor {
    /// Rule applied to files carrying one of `extensions`
    pub rule: ExtractionRule,

    /// Extension strings without the leading dot
    pub extensions: Vec<String>,
}

/// Serialized form of [`Extractor`]. The compiled rule crosses serde as an
/// optional pattern string; absent means the default scan.
#[derive(Debug, Serialize, Deserialize)]
struct RawExtractor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pattern: Option<String>,
    extensions: Vec<String>,
}

impl TryFrom<RawExtractor> for Extractor {
    type Error = ConfigError;

    fn try_from(raw: RawExtractor) -> Result<Self> {
        let rule = match raw.pattern {
            Some(pattern) => ExtractionRule::custom(&pattern)?,
            None => ExtractionRule::Broad,
        };

        Ok(Self {
            rule,
            extensions: raw.extensions,
        })
    }
}

impl From<Extractor> for RawExtractor {
    fn from(extractor: Extractor) -> Self {
        let pattern = match &extractor.rule {
            ExtractionRule::Broad => None,
            ExtractionRule::Custom(re) => Some(re.as_str().to_string()),
        };

        Self {
            pattern,
            extensions: extractor.extensions,
        }
    }
}

impl Extractor {
    /// Create an extractor using the default token scan.
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rule: ExtractionRule::Broad,
            extensions: extensions.into_iter().map(Into::into).collect(),
        }
    }

    /// Create an extractor with a custom extraction pattern.
    pub fn with_pattern<I, S>(pattern: &str, extensions: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self {
            rule: ExtractionRule::custom(pattern)?,
            extensions: extensions.into_iter().map(Into::into).collect(),
        })
    }

    /// Whether this extractor governs the given path's extension.
    pub fn matches(&self, path: &Path) -> bool {
        match path.extension().and_then(|s| s.to_str()) {
            Some(ext) => self.extensions.iter().any(|e| e == ext),
            None => false,
        }
    }

    /// Run this extractor's rule over source text.
    pub fn extract<'a>(&self, content: &'a str) -> Vec<&'a str> {
        self.rule.apply(content)
    }
}

/// Pruning configuration: which files to scan for used selectors, which
/// stylesheets to prune, and the extractors that map source text to
/// candidate tokens.
///
/// Constructed once at build-configuration load time and never mutated
/// afterwards; the pruning engine consuming it is external.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PruneConfig {
    /// Glob patterns for content files to scan
    pub content: Vec<String>,

    /// Stylesheet paths to prune
    pub css: Vec<PathBuf>,

    /// Ordered extractor definitions
    pub extractors: Vec<Extractor>,
}

impl Default for PruneConfig {
    fn default() -> Self {
        Self {
            content: vec!["src/**/*.elm".to_string()],
            css: vec![PathBuf::from("public/dist/style.css")],
            extractors: vec![Extractor::new(["elm"])],
        }
    }
}

// Broad carries no compiled state, so the fallback can live in a static.
static FALLBACK_RULE: ExtractionRule = ExtractionRule::Broad;

impl PruneConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            source: e,
        })?;

        Ok(serde_yaml::from_str(&content)?)
    }

    /// Load configuration from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            source: e,
        })?;

        Ok(serde_json::from_str(&content)?)
    }

    /// Load configuration from a file (auto-detect format)
    pub fn from_file(path: &Path) -> Result<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            Some("json") => Self::from_json_file(path),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.display().to_string(),
            }),
        }
    }

    /// Merge with another configuration.
    ///
    /// Content globs and stylesheet paths are appended when unseen. An
    /// extractor from `other` displaces any existing extractor claiming one
    /// of the same extensions.
    pub fn merge(mut self, other: Self) -> Self {
        for pattern in other.content {
            if !self.content.contains(&pattern) {
                self.content.push(pattern);
            }
        }

        for stylesheet in other.css {
            if !self.css.contains(&stylesheet) {
                self.css.push(stylesheet);
            }
        }

        for extractor in other.extractors {
            self.extractors.retain(|existing| {
                !existing
                    .extensions
                    .iter()
                    .any(|ext| extractor.extensions.contains(ext))
            });
            self.extractors.push(extractor);
        }

        self
    }

    /// Check the configuration's internal consistency.
    ///
    /// Every content glob must parse, extensions carry no leading dot, and
    /// no extension may be claimed by more than one extractor.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.content {
            glob::Pattern::new(pattern)?;
        }

        let mut claimed = HashSet::new();
        for extractor in &self.extractors {
            for ext in &extractor.extensions {
                if ext.is_empty() || ext.starts_with('.') {
                    return Err(ConfigError::Invalid {
                        message: format!(
                            "Extension '{}' must be non-empty and carry no leading dot",
                            ext
                        ),
                    });
                }

                if !claimed.insert(ext.as_str()) {
                    return Err(ConfigError::Invalid {
                        message: format!("Extension '{}' is claimed by more than one extractor", ext),
                    });
                }
            }
        }

        Ok(())
    }

    /// The first extractor governing the given path's extension, if any.
    pub fn extractor_for(&self, path: &Path) -> Option<&Extractor> {
        self.extractors.iter().find(|e| e.matches(path))
    }

    /// The extraction rule to apply to the given path.
    ///
    /// Falls back to the default broad scan when no extractor claims the
    /// extension, so scanning a stray file only over-retains selectors.
    pub fn rule_for(&self, path: &Path) -> &ExtractionRule {
        match self.extractor_for(path) {
            Some(extractor) => &extractor.rule,
            None => &FALLBACK_RULE,
        }
    }

    /// Whether any content glob covers the given path.
    pub fn matches_content(&self, path: &Path) -> Result<bool> {
        for pattern in &self.content {
            if glob::Pattern::new(pattern)?.matches_path(path) {
                return Ok(true);
            }
        }
        Ok(false)
    }
}
