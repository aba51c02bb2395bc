use thiserror::Error;

/// Main error type for the purge-config crate.
///
/// A constructed configuration raises nothing at use time; these variants
/// only surface while loading, compiling, or validating one.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Glob pattern error: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid extraction pattern: {0}")]
    Rule(#[from] regex::Error),

    #[error("Configuration error: {message}")]
    Invalid { message: String },

    #[error("Unsupported config file format: {path}. Use .yaml, .yml, or .json")]
    UnsupportedFormat { path: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
