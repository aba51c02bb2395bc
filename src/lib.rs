//! Configuration surface for a CSS selector-pruning build tool.
//!
//! A [`PruneConfig`] names the content files to scan for used selector
//! tokens, the stylesheets to prune, and the [`Extractor`]s that map source
//! text to candidate tokens. The pruning engine itself, file-system
//! traversal, and stylesheet rewriting live in the consuming tool; this
//! crate only carries the declarative contract and the pure extraction
//! rules, so everything here is cheap to clone and safe to share across
//! threads.

pub mod config;
pub mod errors;
pub mod extractor;

pub use config::{Extractor, PruneConfig};
pub use errors::{ConfigError, Result};
pub use extractor::{tokens, ExtractionRule, TOKEN_PATTERN};
