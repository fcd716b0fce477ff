//! Error types for prosemetry-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while preparing or running an analysis.
///
/// Feature extractors themselves never fail; these errors come from the
/// entry points that validate input or assemble a feature set.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The input text is empty or whitespace-only.
    #[error("no scorable text in input")]
    EmptyInput,

    /// A feature name was requested that no registered extractor provides.
    #[error("unknown feature: {name}. Use: {available}")]
    UnknownFeature {
        /// The feature name that was requested.
        name: String,
        /// Comma-separated list of available feature names.
        available: String,
    },

    /// A phrase matcher could not be built from the lexicon.
    #[error("failed to build phrase matcher: {0}")]
    PatternBuild(#[from] aho_corasick::BuildError),

    /// A passive-voice pattern could not be compiled from the lexicon.
    #[error("failed to compile pattern: {0}")]
    Regex(#[from] regex::Error),
}

/// Result type alias using [`EngineError`].
pub type EngineResult<T> = Result<T, EngineError>;
