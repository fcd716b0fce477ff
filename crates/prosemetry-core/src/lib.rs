//! Core library for prosemetry.
//!
//! Quantitative style metrics over prose: a segmenter, a set of independent
//! feature extractors that each score one heuristic, a weighted aggregator
//! that turns those scores into a likelihood tier, and a descriptive quality
//! profile with a two-document comparison.
//!
//! # Modules
//!
//! - [`text`] - Segmentation into paragraphs, sentences and words
//! - [`features`] - Feature extractors and their result types
//! - [`aggregate`] - Weighted aggregation and tiers
//! - [`profile`] / [`compare`] - Quality statistics and deltas
//! - [`engine`] - Configured pipeline and convenience entry points
//! - [`lexicon`] / [`word_lists`] - Word lists used by the extractors
//! - [`markdown`] - Markdown-to-prose stripping
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use prosemetry_core::{Tier, detect};
//!
//! let result = detect("The cat sat on the mat. It was warm. Then it slept.").unwrap();
//! assert!(result.overall_score <= 1.0);
//! assert_ne!(result.tier, Tier::VeryHigh);
//! ```
#![deny(unsafe_code)]

pub mod aggregate;
pub mod compare;
pub mod config;
pub mod engine;
pub mod error;
pub mod features;
pub mod lexicon;
pub mod markdown;
pub mod profile;
pub mod stats;
pub mod text;
pub mod word_lists;

pub use aggregate::{AnalysisResult, TextStats, Tier, WeightTable, aggregate, aggregate_with};
pub use compare::{ComparisonRow, Delta, ProfileComparison, compare};
pub use config::{Config, ConfigLoader, ConfigSources, DEFAULT_MAX_INPUT_BYTES, LogLevel};
pub use engine::{Engine, detect, profile};
pub use error::{ConfigError, ConfigResult, EngineError, EngineResult};
pub use features::{ALL_FEATURES, Feature, FeatureSet, IssueTag, Measurements, MetricResult};
pub use lexicon::{Lexicon, LexiconExtensions};
pub use profile::{QualityProfile, QualityProfiler};
pub use text::{Document, segment};
