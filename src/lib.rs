//! Frequency, positional and suffix statistics for inscription corpora
//!
//! Inscriptions are short sequences of discrete sign tokens. The crate folds a
//! corpus into unigram, bigram, trigram, positional and terminal counts, tracks
//! where each sign occurs, and flags signs that close sequences often enough to
//! behave like grammatical suffixes.

#![forbid(unsafe_code)]

/// Aggregation, suffix classification and report ordering
pub mod analysis;
/// Corpus records, loading, normalization and length filtering
pub mod corpus;
/// Input/output operations and error handling
pub mod io;

pub use analysis::aggregate::{AnalysisConfig, CorpusAnalysis, analyze};
pub use io::error::{AnalysisError, Result};
