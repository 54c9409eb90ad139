//! Aggregation, classification and ordering of sign statistics

/// Single-pass analysis entry point and the aggregate trait
pub mod aggregate;
/// Suffix candidacy thresholds and classified sign profiles
pub mod classifier;
/// Unigram, positional, terminal, bigram and trigram tables
pub mod frequency;
/// Deterministic report row ordering
pub mod ordering;
/// Final-position statistics per sign
pub mod suffix;
/// Count tables with an implicit zero default
pub mod table;
/// Successor counts between consecutive signs
pub mod transitions;
