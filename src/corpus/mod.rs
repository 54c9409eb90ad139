//! Corpus records and the steps that prepare them for aggregation
//!
//! This module contains:
//! - The inscription record handed to every aggregator
//! - JSON and JSON Lines corpus loading
//! - Allograph normalization
//! - The length filter gating participation in every table

/// Length bounds deciding which inscriptions are aggregated
pub mod filter;
/// Inscription records as ordered sign sequences
pub mod inscription;
/// Corpus loading from JSON documents and JSON Lines streams
pub mod loader;
/// Allograph variant to canonical sign mapping
pub mod normalize;

pub use filter::SequenceFilter;
pub use inscription::Inscription;
