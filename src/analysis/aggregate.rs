//! Analysis entry point folding a corpus into every table in one pass
//!
//! Every table sees only inscriptions the length filter admits. The transition
//! model follows the same gate by default; [`TransitionScope::All`] widens it to
//! every inscription, which reproduces a bigram model trained on the raw corpus.

use crate::analysis::classifier::{SignProfile, SuffixThresholds};
use crate::analysis::frequency::FrequencyTables;
use crate::analysis::suffix::SuffixStats;
use crate::analysis::transitions::TransitionModel;
use crate::corpus::filter::SequenceFilter;
use crate::corpus::inscription::Inscription;
use crate::io::configuration::{DEFAULT_MAX_LEN, DEFAULT_MIN_FINAL, DEFAULT_SUFFIX_RATIO};
use crate::io::error::Result;

/// Accumulator fed with admitted sign sequences
///
/// Recording is associative and commutative over sequences, so aggregates
/// built from disjoint shards and merged equal one built from the whole corpus.
pub trait SequenceAggregate: Default {
    /// Fold one admitted sequence into the accumulator
    fn record(&mut self, signs: &[String]);

    /// Sum another accumulator's counts into this one
    fn merge(&mut self, other: Self);
}

/// Fold every inscription the filter admits into a fresh aggregate
pub fn aggregate<'a, A, I>(inscriptions: I, filter: &SequenceFilter) -> A
where
    A: SequenceAggregate,
    I: IntoIterator<Item = &'a Inscription>,
{
    let mut aggregate = A::default();
    for inscription in inscriptions {
        if filter.admits(inscription.signs()) {
            aggregate.record(inscription.signs());
        }
    }
    aggregate
}

/// Inscriptions that feed the transition model
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TransitionScope {
    /// Only inscriptions the length filter admits
    #[default]
    Admitted,
    /// Every inscription regardless of length
    All,
}

/// Parameters shared by every aggregator in a run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisConfig {
    /// Longest admitted inscription, inclusive
    pub max_len: usize,
    /// Minimum final occurrences for a suffix candidate
    pub min_final: usize,
    /// Minimum final/total ratio for a suffix candidate
    pub suffix_ratio_threshold: f64,
    /// Whether the transition model is gated by the length filter
    pub transition_scope: TransitionScope,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_len: DEFAULT_MAX_LEN,
            min_final: DEFAULT_MIN_FINAL,
            suffix_ratio_threshold: DEFAULT_SUFFIX_RATIO,
            transition_scope: TransitionScope::Admitted,
        }
    }
}

impl AnalysisConfig {
    /// Check every parameter before any corpus is touched
    ///
    /// # Errors
    ///
    /// Returns an error if `max_len` is zero or the ratio threshold is not a
    /// finite value in `[0, 1]`
    pub fn validate(&self) -> Result<()> {
        self.filter()?;
        self.thresholds()?;
        Ok(())
    }

    /// Length filter for this run
    ///
    /// # Errors
    ///
    /// Returns an error if `max_len` is zero
    pub fn filter(&self) -> Result<SequenceFilter> {
        SequenceFilter::new(self.max_len)
    }

    /// Suffix classification thresholds for this run
    ///
    /// # Errors
    ///
    /// Returns an error if the ratio threshold is out of range
    pub fn thresholds(&self) -> Result<SuffixThresholds> {
        SuffixThresholds::new(self.min_final, self.suffix_ratio_threshold)
    }
}

/// Every table computed for one corpus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusAnalysis {
    /// Unigram, positional, terminal, bigram and trigram counts
    pub frequencies: FrequencyTables,
    /// Per-sign totals, finals and position sums with closing n-grams
    pub suffixes: SuffixStats,
    /// Successor counts between consecutive signs
    pub transitions: TransitionModel,
    /// Inscriptions that passed the length filter
    pub admitted: usize,
    /// Inscriptions excluded by the length filter
    pub rejected: usize,
    filter: SequenceFilter,
    transition_scope: TransitionScope,
}

impl CorpusAnalysis {
    /// Create an empty analysis gated by `filter`
    pub fn new(filter: SequenceFilter) -> Self {
        Self::with_scope(filter, TransitionScope::Admitted)
    }

    /// Create an empty analysis for a validated configuration
    ///
    /// # Errors
    ///
    /// Returns an error if `max_len` is zero
    pub fn from_config(config: &AnalysisConfig) -> Result<Self> {
        Ok(Self::with_scope(config.filter()?, config.transition_scope))
    }

    fn with_scope(filter: SequenceFilter, transition_scope: TransitionScope) -> Self {
        Self {
            frequencies: FrequencyTables::default(),
            suffixes: SuffixStats::default(),
            transitions: TransitionModel::default(),
            admitted: 0,
            rejected: 0,
            filter,
            transition_scope,
        }
    }

    /// Filter applied to observed inscriptions
    pub const fn filter(&self) -> SequenceFilter {
        self.filter
    }

    /// Inscriptions the transition model is built from
    pub const fn transition_scope(&self) -> TransitionScope {
        self.transition_scope
    }

    /// Fold one inscription into every table if the filter admits it
    ///
    /// Rejected inscriptions still reach the transition model when its scope
    /// is [`TransitionScope::All`]. Returns whether the inscription was admitted.
    pub fn observe(&mut self, inscription: &Inscription) -> bool {
        let signs = inscription.signs();
        if !self.filter.admits(signs) {
            log::trace!(
                "skipping inscription {} with {} signs",
                inscription.id.as_deref().unwrap_or("<unnamed>"),
                signs.len()
            );
            if self.transition_scope == TransitionScope::All {
                self.transitions.record(signs);
            }
            self.rejected += 1;
            return false;
        }

        self.frequencies.record(signs);
        self.suffixes.record(signs);
        self.transitions.record(signs);
        self.admitted += 1;
        true
    }

    /// Sum the counts of an analysis built from another shard of the corpus
    pub fn merge(&mut self, other: Self) {
        self.frequencies.merge(other.frequencies);
        self.suffixes.merge(other.suffixes);
        self.transitions.merge(other.transitions);
        self.admitted += other.admitted;
        self.rejected += other.rejected;
    }

    /// Classified per-sign rows, ordered by descending total
    pub fn profiles(&self, thresholds: &SuffixThresholds) -> Vec<SignProfile> {
        self.suffixes.profiles(thresholds)
    }
}

/// Validate `config` and fold every inscription into a new analysis
///
/// # Errors
///
/// Returns an error if the configuration is invalid; nothing is aggregated then
pub fn analyze<'a, I>(inscriptions: I, config: &AnalysisConfig) -> Result<CorpusAnalysis>
where
    I: IntoIterator<Item = &'a Inscription>,
{
    config.validate()?;
    let mut analysis = CorpusAnalysis::from_config(config)?;
    for inscription in inscriptions {
        analysis.observe(inscription);
    }
    Ok(analysis)
}
