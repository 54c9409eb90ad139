//! Unigram, positional, terminal, bigram and trigram counting

use crate::analysis::aggregate::SequenceAggregate;
use crate::analysis::table::{Bigram, FrequencyTable, PositionKey, Trigram, count_windows};

/// The five frequency tables built from admitted sequences
///
/// For a sequence `t[0..L)` each table receives:
/// - `signs`: every `t[i]`
/// - `positional`: every `(i, t[i])`, keyed by absolute position
/// - `terminal`: `t[L-1]` once
/// - `bigrams`: every `(t[i], t[i+1])`, none when `L < 2`
/// - `trigrams`: every `(t[i], t[i+1], t[i+2])`, none when `L < 3`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTables {
    /// Sign occurrences anywhere in a sequence
    pub signs: FrequencyTable<String>,
    /// Sign occurrences by absolute position
    pub positional: FrequencyTable<PositionKey>,
    /// Last sign of each sequence
    pub terminal: FrequencyTable<String>,
    /// Consecutive sign pairs
    pub bigrams: FrequencyTable<Bigram>,
    /// Consecutive sign triples
    pub trigrams: FrequencyTable<Trigram>,
}

impl SequenceAggregate for FrequencyTables {
    fn record(&mut self, signs: &[String]) {
        for (position, sign) in signs.iter().enumerate() {
            self.signs.increment(sign.clone());
            self.positional.increment((position, sign.clone()));
        }

        if let Some(last) = signs.last() {
            self.terminal.increment(last.clone());
        }

        count_windows(&mut self.bigrams, signs);
        count_windows(&mut self.trigrams, signs);
    }

    fn merge(&mut self, other: Self) {
        self.signs.merge(other.signs);
        self.positional.merge(other.positional);
        self.terminal.merge(other.terminal);
        self.bigrams.merge(other.bigrams);
        self.trigrams.merge(other.trigrams);
    }
}
