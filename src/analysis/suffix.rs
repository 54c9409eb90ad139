//! Final-position statistics per sign

use crate::analysis::aggregate::SequenceAggregate;
use crate::analysis::classifier::{SignProfile, SuffixThresholds, safe_ratio};
use crate::analysis::ordering::rank_profiles;
use crate::analysis::table::{Bigram, FrequencyTable, Trigram, tail_gram};
use std::collections::HashMap;

/// Accumulates how often and where each sign occurs, and how sequences end
///
/// `final_count(s) <= total(s)` holds for every sign since each final
/// occurrence is also counted in the total.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuffixStats {
    totals: FrequencyTable<String>,
    finals: FrequencyTable<String>,
    position_sums: HashMap<String, usize>,
    final_bigrams: FrequencyTable<Bigram>,
    final_trigrams: FrequencyTable<Trigram>,
}

impl SequenceAggregate for SuffixStats {
    fn record(&mut self, signs: &[String]) {
        for (position, sign) in signs.iter().enumerate() {
            self.totals.increment(sign.clone());
            *self.position_sums.entry(sign.clone()).or_insert(0) += position;
        }

        if let Some(last) = signs.last() {
            self.finals.increment(last.clone());
        }
        if let Some(bigram) = tail_gram::<2>(signs) {
            self.final_bigrams.increment(bigram);
        }
        if let Some(trigram) = tail_gram::<3>(signs) {
            self.final_trigrams.increment(trigram);
        }
    }

    fn merge(&mut self, other: Self) {
        self.totals.merge(other.totals);
        self.finals.merge(other.finals);
        for (sign, sum) in other.position_sums {
            *self.position_sums.entry(sign).or_insert(0) += sum;
        }
        self.final_bigrams.merge(other.final_bigrams);
        self.final_trigrams.merge(other.final_trigrams);
    }
}

impl SuffixStats {
    /// Occurrences of `sign` anywhere
    pub fn total(&self, sign: &str) -> usize {
        self.totals.get(sign)
    }

    /// Occurrences of `sign` as the last sign
    pub fn final_count(&self, sign: &str) -> usize {
        self.finals.get(sign)
    }

    /// Sum of zero-based positions `sign` occurred at
    pub fn position_sum(&self, sign: &str) -> usize {
        self.position_sums.get(sign).copied().unwrap_or(0)
    }

    /// Fraction of occurrences that were final, `0.0` for unseen signs
    pub fn final_ratio(&self, sign: &str) -> f64 {
        safe_ratio(self.final_count(sign), self.total(sign))
    }

    /// Mean zero-based position, `0.0` for unseen signs
    pub fn average_position(&self, sign: &str) -> f64 {
        safe_ratio(self.position_sum(sign), self.total(sign))
    }

    /// Per-sign occurrence totals
    pub const fn totals(&self) -> &FrequencyTable<String> {
        &self.totals
    }

    /// Per-sign final occurrence counts
    pub const fn finals(&self) -> &FrequencyTable<String> {
        &self.finals
    }

    /// Counts of the last two signs of sequences with at least two signs
    pub const fn final_bigrams(&self) -> &FrequencyTable<Bigram> {
        &self.final_bigrams
    }

    /// Counts of the last three signs of sequences with at least three signs
    pub const fn final_trigrams(&self) -> &FrequencyTable<Trigram> {
        &self.final_trigrams
    }

    /// Classified statistics for one sign
    pub fn profile(&self, sign: &str, thresholds: &SuffixThresholds) -> SignProfile {
        SignProfile::classify(
            sign,
            self.total(sign),
            self.final_count(sign),
            self.position_sum(sign),
            thresholds,
        )
    }

    /// Classified statistics for every seen sign, by descending total
    pub fn profiles(&self, thresholds: &SuffixThresholds) -> Vec<SignProfile> {
        let mut profiles: Vec<SignProfile> = self
            .totals
            .iter()
            .map(|(sign, _)| self.profile(sign, thresholds))
            .collect();
        rank_profiles(&mut profiles);
        profiles
    }

    /// Signs currently flagged as suffix candidates, by descending total
    pub fn candidates(&self, thresholds: &SuffixThresholds) -> Vec<SignProfile> {
        self.profiles(thresholds)
            .into_iter()
            .filter(|profile| profile.is_candidate)
            .collect()
    }
}
