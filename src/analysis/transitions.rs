//! Bigram transition model: successor counts for each sign

use crate::analysis::aggregate::SequenceAggregate;
use crate::analysis::classifier::safe_ratio;
use crate::io::error::{AnalysisError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// For every sign, how often each other sign directly follows it
///
/// Rows and successors are kept sorted so the serialized model is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransitionModel {
    successors: BTreeMap<String, BTreeMap<String, usize>>,
}

impl SequenceAggregate for TransitionModel {
    fn record(&mut self, signs: &[String]) {
        for pair in signs.windows(2) {
            if let [previous, next] = pair {
                *self
                    .successors
                    .entry(previous.clone())
                    .or_default()
                    .entry(next.clone())
                    .or_insert(0) += 1;
            }
        }
    }

    fn merge(&mut self, other: Self) {
        for (previous, row) in other.successors {
            let target = self.successors.entry(previous).or_default();
            for (next, count) in row {
                *target.entry(next).or_insert(0) += count;
            }
        }
    }
}

impl TransitionModel {
    /// Number of signs with at least one recorded successor
    pub fn len(&self) -> usize {
        self.successors.len()
    }

    /// Whether no transition has been recorded
    pub fn is_empty(&self) -> bool {
        self.successors.is_empty()
    }

    /// Successor counts of `previous`
    pub fn successors(&self, previous: &str) -> Option<&BTreeMap<String, usize>> {
        self.successors.get(previous)
    }

    /// Times `next` directly followed `previous`
    pub fn count(&self, previous: &str, next: &str) -> usize {
        self.successors(previous)
            .and_then(|row| row.get(next))
            .copied()
            .unwrap_or(0)
    }

    /// Transitions recorded out of `previous`
    pub fn row_total(&self, previous: &str) -> usize {
        self.successors(previous).map_or(0, |row| row.values().sum())
    }

    /// Maximum likelihood estimate of P(`next` | `previous`), `0.0` for unseen rows
    pub fn probability(&self, previous: &str, next: &str) -> f64 {
        safe_ratio(self.count(previous, next), self.row_total(previous))
    }

    /// Most frequent successor of `previous`, lowest sign on ties
    pub fn most_likely_successor(&self, previous: &str) -> Option<(&str, usize)> {
        self.successors(previous)?
            .iter()
            .fold(None, |best: Option<(&str, usize)>, (next, &count)| match best {
                Some((_, best_count)) if best_count >= count => best,
                _ => Some((next.as_str(), count)),
            })
    }

    /// Serialize the model as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|source| AnalysisError::Serialization {
            operation: "transition model export",
            source,
        })
    }

    /// Restore a model from its JSON form
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a JSON object of successor counts
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|source| AnalysisError::Serialization {
            operation: "transition model import",
            source,
        })
    }
}
