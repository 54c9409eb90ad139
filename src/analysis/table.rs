//! Count tables keyed by signs, sign windows and positions

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// Ordered pair of consecutive signs
pub type Bigram = [String; 2];
/// Ordered triple of consecutive signs
pub type Trigram = [String; 3];
/// Absolute zero-based position paired with the sign found there
pub type PositionKey = (usize, String);

/// Mapping from key to occurrence count with an implicit zero default
///
/// Keys are only stored once counted, so every stored count is positive and
/// the sum of counts equals the number of observations folded in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable<K: Eq + Hash> {
    counts: HashMap<K, usize>,
}

impl<K: Eq + Hash> Default for FrequencyTable<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash> FrequencyTable<K> {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }

    /// Count one more occurrence of `key`
    pub fn increment(&mut self, key: K) {
        self.add(key, 1);
    }

    /// Count `count` more occurrences of `key`
    pub fn add(&mut self, key: K, count: usize) {
        if count == 0 {
            return;
        }
        *self.counts.entry(key).or_insert(0) += count;
    }

    /// Occurrences of `key`, zero when never counted
    pub fn get<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Whether `key` has been counted at least once
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.counts.contains_key(key)
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether nothing has been counted
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Keys with their counts, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.counts.iter().map(|(key, &count)| (key, count))
    }

    /// Fold another table's counts into this one
    pub fn merge(&mut self, other: Self) {
        for (key, count) in other.counts {
            self.add(key, count);
        }
    }
}

/// Count every window of `N` consecutive signs
///
/// Sequences shorter than `N` contribute nothing.
pub fn count_windows<const N: usize>(table: &mut FrequencyTable<[String; N]>, signs: &[String]) {
    if N == 0 {
        return;
    }
    for window in signs.windows(N) {
        if let Ok(gram) = <&[String; N]>::try_from(window) {
            table.increment(gram.clone());
        }
    }
}

/// The last `N` signs of a sequence, if it has that many
pub fn tail_gram<const N: usize>(signs: &[String]) -> Option<[String; N]> {
    let start = signs.len().checked_sub(N)?;
    let tail = signs.get(start..)?;
    <&[String; N]>::try_from(tail).ok().cloned()
}

/// Text form of a table key as written into reports
pub trait KeyLabel {
    /// Render the key, joining composite keys with single spaces
    fn label(&self) -> String;
}

impl KeyLabel for String {
    fn label(&self) -> String {
        self.clone()
    }
}

impl<const N: usize> KeyLabel for [String; N] {
    fn label(&self) -> String {
        self.join(" ")
    }
}
