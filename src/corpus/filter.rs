//! Length gate applied before an inscription reaches any table

use crate::io::error::{Result, invalid_parameter};

/// Admits sequences whose length lies in `1..=max_len`
///
/// Rejected sequences are excluded from every table. They are never
/// truncated or counted with a shorter window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceFilter {
    max_len: usize,
}

impl SequenceFilter {
    /// Create a filter admitting sequences of at most `max_len` signs
    ///
    /// # Errors
    ///
    /// Returns an error if `max_len` is zero, since no sequence could pass
    pub fn new(max_len: usize) -> Result<Self> {
        if max_len == 0 {
            return Err(invalid_parameter(
                "max_len",
                &max_len,
                &"must admit at least one sign",
            ));
        }
        Ok(Self { max_len })
    }

    /// Longest admitted sequence length
    pub const fn max_len(&self) -> usize {
        self.max_len
    }

    /// Whether a sequence of these signs takes part in aggregation
    pub const fn admits(&self, signs: &[String]) -> bool {
        self.admits_len(signs.len())
    }

    /// Whether a sequence of the given length takes part in aggregation
    pub const fn admits_len(&self, len: usize) -> bool {
        len >= 1 && len <= self.max_len
    }
}
