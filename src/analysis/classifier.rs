//! Suffix candidacy heuristic over final-position statistics

use crate::io::configuration::{DEFAULT_MIN_FINAL, DEFAULT_SUFFIX_RATIO};
use crate::io::error::{Result, invalid_parameter};

/// Cutoffs a sign must meet to be flagged as a suffix candidate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuffixThresholds {
    min_final: usize,
    ratio: f64,
}

impl Default for SuffixThresholds {
    fn default() -> Self {
        Self {
            min_final: DEFAULT_MIN_FINAL,
            ratio: DEFAULT_SUFFIX_RATIO,
        }
    }
}

impl SuffixThresholds {
    /// Create thresholds from an absolute final-count floor and a ratio floor
    ///
    /// # Errors
    ///
    /// Returns an error if `ratio` is not a finite value in `[0, 1]`
    pub fn new(min_final: usize, ratio: f64) -> Result<Self> {
        if !ratio.is_finite() || !(0.0..=1.0).contains(&ratio) {
            return Err(invalid_parameter(
                "suffix_ratio_threshold",
                &ratio,
                &"must be a finite value between 0 and 1",
            ));
        }
        Ok(Self { min_final, ratio })
    }

    /// Minimum number of final occurrences
    pub const fn min_final(&self) -> usize {
        self.min_final
    }

    /// Minimum fraction of occurrences that must be final
    pub const fn ratio(&self) -> f64 {
        self.ratio
    }
}

/// `part / total`, or `0.0` when `total` is zero
pub const fn safe_ratio(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64
    }
}

/// Whether a sign with these counts behaves like a suffix
///
/// Both floors must hold: a rare sign that always closes a sequence fails the
/// absolute count, a frequent sign with a modest tail presence fails the ratio.
/// Signs never seen are never candidates.
pub const fn is_suffix_candidate(
    total: usize,
    final_count: usize,
    thresholds: &SuffixThresholds,
) -> bool {
    total > 0
        && final_count >= thresholds.min_final
        && safe_ratio(final_count, total) >= thresholds.ratio
}

/// Classified statistics for one sign
#[derive(Debug, Clone, PartialEq)]
pub struct SignProfile {
    /// The sign described
    pub sign: String,
    /// Occurrences anywhere
    pub total: usize,
    /// Occurrences as the last sign of a sequence
    pub final_count: usize,
    /// `final_count / total`
    pub final_ratio: f64,
    /// Mean zero-based position
    pub average_position: f64,
    /// Whether the sign passed both suffix thresholds
    pub is_candidate: bool,
}

impl SignProfile {
    /// Derive a profile from raw accumulators
    pub fn classify(
        sign: impl Into<String>,
        total: usize,
        final_count: usize,
        position_sum: usize,
        thresholds: &SuffixThresholds,
    ) -> Self {
        Self {
            sign: sign.into(),
            total,
            final_count,
            final_ratio: safe_ratio(final_count, total),
            average_position: safe_ratio(position_sum, total),
            is_candidate: is_suffix_candidate(total, final_count, thresholds),
        }
    }
}
