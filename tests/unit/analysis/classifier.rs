//! Tests for suffix candidacy thresholds and sign profiles

#[cfg(test)]
mod tests {
    use crate::{inscriptions, random_corpus};
    use signstats::analysis::aggregate::aggregate;
    use signstats::analysis::classifier::{
        SignProfile, SuffixThresholds, is_suffix_candidate, safe_ratio,
    };
    use signstats::analysis::suffix::SuffixStats;
    use signstats::corpus::SequenceFilter;

    // Tests the scenario sign B flips at a ratio threshold above one half
    // Verified by using a strict comparison against the ratio threshold
    #[test]
    fn test_scenario_threshold_boundary() {
        let corpus = inscriptions(&[&["A", "B", "C"], &["A", "B"]]);
        let stats: SuffixStats = aggregate(&corpus, &SequenceFilter::new(5).unwrap());

        let lenient = SuffixThresholds::new(1, 0.5).unwrap();
        assert!(stats.profile("B", &lenient).is_candidate);

        let strict = SuffixThresholds::new(1, 0.6).unwrap();
        assert!(!stats.profile("B", &strict).is_candidate);
    }

    // Tests both floors are required
    // Verified by joining the conditions with OR
    #[test]
    fn test_both_conditions_required() {
        let thresholds = SuffixThresholds::new(3, 0.7).unwrap();

        // Always final but too rare
        assert!(!is_suffix_candidate(2, 2, &thresholds));
        // Often final but mostly elsewhere
        assert!(!is_suffix_candidate(100, 30, &thresholds));
        assert!(is_suffix_candidate(10, 7, &thresholds));
        assert!(is_suffix_candidate(3, 3, &thresholds));
    }

    // Tests a sign with no occurrences is never flagged, even with zero floors
    #[test]
    fn test_zero_total_never_candidate() {
        let thresholds = SuffixThresholds::new(0, 0.0).unwrap();
        assert!(!is_suffix_candidate(0, 0, &thresholds));
        assert!(is_suffix_candidate(1, 0, &thresholds));
    }

    // Tests ratio thresholds outside [0, 1] are configuration errors
    #[test]
    fn test_invalid_ratio_rejected() {
        assert!(SuffixThresholds::new(3, 1.5).is_err());
        assert!(SuffixThresholds::new(3, -0.1).is_err());
        assert!(SuffixThresholds::new(3, f64::NAN).is_err());
        assert!(SuffixThresholds::new(3, f64::INFINITY).is_err());
        assert!(SuffixThresholds::new(0, 0.0).is_ok());
        assert!(SuffixThresholds::new(0, 1.0).is_ok());
    }

    // Tests the default thresholds
    #[test]
    fn test_default_thresholds() {
        let thresholds = SuffixThresholds::default();
        assert_eq!(thresholds.min_final(), 3);
        assert!((thresholds.ratio() - 0.7).abs() < f64::EPSILON);
    }

    // Tests raising either threshold can only remove candidates
    // Verified by inverting the minimum final comparison
    #[test]
    fn test_classification_is_monotone() {
        let corpus = random_corpus(11, 600, 5, 7);
        let stats: SuffixStats = aggregate(&corpus, &SequenceFilter::new(5).unwrap());

        let ratios = [0.0, 0.1, 0.25, 0.4, 0.5, 0.7, 0.9, 1.0];
        for min_final in 0..6 {
            for window in ratios.windows(2) {
                let (Some(&low), Some(&high)) = (window.first(), window.last()) else {
                    continue;
                };
                let looser = SuffixThresholds::new(min_final, low).unwrap();
                let tighter_ratio = SuffixThresholds::new(min_final, high).unwrap();
                let tighter_count = SuffixThresholds::new(min_final + 1, low).unwrap();

                for (sign, _) in stats.totals().iter() {
                    let base = stats.profile(sign, &looser).is_candidate;
                    if stats.profile(sign, &tighter_ratio).is_candidate {
                        assert!(base, "raising the ratio added {sign}");
                    }
                    if stats.profile(sign, &tighter_count).is_candidate {
                        assert!(base, "raising min_final added {sign}");
                    }
                }
            }
        }
    }

    // Tests profile fields derive from the raw accumulators
    #[test]
    fn test_profile_classify() {
        let thresholds = SuffixThresholds::new(2, 0.5).unwrap();
        let profile = SignProfile::classify("S7", 8, 6, 20, &thresholds);

        assert_eq!(profile.sign, "S7");
        assert_eq!(profile.total, 8);
        assert_eq!(profile.final_count, 6);
        assert!((profile.final_ratio - 0.75).abs() < f64::EPSILON);
        assert!((profile.average_position - 2.5).abs() < f64::EPSILON);
        assert!(profile.is_candidate);
    }

    // Tests the zero-guarded ratio
    #[test]
    fn test_safe_ratio() {
        assert!(safe_ratio(0, 0).abs() < f64::EPSILON);
        assert!(safe_ratio(5, 0).abs() < f64::EPSILON);
        assert!((safe_ratio(1, 4) - 0.25).abs() < f64::EPSILON);
    }
}
