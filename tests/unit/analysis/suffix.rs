//! Tests for per-sign final-position statistics

#[cfg(test)]
mod tests {
    use crate::{inscriptions, random_corpus};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use signstats::analysis::aggregate::{SequenceAggregate, aggregate};
    use signstats::analysis::classifier::SuffixThresholds;
    use signstats::analysis::suffix::SuffixStats;
    use signstats::corpus::SequenceFilter;

    fn scenario() -> SuffixStats {
        let corpus = inscriptions(&[&["A", "B", "C"], &["A", "B"]]);
        aggregate(&corpus, &SequenceFilter::new(5).unwrap())
    }

    // Tests totals, finals and derived ratios for the two-inscription scenario
    // Verified by counting the first sign as final
    #[test]
    fn test_scenario_statistics() {
        let stats = scenario();

        assert_eq!(stats.total("B"), 2);
        assert_eq!(stats.final_count("B"), 1);
        assert_eq!(stats.position_sum("B"), 2);
        assert!((stats.final_ratio("B") - 0.5).abs() < f64::EPSILON);
        assert!((stats.average_position("B") - 1.0).abs() < f64::EPSILON);

        assert_eq!(stats.total("A"), 2);
        assert_eq!(stats.final_count("A"), 0);
        assert!(stats.average_position("A").abs() < f64::EPSILON);

        assert_eq!(stats.final_count("C"), 1);
        assert!((stats.final_ratio("C") - 1.0).abs() < f64::EPSILON);
        assert!((stats.average_position("C") - 2.0).abs() < f64::EPSILON);
    }

    // Tests closing bigrams and trigrams only come from sequence ends
    // Verified by counting every bigram as final
    #[test]
    fn test_final_ngrams() {
        let stats = scenario();

        let ab = ["A".to_string(), "B".to_string()];
        let bc = ["B".to_string(), "C".to_string()];
        let abc = ["A".to_string(), "B".to_string(), "C".to_string()];

        assert_eq!(stats.final_bigrams().get(&ab), 1);
        assert_eq!(stats.final_bigrams().get(&bc), 1);
        assert_eq!(stats.final_bigrams().total(), 2);
        assert_eq!(stats.final_trigrams().get(&abc), 1);
        assert_eq!(stats.final_trigrams().total(), 1);
    }

    // Tests signs never seen report zero ratios instead of dividing by zero
    #[test]
    fn test_unseen_sign_ratios_are_zero() {
        let stats = scenario();

        assert_eq!(stats.total("Z"), 0);
        assert!(stats.final_ratio("Z").abs() < f64::EPSILON);
        assert!(stats.average_position("Z").abs() < f64::EPSILON);
        assert!(!stats.profile("Z", &SuffixThresholds::default()).is_candidate);
    }

    // Tests the final count never exceeds the total for any sign
    #[test]
    fn test_final_never_exceeds_total() {
        for seed in 0..10 {
            let corpus = random_corpus(seed, 250, 7, 8);
            let stats: SuffixStats = aggregate(&corpus, &SequenceFilter::new(5).unwrap());

            for (sign, total) in stats.totals().iter() {
                assert!(
                    stats.final_count(sign) <= total,
                    "sign {sign} has final {} > total {total}",
                    stats.final_count(sign)
                );
            }

            let single_sign = corpus
                .iter()
                .filter(|inscription| inscription.len() == 1)
                .count();
            assert_eq!(
                stats.finals().total(),
                stats.final_bigrams().total() + single_sign
            );
        }
    }

    // Tests permuting the corpus leaves every accumulator unchanged
    // Verified by making position sums depend on record order
    #[test]
    fn test_order_independence() {
        let corpus = random_corpus(7, 400, 6, 9);
        let filter = SequenceFilter::new(5).unwrap();
        let original: SuffixStats = aggregate(&corpus, &filter);

        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..5 {
            let mut shuffled = corpus.clone();
            shuffled.shuffle(&mut rng);
            let permuted: SuffixStats = aggregate(&shuffled, &filter);
            assert_eq!(original, permuted);
        }
    }

    // Tests merged shards equal a single pass, including position sums
    #[test]
    fn test_merge_matches_single_pass() {
        let corpus = random_corpus(3, 300, 6, 9);
        let filter = SequenceFilter::new(6).unwrap();
        let whole: SuffixStats = aggregate(&corpus, &filter);

        let mut merged = SuffixStats::default();
        for shard in corpus.chunks(64) {
            merged.merge(aggregate(shard, &filter));
        }

        assert_eq!(whole, merged);
    }

    // Tests profiles are ordered by descending total with sign as tie-break
    #[test]
    fn test_profiles_order() {
        let stats = scenario();
        let profiles = stats.profiles(&SuffixThresholds::default());

        let order: Vec<&str> = profiles.iter().map(|p| p.sign.as_str()).collect();
        assert_eq!(order, vec!["A", "B", "C"]);
    }

    // Tests candidates are the flagged subset of profiles
    #[test]
    fn test_candidates_subset() {
        let stats = scenario();
        let thresholds = SuffixThresholds::new(1, 0.5).unwrap();

        let candidates: Vec<String> = stats
            .candidates(&thresholds)
            .into_iter()
            .map(|profile| profile.sign)
            .collect();
        assert_eq!(candidates, vec!["B".to_string(), "C".to_string()]);
    }

    // Tests recording a single sequence without the filter
    #[test]
    fn test_record_repeated_sign() {
        let mut stats = SuffixStats::default();
        let signs: Vec<String> = ["K", "K", "K"].iter().map(|s| (*s).to_string()).collect();
        stats.record(&signs);

        assert_eq!(stats.total("K"), 3);
        assert_eq!(stats.final_count("K"), 1);
        assert_eq!(stats.position_sum("K"), 3);
        assert!((stats.average_position("K") - 1.0).abs() < f64::EPSILON);
    }
}
