//! Tests for unigram, positional, terminal, bigram and trigram counting

#[cfg(test)]
mod tests {
    use crate::{inscriptions, random_corpus};
    use signstats::analysis::aggregate::{SequenceAggregate, aggregate};
    use signstats::analysis::frequency::FrequencyTables;
    use signstats::corpus::SequenceFilter;

    fn pair(a: &str, b: &str) -> [String; 2] {
        [a.to_string(), b.to_string()]
    }

    fn at(position: usize, sign: &str) -> (usize, String) {
        (position, sign.to_string())
    }

    // Tests the two-inscription scenario across all five tables
    // Verified by dropping the last bigram window
    #[test]
    fn test_scenario_tables() {
        let corpus = inscriptions(&[&["A", "B", "C"], &["A", "B"]]);
        let filter = SequenceFilter::new(5).unwrap();
        let tables: FrequencyTables = aggregate(&corpus, &filter);

        assert_eq!(tables.signs.get("A"), 2);
        assert_eq!(tables.signs.get("B"), 2);
        assert_eq!(tables.signs.get("C"), 1);
        assert_eq!(tables.signs.len(), 3);

        assert_eq!(tables.bigrams.get(&pair("A", "B")), 2);
        assert_eq!(tables.bigrams.get(&pair("B", "C")), 1);
        assert_eq!(tables.bigrams.len(), 2);

        let abc = ["A".to_string(), "B".to_string(), "C".to_string()];
        assert_eq!(tables.trigrams.get(&abc), 1);
        assert_eq!(tables.trigrams.len(), 1);

        assert_eq!(tables.terminal.get("C"), 1);
        assert_eq!(tables.terminal.get("B"), 1);
        assert_eq!(tables.terminal.get("A"), 0);

        assert_eq!(tables.positional.get(&at(0, "A")), 2);
        assert_eq!(tables.positional.get(&at(1, "B")), 2);
        assert_eq!(tables.positional.get(&at(2, "C")), 1);
        assert_eq!(tables.positional.len(), 3);
    }

    // Tests positions are absolute, not measured from the end
    #[test]
    fn test_positional_uses_absolute_index() {
        let corpus = inscriptions(&[&["X", "Y"], &["Z", "X", "Y"]]);
        let filter = SequenceFilter::new(5).unwrap();
        let tables: FrequencyTables = aggregate(&corpus, &filter);

        assert_eq!(tables.positional.get(&at(1, "Y")), 1);
        assert_eq!(tables.positional.get(&at(2, "Y")), 1);
        assert_eq!(tables.positional.get(&at(0, "X")), 1);
        assert_eq!(tables.positional.get(&at(1, "X")), 1);
    }

    // Tests short sequences produce no bigrams or trigrams
    // Verified by allowing windows longer than the sequence
    #[test]
    fn test_short_sequences_have_no_windows() {
        let corpus = inscriptions(&[&["A"], &["B", "C"]]);
        let filter = SequenceFilter::new(5).unwrap();
        let tables: FrequencyTables = aggregate(&corpus, &filter);

        assert_eq!(tables.bigrams.total(), 1);
        assert!(tables.trigrams.is_empty());
        assert_eq!(tables.terminal.get("A"), 1);
        assert_eq!(tables.terminal.get("C"), 1);
    }

    // Tests the unigram total equals the summed lengths of admitted sequences
    #[test]
    fn test_unigram_total_matches_admitted_lengths() {
        for seed in 0..8 {
            let corpus = random_corpus(seed, 200, 9, 12);
            let filter = SequenceFilter::new(5).unwrap();
            let tables: FrequencyTables = aggregate(&corpus, &filter);

            let expected: usize = corpus
                .iter()
                .map(|inscription| inscription.len())
                .filter(|&len| (1..=5).contains(&len))
                .sum();
            assert_eq!(tables.signs.total(), expected, "seed {seed}");
            assert_eq!(tables.positional.total(), expected, "seed {seed}");
        }
    }

    // Tests window totals match the number of windows in admitted sequences
    // Verified by counting one bigram per sequence
    #[test]
    fn test_window_totals_match_sequence_lengths() {
        for seed in 0..8 {
            let corpus = random_corpus(seed, 200, 9, 6);
            let filter = SequenceFilter::new(6).unwrap();
            let tables: FrequencyTables = aggregate(&corpus, &filter);

            let admitted: Vec<usize> = corpus
                .iter()
                .map(|inscription| inscription.len())
                .filter(|&len| filter.admits_len(len))
                .collect();
            let bigram_windows: usize = admitted.iter().map(|len| len.saturating_sub(1)).sum();
            let trigram_windows: usize = admitted.iter().map(|len| len.saturating_sub(2)).sum();

            assert_eq!(tables.bigrams.total(), bigram_windows, "seed {seed}");
            assert_eq!(tables.trigrams.total(), trigram_windows, "seed {seed}");
            assert_eq!(tables.terminal.total(), admitted.len(), "seed {seed}");
        }
    }

    // Tests sequences of length zero or max_len + 1 leave every table unchanged
    // Verified by truncating long sequences instead of rejecting them
    #[test]
    fn test_rejected_sequences_contribute_nothing() {
        let base = inscriptions(&[&["A", "B", "C"], &["A", "B"]]);
        let mut extended = base.clone();
        extended.extend(inscriptions(&[&[], &["A", "B", "C", "D", "E", "F"]]));

        let filter = SequenceFilter::new(5).unwrap();
        let before: FrequencyTables = aggregate(&base, &filter);
        let after: FrequencyTables = aggregate(&extended, &filter);

        assert_eq!(before, after);
    }

    // Tests folding shards and merging matches a single pass
    #[test]
    fn test_merge_matches_single_pass() {
        let corpus = random_corpus(42, 300, 6, 10);
        let filter = SequenceFilter::new(5).unwrap();
        let whole: FrequencyTables = aggregate(&corpus, &filter);

        let (left, right) = corpus.split_at(137);
        let mut merged: FrequencyTables = aggregate(left, &filter);
        merged.merge(aggregate(right, &filter));

        assert_eq!(whole, merged);
    }

    // Tests repeated windows within one sequence are each counted
    #[test]
    fn test_record_single_sequence() {
        let mut tables = FrequencyTables::default();
        let signs: Vec<String> = ["P", "Q", "P", "Q"].iter().map(|s| (*s).to_string()).collect();
        tables.record(&signs);

        assert_eq!(tables.bigrams.get(&pair("P", "Q")), 2);
        assert_eq!(tables.bigrams.get(&pair("Q", "P")), 1);
        assert_eq!(tables.trigrams.total(), 2);
        assert_eq!(tables.terminal.get("Q"), 1);
    }
}
