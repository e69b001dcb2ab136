// crates/domain/src/tally.rs
use hashbrown::HashMap;

use wordfreq_shared_kernel::{Occurrences, Token};

use crate::model::WordFrequency;

/// Exact occurrence counts for the tokens of one input partition, plus the
/// totals needed for conservation reporting.
///
/// Merging is associative and commutative, so partition-local tallies can
/// be combined in any order without changing the result.
#[derive(Debug, Default)]
pub struct FrequencyTally {
    counts: HashMap<Token, u64>,
    tokens_seen: u64,
    lines_seen: u64,
}

impl FrequencyTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one token occurrence.
    pub fn observe(&mut self, token: Token) {
        *self.counts.entry(token).or_insert(0) += 1;
        self.tokens_seen += 1;
    }

    /// Record one consumed input line, tokens or not.
    pub fn observe_line(&mut self) {
        self.lines_seen += 1;
    }

    /// Fold `other` into `self`, merging counts by key.
    pub fn merge(&mut self, other: Self) {
        for (token, count) in other.counts {
            *self.counts.entry(token).or_insert(0) += count;
        }
        self.tokens_seen += other.tokens_seen;
        self.lines_seen += other.lines_seen;
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total token occurrences. Always equals the sum of all counts.
    pub fn tokens_seen(&self) -> u64 {
        self.tokens_seen
    }

    pub fn lines_seen(&self) -> u64 {
        self.lines_seen
    }

    /// Drain into result entries. No ordering guarantee; ordering is
    /// imposed downstream.
    pub fn into_frequencies(self) -> Vec<WordFrequency> {
        self.counts
            .into_iter()
            .map(|(token, count)| WordFrequency::new(token, Occurrences::new(count)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize::Tokenizer;

    fn tally_lines(lines: &[&str]) -> FrequencyTally {
        let tokenizer = Tokenizer::new();
        let mut tally = FrequencyTally::new();
        for line in lines {
            tally.observe_line();
            for token in tokenizer.tokenize(line) {
                tally.observe(token);
            }
        }
        tally
    }

    #[test]
    fn counts_across_lines() {
        let tally = tally_lines(&["The quick fox", "the Fox jumps"]);
        assert_eq!(tally.len(), 4);
        assert_eq!(tally.tokens_seen(), 6);
        assert_eq!(tally.lines_seen(), 2);

        let mut entries = tally.into_frequencies();
        entries.sort_by(|a, b| a.word.cmp(&b.word));
        let pairs: Vec<(&str, u64)> =
            entries.iter().map(|e| (e.word.as_str(), e.count.value())).collect();
        assert_eq!(pairs, vec![("fox", 2), ("jumps", 1), ("quick", 1), ("the", 2)]);
    }

    #[test]
    fn merge_matches_sequential_tally() {
        let mut left = tally_lines(&["a b a"]);
        let right = tally_lines(&["b c"]);
        left.merge(right);

        let combined = tally_lines(&["a b a", "b c"]);
        assert_eq!(left.tokens_seen(), combined.tokens_seen());
        assert_eq!(left.lines_seen(), combined.lines_seen());
        assert_eq!(left.len(), combined.len());

        let mut merged = left.into_frequencies();
        let mut sequential = combined.into_frequencies();
        merged.sort_by(|a, b| a.word.cmp(&b.word));
        sequential.sort_by(|a, b| a.word.cmp(&b.word));
        assert_eq!(merged, sequential);
    }

    #[test]
    fn conservation_of_total_token_count() {
        let tally = tally_lines(&["one two two", "three three three", "!!!"]);
        let total = tally.tokens_seen();
        let summed: u64 = tally.into_frequencies().iter().map(|e| e.count.value()).sum();
        assert_eq!(summed, total);
        assert_eq!(total, 6);
    }

    #[test]
    fn empty_input_is_empty() {
        let tally = tally_lines(&[]);
        assert!(tally.is_empty());
        assert_eq!(tally.tokens_seen(), 0);
        assert!(tally.into_frequencies().is_empty());
    }
}
