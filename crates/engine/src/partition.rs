// crates/engine/src/partition.rs
use wordfreq_domain::{FrequencyTally, Tokenizer};

use crate::filesystem::LineBatch;

/// Tokenize one batch into a partition-local tally.
///
/// Embarrassingly parallel: no shared mutable state, safe under unbounded
/// fan-out. Partials merge associatively downstream.
pub fn tally_batch(tokenizer: &Tokenizer, batch: &LineBatch) -> FrequencyTally {
    let mut tally = FrequencyTally::new();
    for line in batch {
        tally.observe_line();
        for token in tokenizer.tokenize(line) {
            tally.observe(token);
        }
    }
    tally
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tallies_one_batch() {
        let tokenizer = Tokenizer::new();
        let batch = vec!["The quick fox".to_string(), "the Fox jumps".to_string()];

        let tally = tally_batch(&tokenizer, &batch);
        assert_eq!(tally.lines_seen(), 2);
        assert_eq!(tally.tokens_seen(), 6);
        assert_eq!(tally.len(), 4);
    }

    #[test]
    fn separator_only_batch_counts_lines_only() {
        let tokenizer = Tokenizer::new();
        let batch = vec!["!!! ,,, ---".to_string()];

        let tally = tally_batch(&tokenizer, &batch);
        assert_eq!(tally.lines_seen(), 1);
        assert_eq!(tally.tokens_seen(), 0);
        assert!(tally.is_empty());
    }
}
