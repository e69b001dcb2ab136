// crates/domain/src/model.rs
use serde::Serialize;
use wordfreq_shared_kernel::{Occurrences, Token};

/// A (token, occurrence count) pair. Counts are frozen once aggregation
/// completes; nothing downstream mutates an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordFrequency {
    pub word: Token,
    pub count: Occurrences,
}

impl WordFrequency {
    pub fn new(word: Token, count: Occurrences) -> Self {
        Self { word, count }
    }
}
