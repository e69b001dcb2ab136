//! # Domain
//!
//! Pure pipeline semantics, free of I/O:
//!
//! - [`tokenize`]: line splitting and case normalization
//! - [`tally`]: exact per-token occurrence counts with associative merge
//! - [`ordering`]: the canonical output order and top-N truncation
//! - [`model`]: the `WordFrequency` result entry
//!
//! Everything here is deterministic; ordering never depends on how the
//! input was partitioned upstream.

// crates/domain/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod model;
pub mod ordering;
pub mod tally;
pub mod tokenize;

pub use model::WordFrequency;
pub use tally::FrequencyTally;
pub use tokenize::Tokenizer;
