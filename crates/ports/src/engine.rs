// crates/ports/src/engine.rs
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use wordfreq_shared_kernel::Result;

/// Input parameters describing the corpus to count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputPlan {
    /// A text file, or a directory expanded to every file inside it.
    pub root: PathBuf,
    pub follow_links: bool,
    pub include_hidden: bool,
}

impl InputPlan {
    pub fn for_path(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), follow_links: false, include_hidden: false }
    }
}

/// DTO for one aggregated (word, count) row produced by an engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCountDto {
    pub word: String,
    pub count: u64,
}

/// Totals observed while tallying, for conservation reporting.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TallyTotals {
    pub tokens: u64,
    pub lines: u64,
}

/// Everything an engine hands back: aggregated rows plus totals. Rows
/// carry no ordering guarantee.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineTally {
    pub rows: Vec<WordCountDto>,
    pub totals: TallyTotals,
}

/// Port for the batch collection engine. Implementations may fan the
/// tokenize/aggregate work out however they like, as long as the returned
/// counts are exact.
pub trait FrequencyEngine: Send + Sync {
    fn count(&self, plan: &InputPlan) -> Result<EngineTally>;
}
