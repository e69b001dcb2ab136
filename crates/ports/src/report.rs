// crates/ports/src/report.rs
use std::path::{Path, PathBuf};

use wordfreq_shared_kernel::Result;

use crate::engine::WordCountDto;

/// Port for publishing the ranked listing as one consolidated table.
///
/// Implementations replace whatever lives at the destination; output is
/// never merged into or appended to previous results.
pub trait ReportSink: Send + Sync {
    /// Write `rows` (already ranked and truncated) under `destination`,
    /// returning the path of the consolidated data file.
    fn publish(&self, destination: &Path, rows: &[WordCountDto]) -> Result<PathBuf>;
}
