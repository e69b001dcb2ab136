// crates/usecase/src/dto.rs
use wordfreq_domain::WordFrequency;

/// Final pipeline output: ranked (and possibly truncated) entries plus the
/// totals observed before truncation.
#[derive(Debug, Clone)]
pub struct FrequencyReport {
    pub entries: Vec<WordFrequency>,
    /// Distinct tokens in the whole corpus, counted before truncation.
    pub distinct: usize,
    pub total_tokens: u64,
    pub lines_read: u64,
}
