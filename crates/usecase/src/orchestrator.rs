// crates/usecase/src/orchestrator.rs
use wordfreq_domain::{WordFrequency, ordering};
use wordfreq_ports::engine::{FrequencyEngine, InputPlan, WordCountDto};
use wordfreq_shared_kernel::{Occurrences, Result, Token};

use crate::dto::FrequencyReport;

/// Runs the frequency pipeline against a batch engine: count, rank,
/// truncate. Output order is fully determined by the ranking, never by how
/// the engine partitioned its work.
pub struct CountWords<'a> {
    engine: &'a dyn FrequencyEngine,
}

impl<'a> CountWords<'a> {
    pub fn new(engine: &'a dyn FrequencyEngine) -> Self {
        Self { engine }
    }

    /// `top_n == 0` keeps the full listing; truncation happens strictly
    /// after the global sort.
    pub fn run(&self, plan: &InputPlan, top_n: usize) -> Result<FrequencyReport> {
        let tally = self.engine.count(plan)?;
        let totals = tally.totals;

        let mut entries: Vec<WordFrequency> =
            tally.rows.into_iter().map(row_to_frequency).collect();
        let distinct = entries.len();

        ordering::rank(&mut entries);
        ordering::truncate_top(&mut entries, top_n);

        Ok(FrequencyReport {
            entries,
            distinct,
            total_tokens: totals.tokens,
            lines_read: totals.lines,
        })
    }
}

fn row_to_frequency(row: WordCountDto) -> WordFrequency {
    WordFrequency::new(Token::new(row.word), Occurrences::new(row.count))
}
