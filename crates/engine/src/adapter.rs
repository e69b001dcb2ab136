// crates/engine/src/adapter.rs
use wordfreq_domain::FrequencyTally;
use wordfreq_ports::engine::{EngineTally, FrequencyEngine, InputPlan, TallyTotals, WordCountDto};
use wordfreq_shared_kernel::Result;

use crate::config::EngineOptions;

/// In-process implementation of the batch collection engine port.
pub struct ParallelEngine {
    options: EngineOptions,
}

impl ParallelEngine {
    pub fn new(options: EngineOptions) -> Self {
        Self { options }
    }
}

impl FrequencyEngine for ParallelEngine {
    fn count(&self, plan: &InputPlan) -> Result<EngineTally> {
        let tally = crate::run(plan, &self.options)?;
        Ok(tally_to_dto(tally))
    }
}

fn tally_to_dto(tally: FrequencyTally) -> EngineTally {
    let totals = TallyTotals { tokens: tally.tokens_seen(), lines: tally.lines_seen() };
    let rows = tally
        .into_frequencies()
        .into_iter()
        .map(|entry| WordCountDto { word: entry.word.into_inner(), count: entry.count.value() })
        .collect();
    EngineTally { rows, totals }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adapter_reports_rows_and_totals() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corpus.txt");
        std::fs::write(&path, "cat dog cat\n").unwrap();

        let engine = ParallelEngine::new(EngineOptions { threads: 2, ..EngineOptions::default() });
        let tally = engine.count(&InputPlan::for_path(&path)).unwrap();

        assert_eq!(tally.totals.tokens, 3);
        assert_eq!(tally.totals.lines, 1);
        let mut rows = tally.rows;
        rows.sort_by(|a, b| a.word.cmp(&b.word));
        assert_eq!(
            rows,
            vec![
                WordCountDto { word: "cat".into(), count: 2 },
                WordCountDto { word: "dog".into(), count: 1 },
            ]
        );
    }
}
