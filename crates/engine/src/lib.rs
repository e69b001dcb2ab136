// crates/engine/src/lib.rs
use rayon::prelude::*;
use wordfreq_domain::{FrequencyTally, Tokenizer};
use wordfreq_ports::engine::InputPlan;

pub mod adapter;
pub mod config;
pub mod error;
pub mod filesystem;
pub mod partition;

use crate::config::EngineOptions;
use crate::error::{EngineError, Result};

/// Run the counting engine over the sources named by `plan`.
///
/// A producer thread streams line batches into a bounded channel; rayon
/// workers tokenize each batch into a partition-local tally and the
/// partials are merged associatively by key. The merged tally carries no
/// ordering; ranking happens downstream.
///
/// # Errors
///
/// Fails if the input cannot be expanded or read, or if the worker pool
/// cannot be built. Any read failure aborts the whole run; there is no
/// partial result.
pub fn run(plan: &InputPlan, options: &EngineOptions) -> Result<FrequencyTally> {
    let sources = filesystem::expand_input(plan)?;
    log::debug!("expanded {} source file(s) under {}", sources.len(), plan.root.display());

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(options.threads)
        .build()
        .map_err(|e| EngineError::WorkerPool { details: e.to_string() })?;

    let (tx, rx) = crossbeam_channel::bounded::<filesystem::LineBatch>(options.channel_capacity);
    let (err_tx, err_rx) = std::sync::mpsc::channel();
    let batch_lines = options.batch_lines;

    std::thread::spawn(move || {
        if let Err(e) = filesystem::stream_batches(&sources, batch_lines, &tx) {
            let _ = err_tx.send(e);
        }
    });

    let tokenizer = Tokenizer::new();
    let tally = pool.install(|| {
        rx.into_iter()
            .par_bridge()
            .map(|batch| partition::tally_batch(&tokenizer, &batch))
            .reduce(FrequencyTally::new, |mut acc, part| {
                acc.merge(part);
                acc
            })
    });

    // The channel closes when the producer is done; a queued error means
    // the stream was cut short and the tally must be discarded.
    if let Ok(read_err) = err_rx.try_recv() {
        return Err(read_err);
    }

    log::debug!(
        "tallied {} distinct tokens ({} occurrences, {} lines)",
        tally.len(),
        tally.tokens_seen(),
        tally.lines_seen()
    );
    Ok(tally)
}
