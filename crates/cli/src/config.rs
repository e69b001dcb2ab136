// crates/cli/src/config.rs
use std::path::PathBuf;

use wordfreq_engine::config::{EngineOptions, EngineOptionsBuilder};
use wordfreq_ports::engine::InputPlan;

use crate::args::Args;
use crate::options::OutputFormat;

/// Resolved application configuration assembled from CLI arguments.
#[derive(Debug, Clone)]
pub struct Config {
    pub plan: InputPlan,
    pub engine: EngineOptions,
    pub top_n: usize,
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
    pub preview_rows: usize,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let threads = args.jobs.unwrap_or_else(num_cpus::get).max(1);

        // N <= 0 means "keep everything".
        let top_n = usize::try_from(args.top_n).unwrap_or(0);

        let plan = InputPlan {
            root: args.input,
            follow_links: args.follow,
            include_hidden: args.hidden,
        };

        let engine = EngineOptionsBuilder::default()
            .threads(threads)
            .build()
            .expect("engine options have defaults");

        Self {
            plan,
            engine,
            top_n,
            output: args.output,
            format: args.format,
            preview_rows: args.preview_rows,
        }
    }
}
