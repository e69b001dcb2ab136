// crates/cli/src/options.rs
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Console output format. File mode always writes CSV.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned listing with a run header and totals footer
    #[default]
    Table,
    Csv,
    Tsv,
    Json,
    Jsonl,
}
