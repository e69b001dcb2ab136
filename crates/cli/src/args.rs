// crates/cli/src/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};

use crate::options::OutputFormat;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "wordfreq",
    version = crate::VERSION,
    about = "Word frequency counter over text corpora"
)]
pub struct Args {
    /// Text file, or directory whose files are all read
    #[arg(long, value_hint = ValueHint::AnyPath, help_heading = "Input")]
    pub input: PathBuf,

    /// Include hidden files when the input is a directory
    #[arg(long, help_heading = "Input")]
    pub hidden: bool,

    /// Follow symbolic links when the input is a directory
    #[arg(long, help_heading = "Input")]
    pub follow: bool,

    /// Folder for the CSV result; omit to print to the console
    #[arg(long, value_hint = ValueHint::DirPath, help_heading = "Output")]
    pub output: Option<PathBuf>,

    /// Keep only the N most frequent words (0 = all)
    #[arg(
        long = "topN",
        visible_alias = "top-n",
        default_value_t = 0,
        allow_negative_numbers = true,
        help_heading = "Output"
    )]
    pub top_n: i64,

    /// Console output format
    #[arg(long, value_enum, default_value = "table", help_heading = "Output")]
    pub format: OutputFormat,

    /// Rows the table format shows when --topN is 0
    #[arg(long, default_value_t = 20, help_heading = "Output")]
    pub preview_rows: usize,

    /// Worker threads (default: logical CPUs)
    #[arg(long, help_heading = "Execution")]
    pub jobs: Option<usize>,
}
