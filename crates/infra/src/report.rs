// crates/infra/src/report.rs
use std::path::{Path, PathBuf};

use wordfreq_ports::engine::WordCountDto;
use wordfreq_ports::report::ReportSink;
use wordfreq_shared_kernel::{InfrastructureError, Result};

use crate::persistence;

/// Name of the single consolidated data file inside the output folder.
pub const DATA_FILE: &str = "part-00000.csv";

const HEADER: &str = "word,count";

/// Writes the ranked listing as one consolidated CSV file inside the
/// destination folder, replacing any previous contents.
///
/// Consolidation into a single file is a deliberate serialization point:
/// downstream consumers get exactly one table, at the cost of a
/// single-writer bottleneck.
pub struct CsvReportSink;

impl ReportSink for CsvReportSink {
    fn publish(&self, destination: &Path, rows: &[WordCountDto]) -> Result<PathBuf> {
        if destination.exists() {
            std::fs::remove_dir_all(destination).map_err(|e| InfrastructureError::OutputWrite {
                path: destination.to_path_buf(),
                source: e,
            })?;
        }
        std::fs::create_dir_all(destination).map_err(|e| InfrastructureError::OutputWrite {
            path: destination.to_path_buf(),
            source: e,
        })?;

        let mut data = String::with_capacity(HEADER.len() + 1 + rows.len() * 16);
        data.push_str(HEADER);
        data.push('\n');
        for row in rows {
            push_csv_field(&mut data, &row.word);
            data.push(',');
            data.push_str(&row.count.to_string());
            data.push('\n');
        }

        let file = destination.join(DATA_FILE);
        persistence::atomic_write(&file, data.as_bytes()).map_err(|e| {
            InfrastructureError::OutputWrite { path: file.clone(), source: e }
        })?;
        log::debug!("report consolidated into {}", file.display());
        Ok(file)
    }
}

/// Standard CSV quoting: fields containing the delimiter, a quote, or a
/// line break are quoted, with embedded quotes doubled. The tokenizer's
/// word-character rule makes this rare, but the sink does not rely on it.
fn push_csv_field(out: &mut String, field: &str) {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        out.push('"');
        out.push_str(&field.replace('"', "\"\""));
        out.push('"');
    } else {
        out.push_str(field);
    }
}
