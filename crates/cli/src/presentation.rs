// crates/cli/src/presentation.rs
use std::fmt::Write as _;

use wordfreq_domain::WordFrequency;
use wordfreq_usecase::FrequencyReport;

use crate::config::Config;
use crate::error::Result;
use crate::options::OutputFormat;

pub fn print_report(report: &FrequencyReport, config: &Config) -> Result<()> {
    match config.format {
        OutputFormat::Table => print_table(report, config),
        OutputFormat::Csv => print_sv(&report.entries, ","),
        OutputFormat::Tsv => print_sv(&report.entries, "\t"),
        OutputFormat::Json => print_json(&report.entries)?,
        OutputFormat::Jsonl => print_jsonl(report)?,
    }
    Ok(())
}

/// Rows the table listing shows. With an explicit --topN the entries are
/// already truncated and all of them appear; otherwise the preview depth
/// caps the listing.
fn table_rows(report: &FrequencyReport, config: &Config) -> usize {
    if config.top_n > 0 {
        report.entries.len()
    } else {
        report.entries.len().min(config.preview_rows)
    }
}

fn print_table(report: &FrequencyReport, config: &Config) {
    let shown = table_rows(report, config);

    println!("wordfreq v{} · parallel={}", crate::VERSION, config.engine.threads);
    println!();

    // Column width follows the longest shown word; values are never
    // truncated.
    let width = report.entries[..shown]
        .iter()
        .map(|e| e.word.as_str().chars().count())
        .max()
        .unwrap_or(0)
        .max("WORD".len());

    println!("{:<width$}  {:>12}", "WORD", "COUNT");
    println!("{}", "-".repeat(width + 14));
    for entry in &report.entries[..shown] {
        println!("{:<width$}  {:>12}", entry.word.as_str(), entry.count.value());
    }

    println!("---");
    println!(
        "{} distinct · {} tokens · {} lines",
        report.distinct, report.total_tokens, report.lines_read
    );
    if shown < report.entries.len() {
        println!("(showing top {shown} of {} rows)", report.entries.len());
    }
}

fn print_sv(entries: &[WordFrequency], delimiter: &str) {
    println!("word{delimiter}count");
    for entry in entries {
        let mut row = String::new();
        let word = entry.word.as_str();
        if delimiter == "," && (word.contains(',') || word.contains('"') || word.contains('\n')) {
            let escaped = word.replace('"', "\"\"");
            write!(row, "\"{escaped}\"").unwrap();
        } else {
            row.push_str(word);
        }
        row.push_str(delimiter);
        row.push_str(&entry.count.value().to_string());
        println!("{row}");
    }
}

fn print_json(entries: &[WordFrequency]) -> Result<()> {
    let json = serde_json::to_string_pretty(entries)?;
    println!("{json}");
    Ok(())
}

fn print_jsonl(report: &FrequencyReport) -> Result<()> {
    for entry in &report.entries {
        let mut value = serde_json::to_value(entry)?;
        if let Some(obj) = value.as_object_mut() {
            obj.insert("type".to_string(), "word".into());
        }
        println!("{}", serde_json::to_string(&value)?);
    }

    let total = serde_json::json!({
        "type": "total",
        "version": crate::VERSION,
        "distinct": report.distinct,
        "tokens": report.total_tokens,
        "lines": report.lines_read,
    });
    println!("{total}");
    Ok(())
}
