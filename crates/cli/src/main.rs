use std::process::ExitCode;

use clap::Parser;
use wordfreq_cli::args::Args;
use wordfreq_cli::config::Config;
use wordfreq_cli::presentation;
use wordfreq_engine::adapter::ParallelEngine;
use wordfreq_infra::CsvReportSink;
use wordfreq_ports::engine::WordCountDto;
use wordfreq_ports::report::ReportSink;
use wordfreq_usecase::{CountWords, FrequencyReport};

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    let config = Config::from(args);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> wordfreq_cli::error::Result<()> {
    log::debug!("counting {} with {} worker(s)", config.plan.root.display(), config.engine.threads);
    let engine = ParallelEngine::new(config.engine.clone());
    let report = CountWords::new(&engine).run(&config.plan, config.top_n)?;

    match &config.output {
        Some(destination) => {
            let rows = report_rows(&report);
            CsvReportSink.publish(destination, &rows)?;
            println!("Result saved under: {}", destination.display());
        }
        None => presentation::print_report(&report, config)?,
    }
    Ok(())
}

fn report_rows(report: &FrequencyReport) -> Vec<WordCountDto> {
    report
        .entries
        .iter()
        .map(|entry| WordCountDto { word: entry.word.as_str().to_owned(), count: entry.count.value() })
        .collect()
}
