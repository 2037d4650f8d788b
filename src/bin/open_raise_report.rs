//! Open-raise report binary.
//!
//! Reads a folder of Winamax hand histories and reports how often a player
//! open-raises each starting hand from each six-max position.
//!
//! Usage:
//!   open_raise_report <config.json>
//!   open_raise_report <history_dir> <username>

use std::time::Instant;

use anyhow::{bail, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

use open_raise_stats::history::ParseSummary;
use open_raise_stats::{analyze_with, collect_logs, HistoryParser, MatrixReport, ReportConfig, SourceLog};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("=== Open Raise Report ===\n");
    let start = Instant::now();

    let config = load_config()?;
    println!("Player: {}", config.username);
    println!("History: {}", config.history_dir.display());

    let logs = collect_logs(&config.history_dir, &config.file_extension, &config.skip_name_token)?;
    println!("Files to process: {}\n", logs.len());

    let parser = HistoryParser::new(&config.format, &config.username)?;

    let progress = ProgressBar::new(logs.len() as u64);
    progress.set_style(
        ProgressStyle::with_template("[{elapsed_precise}] {bar:40} {pos}/{len} {msg}")
            .context("progress bar template")?,
    );
    let on_file = |log: &SourceLog, _: &ParseSummary| {
        progress.set_message(log.name.clone());
        progress.inc(1);
    };

    let analysis = match config.threads {
        Some(threads) => rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("building worker pool")?
            .install(|| analyze_with(&parser, &logs, Some(on_file))),
        None => analyze_with(&parser, &logs, Some(on_file)),
    };
    progress.finish_and_clear();

    let Some(analysis) = analysis else {
        println!("No eligible hands found; nothing to report.");
        return Ok(());
    };

    let summary = &analysis.summary;
    println!("Hand blocks: {}", summary.blocks);
    println!("Hands analysed: {}", summary.hands);
    println!(
        "Skipped: {} (format {}, no id {}, not seated {}, cards not shown {}, not 6-max {})",
        summary.excluded(),
        summary.excluded_format,
        summary.missing_hand_id,
        summary.missing_seat,
        summary.missing_hole_cards,
        summary.wrong_table_size
    );

    let report = MatrixReport::new(&config.username, analysis.files, &analysis.table);

    if let Some(path) = &config.json_output {
        report
            .save_json(path)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("Saved JSON: {}", path.display());
    }

    if let Some(path) = &config.html_output {
        report
            .save_html(path)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("Saved HTML: {}", path.display());
    }

    if config.print_grids {
        report.print_summary();
    }

    println!("Total time: {:.2}s", start.elapsed().as_secs_f64());
    Ok(())
}

fn load_config() -> Result<ReportConfig> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [path] => {
            let config = ReportConfig::from_json_file(path)?;
            println!("Loaded config from: {}", path);
            Ok(config)
        }
        [history_dir, username] => {
            let config = ReportConfig::new(history_dir, username.as_str());
            config.validate()?;
            Ok(config)
        }
        _ => bail!("usage: open_raise_report <config.json> | <history_dir> <username>"),
    }
}
