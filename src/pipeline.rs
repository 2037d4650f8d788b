//! Parsing and aggregation over many history files.
//!
//! Files are parsed in parallel. Each worker folds its hands into a private
//! table and the tables are summed at the end, so nothing is shared while
//! parsing.

use rayon::prelude::*;

use crate::history::{HistoryFormat, HistoryParser, ParseSummary, PatternError};
use crate::source::SourceLog;
use crate::stats::OpenRaiseTable;

/// Result of analysing a set of logs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Analysis {
    pub table: OpenRaiseTable,
    pub summary: ParseSummary,
    /// Number of logs analysed
    pub files: usize,
}

impl Analysis {
    /// Analyse one log.
    pub fn of_log(parser: &HistoryParser, log: &SourceLog) -> Self {
        let parsed = parser.parse_log(&log.text);
        log::info!(
            "{}: {} hands from {} blocks ({} skipped)",
            log.name,
            parsed.summary.hands,
            parsed.summary.blocks,
            parsed.summary.excluded()
        );

        Self {
            table: OpenRaiseTable::from_hands(&parsed.hands, parser.target()),
            summary: parsed.summary,
            files: 1,
        }
    }

    /// Sum two analyses.
    pub fn merged(mut self, other: Analysis) -> Self {
        self.table.merge(&other.table);
        self.summary.merge(&other.summary);
        self.files += other.files;
        self
    }
}

/// Analyse logs for a target player.
///
/// Returns `Ok(None)` when no log held an eligible hand.
pub fn analyze(logs: &[SourceLog], target: &str, format: &HistoryFormat) -> Result<Option<Analysis>, PatternError> {
    let parser = HistoryParser::new(format, target)?;
    Ok(analyze_with(&parser, logs, None::<fn(&SourceLog, &ParseSummary)>))
}

/// Analyse logs with a prepared parser, calling `progress` after each log.
///
/// `progress` runs on the worker threads.
pub fn analyze_with<F>(parser: &HistoryParser, logs: &[SourceLog], progress: Option<F>) -> Option<Analysis>
where
    F: Fn(&SourceLog, &ParseSummary) + Sync,
{
    let analysis = logs
        .par_iter()
        .map(|log| {
            let analysis = Analysis::of_log(parser, log);
            if let Some(ref callback) = progress {
                callback(log, &analysis.summary);
            }
            analysis
        })
        .reduce(Analysis::default, Analysis::merged);

    if analysis.table.is_empty() {
        log::info!("no eligible hands for {} in {} files", parser.target(), logs.len());
        None
    } else {
        Some(analysis)
    }
}
