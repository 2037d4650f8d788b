//! # Open Raise Stats
//!
//! Preflop open-raise frequencies for one player, by table position and
//! starting hand, computed from Winamax tournament hand histories.
//!
//! ## Features
//!
//! - **Hand-History Parsing**: Splits logs into hands and extracts hand id,
//!   seats, shown hole cards and the ordered action sequence
//! - **Six-Handed Focus**: Only hands from 6-max tables where the player's
//!   cards were shown are analysed
//! - **169 Hand Types**: Pairs, suited and offsuit hands on a 13x13 grid
//! - **Parallel Aggregation**: Per-file tables merged by summation
//! - **Reports**: JSON, terminal grids and HTML heatmaps
//!
//! ## Quick Start
//!
//! ```ignore
//! use open_raise_stats::{analyze, build_matrices, HistoryFormat, SourceLog};
//!
//! let logs = vec![SourceLog::new("sunday.txt", std::fs::read_to_string("sunday.txt")?)];
//! match analyze(&logs, "1leolem1", &HistoryFormat::winamax())? {
//!     Some(analysis) => {
//!         for matrix in build_matrices(&analysis.table) {
//!             matrix.print_grid();
//!         }
//!     }
//!     None => println!("no data"),
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//!   history files ──► source ──► SourceLog (name, text)
//!                                    │
//!                                    ▼
//!   ┌──────────────────────────── history ────────────────────────────┐
//!   │  segment: log ─► blocks     extract: block ─► ParsedHand          │
//!   │  hand_type: cards ─► "AKs"  position: seat ─► BTN                 │
//!   └──────────────────────────────────────────────────────────────────┘
//!                                    │
//!                                    ▼
//!   ┌───────────────────────────── stats ─────────────────────────────┐
//!   │  action: open raise?  table: position × hand type counters       │
//!   │  matrix: 13x13 percentages, JSON / terminal / HTML               │
//!   └──────────────────────────────────────────────────────────────────┘
//! ```

/// Hand-history parsing.
///
/// Segmentation, field extraction, hand classification and positions.
pub mod history;

/// Open-raise statistics and report matrices.
pub mod stats;

/// Report configuration.
pub mod config;

/// Reading history files from disk.
pub mod source;

/// Parallel analysis over many logs.
pub mod pipeline;

// Re-export commonly used types at crate root for convenience
pub use config::{ConfigError, ReportConfig};
pub use history::{HandType, HistoryFormat, HistoryParser, ParsedHand, Position};
pub use pipeline::{analyze, analyze_with, Analysis};
pub use source::{collect_logs, SourceLog};
pub use stats::{build_matrices, MatrixReport, OpenRaiseTable, PositionMatrix, RaiseCounter};
