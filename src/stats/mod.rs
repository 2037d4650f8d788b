//! Open-raise statistics.
//!
//! - `action`: Deciding whether the target open-raised a hand
//! - `table`: Counts by position and hand type
//! - `matrix`: 13x13 percentage matrices, JSON/terminal/HTML output

pub mod action;
pub mod table;
pub mod matrix;

pub use action::{hand_is_open_raise, is_open_raise};
pub use table::{OpenRaiseTable, RaiseCounter};
pub use matrix::{build_matrices, generate_html, MatrixReport, PositionMatrix, ReportMetadata};
