//! Hand-history parsing.
//!
//! This module turns raw history text into structured hands:
//!
//! - `card`: Card and hole-card types, betting streets
//! - `hand_type`: The 169 canonical starting hands
//! - `position`: Six-handed table positions
//! - `format`: Markers that identify a room's history format
//! - `segment`: Splitting a log into per-hand blocks
//! - `extract`: Pulling a `ParsedHand` out of a block
//! - `parser`: Segmentation and extraction over a whole log

pub mod card;
pub mod hand_type;
pub mod position;
pub mod format;
pub mod segment;
pub mod extract;
pub mod parser;

// Re-export commonly used types
pub use card::{Card, HoleCards, Street};
pub use hand_type::{HandType, Shape};
pub use position::Position;
pub use format::{HistoryFormat, PatternError};
pub use extract::{Action, ActionKind, Exclusion, HandExtractor, ParsedHand, TABLE_SIZE};
pub use parser::{HistoryParser, ParseSummary, ParsedLog};
