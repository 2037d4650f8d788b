//! Table positions for six-handed play.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position at a six-handed table.
///
/// Seats outside 1-6 resolve to `Unknown`, which is counted but never
/// reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    UTG,
    HJ,
    CO,
    BTN,
    SB,
    BB,
    Unknown,
}

impl Position {
    /// The six reported positions, in seat order.
    pub const TABLE: [Position; 6] = [
        Position::UTG,
        Position::HJ,
        Position::CO,
        Position::BTN,
        Position::SB,
        Position::BB,
    ];

    /// Resolve a seat number (1-6) to its position.
    pub fn from_seat(seat: u32) -> Position {
        match seat {
            1 => Position::UTG,
            2 => Position::HJ,
            3 => Position::CO,
            4 => Position::BTN,
            5 => Position::SB,
            6 => Position::BB,
            _ => Position::Unknown,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Position::UTG => "UTG",
            Position::HJ => "HJ",
            Position::CO => "CO",
            Position::BTN => "BTN",
            Position::SB => "SB",
            Position::BB => "BB",
            Position::Unknown => "Unknown",
        }
    }

    /// Index into [`Position::TABLE`], `None` for `Unknown`.
    pub fn index(&self) -> Option<usize> {
        Self::TABLE.iter().position(|p| p == self)
    }

    pub fn is_known(&self) -> bool {
        *self != Position::Unknown
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
