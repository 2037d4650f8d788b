//! Field extraction from a single hand block.
//!
//! Each field is found by its own matcher, independent of the others:
//! - hand id: `HandId: #<n>-<n>-<n>`
//! - seat list: `Seat <n>: <player> (<stack>...)`
//! - reveal: `<target> shows [<card> <card>]`
//! - actions: `<player>[:] folds|raises|calls|checks|bets`, tagged with the
//!   street whose `*** ... ***` header precedes them
//!
//! A block that fails any check is excluded, never an error.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use super::card::{HoleCards, Street};
use super::format::{HistoryFormat, PatternError};
use super::hand_type::HandType;
use super::position::Position;

/// Only six-handed tables are analysed.
pub const TABLE_SIZE: usize = 6;

static HAND_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"HandId: #(?P<id>\d+-\d+-\d+)").unwrap());

static SEAT_DECLARATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^Seat (?P<seat>\d+): (?P<player>.+) \((?P<stack>\d+)[^)]*\)\s*$").unwrap()
});

static ACTION_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<player>.+?):? (?P<kind>folds|raises|calls|checks|bets)\b").unwrap()
});

/// Kind of a logged action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Folds,
    Raises,
    Calls,
    Checks,
    Bets,
}

impl ActionKind {
    /// Parse the verb as it appears in the log.
    pub fn from_verb(verb: &str) -> Option<Self> {
        match verb {
            "folds" => Some(ActionKind::Folds),
            "raises" => Some(ActionKind::Raises),
            "calls" => Some(ActionKind::Calls),
            "checks" => Some(ActionKind::Checks),
            "bets" => Some(ActionKind::Bets),
            _ => None,
        }
    }

    pub fn verb(&self) -> &'static str {
        match self {
            ActionKind::Folds => "folds",
            ActionKind::Raises => "raises",
            ActionKind::Calls => "calls",
            ActionKind::Checks => "checks",
            ActionKind::Bets => "bets",
        }
    }

    /// Check if this action opens the pot for the players behind.
    pub fn is_aggressive(&self) -> bool {
        matches!(self, ActionKind::Raises | ActionKind::Bets)
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.verb())
    }
}

/// One logged action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub player: String,
    pub kind: ActionKind,
    pub street: Street,
}

impl Action {
    pub fn new(player: impl Into<String>, kind: ActionKind, street: Street) -> Self {
        Self {
            player: player.into(),
            kind,
            street,
        }
    }

    /// Shorthand for a preflop action.
    pub fn preflop(player: impl Into<String>, kind: ActionKind) -> Self {
        Self::new(player, kind, Street::Preflop)
    }
}

/// A hand the target played at a six-handed table with their cards shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedHand {
    hand_id: String,
    seat: u32,
    hole_cards: HoleCards,
    actions: Vec<Action>,
    player_count: usize,
}

impl ParsedHand {
    /// Hands are only built once six seats were counted.
    pub(crate) fn new(hand_id: impl Into<String>, seat: u32, hole_cards: HoleCards, actions: Vec<Action>) -> Self {
        Self {
            hand_id: hand_id.into(),
            seat,
            hole_cards,
            actions,
            player_count: TABLE_SIZE,
        }
    }

    pub fn hand_id(&self) -> &str {
        &self.hand_id
    }

    /// The target's seat number.
    pub fn seat(&self) -> u32 {
        self.seat
    }

    pub fn hole_cards(&self) -> &HoleCards {
        &self.hole_cards
    }

    /// All actions of the hand in document order.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// The leading run of preflop actions.
    pub fn preflop_actions(&self) -> &[Action] {
        let end = self
            .actions
            .iter()
            .position(|a| a.street != Street::Preflop)
            .unwrap_or(self.actions.len());
        &self.actions[..end]
    }

    pub fn player_count(&self) -> usize {
        self.player_count
    }

    pub fn position(&self) -> Position {
        Position::from_seat(self.seat)
    }

    pub fn hand_type(&self) -> HandType {
        HandType::from_hole_cards(&self.hole_cards)
    }
}

/// Why a block did not yield a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Exclusion {
    /// Excluded tournament format or not hold'em
    Format,
    MissingHandId,
    /// Target has no seat declaration
    MissingSeat,
    /// Target's cards were never shown, or the reveal is malformed
    MissingHoleCards,
    /// Number of seat declarations other than six
    TableSize(usize),
}

impl fmt::Display for Exclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exclusion::Format => write!(f, "excluded format or not hold'em"),
            Exclusion::MissingHandId => write!(f, "no hand id"),
            Exclusion::MissingSeat => write!(f, "target not seated"),
            Exclusion::MissingHoleCards => write!(f, "target cards not shown"),
            Exclusion::TableSize(n) => write!(f, "{} seats, not {}-max", n, TABLE_SIZE),
        }
    }
}

/// Extracts the target's hands from blocks.
#[derive(Debug, Clone)]
pub struct HandExtractor {
    target: String,
    format: HistoryFormat,
    reveal: Regex,
}

impl HandExtractor {
    /// Build an extractor for one target. The identifier is matched verbatim.
    pub fn new(format: HistoryFormat, target: &str) -> Result<Self, PatternError> {
        let pattern = format!(r"(?m)^{} shows \[(?P<cards>[^\]\r\n]*)\]", regex::escape(target));
        let reveal = Regex::new(&pattern).map_err(|source| PatternError {
            field: "reveal",
            source,
        })?;
        Ok(Self {
            target: target.to_string(),
            format,
            reveal,
        })
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Extract the target's hand from a block.
    pub fn extract(&self, block: &str) -> Result<ParsedHand, Exclusion> {
        if !self.format.accepts(block) {
            return Err(Exclusion::Format);
        }

        let hand_id = HAND_ID
            .captures(block)
            .map(|c| c["id"].to_string())
            .ok_or(Exclusion::MissingHandId)?;

        let seats = seat_declarations(block);
        let seat = seats
            .iter()
            .find(|(_, player)| *player == self.target)
            .map(|(seat, _)| *seat)
            .ok_or(Exclusion::MissingSeat)?;

        let hole_cards = self
            .reveal
            .captures(block)
            .and_then(|c| HoleCards::from_tokens(&c["cards"]))
            .ok_or(Exclusion::MissingHoleCards)?;

        if seats.len() != TABLE_SIZE {
            return Err(Exclusion::TableSize(seats.len()));
        }

        Ok(ParsedHand::new(hand_id, seat, hole_cards, actions(block)))
    }
}

/// All `(seat, player)` declarations in a block.
fn seat_declarations(block: &str) -> Vec<(u32, &str)> {
    block
        .lines()
        .filter_map(|line| SEAT_DECLARATION.captures(line))
        .filter_map(|c| {
            let seat = c.name("seat")?.as_str().parse().ok()?;
            Some((seat, c.name("player")?.as_str()))
        })
        .collect()
}

/// All actions in a block, in document order, tagged with their street.
fn actions(block: &str) -> Vec<Action> {
    let mut street = Street::Preflop;
    let mut actions = Vec::new();

    for line in block.lines() {
        if let Some(next) = Street::from_header(line) {
            street = next;
            continue;
        }
        if let Some(c) = ACTION_LINE.captures(line) {
            if let Some(kind) = ActionKind::from_verb(&c["kind"]) {
                actions.push(Action::new(&c["player"], kind, street));
            }
        }
    }

    actions
}
