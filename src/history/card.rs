//! Card representation for hand histories.
//!
//! This module provides the card types read out of a history file:
//! - `Card`: A single playing card with rank and suit
//! - `HoleCards`: The two private cards a player showed, in logged order
//! - `Street`: The betting round an action belongs to

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest and highest rank (0-12: 2-A).
pub const RANK_2: u8 = 0;
pub const RANK_A: u8 = 12;

/// Suit of a card (0-3), in the order of the suit characters.
pub const SUIT_CLUBS: u8 = 0;
pub const SUIT_DIAMONDS: u8 = 1;
pub const SUIT_SPADES: u8 = 3;

/// Rank characters in ascending order. The position in this array is the rank.
pub const RANK_CHARS: [char; 13] = ['2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K', 'A'];

/// Suit characters as written in history files.
const SUIT_CHARS: [char; 4] = ['c', 'd', 'h', 's'];

/// Look up the rank (0-12) of a rank character.
pub fn rank_from_char(c: char) -> Option<u8> {
    RANK_CHARS.iter().position(|&r| r == c).map(|r| r as u8)
}

/// A single playing card.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// Card index 0-51: rank * 4 + suit
    id: u8,
}

impl Card {
    /// Create a new card from rank (0-12) and suit (0-3).
    #[inline]
    pub fn new(rank: u8, suit: u8) -> Self {
        debug_assert!(rank <= RANK_A, "rank must be 0-12");
        debug_assert!(suit < 4, "suit must be 0-3");
        Self { id: rank * 4 + suit }
    }

    /// Parse a card token like "As", "Kh", "2c".
    ///
    /// Tokens are matched exactly as the room writes them: upper-case rank,
    /// lower-case suit. Anything else is not a card.
    pub fn from_str(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        let rank = rank_from_char(chars.next()?)?;
        let suit_char = chars.next()?;
        let suit = SUIT_CHARS.iter().position(|&c| c == suit_char)?;
        if chars.next().is_some() {
            return None;
        }
        Some(Self::new(rank, suit as u8))
    }

    /// Get the card's rank (0-12: 2-A).
    #[inline]
    pub fn rank(&self) -> u8 {
        self.id / 4
    }

    /// Get the card's suit (0-3).
    #[inline]
    pub fn suit(&self) -> u8 {
        self.id % 4
    }

    /// Get rank character for display.
    pub fn rank_char(&self) -> char {
        RANK_CHARS[self.rank() as usize]
    }

    /// Get suit character for display.
    pub fn suit_char(&self) -> char {
        SUIT_CHARS[self.suit() as usize]
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank_char(), self.suit_char())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// A player's two hole cards, kept in the order the log shows them.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct HoleCards {
    cards: [Card; 2],
}

impl HoleCards {
    /// Create hole cards. Returns `None` if both cards are the same card.
    pub fn new(first: Card, second: Card) -> Option<Self> {
        if first == second {
            return None;
        }
        Some(Self { cards: [first, second] })
    }

    /// Parse the contents of a reveal bracket, e.g. "Ah Kh".
    ///
    /// Exactly two whitespace-separated card tokens are required.
    pub fn from_tokens(s: &str) -> Option<Self> {
        let mut tokens = s.split_whitespace();
        let first = Card::from_str(tokens.next()?)?;
        let second = Card::from_str(tokens.next()?)?;
        if tokens.next().is_some() {
            return None;
        }
        Self::new(first, second)
    }

    /// Both cards in logged order.
    pub fn cards(&self) -> [Card; 2] {
        self.cards
    }

    /// Check if hole cards are suited.
    pub fn is_suited(&self) -> bool {
        self.cards[0].suit() == self.cards[1].suit()
    }

    /// Check if hole cards are a pair.
    pub fn is_pair(&self) -> bool {
        self.cards[0].rank() == self.cards[1].rank()
    }
}

impl fmt::Display for HoleCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.cards[0], self.cards[1])
    }
}

impl fmt::Debug for HoleCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self)
    }
}

/// Street in a poker hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
    Showdown,
}

impl Street {
    /// Recognise a street header line such as `*** FLOP *** [Ah 7c 2d]`.
    pub fn from_header(line: &str) -> Option<Street> {
        let header = line.trim_start().strip_prefix("*** ")?;
        let name = header.split(" ***").next()?.trim();
        match name {
            "ANTE/BLINDS" | "PRE-FLOP" | "PREFLOP" => Some(Street::Preflop),
            "FLOP" => Some(Street::Flop),
            "TURN" => Some(Street::Turn),
            "RIVER" => Some(Street::River),
            "SHOW DOWN" | "SHOWDOWN" | "SUMMARY" => Some(Street::Showdown),
            _ => None,
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Street::Preflop => write!(f, "Preflop"),
            Street::Flop => write!(f, "Flop"),
            Street::Turn => write!(f, "Turn"),
            Street::River => write!(f, "River"),
            Street::Showdown => write!(f, "Showdown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_creation() {
        let ace_spades = Card::new(RANK_A, SUIT_SPADES);
        assert_eq!(ace_spades.rank(), RANK_A);
        assert_eq!(ace_spades.suit(), SUIT_SPADES);
        assert_eq!(ace_spades.to_string(), "As");

        let two_clubs = Card::new(RANK_2, SUIT_CLUBS);
        assert_eq!(two_clubs.rank(), RANK_2);
        assert_eq!(two_clubs.suit(), SUIT_CLUBS);
        assert_eq!(two_clubs.to_string(), "2c");
    }

    #[test]
    fn test_card_parsing() {
        assert_eq!(Card::from_str("As").unwrap().to_string(), "As");
        assert_eq!(Card::from_str("Kh").unwrap().to_string(), "Kh");
        assert_eq!(Card::from_str("Td").unwrap().to_string(), "Td");
        assert_eq!(Card::from_str("9c").unwrap().rank_char(), '9');
        assert!(Card::from_str("XX").is_none());
        assert!(Card::from_str("A").is_none());
        assert!(Card::from_str("Ahh").is_none());
        assert!(Card::from_str("ah").is_none());
        assert!(Card::from_str("AH").is_none());
    }

    #[test]
    fn test_hole_cards_from_tokens() {
        let hc = HoleCards::from_tokens("Ah Kh").unwrap();
        assert_eq!(hc.cards()[0].to_string(), "Ah");
        assert_eq!(hc.cards()[1].to_string(), "Kh");
        assert!(hc.is_suited());
        assert!(!hc.is_pair());

        // Logged order is preserved, not sorted by rank
        let hc = HoleCards::from_tokens("7d Qc").unwrap();
        assert_eq!(hc.to_string(), "7d Qc");
        assert_eq!(hc.cards()[0].suit(), SUIT_DIAMONDS);
        assert_eq!(hc.cards()[1].suit(), SUIT_CLUBS);

        assert!(HoleCards::from_tokens("Ah").is_none());
        assert!(HoleCards::from_tokens("Ah Kh Qh").is_none());
        assert!(HoleCards::from_tokens("Ah Zz").is_none());
        assert!(HoleCards::from_tokens("Ah Ah").is_none());
    }

    #[test]
    fn test_street_headers() {
        assert_eq!(Street::from_header("*** PRE-FLOP ***"), Some(Street::Preflop));
        assert_eq!(Street::from_header("*** FLOP *** [Ah 7c 2d]"), Some(Street::Flop));
        assert_eq!(Street::from_header("*** TURN *** [Ah 7c 2d][5s]"), Some(Street::Turn));
        assert_eq!(Street::from_header("*** RIVER *** [Ah 7c 2d 5s][Jd]"), Some(Street::River));
        assert_eq!(Street::from_header("*** SHOW DOWN ***"), Some(Street::Showdown));
        assert_eq!(Street::from_header("*** SUMMARY ***"), Some(Street::Showdown));
        assert_eq!(Street::from_header("player1 folds"), None);
    }
}
