//! Starting hand classification.
//!
//! There are 169 strategically distinct starting hands:
//! - 13 pairs (22, 33, ..., AA)
//! - 78 suited hands (32s, ..., AKs)
//! - 78 offsuit hands (32o, ..., AKo)
//!
//! Ranks are compared by their position in [`RANK_CHARS`], never by
//! character code, so "T" sorts above "9" and "A" above "K".

use std::fmt;

use super::card::{rank_from_char, Card, HoleCards, RANK_CHARS};

/// Side length of the starting hand grid.
pub const GRID_SIZE: usize = 13;

/// Number of distinct starting hand types.
pub const NUM_HAND_TYPES: usize = 169;

/// Shape of a starting hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Shape {
    Pair,
    Suited,
    Offsuit,
}

/// A canonical starting hand such as "AKs", "77" or "T9o".
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandType {
    /// Higher rank (0-12)
    high: u8,
    /// Lower rank, equal to `high` for pairs
    low: u8,
    shape: Shape,
}

impl HandType {
    /// Classify two cards.
    pub fn from_cards(a: Card, b: Card) -> Self {
        let (high, low) = if a.rank() >= b.rank() {
            (a.rank(), b.rank())
        } else {
            (b.rank(), a.rank())
        };

        let shape = if high == low {
            Shape::Pair
        } else if a.suit() == b.suit() {
            Shape::Suited
        } else {
            Shape::Offsuit
        };

        Self { high, low, shape }
    }

    /// Classify a player's hole cards.
    pub fn from_hole_cards(hole_cards: &HoleCards) -> Self {
        let [a, b] = hole_cards.cards();
        Self::from_cards(a, b)
    }

    /// Parse a label like "AA", "AKs" or "T9o".
    pub fn from_label(label: &str) -> Option<Self> {
        let chars: Vec<char> = label.chars().collect();
        let (r1, r2) = match chars.as_slice() {
            [a, b] | [a, b, _] => (rank_from_char(*a)?, rank_from_char(*b)?),
            _ => return None,
        };
        let (high, low) = (r1.max(r2), r1.min(r2));

        let shape = match (chars.get(2), high == low) {
            (None, true) => Shape::Pair,
            (Some('s'), false) => Shape::Suited,
            (Some('o'), false) => Shape::Offsuit,
            _ => return None,
        };

        Some(Self { high, low, shape })
    }

    /// Hand type shown at a cell of the report grid.
    ///
    /// Rows and columns are rank indices, 0 for "2" up to 12 for "A".
    /// Below the diagonal (`row > col`) holds offsuit hands, above it
    /// suited hands, and the diagonal itself the pairs.
    pub fn from_grid(row: usize, col: usize) -> Self {
        debug_assert!(row < GRID_SIZE && col < GRID_SIZE);
        let (row, col) = (row as u8, col as u8);
        if row == col {
            Self { high: row, low: col, shape: Shape::Pair }
        } else if row > col {
            Self { high: row, low: col, shape: Shape::Offsuit }
        } else {
            Self { high: col, low: row, shape: Shape::Suited }
        }
    }

    /// Grid cell (row, col) of this hand type; inverse of [`HandType::from_grid`].
    pub fn grid_cell(&self) -> (usize, usize) {
        let (high, low) = (self.high as usize, self.low as usize);
        match self.shape {
            Shape::Pair | Shape::Offsuit => (high, low),
            Shape::Suited => (low, high),
        }
    }

    /// Index (0-168).
    /// Pairs: 0-12 (22-AA)
    /// Suited: 13-90
    /// Offsuit: 91-168
    pub fn index(&self) -> usize {
        match self.shape {
            Shape::Pair => self.high as usize,
            Shape::Suited => 13 + encode_triangular(self.high, self.low),
            Shape::Offsuit => 91 + encode_triangular(self.high, self.low),
        }
    }

    /// Iterate over all 169 hand types in grid order.
    pub fn all() -> impl Iterator<Item = HandType> {
        (0..GRID_SIZE).flat_map(|row| (0..GRID_SIZE).map(move |col| Self::from_grid(row, col)))
    }

    /// Higher rank (0-12).
    pub fn high(&self) -> u8 {
        self.high
    }

    /// Lower rank (0-12).
    pub fn low(&self) -> u8 {
        self.low
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Canonical label, e.g. "AKs".
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for HandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let high = RANK_CHARS[self.high as usize];
        let low = RANK_CHARS[self.low as usize];
        match self.shape {
            Shape::Pair => write!(f, "{}{}", high, low),
            Shape::Suited => write!(f, "{}{}s", high, low),
            Shape::Offsuit => write!(f, "{}{}o", high, low),
        }
    }
}

impl fmt::Debug for HandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// Encode two ranks (r1 > r2) to triangular index.
fn encode_triangular(r1: u8, r2: u8) -> usize {
    debug_assert!(r1 > r2);
    r1 as usize * (r1 as usize - 1) / 2 + r2 as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn hand(s: &str) -> HoleCards {
        HoleCards::from_tokens(s).unwrap()
    }

    #[test]
    fn test_classify_pairs_suited_offsuit() {
        assert_eq!(HandType::from_hole_cards(&hand("7h 7d")).label(), "77");
        assert_eq!(HandType::from_hole_cards(&hand("Ah Kh")).label(), "AKs");
        assert_eq!(HandType::from_hole_cards(&hand("Kh Ah")).label(), "AKs");
        assert_eq!(HandType::from_hole_cards(&hand("9c Td")).label(), "T9o");
        assert_eq!(HandType::from_hole_cards(&hand("2s Qs")).label(), "Q2s");
    }

    #[test]
    fn test_rank_order_is_not_ascii() {
        // Broadway ranks must sort above digits by rank index
        assert_eq!(HandType::from_hole_cards(&hand("9s Ts")).label(), "T9s");
        assert_eq!(HandType::from_hole_cards(&hand("Jd Ac")).label(), "AJo");
        assert_eq!(HandType::from_hole_cards(&hand("Kc Qc")).label(), "KQs");
        assert_eq!(HandType::from_hole_cards(&hand("Kc Ad")).label(), "AKo");
    }

    #[test]
    fn test_169_distinct_types() {
        let all: Vec<HandType> = HandType::all().collect();
        assert_eq!(all.len(), NUM_HAND_TYPES);

        let labels: HashSet<String> = all.iter().map(|h| h.label()).collect();
        assert_eq!(labels.len(), NUM_HAND_TYPES);

        let pairs = all.iter().filter(|h| h.shape() == Shape::Pair).count();
        let suited = all.iter().filter(|h| h.shape() == Shape::Suited).count();
        let offsuit = all.iter().filter(|h| h.shape() == Shape::Offsuit).count();
        assert_eq!((pairs, suited, offsuit), (13, 78, 78));
    }

    #[test]
    fn test_index_is_dense() {
        let indices: HashSet<usize> = HandType::all().map(|h| h.index()).collect();
        assert_eq!(indices.len(), NUM_HAND_TYPES);
        assert!(indices.iter().all(|&i| i < NUM_HAND_TYPES));
    }

    #[test]
    fn test_every_card_pair_classifies_into_grid() {
        let mut seen = HashSet::new();
        for a in 0..52u8 {
            for b in 0..52u8 {
                if a == b {
                    continue;
                }
                let ht = HandType::from_cards(Card::new(a / 4, a % 4), Card::new(b / 4, b % 4));
                let (row, col) = ht.grid_cell();
                assert_eq!(HandType::from_grid(row, col), ht);
                seen.insert(ht);
            }
        }
        assert_eq!(seen.len(), NUM_HAND_TYPES);
    }

    #[test]
    fn test_grid_layout() {
        let a = RANK_CHARS.iter().position(|&c| c == 'A').unwrap();
        let k = RANK_CHARS.iter().position(|&c| c == 'K').unwrap();
        assert_eq!(HandType::from_grid(a, a).label(), "AA");
        assert_eq!(HandType::from_grid(a, k).label(), "AKo");
        assert_eq!(HandType::from_grid(k, a).label(), "AKs");
        assert_eq!(HandType::from_grid(0, 0).label(), "22");
        assert_eq!(HandType::from_grid(1, 0).label(), "32o");
        assert_eq!(HandType::from_grid(0, 1).label(), "32s");
    }

    #[test]
    fn test_from_label() {
        for ht in HandType::all() {
            assert_eq!(HandType::from_label(&ht.label()), Some(ht));
        }
        assert_eq!(HandType::from_label("KAs").unwrap().label(), "AKs");
        assert!(HandType::from_label("AAs").is_none());
        assert!(HandType::from_label("AK").is_none());
        assert!(HandType::from_label("AKx").is_none());
        assert!(HandType::from_label("A").is_none());
    }
}
