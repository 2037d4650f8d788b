//! Aggregated open-raise counts by position and starting hand.
//!
//! The table is sparse: a (position, hand type) cell exists only once a hand
//! has touched it, and starts from zero. Counts are plain sums, so tables
//! built from disjoint batches of hands can be merged in any order.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::action::hand_is_open_raise;
use crate::history::{HandType, ParsedHand, Position};

/// Counters for one (position, hand type) cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaiseCounter {
    /// Hands dealt
    pub total: u64,
    /// Hands the target open-raised
    pub open_raises: u64,
}

impl RaiseCounter {
    pub fn record(&mut self, open_raise: bool) {
        self.total += 1;
        if open_raise {
            self.open_raises += 1;
        }
    }

    pub fn merge(&mut self, other: &RaiseCounter) {
        self.total += other.total;
        self.open_raises += other.open_raises;
    }

    /// Open-raise percentage (0-100), 0 when no hands were dealt.
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.open_raises as f64 / self.total as f64 * 100.0
        }
    }
}

/// Position -> hand type -> counters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OpenRaiseTable {
    cells: FxHashMap<Position, FxHashMap<HandType, RaiseCounter>>,
    hands: u64,
}

impl OpenRaiseTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from a batch of hands.
    pub fn from_hands<'a, I>(hands: I, target: &str) -> Self
    where
        I: IntoIterator<Item = &'a ParsedHand>,
    {
        let mut table = Self::new();
        for hand in hands {
            table.record(hand, target);
        }
        table
    }

    /// Fold one hand into the table. Returns whether it was an open raise.
    pub fn record(&mut self, hand: &ParsedHand, target: &str) -> bool {
        let open_raise = hand_is_open_raise(hand, target);
        self.record_outcome(hand.position(), hand.hand_type(), open_raise);
        open_raise
    }

    /// Count one hand of `hand_type` played from `position`.
    pub fn record_outcome(&mut self, position: Position, hand_type: HandType, open_raise: bool) {
        self.cells
            .entry(position)
            .or_default()
            .entry(hand_type)
            .or_default()
            .record(open_raise);
        self.hands += 1;
    }

    /// Add every cell of `other` to this table.
    pub fn merge(&mut self, other: &OpenRaiseTable) {
        for (position, hand_types) in &other.cells {
            let row = self.cells.entry(*position).or_default();
            for (hand_type, counter) in hand_types {
                row.entry(*hand_type).or_default().merge(counter);
            }
        }
        self.hands += other.hands;
    }

    /// Consuming merge, for reductions.
    pub fn merged(mut self, other: OpenRaiseTable) -> Self {
        self.merge(&other);
        self
    }

    /// Counters for a cell; zero if no hand touched it.
    pub fn get(&self, position: Position, hand_type: HandType) -> RaiseCounter {
        self.cells
            .get(&position)
            .and_then(|row| row.get(&hand_type))
            .copied()
            .unwrap_or_default()
    }

    /// Counters for a cell addressed by label, e.g. `cell(Position::BTN, "AKs")`.
    pub fn cell(&self, position: Position, label: &str) -> Option<RaiseCounter> {
        HandType::from_label(label).map(|hand_type| self.get(position, hand_type))
    }

    /// Whether any hand touched this cell.
    pub fn contains(&self, position: Position, hand_type: HandType) -> bool {
        self.cells
            .get(&position)
            .is_some_and(|row| row.contains_key(&hand_type))
    }

    /// Reported positions with at least one hand, in seat order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::TABLE
            .into_iter()
            .filter(move |p| self.cells.contains_key(p))
    }

    /// Touched cells of one position, ordered by hand type index.
    pub fn hand_types(&self, position: Position) -> Vec<(HandType, RaiseCounter)> {
        let mut cells: Vec<(HandType, RaiseCounter)> = self
            .cells
            .get(&position)
            .map(|row| row.iter().map(|(h, c)| (*h, *c)).collect())
            .unwrap_or_default();
        cells.sort_by_key(|(h, _)| h.index());
        cells
    }

    /// Sum of all cells of one position.
    pub fn position_total(&self, position: Position) -> RaiseCounter {
        let mut total = RaiseCounter::default();
        if let Some(row) = self.cells.get(&position) {
            for counter in row.values() {
                total.merge(counter);
            }
        }
        total
    }

    /// Number of hands recorded, including seats outside the report.
    pub fn hands(&self) -> u64 {
        self.hands
    }

    pub fn is_empty(&self) -> bool {
        self.hands == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::{Action, ActionKind, HoleCards};

    fn hand(seat: u32, cards: &str, actions: &[(&str, ActionKind)]) -> ParsedHand {
        let actions = actions.iter().map(|(p, k)| Action::preflop(*p, *k)).collect();
        ParsedHand::new("1-1-1", seat, HoleCards::from_tokens(cards).unwrap(), actions)
    }

    fn ht(label: &str) -> HandType {
        HandType::from_label(label).unwrap()
    }

    #[test]
    fn test_single_open_raise() {
        use crate::history::ActionKind::*;
        let h = hand(4, "Ah Kh", &[("P1", Folds), ("P2", Folds), ("hero", Raises), ("P5", Folds), ("P6", Folds)]);
        let mut table = OpenRaiseTable::new();
        assert!(table.record(&h, "hero"));

        assert_eq!(table.get(Position::BTN, ht("AKs")), RaiseCounter { total: 1, open_raises: 1 });
        assert_eq!(table.cell(Position::BTN, "AKs").unwrap().percentage(), 100.0);
        assert_eq!(table.hands(), 1);
        assert_eq!(table.positions().collect::<Vec<_>>(), vec![Position::BTN]);
    }

    #[test]
    fn test_raised_before_target() {
        use crate::history::ActionKind::*;
        let h = hand(4, "Ah Kh", &[("P1", Raises), ("P2", Folds), ("hero", Raises)]);
        let mut table = OpenRaiseTable::new();
        assert!(!table.record(&h, "hero"));

        let counter = table.get(Position::BTN, ht("AKs"));
        assert_eq!(counter, RaiseCounter { total: 1, open_raises: 0 });
        assert_eq!(counter.percentage(), 0.0);
    }

    #[test]
    fn test_target_never_acts_preflop() {
        use crate::history::ActionKind::*;
        let h = hand(4, "Ah Kh", &[("P1", Folds), ("P2", Raises)]);
        let mut table = OpenRaiseTable::new();
        assert!(!table.record(&h, "hero"));

        assert_eq!(table.get(Position::BTN, ht("AKs")), RaiseCounter { total: 1, open_raises: 0 });
        assert_eq!(table.hands(), 1);
    }

    #[test]
    fn test_untouched_cells_are_zero() {
        let table = OpenRaiseTable::new();
        assert!(table.is_empty());
        assert_eq!(table.get(Position::UTG, ht("72o")), RaiseCounter::default());
        assert_eq!(table.get(Position::UTG, ht("72o")).percentage(), 0.0);
        assert!(!table.contains(Position::UTG, ht("72o")));
        assert!(table.cell(Position::UTG, "bogus").is_none());
    }

    #[test]
    fn test_unknown_seat_is_counted_not_reported() {
        use crate::history::ActionKind::*;
        let h = hand(8, "7c 7d", &[("hero", Raises)]);
        let table = OpenRaiseTable::from_hands([&h], "hero");
        assert_eq!(table.hands(), 1);
        assert_eq!(table.get(Position::Unknown, ht("77")).total, 1);
        assert_eq!(table.positions().count(), 0);
    }

    #[test]
    fn test_merge_is_commutative() {
        use crate::history::ActionKind::*;
        let hands = vec![
            hand(1, "Ah Kh", &[("hero", Raises)]),
            hand(1, "Ah Kd", &[("hero", Folds)]),
            hand(2, "9s 9d", &[("P1", Raises), ("hero", Calls)]),
            hand(4, "Ah Kh", &[("P1", Folds), ("hero", Raises)]),
            hand(5, "Tc 9c", &[("P4", Calls), ("hero", Raises)]),
            hand(6, "2c 7d", &[("P5", Bets), ("hero", Folds)]),
            hand(1, "Ks Ah", &[("hero", Raises)]),
        ];

        let whole = OpenRaiseTable::from_hands(&hands, "hero");
        let (left, right) = hands.split_at(3);
        let a = OpenRaiseTable::from_hands(left, "hero");
        let b = OpenRaiseTable::from_hands(right, "hero");

        assert_eq!(a.clone().merged(b.clone()), whole);
        assert_eq!(b.merged(a), whole);

        assert_eq!(whole.get(Position::UTG, ht("AKo")), RaiseCounter { total: 2, open_raises: 1 });
        assert_eq!(whole.position_total(Position::UTG), RaiseCounter { total: 3, open_raises: 2 });
        assert_eq!(whole.cell(Position::SB, "T9s").unwrap().open_raises, 1);
    }

    #[test]
    fn test_hand_types_sorted() {
        let mut table = OpenRaiseTable::new();
        table.record_outcome(Position::CO, ht("AKo"), true);
        table.record_outcome(Position::CO, ht("22"), false);
        table.record_outcome(Position::CO, ht("AKs"), true);
        let labels: Vec<String> = table.hand_types(Position::CO).iter().map(|(h, _)| h.label()).collect();
        assert_eq!(labels, vec!["22", "AKs", "AKo"]);
        assert!(table.hand_types(Position::BB).is_empty());
    }
}
