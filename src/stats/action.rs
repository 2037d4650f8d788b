//! Open-raise detection.

use crate::history::{Action, ActionKind, ParsedHand};

/// Check whether the target's first action is a raise into an unopened pot.
///
/// The scan stops at the target's first action. Before that, any raise or
/// bet by another player opens the pot. If the target never acts the result
/// is `false`.
pub fn is_open_raise<'a, I>(actions: I, target: &str) -> bool
where
    I: IntoIterator<Item = &'a Action>,
{
    let mut unopened = true;
    for action in actions {
        if action.player == target {
            return unopened && action.kind == ActionKind::Raises;
        }
        if action.kind.is_aggressive() {
            unopened = false;
        }
    }
    false
}

/// Open-raise check over a hand's preflop actions only.
pub fn hand_is_open_raise(hand: &ParsedHand, target: &str) -> bool {
    is_open_raise(hand.preflop_actions(), target)
}
