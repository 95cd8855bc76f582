//! Deterministic opponent that never folds and never puts in a chip of its own.

use crate::OpponentPolicy;
use headsup_engine::betting::{BettingContext, RoundState};
use headsup_engine::player::PlayerAction;

/// Checks when it can, calls when it must, folds when the call is out of reach.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassivePolicy;

impl OpponentPolicy for PassivePolicy {
    fn decide(&mut self, context: &BettingContext, _round: RoundState, stack: u32) -> PlayerAction {
        let seat = context.current();
        if !context.is_facing_bet(seat) {
            PlayerAction::Check
        } else if context
            .legal_actions(seat, stack)
            .contains(&PlayerAction::Call)
        {
            PlayerAction::Call
        } else {
            PlayerAction::Fold
        }
    }

    fn name(&self) -> &str {
        "passive"
    }
}
