//! Reference opponent: calls half the time, never bets, and gives up on the river.
//!
//! Pre-flop, flop and turn: facing a bet it calls with probability 0.5 and
//! folds otherwise; with nothing owed it checks. River: facing any bet it
//! folds; with nothing owed it checks. It ignores its own cards entirely, so a
//! river bet always takes the pot. A call it cannot pay for becomes a fold.

use crate::OpponentPolicy;
use headsup_engine::betting::{BettingContext, RoundState};
use headsup_engine::player::PlayerAction;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::trace;

/// Probability of calling a bet before the river.
pub const CALL_PROBABILITY: f64 = 0.5;

#[derive(Debug, Clone)]
pub struct ReferencePolicy {
    rng: ChaCha20Rng,
}

impl ReferencePolicy {
    /// `None` seeds from the thread RNG.
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed.unwrap_or_else(rand::random)),
        }
    }
}

impl OpponentPolicy for ReferencePolicy {
    fn decide(&mut self, context: &BettingContext, round: RoundState, stack: u32) -> PlayerAction {
        let seat = context.current();
        if !context.is_facing_bet(seat) {
            return PlayerAction::Check;
        }
        let can_call = context
            .legal_actions(seat, stack)
            .contains(&PlayerAction::Call);
        let action = match round {
            RoundState::River => PlayerAction::Fold,
            _ if !can_call => PlayerAction::Fold,
            _ if self.rng.random_bool(CALL_PROBABILITY) => PlayerAction::Call,
            _ => PlayerAction::Fold,
        };
        trace!(%seat, %round, %action, to_call = context.to_call(seat), "reference policy decided");
        action
    }

    fn name(&self) -> &str {
        "reference"
    }
}
