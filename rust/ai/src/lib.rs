//! # headsup-ai: Opponent Policies
//!
//! Decision functions for the scripted seat. The engine never calls a policy
//! itself; the caller asks the policy for an action and submits it like any
//! other, so policies can be swapped without touching the betting rules.
//!
//! ## Core Components
//!
//! - [`OpponentPolicy`] - Trait every policy implements
//! - [`reference`] - Coin-flip caller that folds to river bets
//! - [`passive`] - Deterministic check/call policy
//! - [`create_policy`] - Factory by name
//!
//! ## Quick Start
//!
//! ```rust
//! use headsup_ai::create_policy;
//! use headsup_engine::engine::Engine;
//! use headsup_engine::player::{PlayerAction, Seat};
//!
//! let mut policy = create_policy("reference", Some(42)).unwrap();
//! let mut engine = Engine::new(Some(42), 1000);
//! let mut hand = engine.start_hand().unwrap();
//!
//! hand.submit_action(Seat::Human, PlayerAction::Check).unwrap();
//! let stack = hand.player(Seat::Opponent).stack();
//! let action = policy.decide(hand.betting(), hand.round(), stack);
//! assert_eq!(action, PlayerAction::Check);
//! hand.submit_action(Seat::Opponent, action).unwrap();
//! ```

use headsup_engine::betting::{BettingContext, RoundState};
use headsup_engine::player::PlayerAction;
use thiserror::Error;

pub mod passive;
pub mod reference;

/// A pluggable decision function for the seat currently on turn.
///
/// # Example Implementation
///
/// ```rust
/// use headsup_ai::OpponentPolicy;
/// use headsup_engine::betting::{BettingContext, RoundState};
/// use headsup_engine::player::PlayerAction;
///
/// struct AlwaysFold;
///
/// impl OpponentPolicy for AlwaysFold {
///     fn decide(&mut self, _context: &BettingContext, _round: RoundState, _stack: u32) -> PlayerAction {
///         PlayerAction::Fold
///     }
///
///     fn name(&self) -> &str {
///         "always-fold"
///     }
/// }
/// ```
pub trait OpponentPolicy: Send {
    /// Pick an action for `context.current()` in `round`, holding `stack` chips behind.
    ///
    /// Policies are expected to return legal actions; the engine rejects
    /// anything else instead of correcting it. [`BettingContext::legal_actions`]
    /// with the same `stack` lists what is allowed.
    fn decide(&mut self, context: &BettingContext, round: RoundState, stack: u32) -> PlayerAction;

    fn name(&self) -> &str;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolicyError {
    #[error("Unknown opponent policy: {0} (expected one of: {list})", list = POLICY_NAMES.join(", "))]
    Unknown(String),
}

/// Names accepted by [`create_policy`].
pub const POLICY_NAMES: &[&str] = &["reference", "passive"];

/// Builds a policy by name. `seed` makes stochastic policies reproducible.
///
/// # Example
///
/// ```rust
/// use headsup_ai::create_policy;
///
/// let policy = create_policy("passive", None).unwrap();
/// assert_eq!(policy.name(), "passive");
/// assert!(create_policy("shark", None).is_err());
/// ```
pub fn create_policy(
    name: &str,
    seed: Option<u64>,
) -> Result<Box<dyn OpponentPolicy>, PolicyError> {
    match name {
        "reference" => Ok(Box::new(reference::ReferencePolicy::new(seed))),
        "passive" => Ok(Box::new(passive::PassivePolicy)),
        other => Err(PolicyError::Unknown(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_knows_every_listed_name() {
        for name in POLICY_NAMES {
            let policy = create_policy(name, Some(1)).unwrap();
            assert_eq!(policy.name(), *name);
        }
    }

    #[test]
    fn unknown_name_lists_alternatives() {
        let err = create_policy("gto", None).err().unwrap();
        assert_eq!(err, PolicyError::Unknown("gto".into()));
        assert!(err.to_string().contains("reference, passive"));
    }
}
