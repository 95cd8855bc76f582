use crate::errors::IllegalReason;
use crate::player::{PlayerAction as A, BET_INCREMENT};

/// An action that has passed validation, carrying the chips it moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatedAction {
    Fold,
    Check,
    /// Chips needed to match the table bet
    Call(u32),
    /// Opening bet, always [`BET_INCREMENT`]
    Bet(u32),
    /// New table bet and the chips the raiser pays to reach it.
    ///
    /// `cost` is the amount owed plus [`BET_INCREMENT`], not a flat
    /// [`BET_INCREMENT`] like a bet, so commitments stay level with `to`.
    /// The two agree whenever the raiser already matched the table bet.
    Raise { to: u32, cost: u32 },
}

impl ValidatedAction {
    /// Chips this action moves from the stack into the pot.
    pub fn cost(&self) -> u32 {
        match *self {
            ValidatedAction::Fold | ValidatedAction::Check => 0,
            ValidatedAction::Call(c) | ValidatedAction::Bet(c) => c,
            ValidatedAction::Raise { cost, .. } => cost,
        }
    }
}

/// Validates a player action against the table bet and the acting seat's chips.
///
/// Nothing is coerced: a check while a bet is owed, a call with nothing owed,
/// a bet into an open bet and a raise with no bet are all rejected rather than
/// turned into the nearest legal action.
///
/// # Arguments
///
/// * `stack` - Chips the acting seat has behind
/// * `committed` - Chips the acting seat has put in this round
/// * `table_bet` - Highest commitment this round
/// * `action` - The action the seat wishes to perform
///
/// # Errors
///
/// Returns the [`IllegalReason`] describing why the action is not allowed.
///
/// # Examples
///
/// ```
/// use headsup_engine::rules::{validate_action, ValidatedAction};
/// use headsup_engine::player::PlayerAction;
/// use headsup_engine::errors::IllegalReason;
///
/// assert_eq!(validate_action(1000, 0, 10, PlayerAction::Call), Ok(ValidatedAction::Call(10)));
/// assert_eq!(
///     validate_action(1000, 0, 10, PlayerAction::Check),
///     Err(IllegalReason::CheckFacingBet { to_call: 10 })
/// );
/// ```
pub fn validate_action(
    stack: u32,
    committed: u32,
    table_bet: u32,
    action: A,
) -> Result<ValidatedAction, IllegalReason> {
    let to_call = table_bet.saturating_sub(committed);
    let validated = match action {
        A::Fold => ValidatedAction::Fold,
        A::Check => {
            if to_call != 0 {
                return Err(IllegalReason::CheckFacingBet { to_call });
            }
            ValidatedAction::Check
        }
        A::Call => {
            if to_call == 0 {
                return Err(IllegalReason::NothingToCall);
            }
            ValidatedAction::Call(to_call)
        }
        A::Bet => {
            if table_bet != 0 {
                return Err(IllegalReason::BetAlreadyOpen { table_bet });
            }
            ValidatedAction::Bet(BET_INCREMENT)
        }
        A::Raise => {
            if table_bet == 0 {
                return Err(IllegalReason::NoBetToRaise);
            }
            let to = table_bet + BET_INCREMENT;
            ValidatedAction::Raise {
                to,
                cost: to - committed,
            }
        }
    };
    if validated.cost() > stack {
        return Err(IllegalReason::InsufficientChips {
            needed: validated.cost(),
            stack,
        });
    }
    Ok(validated)
}

/// Every action [`validate_action`] would accept in this spot.
pub fn legal_actions(stack: u32, committed: u32, table_bet: u32) -> Vec<A> {
    [A::Check, A::Call, A::Bet, A::Raise, A::Fold]
        .into_iter()
        .filter(|&a| validate_action(stack, committed, table_bet, a).is_ok())
        .collect()
}
