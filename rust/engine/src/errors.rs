use thiserror::Error;

use crate::player::{PlayerAction, Seat};

/// Why an action was refused. The hand state is untouched whenever one of
/// these is reported.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum IllegalReason {
    #[error("it is {expected}'s turn")]
    NotYourTurn { expected: Seat },
    #[error("cannot check while {to_call} is owed; call or fold")]
    CheckFacingBet { to_call: u32 },
    #[error("there is no bet to call")]
    NothingToCall,
    #[error("a bet of {table_bet} is already open; raise instead")]
    BetAlreadyOpen { table_bet: u32 },
    #[error("there is no bet to raise; bet instead")]
    NoBetToRaise,
    #[error("needs {needed} chips but only {stack} remain")]
    InsufficientChips { needed: u32, stack: u32 },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Illegal action {action} by {seat}: {reason}")]
    IllegalAction {
        seat: Seat,
        action: PlayerAction,
        reason: IllegalReason,
    },
    #[error("Deck exhausted: requested {requested} cards, {remaining} remaining")]
    DeckExhausted { requested: usize, remaining: usize },
    #[error("Hand already complete")]
    HandAlreadyComplete,
    #[error("Hand {hand_id} was aborted and accepts no more actions")]
    HandAborted { hand_id: u32 },
    #[error("At least 5 cards are required to evaluate a hand, got {got}")]
    NotEnoughCards { got: usize },
    #[error("{seat} has no chips left")]
    StackDepleted { seat: Seat },
    #[error("Hand {hand_id} is not awaiting settlement")]
    UnknownHand { hand_id: u32 },
    #[error("Outcome does not match the table: {seat} contributed {contributed} from a stack of {stack}")]
    SettlementMismatch {
        seat: Seat,
        contributed: u32,
        stack: u32,
    },
}
