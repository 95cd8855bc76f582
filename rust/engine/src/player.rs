use crate::cards::Card;
use crate::errors::IllegalReason;
use serde::{Deserialize, Serialize};

/// The two seats at the table. The human always acts first in every round.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// The interactive player
    Human,
    /// The scripted opponent
    Opponent,
}

impl Seat {
    pub const BOTH: [Seat; 2] = [Seat::Human, Seat::Opponent];

    pub fn other(self) -> Seat {
        match self {
            Seat::Human => Seat::Opponent,
            Seat::Opponent => Seat::Human,
        }
    }

    /// Position of this seat in per-seat arrays (`[human, opponent]`).
    pub fn index(self) -> usize {
        match self {
            Seat::Human => 0,
            Seat::Opponent => 1,
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seat::Human => f.write_str("human"),
            Seat::Opponent => f.write_str("opponent"),
        }
    }
}

/// Represents a player action during a betting round.
/// Bets and raises always move the table bet by [`BET_INCREMENT`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Fold and forfeit the hand
    Fold,
    /// Check (only valid when nothing is owed)
    Check,
    /// Match the current table bet
    Call,
    /// Open the betting at the fixed increment
    Bet,
    /// Raise the table bet by the fixed increment
    Raise,
}

impl std::fmt::Display for PlayerAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PlayerAction::Fold => "fold",
            PlayerAction::Check => "check",
            PlayerAction::Call => "call",
            PlayerAction::Bet => "bet",
            PlayerAction::Raise => "raise",
        };
        f.write_str(s)
    }
}

/// Chips moved by every bet or raise.
pub const BET_INCREMENT: u32 = 10;

/// Default starting stack size for each seat in chips
pub const STARTING_STACK: u32 = 1_000;

/// A seat's holdings for the current hand: its hole cards and remaining stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    seat: Seat,
    stack: u32,
    hole: [Card; 2],
}

impl Player {
    pub fn new(seat: Seat, stack: u32, hole: [Card; 2]) -> Self {
        Self { seat, stack, hole }
    }

    pub fn seat(&self) -> Seat {
        self.seat
    }

    pub fn stack(&self) -> u32 {
        self.stack
    }

    pub fn hole_cards(&self) -> [Card; 2] {
        self.hole
    }

    /// Moves `amount` out of the stack. The stack is left as-is when it is too short.
    pub fn pay(&mut self, amount: u32) -> Result<(), IllegalReason> {
        self.stack = self
            .stack
            .checked_sub(amount)
            .ok_or(IllegalReason::InsufficientChips {
                needed: amount,
                stack: self.stack,
            })?;
        Ok(())
    }
}
