use serde::{Deserialize, Serialize};

use crate::errors::{GameError, IllegalReason};
use crate::player::{Player, PlayerAction, Seat};
use crate::rules::{legal_actions, validate_action, ValidatedAction};

/// Stage of a hand. Also counts completed betting rounds (0..=4).
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum RoundState {
    /// Hole cards dealt, no board
    PreFlop,
    /// Three community cards
    Flop,
    /// Fourth community card
    Turn,
    /// Fifth community card
    River,
    /// Betting finished without a fold; hands are compared
    Showdown,
}

impl RoundState {
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn next(self) -> RoundState {
        match self {
            RoundState::PreFlop => RoundState::Flop,
            RoundState::Flop => RoundState::Turn,
            RoundState::Turn => RoundState::River,
            RoundState::River | RoundState::Showdown => RoundState::Showdown,
        }
    }

    /// Community cards dealt when this round begins.
    pub fn board_cards_dealt(self) -> usize {
        match self {
            RoundState::Flop => 3,
            RoundState::Turn | RoundState::River => 1,
            RoundState::PreFlop | RoundState::Showdown => 0,
        }
    }
}

impl std::fmt::Display for RoundState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RoundState::PreFlop => "pre-flop",
            RoundState::Flop => "flop",
            RoundState::Turn => "turn",
            RoundState::River => "river",
            RoundState::Showdown => "showdown",
        };
        f.write_str(s)
    }
}

/// Whether the hand can still take actions.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Terminal {
    Active,
    FoldedBy(Seat),
}

/// What an accepted action did to the round.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum RoundEvent {
    /// The round goes on with `next` to act
    TurnPassed { next: Seat },
    /// Nobody is left to act; the round is over
    RoundComplete,
    /// `by` folded; the hand is over
    Folded { by: Seat },
}

/// One accepted action, in the order it happened.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub seat: Seat,
    pub round: RoundState,
    pub action: PlayerAction,
}

/// Betting state of the hand in progress.
///
/// `needs_to_act` holds the seats that still owe a decision this round, in
/// turn order. The round is over exactly when it empties without a fold. A
/// bet or raise puts the other seat back on the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BettingContext {
    pot: u32,
    table_bet: u32,
    committed: [u32; 2],
    needs_to_act: Vec<Seat>,
    current: Seat,
    terminal: Terminal,
}

impl Default for BettingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl BettingContext {
    /// Empty pot, first round open with the human to act.
    pub fn new() -> Self {
        let mut ctx = Self {
            pot: 0,
            table_bet: 0,
            committed: [0, 0],
            needs_to_act: Vec::with_capacity(2),
            current: Seat::Human,
            terminal: Terminal::Active,
        };
        ctx.start_round();
        ctx
    }

    /// Clears per-round bets and puts both seats back on the list. The pot carries over.
    pub fn start_round(&mut self) {
        self.table_bet = 0;
        self.committed = [0, 0];
        self.needs_to_act.clear();
        self.needs_to_act.extend(Seat::BOTH);
        self.current = Seat::Human;
    }

    pub fn pot(&self) -> u32 {
        self.pot
    }
    pub fn table_bet(&self) -> u32 {
        self.table_bet
    }
    pub fn committed(&self, seat: Seat) -> u32 {
        self.committed[seat.index()]
    }
    pub fn to_call(&self, seat: Seat) -> u32 {
        self.table_bet.saturating_sub(self.committed(seat))
    }
    pub fn is_facing_bet(&self, seat: Seat) -> bool {
        self.to_call(seat) > 0
    }
    pub fn needs_to_act(&self) -> &[Seat] {
        &self.needs_to_act
    }
    pub fn current(&self) -> Seat {
        self.current
    }
    pub fn terminal(&self) -> Terminal {
        self.terminal
    }

    /// Actions `seat` could legally take right now with `stack` behind.
    pub fn legal_actions(&self, seat: Seat, stack: u32) -> Vec<PlayerAction> {
        if self.terminal != Terminal::Active || seat != self.current {
            return Vec::new();
        }
        legal_actions(stack, self.committed(seat), self.table_bet)
    }

    /// Applies one action for `seat`, moving chips from its stack into the pot.
    ///
    /// All checks run before anything is mutated, so on error both the context
    /// and `players` are exactly as they were.
    ///
    /// # Errors
    ///
    /// - [`GameError::HandAlreadyComplete`] after a fold
    /// - [`GameError::IllegalAction`] when `seat` is not on turn or the action
    ///   is not allowed in this spot
    pub fn apply(
        &mut self,
        seat: Seat,
        action: PlayerAction,
        players: &mut [Player; 2],
    ) -> Result<RoundEvent, GameError> {
        if self.terminal != Terminal::Active {
            return Err(GameError::HandAlreadyComplete);
        }
        let illegal = |reason: IllegalReason| GameError::IllegalAction {
            seat,
            action,
            reason,
        };
        if seat != self.current {
            return Err(illegal(IllegalReason::NotYourTurn {
                expected: self.current,
            }));
        }

        let player = &mut players[seat.index()];
        let validated = validate_action(player.stack(), self.committed(seat), self.table_bet, action)
            .map_err(illegal)?;
        player.pay(validated.cost()).map_err(illegal)?;
        self.pot += validated.cost();

        match validated {
            ValidatedAction::Fold => {
                self.terminal = Terminal::FoldedBy(seat);
                self.needs_to_act.clear();
                return Ok(RoundEvent::Folded { by: seat });
            }
            ValidatedAction::Check => {}
            ValidatedAction::Call(_) => {
                self.committed[seat.index()] = self.table_bet;
            }
            ValidatedAction::Bet(amount) => self.open_to(seat, amount),
            ValidatedAction::Raise { to, .. } => self.open_to(seat, to),
        }
        self.needs_to_act.retain(|&s| s != seat);

        match self.needs_to_act.first() {
            None => Ok(RoundEvent::RoundComplete),
            Some(&next) => {
                self.current = next;
                Ok(RoundEvent::TurnPassed { next })
            }
        }
    }

    fn open_to(&mut self, seat: Seat, table_bet: u32) {
        self.table_bet = table_bet;
        self.committed[seat.index()] = table_bet;
        let other = seat.other();
        if !self.needs_to_act.contains(&other) {
            self.needs_to_act.push(other);
        }
    }
}
