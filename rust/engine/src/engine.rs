use std::cmp::Ordering;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::betting::{ActionRecord, BettingContext, RoundEvent, RoundState};
use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::{best_hand, Category, HandStrength};
use crate::player::{Player, PlayerAction, Seat, STARTING_STACK};

/// Who took the pot.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Winner {
    Human,
    Opponent,
    Tie,
}

impl From<Seat> for Winner {
    fn from(seat: Seat) -> Self {
        match seat {
            Seat::Human => Winner::Human,
            Seat::Opponent => Winner::Opponent,
        }
    }
}

/// How the hand ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Ending {
    Showdown,
    Fold { by: Seat },
}

/// Result of a finished hand, ready to be settled with [`Engine::settle`].
///
/// `hands` and `board` are always filled in: after an early fold the missing
/// community cards are dealt just to report what each seat would have held.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub hand_id: u32,
    pub winner: Winner,
    pub ending: Ending,
    pub pot: u32,
    /// Best strength per seat, `[human, opponent]`
    pub hands: [HandStrength; 2],
    /// All five community cards
    pub board: Vec<Card>,
    /// Chips each seat put into the pot this hand
    pub contributions: [u32; 2],
    /// Chips each seat receives from the pot
    pub payouts: [u32; 2],
}

impl Outcome {
    pub fn category(&self, seat: Seat) -> Category {
        self.hands[seat.index()].category
    }

    /// Chips won (positive) or lost (negative) by `seat`.
    pub fn net(&self, seat: Seat) -> i64 {
        i64::from(self.payouts[seat.index()]) - i64::from(self.contributions[seat.index()])
    }
}

/// Snapshot of a hand as the presentation layer may show it.
/// The opponent's hole cards stay hidden until the hand is over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandView {
    pub hand_id: u32,
    pub round: RoundState,
    pub human_hole: [Card; 2],
    pub opponent_hole: Option<[Card; 2]>,
    pub board: Vec<Card>,
    pub pot: u32,
    pub table_bet: u32,
    pub stacks: [u32; 2],
    /// Seat to act, `None` once the hand is over
    pub current: Option<Seat>,
    pub legal_actions: Vec<PlayerAction>,
    pub outcome: Option<Outcome>,
}

/// One hand of heads-up play, from the deal to fold or showdown.
///
/// Actions go in through [`Hand::submit_action`]; completed rounds deal the
/// next community cards, and the hand produces an [`Outcome`] once it ends.
///
/// # Examples
///
/// ```
/// use headsup_engine::engine::Engine;
/// use headsup_engine::player::{PlayerAction, Seat};
///
/// let mut engine = Engine::new(Some(7), 1000);
/// let mut hand = engine.start_hand().unwrap();
/// hand.submit_action(Seat::Human, PlayerAction::Bet).unwrap();
/// let view = hand.submit_action(Seat::Opponent, PlayerAction::Call).unwrap();
/// assert_eq!(view.board.len(), 3);
/// assert_eq!(view.pot, 20);
/// ```
#[derive(Debug, Clone)]
pub struct Hand {
    id: u32,
    deck: Deck,
    players: [Player; 2],
    starting_stacks: [u32; 2],
    board: Vec<Card>,
    round: RoundState,
    betting: BettingContext,
    history: Vec<ActionRecord>,
    outcome: Option<Outcome>,
    aborted: bool,
}

impl Hand {
    /// Deals two hole cards to each seat, alternating and human first, and opens pre-flop.
    pub fn start(id: u32, stacks: [u32; 2], mut deck: Deck) -> Result<Self, GameError> {
        let cards = deck.deal(4)?;
        let players = [
            Player::new(Seat::Human, stacks[0], [cards[0], cards[2]]),
            Player::new(Seat::Opponent, stacks[1], [cards[1], cards[3]]),
        ];
        info!(hand_id = id, human_stack = stacks[0], opponent_stack = stacks[1], "hand started");
        Ok(Self {
            id,
            deck,
            players,
            starting_stacks: stacks,
            board: Vec::with_capacity(5),
            round: RoundState::PreFlop,
            betting: BettingContext::new(),
            history: Vec::new(),
            outcome: None,
            aborted: false,
        })
    }

    pub fn id(&self) -> u32 {
        self.id
    }
    pub fn round(&self) -> RoundState {
        self.round
    }
    pub fn betting(&self) -> &BettingContext {
        &self.betting
    }
    pub fn board(&self) -> &[Card] {
        &self.board
    }
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }
    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }
    pub fn is_complete(&self) -> bool {
        self.outcome.is_some()
    }
    /// True once dealing failed after an accepted action. The hand has no
    /// outcome and cannot be continued.
    pub fn is_aborted(&self) -> bool {
        self.aborted
    }

    /// Seat expected to act next, `None` once the hand is over.
    pub fn current_seat(&self) -> Option<Seat> {
        if self.is_complete() || self.aborted {
            None
        } else {
            Some(self.betting.current())
        }
    }

    /// Routes one action into the betting round and advances the hand.
    ///
    /// # Errors
    ///
    /// - [`GameError::HandAlreadyComplete`] once an outcome exists
    /// - [`GameError::IllegalAction`] for out-of-turn or illegal actions; the
    ///   hand is unchanged
    /// - [`GameError::DeckExhausted`] if the board cannot be completed. The
    ///   action was already applied and recorded; the hand is aborted
    /// - [`GameError::HandAborted`] for any action after such a failure
    pub fn submit_action(
        &mut self,
        seat: Seat,
        action: PlayerAction,
    ) -> Result<HandView, GameError> {
        if self.aborted {
            return Err(GameError::HandAborted { hand_id: self.id });
        }
        if self.is_complete() {
            return Err(GameError::HandAlreadyComplete);
        }
        let event = self
            .betting
            .apply(seat, action, &mut self.players)
            .inspect_err(|e| warn!(hand_id = self.id, %seat, %action, "action rejected: {e}"))?;
        debug!(
            hand_id = self.id,
            round = %self.round,
            %seat,
            %action,
            pot = self.betting.pot(),
            "action accepted"
        );
        self.history.push(ActionRecord {
            seat,
            round: self.round,
            action,
        });

        let advanced = match event {
            RoundEvent::TurnPassed { .. } => Ok(()),
            RoundEvent::RoundComplete => self.advance_round(),
            RoundEvent::Folded { by } => self.finish_by_fold(by),
        };
        if let Err(e) = advanced {
            self.aborted = true;
            error!(hand_id = self.id, "hand aborted after {action} by {seat}: {e}");
            return Err(e);
        }
        Ok(self.view())
    }

    pub fn view(&self) -> HandView {
        let current = self.current_seat();
        let legal_actions = current
            .map(|s| self.betting.legal_actions(s, self.player(s).stack()))
            .unwrap_or_default();
        HandView {
            hand_id: self.id,
            round: self.round,
            human_hole: self.player(Seat::Human).hole_cards(),
            opponent_hole: self
                .is_complete()
                .then(|| self.player(Seat::Opponent).hole_cards()),
            board: self.board.clone(),
            pot: self.betting.pot(),
            table_bet: self.betting.table_bet(),
            stacks: [
                self.player(Seat::Human).stack(),
                self.player(Seat::Opponent).stack(),
            ],
            current,
            legal_actions,
            outcome: self.outcome.clone(),
        }
    }

    fn advance_round(&mut self) -> Result<(), GameError> {
        let next = self.round.next();
        let dealt = self.deck.deal(next.board_cards_dealt())?;
        self.board.extend(dealt);
        self.round = next;
        debug!(hand_id = self.id, round = %next, board = self.board.len(), "round complete");
        if next == RoundState::Showdown {
            self.finish_at_showdown()
        } else {
            self.betting.start_round();
            Ok(())
        }
    }

    fn finish_at_showdown(&mut self) -> Result<(), GameError> {
        let board = self.board.clone();
        let hands = self.evaluate_both(&board)?;
        let pot = self.betting.pot();
        let (winner, payouts) = match hands[0].cmp(&hands[1]) {
            Ordering::Greater => (Winner::Human, [pot, 0]),
            Ordering::Less => (Winner::Opponent, [0, pot]),
            // odd chip is not awarded
            Ordering::Equal => (Winner::Tie, [pot / 2, pot / 2]),
        };
        self.record_outcome(winner, Ending::Showdown, hands, board, payouts);
        Ok(())
    }

    fn finish_by_fold(&mut self, by: Seat) -> Result<(), GameError> {
        let missing = 5 - self.board.len();
        let mut board = self.board.clone();
        board.extend(self.deck.deal(missing)?);
        let hands = self.evaluate_both(&board)?;
        let winner = by.other();
        let mut payouts = [0, 0];
        payouts[winner.index()] = self.betting.pot();
        self.record_outcome(winner.into(), Ending::Fold { by }, hands, board, payouts);
        Ok(())
    }

    fn evaluate_both(&self, board: &[Card]) -> Result<[HandStrength; 2], GameError> {
        let strength = |seat: Seat| {
            let mut cards = self.player(seat).hole_cards().to_vec();
            cards.extend_from_slice(board);
            best_hand(&cards)
        };
        Ok([strength(Seat::Human)?, strength(Seat::Opponent)?])
    }

    fn record_outcome(
        &mut self,
        winner: Winner,
        ending: Ending,
        hands: [HandStrength; 2],
        board: Vec<Card>,
        payouts: [u32; 2],
    ) {
        let contributions = [
            self.starting_stacks[0] - self.player(Seat::Human).stack(),
            self.starting_stacks[1] - self.player(Seat::Opponent).stack(),
        ];
        info!(
            hand_id = self.id,
            ?winner,
            ?ending,
            pot = self.betting.pot(),
            human_hand = %hands[0].category,
            opponent_hand = %hands[1].category,
            "hand finished"
        );
        self.outcome = Some(Outcome {
            hand_id: self.id,
            winner,
            ending,
            pot: self.betting.pot(),
            hands,
            board,
            contributions,
            payouts,
        });
    }
}

/// Session-level orchestrator: owns the chip stacks that persist across hands
/// and hands out freshly shuffled decks.
///
/// Stacks change only through [`Engine::settle`]; a hand works on its own copy
/// until it finishes.
#[derive(Debug)]
pub struct Engine {
    stacks: [u32; 2],
    rng: ChaCha20Rng,
    hands_started: u32,
    in_progress: Option<u32>,
}

impl Engine {
    /// Both seats start with `starting_stack`. `None` seeds from the thread RNG.
    pub fn new(seed: Option<u64>, starting_stack: u32) -> Self {
        Self::with_stacks(seed, [starting_stack, starting_stack])
    }

    pub fn with_stacks(seed: Option<u64>, stacks: [u32; 2]) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        Self {
            stacks,
            rng: ChaCha20Rng::seed_from_u64(seed),
            hands_started: 0,
            in_progress: None,
        }
    }

    pub fn stacks(&self) -> [u32; 2] {
        self.stacks
    }

    pub fn stack(&self, seat: Seat) -> u32 {
        self.stacks[seat.index()]
    }

    pub fn hands_started(&self) -> u32 {
        self.hands_started
    }

    /// The first seat with an empty stack, if any. The session cannot go on.
    pub fn busted(&self) -> Option<Seat> {
        Seat::BOTH.into_iter().find(|&s| self.stack(s) == 0)
    }

    /// Shuffles a new deck and deals a hand from the current stacks.
    pub fn start_hand(&mut self) -> Result<Hand, GameError> {
        let deck = Deck::new_shuffled(Some(self.rng.random()));
        self.start_hand_with_deck(deck)
    }

    /// Deals a hand from `deck` as-is. Any unsettled hand is abandoned.
    pub fn start_hand_with_deck(&mut self, deck: Deck) -> Result<Hand, GameError> {
        if let Some(seat) = self.busted() {
            return Err(GameError::StackDepleted { seat });
        }
        let id = self.hands_started + 1;
        let hand = Hand::start(id, self.stacks, deck)?;
        self.hands_started = id;
        self.in_progress = Some(id);
        Ok(hand)
    }

    /// Applies a finished hand's chip movements to the persistent stacks.
    ///
    /// Returns the new stacks. Each outcome settles once, and only for the
    /// hand most recently started.
    pub fn settle(&mut self, outcome: &Outcome) -> Result<[u32; 2], GameError> {
        if self.in_progress != Some(outcome.hand_id) {
            return Err(GameError::UnknownHand {
                hand_id: outcome.hand_id,
            });
        }
        let mut next = self.stacks;
        for seat in Seat::BOTH {
            let i = seat.index();
            let remaining = next[i].checked_sub(outcome.contributions[i]).ok_or(
                GameError::SettlementMismatch {
                    seat,
                    contributed: outcome.contributions[i],
                    stack: next[i],
                },
            )?;
            next[i] = remaining + outcome.payouts[i];
        }
        self.stacks = next;
        self.in_progress = None;
        info!(
            hand_id = outcome.hand_id,
            human_stack = next[0],
            opponent_stack = next[1],
            "stacks settled"
        );
        Ok(next)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(None, STARTING_STACK)
    }
}
