//! # headsup-engine: Heads-up Hold'em Engine Core
//!
//! A Texas Hold'em engine for one human against one scripted opponent.
//! Provides the deck, the hand evaluator, the betting round state machine and
//! the hand orchestrator that ties them together. Rendering, prompts and the
//! opponent's decision logic live outside this crate.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card)
//! - [`deck`] - Seeded shuffling and dealing without replacement
//! - [`hand`] - Best-five-of-n evaluation and strength comparison
//! - [`player`] - Seats, actions and stacks
//! - [`rules`] - Per-action legality and chip cost
//! - [`betting`] - Betting round state machine
//! - [`engine`] - Hand orchestration, outcomes and settlement
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use headsup_engine::engine::{Engine, Winner};
//! use headsup_engine::player::{PlayerAction, Seat};
//!
//! let mut engine = Engine::new(Some(42), 1000);
//! let mut hand = engine.start_hand().unwrap();
//!
//! let view = hand.submit_action(Seat::Human, PlayerAction::Fold).unwrap();
//! let outcome = view.outcome.expect("fold ends the hand");
//! assert_eq!(outcome.winner, Winner::Opponent);
//!
//! engine.settle(&outcome).unwrap();
//! assert_eq!(engine.stacks(), [1000, 1000]);
//! ```
//!
//! ## Action Validation
//!
//! ```rust
//! use headsup_engine::rules::validate_action;
//! use headsup_engine::player::PlayerAction;
//!
//! // stack, committed this round, table bet
//! match validate_action(1000, 0, 10, PlayerAction::Check) {
//!     Ok(validated) => println!("Valid action: {:?}", validated),
//!     Err(reason) => println!("Rejected: {}", reason),
//! }
//! ```

pub mod betting;
pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod hand;
pub mod player;
pub mod rules;
