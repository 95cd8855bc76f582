//! # Play Command
//!
//! Interactive heads-up play: the human types actions at a prompt and the
//! configured opponent policy answers after a short pause.
//!
//! Each hand is rendered before every human decision. When a hand ends the
//! outcome is printed with both hand names, chips are settled, and the player
//! is asked whether to continue, unless a `--hands` limit was given, in which
//! case hands are dealt back to back up to the limit. The session also stops
//! as soon as a stack is empty or the player quits.

use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use headsup_ai::{OpponentPolicy, create_policy};
use headsup_engine::engine::{Engine, Hand, Outcome};
use headsup_engine::errors::GameError;
use headsup_engine::player::Seat;
use tracing::{debug, info};

use crate::error::CliError;
use crate::formatters::{format_board, format_hole, format_outcome};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_player_action, parse_yes_no};

/// Settings for one play session, after config and flags are merged.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayOptions {
    /// Stop after this many hands; `None` plays until someone stops.
    pub hands: Option<u32>,
    /// `None` draws a fresh seed, which is printed so the session can be replayed.
    pub seed: Option<u64>,
    pub opponent: String,
    pub opponent_delay_ms: u64,
    pub starting_stack: u32,
}

enum HandEnd {
    Finished(Outcome),
    Quit,
}

/// Handle the play command.
///
/// # Errors
///
/// - `CliError::InvalidInput` for a zero hand limit, zero stack, or unknown opponent
/// - `CliError::Interrupted` if input ends in the middle of a hand
/// - `CliError::Engine` if the engine fails or rejects the opponent's action
pub fn handle_play_command(
    options: PlayOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    if options.hands == Some(0) {
        ui::write_error(err, "hands must be >= 1")?;
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }
    if options.starting_stack == 0 {
        ui::write_error(err, "stack must be >= 1")?;
        return Err(CliError::InvalidInput("stack must be >= 1".to_string()));
    }

    let seed = options.seed.unwrap_or_else(rand::random);
    let mut policy = create_policy(&options.opponent, Some(seed))?;
    let delay = Duration::from_millis(options.opponent_delay_ms);

    writeln!(
        out,
        "play: opponent={} stack={} seed={}",
        policy.name(),
        options.starting_stack,
        seed
    )?;
    info!(seed, opponent = policy.name(), "session started");

    let mut engine = Engine::new(Some(seed), options.starting_stack);
    let mut played = 0u32;

    loop {
        let mut hand = engine.start_hand()?;
        let outcome = match play_hand(&mut hand, policy.as_mut(), delay, stdin, out, err)? {
            HandEnd::Finished(outcome) => outcome,
            HandEnd::Quit => break,
        };
        played += 1;

        writeln!(out)?;
        writeln!(out, "{}", format_outcome(&outcome))?;
        writeln!(
            out,
            "Board: {}  Opponent showed: {}",
            format_board(&outcome.board),
            format_hole(Some(&hand.player(Seat::Opponent).hole_cards()))
        )?;
        let stacks = engine.settle(&outcome)?;
        writeln!(
            out,
            "Stacks: you {}, opponent {}",
            stacks[Seat::Human.index()],
            stacks[Seat::Opponent.index()]
        )?;

        if let Some(seat) = engine.busted() {
            match seat {
                Seat::Human => writeln!(out, "You are out of chips.")?,
                Seat::Opponent => writeln!(out, "Opponent is out of chips.")?,
            }
            break;
        }
        let more = match options.hands {
            Some(limit) => played < limit,
            None => ask_play_again(stdin, out)?,
        };
        if !more {
            break;
        }
    }

    let stacks = engine.stacks();
    writeln!(out, "Hands played: {}", played)?;
    writeln!(
        out,
        "Final stacks: you {}, opponent {}",
        stacks[Seat::Human.index()],
        stacks[Seat::Opponent.index()]
    )?;
    Ok(())
}

/// Runs one hand to completion or until the player quits.
fn play_hand(
    hand: &mut Hand,
    policy: &mut dyn OpponentPolicy,
    delay: Duration,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<HandEnd, CliError> {
    let mut redraw = true;
    loop {
        if let Some(outcome) = hand.outcome() {
            return Ok(HandEnd::Finished(outcome.clone()));
        }
        match hand.betting().current() {
            Seat::Human => {
                if redraw {
                    ui::render_table(out, &hand.view())?;
                    redraw = false;
                }
                write!(out, "Enter action (check/call/bet/raise/fold/q): ")?;
                out.flush()?;

                let Some(input) = read_stdin_line(stdin) else {
                    return Err(CliError::Interrupted("input closed mid-hand".to_string()));
                };
                match parse_player_action(&input) {
                    ParseResult::Action(action) => match hand.submit_action(Seat::Human, action) {
                        Ok(_) => {
                            writeln!(out, "You: {}", action)?;
                            redraw = true;
                        }
                        Err(GameError::IllegalAction { reason, .. }) => {
                            ui::write_error(err, &format!("Illegal action: {}", reason))?;
                        }
                        Err(e) => return Err(e.into()),
                    },
                    ParseResult::Quit => return Ok(HandEnd::Quit),
                    ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
                }
            }
            Seat::Opponent => {
                if !delay.is_zero() {
                    thread::sleep(delay);
                }
                let stack = hand.player(Seat::Opponent).stack();
                let action = policy.decide(hand.betting(), hand.round(), stack);
                debug!(policy = policy.name(), %action, round = %hand.round(), "opponent decided");
                hand.submit_action(Seat::Opponent, action)?;
                writeln!(out, "Opponent: {}", action)?;
                redraw = true;
            }
        }
    }
}

/// Asks until the answer is yes or no. EOF counts as no.
fn ask_play_again(stdin: &mut dyn BufRead, out: &mut dyn Write) -> Result<bool, CliError> {
    loop {
        write!(out, "Play another hand? [y/n] ")?;
        out.flush()?;
        let Some(answer) = read_stdin_line(stdin) else {
            return Ok(false);
        };
        match parse_yes_no(&answer) {
            Some(again) => return Ok(again),
            None => writeln!(out, "Please answer y or n.")?,
        }
    }
}
