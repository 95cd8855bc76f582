//! Hand evaluation command.
//!
//! `headsup eval As Ks Qs Js Ts 2c 3d` prints the best five-card hand that
//! can be made from the given cards.

use crate::error::CliError;
use crate::formatters::{format_board, format_strength};
use crate::validation::parse_cards;
use headsup_engine::hand::best_hand;
use std::io::Write;

/// Handle the eval command.
///
/// # Errors
///
/// - `CliError::InvalidInput` for unreadable or duplicate cards
/// - `CliError::Engine` when fewer than five cards are given
pub fn handle_eval_command(cards: &[String], out: &mut dyn Write) -> Result<(), CliError> {
    let cards = parse_cards(cards).map_err(CliError::InvalidInput)?;
    let strength = best_hand(&cards)?;
    writeln!(out, "Cards: {}", format_board(&cards))?;
    writeln!(out, "Best hand: {}", format_strength(&strength))?;
    Ok(())
}
