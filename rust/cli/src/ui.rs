//! Terminal output helpers shared by the commands.

use std::io::Write;

use headsup_engine::engine::HandView;
use headsup_engine::player::{PlayerAction, Seat};

use crate::formatters::{format_action, format_board, format_hole};

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Comma-separated action names, e.g. "check, bet, fold".
pub fn format_action_list(actions: &[PlayerAction]) -> String {
    actions
        .iter()
        .map(format_action)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Draws the table: round, board, both seats, pot and whose turn it is.
/// The opponent's cards stay hidden until the view carries them.
pub fn render_table(out: &mut dyn Write, view: &HandView) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "== Hand {} - {} ==", view.hand_id, view.round)?;
    writeln!(out, "Board:    {}", format_board(&view.board))?;
    writeln!(
        out,
        "You:      {}   stack {}",
        format_hole(Some(&view.human_hole)),
        view.stacks[Seat::Human.index()]
    )?;
    writeln!(
        out,
        "Opponent: {}   stack {}",
        format_hole(view.opponent_hole.as_ref()),
        view.stacks[Seat::Opponent.index()]
    )?;
    writeln!(out, "Pot: {}   Table bet: {}", view.pot, view.table_bet)?;
    match view.current {
        Some(Seat::Human) => writeln!(
            out,
            "Your turn. Legal: {}",
            format_action_list(&view.legal_actions)
        ),
        Some(Seat::Opponent) => writeln!(out, "Opponent to act."),
        None => Ok(()),
    }
}
