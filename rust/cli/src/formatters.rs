//! Card, board, and outcome formatters for terminal display.
//!
//! Pure functions over engine types. Suits render as ♥ ♦ ♣ ♠ when the
//! terminal can show them and as h d c s otherwise; ranks render as 2-10,
//! J, Q, K, A.
//!
//! ## Example
//!
//! ```rust
//! use headsup_engine::cards::{Card, Rank, Suit};
//! use headsup_cli::formatters::{format_board, format_card};
//!
//! let ten = Card::new(Rank::Ten, Suit::Spades);
//! assert!(format_card(&ten) == "10♠" || format_card(&ten) == "10s");
//! assert!(format_board(&[ten]).starts_with("[10"));
//! ```

use headsup_engine::cards::{Card, Rank, Suit};
use headsup_engine::engine::{Ending, Outcome, Winner};
use headsup_engine::hand::HandStrength;
use headsup_engine::player::{PlayerAction, Seat};

/// Set to force ASCII suits regardless of the terminal.
pub const ASCII_ENV: &str = "HEADSUP_ASCII";

/// Placeholder shown for a card the player is not allowed to see.
pub const HIDDEN_CARD: &str = "??";

/// Whether suit symbols can be drawn.
///
/// On Windows only modern terminals (WT_SESSION, TERM_PROGRAM,
/// VSCODE_INJECTION) qualify; elsewhere Unicode is assumed unless
/// `HEADSUP_ASCII` is set.
pub fn supports_unicode() -> bool {
    if std::env::var_os(ASCII_ENV).is_some() {
        return false;
    }
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit) -> String {
    let symbol = if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
    };
    symbol.to_string()
}

/// Rank label: numerals up to 10, then J, Q, K, A.
pub fn format_rank(rank: &Rank) -> String {
    match rank {
        Rank::Jack => "J".to_string(),
        Rank::Queen => "Q".to_string(),
        Rank::King => "K".to_string(),
        Rank::Ace => "A".to_string(),
        numeric => numeric.value().to_string(),
    }
}

/// Rank followed by suit, e.g. "A♠" or "As".
pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(&card.rank), format_suit(&card.suit))
}

/// Both hole cards, or two placeholders when `cards` is hidden.
///
/// ```rust
/// # use headsup_cli::formatters::format_hole;
/// assert_eq!(format_hole(None), "?? ??");
/// ```
pub fn format_hole(cards: Option<&[Card; 2]>) -> String {
    match cards {
        Some([a, b]) => format!("{} {}", format_card(a), format_card(b)),
        None => format!("{} {}", HIDDEN_CARD, HIDDEN_CARD),
    }
}

/// Board in bracket notation, `[]` when no cards are out yet.
pub fn format_board(cards: &[Card]) -> String {
    let formatted: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", formatted.join(" "))
}

pub fn format_action(action: &PlayerAction) -> String {
    action.to_string()
}

/// Category name plus the ranks that decide ties, e.g. "Straight (5)".
pub fn format_strength(strength: &HandStrength) -> String {
    let ranks: Vec<String> = strength
        .tiebreak
        .iter()
        .map(|&v| match Rank::from_u8(v) {
            Some(rank) => format_rank(&rank),
            None => v.to_string(),
        })
        .collect();
    format!("{} ({})", strength.category, ranks.join(" "))
}

/// The line announcing who took the pot, with both hand names.
///
/// ```rust
/// use headsup_engine::engine::Engine;
/// use headsup_engine::player::{PlayerAction, Seat};
/// # use headsup_cli::formatters::format_outcome;
///
/// let mut engine = Engine::new(Some(3), 1000);
/// let mut hand = engine.start_hand().unwrap();
/// let view = hand.submit_action(Seat::Human, PlayerAction::Fold).unwrap();
/// let line = format_outcome(view.outcome.as_ref().unwrap());
/// assert!(line.starts_with("Opponent wins, you folded!"));
/// ```
pub fn format_outcome(outcome: &Outcome) -> String {
    let headline = match (outcome.winner, outcome.ending) {
        (Winner::Human, Ending::Fold { .. }) => "You win, opponent folded!".to_string(),
        (Winner::Opponent, Ending::Fold { .. }) => "Opponent wins, you folded!".to_string(),
        (Winner::Human, Ending::Showdown) => format!("You win {} at showdown!", outcome.pot),
        (Winner::Opponent, Ending::Showdown) => {
            format!("Opponent wins {} at showdown!", outcome.pot)
        }
        (Winner::Tie, _) => format!("Split pot of {}!", outcome.pot),
    };
    format!(
        "{} Your hand: {}, Opponent's hand: {}",
        headline,
        outcome.category(Seat::Human),
        outcome.category(Seat::Opponent)
    )
}
