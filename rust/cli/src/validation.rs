//! Input parsing for interactive play and the `eval` command.
//!
//! Parsing only checks that the text names something; whether an action is
//! legal right now is decided by the engine.

use std::collections::HashSet;

use headsup_engine::cards::{Card, Rank, Suit};
use headsup_engine::player::PlayerAction;

/// Outcome of parsing one line typed at the action prompt.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    Action(PlayerAction),
    /// `q` or `quit`
    Quit,
    /// Unrecognized input with a message for the player
    Invalid(String),
}

/// Parse an action word (case-insensitive).
///
/// Accepts `check`/`c`, `call`, `bet`/`b`, `raise`/`r`, `fold`/`f` and
/// `q`/`quit`. Amounts are not taken: bets and raises are fixed size.
///
/// # Example
///
/// ```rust
/// # use headsup_cli::validation::{parse_player_action, ParseResult};
/// use headsup_engine::player::PlayerAction;
///
/// assert_eq!(parse_player_action(" Bet "), ParseResult::Action(PlayerAction::Bet));
/// assert_eq!(parse_player_action("q"), ParseResult::Quit);
/// assert!(matches!(parse_player_action("shove"), ParseResult::Invalid(_)));
/// ```
pub fn parse_player_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some(&word) = parts.first() else {
        return ParseResult::Invalid("Empty input".to_string());
    };
    if parts.len() > 1 {
        return ParseResult::Invalid(format!(
            "Bets are fixed size; enter just '{}' without an amount",
            word
        ));
    }

    match word {
        "q" | "quit" => ParseResult::Quit,
        "fold" | "f" => ParseResult::Action(PlayerAction::Fold),
        "check" | "c" => ParseResult::Action(PlayerAction::Check),
        "call" => ParseResult::Action(PlayerAction::Call),
        "bet" | "b" => ParseResult::Action(PlayerAction::Bet),
        "raise" | "r" => ParseResult::Action(PlayerAction::Raise),
        _ => ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Valid actions: check, call, bet, raise, fold, q",
            word
        )),
    }
}

/// Parse a card such as `As`, `td`, `10h` or `Q♣`.
///
/// ```rust
/// # use headsup_cli::validation::parse_card;
/// use headsup_engine::cards::{Card, Rank, Suit};
///
/// assert_eq!(parse_card("10h"), Ok(Card::new(Rank::Ten, Suit::Hearts)));
/// assert_eq!(parse_card("Ts"), Ok(Card::new(Rank::Ten, Suit::Spades)));
/// assert!(parse_card("1x").is_err());
/// ```
pub fn parse_card(input: &str) -> Result<Card, String> {
    let input = input.trim();
    let mut chars = input.chars();
    let suit_char = chars
        .next_back()
        .ok_or_else(|| "Empty card".to_string())?;
    let rank_text = chars.as_str();

    let suit = match suit_char.to_ascii_lowercase() {
        'h' | '♥' => Suit::Hearts,
        'd' | '♦' => Suit::Diamonds,
        'c' | '♣' => Suit::Clubs,
        's' | '♠' => Suit::Spades,
        _ => return Err(format!("Invalid suit in card '{}'", input)),
    };
    let rank = match rank_text.to_ascii_uppercase().as_str() {
        "T" | "10" => Rank::Ten,
        "J" => Rank::Jack,
        "Q" => Rank::Queen,
        "K" => Rank::King,
        "A" => Rank::Ace,
        digit => digit
            .parse::<u8>()
            .ok()
            .filter(|v| (2..=9).contains(v))
            .and_then(Rank::from_u8)
            .ok_or_else(|| format!("Invalid rank in card '{}'", input))?,
    };
    Ok(Card::new(rank, suit))
}

/// Parse a list of distinct cards.
pub fn parse_cards<S: AsRef<str>>(inputs: &[S]) -> Result<Vec<Card>, String> {
    let mut seen = HashSet::new();
    let mut cards = Vec::with_capacity(inputs.len());
    for input in inputs {
        let card = parse_card(input.as_ref())?;
        if !seen.insert(card) {
            return Err(format!("Duplicate card '{}'", input.as_ref().trim()));
        }
        cards.push(card);
    }
    Ok(cards)
}

/// `Some(true)` for y/yes, `Some(false)` for n/no, `None` otherwise.
pub fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}
