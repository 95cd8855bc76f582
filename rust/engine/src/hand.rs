use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;

/// Hand categories from weakest to strongest.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Comparison key for a five-card hand.
///
/// Ordering is lexicographic: category first, then `tiebreak` element by
/// element. Only the ranks that define the category are listed (the quad rank,
/// the triple of a full house, both pairs of two pair, ...), so hands that
/// differ only in kickers compare equal.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct HandStrength {
    pub category: Category,
    // ordered high -> low
    pub tiebreak: Vec<u8>,
}

/// Best strength reachable with any five of `cards`.
///
/// Every 5-card subset is scored (21 of them for seven cards) and the maximum
/// kept. The result does not depend on the order of `cards`.
///
/// # Errors
///
/// [`GameError::NotEnoughCards`] when fewer than five cards are given.
///
/// # Examples
///
/// ```
/// use headsup_engine::cards::{Card, Rank, Suit};
/// use headsup_engine::hand::{best_hand, Category};
///
/// let cards = [
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::new(Rank::King, Suit::Spades),
///     Card::new(Rank::Queen, Suit::Spades),
///     Card::new(Rank::Jack, Suit::Spades),
///     Card::new(Rank::Ten, Suit::Spades),
///     Card::new(Rank::Two, Suit::Clubs),
///     Card::new(Rank::Three, Suit::Diamonds),
/// ];
/// let strength = best_hand(&cards).unwrap();
/// assert_eq!(strength.category, Category::StraightFlush);
/// ```
pub fn best_hand(cards: &[Card]) -> Result<HandStrength, GameError> {
    if cards.len() < 5 {
        return Err(GameError::NotEnoughCards { got: cards.len() });
    }
    cards
        .iter()
        .copied()
        .combinations(5)
        .map(|c| evaluate(&[c[0], c[1], c[2], c[3], c[4]]))
        .max()
        .ok_or(GameError::NotEnoughCards { got: cards.len() })
}

/// Scores exactly five cards. The first matching rule wins, strongest first.
pub fn evaluate(hand: &[Card; 5]) -> HandStrength {
    let mut ranks: Vec<u8> = hand.iter().map(|c| c.rank.value()).collect();
    ranks.sort_unstable_by(|a, b| b.cmp(a));

    let flush = hand.iter().all(|c| c.suit == hand[0].suit);
    let wheel = ranks == [14, 5, 4, 3, 2];
    let straight = wheel || ranks.windows(2).all(|w| w[0] == w[1] + 1);
    let straight_ranks = if wheel { vec![5, 4, 3, 2, 1] } else { ranks.clone() };

    let mut rank_counts = [0u8; 15];
    for &r in &ranks {
        rank_counts[r as usize] += 1;
    }
    let quads = ranks_with_count(&rank_counts, 4);
    let trips = ranks_with_count(&rank_counts, 3);
    let pairs = ranks_with_count(&rank_counts, 2);

    let (category, tiebreak) = if flush && straight {
        (Category::StraightFlush, straight_ranks)
    } else if let Some(&q) = quads.first() {
        (Category::FourOfAKind, vec![q])
    } else if let (Some(&t), false) = (trips.first(), pairs.is_empty()) {
        (Category::FullHouse, vec![t])
    } else if flush {
        (Category::Flush, ranks)
    } else if straight {
        (Category::Straight, straight_ranks)
    } else if let Some(&t) = trips.first() {
        (Category::ThreeOfAKind, vec![t])
    } else if pairs.len() == 2 {
        (Category::TwoPair, pairs)
    } else if let Some(&p) = pairs.first() {
        (Category::OnePair, vec![p])
    } else {
        (Category::HighCard, ranks)
    };

    HandStrength { category, tiebreak }
}

fn ranks_with_count(rank_counts: &[u8; 15], n: u8) -> Vec<u8> {
    (2..=14u8)
        .rev()
        .filter(|&r| rank_counts[r as usize] == n)
        .collect()
}
