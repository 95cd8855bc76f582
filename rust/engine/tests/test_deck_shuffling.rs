use std::collections::HashSet;

use headsup_engine::cards::{full_deck, Card, Rank, Suit};
use headsup_engine::deck::Deck;
use headsup_engine::errors::GameError;

#[test]
fn full_deck_has_52_distinct_cards() {
    let unique: HashSet<Card> = full_deck().into_iter().collect();
    assert_eq!(unique.len(), 52);
    assert_eq!(Rank::from_u8(11), Some(Rank::Jack));
    assert_eq!(Rank::from_u8(1), None);
    assert_eq!(Rank::Ace.value(), 14);
}

#[test]
fn shuffled_deck_deals_52_unique_cards() {
    let mut deck = Deck::new_shuffled(Some(42));
    let mut set = HashSet::new();
    for i in 0..52 {
        let c = deck.deal_card().expect("should have 52 cards");
        assert!(set.insert(c), "card {:?} duplicated at position {}", c, i);
    }
    assert!(
        deck.deal_card().is_none(),
        "after 52 cards, deck should be empty"
    );
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let mut d1 = Deck::new_shuffled(Some(12345));
    let mut d2 = Deck::new_shuffled(Some(12345));
    assert_eq!(d1.deal(10).unwrap(), d2.deal(10).unwrap());
}

#[test]
fn shuffle_differs_with_different_seed() {
    let mut d1 = Deck::new_shuffled(Some(1));
    let mut d2 = Deck::new_shuffled(Some(2));
    assert_ne!(
        d1.deal(10).unwrap(),
        d2.deal(10).unwrap(),
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn deal_removes_cards_in_order() {
    let cards = vec![
        Card::new(Rank::Ace, Suit::Spades),
        Card::new(Rank::King, Suit::Hearts),
        Card::new(Rank::Two, Suit::Clubs),
    ];
    let mut deck = Deck::from_cards(cards.clone());
    assert_eq!(deck.deal(2).unwrap(), cards[..2].to_vec());
    assert_eq!(deck.remaining(), 1);
    assert_eq!(deck.deal_card(), Some(cards[2]));
}

#[test]
fn dealing_past_the_end_is_rejected_without_consuming() {
    let mut deck = Deck::new_shuffled(Some(9));
    deck.deal(50).unwrap();
    assert_eq!(
        deck.deal(3),
        Err(GameError::DeckExhausted {
            requested: 3,
            remaining: 2
        })
    );
    assert_eq!(deck.remaining(), 2);
    assert_eq!(deck.deal(2).unwrap().len(), 2);
}
