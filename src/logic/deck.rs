// src/logic/deck.rs

use itertools::Itertools;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng, SeedableRng};

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};
use crate::config::rules::DECK_SIZE;

/// 標準的な52枚のカードデッキを生成する関数だよ！🃏
///
/// スート順 (Club, Diamond, Heart, Spade) に、各スート Ace から King まで並ぶ。
pub fn create_standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for &suit in ALL_SUITS.iter() {
        for &rank in ALL_RANKS.iter() {
            deck.push(Card::new(suit, rank));
        }
    }
    deck
}

/// カードデッキをシャッフルする関数だよ。
pub fn shuffle_deck(deck: &mut [Card]) {
    let mut rng = thread_rng();
    shuffle_deck_with_rng(deck, &mut rng);
}

/// 乱数生成器を指定してシャッフルする (Fisher–Yates)。
pub fn shuffle_deck_with_rng<R: Rng + ?Sized>(deck: &mut [Card], rng: &mut R) {
    deck.shuffle(rng);
}

/// シャッフル済みのデッキを作る。`seed` があれば同じ並びを再現できるよ。
pub fn shuffled_deck(seed: Option<u64>) -> Vec<Card> {
    let mut deck = create_standard_deck();
    match seed {
        Some(seed) => shuffle_deck_with_rng(&mut deck, &mut StdRng::seed_from_u64(seed)),
        None => shuffle_deck(&mut deck),
    }
    deck
}

/// ちょうど52種類のカードが1枚ずつあるか。
pub fn is_standard_deck(cards: &[Card]) -> bool {
    cards.len() == DECK_SIZE && cards.iter().all_unique()
}
