// src/components/card.rs

// serde を使う宣言！スナップショットを JSON にして JS 側へ渡す時に使うよ。
use serde::{Deserialize, Serialize};
use std::fmt;

/// カードのスート（マーク）を表す列挙型だよ！♣️♦️❤️♠️
///
/// 並び順 (Club, Diamond, Heart, Spade) は組札 (Foundation) のスロット番号と同じ！
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Club,    // ♣️
    Diamond, // ♦️
    Heart,   // ❤️
    Spade,   // ♠️
}

/// カードの色（赤か黒か）だよ。場札の「色違い」ルールで使う！❤️🖤
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardColor {
    Red,
    Black,
}

impl CardColor {
    /// スートからカードの色を取得する関数。
    pub fn from_suit(suit: Suit) -> Self {
        match suit {
            Suit::Heart | Suit::Diamond => CardColor::Red,
            Suit::Club | Suit::Spade => CardColor::Black,
        }
    }
}

impl Suit {
    /// 組札スロットの番号 (0-3)。
    pub fn index(self) -> usize {
        match self {
            Suit::Club => 0,
            Suit::Diamond => 1,
            Suit::Heart => 2,
            Suit::Spade => 3,
        }
    }

    /// 番号からスートを引く。範囲外なら `None`。
    pub fn from_index(index: usize) -> Option<Suit> {
        ALL_SUITS.get(index).copied()
    }

    pub fn color(self) -> CardColor {
        CardColor::from_suit(self)
    }

    fn symbol(self) -> &'static str {
        match self {
            Suit::Club => "♣",
            Suit::Diamond => "♦",
            Suit::Heart => "♥",
            Suit::Spade => "♠",
        }
    }
}

/// カードのランク（数字）を表す列挙型だよ！ A, 2, 3, ..., K
///
/// PartialOrd, Ord を付けてランクの大小比較もできるようにしてあるよ。👍
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1, // A は 1 として扱うよ
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,  // J (11 扱い)
    Queen, // Q (12 扱い)
    King,  // K (13 扱い)
}

impl Rank {
    /// 1 (Ace) から 13 (King) までの数値。
    pub fn value(self) -> u8 {
        self as u8
    }

    /// ひとつ上のランク。King の上は無いので `None` だよ。
    pub fn next(self) -> Option<Rank> {
        ALL_RANKS.get(self.value() as usize).copied()
    }

    /// ひとつ下のランク。Ace の下は無いので `None`。
    pub fn previous(self) -> Option<Rank> {
        match self {
            Rank::Ace => None,
            _ => ALL_RANKS.get(self.value() as usize - 2).copied(),
        }
    }

    fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// 全スート (組札スロット順)。
pub const ALL_SUITS: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

/// 全ランク (Ace から King まで)。
pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

/// カードそのものを表す値だよ！🃏
///
/// 一度作ったら変わらない (immutable)。表向きか裏向きかはカードじゃなくて
/// 「どこに置かれているか」で決まるから、ここにはフラグを持たせないよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    suit: Suit,
    rank: Rank,
}

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn color(&self) -> CardColor {
        self.suit.color()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}
