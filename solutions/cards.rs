// Playing-card notation, fully annotated.
//
// Reference solution for the `cards` exercise. The card grammar
// (rank 2-10/J/Q/K/A followed by a suit glyph) lives in two enums; parsing
// and printing round-trip through `FromStr` and `Display`.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Suit {
    Spades,
    Hearts,
    Clubs,
    Diamonds,
}

impl Suit {
    const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Clubs, Suit::Diamonds];

    // The glyphs carry a trailing variation selector, so suits are matched as
    // string suffixes rather than single chars.
    fn glyph(self) -> &'static str {
        match self {
            Suit::Spades => "\u{2660}\u{fe0f}",
            Suit::Hearts => "\u{2665}\u{fe0f}",
            Suit::Clubs => "\u{2663}\u{fe0f}",
            Suit::Diamonds => "\u{2666}\u{fe0f}",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    const ALL: [Rank; 13] = [
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
        Rank::Ace,
    ];

    fn symbol(self) -> &'static str {
        match self {
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
            Rank::Ace => "A",
        }
    }

    fn from_symbol(symbol: &str) -> Option<Rank> {
        Rank::ALL.iter().copied().find(|rank| rank.symbol() == symbol)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Card {
    rank: Rank,
    suit: Suit,
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.glyph())
    }
}

#[derive(Debug, PartialEq, Eq)]
enum ParseCardError {
    MissingSuit,
    InvalidRank(String),
}

impl fmt::Display for ParseCardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseCardError::MissingSuit => f.write_str("missing suit glyph"),
            ParseCardError::InvalidRank(symbol) => write!(f, "invalid rank {symbol:?}"),
        }
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (suit, symbol) = Suit::ALL
            .iter()
            .copied()
            .find_map(|suit| s.strip_suffix(suit.glyph()).map(|rest| (suit, rest)))
            .ok_or(ParseCardError::MissingSuit)?;
        let rank = Rank::from_symbol(symbol)
            .ok_or_else(|| ParseCardError::InvalidRank(symbol.to_string()))?;
        Ok(Card { rank, suit })
    }
}

fn deck() -> Vec<Card> {
    Rank::ALL
        .iter()
        .flat_map(|&rank| Suit::ALL.iter().map(move |&suit| Card { rank, suit }))
        .collect()
}

fn main() {
    let deck = deck();
    println!("deck: {} cards", deck.len());
    println!("first: {}  last: {}", deck[0], deck[deck.len() - 1]);

    for input in ["10\u{2665}\u{fe0f}", "A\u{2663}\u{fe0f}", "11\u{2660}\u{fe0f}", "1\u{2660}\u{fe0f}", "10"] {
        match input.parse::<Card>() {
            Ok(card) => println!("{input} parses as {card}"),
            Err(err) => println!("{input:?} is not a card: {err}"),
        }
    }
}
