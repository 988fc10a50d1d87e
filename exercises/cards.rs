// Playing-card notation.
//
// Define a `Card` type matching any string made of a rank (2-10, J, Q, K, A)
// followed by a suit glyph (♠️, ♥️, ♣️, ♦️): "3♠️", "J♦️", "A♣️", "10♥️".
//
//   - parsing "10♥️" succeeds; "11♠️" and "1♠️" fail with an invalid-rank error;
//   - printing a parsed card gives back the input string;
//   - `deck()` combines every rank with every suit: 52 cards.
//
// Beware: the suit glyphs end with an invisible variation selector, so match
// them as string suffixes rather than as single `char`s.

use std::fmt;
use std::str::FromStr;

// TODO: declare `Suit` with its four glyphs and a `glyph()` accessor.

// TODO: declare `Rank` with the nine numbers and four figures, plus
// `symbol()` and `from_symbol()`.

// TODO: declare `Card` and implement `Display` for it.

// TODO: declare `ParseCardError` (missing suit / invalid rank) and implement
// `FromStr` for `Card`.

fn deck() -> Vec<Card> {
    // TODO: every rank with every suit.
    todo!()
}

fn main() {
    let deck = deck();
    println!("deck: {} cards", deck.len());
    println!("first: {}  last: {}", deck[0], deck[deck.len() - 1]);

    for input in ["10♥️", "A♣️", "11♠️", "1♠️", "10"] {
        match input.parse::<Card>() {
            Ok(card) => println!("{input} parses as {card}"),
            Err(err) => println!("{input:?} is not a card: {err}"),
        }
    }
}
