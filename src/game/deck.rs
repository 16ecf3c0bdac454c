use std::fmt;

use super::rng::SessionRng;

/// A chance or community chest card.
///
/// Monetary amounts (`Outgo`, `Outcome`) are carried but never spent:
/// only position effects are simulated. `GoBack` is an absolute move
/// exactly like `GoTo`; the historical name is misleading but the
/// payload is a target tile index, not a distance.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Card {
    /// Pay the bank this amount.
    Outgo(u32),
    /// Receive this amount from the bank.
    Outcome(u32),
    /// Move to the tile at this index.
    GoTo(usize),
    /// Move to the tile at this index (absolute, despite the name).
    GoBack(usize),
    /// Receive a gift from every other player.
    Birthday,
    /// Get out of jail free.
    Release,
    /// Draw one card from the chance deck and resolve it.
    DrawChance,
    /// Move back three tiles.
    GoBackThree,
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Outgo(amount) => write!(f, "OUTGO:{}", amount),
            Card::Outcome(amount) => write!(f, "OUTCOME:{}", amount),
            Card::GoTo(dest) => write!(f, "GO_TO:{}", dest),
            Card::GoBack(dest) => write!(f, "GO_BACK:{}", dest),
            Card::Birthday => f.write_str("BIRTHDAY"),
            Card::Release => f.write_str("RELEASE"),
            Card::DrawChance => f.write_str("DRAW_CHANCE"),
            Card::GoBackThree => f.write_str("GO_BACK_3_CASES"),
        }
    }
}

/// A fixed-size, cyclically rotating sequence of cards.
///
/// Drawing moves the front card to the back, so draws repeat with a
/// period equal to the deck size. The deck is shuffled once when the
/// session is built and never resampled: this is deliberately not
/// independent random sampling, and the periodic draw order is part of
/// the statistics being measured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The community chest deck.
    pub fn community() -> Deck {
        Deck {
            cards: vec![
                Card::Outgo(10_000),
                Card::Outgo(5_000),
                Card::Outgo(5_000),
                Card::Outcome(20_000),
                Card::Outcome(10_000),
                Card::Outcome(10_000),
                Card::Outcome(5_000),
                Card::Outcome(2_500),
                Card::Outcome(2_000),
                Card::Outcome(1_000),
                Card::GoTo(0),  // start
                Card::GoTo(30), // jail
                Card::GoBack(1), // belleville
                Card::Birthday,
                Card::Release,
                Card::DrawChance,
            ],
        }
    }

    /// The chance deck. Must never contain `DrawChance`, or resolving a
    /// community chest `DrawChance` could recurse forever.
    pub fn chance() -> Deck {
        Deck {
            cards: vec![
                Card::Outgo(2_000),
                Card::Outgo(1_500),
                Card::Outgo(15_000),
                Card::Outcome(15_000),
                Card::Outcome(10_000),
                Card::Outcome(5_000),
                Card::GoTo(0),  // start
                Card::GoTo(39), // wraps around to start
                Card::GoTo(30), // jail
                Card::GoTo(11), // la villette
                Card::GoTo(15), // gare de lyon
                Card::GoTo(24), // henri martin
                Card::GoBackThree,
                Card::Release,
            ],
        }
    }

    #[cfg(test)]
    pub(crate) fn from_cards(cards: Vec<Card>) -> Deck {
        Deck { cards }
    }

    /// Randomly permute the cards in place.
    pub fn shuffle(&mut self, rng: &mut SessionRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Take the front card and rotate it to the back.
    pub fn draw(&mut self) -> Card {
        let card = self.cards[0];
        self.cards.rotate_left(1);
        card
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
