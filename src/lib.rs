//! Long-run tile-occupancy odds for a French Monopoly board.
//!
//! The crate simulates a single token moving under the full movement
//! ruleset (dice, chance and community chest cards, jail with a
//! roll-doubles escape, the consecutive-doubles penalty) and counts
//! every landing per tile. Dividing the counts by their total gives the
//! empirical probability of the token occupying each tile.
//!
//! No money changes hands and no properties are owned: card amounts are
//! carried as inert data, and the only mutable state is the token, the
//! two decks and the landing counters.

pub mod game;

pub use game::{Game, GameError, Landings, Tile};
