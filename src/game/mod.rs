mod board;
mod deck;
mod error;
mod rng;
mod stats;

pub use board::{
    tile_at, Property, PropertyKind, Tile, BOARD_SIZE, JAIL_POSITION, JAIL_VISIT_POSITION, TILES,
};
pub use deck::{Card, Deck};
pub use error::GameError;
pub use rng::{DiceSource, SessionRng};
pub use stats::Landings;

/// Turns spent in jail after landing on the jail tile.
const PENALTY_TURNS: u8 = 3;

/// Consecutive doubles allowed before the streak sends the token to jail.
const MAX_DOUBLES_STREAK: u8 = 3;

/// Upper bound on chained card draws. A well-formed chance deck resolves
/// in one draw; hitting this limit means the deck is misconfigured.
const MAX_CARD_CHAIN: usize = 8;

/// The single simulated token.
#[derive(Debug, Default)]
struct Token {
    /// Position around the board, always in `[0, BOARD_SIZE)`.
    position: usize,
    /// Consecutive doubles rolled this turn chain.
    doubles_streak: u8,
    /// Jail turns left to wait; 0 means the token is free.
    penalty_turns: u8,
}

/// One simulation session: the token, its own shuffled decks, and the
/// landing counters.
pub struct Game {
    community: Deck,
    chance: Deck,
    token: Token,
    landings: Landings,
    dice: Box<dyn DiceSource>,
}

impl Game {
    /*********        INITIALISATION        *********/

    /// Build a session: token on `start`, empty counters, both decks
    /// shuffled with the seeded RNG. The same seed replays the same
    /// session exactly.
    pub fn new(seed: u64) -> Game {
        let mut rng = SessionRng::new(seed);
        let mut community = Deck::community();
        let mut chance = Deck::chance();
        community.shuffle(&mut rng);
        chance.shuffle(&mut rng);

        Game {
            community,
            chance,
            token: Token::default(),
            landings: Landings::new(),
            dice: Box::new(rng),
        }
    }

    #[cfg(test)]
    fn with_parts(community: Deck, chance: Deck, dice: Box<dyn DiceSource>) -> Game {
        Game {
            community,
            chance,
            token: Token::default(),
            landings: Landings::new(),
            dice,
        }
    }

    /*********        TURN RESOLUTION        *********/

    /// Play one top-level turn. Bonus rolls (doubles, escaping jail) are
    /// nested turns and resolve inside the same call.
    pub fn take_turn(&mut self) -> Result<(), GameError> {
        let (first, second) = self.dice.roll_pair();
        self.resolve_turn(first, second)
    }

    fn resolve_turn(&mut self, first: u8, second: u8) -> Result<(), GameError> {
        if self.token.penalty_turns == 0 {
            // The token can sit on the jail tile without being jailed
            // (freed earlier this turn, or dropped there by a card or a
            // doubles streak). It walks on from jail-visit.
            if self.token.position == JAIL_POSITION {
                self.move_to(JAIL_VISIT_POSITION);
            }

            self.move_by((first + second) as i64);

            match tile_at(self.token.position) {
                Tile::CommunityChest => {
                    let card = self.community.draw();
                    self.apply_card(card, 0)?;
                }
                Tile::Chance => {
                    let card = self.chance.draw();
                    self.apply_card(card, 0)?;
                }
                Tile::Jail => {
                    // Being jailed always ends the turn, doubles or not.
                    self.token.penalty_turns = PENALTY_TURNS;
                    return Ok(());
                }
                _ => {}
            }

            if first == second {
                self.token.doubles_streak += 1;
                if self.token.doubles_streak > MAX_DOUBLES_STREAK {
                    self.move_to(JAIL_POSITION);
                    self.token.doubles_streak = 0;
                } else {
                    // A double grants a full nested turn with fresh dice.
                    self.take_turn()?;
                }
            } else {
                self.token.doubles_streak = 0;
            }
        } else if first == second {
            // Escaping jail routes through jail-visit, then the token
            // immediately plays an ordinary turn.
            self.move_to(JAIL_VISIT_POSITION);
            self.token.penalty_turns = 0;
            self.take_turn()?;
        } else {
            self.token.penalty_turns -= 1;
            // Place the token again so the waiting turn is counted.
            self.move_to(JAIL_POSITION);
        }

        Ok(())
    }

    fn apply_card(&mut self, card: Card, depth: usize) -> Result<(), GameError> {
        if depth >= MAX_CARD_CHAIN {
            return Err(GameError::CardChainOverflow {
                limit: MAX_CARD_CHAIN,
            });
        }

        match card {
            // Both are absolute moves; see `Card::GoBack`.
            Card::GoTo(dest) | Card::GoBack(dest) => self.move_to(dest),
            Card::DrawChance => {
                let next = self.chance.draw();
                self.apply_card(next, depth + 1)?;
            }
            Card::GoBackThree => self.move_by(-3),
            // Money-only cards have no position effect.
            Card::Outgo(_) | Card::Outcome(_) | Card::Birthday | Card::Release => {}
        }

        Ok(())
    }

    /// Place the token on `destination`, normalized around the board.
    /// This is the only way the position changes, and every call is one
    /// counted landing.
    fn move_to(&mut self, destination: usize) {
        let dest = destination % BOARD_SIZE;
        self.token.position = dest;
        self.landings.record(dest);
    }

    /// Move the token relative to its position. `delta` may be negative.
    fn move_by(&mut self, delta: i64) {
        let dest = (self.token.position as i64 + delta).rem_euclid(BOARD_SIZE as i64);
        self.move_to(dest as usize);
    }

    /*********        REPORTING        *********/

    /// Empirical occupancy probability of every tile, in board order.
    pub fn report(&self) -> Result<Vec<(&'static Tile, f64)>, GameError> {
        self.landings.report()
    }

    /// Give up the session and keep only its counters, e.g. to merge
    /// them with other sessions sampled in parallel.
    pub fn into_landings(self) -> Landings {
        self.landings
    }
}
