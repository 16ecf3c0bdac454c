use thiserror::Error;

/// Failure conditions of a simulation session.
///
/// Normal play cannot fail: every transition is total over well-formed
/// inputs, and out-of-range card destinations are normalized around the
/// board rather than rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// `report` was called before any turn was taken, so there are no
    /// counts to divide by.
    #[error("no landings recorded; advance at least one turn before reporting")]
    EmptySession,

    /// A `DrawChance` chain never reached a terminating card. The card
    /// data is misconfigured; a well-formed chance deck contains no
    /// `DrawChance` card.
    #[error("card chain exceeded {limit} draws without resolving; the chance deck is misconfigured")]
    CardChainOverflow { limit: usize },
}
