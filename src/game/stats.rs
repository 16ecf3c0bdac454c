use super::board::{Tile, BOARD_SIZE, TILES};
use super::error::GameError;

/// Per-tile landing counters for one simulation session.
///
/// Every placement of the token is recorded here exactly once,
/// including intermediate placements inside a single turn (passing
/// through jail-visit, a card teleport followed by a bonus roll, the
/// re-assertion of the jail tile while waiting out the penalty).
#[derive(Debug, Clone)]
pub struct Landings {
    counts: [u64; BOARD_SIZE],
}

impl Landings {
    pub fn new() -> Landings {
        Landings {
            counts: [0; BOARD_SIZE],
        }
    }

    /// Count one landing on the tile at `position`.
    pub fn record(&mut self, position: usize) {
        self.counts[position] += 1;
    }

    /// Landings recorded on the tile at `position`.
    pub fn count(&self, position: usize) -> u64 {
        self.counts[position]
    }

    /// Total landings across the whole board.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Add another session's counts tile by tile. Summation is
    /// commutative and associative, so independent sessions can be
    /// sampled in parallel and merged in any order.
    pub fn merge(&mut self, other: &Landings) {
        for (mine, theirs) in self.counts.iter_mut().zip(other.counts.iter()) {
            *mine += theirs;
        }
    }

    /// Empirical occupancy probability of every tile, in board order.
    pub fn report(&self) -> Result<Vec<(&'static Tile, f64)>, GameError> {
        let total = self.total();
        if total == 0 {
            return Err(GameError::EmptySession);
        }

        let tiles: &'static [Tile; BOARD_SIZE] = &TILES;
        Ok(tiles
            .iter()
            .zip(self.counts.iter())
            .map(|(tile, &count)| (tile, count as f64 / total as f64))
            .collect())
    }
}

impl Default for Landings {
    fn default() -> Landings {
        Landings::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_increments_one_tile() {
        let mut landings = Landings::new();
        landings.record(10);
        landings.record(10);
        landings.record(30);

        assert_eq!(landings.count(10), 2);
        assert_eq!(landings.count(30), 1);
        assert_eq!(landings.count(0), 0);
        assert_eq!(landings.total(), 3);
    }

    #[test]
    fn report_on_an_empty_session_is_an_error() {
        assert_eq!(Landings::new().report(), Err(GameError::EmptySession));
    }

    #[test]
    fn probabilities_sum_to_one() {
        let mut landings = Landings::new();
        for position in 0..BOARD_SIZE {
            for _ in 0..=position {
                landings.record(position);
            }
        }

        let report = landings.report().unwrap();
        assert_eq!(report.len(), BOARD_SIZE);
        let sum: f64 = report.iter().map(|&(_, p)| p).sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn merge_adds_counts_tile_by_tile() {
        let mut a = Landings::new();
        let mut b = Landings::new();
        a.record(3);
        a.record(5);
        b.record(5);

        a.merge(&b);
        assert_eq!(a.count(3), 1);
        assert_eq!(a.count(5), 2);
        assert_eq!(a.total(), 3);
    }
}
