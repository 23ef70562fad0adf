//! Board configuration.

use crate::{board::Board, error::Error, pattern::Pattern, position::Position};
use educe::Educe;
use log::debug;
use rand::{rngs::StdRng, thread_rng, SeedableRng};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Board configuration.
///
/// A seeded board will be generated from this configuration.
///
/// When deserializing, missing fields take their default values.
#[derive(Clone, Debug, Educe, PartialEq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct Config {
    /// Number of columns.
    #[educe(Default = 16)]
    pub columns: i32,

    /// Number of rows.
    #[educe(Default = 16)]
    pub rows: i32,

    /// Name of a pattern in [`PATTERNS`](crate::PATTERNS) to seed.
    pub pattern: Option<String>,

    /// Where the top-left corner of the [`pattern`](#structfield.pattern) is placed.
    pub offset: Position,

    /// Cells that are alive in the first generation,
    /// in addition to the pattern.
    pub alive: Vec<Position>,

    /// If set, every cell is also brought to life with this probability.
    pub random: Option<f64>,

    /// Seed of the random number generator used by
    /// [`random`](#structfield.random).
    ///
    /// `None` means that the soup is different each time.
    pub seed: Option<u64>,
}

impl Config {
    /// Sets up a new configuration with given size.
    pub fn new(columns: i32, rows: i32) -> Self {
        Config {
            columns,
            rows,
            ..Config::default()
        }
    }

    /// Sets the pattern.
    pub fn set_pattern<S: ToString>(mut self, name: S) -> Self {
        self.pattern = Some(name.to_string());
        self
    }

    /// Sets the position of the top-left corner of the pattern.
    pub fn set_offset<P: Into<Position>>(mut self, offset: P) -> Self {
        self.offset = offset.into();
        self
    }

    /// Sets the extra living cells.
    pub fn set_alive<I, P>(mut self, alive: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Position>,
    {
        self.alive = alive.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the density of the random soup.
    pub fn set_random<T: Into<Option<f64>>>(mut self, density: T) -> Self {
        self.random = density.into();
        self
    }

    /// Sets the seed of the random number generator.
    pub fn set_seed<T: Into<Option<u64>>>(mut self, seed: T) -> Self {
        self.seed = seed.into();
        self
    }

    /// Creates a new board from the configuration.
    ///
    /// Returns an error if the size is invalid, the pattern is unknown,
    /// some living cell is outside of the board, or the density is not
    /// between 0 and 1.
    pub fn board(&self) -> Result<Board, Error> {
        let mut board = Board::new(self.columns, self.rows)?;

        if let Some(name) = &self.pattern {
            let pattern =
                Pattern::find(name).ok_or_else(|| Error::UnknownPattern(name.clone()))?;
            board.seed_pattern(pattern, self.offset)?;
        }

        board.seed_life(self.alive.iter().copied())?;

        if let Some(density) = self.random {
            match self.seed {
                Some(seed) => board.seed_random(density, &mut StdRng::seed_from_u64(seed))?,
                None => board.seed_random(density, &mut thread_rng())?,
            }
        }

        debug!(
            "Seeded a {}x{} board with {} living cells",
            self.columns,
            self.rows,
            board.alive_count()
        );
        Ok(board)
    }
}
