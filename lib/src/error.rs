//! All kinds of errors in this crate.

use crate::position::Position;
use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// The board must be at least 2x2, got {columns}x{rows}. Life can not thrive in such a small ecosystem.
    SizeError { columns: i32, rows: i32 },
    /// A {columns}x{rows} board has too many cells.
    TooLarge { columns: i32, rows: i32 },
    /// Position {0} is outside of the board.
    OutOfRange(Position),
    /// Cell at {0} can not have more than eight neighbors.
    TooManyNeighbors(Position),
    /// No neighbors were given to the cell at {0}.
    NoNeighbors(Position),
    /// Density of a random soup should be between 0 and 1.
    DensityError,
    /// Unknown pattern: {0:?}.
    UnknownPattern(String),
    /// Invalid character {1:?} on line {0} of a Plaintext pattern.
    PlaintextError(usize, char),
    /// Unable to read RLE: {0}.
    #[cfg(feature = "read-rle")]
    RleError(String),
}
