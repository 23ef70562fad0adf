//! Coordinates on the board.

use std::fmt::{self, Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The coordinates of a cell.
///
/// Both coordinates are 0-indexed. The column grows to the right,
/// the row grows downwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    /// The column, i.e., the x-coordinate.
    pub column: i32,
    /// The row, i.e., the y-coordinate.
    pub row: i32,
}

impl Position {
    /// Creates a new position.
    #[inline]
    pub const fn new(column: i32, row: i32) -> Self {
        Position { column, row }
    }

    /// The position moved by `dc` columns and `dr` rows.
    ///
    /// Returns `None` if a coordinate overflows.
    #[inline]
    pub fn offset(self, dc: i32, dr: i32) -> Option<Self> {
        Some(Position {
            column: self.column.checked_add(dc)?,
            row: self.row.checked_add(dr)?,
        })
    }
}

impl From<(i32, i32)> for Position {
    #[inline]
    fn from((column, row): (i32, i32)) -> Self {
        Position { column, row }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}
