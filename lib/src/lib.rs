//! __Conway's Game of Life__ on a fixed-size bounded grid.
//!
//! A [`Board`] owns a rectangle of cells. Each cell is linked to its
//! neighbors once, when the board is created. Cells outside of the board
//! are always dead: there is no wraparound.
//!
//! ```
//! use lifegrid_lib::{Board, LifeState, Position};
//!
//! let mut board = Board::square(5)?;
//! board.seed_life([(1, 2), (2, 2), (3, 2)])?;
//! board.generate();
//! assert_eq!(
//!     board.alive_positions(),
//!     vec![Position::new(2, 1), Position::new(2, 2), Position::new(2, 3)]
//! );
//! assert_eq!(board.get_cell_state(Position::new(1, 2))?, LifeState::Dead);
//! # Ok::<(), lifegrid_lib::Error>(())
//! ```

mod board;
mod cells;
mod config;
mod error;
mod pattern;
mod position;
mod render;

pub use board::{Board, Generation, MIN_SIZE};
pub use cells::{CellRef, LifeCell, LifeState, MAX_NEIGHBORS};
pub use config::Config;
pub use error::Error;
#[cfg(feature = "read-rle")]
pub use pattern::parse_rle;
pub use pattern::{parse_plaintext, Pattern, PATTERNS};
pub use position::Position;
