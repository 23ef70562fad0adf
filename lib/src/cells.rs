//! Cells in the cellular automaton.

use crate::{error::Error, position::Position};
use educe::Educe;
use std::{
    fmt::{Debug, Formatter},
    ops::Not,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The maximal number of neighbors of a cell.
pub const MAX_NEIGHBORS: usize = 8;

/// Possible states of a cell.
#[derive(Clone, Copy, Debug, Educe, PartialEq, Eq, Hash)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LifeState {
    /// The Dead state.
    #[educe(Default)]
    Dead,
    /// The Alive state.
    Alive,
}

/// Flips the state.
impl Not for LifeState {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        match self {
            LifeState::Alive => LifeState::Dead,
            LifeState::Dead => LifeState::Alive,
        }
    }
}

impl LifeState {
    /// The state of a cell in the next generation, given its current state
    /// and the number of its living neighbors.
    ///
    /// * A living cell with fewer than two living neighbors dies
    ///   (underpopulation).
    /// * A living cell with two or three living neighbors lives on.
    /// * A living cell with more than three living neighbors dies
    ///   (overpopulation).
    /// * A dead cell with exactly three living neighbors becomes alive
    ///   (reproduction).
    #[inline]
    pub fn successor(self, alive_neighbors: usize) -> Self {
        match (self, alive_neighbors) {
            (LifeState::Alive, 2) | (LifeState::Alive, 3) => LifeState::Alive,
            (LifeState::Dead, 3) => LifeState::Alive,
            _ => LifeState::Dead,
        }
    }

    /// Whether the state is [`Alive`](LifeState::Alive).
    #[inline]
    pub fn is_alive(self) -> bool {
        self == LifeState::Alive
    }
}

/// A reference to a [`LifeCell`]. It is just an index into the cells
/// of a [`Board`](crate::Board).
///
/// A [`CellRef`] produced by one board should never be used with another board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellRef(pub(crate) usize);

impl CellRef {
    /// The index of the cell in the board, counted row by row.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A cell in the cellular automaton.
///
/// The name `LifeCell` is chosen to avoid ambiguity with
/// [`std::cell::Cell`].
pub struct LifeCell {
    /// The coordinates of the cell.
    position: Position,

    /// The current state of the cell.
    pub(crate) state: LifeState,

    /// The state of the cell in the next generation.
    ///
    /// Only meaningful between the two phases of a generation.
    pub(crate) next: LifeState,

    /// The cells in the neighborhood, at most [`MAX_NEIGHBORS`] of them.
    pub(crate) nbhd: Vec<CellRef>,
}

impl LifeCell {
    /// Generates a new cell with no neighbors.
    pub fn new(position: Position, state: LifeState) -> Self {
        LifeCell {
            position,
            state,
            next: state,
            nbhd: Vec::with_capacity(MAX_NEIGHBORS),
        }
    }

    /// The coordinates of the cell.
    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// The current state of the cell.
    #[inline]
    pub fn state(&self) -> LifeState {
        self.state
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.state.is_alive()
    }

    /// References to the neighbors of the cell.
    #[inline]
    pub fn neighbors(&self) -> &[CellRef] {
        &self.nbhd
    }

    pub fn bring_to_life(&mut self) {
        self.state = LifeState::Alive;
    }

    pub fn kill(&mut self) {
        self.state = LifeState::Dead;
    }

    /// Links the cell to some more neighbors.
    ///
    /// Fails without linking anything if `cells` is empty,
    /// or if the cell would end up with more than [`MAX_NEIGHBORS`] neighbors.
    pub fn add_neighbors(&mut self, cells: &[CellRef]) -> Result<(), Error> {
        if cells.is_empty() {
            return Err(Error::NoNeighbors(self.position));
        }
        if self.nbhd.len() + cells.len() > MAX_NEIGHBORS {
            return Err(Error::TooManyNeighbors(self.position));
        }
        self.nbhd.extend_from_slice(cells);
        Ok(())
    }

    /// Computes and remembers the next state of the cell
    /// without changing its current state.
    pub(crate) fn evaluate(&mut self, alive_neighbors: usize) -> LifeState {
        self.next = self.state.successor(alive_neighbors);
        self.next
    }

    /// Replaces the current state with the one computed by
    /// [`evaluate`](Self::evaluate). Returns the old state.
    pub(crate) fn commit(&mut self) -> LifeState {
        std::mem::replace(&mut self.state, self.next)
    }
}

impl Debug for LifeCell {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LifeCell")
            .field("position", &self.position)
            .field("state", &self.state)
            .field("nbhd", &self.nbhd.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LifeState::{Alive, Dead};

    fn cell(state: LifeState) -> LifeCell {
        LifeCell::new(Position::new(3, 7), state)
    }

    #[test]
    fn default_state_is_dead() {
        assert_eq!(LifeState::default(), Dead);
        assert_eq!(!Dead, Alive);
        assert_eq!(!Alive, Dead);
    }

    #[test]
    fn bring_to_life_and_kill() {
        let mut cell = cell(Dead);
        cell.bring_to_life();
        assert!(cell.is_alive());
        cell.kill();
        assert_eq!(cell.state(), Dead);
        assert_eq!(cell.position(), Position::new(3, 7));
    }

    #[test]
    fn underpopulation() {
        assert_eq!(Alive.successor(0), Dead);
        assert_eq!(Alive.successor(1), Dead);
    }

    #[test]
    fn survival() {
        assert_eq!(Alive.successor(2), Alive);
        assert_eq!(Alive.successor(3), Alive);
    }

    #[test]
    fn overpopulation() {
        for n in 4..=8 {
            assert_eq!(Alive.successor(n), Dead);
        }
    }

    #[test]
    fn reproduction() {
        assert_eq!(Dead.successor(3), Alive);
        for n in (0..=8).filter(|&n| n != 3) {
            assert_eq!(Dead.successor(n), Dead);
        }
    }

    #[test]
    fn at_most_eight_neighbors() {
        let mut cell = cell(Dead);
        let refs: Vec<_> = (0..9).map(CellRef).collect();
        assert_eq!(
            cell.add_neighbors(&refs),
            Err(Error::TooManyNeighbors(Position::new(3, 7)))
        );
        assert!(cell.neighbors().is_empty());

        cell.add_neighbors(&refs[..5]).unwrap();
        cell.add_neighbors(&refs[5..8]).unwrap();
        assert_eq!(cell.neighbors().len(), 8);
        assert_eq!(
            cell.add_neighbors(&refs[8..]),
            Err(Error::TooManyNeighbors(Position::new(3, 7)))
        );
    }

    #[test]
    fn empty_neighbors() {
        let mut cell = cell(Alive);
        assert_eq!(
            cell.add_neighbors(&[]),
            Err(Error::NoNeighbors(Position::new(3, 7)))
        );
    }

    #[test]
    fn evaluate_keeps_current_state_until_commit() {
        let mut cell = cell(Dead);
        assert_eq!(cell.evaluate(3), Alive);
        assert_eq!(cell.state(), Dead);
        assert_eq!(cell.commit(), Dead);
        assert_eq!(cell.state(), Alive);
    }
}
