//! The board.

use crate::{
    cells::{CellRef, LifeCell, LifeState},
    error::Error,
    pattern::Pattern,
    position::Position,
};
use log::{debug, trace};
use rand::Rng;
use std::{
    fmt::{self, Debug, Formatter},
    ops::Index,
};

/// The minimal number of columns or rows of a board.
pub const MIN_SIZE: i32 = 2;

/// Relative positions of the neighbors, in the order they are linked:
///
/// right, below-right, below, below-left, left, above-left, above, above-right.
const NBHD: [(i32, i32); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// What happened in one generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Generation {
    /// The number of generations computed so far, including this one.
    pub index: u64,
    /// Number of cells that became alive.
    pub births: usize,
    /// Number of cells that died.
    pub deaths: usize,
}

impl Generation {
    /// Whether no cell changed its state in this generation.
    #[inline]
    pub fn is_stable(&self) -> bool {
        self.births == 0 && self.deaths == 0
    }
}

/// A callback invoked after each generation is committed.
type Observer = Box<dyn FnMut(&Board, &Generation)>;

/// The board.
pub struct Board {
    /// Number of columns.
    columns: i32,

    /// Number of rows.
    rows: i32,

    /// All the cells on the board, row by row.
    ///
    /// This slice will not be resized after its creation.
    cells: Box<[LifeCell]>,

    /// Number of generations computed so far.
    generation: u64,

    /// Called after every generation.
    observer: Option<Observer>,
}

impl Board {
    /// Creates a new board where all cells are dead.
    ///
    /// Returns an error if `columns` or `rows` is smaller than [`MIN_SIZE`],
    /// or if the number of cells does not fit in an `i32`.
    pub fn new(columns: i32, rows: i32) -> Result<Self, Error> {
        if columns < MIN_SIZE || rows < MIN_SIZE {
            return Err(Error::SizeError { columns, rows });
        }

        // Keeps `row * columns + column` in `find_cell` from overflowing.
        let size = columns
            .checked_mul(rows)
            .ok_or(Error::TooLarge { columns, rows })? as usize;
        let mut cells = Vec::with_capacity(size);
        for row in 0..rows {
            for column in 0..columns {
                cells.push(LifeCell::new(Position::new(column, row), LifeState::Dead));
            }
        }

        let board = Board {
            columns,
            rows,
            cells: cells.into_boxed_slice(),
            generation: 0,
            observer: None,
        }
        .init_nbhd()?;

        debug!(
            "Built a {}x{} board with {} neighbor links",
            columns,
            rows,
            board.cells.iter().map(|c| c.nbhd.len()).sum::<usize>()
        );
        Ok(board)
    }

    /// Creates a new square board.
    pub fn square(size: i32) -> Result<Self, Error> {
        Board::new(size, size)
    }

    /// Links the cells to their neighbors.
    ///
    /// Directions that leave the board are skipped,
    /// so cells on the edges have fewer neighbors.
    fn init_nbhd(mut self) -> Result<Self, Error> {
        for index in 0..self.cells.len() {
            let position = self.cells[index].position();
            let nbhd = NBHD
                .iter()
                .filter_map(|&(dc, dr)| self.find_cell(position.offset(dc, dr)?))
                .collect::<Vec<_>>();
            debug_assert!(nbhd.len() >= 3, "cell at {} has too few neighbors", position);
            self.cells[index].add_neighbors(&nbhd)?;
        }
        Ok(self)
    }

    /// Number of columns.
    #[inline]
    pub fn columns(&self) -> i32 {
        self.columns
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of generations computed since the board was created or cleared.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Finds a cell by its coordinates. Returns a [`CellRef`].
    pub fn find_cell(&self, position: Position) -> Option<CellRef> {
        let Position { column, row } = position;
        if 0 <= column && column < self.columns && 0 <= row && row < self.rows {
            Some(CellRef((row * self.columns + column) as usize))
        } else {
            None
        }
    }

    /// Finds a cell by its coordinates.
    pub fn cell(&self, position: Position) -> Result<&LifeCell, Error> {
        self.find_cell(position)
            .map(|cell| &self[cell])
            .ok_or(Error::OutOfRange(position))
    }

    fn cell_mut(&mut self, position: Position) -> Result<&mut LifeCell, Error> {
        let cell = self.find_cell(position).ok_or(Error::OutOfRange(position))?;
        Ok(&mut self.cells[cell.0])
    }

    /// Gets the state of a cell.
    pub fn get_cell_state(&self, position: Position) -> Result<LifeState, Error> {
        self.cell(position).map(LifeCell::state)
    }

    /// All cells, row by row.
    pub fn cells(&self) -> impl Iterator<Item = &LifeCell> {
        self.cells.iter()
    }

    /// The neighbors of the cell at `position`.
    pub fn neighbors(
        &self,
        position: Position,
    ) -> Result<impl Iterator<Item = &LifeCell>, Error> {
        let cell = self.cell(position)?;
        Ok(cell.neighbors().iter().map(move |&n| &self[n]))
    }

    /// Whether the cell at `other` is a neighbor of the cell at `position`.
    pub fn has_neighbor(&self, position: Position, other: Position) -> Result<bool, Error> {
        Ok(self.neighbors(position)?.any(|n| n.position() == other))
    }

    /// Number of living cells.
    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Positions of all living cells, row by row.
    pub fn alive_positions(&self) -> Vec<Position> {
        self.cells
            .iter()
            .filter(|c| c.is_alive())
            .map(LifeCell::position)
            .collect()
    }

    /// The states of all cells, row by row.
    ///
    /// Two boards of the same size have the same snapshot
    /// if and only if they are in the same configuration.
    pub fn states(&self) -> Vec<LifeState> {
        self.cells.iter().map(LifeCell::state).collect()
    }

    /// Sets the state of a cell.
    pub fn set_cell_state(&mut self, position: Position, state: LifeState) -> Result<(), Error> {
        let cell = self.cell_mut(position)?;
        match state {
            LifeState::Alive => cell.bring_to_life(),
            LifeState::Dead => cell.kill(),
        }
        Ok(())
    }

    /// Brings the cells at the given positions to life.
    ///
    /// Positions are checked one by one. If one of them is outside of the board,
    /// returns an error; cells before it have already been set.
    ///
    /// Seeding is cumulative. Cells that are already alive stay alive.
    pub fn seed_life<I, P>(&mut self, positions: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = P>,
        P: Into<Position>,
    {
        for position in positions {
            self.cell_mut(position.into())?.bring_to_life();
        }
        Ok(())
    }

    /// Kills the cells at the given positions.
    ///
    /// Same checks as [`seed_life`](Self::seed_life).
    pub fn kill<I, P>(&mut self, positions: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = P>,
        P: Into<Position>,
    {
        for position in positions {
            self.cell_mut(position.into())?.kill();
        }
        Ok(())
    }

    /// Seeds a pattern whose top-left corner is placed at `offset`.
    ///
    /// Nothing is seeded if some cell of the pattern lies too far away to
    /// be represented by a [`Position`].
    pub fn seed_pattern(&mut self, pattern: &Pattern, offset: Position) -> Result<(), Error> {
        self.seed_life(pattern.positions(offset)?)
    }

    /// Brings every cell to life with probability `density`.
    ///
    /// Cells that are already alive stay alive.
    pub fn seed_random<R>(&mut self, density: f64, rng: &mut R) -> Result<(), Error>
    where
        R: Rng + ?Sized,
    {
        if !(0.0..=1.0).contains(&density) {
            return Err(Error::DensityError);
        }
        for cell in self.cells.iter_mut() {
            if rng.gen_bool(density) {
                cell.bring_to_life();
            }
        }
        Ok(())
    }

    /// Kills all cells and resets the generation counter.
    pub fn clear(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.kill();
        }
        self.generation = 0;
    }

    /// Registers a callback that is called after every generation,
    /// once all cells have moved to their new states.
    ///
    /// Replaces the previous callback.
    pub fn on_generate<F>(&mut self, observer: F)
    where
        F: FnMut(&Board, &Generation) + 'static,
    {
        self.observer = Some(Box::new(observer));
    }

    /// Number of living neighbors of a cell.
    fn alive_neighbors(&self, cell: CellRef) -> usize {
        self[cell]
            .nbhd
            .iter()
            .filter(|&&n| self[n].is_alive())
            .count()
    }

    /// Computes the next state of every cell.
    ///
    /// The current states are left untouched,
    /// so the order in which the cells are visited does not matter.
    fn evaluate(&mut self) {
        for index in 0..self.cells.len() {
            let alive = self.alive_neighbors(CellRef(index));
            let cell = &mut self.cells[index];
            let next = cell.evaluate(alive);
            trace!(
                "Cell at {} goes from {:?} to {:?} with {} living neighbors",
                cell.position(),
                cell.state(),
                next,
                alive
            );
        }
    }

    /// Moves every cell to the state computed by [`evaluate`](Self::evaluate).
    ///
    /// Returns the numbers of births and deaths.
    fn commit(&mut self) -> (usize, usize) {
        let mut births = 0;
        let mut deaths = 0;
        for cell in self.cells.iter_mut() {
            match (cell.commit(), cell.state()) {
                (LifeState::Dead, LifeState::Alive) => births += 1,
                (LifeState::Alive, LifeState::Dead) => deaths += 1,
                _ => (),
            }
        }
        (births, deaths)
    }

    /// Computes the next generation.
    ///
    /// Every cell is evaluated against the current generation before any cell
    /// changes, so the result depends only on the previous generation.
    pub fn generate(&mut self) -> Generation {
        self.evaluate();
        let (births, deaths) = self.commit();
        self.generation += 1;

        let report = Generation {
            index: self.generation,
            births,
            deaths,
        };
        debug!(
            "Generation {}: {} births, {} deaths, {} alive",
            report.index,
            births,
            deaths,
            self.alive_count()
        );

        if let Some(mut observer) = self.observer.take() {
            observer(&*self, &report);
            self.observer = Some(observer);
        }
        report
    }

    /// Computes `n` generations. Returns the report of the last one,
    /// or `None` if `n` is zero.
    pub fn generate_n(&mut self, n: u64) -> Option<Generation> {
        (0..n).map(|_| self.generate()).last()
    }
}

impl Index<CellRef> for Board {
    type Output = LifeCell;

    #[inline]
    fn index(&self, cell: CellRef) -> &Self::Output {
        &self.cells[cell.0]
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("columns", &self.columns)
            .field("rows", &self.rows)
            .field("generation", &self.generation)
            .field("alive", &self.alive_count())
            .finish()
    }
}
