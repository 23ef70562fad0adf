//! Seed patterns.

use crate::{error::Error, position::Position};

/// A named pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pattern {
    /// The name of the pattern.
    pub name: &'static str,
    /// Width of the bounding box.
    pub columns: i32,
    /// Height of the bounding box.
    pub rows: i32,
    /// After how many generations the pattern takes its original shape again.
    ///
    /// `1` for still lifes. The glider reappears moved by one cell diagonally.
    pub period: u32,
    /// Living cells, as `(column, row)` relative to the top-left corner
    /// of the bounding box.
    pub cells: &'static [(i32, i32)],
}

impl Pattern {
    /// Finds a pattern in [`PATTERNS`] by its name, ignoring case.
    pub fn find(name: &str) -> Option<&'static Pattern> {
        PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Living cells of the pattern with its top-left corner at `offset`.
    ///
    /// Returns an error if a cell can not be represented by a [`Position`].
    pub fn positions(&self, offset: Position) -> Result<Vec<Position>, Error> {
        self.cells
            .iter()
            .map(|&(column, row)| offset.offset(column, row).ok_or(Error::OutOfRange(offset)))
            .collect()
    }
}

/// Some well-known patterns.
#[rustfmt::skip]
pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "block",
        columns: 2,
        rows: 2,
        period: 1,
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
    },
    Pattern {
        name: "tub",
        columns: 3,
        rows: 3,
        period: 1,
        cells: &[(1, 0), (0, 1), (2, 1), (1, 2)],
    },
    Pattern {
        name: "beehive",
        columns: 4,
        rows: 3,
        period: 1,
        cells: &[(1, 0), (2, 0), (0, 1), (3, 1), (1, 2), (2, 2)],
    },
    Pattern {
        name: "blinker",
        columns: 3,
        rows: 1,
        period: 2,
        cells: &[(0, 0), (1, 0), (2, 0)],
    },
    Pattern {
        name: "toad",
        columns: 4,
        rows: 2,
        period: 2,
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    },
    Pattern {
        name: "beacon",
        columns: 4,
        rows: 4,
        period: 2,
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
    },
    Pattern {
        name: "pulsar",
        columns: 13,
        rows: 13,
        period: 3,
        cells: &[
            (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
            (0, 2), (5, 2), (7, 2), (12, 2),
            (0, 3), (5, 3), (7, 3), (12, 3),
            (0, 4), (5, 4), (7, 4), (12, 4),
            (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
            (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
            (0, 8), (5, 8), (7, 8), (12, 8),
            (0, 9), (5, 9), (7, 9), (12, 9),
            (0, 10), (5, 10), (7, 10), (12, 10),
            (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
        ],
    },
    Pattern {
        name: "pentadecathlon",
        columns: 10,
        rows: 3,
        period: 15,
        cells: &[
            (2, 0), (7, 0),
            (0, 1), (1, 1), (3, 1), (4, 1), (5, 1), (6, 1), (8, 1), (9, 1),
            (2, 2), (7, 2),
        ],
    },
    Pattern {
        name: "glider",
        columns: 3,
        rows: 3,
        period: 4,
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    },
];

/// Reads a pattern in [Plaintext](https://conwaylife.com/wiki/Plaintext) format.
///
/// * Lines starting with `!` are comments;
/// * **Dead** cells are represented by `.`;
/// * **Living** cells are represented by `O`, `o` or `*`.
///
/// Returns the positions of the living cells, relative to the top-left corner.
pub fn parse_plaintext(text: &str) -> Result<Vec<Position>, Error> {
    let mut positions = Vec::new();
    let lines = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.starts_with('!'));
    for (row, (line_number, line)) in lines.enumerate() {
        for (column, c) in line.chars().enumerate() {
            match c {
                '.' => (),
                'O' | 'o' | '*' => positions.push(Position::new(column as i32, row as i32)),
                _ => return Err(Error::PlaintextError(line_number + 1, c)),
            }
        }
    }
    Ok(positions)
}

/// Reads a pattern in [RLE](https://conwaylife.com/wiki/Rle) format.
///
/// Returns the positions of the living cells, relative to the top-left corner.
#[cfg(feature = "read-rle")]
pub fn parse_rle(text: &str) -> Result<Vec<Position>, Error> {
    use ca_formats::rle::Rle;

    let rle = Rle::new(text).map_err(|e| Error::RleError(e.to_string()))?;
    let mut positions = Vec::new();
    for cell in rle {
        let cell = cell.map_err(|e| Error::RleError(e.to_string()))?;
        if cell.state == 0 {
            continue;
        }
        let (x, y) = cell.position;
        match (i32::try_from(x), i32::try_from(y)) {
            (Ok(column), Ok(row)) => positions.push(Position::new(column, row)),
            _ => return Err(Error::RleError(format!("cell ({}, {}) is too far away", x, y))),
        }
    }
    Ok(positions)
}
