//! Textual snapshots of the board.

use crate::{board::Board, cells::LifeState, position::Position};
use std::fmt::{self, Display, Formatter};

/// Displays the whole board, one line per row.
///
/// Each cell is shown as `| [+](C,R) |` when alive and `| [ ](C,R) |` when dead,
/// where `C` and `R` are its column and row, padded with zeros to the number
/// of digits of the board's width and height, so that the cells line up.
///
/// Lines are separated by `\n`; there is no newline after the last row.
impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let cw = self.columns().to_string().len();
        let rw = self.rows().to_string().len();
        for cell in self.cells() {
            let Position { column, row } = cell.position();
            if column == 0 && row > 0 {
                writeln!(f)?;
            }
            let state = if cell.is_alive() { '+' } else { ' ' };
            write!(f, "| [{}]({:0cw$},{:0rw$}) |", state, column, row, cw = cw, rw = rw)?;
        }
        Ok(())
    }
}

impl Board {
    /// Displays the whole board in
    /// [Plaintext](https://conwaylife.com/wiki/Plaintext) format.
    ///
    /// * **Dead** cells are represented by `.`;
    /// * **Living** cells are represented by `o`.
    pub fn plaintext(&self) -> String {
        let columns = self.columns() as usize;
        let mut str = String::with_capacity((columns + 1) * self.rows() as usize);
        for row in self.states().chunks(columns) {
            for &state in row {
                str.push(if state.is_alive() { 'o' } else { '.' });
            }
            str.push('\n');
        }
        str
    }

    /// Displays the whole board in [RLE](https://conwaylife.com/wiki/Rle) format.
    ///
    /// * **Dead** cells are represented by `b`;
    /// * **Living** cells are represented by `o`;
    /// * Each row is ended with `$`, except the last one which is ended with `!`.
    ///
    /// Dead cells at the end of a row are omitted.
    pub fn rle(&self) -> String {
        let mut str = format!(
            "x = {}, y = {}, rule = B3/S23\n",
            self.columns(),
            self.rows()
        );
        let states = self.states();
        let mut rows = states.chunks(self.columns() as usize).peekable();
        while let Some(row) = rows.next() {
            let mut runs: Vec<(usize, LifeState)> = Vec::new();
            for &state in row {
                match runs.last_mut() {
                    Some((count, last)) if *last == state => *count += 1,
                    _ => runs.push((1, state)),
                }
            }
            if let Some((_, LifeState::Dead)) = runs.last() {
                runs.pop();
            }
            for (count, state) in runs {
                if count > 1 {
                    str.push_str(&count.to_string());
                }
                str.push(if state.is_alive() { 'o' } else { 'b' });
            }
            str.push(if rows.peek().is_some() { '$' } else { '!' });
        }
        str.push('\n');
        str
    }
}
