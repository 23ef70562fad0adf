//! Running the board without user interaction.

use crate::{
    args::{Args, Format},
    error::Error,
    input,
};
use lifegrid_lib::{Board, LifeState};
use log::info;
use std::collections::HashMap;

fn show(board: &Board, format: Format) -> String {
    match format {
        Format::Board => format!("{}\n", board),
        Format::Plaintext => board.plaintext(),
        Format::Rle => board.rle(),
    }
}

fn print_generation(board: &Board, format: Format) {
    println!("Generation {}:", board.generation());
    print!("{}", show(board, format));
}

/// A board state that came back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Cycle {
    /// The generation where the state first appeared.
    first: u64,
    /// Number of generations between two appearances.
    period: u64,
}

/// Runs at most `generations` generations, stopping as soon as
/// the board repeats an earlier state.
fn find_cycle(board: &mut Board, generations: u64) -> Option<Cycle> {
    // Maps each board seen so far to the generation where it first appeared.
    let mut seen: HashMap<Vec<LifeState>, u64> = HashMap::new();
    seen.insert(board.states(), board.generation());
    for _ in 0..generations {
        let report = board.generate();
        if let Some(first) = seen.insert(board.states(), report.index) {
            return Some(Cycle {
                first,
                period: report.index - first,
            });
        }
    }
    None
}

/// Builds the board and runs it for the given number of generations.
pub(crate) fn run(args: Args) -> Result<(), Error> {
    let config = input::config(&args)?;
    info!("Configuration: {:?}", config);
    let mut board = config.board()?;
    let format = args.format;

    if args.all {
        print_generation(&board, format);
        board.on_generate(move |board, _| print_generation(board, format));
    }

    if args.stop_on_cycle {
        if let Some(cycle) = find_cycle(&mut board, args.generations) {
            info!(
                "Generation {} repeats generation {}",
                board.generation(),
                cycle.first
            );
            if !args.all {
                print_generation(&board, format);
            }
            println!("Cycle found with period {}", cycle.period);
            return Ok(());
        }
    } else {
        board.generate_n(args.generations);
    }

    if !args.all {
        print_generation(&board, format);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifegrid_lib::{Config, Position};

    fn seeded(columns: i32, rows: i32, pattern: &str, offset: (i32, i32)) -> Board {
        Config::new(columns, rows)
            .set_pattern(pattern)
            .set_offset(offset)
            .board()
            .unwrap()
    }

    #[test]
    fn blinker_cycle() {
        let mut board = seeded(5, 5, "blinker", (1, 2));
        assert_eq!(
            find_cycle(&mut board, 10),
            Some(Cycle {
                first: 0,
                period: 2
            })
        );
        assert_eq!(board.generation(), 2);
    }

    #[test]
    fn still_life_cycle() {
        let mut board = seeded(5, 5, "tub", (1, 1));
        assert_eq!(
            find_cycle(&mut board, 10),
            Some(Cycle {
                first: 0,
                period: 1
            })
        );
        assert_eq!(board.generation(), 1);
    }

    #[test]
    fn glider_becomes_a_block() {
        let mut board = seeded(8, 8, "glider", (0, 0));
        assert_eq!(
            find_cycle(&mut board, 100),
            Some(Cycle {
                first: 23,
                period: 1
            })
        );
        assert_eq!(board.generation(), 24);
        assert_eq!(
            board.alive_positions(),
            vec![
                Position::new(6, 6),
                Position::new(7, 6),
                Position::new(6, 7),
                Position::new(7, 7)
            ]
        );
    }

    #[test]
    fn no_cycle_yet() {
        let mut board = seeded(5, 5, "blinker", (1, 2));
        assert_eq!(find_cycle(&mut board, 1), None);
        assert_eq!(board.generation(), 1);

        let mut board = seeded(8, 8, "glider", (0, 0));
        assert_eq!(find_cycle(&mut board, 0), None);
        assert_eq!(board.generation(), 0);
    }
}
