//! Parsing command-line arguments.

use clap::{
    builder::PossibleValuesParser, command, error::ErrorKind, value_parser, Arg, ArgAction, Error,
};
use lifegrid_lib::{Position, PATTERNS};
use std::path::PathBuf;

/// How the board is printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum Format {
    /// One `| [+](C,R) |` box per cell.
    #[default]
    Board,
    Plaintext,
    Rle,
}

/// A struct to store the parse results.
#[derive(Clone, Debug, Default)]
pub(crate) struct Args {
    pub(crate) columns: Option<i32>,
    pub(crate) rows: Option<i32>,
    pub(crate) config: Option<PathBuf>,
    pub(crate) pattern: Option<String>,
    pub(crate) file: Option<PathBuf>,
    pub(crate) offset: Option<Position>,
    pub(crate) random: Option<f64>,
    pub(crate) seed: Option<u64>,
    pub(crate) generations: u64,
    pub(crate) format: Format,
    pub(crate) all: bool,
    pub(crate) stop_on_cycle: bool,
}

impl Args {
    /// Parses the command-line arguments.
    pub(crate) fn parse() -> Result<Self, Error> {
        let matches = command!()
            .long_about(
                "Runs Conway's Game of Life on a bounded grid\n\
                 \n\
                 Cells outside of the grid are always dead.\n\
                 \n\
                 The board is displayed in one of three formats:\n\
                 * `board`: each cell is shown as `| [+](C,R) |` when alive \
                 and `| [ ](C,R) |` when dead;\n\
                 * `plaintext`: `.` for dead cells and `o` for living cells;\n\
                 * `rle`: run-length encoded, with `b` for dead cells, \
                 `o` for living cells, `$` at the end of each row and `!` \
                 at the end of the board.\n",
            )
            .arg(
                Arg::new("COLUMNS")
                    .help("Number of columns")
                    .long_help(
                        "Number of columns\n\
                         Overrides the value in the configuration file. \
                         Defaults to 16 when neither is given.\n",
                    )
                    .index(1)
                    .value_parser(value_parser!(i32)),
            )
            .arg(
                Arg::new("ROWS")
                    .help("Number of rows")
                    .long_help(
                        "Number of rows\n\
                         If this value is omitted while COLUMNS is given, \
                         the board is a square.\n",
                    )
                    .index(2)
                    .value_parser(value_parser!(i32)),
            )
            .arg(
                Arg::new("CONFIG")
                    .help("Configuration file")
                    .long_help(
                        "Configuration file\n\
                         The format is chosen by the extension: \
                         `.json`, `.yaml`, `.yml` or `.toml`.\n\
                         Other command-line arguments override its values.\n",
                    )
                    .short('c')
                    .long("config")
                    .value_parser(value_parser!(PathBuf)),
            )
            .arg(
                Arg::new("PATTERN")
                    .help("A well-known pattern to seed")
                    .short('p')
                    .long("pattern")
                    .ignore_case(true)
                    .value_parser(PossibleValuesParser::new(PATTERNS.iter().map(|p| p.name))),
            )
            .arg(
                Arg::new("FILE")
                    .help("A pattern file to seed")
                    .long_help(
                        "A pattern file to seed\n\
                         Supports Plaintext (`.cells`, `.txt`) and RLE (`.rle`) files.\n",
                    )
                    .long("file")
                    .value_parser(value_parser!(PathBuf)),
            )
            .arg(
                Arg::new("OFFSET")
                    .help("Position of the top-left corner of the seeded pattern")
                    .long("offset")
                    .num_args(2)
                    .value_names(["COLUMN", "ROW"])
                    .allow_negative_numbers(true)
                    .value_parser(value_parser!(i32)),
            )
            .arg(
                Arg::new("RANDOM")
                    .help("Density of a random soup")
                    .long_help(
                        "Density of a random soup\n\
                         Every cell is brought to life with this probability, \
                         which must be between 0 and 1.\n",
                    )
                    .short('r')
                    .long("random")
                    .value_parser(value_parser!(f64)),
            )
            .arg(
                Arg::new("SEED")
                    .help("Seed of the random soup")
                    .long("seed")
                    .value_parser(value_parser!(u64)),
            )
            .arg(
                Arg::new("GENERATIONS")
                    .help("Number of generations to run")
                    .short('g')
                    .long("generations")
                    .default_value("1")
                    .value_parser(value_parser!(u64)),
            )
            .arg(
                Arg::new("FORMAT")
                    .help("Output format")
                    .short('f')
                    .long("format")
                    .value_parser(["board", "plaintext", "rle"])
                    .default_value("board"),
            )
            .arg(
                Arg::new("ALL")
                    .help("Prints every generation instead of only the last one")
                    .short('a')
                    .long("all")
                    .action(ArgAction::SetTrue),
            )
            .arg(
                Arg::new("CYCLE")
                    .help("Stops when a board repeats")
                    .long_help(
                        "Stops when a board repeats\n\
                         The period of the cycle is reported.\n",
                    )
                    .long("stop-on-cycle")
                    .action(ArgAction::SetTrue),
            )
            .try_get_matches()?;

        let columns = matches.get_one::<i32>("COLUMNS").copied();
        let rows = matches.get_one::<i32>("ROWS").copied().or(columns);

        let offset = matches
            .get_many::<i32>("OFFSET")
            .map(|mut values| {
                let column = values.next().copied().unwrap_or_default();
                let row = values.next().copied().unwrap_or_default();
                Position::new(column, row)
            });

        let random = matches.get_one::<f64>("RANDOM").copied();
        if let Some(density) = random {
            if !(0.0..=1.0).contains(&density) {
                return Err(Error::raw(
                    ErrorKind::InvalidValue,
                    "density must be between 0 and 1\n",
                ));
            }
        }

        let pattern = matches.get_one::<String>("PATTERN").cloned();
        let file = matches.get_one::<PathBuf>("FILE").cloned();
        if pattern.is_some() && file.is_some() {
            return Err(Error::raw(
                ErrorKind::ArgumentConflict,
                "only one of --pattern and --file can be used\n",
            ));
        }

        let format = match matches.get_one::<String>("FORMAT").map(String::as_str) {
            Some("plaintext") => Format::Plaintext,
            Some("rle") => Format::Rle,
            _ => Format::Board,
        };

        Ok(Args {
            columns,
            rows,
            config: matches.get_one::<PathBuf>("CONFIG").cloned(),
            pattern,
            file,
            offset,
            random,
            seed: matches.get_one::<u64>("SEED").copied(),
            generations: matches.get_one::<u64>("GENERATIONS").copied().unwrap_or(1),
            format,
            all: matches.get_flag("ALL"),
            stop_on_cycle: matches.get_flag("CYCLE"),
        })
    }
}
