//! Reading configuration and pattern files.

use crate::{args::Args, error::Error};
use lifegrid_lib::{parse_plaintext, parse_rle, Config, Position};
use log::info;
use std::{fs, path::Path};

fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase()
}

fn read(path: &Path) -> Result<String, Error> {
    fs::read_to_string(path).map_err(|e| Error::Io(path.display().to_string(), e))
}

/// Parses a configuration in the format named by `extension`.
///
/// Missing fields take their default values.
pub(crate) fn parse_config(text: &str, extension: &str) -> Result<Config, Error> {
    match extension {
        "json" => Ok(serde_json::from_str(text)?),
        "yaml" | "yml" => Ok(serde_yaml::from_str(text)?),
        "toml" => Ok(toml::from_str(text)?),
        _ => Err(Error::UnknownFormat(extension.to_owned())),
    }
}

/// Parses a pattern in the format named by `extension`,
/// returning the living cells.
pub(crate) fn parse_pattern(text: &str, extension: &str) -> Result<Vec<Position>, Error> {
    match extension {
        "cells" | "txt" => Ok(parse_plaintext(text)?),
        "rle" => Ok(parse_rle(text)?),
        _ => Err(Error::UnknownFormat(extension.to_owned())),
    }
}

/// Moves the cells of a pattern file so that its top-left corner is at `offset`.
fn translate(cells: Vec<Position>, offset: Position) -> Result<Vec<Position>, Error> {
    cells
        .into_iter()
        .map(|p| {
            p.offset(offset.column, offset.row)
                .ok_or(Error::Lib(lifegrid_lib::Error::OutOfRange(offset)))
        })
        .collect()
}

/// Builds the configuration of the board.
///
/// The configuration file is read first, and then overridden by
/// the command-line arguments.
pub(crate) fn config(args: &Args) -> Result<Config, Error> {
    let mut config = match &args.config {
        Some(path) => {
            let config = parse_config(&read(path)?, &extension(path))?;
            info!("Loaded configuration from {}", path.display());
            config
        }
        None => Config::default(),
    };

    if let Some(columns) = args.columns {
        config.columns = columns;
    }
    if let Some(rows) = args.rows {
        config.rows = rows;
    }
    if let Some(offset) = args.offset {
        config.offset = offset;
    }
    if let Some(name) = &args.pattern {
        config.pattern = Some(name.clone());
    }
    if args.random.is_some() {
        config.random = args.random;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    if let Some(path) = &args.file {
        let cells = parse_pattern(&read(path)?, &extension(path))?;
        info!("Read {} living cells from {}", cells.len(), path.display());
        let cells = translate(cells, config.offset)?;
        config.alive.extend(cells);
    }

    Ok(config)
}
