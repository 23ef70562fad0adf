mod args;
mod cli;
mod error;
mod input;

use args::Args;
use std::process;

fn main() {
    env_logger::init();
    let args = Args::parse().unwrap_or_else(|e| e.exit());
    if let Err(e) = cli::run(args) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
