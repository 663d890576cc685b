//! Example demonstrating how to solve a puzzle string from the command line.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example solve_puzzle -- "..9..5.1.85.4....2432......1...69.83.9.....6.62.71...9......1945....4.37.4.3..6.."
//! ```
//!
//! Prints the solved board followed by its 81-character string form, or the
//! failure reason when the puzzle is malformed or unsolvable.

use std::process;

use clap::Parser;
use ninegrid_core::Grid;
use ninegrid_solver::solve;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// 81-character puzzle string (digits 1-9, `.` for blank cells).
    puzzle: String,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    match solve(&args.puzzle) {
        Ok(solution) => {
            let grid = Grid::from_puzzle(&solution).expect("solver output is well-formed");
            println!("{grid}");
            println!();
            println!("{solution}");
        }
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}
