//! Example demonstrating maze generation and local solving.
//!
//! This example shows how to:
//! - Generate a random maze, or reproduce one from a seed
//! - Print the maze in its text form together with its seed
//! - Solve it locally and report the search statistics
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_maze
//! ```
//!
//! Pick a size and reproduce a maze from a seed:
//!
//! ```sh
//! cargo run --example generate_maze -- --size 21 --seed 1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef
//! ```
//!
//! Solve with depth-first search instead of breadth-first search:
//!
//! ```sh
//! cargo run --example generate_maze -- --algorithm dfs
//! ```

use std::process;

use clap::Parser;
use mazetrace_core::{Algorithm, MazeSize, Markers};
use mazetrace_generator::{MazeGenerator, MazeSeed};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Side length of the maze (5 to 30).
    #[arg(long, value_name = "SIZE", default_value_t = MazeSize::DEFAULT.get())]
    size: u8,

    /// Seed to reproduce a maze, as 64 hex digits.
    #[arg(long, value_name = "HEX")]
    seed: Option<MazeSeed>,

    /// Search used to solve the generated maze.
    #[arg(long, value_name = "ALGORITHM", default_value_t = Algorithm::Bfs)]
    algorithm: Algorithm,
}

fn main() {
    let args = Args::parse();
    let size = MazeSize::new(args.size).unwrap_or_else(|err| {
        eprintln!("{err}");
        process::exit(2);
    });

    let generator = MazeGenerator::new();
    let maze = match args.seed {
        Some(seed) => generator.generate_with_seed(size, seed),
        None => generator.generate(size),
    };

    println!("Seed: {}", maze.seed);
    println!();
    print!("{}", maze.grid);
    println!();

    let markers = Markers::corners(&maze.grid).unwrap_or_else(|err| {
        eprintln!("{err}");
        process::exit(1);
    });
    match mazetrace_solver::solve(&maze.grid, args.algorithm, markers.start(), markers.end()) {
        Ok(trace) => {
            println!("Algorithm: {}", args.algorithm.label());
            println!("Visited: {}", trace.visited().len());
            println!("Path: {}", trace.path().len());
        }
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}
