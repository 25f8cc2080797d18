//! Maze generation by recursive backtracking.
//!
//! [`MazeGenerator`] carves a perfect maze on a square grid that starts out as
//! all walls. Carving begins at the top-left cell and jumps two cells at a
//! time in shuffled directions, opening the wall in between, so the open
//! region is a spanning tree over the even-indexed lattice.
//!
//! Both default marker corners are always open and connected to the carved
//! region, so the default start and end markers are valid for every maze.
//!
//! Generation is deterministic for a given [`MazeSeed`]; the seed of a random
//! maze is returned alongside it so the maze can be reproduced.
//!
//! # Examples
//!
//! ```
//! use mazetrace_core::{Coordinate, MazeSize};
//! use mazetrace_generator::{MazeGenerator, MazeSeed};
//!
//! let generator = MazeGenerator::new();
//! let maze = generator.generate(MazeSize::DEFAULT);
//! assert!(maze.grid.is_open(Coordinate::ORIGIN));
//! assert!(maze.grid.is_open(maze.grid.last()));
//!
//! let again = generator.generate_with_seed(MazeSize::DEFAULT, maze.seed);
//! assert_eq!(again.grid, maze.grid);
//! ```

pub use self::seed::*;

use mazetrace_core::{CellKind, Coordinate, Direction, Grid, MazeSize};
use rand::{SeedableRng as _, seq::SliceRandom as _};
use rand_pcg::Pcg64;

mod seed;

/// A generated maze together with the seed that reproduces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedMaze {
    /// The maze.
    pub grid: Grid,
    /// The seed it was generated from.
    pub seed: MazeSeed,
}

/// Recursive-backtracking maze generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct MazeGenerator;

impl MazeGenerator {
    /// Creates a generator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Generates a maze from a fresh random seed.
    #[must_use]
    pub fn generate(&self, size: MazeSize) -> GeneratedMaze {
        self.generate_with_seed(size, MazeSeed::random())
    }

    /// Generates the maze determined by `seed`.
    #[must_use]
    pub fn generate_with_seed(&self, size: MazeSize, seed: MazeSeed) -> GeneratedMaze {
        let mut rng = Pcg64::from_seed(seed.into());
        let n = size.cells();
        let mut cells = Carving::new(n);

        let mut stack = vec![Frame::new(Coordinate::ORIGIN, &mut rng)];
        cells.open(Coordinate::ORIGIN);
        while let Some(frame) = stack.last_mut() {
            let Some(direction) = frame.pending.pop() else {
                stack.pop();
                continue;
            };
            let from = frame.coord;
            let Some(to) = from
                .step_by(direction, 2)
                .filter(|&to| cells.is_wall(to))
            else {
                continue;
            };
            if let Some(between) = from.step(direction) {
                cells.open(between);
            }
            cells.open(to);
            stack.push(Frame::new(to, &mut rng));
        }

        cells.open(Coordinate::ORIGIN);
        cells.open(Coordinate::new(n - 1, n - 1));
        if n % 2 == 0 {
            // The far corner is off the carving lattice.
            cells.open(Coordinate::new(n - 2, n - 1));
        }

        let grid = cells.into_grid();
        log::debug!("generated {n}x{n} maze from seed {seed}");
        GeneratedMaze { grid, seed }
    }
}

/// One level of the backtracking walk.
#[derive(Debug)]
struct Frame {
    coord: Coordinate,
    // Popped from the back, so the shuffle order is consumed in reverse.
    pending: Vec<Direction>,
}

impl Frame {
    fn new(coord: Coordinate, rng: &mut Pcg64) -> Self {
        let mut pending = Direction::ALL.to_vec();
        pending.shuffle(rng);
        Self { coord, pending }
    }
}

#[derive(Debug)]
struct Carving {
    size: usize,
    cells: Vec<CellKind>,
}

impl Carving {
    fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![CellKind::Wall; size * size],
        }
    }

    fn index(&self, coord: Coordinate) -> Option<usize> {
        (coord.row < self.size && coord.col < self.size).then(|| coord.row * self.size + coord.col)
    }

    fn is_wall(&self, coord: Coordinate) -> bool {
        self.index(coord)
            .is_some_and(|i| self.cells[i].is_wall())
    }

    fn open(&mut self, coord: Coordinate) {
        if let Some(i) = self.index(coord) {
            self.cells[i] = CellKind::Open;
        }
    }

    fn into_grid(self) -> Grid {
        Grid::from_rows(self.cells.chunks(self.size))
            .expect("a carving of at least MazeSize::MIN is a non-empty square")
    }
}
