//! # Maze Generation
//!
//! Randomized recursive-backtracker maze carving with a braiding
//! post-pass.
//!
//! The carver works on a sub-grid of cells at odd coordinates with walls
//! between them at even coordinates, producing a spanning tree over that
//! lattice: every carved cell is reachable from the start and there is
//! exactly one path between any two cells. The braiding pass then knocks
//! out a fraction of the remaining interior walls to add loops and
//! alternate routes. Braiding only adds edges, so reachability from the
//! start is preserved.
//!
//! Cells beyond the odd-indexed lattice that the carver never visits stay
//! walls by construction; with even dimensions that includes the last
//! interior row or column, which is expected.

use crate::{config, GridPosition, MazeboundError, MazeboundResult};
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Wall,
    Floor,
}

/// A generated maze: a fixed-size grid of walls and floors, immutable for
/// the lifetime of a level.
///
/// # Examples
///
/// ```
/// use mazebound::Maze;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let maze = Maze::generate(20, 15, &mut rng).unwrap();
/// assert!(maze.is_floor(Maze::start_cell()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Maze {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
}

/// Carving directions: the four distance-2 lattice neighbors.
const CARVE_DIRECTIONS: [(i32, i32); 4] = [(0, -2), (0, 2), (-2, 0), (2, 0)];

impl Maze {
    /// Generates a maze of the given dimensions.
    ///
    /// Both dimensions must be at least [`config::MIN_MAZE_DIMENSION`] so
    /// the algorithm has an interior at least one cell thick on all sides.
    pub fn generate(width: u32, height: u32, rng: &mut StdRng) -> MazeboundResult<Self> {
        Self::generate_with_braiding(width, height, config::BRAID_CHANCE, rng)
    }

    /// Generates a maze with an explicit braid chance, for configs that
    /// override the default.
    pub fn generate_with_braiding(
        width: u32,
        height: u32,
        braid_chance: f64,
        rng: &mut StdRng,
    ) -> MazeboundResult<Self> {
        if width < config::MIN_MAZE_DIMENSION || height < config::MIN_MAZE_DIMENSION {
            return Err(MazeboundError::GenerationFailed(format!(
                "maze dimensions {}x{} below minimum {}",
                width,
                height,
                config::MIN_MAZE_DIMENSION
            )));
        }

        let mut maze = Self {
            width,
            height,
            cells: vec![Cell::Wall; (width * height) as usize],
        };

        maze.carve_passages(rng);
        maze.braid(rng, braid_chance);

        log::debug!(
            "generated {}x{} maze with {} floor cells",
            width,
            height,
            maze.floor_positions().len()
        );

        Ok(maze)
    }

    /// The cell the carver always starts from.
    pub fn start_cell() -> GridPosition {
        GridPosition::new(1, 1)
    }

    /// Depth-first carving over the odd-coordinate lattice.
    fn carve_passages(&mut self, rng: &mut StdRng) {
        let start = Self::start_cell();
        self.set(start, Cell::Floor);

        let mut stack = vec![start];
        while let Some(&current) = stack.last() {
            // Unvisited lattice neighbors strictly inside the interior.
            let mut candidates: Vec<(GridPosition, GridPosition)> = Vec::new();
            for (dx, dy) in CARVE_DIRECTIONS {
                let neighbor = GridPosition::new(current.x + dx, current.y + dy);
                if neighbor.x > 0
                    && neighbor.x < self.width as i32 - 1
                    && neighbor.y > 0
                    && neighbor.y < self.height as i32 - 1
                    && self.cell(neighbor) == Some(Cell::Wall)
                {
                    let between = GridPosition::new(current.x + dx / 2, current.y + dy / 2);
                    candidates.push((neighbor, between));
                }
            }

            if candidates.is_empty() {
                stack.pop();
            } else {
                let (neighbor, between) = candidates[rng.gen_range(0..candidates.len())];
                self.set(between, Cell::Floor);
                self.set(neighbor, Cell::Floor);
                stack.push(neighbor);
            }
        }
    }

    /// Braiding pass: flips interior walls with at least two floor
    /// 4-neighbors to floor with the given probability.
    ///
    /// Single pass, mutating in place; a flipped cell is not itself
    /// re-examined.
    fn braid(&mut self, rng: &mut StdRng, chance: f64) {
        if chance <= 0.0 {
            return;
        }

        for y in 1..self.height as i32 - 1 {
            for x in 1..self.width as i32 - 1 {
                let pos = GridPosition::new(x, y);
                if self.cell(pos) != Some(Cell::Wall) {
                    continue;
                }

                let floor_neighbors = pos
                    .cardinal_adjacent_positions()
                    .into_iter()
                    .filter(|&n| self.cell(n) == Some(Cell::Floor))
                    .count();

                if floor_neighbors >= 2 && rng.gen_bool(chance) {
                    self.set(pos, Cell::Floor);
                }
            }
        }
    }

    /// Maze width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Maze height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether a position lies on the grid.
    pub fn in_bounds(&self, pos: GridPosition) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width as i32 && pos.y < self.height as i32
    }

    /// The cell at a position, or `None` out of bounds.
    pub fn cell(&self, pos: GridPosition) -> Option<Cell> {
        if self.in_bounds(pos) {
            Some(self.cells[(pos.y as u32 * self.width + pos.x as u32) as usize])
        } else {
            None
        }
    }

    /// Whether the position is a walkable floor cell.
    pub fn is_floor(&self, pos: GridPosition) -> bool {
        self.cell(pos) == Some(Cell::Floor)
    }

    fn set(&mut self, pos: GridPosition, cell: Cell) {
        let idx = (pos.y as u32 * self.width + pos.x as u32) as usize;
        self.cells[idx] = cell;
    }

    /// All floor positions in row-major order.
    pub fn floor_positions(&self) -> Vec<GridPosition> {
        let mut positions = Vec::new();
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                let pos = GridPosition::new(x, y);
                if self.is_floor(pos) {
                    positions.push(pos);
                }
            }
        }
        positions
    }

    /// Flood-fills floor cells reachable from `start` via 4-neighbor walks.
    pub fn reachable_from(&self, start: GridPosition) -> HashSet<GridPosition> {
        let mut visited = HashSet::new();
        if !self.is_floor(start) {
            return visited;
        }

        let mut queue = vec![start];
        visited.insert(start);
        while let Some(pos) = queue.pop() {
            for neighbor in pos.cardinal_adjacent_positions() {
                if self.is_floor(neighbor) && visited.insert(neighbor) {
                    queue.push(neighbor);
                }
            }
        }
        visited
    }
}
