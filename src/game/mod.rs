//! # Game Module
//!
//! Core gameplay state: player progression, inventory operations, the
//! battle state machine, and the top-level session that ties exploration,
//! battle, and inventory modes together.

pub mod battle;
pub mod inventory;
pub mod progression;
pub mod scheduler;
pub mod session;

pub use battle::*;
pub use inventory::*;
pub use progression::*;
pub use scheduler::*;
pub use session::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a 2D coordinate on the maze grid.
///
/// # Examples
///
/// ```
/// use mazebound::GridPosition;
///
/// let pos = GridPosition::new(10, 5);
/// assert_eq!(pos.x, 10);
/// assert_eq!(pos.y, 5);
///
/// let adjacent = pos.cardinal_adjacent_positions();
/// assert_eq!(adjacent.len(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPosition {
    pub x: i32,
    pub y: i32,
}

impl GridPosition {
    /// Creates a new position with the given coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Calculates the Manhattan distance to another position.
    ///
    /// # Examples
    ///
    /// ```
    /// use mazebound::GridPosition;
    ///
    /// let a = GridPosition::new(0, 0);
    /// let b = GridPosition::new(3, 4);
    /// assert_eq!(a.manhattan_distance(b), 7);
    /// ```
    pub fn manhattan_distance(self, other: GridPosition) -> u32 {
        ((self.x - other.x).abs() + (self.y - other.y).abs()) as u32
    }

    /// Returns the 4 cardinal adjacent positions (no diagonals).
    pub fn cardinal_adjacent_positions(self) -> Vec<GridPosition> {
        vec![
            GridPosition::new(self.x, self.y - 1), // N
            GridPosition::new(self.x - 1, self.y), // W
            GridPosition::new(self.x + 1, self.y), // E
            GridPosition::new(self.x, self.y + 1), // S
        ]
    }
}

impl std::ops::Add for GridPosition {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

/// Cardinal movement directions on the maze grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Converts a direction to a position delta.
    ///
    /// # Examples
    ///
    /// ```
    /// use mazebound::{Direction, GridPosition};
    ///
    /// assert_eq!(Direction::North.to_delta(), GridPosition::new(0, -1));
    /// ```
    pub fn to_delta(self) -> GridPosition {
        match self {
            Direction::North => GridPosition::new(0, -1),
            Direction::South => GridPosition::new(0, 1),
            Direction::East => GridPosition::new(1, 0),
            Direction::West => GridPosition::new(-1, 0),
        }
    }

    /// Returns all 4 cardinal directions.
    pub fn all() -> Vec<Direction> {
        vec![
            Direction::North,
            Direction::South,
            Direction::East,
            Direction::West,
        ]
    }
}

/// Unique identifier for placed entities.
pub type EntityId = Uuid;

/// Creates a new unique entity ID.
pub fn new_entity_id() -> EntityId {
    Uuid::new_v4()
}
