//! # Mazebound
//!
//! A turn-based maze exploration RPG core.
//!
//! ## Architecture Overview
//!
//! Mazebound is the headless heart of a small exploration/combat loop. A
//! procedurally generated maze is explored by a player avatar; contact with
//! monsters, a boss, or loot chests moves the game into a turn-based battle
//! or an inventory screen, with player progression carried across battles
//! and across regenerated levels. The crate exposes plain data and pure
//! state transitions; rendering, input polling, and UI widgets are left to
//! whatever presentation layer consumes it.
//!
//! The major pieces:
//!
//! - **Generation**: recursive-backtracker maze carving with a braiding
//!   pass, plus entity placement with overlap avoidance
//! - **Progression**: persistent player stats, equipment, and a bounded
//!   inventory threaded through every level and battle
//! - **Battle**: a turn-based combat state machine over the player and a
//!   per-encounter enemy archetype copy
//! - **Session**: one top-level state machine tying exploration, battle,
//!   and inventory modes together with a logical-clock scheduler

pub mod game;
pub mod generation;

// Core module re-exports
pub use game::*;
pub use generation::*;

/// Core error type for the Mazebound engine.
///
/// Gameplay policy violations (out-of-range inventory index, action out of
/// turn, insufficient MP) are deliberately *not* errors: they resolve to
/// no-ops or rejected outcomes per the in-game rules. Errors are reserved
/// for caller contract violations and serialization failures.
#[derive(thiserror::Error, Debug)]
pub enum MazeboundError {
    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Game state is invalid
    #[error("Invalid game state: {0}")]
    InvalidState(String),

    /// Generation failed
    #[error("Generation failed: {0}")]
    GenerationFailed(String),
}

/// Result type used throughout the Mazebound codebase.
pub type MazeboundResult<T> = Result<T, MazeboundError>;

/// Version information for the game.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Game configuration constants.
pub mod config {
    /// Default maze width in cells
    pub const DEFAULT_MAZE_WIDTH: u32 = 20;

    /// Default maze height in cells
    pub const DEFAULT_MAZE_HEIGHT: u32 = 15;

    /// Smallest maze dimension the carver supports (one-cell interior)
    pub const MIN_MAZE_DIMENSION: u32 = 5;

    /// Monsters scattered per level
    pub const MONSTERS_PER_LEVEL: u32 = 5;

    /// Loot chests scattered per level
    pub const CHESTS_PER_LEVEL: u32 = 3;

    /// Rejection-sampling attempt cap per placement category
    pub const PLACEMENT_ATTEMPTS: u32 = 100;

    /// Probability of flipping an eligible interior wall during braiding
    pub const BRAID_CHANCE: f64 = 0.10;

    /// Default player starting health
    pub const DEFAULT_PLAYER_HP: u32 = 100;

    /// Default player starting magic points
    pub const DEFAULT_PLAYER_MP: u32 = 50;

    /// Default player base attack
    pub const DEFAULT_PLAYER_ATTACK: u32 = 15;

    /// Default player base defense
    pub const DEFAULT_PLAYER_DEFENSE: u32 = 7;

    /// Inventory slot cap
    pub const INVENTORY_CAPACITY: usize = 3;

    /// MP cost of the heal action
    pub const HEAL_MP_COST: u32 = 10;

    /// HP restored by the heal action (clamped at max)
    pub const HEAL_AMOUNT: u32 = 30;

    /// Delay before the enemy's automatic turn, logical milliseconds
    pub const ENEMY_TURN_DELAY_MS: u64 = 1000;

    /// Delay before leaving a won battle, logical milliseconds
    pub const WIN_EXIT_DELAY_MS: u64 = 1500;

    /// Delay before leaving a lost battle, logical milliseconds
    pub const LOSS_EXIT_DELAY_MS: u64 = 2000;

    /// Minimum gap between repeated inventory-full notices
    pub const PICKUP_NOTICE_COOLDOWN_MS: u64 = 1000;
}
