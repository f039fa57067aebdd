//! # Entity Placement
//!
//! Scatters monsters, one boss, and loot chests onto the floor cells of a
//! generated maze, and picks the deterministic player start.
//!
//! All categories share one occupancy set keyed by position, so no two
//! entities (the player included) ever coincide. Scatter categories use
//! bounded rejection sampling and degrade to fewer entities rather than
//! failing level generation when a maze is too small or dense to satisfy
//! the requested count.

use crate::{
    new_entity_id, EntityId, GenerationConfig, GridPosition, Maze, MazeboundError,
    MazeboundResult,
};
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Minimum coordinate bias keeping the boss away from the player start: a
/// candidate is accepted only when `x > 5 || y > 5`.
const BOSS_DISTANCE_BIAS: i32 = 5;

/// What occupies a placed cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Monster,
    Boss,
    Chest,
}

/// One placed entity: a kind at a floor cell, with a stable id so the
/// session can remove the exact entity a contact consumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedEntity {
    pub id: EntityId,
    pub kind: EntityKind,
    pub position: GridPosition,
}

impl PlacedEntity {
    fn new(kind: EntityKind, position: GridPosition) -> Self {
        Self {
            id: new_entity_id(),
            kind,
            position,
        }
    }
}

/// Output of entity placement for one level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placements {
    /// Deterministically chosen player start cell
    pub player_start: GridPosition,
    /// Monsters, boss, and chests in placement order
    pub entities: Vec<PlacedEntity>,
}

impl Placements {
    /// Positions of all placed monsters.
    pub fn monster_positions(&self) -> Vec<GridPosition> {
        self.of_kind(EntityKind::Monster)
    }

    /// Position of the boss, if one could be placed.
    pub fn boss_position(&self) -> Option<GridPosition> {
        self.of_kind(EntityKind::Boss).first().copied()
    }

    /// Positions of all placed chests.
    pub fn chest_positions(&self) -> Vec<GridPosition> {
        self.of_kind(EntityKind::Chest)
    }

    fn of_kind(&self, kind: EntityKind) -> Vec<GridPosition> {
        self.entities
            .iter()
            .filter(|e| e.kind == kind)
            .map(|e| e.position)
            .collect()
    }
}

/// Places the player start, monsters, the boss, and chests for one level.
///
/// Placement order matters for occupancy: player first, then monsters, then
/// the boss, then chests, each avoiding everything placed before it.
///
/// # Examples
///
/// ```
/// use mazebound::{place_entities, GenerationConfig, GridPosition, Maze};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let config = GenerationConfig::new(7);
/// let mut rng = StdRng::seed_from_u64(config.seed);
/// let maze = Maze::generate(config.width, config.height, &mut rng).unwrap();
/// let placements = place_entities(&maze, GridPosition::new(1, 1), &config, &mut rng).unwrap();
/// assert!(maze.is_floor(placements.player_start));
/// ```
pub fn place_entities(
    maze: &Maze,
    start_hint: GridPosition,
    config: &GenerationConfig,
    rng: &mut StdRng,
) -> MazeboundResult<Placements> {
    let mut occupied: HashSet<GridPosition> = HashSet::new();

    let player_start = find_player_start(maze, start_hint)?;
    occupied.insert(player_start);

    let mut entities = Vec::new();

    scatter(
        maze,
        config,
        rng,
        &mut occupied,
        &mut entities,
        EntityKind::Monster,
        config.monster_count,
        |_| true,
    );

    scatter(
        maze,
        config,
        rng,
        &mut occupied,
        &mut entities,
        EntityKind::Boss,
        1,
        |pos| pos.x > BOSS_DISTANCE_BIAS || pos.y > BOSS_DISTANCE_BIAS,
    );

    scatter(
        maze,
        config,
        rng,
        &mut occupied,
        &mut entities,
        EntityKind::Chest,
        config.chest_count,
        |_| true,
    );

    let placements = Placements {
        player_start,
        entities,
    };

    log::info!(
        "placed player at ({}, {}), {} monsters, boss: {}, {} chests",
        player_start.x,
        player_start.y,
        placements.monster_positions().len(),
        placements.boss_position().is_some(),
        placements.chest_positions().len()
    );

    Ok(placements)
}

/// Scans row-major from the hint until a floor cell is found, wrapping
/// within the row interior and advancing a row on overflow.
fn find_player_start(maze: &Maze, hint: GridPosition) -> MazeboundResult<GridPosition> {
    let mut x = hint.x.max(1);
    let mut y = hint.y.max(1);

    while y < maze.height() as i32 - 1 {
        let pos = GridPosition::new(x, y);
        if maze.is_floor(pos) {
            return Ok(pos);
        }
        x += 1;
        if x >= maze.width() as i32 - 1 {
            x = 1;
            y += 1;
        }
    }

    Err(MazeboundError::GenerationFailed(
        "no floor cell available for player start".to_string(),
    ))
}

/// Rejection-samples `count` unoccupied interior floor cells satisfying
/// `accept`, giving up after the configured attempt cap.
#[allow(clippy::too_many_arguments)]
fn scatter(
    maze: &Maze,
    config: &GenerationConfig,
    rng: &mut StdRng,
    occupied: &mut HashSet<GridPosition>,
    entities: &mut Vec<PlacedEntity>,
    kind: EntityKind,
    count: u32,
    accept: impl Fn(GridPosition) -> bool,
) {
    let mut placed = 0;
    let mut attempts = 0;

    while placed < count && attempts < config.placement_attempts {
        attempts += 1;
        let pos = GridPosition::new(
            rng.gen_range(1..maze.width() as i32 - 1),
            rng.gen_range(1..maze.height() as i32 - 1),
        );

        if maze.is_floor(pos) && accept(pos) && !occupied.contains(&pos) {
            occupied.insert(pos);
            entities.push(PlacedEntity::new(kind, pos));
            placed += 1;
        }
    }

    if placed < count {
        log::warn!(
            "placed {}/{} {:?} entities after {} attempts; continuing short",
            placed,
            count,
            kind,
            attempts
        );
    }
}
