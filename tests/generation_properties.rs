//! Property tests for maze generation and entity placement.

use mazebound::{place_entities, GenerationConfig, GridPosition, Maze};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

proptest! {
    /// Every floor cell is reachable from the start cell by 4-neighbor
    /// floor walks, for any seed and any dimensions the generator accepts.
    #[test]
    fn maze_is_fully_connected(seed in any::<u64>(), width in 5u32..40, height in 5u32..40) {
        let mut rng = StdRng::seed_from_u64(seed);
        let maze = Maze::generate(width, height, &mut rng).unwrap();

        let reachable = maze.reachable_from(Maze::start_cell());
        let floors: HashSet<GridPosition> = maze.floor_positions().into_iter().collect();
        prop_assert_eq!(reachable, floors);
    }

    /// Braiding never disconnects anything: the unbraided floor set is a
    /// subset of the braided one for the same carve sequence.
    #[test]
    fn braiding_only_adds_edges(seed in any::<u64>()) {
        let mut rng_a = StdRng::seed_from_u64(seed);
        let mut rng_b = StdRng::seed_from_u64(seed);
        let unbraided = Maze::generate_with_braiding(20, 15, 0.0, &mut rng_a).unwrap();
        let braided = Maze::generate_with_braiding(20, 15, 0.5, &mut rng_b).unwrap();

        for pos in unbraided.floor_positions() {
            prop_assert!(braided.is_floor(pos));
        }
    }

    /// All placements are pairwise distinct and every one lies on floor.
    #[test]
    fn placements_never_overlap(seed in any::<u64>()) {
        let config = GenerationConfig::new(seed);
        let mut rng = StdRng::seed_from_u64(seed);
        let maze = Maze::generate(config.width, config.height, &mut rng).unwrap();
        let placements = place_entities(&maze, GridPosition::new(1, 1), &config, &mut rng).unwrap();

        prop_assert!(maze.is_floor(placements.player_start));

        let mut seen = HashSet::new();
        seen.insert(placements.player_start);
        for entity in &placements.entities {
            prop_assert!(maze.is_floor(entity.position));
            prop_assert!(seen.insert(entity.position));
        }
    }

    /// Shrunken mazes may place fewer entities than requested but must
    /// never exceed the request or fail outright.
    #[test]
    fn oversubscribed_placement_degrades(seed in any::<u64>(), width in 5u32..9, height in 5u32..9) {
        let config = GenerationConfig {
            seed,
            width,
            height,
            monster_count: 30,
            chest_count: 30,
            braid_chance: 0.0,
            placement_attempts: 100,
        };
        let mut rng = StdRng::seed_from_u64(seed);
        let maze = Maze::generate(width, height, &mut rng).unwrap();
        let placements = place_entities(&maze, GridPosition::new(1, 1), &config, &mut rng).unwrap();

        prop_assert!(placements.monster_positions().len() <= 30);
        prop_assert!(placements.chest_positions().len() <= 30);
    }
}
