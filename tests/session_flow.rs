//! Integration tests driving a full game session through its public
//! surface only: exploration, inventory, battle, and the transitions
//! between them.

use mazebound::{
    config, ActionOutcome, Direction, GameSession, GenerationConfig, Item, ItemKind,
    MazeboundResult, PlayerStats, SessionMode, Transition,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_session_startup() -> MazeboundResult<()> {
    let session = GameSession::new(GenerationConfig::new(12345))?;

    assert_eq!(session.level(), 1);
    assert_eq!(*session.mode(), SessionMode::Exploring);

    // Player starts on a floor cell with the default loadout.
    let explore = session.explore();
    assert!(explore.maze.is_floor(explore.player_pos));
    assert_eq!(session.player().hp, config::DEFAULT_PLAYER_HP);
    assert_eq!(session.player().inventory.len(), 2);

    // The default maze is roomy enough for the full entity roster.
    assert_eq!(explore.entities.len(), (config::MONSTERS_PER_LEVEL + 1 + config::CHESTS_PER_LEVEL) as usize);

    Ok(())
}

#[test]
fn test_same_seed_same_level() -> MazeboundResult<()> {
    let a = GameSession::new(GenerationConfig::new(777))?;
    let b = GameSession::new(GenerationConfig::new(777))?;

    assert_eq!(a.explore().maze, b.explore().maze);
    assert_eq!(a.explore().player_pos, b.explore().player_pos);

    let positions =
        |s: &GameSession| s.explore().entities.iter().map(|e| e.position).collect::<Vec<_>>();
    assert_eq!(positions(&a), positions(&b));

    Ok(())
}

#[test]
fn test_entering_a_level_with_carried_progression() -> MazeboundResult<()> {
    // Mid-run state: damaged pools, an equipped weapon, extra loot.
    let mut player = PlayerStats::new();
    player.hp = 64;
    player.mp = 20;
    player.equipment.weapon = Some(Item::new("Silver Sword", 18, ItemKind::Weapon));
    player.inventory.push(Item::new("Gold Armor", 15, ItemKind::Armor));

    let session = GameSession::with_player(GenerationConfig::new(21), 3, player.clone())?;

    // Entering a level regenerates the maze but never touches progression.
    assert_eq!(session.level(), 3);
    assert_eq!(*session.player(), player);
    assert_eq!(session.player().effective_attack(), 15 + 18);
    assert_eq!(*session.mode(), SessionMode::Exploring);
    assert!(session.explore().maze.is_floor(session.explore().player_pos));

    Ok(())
}

#[test]
fn test_equipping_the_starting_loadout() -> MazeboundResult<()> {
    let mut session = GameSession::new(GenerationConfig::new(5))?;

    session.open_inventory();
    // Starting inventory: [Basic Sword (weapon), Basic Armor (armor)].
    session.equip_item(0);
    assert_eq!(session.player().equipment.weapon.as_ref().unwrap().value, 5);
    // Sword moved out; armor shifted to index 0.
    assert_eq!(session.player().inventory.len(), 1);
    assert_eq!(session.player().inventory[0].kind, ItemKind::Armor);

    session.equip_item(0);
    assert_eq!(session.player().equipment.armor.as_ref().unwrap().value, 3);
    assert!(session.player().inventory.is_empty());

    session.close_inventory();
    assert_eq!(*session.mode(), SessionMode::Exploring);
    assert!(session.transitions().contains(&Transition::InventoryOpened));
    assert!(session.transitions().contains(&Transition::InventoryClosed));

    Ok(())
}

#[test]
fn test_battle_actions_are_noops_while_exploring() -> MazeboundResult<()> {
    let mut session = GameSession::new(GenerationConfig::new(5))?;

    assert_eq!(session.battle_attack(), ActionOutcome::Ignored);
    assert_eq!(session.battle_heal(), ActionOutcome::Ignored);
    assert_eq!(session.player().hp, config::DEFAULT_PLAYER_HP);
    assert_eq!(session.player().mp, config::DEFAULT_PLAYER_MP);

    Ok(())
}

/// Drives a long seeded random walk with a simple auto-battle policy and
/// checks that the session never violates its core invariants, whatever
/// encounters the walk stumbles into.
#[test]
fn test_random_walk_preserves_invariants() -> MazeboundResult<()> {
    let mut session = GameSession::new(GenerationConfig::new(99))?;
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..20_000 {
        let in_battle = matches!(session.mode(), SessionMode::InBattle(_));
        if in_battle {
            let heal = session.player().hp < 30 && session.player().mp >= config::HEAL_MP_COST;
            if heal {
                session.battle_heal();
            } else {
                session.battle_attack();
            }
        } else {
            let dir = match rng.gen_range(0..4) {
                0 => Direction::North,
                1 => Direction::South,
                2 => Direction::East,
                _ => Direction::West,
            };
            session.move_player(dir);
        }
        session.tick(config::LOSS_EXIT_DELAY_MS);

        // Invariants that must hold in every reachable state.
        let player = session.player();
        assert!(player.hp <= player.max_hp);
        assert!(player.mp <= player.max_mp);
        assert!(player.inventory.len() <= config::INVENTORY_CAPACITY);
        assert!(session.level() >= 1);
        let explore = session.explore();
        assert!(explore.maze.is_floor(explore.player_pos));
        if *session.mode() == SessionMode::Exploring {
            // Outside battle the player is alive; a loss resets the run.
            assert!(player.hp > 0);
        }
    }

    // Twenty thousand steps across a 20x15 maze: the walk must have hit
    // something.
    assert!(session
        .transitions()
        .iter()
        .any(|t| matches!(
            t,
            Transition::BattleEntered { .. }
                | Transition::ItemAcquired { .. }
                | Transition::InventoryFull
        )));

    Ok(())
}

#[test]
fn test_level_contract_serializes() -> MazeboundResult<()> {
    let session = GameSession::new(GenerationConfig::new(3))?;

    // The data contracts for the presentation layer are plain serde types.
    let stats_json = serde_json::to_string(session.player())?;
    let maze_json = serde_json::to_string(&session.explore().maze)?;
    let entities_json = serde_json::to_string(&session.explore().entities)?;

    assert!(stats_json.contains("\"hp\":100"));
    assert!(maze_json.contains("\"cells\""));
    assert!(entities_json.contains("\"position\""));

    let restored: mazebound::PlayerStats = serde_json::from_str(&stats_json)?;
    assert_eq!(restored, *session.player());

    Ok(())
}
