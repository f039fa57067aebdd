//! # Mazebound Demo Binary
//!
//! A thin headless consumer of the core: generates a seeded level, prints
//! it, and can run a scripted exploration/battle simulation. All real
//! gameplay surfaces live in the library; this binary only drives them.

use clap::Parser;
use log::info;
use mazebound::{
    ActionOutcome, Direction, EntityKind, GameSession, GenerationConfig, MazeboundResult,
    SessionMode,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Command line arguments for the Mazebound demo.
#[derive(Parser, Debug)]
#[command(name = "mazebound")]
#[command(about = "Turn-based maze exploration RPG core demo")]
#[command(version)]
struct Args {
    /// Random seed for level generation (defaults to the current time)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Maze width in cells
    #[arg(long, default_value_t = mazebound::config::DEFAULT_MAZE_WIDTH)]
    width: u32,

    /// Maze height in cells
    #[arg(long, default_value_t = mazebound::config::DEFAULT_MAZE_HEIGHT)]
    height: u32,

    /// Dump the generated level as JSON instead of ASCII
    #[arg(long)]
    json: bool,

    /// Run a scripted simulation for this many exploration steps
    #[arg(long, default_value_t = 0)]
    sim_steps: u32,
}

fn main() -> MazeboundResult<()> {
    env_logger::init();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    });

    info!("Starting Mazebound v{} with seed {}", mazebound::VERSION, seed);

    let mut gen_config = GenerationConfig::new(seed);
    gen_config.width = args.width;
    gen_config.height = args.height;

    let mut session = GameSession::new(gen_config)?;

    if args.json {
        print_json(&session)?;
    } else {
        print_ascii(&session);
    }

    if args.sim_steps > 0 {
        simulate(&mut session, seed, args.sim_steps);
        println!("\nTransition log:");
        for transition in session.transitions() {
            println!("  {:?}", transition);
        }
        println!(
            "Finished at level {} with HP {}/{}",
            session.level(),
            session.player().hp,
            session.player().max_hp
        );
    }

    Ok(())
}

/// Prints the level-enter contract as JSON.
fn print_json(session: &GameSession) -> MazeboundResult<()> {
    let explore = session.explore();
    let contract = serde_json::json!({
        "level": session.level(),
        "playerStats": session.player(),
        "playerStart": explore.player_pos,
        "maze": explore.maze,
        "entities": explore.entities,
    });
    println!("{}", serde_json::to_string_pretty(&contract)?);
    Ok(())
}

/// Prints the maze with entity glyphs overlaid.
fn print_ascii(session: &GameSession) {
    let explore = session.explore();
    let maze = &explore.maze;

    for y in 0..maze.height() as i32 {
        let mut row = String::new();
        for x in 0..maze.width() as i32 {
            let pos = mazebound::GridPosition::new(x, y);
            let glyph = if pos == explore.player_pos {
                '@'
            } else if let Some(entity) = explore.entities.iter().find(|e| e.position == pos) {
                match entity.kind {
                    EntityKind::Monster => 'm',
                    EntityKind::Boss => 'B',
                    EntityKind::Chest => '$',
                }
            } else if maze.is_floor(pos) {
                '.'
            } else {
                '#'
            };
            row.push(glyph);
        }
        println!("{}", row);
    }
}

/// Random-walk exploration with a simple auto-battle policy: heal when
/// hurting and the MP is there, attack otherwise.
fn simulate(session: &mut GameSession, seed: u64, steps: u32) {
    let mut rng = StdRng::seed_from_u64(seed ^ 0x5eed);

    for _ in 0..steps {
        let in_battle = matches!(session.mode(), SessionMode::InBattle(_));
        let inventory_open = *session.mode() == SessionMode::Inventory;

        if in_battle {
            let hurting = session.player().hp < 30
                && session.player().mp >= mazebound::config::HEAL_MP_COST;
            let outcome = if hurting {
                session.battle_heal()
            } else {
                session.battle_attack()
            };
            if let ActionOutcome::Resolved { message } = outcome {
                info!("{}", message);
            }
        } else if inventory_open {
            session.close_inventory();
        } else {
            let dir = match rng.gen_range(0..4) {
                0 => Direction::North,
                1 => Direction::South,
                2 => Direction::East,
                _ => Direction::West,
            };
            session.move_player(dir);
        }
        // Generous enough to cover the enemy turn and any exit delay.
        session.tick(mazebound::config::LOSS_EXIT_DELAY_MS);
    }
}
