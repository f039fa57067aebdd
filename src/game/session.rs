//! # Game Session
//!
//! The top-level session state machine tying exploration, battle, and the
//! inventory screen together.
//!
//! One [`GameSession`] owns the player's [`PlayerStats`], the current
//! level's maze and entities, a logical clock, and the event scheduler. The
//! current mode is an explicit tagged variant rather than implicit scene
//! pause/resume semantics, and every cross-mode transition is appended to a
//! typed log so the flow is testable without a presentation layer.
//!
//! The session is single-threaded and frame-driven: the embedding loop
//! calls [`GameSession::tick`] with elapsed logical milliseconds, which
//! fires any due scheduled events (the enemy's automatic battle turn, the
//! delayed battle exit). A generation counter guards those events: a level
//! advance or run reset bumps the generation, so events scheduled against a
//! torn-down scene are discarded instead of mutating the new one.

use crate::{
    config, discard, equip, place_entities, roll_loot, try_acquire, ActionOutcome, BattlePhase,
    BattleState, Direction, EnemyArchetype, EntityKind, GenerationConfig, GridPosition, Maze,
    MazeboundResult, PickupOutcome, PlacedEntity, PlayerStats, Scheduler,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Which mode currently owns the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionMode {
    /// Moving through the maze.
    Exploring,
    /// Resolving a battle; exploration is suspended underneath.
    InBattle(BattleState),
    /// Inventory screen open; exploration is suspended underneath.
    Inventory,
}

/// Events the session schedules against its logical clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScheduledEvent {
    /// The enemy's automatic battle turn.
    EnemyTurn,
    /// Leave a resolved battle after the pacing delay.
    BattleExit,
}

/// One entry in the session's transition log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Transition {
    /// Contact with a monster or the boss opened a battle.
    BattleEntered { archetype: EnemyArchetype },
    /// Battle won; `leveled_up` is set only for the boss.
    BattleWon { leveled_up: bool },
    /// Battle lost; a run reset follows.
    BattleLost,
    /// Boss defeated: pools restored and the next level generated.
    LevelAdvanced { level: u32 },
    /// Run reset to level 1 with default progression.
    RunReset,
    InventoryOpened,
    InventoryClosed,
    /// A chest yielded an item into the inventory.
    ItemAcquired { name: String },
    /// A pickup was refused because the inventory is full (rate limited).
    InventoryFull,
}

/// Exploration-side state for the current level. Discarded wholesale on
/// level advance or run reset.
#[derive(Debug, Clone)]
pub struct ExploreState {
    pub maze: Maze,
    /// Entities still present on the level
    pub entities: Vec<PlacedEntity>,
    pub player_pos: GridPosition,
    /// Clock stamp of the last inventory-full notice, for rate limiting
    last_full_notice_at: Option<u64>,
}

/// The complete game session.
#[derive(Debug)]
pub struct GameSession {
    level: u32,
    player: PlayerStats,
    explore: ExploreState,
    mode: SessionMode,
    clock_ms: u64,
    generation: u64,
    scheduler: Scheduler<ScheduledEvent>,
    rng: StdRng,
    gen_config: GenerationConfig,
    transitions: Vec<Transition>,
}

impl GameSession {
    /// Starts a new run at level 1 with default progression.
    ///
    /// # Examples
    ///
    /// ```
    /// use mazebound::{GameSession, GenerationConfig, SessionMode};
    ///
    /// let session = GameSession::new(GenerationConfig::new(7)).unwrap();
    /// assert_eq!(session.level(), 1);
    /// assert_eq!(*session.mode(), SessionMode::Exploring);
    /// ```
    pub fn new(gen_config: GenerationConfig) -> MazeboundResult<Self> {
        Self::with_player(gen_config, 1, PlayerStats::new())
    }

    /// Enters a level with existing progression (the level-enter contract;
    /// callers without stats use [`GameSession::new`]).
    pub fn with_player(
        gen_config: GenerationConfig,
        level: u32,
        player: PlayerStats,
    ) -> MazeboundResult<Self> {
        let mut rng = StdRng::seed_from_u64(gen_config.seed);
        let explore = build_level(&gen_config, &mut rng)?;

        log::info!("session start: level {}", level);

        Ok(Self {
            level,
            player,
            explore,
            mode: SessionMode::Exploring,
            clock_ms: 0,
            generation: 0,
            scheduler: Scheduler::new(),
            rng,
            gen_config,
            transitions: Vec::new(),
        })
    }

    /// Current level number, starting at 1.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// The player's progression state.
    pub fn player(&self) -> &PlayerStats {
        &self.player
    }

    /// Current session mode.
    pub fn mode(&self) -> &SessionMode {
        &self.mode
    }

    /// The battle in progress, if any.
    pub fn battle(&self) -> Option<&BattleState> {
        match &self.mode {
            SessionMode::InBattle(battle) => Some(battle),
            _ => None,
        }
    }

    /// Exploration state for the current level.
    pub fn explore(&self) -> &ExploreState {
        &self.explore
    }

    /// Logical clock in milliseconds.
    pub fn clock_ms(&self) -> u64 {
        self.clock_ms
    }

    /// The transition log since session start.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Advances the logical clock and fires due scheduled events.
    pub fn tick(&mut self, dt_ms: u64) {
        self.clock_ms += dt_ms;
        for event in self.scheduler.drain_due(self.clock_ms, self.generation) {
            self.dispatch(event);
        }
    }

    fn dispatch(&mut self, event: ScheduledEvent) {
        match event {
            ScheduledEvent::EnemyTurn => {
                let mut lost = false;
                if let SessionMode::InBattle(battle) = &mut self.mode {
                    battle.enemy_turn(&mut self.player);
                    lost = battle.phase == BattlePhase::Lost;
                }
                if lost {
                    self.scheduler.schedule(
                        self.clock_ms + config::LOSS_EXIT_DELAY_MS,
                        self.generation,
                        ScheduledEvent::BattleExit,
                    );
                }
            }
            ScheduledEvent::BattleExit => self.finish_battle(),
        }
    }

    /// Moves the player one cell. Walls and bounds keep the player in
    /// place; entering an occupied cell triggers the contact.
    ///
    /// Valid only while exploring; a no-op in any other mode.
    pub fn move_player(&mut self, direction: Direction) {
        if self.mode != SessionMode::Exploring {
            return;
        }

        let target = self.explore.player_pos + direction.to_delta();
        if !self.explore.maze.is_floor(target) {
            return;
        }
        self.explore.player_pos = target;

        let contact = self
            .explore
            .entities
            .iter()
            .position(|e| e.position == target);
        if let Some(index) = contact {
            match self.explore.entities[index].kind {
                EntityKind::Monster => {
                    self.explore.entities.remove(index);
                    self.enter_battle(EnemyArchetype::Monster);
                }
                EntityKind::Boss => {
                    self.explore.entities.remove(index);
                    self.enter_battle(EnemyArchetype::Boss);
                }
                EntityKind::Chest => self.open_chest(index),
            }
        }
    }

    fn enter_battle(&mut self, archetype: EnemyArchetype) {
        log::info!("battle entered against {:?}", archetype);
        self.transitions.push(Transition::BattleEntered { archetype });
        self.mode = SessionMode::InBattle(BattleState::new(archetype));
    }

    /// Resolves a chest contact through the acquisition gate. The chest is
    /// consumed only when the item fits; a full inventory leaves it in
    /// place and surfaces a rate-limited notice.
    fn open_chest(&mut self, index: usize) {
        if self.player.inventory.len() >= config::INVENTORY_CAPACITY {
            let throttled = self
                .explore
                .last_full_notice_at
                .is_some_and(|at| self.clock_ms - at < config::PICKUP_NOTICE_COOLDOWN_MS);
            if !throttled {
                self.explore.last_full_notice_at = Some(self.clock_ms);
                self.transitions.push(Transition::InventoryFull);
            }
            return;
        }

        let item = roll_loot(&mut self.rng);
        self.explore.entities.remove(index);
        if let PickupOutcome::Added(item) = try_acquire(&mut self.player, item) {
            log::info!("looted {}", item.name);
            self.transitions
                .push(Transition::ItemAcquired { name: item.name });
        }
    }

    /// Submits the attack action to the battle in progress.
    ///
    /// Ignored outside battle mode or outside the player's turn.
    pub fn battle_attack(&mut self) -> ActionOutcome {
        let outcome = match &mut self.mode {
            SessionMode::InBattle(battle) => battle.attack(&self.player),
            _ => ActionOutcome::Ignored,
        };
        self.pace_after_player_action(&outcome);
        outcome
    }

    /// Submits the heal action to the battle in progress.
    ///
    /// Ignored outside battle mode or outside the player's turn; rejected
    /// without consuming the turn when MP is insufficient.
    pub fn battle_heal(&mut self) -> ActionOutcome {
        let outcome = match &mut self.mode {
            SessionMode::InBattle(battle) => battle.heal(&mut self.player),
            _ => ActionOutcome::Ignored,
        };
        self.pace_after_player_action(&outcome);
        outcome
    }

    /// Schedules the follow-up a resolved player action calls for: the
    /// delayed enemy turn, or the delayed exit from a won battle.
    ///
    /// Only a `Resolved` action schedules anything. Ignored and rejected
    /// actions changed no battle state, and scheduling off them would queue
    /// a duplicate event behind the one already pending.
    fn pace_after_player_action(&mut self, outcome: &ActionOutcome) {
        if !matches!(outcome, ActionOutcome::Resolved { .. }) {
            return;
        }
        let phase = match &self.mode {
            SessionMode::InBattle(battle) => battle.phase,
            _ => return,
        };
        match phase {
            BattlePhase::EnemyTurn => self.scheduler.schedule(
                self.clock_ms + config::ENEMY_TURN_DELAY_MS,
                self.generation,
                ScheduledEvent::EnemyTurn,
            ),
            BattlePhase::Won => self.scheduler.schedule(
                self.clock_ms + config::WIN_EXIT_DELAY_MS,
                self.generation,
                ScheduledEvent::BattleExit,
            ),
            // A resolved player action lands in EnemyTurn or Won.
            BattlePhase::PlayerTurn | BattlePhase::Lost => {}
        }
    }

    /// Leaves a resolved battle: back to exploration on a win (advancing
    /// the level when the boss fell), full run reset on a loss.
    fn finish_battle(&mut self) {
        let mode = std::mem::replace(&mut self.mode, SessionMode::Exploring);
        let battle = match mode {
            SessionMode::InBattle(battle) if battle.is_over() => battle,
            other => {
                self.mode = other;
                return;
            }
        };

        match battle.phase {
            BattlePhase::Won => {
                let leveled_up = battle.archetype == EnemyArchetype::Boss;
                self.transitions.push(Transition::BattleWon { leveled_up });
                if leveled_up {
                    self.advance_level();
                }
            }
            BattlePhase::Lost => {
                self.transitions.push(Transition::BattleLost);
                self.reset_run();
            }
            _ => unreachable!("finish_battle requires a terminal phase"),
        }
    }

    /// Boss defeated: restore pools, bump the level, regenerate the maze
    /// and placements. Progression carries over.
    fn advance_level(&mut self) {
        self.player.restore_pools();
        self.level += 1;
        self.teardown_scene();

        match build_level(&self.gen_config, &mut self.rng) {
            Ok(explore) => self.explore = explore,
            // The config was validated at session construction, so
            // regeneration cannot fail; keep the old level if it somehow
            // does.
            Err(e) => log::error!("level regeneration failed: {}", e),
        }

        log::info!("advanced to level {}", self.level);
        self.transitions
            .push(Transition::LevelAdvanced { level: self.level });
    }

    /// Terminal loss: the whole run restarts at level 1 with default
    /// progression. Equipment and inventory earned mid-run do not survive.
    fn reset_run(&mut self) {
        self.player = PlayerStats::new();
        self.level = 1;
        self.teardown_scene();

        match build_level(&self.gen_config, &mut self.rng) {
            Ok(explore) => self.explore = explore,
            Err(e) => log::error!("level regeneration failed: {}", e),
        }

        log::info!("run reset to level 1");
        self.transitions.push(Transition::RunReset);
    }

    /// Invalidates anything scheduled against the scene being discarded.
    fn teardown_scene(&mut self) {
        self.generation += 1;
        self.scheduler.clear();
    }

    /// Opens the inventory screen, suspending exploration.
    pub fn open_inventory(&mut self) {
        if self.mode == SessionMode::Exploring {
            self.mode = SessionMode::Inventory;
            self.transitions.push(Transition::InventoryOpened);
        }
    }

    /// Closes the inventory screen, resuming exploration.
    pub fn close_inventory(&mut self) {
        if self.mode == SessionMode::Inventory {
            self.mode = SessionMode::Exploring;
            self.transitions.push(Transition::InventoryClosed);
        }
    }

    /// Equips the inventory item at `index`. Valid only with the inventory
    /// screen open; out-of-range indices are no-ops.
    pub fn equip_item(&mut self, index: usize) {
        if self.mode == SessionMode::Inventory {
            equip(&mut self.player, index);
        }
    }

    /// Discards the inventory item at `index`. Valid only with the
    /// inventory screen open; out-of-range indices are no-ops.
    pub fn discard_item(&mut self, index: usize) {
        if self.mode == SessionMode::Inventory {
            discard(&mut self.player, index);
        }
    }
}

/// Generates the maze and entity placements for one level.
fn build_level(gen_config: &GenerationConfig, rng: &mut StdRng) -> MazeboundResult<ExploreState> {
    let maze = Maze::generate_with_braiding(
        gen_config.width,
        gen_config.height,
        gen_config.braid_chance,
        rng,
    )?;
    let placements = place_entities(&maze, GridPosition::new(1, 1), gen_config, rng)?;

    Ok(ExploreState {
        maze,
        entities: placements.entities,
        player_pos: placements.player_start,
        last_full_notice_at: None,
    })
}
