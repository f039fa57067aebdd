//! # Battle State Machine
//!
//! Turn-based combat resolution between the player and one enemy.
//!
//! A battle session is entered with a live reference to the player's
//! [`PlayerStats`] (damage persists back into exploration) and a fresh copy
//! of an [`EnemyArchetype`]'s stats. The machine cycles
//! `PlayerTurn -> EnemyTurn -> PlayerTurn` until one side's HP reaches zero,
//! producing the terminal `Won` or `Lost` phase. Actions issued outside the
//! player's turn, or after a terminal phase, are silently ignored.
//!
//! Pacing between the player's action and the automatic enemy turn is the
//! session's concern (see [`crate::GameSession`]); this module only exposes
//! the transitions.

use crate::PlayerStats;
use serde::{Deserialize, Serialize};

/// Sprite color of the stock monster, carried for the presentation layer.
pub const MONSTER_VISUAL_TAG: u32 = 0xff0000;

/// Sprite color of the boss.
pub const BOSS_VISUAL_TAG: u32 = 0x800080;

/// Named templates of enemy stats, instantiated fresh per encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyArchetype {
    Monster,
    Boss,
}

impl EnemyArchetype {
    /// Builds a fresh stat block for one encounter.
    ///
    /// # Examples
    ///
    /// ```
    /// use mazebound::EnemyArchetype;
    ///
    /// let boss = EnemyArchetype::Boss.spawn();
    /// assert_eq!(boss.hp, 150);
    /// assert_eq!(boss.attack, 25);
    /// ```
    pub fn spawn(self) -> EnemyStats {
        match self {
            EnemyArchetype::Monster => EnemyStats {
                name: "Monster".to_string(),
                hp: 50,
                max_hp: 50,
                attack: 15,
                defense: 5,
                visual_tag: MONSTER_VISUAL_TAG,
            },
            EnemyArchetype::Boss => EnemyStats {
                name: "Boss".to_string(),
                hp: 150,
                max_hp: 150,
                attack: 25,
                defense: 12,
                visual_tag: BOSS_VISUAL_TAG,
            },
        }
    }
}

/// Per-encounter enemy stat block. Never persisted beyond the battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyStats {
    pub name: String,
    pub hp: u32,
    pub max_hp: u32,
    pub attack: u32,
    pub defense: u32,
    /// Presentation hint (sprite color); opaque to the core
    pub visual_tag: u32,
}

/// Phase of the battle state machine. `Won` and `Lost` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattlePhase {
    PlayerTurn,
    EnemyTurn,
    Won,
    Lost,
}

/// Result of submitting an action to the battle machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionOutcome {
    /// Action applied; the phase may have advanced.
    Resolved { message: String },
    /// Action refused without any state change; the turn is not consumed.
    Rejected { message: String },
    /// Action arrived outside the owning phase or after a terminal phase.
    Ignored,
}

/// One battle session: the enemy copy plus the current phase.
///
/// The player side is borrowed per call so its mutations flow back to the
/// owning session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleState {
    pub archetype: EnemyArchetype,
    pub enemy: EnemyStats,
    pub phase: BattlePhase,
}

impl BattleState {
    /// Opens a battle against a fresh copy of the given archetype, with the
    /// player acting first.
    pub fn new(archetype: EnemyArchetype) -> Self {
        Self {
            archetype,
            enemy: archetype.spawn(),
            phase: BattlePhase::PlayerTurn,
        }
    }

    /// Whether the battle reached a terminal phase.
    pub fn is_over(&self) -> bool {
        matches!(self.phase, BattlePhase::Won | BattlePhase::Lost)
    }

    /// Player attack: `max(0, effective attack - enemy defense)` damage.
    ///
    /// Reaching zero enemy HP resolves to `Won` immediately; otherwise the
    /// phase hands over to the enemy.
    pub fn attack(&mut self, player: &PlayerStats) -> ActionOutcome {
        if self.phase != BattlePhase::PlayerTurn {
            return ActionOutcome::Ignored;
        }

        let damage = player.effective_attack().saturating_sub(self.enemy.defense);
        self.enemy.hp = self.enemy.hp.saturating_sub(damage);
        log::debug!("player attacks {} for {} damage", self.enemy.name, damage);

        if self.enemy.hp == 0 {
            self.phase = BattlePhase::Won;
        } else {
            self.phase = BattlePhase::EnemyTurn;
        }

        ActionOutcome::Resolved {
            message: format!("You attacked for {} damage!", damage),
        }
    }

    /// Player heal: costs MP, restores HP clamped at the maximum.
    ///
    /// Insufficient MP rejects the action with no state change and without
    /// consuming the turn.
    pub fn heal(&mut self, player: &mut PlayerStats) -> ActionOutcome {
        if self.phase != BattlePhase::PlayerTurn {
            return ActionOutcome::Ignored;
        }

        if player.mp < crate::config::HEAL_MP_COST {
            return ActionOutcome::Rejected {
                message: "Not enough MP!".to_string(),
            };
        }

        player.mp -= crate::config::HEAL_MP_COST;
        player.hp = player.max_hp.min(player.hp + crate::config::HEAL_AMOUNT);
        self.phase = BattlePhase::EnemyTurn;

        ActionOutcome::Resolved {
            message: format!("You healed {} HP!", crate::config::HEAL_AMOUNT),
        }
    }

    /// The enemy's automatic turn. Invoked by the session's scheduler, never
    /// directly by player input.
    ///
    /// Reducing the player to zero HP clamps at zero and resolves to `Lost`;
    /// otherwise control returns to the player.
    pub fn enemy_turn(&mut self, player: &mut PlayerStats) -> ActionOutcome {
        if self.phase != BattlePhase::EnemyTurn {
            return ActionOutcome::Ignored;
        }

        let damage = self.enemy.attack.saturating_sub(player.effective_defense());
        player.hp = player.hp.saturating_sub(damage);
        log::debug!("{} attacks player for {} damage", self.enemy.name, damage);

        if player.hp == 0 {
            self.phase = BattlePhase::Lost;
        } else {
            self.phase = BattlePhase::PlayerTurn;
        }

        ActionOutcome::Resolved {
            message: format!("{} attacked you for {} damage!", self.enemy.name, damage),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Item, ItemKind};

    #[test]
    fn test_archetype_stat_blocks() {
        let monster = EnemyArchetype::Monster.spawn();
        assert_eq!(monster.hp, 50);
        assert_eq!(monster.attack, 15);
        assert_eq!(monster.defense, 5);

        let boss = EnemyArchetype::Boss.spawn();
        assert_eq!(boss.hp, 150);
        assert_eq!(boss.attack, 25);
        assert_eq!(boss.defense, 12);
    }

    #[test]
    fn test_attack_damage_formula() {
        // attack 20 vs defense 7 -> 13 damage
        let mut player = PlayerStats::new();
        player.base_attack = 20;
        let mut battle = BattleState::new(EnemyArchetype::Monster);
        battle.enemy.defense = 7;

        battle.attack(&player);
        assert_eq!(battle.enemy.hp, 50 - 13);
    }

    #[test]
    fn test_attack_damage_never_negative() {
        let mut player = PlayerStats::new();
        player.base_attack = 5;
        let mut battle = BattleState::new(EnemyArchetype::Monster);
        battle.enemy.defense = 10;

        battle.attack(&player);
        assert_eq!(battle.enemy.hp, 50);
        // A zero-damage attack still consumes the turn.
        assert_eq!(battle.phase, BattlePhase::EnemyTurn);
    }

    #[test]
    fn test_weapon_bonus_applies() {
        let mut player = PlayerStats::new();
        player.equipment.weapon = Some(Item::new("Gold Sword", 25, ItemKind::Weapon));
        let mut battle = BattleState::new(EnemyArchetype::Monster);

        battle.attack(&player);
        // (15 + 25) - 5 = 35 damage
        assert_eq!(battle.enemy.hp, 50 - 35);
    }

    #[test]
    fn test_battle_terminates_in_expected_turns() {
        let player = PlayerStats::new(); // attack 15 vs defense 5 -> 10 per hit
        let mut battle = BattleState::new(EnemyArchetype::Monster);

        let mut turns = 0;
        while !battle.is_over() {
            battle.attack(&player);
            turns += 1;
            if battle.phase == BattlePhase::EnemyTurn {
                // Skip the enemy response for this count; hand back directly.
                battle.phase = BattlePhase::PlayerTurn;
            }
        }

        assert_eq!(battle.phase, BattlePhase::Won);
        assert_eq!(turns, 5); // ceil(50 / 10)
        assert_eq!(battle.enemy.hp, 0);
    }

    #[test]
    fn test_heal_clamps_at_max_hp() {
        let mut player = PlayerStats::new();
        player.hp = 90;
        let mut battle = BattleState::new(EnemyArchetype::Monster);

        battle.heal(&mut player);
        assert_eq!(player.hp, 100);
        assert_eq!(player.mp, 40);
        assert_eq!(battle.phase, BattlePhase::EnemyTurn);
    }

    #[test]
    fn test_heal_rejected_without_mp() {
        let mut player = PlayerStats::new();
        player.hp = 10;
        player.mp = 9;
        let mut battle = BattleState::new(EnemyArchetype::Monster);

        let outcome = battle.heal(&mut player);
        assert!(matches!(outcome, ActionOutcome::Rejected { .. }));
        // No state change, turn not consumed.
        assert_eq!(player.hp, 10);
        assert_eq!(player.mp, 9);
        assert_eq!(battle.phase, BattlePhase::PlayerTurn);
    }

    #[test]
    fn test_enemy_turn_damages_player() {
        let mut player = PlayerStats::new(); // defense 7
        let mut battle = BattleState::new(EnemyArchetype::Monster); // attack 15
        battle.phase = BattlePhase::EnemyTurn;

        battle.enemy_turn(&mut player);
        assert_eq!(player.hp, 100 - 8);
        assert_eq!(battle.phase, BattlePhase::PlayerTurn);
    }

    #[test]
    fn test_enemy_turn_kills_and_clamps() {
        let mut player = PlayerStats::new();
        player.hp = 5;
        let mut battle = BattleState::new(EnemyArchetype::Boss); // attack 25 vs def 7
        battle.phase = BattlePhase::EnemyTurn;

        battle.enemy_turn(&mut player);
        assert_eq!(player.hp, 0);
        assert_eq!(battle.phase, BattlePhase::Lost);
    }

    #[test]
    fn test_actions_ignored_out_of_turn() {
        let mut player = PlayerStats::new();
        let mut battle = BattleState::new(EnemyArchetype::Monster);
        battle.phase = BattlePhase::EnemyTurn;

        assert_eq!(battle.attack(&player), ActionOutcome::Ignored);
        assert_eq!(battle.heal(&mut player), ActionOutcome::Ignored);
        assert_eq!(battle.enemy.hp, 50);
    }

    #[test]
    fn test_actions_ignored_after_terminal() {
        let mut player = PlayerStats::new();
        let mut battle = BattleState::new(EnemyArchetype::Monster);
        battle.phase = BattlePhase::Won;

        assert_eq!(battle.attack(&player), ActionOutcome::Ignored);
        assert_eq!(battle.enemy_turn(&mut player), ActionOutcome::Ignored);
        assert_eq!(player.hp, 100);
    }

    #[test]
    fn test_win_resolved_before_enemy_turn_possible() {
        let mut player = PlayerStats::new();
        player.base_attack = 100;
        let mut battle = BattleState::new(EnemyArchetype::Monster);

        battle.attack(&player);
        assert_eq!(battle.phase, BattlePhase::Won);
        // The machine never passed through EnemyTurn; a stray enemy turn is
        // a no-op.
        assert_eq!(battle.enemy_turn(&mut player), ActionOutcome::Ignored);
        assert_eq!(player.hp, 100);
    }
}
