//! # Player Progression
//!
//! The durable player-facing data carried across level regeneration and
//! battle sessions: HP/MP pools, base combat stats, equipment slots, and
//! the bounded inventory.
//!
//! Exactly one active mode (exploration, battle, or inventory screen) may
//! mutate a [`PlayerStats`] at a time; the session enforces this by owning
//! the single instance and never cloning it across a scene boundary.

use crate::config;
use serde::{Deserialize, Serialize};

/// Whether an item boosts attack or defense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Weapon,
    Armor,
}

/// A piece of loot. Immutable once created.
///
/// # Examples
///
/// ```
/// use mazebound::{Item, ItemKind};
///
/// let sword = Item::new("Iron Sword", 12, ItemKind::Weapon);
/// assert_eq!(sword.value, 12);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Display name, e.g. "Silver Sword"
    pub name: String,
    /// Flat attack or defense bonus granted while equipped
    pub value: u32,
    /// Which equipment slot this item competes for
    pub kind: ItemKind,
}

impl Item {
    /// Creates a new item.
    pub fn new(name: impl Into<String>, value: u32, kind: ItemKind) -> Self {
        Self {
            name: name.into(),
            value,
            kind,
        }
    }
}

/// The two equipment slots. Each holds at most one item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    pub weapon: Option<Item>,
    pub armor: Option<Item>,
}

/// Persistent player progression state.
///
/// Created once at run start and threaded through every level and battle
/// until the run ends in a loss, which rebuilds it from defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub hp: u32,
    pub max_hp: u32,
    pub mp: u32,
    pub max_mp: u32,
    /// Base attack, constant for the run
    pub base_attack: u32,
    /// Base defense, constant for the run
    pub base_defense: u32,
    pub equipment: Equipment,
    /// Ordered inventory; insertion order matters for index-based operations
    pub inventory: Vec<Item>,
}

impl PlayerStats {
    /// Creates the default starting loadout: full pools, empty equipment
    /// slots, and a basic sword and armor waiting in the inventory.
    ///
    /// # Examples
    ///
    /// ```
    /// use mazebound::PlayerStats;
    ///
    /// let stats = PlayerStats::new();
    /// assert_eq!(stats.hp, stats.max_hp);
    /// assert_eq!(stats.inventory.len(), 2);
    /// assert!(stats.equipment.weapon.is_none());
    /// ```
    pub fn new() -> Self {
        Self {
            hp: config::DEFAULT_PLAYER_HP,
            max_hp: config::DEFAULT_PLAYER_HP,
            mp: config::DEFAULT_PLAYER_MP,
            max_mp: config::DEFAULT_PLAYER_MP,
            base_attack: config::DEFAULT_PLAYER_ATTACK,
            base_defense: config::DEFAULT_PLAYER_DEFENSE,
            equipment: Equipment::default(),
            inventory: vec![
                Item::new("Basic Sword", 5, ItemKind::Weapon),
                Item::new("Basic Armor", 3, ItemKind::Armor),
            ],
        }
    }

    /// Attack including the equipped weapon bonus.
    pub fn effective_attack(&self) -> u32 {
        self.base_attack + self.equipment.weapon.as_ref().map_or(0, |w| w.value)
    }

    /// Defense including the equipped armor bonus.
    pub fn effective_defense(&self) -> u32 {
        self.base_defense + self.equipment.armor.as_ref().map_or(0, |a| a.value)
    }

    /// Restores HP and MP to their maximums. Used on level advance.
    pub fn restore_pools(&mut self) {
        self.hp = self.max_hp;
        self.mp = self.max_mp;
    }

    /// Whether the player is still standing.
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self::new()
    }
}
