//! # Inventory Operations
//!
//! Equip, discard, and acquisition operations over the player's ordered
//! inventory and equipment slots.
//!
//! All index-addressed operations fail silently on an out-of-range index:
//! the inventory screen is a closed, single-user surface and a stale index
//! is a policy violation, not a fault.

use crate::{config, Item, ItemKind, PlayerStats};
use serde::{Deserialize, Serialize};

/// Outcome of attempting to add a looted item to the inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickupOutcome {
    /// Item appended to the inventory.
    Added(Item),
    /// Inventory at capacity; the item was refused and its source left in
    /// place.
    Full,
}

/// Equips the inventory item at `index`, swapping with any item already in
/// the matching slot.
///
/// With a previous item in the slot, the two swap in place and inventory
/// length is unchanged. With an empty slot, the item moves out of the
/// inventory and subsequent items shift left. Out-of-range indices are
/// no-ops.
///
/// # Examples
///
/// ```
/// use mazebound::{equip, Item, ItemKind, PlayerStats};
///
/// let mut stats = PlayerStats::new();
/// stats.inventory = vec![Item::new("Iron Sword", 12, ItemKind::Weapon)];
/// equip(&mut stats, 0);
/// assert!(stats.inventory.is_empty());
/// assert_eq!(stats.equipment.weapon.as_ref().unwrap().value, 12);
/// ```
pub fn equip(stats: &mut PlayerStats, index: usize) {
    if index >= stats.inventory.len() {
        return;
    }

    let item = stats.inventory[index].clone();
    let slot = match item.kind {
        ItemKind::Weapon => &mut stats.equipment.weapon,
        ItemKind::Armor => &mut stats.equipment.armor,
    };

    match slot.replace(item) {
        Some(old) => {
            // Swap: previous equipment takes the vacated inventory slot.
            stats.inventory[index] = old;
        }
        None => {
            stats.inventory.remove(index);
        }
    }
}

/// Removes the inventory item at `index` unconditionally.
///
/// Equipped items are untouched; only the free-floating inventory list is
/// addressable. Out-of-range indices are no-ops.
pub fn discard(stats: &mut PlayerStats, index: usize) {
    if index < stats.inventory.len() {
        stats.inventory.remove(index);
    }
}

/// Gate for loot acquisition: appends the item unless the inventory is at
/// capacity.
pub fn try_acquire(stats: &mut PlayerStats, item: Item) -> PickupOutcome {
    if stats.inventory.len() >= config::INVENTORY_CAPACITY {
        return PickupOutcome::Full;
    }
    stats.inventory.push(item.clone());
    PickupOutcome::Added(item)
}
