//! # Loot Generation
//!
//! The chest loot table: a material and an item kind, both uniform rolls.

use crate::{Item, ItemKind};
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Materials a looted item can be made of, in ascending value order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Material {
    Bronze,
    Iron,
    Silver,
    Gold,
}

impl Material {
    const ALL: [Material; 4] = [
        Material::Bronze,
        Material::Iron,
        Material::Silver,
        Material::Gold,
    ];

    /// Base item value for this material.
    pub fn base_value(self) -> u32 {
        match self {
            Material::Bronze => 8,
            Material::Iron => 12,
            Material::Silver => 18,
            Material::Gold => 25,
        }
    }

    /// Display name used in item names.
    pub fn name(self) -> &'static str {
        match self {
            Material::Bronze => "Bronze",
            Material::Iron => "Iron",
            Material::Silver => "Silver",
            Material::Gold => "Gold",
        }
    }
}

/// Armor is worth 60% of the material's base value, floored.
const ARMOR_VALUE_SCALE: f64 = 0.6;

/// Rolls one random item from the loot table.
///
/// Material and kind are uniform and independent; armor values are scaled
/// down from the material base. Names follow `"<Material> <Kind>"`.
///
/// # Examples
///
/// ```
/// use mazebound::{roll_loot, ItemKind};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let item = roll_loot(&mut rng);
/// assert!(item.value > 0);
/// assert!(matches!(item.kind, ItemKind::Weapon | ItemKind::Armor));
/// ```
pub fn roll_loot(rng: &mut StdRng) -> Item {
    let material = Material::ALL[rng.gen_range(0..Material::ALL.len())];
    let kind = if rng.gen_range(0..2) == 0 {
        ItemKind::Weapon
    } else {
        ItemKind::Armor
    };

    let (kind_word, value) = match kind {
        ItemKind::Weapon => ("Sword", material.base_value()),
        ItemKind::Armor => (
            "Armor",
            (material.base_value() as f64 * ARMOR_VALUE_SCALE).floor() as u32,
        ),
    };

    Item::new(format!("{} {}", material.name(), kind_word), value, kind)
}
