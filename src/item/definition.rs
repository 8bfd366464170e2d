use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::stats::StatBonuses;

/// Numeric identifier of an item in the [`ItemCatalog`](super::ItemCatalog)
pub type ItemId = u32;

/// The blueprint for an item type
///
/// This defines the static properties of an item that are shared
/// across all stacks. Think of it as the "class" and ItemStack
/// as the "instance". Items are created once when the catalog loads
/// and are shared read-only through `Arc<Item>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier (used for lookups and equality)
    pub id: ItemId,

    /// Display name shown in UI
    pub name: String,

    /// Description shown in tooltips
    pub description: String,

    /// Cell of the item icon on the sprite sheet
    pub icon: IconCoords,

    /// Equipment slot class, `None` for items that can't be worn
    pub category: Option<EquipmentCategory>,

    /// Stat bonuses granted while equipped
    pub bonuses: StatBonuses,
}

impl Item {
    /// Creates a new item definition
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        icon: IconCoords,
        category: Option<EquipmentCategory>,
        bonuses: StatBonuses,
    ) -> Self {
        Item {
            id,
            name: name.into(),
            description: String::new(),
            icon,
            category,
            bonuses,
        }
    }

    /// Sets the tooltip description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Returns true if this item occupies an equipment category
    pub fn is_equippable(&self) -> bool {
        self.category.is_some()
    }
}

// Identity is the id alone; two definitions with the same id are the same item.
impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Item {}

impl Hash for Item {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Column/row of an icon on the item sprite sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "[u32; 2]", into = "[u32; 2]")]
pub struct IconCoords {
    pub x: u32,
    pub y: u32,
}

impl IconCoords {
    pub fn new(x: u32, y: u32) -> Self {
        IconCoords { x, y }
    }
}

impl From<[u32; 2]> for IconCoords {
    fn from([x, y]: [u32; 2]) -> Self {
        IconCoords { x, y }
    }
}

impl From<IconCoords> for [u32; 2] {
    fn from(icon: IconCoords) -> Self {
        [icon.x, icon.y]
    }
}

/// Equipment slot classes
///
/// At most one stack per category can be equipped in an inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentCategory {
    Head,
    Body,
    Legs,
    Feet,
    Hands,
    Weapon,  // Main hand
    Shield,  // Off hand
    Ring,
    Amulet,
}

impl fmt::Display for EquipmentCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            EquipmentCategory::Head => "head",
            EquipmentCategory::Body => "body",
            EquipmentCategory::Legs => "legs",
            EquipmentCategory::Feet => "feet",
            EquipmentCategory::Hands => "hands",
            EquipmentCategory::Weapon => "weapon",
            EquipmentCategory::Shield => "shield",
            EquipmentCategory::Ring => "ring",
            EquipmentCategory::Amulet => "amulet",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::Stat;

    #[test]
    fn test_item_equality_is_by_id() {
        let a = Item::new(1, "Sword", IconCoords::new(0, 0), Some(EquipmentCategory::Weapon), StatBonuses::zero());
        let renamed = Item::new(1, "Rusty Sword", IconCoords::new(3, 1), None, StatBonuses::zero().with(Stat::Attack, 9));
        let other = Item::new(2, "Sword", IconCoords::new(0, 0), Some(EquipmentCategory::Weapon), StatBonuses::zero());

        assert_eq!(a, renamed);
        assert_ne!(a, other);
    }

    #[test]
    fn test_icon_coords_serialize_as_pair() {
        let json = serde_json::to_string(&IconCoords::new(4, 7)).unwrap();
        assert_eq!(json, "[4,7]");

        let icon: IconCoords = serde_json::from_str("[2,3]").unwrap();
        assert_eq!(icon, IconCoords::new(2, 3));
    }

    #[test]
    fn test_equippable() {
        let ore = Item::new(5, "Copper Ore", IconCoords::default(), None, StatBonuses::zero());
        assert!(!ore.is_equippable());
    }
}
