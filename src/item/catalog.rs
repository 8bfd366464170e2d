use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

use super::definition::{EquipmentCategory, IconCoords, Item, ItemId};
use super::error::CatalogError;
use crate::stats::StatBonuses;

/// Central catalog of all item definitions
///
/// This is the single source of truth for what items exist in the game.
/// It is loaded once at startup and never mutated afterwards; every
/// ItemStack shares its `Arc<Item>` with the catalog.
#[derive(Debug, Default)]
pub struct ItemCatalog {
    items: BTreeMap<ItemId, Arc<Item>>,
}

/// One record of the catalog source
///
/// The permitted keys are a closed set. Any other key fails the whole load.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogRecord {
    id: ItemId,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    icon: IconCoords,
    #[serde(default)]
    category: Option<EquipmentCategory>,

    // Stat bonuses, in Stat order
    #[serde(default)]
    attack: i32,
    #[serde(default)]
    magic: i32,
    #[serde(default)]
    range: i32,
    #[serde(default)]
    attack_speed: i32,
    #[serde(default)]
    melee_defense: i32,
    #[serde(default)]
    magic_defense: i32,
    #[serde(default)]
    range_defense: i32,
}

impl CatalogRecord {
    fn into_item(self) -> Item {
        let bonuses = StatBonuses::from_array([
            self.attack,
            self.magic,
            self.range,
            self.attack_speed,
            self.melee_defense,
            self.magic_defense,
            self.range_defense,
        ]);

        Item::new(self.id, self.name, self.icon, self.category, bonuses)
            .with_description(self.description)
    }
}

impl ItemCatalog {
    /// Loads the catalog from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::from_json_str(&json)?;
        info!(path = %path.display(), items = catalog.len(), "Loaded item catalog");
        Ok(catalog)
    }

    /// Parses a catalog from a JSON array of item records
    ///
    /// # Example
    ///
    /// ```rust
    /// use pocket_rogue::item::ItemCatalog;
    /// use pocket_rogue::stats::Stat;
    ///
    /// let catalog = ItemCatalog::from_json_str(
    ///     r#"[{ "id": 1, "name": "Sword", "icon": [0, 2], "category": "weapon", "attack": 5 }]"#,
    /// ).unwrap();
    /// assert_eq!(catalog.lookup(1).unwrap().bonuses[Stat::Attack], 5);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<CatalogRecord> = serde_json::from_str(json)?;
        Self::from_items(records.into_iter().map(CatalogRecord::into_item))
    }

    /// Builds a catalog from already-constructed definitions
    ///
    /// Fails on duplicate ids or blank names, same as the file loader.
    pub fn from_items(items: impl IntoIterator<Item = Item>) -> Result<Self, CatalogError> {
        let mut catalog = ItemCatalog::default();

        for item in items {
            if item.name.trim().is_empty() {
                return Err(CatalogError::EmptyName(item.id));
            }
            if catalog.items.contains_key(&item.id) {
                return Err(CatalogError::DuplicateId(item.id));
            }

            debug!(id = item.id, name = %item.name, "Registered item");
            catalog.items.insert(item.id, Arc::new(item));
        }

        Ok(catalog)
    }

    /// Gets an item definition by id
    ///
    /// A missing id is a data-integrity error, not a recoverable condition.
    pub fn lookup(&self, id: ItemId) -> Result<Arc<Item>, CatalogError> {
        self.items
            .get(&id)
            .cloned()
            .ok_or(CatalogError::NotFound(id))
    }

    /// Returns true if an item with this id exists
    pub fn contains(&self, id: ItemId) -> bool {
        self.items.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates all definitions ordered by id
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Item>> {
        self.items.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::Stat;
    use std::io::Write;

    const CATALOG: &str = r#"[
        { "id": 0, "name": "Bronze Sword", "icon": [0, 0], "category": "weapon",
          "attack": 4, "attack_speed": 1 },
        { "id": 1, "name": "Wooden Shield", "icon": [1, 0], "category": "shield",
          "melee_defense": 3, "range_defense": 1 },
        { "id": 2, "name": "Feather", "description": "Light as, well, a feather." }
    ]"#;

    #[test]
    fn test_load_from_str() {
        let catalog = ItemCatalog::from_json_str(CATALOG).unwrap();
        assert_eq!(catalog.len(), 3);

        let sword = catalog.lookup(0).unwrap();
        assert_eq!(sword.name, "Bronze Sword");
        assert_eq!(sword.category, Some(EquipmentCategory::Weapon));
        assert_eq!(sword.bonuses[Stat::Attack], 4);
        assert_eq!(sword.bonuses[Stat::AttackSpeed], 1);
        assert_eq!(sword.bonuses[Stat::Magic], 0);

        let feather = catalog.lookup(2).unwrap();
        assert_eq!(feather.category, None);
        assert_eq!(feather.icon, IconCoords::new(0, 0));
        assert!(feather.bonuses.is_zero());
    }

    #[test]
    fn test_lookup_shares_definition() {
        let catalog = ItemCatalog::from_json_str(CATALOG).unwrap();
        let a = catalog.lookup(1).unwrap();
        let b = catalog.lookup(1).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_lookup_missing_id() {
        let catalog = ItemCatalog::from_json_str(CATALOG).unwrap();
        assert!(matches!(catalog.lookup(42), Err(CatalogError::NotFound(42))));
    }

    #[test]
    fn test_unknown_field_fails_whole_load() {
        let json = r#"[
            { "id": 0, "name": "Sword", "attack": 4 },
            { "id": 1, "name": "Staff", "wisdom": 9 }
        ]"#;
        let err = ItemCatalog::from_json_str(json).unwrap_err();
        assert!(matches!(err, CatalogError::Malformed(_)));
        assert!(err.to_string().contains("wisdom"));
    }

    #[test]
    fn test_malformed_source() {
        assert!(matches!(
            ItemCatalog::from_json_str("{ not json"),
            Err(CatalogError::Malformed(_))
        ));
        assert!(matches!(
            ItemCatalog::from_json_str(r#"[{ "id": 0, "name": "Sword", "attack": "lots" }]"#),
            Err(CatalogError::Malformed(_))
        ));
    }

    #[test]
    fn test_duplicate_and_empty_names() {
        let dup = r#"[{ "id": 3, "name": "A" }, { "id": 3, "name": "B" }]"#;
        assert!(matches!(ItemCatalog::from_json_str(dup), Err(CatalogError::DuplicateId(3))));

        let blank = r#"[{ "id": 4, "name": "  " }]"#;
        assert!(matches!(ItemCatalog::from_json_str(blank), Err(CatalogError::EmptyName(4))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CATALOG.as_bytes()).unwrap();

        let catalog = ItemCatalog::load(file.path()).unwrap();
        assert!(catalog.contains(1));
        let ids: Vec<ItemId> = catalog.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn test_bundled_catalog_loads() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/item_definitions.json");
        let catalog = ItemCatalog::load(path).unwrap();

        assert!(!catalog.is_empty());
        for item in catalog.iter() {
            assert!(!item.name.is_empty());
        }
    }

    #[test]
    fn test_load_missing_file() {
        let err = ItemCatalog::load("/definitely/not/here/items.json").unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
