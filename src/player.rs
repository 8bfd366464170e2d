use std::sync::Arc;

use crate::inventory::{Inventory, SharedInventory};
use crate::item::Item;

/// A controllable actor
///
/// Each player owns exactly one inventory. The handle is shared with the
/// UI and the combat system while this player is the controlled one.
#[derive(Debug, Clone)]
pub struct Player {
    pub name: String,
    inventory: SharedInventory,
}

impl Player {
    /// Creates a player with an empty inventory
    pub fn new(name: impl Into<String>) -> Self {
        Player {
            name: name.into(),
            inventory: Inventory::new().into_shared(),
        }
    }

    pub fn inventory(&self) -> &SharedInventory {
        &self.inventory
    }

    /// Adds items to this player's inventory, returning the slot used
    pub fn give(&self, item: Arc<Item>, quantity: u32) -> Option<usize> {
        self.inventory.borrow_mut().add_item(item, quantity)
    }
}
