use thiserror::Error;

use crate::item::ItemId;

/// Errors that can occur during inventory removals
///
/// Equip failures are reported as `false` rather than through this type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    /// No stack of this item exists in the inventory
    #[error("item {0} is not in the inventory")]
    ItemNotFound(ItemId),

    /// Tried to remove more items than exist
    #[error("insufficient items (requested: {requested}, available: {available})")]
    InsufficientItems { requested: u32, available: u32 },
}
