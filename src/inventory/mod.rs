// Inventory system module
//
// This module provides inventory management, including:
// - The ordered, merge-on-add inventory container
// - Equip-swap logic (one equipped stack per category)
// - Removal errors

pub mod error;
pub mod inventory;

// Re-export main types
pub use error::InventoryError;
pub use inventory::{EquipSwap, Inventory, SharedInventory};
