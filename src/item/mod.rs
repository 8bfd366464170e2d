// Item system module
//
// This module provides the core item system, including:
// - Immutable item definitions with stat bonuses and equipment categories
// - The load-once item catalog
// - Item stacks for quantity and equip state

pub mod catalog;
pub mod definition;
pub mod error;
pub mod stack;

// Re-export main types for convenient access
pub use catalog::ItemCatalog;
pub use definition::{EquipmentCategory, IconCoords, Item, ItemId};
pub use error::CatalogError;
pub use stack::ItemStack;
