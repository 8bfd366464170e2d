//! Message type definitions

use std::sync::Arc;

use crate::inventory::SharedInventory;
use crate::item::{EquipmentCategory, Item};

/// Every message that can travel between the UI and simulation systems
///
/// Each variant carries exactly the payload its kind needs, so receivers
/// never cast an untyped payload. Messages are built by a sender, handed
/// to receivers synchronously and then dropped.
#[derive(Debug, Clone)]
pub enum Message {
    /// A stack was equipped, possibly replacing another in its category
    ItemEquipped {
        item: Arc<Item>,
        category: EquipmentCategory,
        replaced: Option<Arc<Item>>,
    },

    /// A stack was unequipped, leaving its category empty
    ItemUnequipped {
        item: Arc<Item>,
        category: EquipmentCategory,
    },

    /// The controlled actor changed, bringing a different inventory
    PlayerInventoryChanged { inventory: SharedInventory },
}

/// Payload-free discriminant of a [`Message`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    ItemEquipped,
    ItemUnequipped,
    PlayerInventoryChanged,
}

impl Message {
    pub fn kind(&self) -> MessageKind {
        match self {
            Message::ItemEquipped { .. } => MessageKind::ItemEquipped,
            Message::ItemUnequipped { .. } => MessageKind::ItemUnequipped,
            Message::PlayerInventoryChanged { .. } => MessageKind::PlayerInventoryChanged,
        }
    }
}
