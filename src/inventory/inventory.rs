use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use tracing::debug;

use super::error::InventoryError;
use crate::item::{EquipmentCategory, Item, ItemId, ItemStack};
use crate::stats::StatBonuses;

/// Single-threaded shared handle to an actor's inventory
///
/// The actor, the inventory panel and the combat system all hold one of
/// these. Mutation and notification happen in the same call stack, so a
/// `RefCell` is enough.
pub type SharedInventory = Rc<RefCell<Inventory>>;

/// Ordered collection of item stacks belonging to one actor
///
/// Slot order is display order. Invariants:
/// - at most one stack per distinct item (adding merges)
/// - no stored stack has a quantity of 0
/// - at most one equipped stack per equipment category
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    stacks: Vec<ItemStack>,
}

/// Result of a successful equip
#[derive(Debug, Clone, PartialEq)]
pub struct EquipSwap {
    /// Slot of the newly equipped stack
    pub slot: usize,

    /// Category the stack now occupies
    pub category: EquipmentCategory,

    /// Item that held the category before, if another stack was unequipped
    pub replaced: Option<Arc<Item>>,
}

impl Inventory {
    /// Creates a new empty inventory
    pub fn new() -> Self {
        Inventory { stacks: Vec::new() }
    }

    /// Wraps this inventory in a shared handle
    pub fn into_shared(self) -> SharedInventory {
        Rc::new(RefCell::new(self))
    }

    /// Returns the number of occupied slots
    pub fn len(&self) -> usize {
        self.stacks.len()
    }

    /// Returns true if the inventory has no items
    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }

    /// Gets the stack in a slot
    pub fn get(&self, slot: usize) -> Option<&ItemStack> {
        self.stacks.get(slot)
    }

    /// Finds the slot holding a specific item
    pub fn position_of(&self, item: &Item) -> Option<usize> {
        self.stacks.iter().position(|stack| stack.item().as_ref() == item)
    }

    /// Returns true if a stack of the same item lives in this inventory
    pub fn contains(&self, stack: &ItemStack) -> bool {
        self.position_of(stack.item()).is_some()
    }

    /// Counts how many of a specific item are in the inventory
    pub fn count_item(&self, item_id: ItemId) -> u32 {
        self.stacks
            .iter()
            .find(|stack| stack.item().id == item_id)
            .map_or(0, ItemStack::quantity)
    }

    /// Adds items to the inventory
    ///
    /// Merges into the existing stack for `item` if there is one, otherwise
    /// appends a new unequipped stack. Returns the resulting slot, or
    /// `None` when nothing is stored: `quantity` is 0, or the merged
    /// quantity would overflow.
    pub fn add_item(&mut self, item: Arc<Item>, quantity: u32) -> Option<usize> {
        if quantity == 0 {
            debug!(item = %item.name, "Ignoring add of zero items");
            return None;
        }

        if let Some(slot) = self.position_of(&item) {
            return self.stacks[slot].add_quantity(quantity).then_some(slot);
        }

        self.stacks.push(ItemStack::new(item, quantity));
        Some(self.stacks.len() - 1)
    }

    /// Removes items from the inventory
    ///
    /// Removing the whole stack deletes it (and its equip state) instead of
    /// leaving an empty stack behind. Returns the quantity removed.
    pub fn remove_item(&mut self, item: &Item, quantity: u32) -> Result<u32, InventoryError> {
        let slot = self
            .position_of(item)
            .ok_or(InventoryError::ItemNotFound(item.id))?;

        let available = self.stacks[slot].quantity();
        if quantity > available {
            return Err(InventoryError::InsufficientItems {
                requested: quantity,
                available,
            });
        }

        if quantity == available {
            let removed = self.stacks.remove(slot);
            debug!(item = %removed.item().name, slot, "Removed stack");
        } else {
            self.stacks[slot].remove_quantity(quantity);
        }

        Ok(quantity)
    }

    /// Equips a stack owned by this inventory
    ///
    /// Returns false if no stack of the same item is present, or the item
    /// has no equipment category. On success any other stack equipped in
    /// the same category is unequipped first.
    pub fn equip_item(&mut self, stack: &ItemStack) -> bool {
        self.equip_stack(stack).is_some()
    }

    /// Same as [`equip_item`](Self::equip_item), reporting what was swapped
    pub fn equip_stack(&mut self, stack: &ItemStack) -> Option<EquipSwap> {
        match self.position_of(stack.item()) {
            Some(slot) => self.equip_slot(slot),
            None => {
                debug!(item = %stack.item().name, "Can't equip a stack this inventory doesn't own");
                None
            }
        }
    }

    /// Equips the stack in `slot`, swapping out the category's previous holder
    ///
    /// The swap happens inside this one call, so no caller can observe two
    /// stacks equipped in the same category. Equipping an already equipped
    /// stack succeeds without changes.
    pub fn equip_slot(&mut self, slot: usize) -> Option<EquipSwap> {
        let stack = self.stacks.get(slot)?;
        let Some(category) = stack.item().category else {
            debug!(item = %stack.item().name, "Item has no equipment category");
            return None;
        };

        if stack.is_equipped() {
            return Some(EquipSwap {
                slot,
                category,
                replaced: None,
            });
        }

        let mut replaced = None;
        for (index, other) in self.stacks.iter_mut().enumerate() {
            if index != slot && other.is_equipped() && other.item().category == Some(category) {
                other.unequip();
                replaced = Some(Arc::clone(other.item()));
            }
        }

        self.stacks[slot].equip();

        Some(EquipSwap {
            slot,
            category,
            replaced,
        })
    }

    /// Unequips a stack owned by this inventory
    ///
    /// Returns false if the stack isn't present or wasn't equipped.
    pub fn unequip_item(&mut self, stack: &ItemStack) -> bool {
        self.position_of(stack.item())
            .and_then(|slot| self.unequip_slot(slot))
            .is_some()
    }

    /// Unequips the stack in `slot`, returning the category it freed
    pub fn unequip_slot(&mut self, slot: usize) -> Option<EquipmentCategory> {
        let stack = self.stacks.get_mut(slot)?;
        if !stack.is_equipped() {
            return None;
        }

        stack.unequip();
        stack.item().category
    }

    /// Returns an iterator over all equipped stacks
    pub fn equipped(&self) -> impl Iterator<Item = &ItemStack> {
        self.stacks.iter().filter(|stack| stack.is_equipped())
    }

    /// Gets the stack equipped in a category
    pub fn equipped_in(&self, category: EquipmentCategory) -> Option<&ItemStack> {
        self.equipped()
            .find(|stack| stack.item().category == Some(category))
    }

    /// Sums the bonuses of every equipped stack
    pub fn equipped_bonuses(&self) -> StatBonuses {
        self.equipped().map(|stack| stack.item().bonuses).sum()
    }

    /// Returns an iterator over all stacks in slot order
    pub fn iter(&self) -> impl Iterator<Item = &ItemStack> {
        self.stacks.iter()
    }

    /// Snapshot of the current stacks in slot order
    ///
    /// Owned clones, so the result never aliases later inventory state.
    pub fn items_as_vec(&self) -> Vec<ItemStack> {
        self.stacks.clone()
    }
}
