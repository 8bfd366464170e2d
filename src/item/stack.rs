use std::fmt;
use std::sync::Arc;
use tracing::warn;

use super::definition::Item;
use crate::text::shorten_quantity;

/// An instance of an item with quantity and equip state
///
/// This represents a specific amount of an item type. It's stored
/// in an inventory slot. The `Item` itself is shared with the catalog
/// and never mutated through a stack.
///
/// Two stacks are equal when they hold the same item; quantity and
/// equip state are not part of identity.
#[derive(Debug, Clone)]
pub struct ItemStack {
    item: Arc<Item>,
    quantity: u32,
    equipped: bool,
}

impl ItemStack {
    /// Creates a new, unequipped item stack
    ///
    /// A stack always holds at least one item.
    pub fn new(item: Arc<Item>, quantity: u32) -> Self {
        debug_assert!(quantity > 0, "an ItemStack must hold at least one item");
        ItemStack {
            item,
            quantity,
            equipped: false,
        }
    }

    /// The item definition backing this stack
    pub fn item(&self) -> &Arc<Item> {
        &self.item
    }

    /// How many of the item the stack holds
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Shortened quantity text (e.g. `"150K"`)
    pub fn quantity_label(&self) -> String {
        shorten_quantity(self.quantity)
    }

    pub fn is_equipped(&self) -> bool {
        self.equipped
    }

    /// Returns true if this stack can merge with another
    pub fn can_merge_with(&self, other: &ItemStack) -> bool {
        self.item == other.item
    }

    /// Merges another stack into this one
    ///
    /// On matching items the other stack's quantity is added to this one.
    /// On a mismatch, or when the sum would overflow the quantity, a
    /// warning is logged and this stack is returned unchanged, so UI code
    /// can call it speculatively.
    ///
    /// # Example
    /// ```
    /// use std::sync::Arc;
    /// use pocket_rogue::item::{IconCoords, Item, ItemStack};
    /// use pocket_rogue::stats::StatBonuses;
    ///
    /// let arrow = Arc::new(Item::new(7, "Arrow", IconCoords::default(), None, StatBonuses::zero()));
    /// let mut quiver = ItemStack::new(arrow.clone(), 50);
    /// quiver.merge(&ItemStack::new(arrow, 20));
    /// assert_eq!(quiver.quantity(), 70);
    /// ```
    pub fn merge(&mut self, other: &ItemStack) -> &mut Self {
        if !self.can_merge_with(other) {
            warn!(
                this = %self.item.name,
                other = %other.item.name,
                "ItemStacks must be of the same item to merge"
            );
            return self;
        }

        self.add_quantity(other.quantity);
        self
    }

    /// Adds to the quantity (used when an inventory merges an incoming amount)
    ///
    /// Returns false and leaves the quantity unchanged if the sum doesn't
    /// fit.
    pub(crate) fn add_quantity(&mut self, amount: u32) -> bool {
        match self.quantity.checked_add(amount) {
            Some(quantity) => {
                self.quantity = quantity;
                true
            }
            None => {
                warn!(
                    item = %self.item.name,
                    quantity = self.quantity,
                    amount,
                    "Stack quantity would overflow"
                );
                false
            }
        }
    }

    /// Decrements the quantity
    ///
    /// Doesn't enforce the 1-item floor: the owning Inventory checks first
    /// and deletes the stack instead of leaving it empty.
    pub(crate) fn remove_quantity(&mut self, amount: u32) {
        self.quantity = self.quantity.saturating_sub(amount);
    }

    /// Sets the equipped flag. Category rules belong to the Inventory.
    pub(crate) fn equip(&mut self) {
        self.equipped = true;
    }

    pub(crate) fn unequip(&mut self) {
        self.equipped = false;
    }
}

impl PartialEq for ItemStack {
    fn eq(&self, other: &Self) -> bool {
        self.item == other.item
    }
}

impl Eq for ItemStack {}

/// Renders as `name[ (quantity)][ *]`
impl fmt::Display for ItemStack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.item.name)?;
        if self.quantity > 1 {
            write!(f, " ({})", self.quantity_label())?;
        }
        if self.equipped {
            write!(f, " *")?;
        }
        Ok(())
    }
}
