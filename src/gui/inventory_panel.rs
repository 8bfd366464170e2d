//! Inventory Panel
//!
//! Lists the bound inventory's stacks, shows the stat bonuses of the
//! selected stack and issues equip requests. It talks to the simulation
//! only through messages: on a successful equip it notifies its receivers
//! (the combat system), and it rebinds itself when told the controlled
//! actor's inventory changed.

use tracing::debug;

use super::item_stack_display::ItemStackDisplay;
use crate::inventory::SharedInventory;
use crate::item::{Item, ItemStack};
use crate::message::{Message, MessageReceiver, MessageSender, Receivers};
use crate::stats::{Stat, StatBonuses};
use crate::text::replace_label_value;

/// Marker drawn in front of the selected row
const SELECTED_MARKER: &str = ">";

/// Panel state: rows, stat labels and the bound inventory
#[derive(Debug)]
pub struct InventoryPanel {
    pub is_open: bool,
    inventory: SharedInventory,
    displays: Vec<ItemStackDisplay>,
    stat_labels: [String; Stat::COUNT],
    receivers: Receivers,
}

impl InventoryPanel {
    /// Creates a closed panel showing `inventory`
    pub fn new(inventory: SharedInventory) -> Self {
        let mut panel = InventoryPanel {
            is_open: false,
            inventory,
            displays: Vec::new(),
            stat_labels: blank_labels(),
            receivers: Receivers::new(),
        };
        panel.refresh();
        panel
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    /// The inventory currently displayed
    pub fn inventory(&self) -> &SharedInventory {
        &self.inventory
    }

    /// Rows in slot order
    pub fn displays(&self) -> &[ItemStackDisplay] {
        &self.displays
    }

    /// Text of one stat label, e.g. `"Melee Damage: 5"`
    pub fn stat_label(&self, stat: Stat) -> &str {
        &self.stat_labels[stat.index()]
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.displays.iter().position(ItemStackDisplay::is_selected)
    }

    pub fn selected_stack(&self) -> Option<&ItemStack> {
        self.selected_index().map(|index| self.displays[index].stack())
    }

    /// Selects row `index` and deselects every other row
    ///
    /// The stat labels switch to the selected item's bonuses. An index past
    /// the last row changes nothing and returns false.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.displays.len() {
            debug!(index, rows = self.displays.len(), "Selection out of range");
            return false;
        }

        for display in &mut self.displays {
            display.deselect();
        }
        self.displays[index].select();

        let bonuses = self.displays[index].stack().item().bonuses;
        self.show_bonuses(&bonuses);
        true
    }

    pub fn clear_selection(&mut self) {
        for display in &mut self.displays {
            display.deselect();
        }
        self.stat_labels = blank_labels();
    }

    /// Equips the selected stack
    ///
    /// With nothing selected this does nothing. If the inventory refuses,
    /// no message is sent. On success one `ItemEquipped` goes to every
    /// receiver, then the rows are rebuilt from the inventory and the
    /// labels show the equipped item's bonuses.
    pub fn equip_selected(&mut self) -> bool {
        let Some(stack) = self.selected_stack().cloned() else {
            debug!("Equip requested with no stack selected");
            return false;
        };

        // The borrow must end before receivers read the inventory.
        let swap = self.inventory.borrow_mut().equip_stack(&stack);
        let Some(swap) = swap else {
            return false;
        };

        let message = Message::ItemEquipped {
            item: stack.item().clone(),
            category: swap.category,
            replaced: swap.replaced,
        };
        self.notify_receivers(&message);

        self.refresh();
        self.reselect(stack.item());
        true
    }

    /// Unequips the selected stack, notifying receivers on success
    pub fn unequip_selected(&mut self) -> bool {
        let Some(stack) = self.selected_stack().cloned() else {
            debug!("Unequip requested with no stack selected");
            return false;
        };

        let freed = {
            let mut inventory = self.inventory.borrow_mut();
            inventory
                .position_of(stack.item())
                .and_then(|slot| inventory.unequip_slot(slot))
        };
        let Some(category) = freed else {
            return false;
        };

        self.notify_receivers(&Message::ItemUnequipped {
            item: stack.item().clone(),
            category,
        });

        self.refresh();
        self.reselect(stack.item());
        true
    }

    /// Rebuilds the rows from a fresh inventory snapshot
    ///
    /// The selection follows its item if the item is still present.
    pub fn refresh(&mut self) {
        let selected_item = self.selected_stack().map(|stack| stack.item().clone());
        let items = self.inventory.borrow().items_as_vec();

        self.displays = items.into_iter().map(ItemStackDisplay::new).collect();

        match selected_item {
            Some(item) if self.reselect(&item) => {}
            Some(_) => self.stat_labels = blank_labels(),
            None => {}
        }
    }

    /// Text rendering of the panel: one line per row, then the stat labels
    pub fn render_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.displays.len() + Stat::COUNT + 1);
        lines.push(String::from("Inventory"));

        for display in &self.displays {
            let marker = if display.is_selected() { SELECTED_MARKER } else { " " };
            lines.push(format!("{} {}", marker, display.label()));
        }

        lines.extend(self.stat_labels.iter().cloned());
        lines
    }

    fn reselect(&mut self, item: &Item) -> bool {
        match self
            .displays
            .iter()
            .position(|display| display.stack().item().as_ref() == item)
        {
            Some(index) => self.select(index),
            None => false,
        }
    }

    fn show_bonuses(&mut self, bonuses: &StatBonuses) {
        for (stat, value) in bonuses.iter() {
            let updated = replace_label_value(&self.stat_labels[stat.index()], value);
            self.stat_labels[stat.index()] = updated;
        }
    }
}

/// Stat labels with no value, e.g. `"Melee Damage: "`
fn blank_labels() -> [String; Stat::COUNT] {
    Stat::ALL.map(|stat| format!("{}: ", stat.label()))
}

impl MessageSender for InventoryPanel {
    fn receivers(&mut self) -> &mut Receivers {
        &mut self.receivers
    }
}

impl MessageReceiver for InventoryPanel {
    fn on_message_received(&mut self, message: &Message) {
        match message {
            Message::PlayerInventoryChanged { inventory } => {
                debug!("Rebinding inventory panel");
                self.inventory = inventory.clone();
                self.displays.clear();
                self.stat_labels = blank_labels();
                self.refresh();
            }
            Message::ItemEquipped { .. } | Message::ItemUnequipped { .. } => {}
        }
    }
}
