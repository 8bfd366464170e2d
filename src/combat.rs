//! Combat system: derived combat statistics from equipment
//!
//! This module provides the combat layer on top of the stats system, including:
//! - `CombatStats`: bonus totals of everything an actor has equipped
//! - `CombatSystem`: a message receiver that recomputes those totals
//!   whenever equipment changes
//!
//! # Rust Learning Notes
//!
//! This module demonstrates:
//! - **Trait implementation**: `CombatSystem` implements `MessageReceiver`
//!   without knowing anything about the UI that sends to it
//! - **Pattern matching**: handling only the message kinds it cares about
//! - **Shared ownership**: reading the actor's inventory through `Rc<RefCell<_>>`

use tracing::debug;

use crate::inventory::SharedInventory;
use crate::message::{Message, MessageReceiver};
use crate::stats::{Stat, StatBonuses};

/// Equipment bonus totals for one actor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CombatStats {
    bonuses: StatBonuses,
}

impl CombatStats {
    pub fn from_bonuses(bonuses: StatBonuses) -> Self {
        CombatStats { bonuses }
    }

    /// Total bonus for one stat
    pub fn get(&self, stat: Stat) -> i32 {
        self.bonuses[stat]
    }

    /// All totals in stat order
    pub fn bonuses(&self) -> &StatBonuses {
        &self.bonuses
    }

    /// Sum of the three defensive totals
    pub fn total_defense(&self) -> i32 {
        self.bonuses
            .iter()
            .filter(|(stat, _)| stat.is_defensive())
            .map(|(_, value)| value)
            .sum()
    }
}

/// Simulation system that keeps an actor's combat totals in sync with
/// their equipment
///
/// Registered as a receiver of the inventory panel (equip changes) and of
/// the game screen (controlled-actor changes).
#[derive(Debug)]
pub struct CombatSystem {
    inventory: SharedInventory,
    stats: CombatStats,
    recomputations: u32,
}

impl CombatSystem {
    /// Creates a system bound to an inventory, with totals already computed
    pub fn new(inventory: SharedInventory) -> Self {
        let mut system = CombatSystem {
            inventory,
            stats: CombatStats::default(),
            recomputations: 0,
        };
        system.recompute();
        system
    }

    /// Current totals
    pub fn stats(&self) -> &CombatStats {
        &self.stats
    }

    /// How many times totals have been recomputed (including the initial one)
    pub fn recomputations(&self) -> u32 {
        self.recomputations
    }

    /// Sums the bonuses of every equipped stack in the bound inventory
    ///
    /// Deterministic: calling it twice with no equip change in between
    /// yields the same totals.
    pub fn recompute(&mut self) -> &CombatStats {
        let bonuses = self.inventory.borrow().equipped_bonuses();
        self.stats = CombatStats::from_bonuses(bonuses);
        self.recomputations += 1;

        debug!(bonuses = ?self.stats.bonuses().as_array(), "Recomputed combat stats");
        &self.stats
    }

    /// Points the system at another actor's inventory and recomputes
    pub fn bind(&mut self, inventory: SharedInventory) {
        self.inventory = inventory;
        self.recompute();
    }
}

impl MessageReceiver for CombatSystem {
    fn on_message_received(&mut self, message: &Message) {
        match message {
            Message::ItemEquipped { item, category, .. } => {
                debug!(item = %item.name, %category, "Equipment changed");
                self.recompute();
            }
            Message::ItemUnequipped { item, category } => {
                debug!(item = %item.name, %category, "Equipment removed");
                self.recompute();
            }
            Message::PlayerInventoryChanged { inventory } => {
                self.bind(inventory.clone());
            }
        }
    }
}
