//! Screen-Space GUI System
//!
//! UI components that sit on top of the world. They never reference
//! simulation systems directly: state changes go out as messages and the
//! panel re-reads the inventory itself to redraw.
//!
//! # Available Components
//!
//! - [`InventoryPanel`] - inventory list, stat labels and equip button
//! - [`ItemStackDisplay`] - one selectable row of the panel
//!
//! # Example Usage
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use pocket_rogue::combat::CombatSystem;
//! use pocket_rogue::gui::InventoryPanel;
//! use pocket_rogue::inventory::Inventory;
//! use pocket_rogue::message::MessageSender;
//!
//! let inventory = Inventory::new().into_shared();
//! let combat = Rc::new(RefCell::new(CombatSystem::new(inventory.clone())));
//!
//! // Wire once at setup time
//! let mut panel = InventoryPanel::new(inventory);
//! panel.add_receiver(&combat);
//!
//! // Nothing selected, so nothing happens
//! assert!(!panel.equip_selected());
//! ```

pub mod inventory_panel;
pub mod item_stack_display;

pub use inventory_panel::InventoryPanel;
pub use item_stack_display::ItemStackDisplay;
