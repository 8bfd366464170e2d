//! Pocket Rogue client core
//!
//! Items, inventories and equipment for a 2D RPG client, plus the message
//! wiring that keeps the inventory panel and the combat system in step
//! without either knowing about the other.
//!
//! # Modules
//!
//! - [`item`] - item definitions, the catalog and stacks
//! - [`inventory`] - ordered stacks with equip slots
//! - [`message`] - typed messages and the sender/receiver contract
//! - [`combat`] - equipment bonus totals
//! - [`gui`] - the inventory panel
//! - [`game`] - the screen that owns actors and wires systems together

pub mod combat;
pub mod config;
pub mod game;
pub mod gui;
pub mod input_system;
pub mod inventory;
pub mod item;
pub mod message;
pub mod player;
pub mod stats;
pub mod text;
