use tracing::{debug, warn};

use crate::item::ItemId;

/// Actions the player can perform in the game
///
/// This enum represents all possible high-level game actions that can be
/// triggered by input. It decouples input handling from action execution.
#[derive(Debug, Clone, PartialEq)]
pub enum GameAction {
    // === UI Navigation ===
    ToggleInventory,

    // === Inventory Actions ===
    SelectStack(usize), // row index in the panel
    EquipSelected,
    UnequipSelected,

    // === World Interaction ===
    SwitchActor(usize), // index into the actor roster
    GiveItem { id: ItemId, quantity: u32 },

    // === System ===
    Quit,
}

impl GameAction {
    /// Returns true for actions that only make sense with the panel open
    pub fn needs_inventory(&self) -> bool {
        matches!(
            self,
            GameAction::SelectStack(_) | GameAction::EquipSelected | GameAction::UnequipSelected
        )
    }
}

/// Input context determines which actions are available
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Normal gameplay
    Playing,
    /// Inventory panel is open
    Inventory,
}

/// InputSystem turns text commands into GameActions
///
/// The input host delivers already-debounced, single-shot commands, one per
/// line:
///
/// | Command | Action |
/// |---|---|
/// | `inventory` / `i` | toggle the panel |
/// | `select <n>` | select row `n` |
/// | `equip` / `unequip` | act on the selected row |
/// | `switch <n>` | control actor `n` |
/// | `give <id> [qty]` | add items from the catalog |
/// | `quit` / `q` | exit |
pub struct InputSystem {
    /// Current input context
    pub context: InputContext,
}

impl InputSystem {
    /// Creates a new InputSystem starting in Playing context
    pub fn new() -> Self {
        InputSystem {
            context: InputContext::Playing,
        }
    }

    /// Update the input context from the panel state
    pub fn update_context(&mut self, inventory_open: bool) {
        self.context = if inventory_open {
            InputContext::Inventory
        } else {
            InputContext::Playing
        };
    }

    /// Translates one command line into an action
    ///
    /// Returns None for blank lines, unknown commands, bad arguments and
    /// inventory actions issued while the panel is closed.
    pub fn translate(&self, line: &str) -> Option<GameAction> {
        let mut words = line.split_whitespace();
        let command = words.next()?.to_ascii_lowercase();
        let args: Vec<&str> = words.collect();

        let action = match (command.as_str(), args.as_slice()) {
            ("inventory" | "i", []) => GameAction::ToggleInventory,
            ("select", [index]) => GameAction::SelectStack(parse_arg(index)?),
            ("equip", []) => GameAction::EquipSelected,
            ("unequip", []) => GameAction::UnequipSelected,
            ("switch", [index]) => GameAction::SwitchActor(parse_arg(index)?),
            ("give", [id]) => GameAction::GiveItem {
                id: parse_arg(id)?,
                quantity: 1,
            },
            ("give", [id, quantity]) => GameAction::GiveItem {
                id: parse_arg(id)?,
                quantity: parse_arg(quantity)?,
            },
            ("quit" | "q", []) => GameAction::Quit,
            _ => {
                warn!(line, "Unknown command");
                return None;
            }
        };

        if action.needs_inventory() && self.context != InputContext::Inventory {
            debug!(?action, "Inventory is closed, dropping action");
            return None;
        }

        Some(action)
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_arg<T: std::str::FromStr>(raw: &str) -> Option<T> {
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(raw, "Invalid command argument");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open() -> InputSystem {
        let mut input = InputSystem::new();
        input.update_context(true);
        input
    }

    #[test]
    fn test_input_system_creation() {
        let input = InputSystem::new();
        assert_eq!(input.context, InputContext::Playing);
    }

    #[test]
    fn test_inventory_commands() {
        let input = open();
        assert_eq!(input.translate("select 2"), Some(GameAction::SelectStack(2)));
        assert_eq!(input.translate("EQUIP"), Some(GameAction::EquipSelected));
        assert_eq!(input.translate("  unequip  "), Some(GameAction::UnequipSelected));
    }

    #[test]
    fn test_inventory_commands_need_open_panel() {
        let input = InputSystem::new();
        assert_eq!(input.translate("select 0"), None);
        assert_eq!(input.translate("equip"), None);
        assert_eq!(input.translate("i"), Some(GameAction::ToggleInventory));
    }

    #[test]
    fn test_world_commands() {
        let input = InputSystem::new();
        assert_eq!(input.translate("switch 1"), Some(GameAction::SwitchActor(1)));
        assert_eq!(
            input.translate("give 4"),
            Some(GameAction::GiveItem { id: 4, quantity: 1 })
        );
        assert_eq!(
            input.translate("give 4 250"),
            Some(GameAction::GiveItem { id: 4, quantity: 250 })
        );
        assert_eq!(input.translate("q"), Some(GameAction::Quit));
    }

    #[test]
    fn test_rejected_input() {
        let input = open();
        assert_eq!(input.translate(""), None);
        assert_eq!(input.translate("dance"), None);
        assert_eq!(input.translate("select"), None);
        assert_eq!(input.translate("select -1"), None);
        assert_eq!(input.translate("give sword"), None);
        assert_eq!(input.translate("equip now"), None);
    }
}
