// GameScreen struct and system wiring
//
// This module contains the GameScreen which owns the actor roster, the item
// catalog and the long-lived systems, wires them together once at setup time
// and dispatches player actions to them each frame.

use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, info, warn};

use crate::combat::CombatSystem;
use crate::config::ClientConfig;
use crate::gui::InventoryPanel;
use crate::input_system::{GameAction, InputSystem};
use crate::item::{CatalogError, ItemCatalog, ItemId};
use crate::message::{Message, MessageSender, Receivers};
use crate::player::Player;

/// Name given to the actor created when the roster is empty
const DEFAULT_PLAYER_NAME: &str = "Player";

/// GameScreen holds the actors and the systems acting on the controlled one
///
/// Wiring:
/// - panel → combat system, for equip changes
/// - screen → panel and combat system, for controlled-actor changes
pub struct GameScreen {
    catalog: ItemCatalog,
    players: Vec<Player>,
    controlled: usize,
    combat: Rc<RefCell<CombatSystem>>,
    panel: Rc<RefCell<InventoryPanel>>,
    input: InputSystem,
    receivers: Receivers,
    frame: u64,
    elapsed: f32,
}

impl GameScreen {
    /// Creates the screen controlling the first player
    ///
    /// An empty roster gets one default player so there is always an
    /// inventory to bind.
    pub fn new(catalog: ItemCatalog, mut players: Vec<Player>) -> Self {
        if players.is_empty() {
            players.push(Player::new(DEFAULT_PLAYER_NAME));
        }

        let inventory = players[0].inventory().clone();
        let combat = Rc::new(RefCell::new(CombatSystem::new(inventory.clone())));
        let panel = Rc::new(RefCell::new(InventoryPanel::new(inventory)));

        panel.borrow_mut().add_receiver(&combat);

        let mut receivers = Receivers::new();
        receivers.register(&panel);
        receivers.register(&combat);

        GameScreen {
            catalog,
            players,
            controlled: 0,
            combat,
            panel,
            input: InputSystem::new(),
            receivers,
            frame: 0,
            elapsed: 0.0,
        }
    }

    /// Builds the roster from the config's actors and their starting items
    ///
    /// A starting item missing from the catalog fails setup.
    pub fn from_config(config: &ClientConfig, catalog: ItemCatalog) -> Result<Self, CatalogError> {
        let mut players = Vec::with_capacity(config.actors.len());

        for actor in &config.actors {
            let player = Player::new(actor.name.clone());
            for starting in &actor.items {
                player.give(catalog.lookup(starting.id)?, starting.quantity);
            }
            debug!(name = %player.name, stacks = player.inventory().borrow().len(), "Created actor");
            players.push(player);
        }

        let screen = Self::new(catalog, players);
        info!(actors = screen.players.len(), "Game screen ready");
        Ok(screen)
    }

    pub fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn controlled_index(&self) -> usize {
        self.controlled
    }

    pub fn controlled_player(&self) -> &Player {
        &self.players[self.controlled]
    }

    pub fn combat(&self) -> &Rc<RefCell<CombatSystem>> {
        &self.combat
    }

    pub fn panel(&self) -> &Rc<RefCell<InventoryPanel>> {
        &self.panel
    }

    pub fn input(&self) -> &InputSystem {
        &self.input
    }

    /// Frames rendered so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Takes control of actor `index`
    ///
    /// Every receiver is told about the new inventory. Switching to the
    /// current actor or to an index outside the roster does nothing.
    pub fn switch_actor(&mut self, index: usize) -> bool {
        if index == self.controlled || index >= self.players.len() {
            debug!(index, current = self.controlled, "Ignoring actor switch");
            return false;
        }

        self.controlled = index;
        let inventory = self.players[index].inventory().clone();
        info!(name = %self.players[index].name, "Switched controlled actor");

        self.notify_receivers(&Message::PlayerInventoryChanged { inventory });
        true
    }

    /// Adds `quantity` of catalog item `id` to the controlled actor
    ///
    /// Returns the slot used, or None when nothing was stored (a zero
    /// quantity or a stack that would overflow).
    pub fn give_item(&mut self, id: ItemId, quantity: u32) -> Result<Option<usize>, CatalogError> {
        let item = self.catalog.lookup(id)?;
        let slot = self.players[self.controlled].give(item, quantity);

        self.panel.borrow_mut().refresh();
        Ok(slot)
    }

    /// Executes one action. Returns false when the game should stop.
    pub fn handle_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::ToggleInventory => {
                let mut panel = self.panel.borrow_mut();
                panel.toggle();
                self.input.update_context(panel.is_open);
            }
            GameAction::SelectStack(index) => {
                self.panel.borrow_mut().select(index);
            }
            GameAction::EquipSelected => {
                self.panel.borrow_mut().equip_selected();
            }
            GameAction::UnequipSelected => {
                self.panel.borrow_mut().unequip_selected();
            }
            GameAction::SwitchActor(index) => {
                self.switch_actor(index);
            }
            GameAction::GiveItem { id, quantity } => {
                if let Err(error) = self.give_item(id, quantity) {
                    warn!(%error, "Unable to give item");
                }
            }
            GameAction::Quit => return false,
        }
        true
    }

    /// Translates and executes one command line
    pub fn handle_command(&mut self, line: &str) -> bool {
        match self.input.translate(line) {
            Some(action) => self.handle_action(action),
            None => true,
        }
    }

    /// Advances the frame and returns its text
    pub fn render_frame(&mut self, delta: f32) -> Vec<String> {
        self.frame += 1;
        self.elapsed += delta;

        let mut lines = vec![format!(
            "[{}] frame {} ({:.1}s)",
            self.controlled_player().name,
            self.frame,
            self.elapsed
        )];

        let totals = self
            .combat
            .borrow()
            .stats()
            .bonuses()
            .iter()
            .map(|(stat, value)| format!("{}: {}", stat.label(), value))
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(totals);

        let panel = self.panel.borrow();
        if panel.is_open {
            lines.extend(panel.render_lines());
        }
        lines
    }
}

impl MessageSender for GameScreen {
    fn receivers(&mut self) -> &mut Receivers {
        &mut self.receivers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ActorConfig, StartingItem};
    use crate::item::{EquipmentCategory, IconCoords, Item};
    use crate::message::{MessageKind, MessageReceiver};
    use crate::stats::StatBonuses;
    use std::sync::Arc;

    const SWORD: [i32; 7] = [5, 0, 0, 1, 0, 0, 0];
    const SHIELD: [i32; 7] = [0, 0, 0, 0, 4, 2, 3];

    struct Recorder {
        kinds: Vec<MessageKind>,
    }

    impl MessageReceiver for Recorder {
        fn on_message_received(&mut self, message: &Message) {
            self.kinds.push(message.kind());
        }
    }

    fn catalog() -> ItemCatalog {
        let item = |id, name: &str, category, bonuses| {
            Item::new(id, name, IconCoords::default(), category, StatBonuses::from_array(bonuses))
        };

        ItemCatalog::from_items([
            item(0, "Sword", Some(EquipmentCategory::Weapon), SWORD),
            item(1, "Shield", Some(EquipmentCategory::Shield), SHIELD),
            item(2, "Bow", Some(EquipmentCategory::Weapon), [0, 0, 6, 2, 0, 0, 0]),
            item(3, "Herb", None, [0; 7]),
        ])
        .unwrap()
    }

    fn config() -> ClientConfig {
        ClientConfig {
            actors: vec![
                ActorConfig {
                    name: String::from("Hero"),
                    items: vec![StartingItem { id: 0, quantity: 1 }, StartingItem { id: 1, quantity: 1 }],
                },
                ActorConfig {
                    name: String::from("Ranger"),
                    items: vec![StartingItem { id: 2, quantity: 1 }],
                },
            ],
            ..ClientConfig::default()
        }
    }

    fn screen_with_recorder() -> (GameScreen, Rc<RefCell<Recorder>>) {
        let screen = GameScreen::from_config(&config(), catalog()).unwrap();
        let recorder = Rc::new(RefCell::new(Recorder { kinds: Vec::new() }));
        screen.panel().borrow_mut().add_receiver(&recorder);
        (screen, recorder)
    }

    fn totals(screen: &GameScreen) -> [i32; 7] {
        *screen.combat().borrow().stats().bonuses().as_array()
    }

    #[test]
    fn test_from_config_builds_roster() {
        let screen = GameScreen::from_config(&config(), catalog()).unwrap();
        assert_eq!(screen.players().len(), 2);
        assert_eq!(screen.controlled_player().name, "Hero");
        assert_eq!(screen.panel().borrow().displays().len(), 2);
        assert_eq!(totals(&screen), [0; 7]);
    }

    #[test]
    fn test_from_config_unknown_starting_item() {
        let mut config = config();
        config.actors[0].items.push(StartingItem { id: 99, quantity: 1 });
        assert!(matches!(
            GameScreen::from_config(&config, catalog()),
            Err(CatalogError::NotFound(99))
        ));
    }

    #[test]
    fn test_empty_roster_gets_default_player() {
        let screen = GameScreen::new(catalog(), Vec::new());
        assert_eq!(screen.players().len(), 1);
        assert_eq!(screen.controlled_player().name, DEFAULT_PLAYER_NAME);
    }

    #[test]
    fn test_equip_sword_then_shield_then_unowned_stack() {
        let (mut screen, recorder) = screen_with_recorder();
        let initial = screen.combat().borrow().recomputations();
        screen.handle_command("i");

        screen.handle_command("select 0");
        screen.handle_command("equip");
        assert_eq!(recorder.borrow().kinds, vec![MessageKind::ItemEquipped]);
        assert_eq!(screen.combat().borrow().recomputations(), initial + 1);
        assert_eq!(totals(&screen), SWORD);

        screen.handle_command("select 1");
        screen.handle_command("equip");
        assert_eq!(recorder.borrow().kinds.len(), 2);
        assert_eq!(screen.combat().borrow().recomputations(), initial + 2);
        assert_eq!(totals(&screen), [5, 0, 0, 1, 4, 2, 3]);

        // The panel still shows the bow after it left the inventory
        screen.handle_command("give 2");
        screen.handle_command("select 2");
        let bow = screen.catalog().lookup(2).unwrap();
        screen.controlled_player().inventory().borrow_mut().remove_item(&bow, 1).unwrap();
        assert_eq!(screen.panel().borrow().selected_stack().map(|s| s.item().id), Some(2));

        assert!(!screen.panel().borrow_mut().equip_selected());
        assert_eq!(recorder.borrow().kinds.len(), 2);
        assert_eq!(screen.combat().borrow().recomputations(), initial + 2);
        assert_eq!(totals(&screen), [5, 0, 0, 1, 4, 2, 3]);
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let (screen, _recorder) = screen_with_recorder();
        screen.panel().borrow_mut().select(0);
        screen.panel().borrow_mut().equip_selected();

        let first = totals(&screen);
        screen.combat().borrow_mut().recompute();
        screen.combat().borrow_mut().recompute();
        assert_eq!(totals(&screen), first);
    }

    #[test]
    fn test_switch_actor_rebinds_panel_and_combat() {
        let (mut screen, _recorder) = screen_with_recorder();
        screen.panel().borrow_mut().select(0);
        screen.panel().borrow_mut().equip_selected();

        assert!(screen.switch_actor(1));
        assert_eq!(screen.controlled_player().name, "Ranger");

        let ranger_inventory = screen.players()[1].inventory().clone();
        assert!(Rc::ptr_eq(screen.panel().borrow().inventory(), &ranger_inventory));
        assert_eq!(screen.panel().borrow().displays()[0].label(), "Bow");
        assert_eq!(totals(&screen), [0; 7]);

        // Equip on the new actor feeds combat through the existing wiring
        screen.panel().borrow_mut().select(0);
        screen.panel().borrow_mut().equip_selected();
        assert_eq!(totals(&screen), [0, 0, 6, 2, 0, 0, 0]);

        // Hero's equipment is still there when switching back
        assert!(screen.switch_actor(0));
        assert_eq!(totals(&screen), SWORD);
    }

    #[test]
    fn test_switch_actor_noops() {
        let mut screen = GameScreen::from_config(&config(), catalog()).unwrap();
        let before = screen.combat().borrow().recomputations();

        assert!(!screen.switch_actor(0));
        assert!(!screen.switch_actor(7));
        assert_eq!(screen.controlled_index(), 0);
        assert_eq!(screen.combat().borrow().recomputations(), before);
    }

    #[test]
    fn test_give_item() {
        let mut screen = GameScreen::from_config(&config(), catalog()).unwrap();

        assert_eq!(screen.give_item(3, 4).unwrap(), Some(2));
        assert_eq!(screen.give_item(3, 0).unwrap(), None);
        assert!(matches!(screen.give_item(42, 1), Err(CatalogError::NotFound(42))));
        assert_eq!(screen.panel().borrow().displays().len(), 3);

        // Unknown ids from input are reported, not fatal
        assert!(screen.handle_command("give 42"));
        assert_eq!(screen.controlled_player().inventory().borrow().len(), 3);
    }

    #[test]
    fn test_render_frame() {
        let mut screen = GameScreen::from_config(&config(), catalog()).unwrap();

        let closed = screen.render_frame(0.5);
        assert_eq!(closed[0], "[Hero] frame 1 (0.5s)");
        assert!(closed[1].starts_with("Melee Damage: 0"));
        assert_eq!(closed.len(), 2);

        screen.handle_command("inventory");
        let open = screen.render_frame(0.5);
        assert_eq!(open[0], "[Hero] frame 2 (1.0s)");
        assert_eq!(open[2], "Inventory");
        assert_eq!(open[3], "  Sword");
    }

    #[test]
    fn test_quit() {
        let mut screen = GameScreen::new(catalog(), vec![Player::new("Solo")]);
        assert!(screen.handle_command("look around"));
        assert!(!screen.handle_command("quit"));
    }

    #[test]
    fn test_give_to_controlled_only() {
        let mut screen = GameScreen::from_config(&config(), catalog()).unwrap();
        screen.switch_actor(1);
        screen.give_item(3, 2).unwrap();

        let herb: Arc<Item> = screen.catalog().lookup(3).unwrap();
        assert_eq!(screen.players()[0].inventory().borrow().position_of(&herb), None);
        assert_eq!(screen.players()[1].inventory().borrow().count_item(3), 2);
    }
}
