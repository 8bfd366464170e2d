use crate::item::ItemStack;

/// One selectable row of the inventory panel
///
/// Holds a snapshot of the stack it shows. The panel enforces that at
/// most one row is selected at a time.
#[derive(Debug, Clone)]
pub struct ItemStackDisplay {
    stack: ItemStack,
    selected: bool,
}

impl ItemStackDisplay {
    pub fn new(stack: ItemStack) -> Self {
        ItemStackDisplay {
            stack,
            selected: false,
        }
    }

    pub fn stack(&self) -> &ItemStack {
        &self.stack
    }

    /// Row text, e.g. `"Sword (5) *"`
    pub fn label(&self) -> String {
        self.stack.to_string()
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn select(&mut self) {
        self.selected = true;
    }

    pub fn deselect(&mut self) {
        self.selected = false;
    }
}
