// Message module
//
// Decouples UI widgets from simulation systems. Both sides depend only on
// the Message type and the two narrow sender/receiver traits:
// - types.rs: the tagged Message enum
// - bus.rs: MessageSender / MessageReceiver and the Receivers list

pub mod bus;
pub mod types;

pub use bus::{MessageReceiver, MessageSender, Receivers};
pub use types::{Message, MessageKind};
