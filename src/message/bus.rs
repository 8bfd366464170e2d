//! Sender/receiver contract
//!
//! A sender keeps an explicit, ordered list of non-owning receiver handles
//! and fans each message out to them synchronously on the calling frame.
//! There is no queue and no subscription by type: wiring happens once at
//! setup time.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tracing::{trace, warn};

use super::types::Message;

/// A component that reacts to messages one at a time
///
/// Implementations handle the kinds they care about and ignore the rest.
pub trait MessageReceiver {
    fn on_message_received(&mut self, message: &Message);
}

/// A component that pushes messages to its registered receivers
pub trait MessageSender {
    /// The sender's registration list
    fn receivers(&mut self) -> &mut Receivers;

    /// Registers a receiver. Returns false if it was already registered.
    fn add_receiver<R>(&mut self, receiver: &Rc<RefCell<R>>) -> bool
    where
        Self: Sized,
        R: MessageReceiver + 'static,
    {
        self.receivers().register(receiver)
    }

    /// Delivers `message` to every live receiver in registration order
    ///
    /// Returns how many receivers handled it.
    fn notify_receivers(&mut self, message: &Message) -> usize {
        self.receivers().deliver(message)
    }
}

type ReceiverHandle = Weak<RefCell<dyn MessageReceiver>>;

/// Ordered set of non-owning receiver handles
///
/// Receivers dropped by their owner are skipped and pruned on the next
/// delivery.
#[derive(Default)]
pub struct Receivers {
    handles: Vec<ReceiverHandle>,
}

impl Receivers {
    pub fn new() -> Self {
        Receivers { handles: Vec::new() }
    }

    /// Adds a receiver at the end of the delivery order
    pub fn register<R>(&mut self, receiver: &Rc<RefCell<R>>) -> bool
    where
        R: MessageReceiver + 'static,
    {
        let receiver: Rc<RefCell<dyn MessageReceiver>> = receiver.clone();
        let handle = Rc::downgrade(&receiver);

        if self.handles.iter().any(|existing| Weak::ptr_eq(existing, &handle)) {
            return false;
        }

        self.handles.push(handle);
        true
    }

    /// Number of registered receivers that are still alive
    pub fn len(&self) -> usize {
        self.handles
            .iter()
            .filter(|handle| handle.strong_count() > 0)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Calls every live receiver with `message`, in registration order
    ///
    /// A receiver that is already borrowed further up the call stack is
    /// skipped with a warning.
    pub fn deliver(&mut self, message: &Message) -> usize {
        self.handles.retain(|handle| handle.strong_count() > 0);

        let mut delivered = 0;
        for handle in &self.handles {
            let Some(receiver) = handle.upgrade() else {
                continue;
            };

            match receiver.try_borrow_mut() {
                Ok(mut receiver) => {
                    receiver.on_message_received(message);
                    delivered += 1;
                }
                Err(_) => {
                    warn!(kind = ?message.kind(), "Receiver is busy, skipping re-entrant delivery");
                }
            }
        }

        trace!(kind = ?message.kind(), delivered, "Delivered message");
        delivered
    }
}

impl std::fmt::Debug for Receivers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Receivers")
            .field("live", &self.len())
            .field("registered", &self.handles.len())
            .finish()
    }
}
