//! Change notification channel.
//!
//! Listeners are called synchronously, in registration order, right after a
//! mutation has been applied. Each listener gets a shared borrow of the state
//! so it can read it without going back through the store.

use std::fmt;

use crate::state::AppState;

type Listener = Box<dyn Fn(&AppState)>;

/// Handle returned by [`ChangeChannel::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriberId(u64);

/// Fan-out signal emitted after every mutation.
#[derive(Default)]
pub struct ChangeChannel {
    listeners: Vec<(SubscriberId, Listener)>,
    next_id: u64,
}

impl ChangeChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. It will see every later emission.
    pub fn subscribe(&mut self, listener: impl Fn(&AppState) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Notify every listener.
    pub fn emit(&self, state: &AppState) {
        for (_, listener) in &self.listeners {
            listener(state);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl fmt::Debug for ChangeChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeChannel")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
