//! Focus-change notifications
//!
//! Handlers run synchronously, in subscription order, before the focus
//! change that triggered them returns.

use crate::data::SuspectRuntime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Token returned by [`FocusBus::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionHandle(pub Uuid);

impl SubscriptionHandle {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

type FocusHandler = Box<dyn FnMut(&SuspectRuntime)>;

/// Subscribers to `FocusChanged`
#[derive(Default)]
pub struct FocusBus {
    handlers: Vec<(SubscriptionHandle, FocusHandler)>,
}

impl FocusBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, handler: F) -> SubscriptionHandle
    where
        F: FnMut(&SuspectRuntime) + 'static,
    {
        let handle = SubscriptionHandle::new();
        self.handlers.push((handle, Box::new(handler)));
        handle
    }

    /// Returns false if the handle was not subscribed
    pub fn unsubscribe(&mut self, handle: SubscriptionHandle) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(h, _)| *h != handle);
        self.handlers.len() != before
    }

    pub fn emit(&mut self, suspect: &SuspectRuntime) {
        for (_, handler) in self.handlers.iter_mut() {
            handler(suspect);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.handlers.len()
    }
}

impl std::fmt::Debug for FocusBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FocusBus")
            .field("subscribers", &self.handlers.len())
            .finish()
    }
}
