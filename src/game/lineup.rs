//! Daily lineup of active suspects and the current focus

use super::events::{FocusBus, SubscriptionHandle};
use super::registry::SuspectRegistry;
use crate::data::SuspectRuntime;
use tracing::debug;

/// Tracks which suspects are in play today and which one is focused.
///
/// This type only notifies; it owns no clue pool. Use
/// [`CaseSession`](super::CaseSession) to get a pool flush and a closed
/// question panel before every `FocusChanged`.
#[derive(Debug, Default)]
pub struct LineupSelector {
    daily_active: Vec<String>,
    focused: Option<String>,
    bus: FocusBus,
}

impl LineupSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the resolvable ids from `ids` as today's lineup without touching
    /// focus. Returns the first resolved id.
    pub fn assign_lineup<S: AsRef<str>>(
        &mut self,
        registry: &SuspectRegistry,
        ids: &[S],
    ) -> Option<String> {
        self.daily_active = ids
            .iter()
            .map(|id| id.as_ref())
            .filter(|id| {
                let known = registry.contains(id);
                if !known {
                    debug!("Skipping unknown suspect {} in lineup", id);
                }
                known
            })
            .map(String::from)
            .collect();
        self.daily_active.first().cloned()
    }

    /// Set today's lineup and focus its first suspect.
    ///
    /// An empty resolved lineup leaves the current focus untouched.
    pub fn setup_lineup<S: AsRef<str>>(&mut self, registry: &SuspectRegistry, ids: &[S]) {
        if let Some(first) = self.assign_lineup(registry, ids) {
            self.set_focused(registry, &first);
        }
    }

    /// Focus `id` and notify subscribers. Unknown ids are ignored.
    pub fn set_focused(&mut self, registry: &SuspectRegistry, id: &str) -> bool {
        let Some(suspect) = registry.get(id) else {
            debug!("Ignoring focus request for unknown suspect {}", id);
            return false;
        };

        self.focused = Some(id.to_string());
        self.bus.emit(suspect);
        true
    }

    pub fn focused_id(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    pub fn focused<'r>(&self, registry: &'r SuspectRegistry) -> Option<&'r SuspectRuntime> {
        self.focused.as_deref().and_then(|id| registry.get(id))
    }

    pub fn daily_active_ids(&self) -> &[String] {
        &self.daily_active
    }

    pub fn daily_active_suspects<'r>(&self, registry: &'r SuspectRegistry) -> Vec<&'r SuspectRuntime> {
        self.daily_active
            .iter()
            .filter_map(|id| registry.get(id))
            .collect()
    }

    pub fn subscribe<F>(&mut self, handler: F) -> SubscriptionHandle
    where
        F: FnMut(&SuspectRuntime) + 'static,
    {
        self.bus.subscribe(handler)
    }

    pub fn unsubscribe(&mut self, handle: SubscriptionHandle) -> bool {
        self.bus.unsubscribe(handle)
    }
}
