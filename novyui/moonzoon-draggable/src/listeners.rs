// Scoped DOM listener registration
// Dropping a scope removes every listener it registered.

use gloo::events::{EventListener, EventListenerOptions};
use web_sys::{Event, EventTarget};

#[must_use = "listeners are removed as soon as the scope is dropped"]
#[derive(Default)]
pub struct ListenerScope {
    listeners: Vec<EventListener>,
}

impl ListenerScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Passive listener.
    pub fn listen(
        &mut self,
        target: &EventTarget,
        event_type: &'static str,
        callback: impl FnMut(&Event) + 'static,
    ) {
        self.listeners
            .push(EventListener::new(target, event_type, callback));
    }

    /// Non-passive listener, allowed to call `prevent_default`.
    pub fn listen_active(
        &mut self,
        target: &EventTarget,
        event_type: &'static str,
        callback: impl FnMut(&Event) + 'static,
    ) {
        self.listeners.push(EventListener::new_with_options(
            target,
            event_type,
            EventListenerOptions::enable_prevent_default(),
            callback,
        ));
    }
}
