/// Change-notification bus for sort-strategy invalidation.
///
/// The world publishes "map changed" and "render storage changed"; the
/// camera's active sort strategy subscribes a DirtyFlag and treats a
/// raised flag as "cached ordering invalid". Registration is explicit and
/// scoped: subscribing returns a ListenerKey the owner must unsubscribe,
/// so no process-wide singleton holds dangling listeners.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use bitflags::bitflags;
use slotmap::{new_key_type, SlotMap};

/// A world-side change the camera must react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorldEvent {
    /// Map data changed (cells added, removed or modified)
    MapChanged,
    /// The render storage rebuilt or reorganized its objects
    RenderStorageChanged,
}

bitflags! {
    /// Which events a subscription wants delivered
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct EventMask: u8 {
        const MAP_CHANGED = 1 << 0;
        const RENDER_STORAGE_CHANGED = 1 << 1;
    }
}

impl WorldEvent {
    /// Mask bit corresponding to this event
    pub fn mask(self) -> EventMask {
        match self {
            WorldEvent::MapChanged => EventMask::MAP_CHANGED,
            WorldEvent::RenderStorageChanged => EventMask::RENDER_STORAGE_CHANGED,
        }
    }
}

new_key_type! {
    /// Stable key for a subscription on an EventBus.
    ///
    /// Keys remain valid until their own subscription is removed.
    pub struct ListenerKey;
}

/// Shared invalidation flag, raised by the bus and drained by its owner.
///
/// Clones share the same underlying flag.
#[derive(Debug, Clone)]
pub struct DirtyFlag(Arc<AtomicBool>);

impl DirtyFlag {
    /// Create a lowered flag
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(false)))
    }

    /// Raise the flag
    pub fn raise(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Lower the flag and report whether it was raised
    pub fn take(&self) -> bool {
        self.0.swap(false, Ordering::AcqRel)
    }

    /// Whether the flag is currently raised (without lowering it)
    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

impl Default for DirtyFlag {
    fn default() -> Self {
        Self::new()
    }
}

/// One registered listener
struct Subscription {
    events: EventMask,
    flag: DirtyFlag,
}

/// Synchronous change-notification registry.
///
/// `notify` raises the flags of every subscription whose mask contains
/// the event; delivery happens inside the call, before it returns.
pub struct EventBus {
    listeners: SlotMap<ListenerKey, Subscription>,
    subscribes: u32,
    unsubscribes: u32,
}

impl EventBus {
    /// Create a bus with no listeners
    pub fn new() -> Self {
        Self {
            listeners: SlotMap::with_key(),
            subscribes: 0,
            unsubscribes: 0,
        }
    }

    /// Register `flag` for every event in `events`
    pub fn subscribe(&mut self, events: EventMask, flag: DirtyFlag) -> ListenerKey {
        self.subscribes += 1;
        self.listeners.insert(Subscription { events, flag })
    }

    /// Remove a subscription. Returns false if the key is stale.
    pub fn unsubscribe(&mut self, key: ListenerKey) -> bool {
        let removed = self.listeners.remove(key).is_some();
        if removed {
            self.unsubscribes += 1;
        }
        removed
    }

    /// Raise the flags of all subscriptions listening for `event`
    pub fn notify(&self, event: WorldEvent) {
        let mask = event.mask();
        for subscription in self.listeners.values() {
            if subscription.events.intersects(mask) {
                subscription.flag.raise();
            }
        }
    }

    /// Number of live subscriptions
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Lifetime subscribe count, for diagnostics
    pub fn total_subscribes(&self) -> u32 {
        self.subscribes
    }

    /// Lifetime unsubscribe count, for diagnostics
    pub fn total_unsubscribes(&self) -> u32 {
        self.unsubscribes
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod tests;
