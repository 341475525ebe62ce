//! Event Dispatcher
//!
//! Routes game events to the trigger processor registered for a player,
//! and to any observers listening on the side. One dispatcher is shared
//! by the whole engine (see [`crate::field::EngineContext`]).

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use super::event::{EventData, FieldEvent};
use super::processor::TriggerProcessor;
use crate::player::PlayerId;

/// A processor shared between the dispatcher and the field instance that owns it.
pub type SharedTriggerProcessor = Arc<Mutex<TriggerProcessor>>;

/// Observer notified of every dispatched event that names a player.
pub trait TriggerListener: Send + Sync {
    fn on_event(&self, event: FieldEvent, player: PlayerId, data: &EventData);
}

/// Listener backed by a closure.
pub struct FnListener<F>(pub F);

impl<F> TriggerListener for FnListener<F>
where
    F: Fn(FieldEvent, PlayerId, &EventData) + Send + Sync,
{
    fn on_event(&self, event: FieldEvent, player: PlayerId, data: &EventData) {
        (self.0)(event, player, data)
    }
}

#[derive(Default)]
pub struct TriggerEventDispatcher {
    processors: RwLock<HashMap<PlayerId, SharedTriggerProcessor>>,
    listeners: RwLock<Vec<Arc<dyn TriggerListener>>>,
}

static_assertions::assert_impl_all!(TriggerEventDispatcher: Send, Sync);

impl fmt::Debug for TriggerEventDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TriggerEventDispatcher")
            .field("processors", &self.processors.read().len())
            .field("listeners", &self.listeners.read().len())
            .finish()
    }
}

impl TriggerEventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `processor` as the target for `player`'s events. A previous
    /// registration for the same player is replaced and returned.
    pub fn register(&self, player: PlayerId, processor: SharedTriggerProcessor) -> Option<SharedTriggerProcessor> {
        log::debug!("trigger processor registered for {player}");
        self.processors.write().insert(player, processor)
    }

    pub fn unregister(&self, player: PlayerId) -> Option<SharedTriggerProcessor> {
        self.processors.write().remove(&player)
    }

    pub fn processor(&self, player: PlayerId) -> Option<SharedTriggerProcessor> {
        self.processors.read().get(&player).cloned()
    }

    pub fn is_registered(&self, player: PlayerId) -> bool {
        self.processors.read().contains_key(&player)
    }

    pub fn registered_count(&self) -> usize {
        self.processors.read().len()
    }

    pub fn add_listener(&self, listener: Arc<dyn TriggerListener>) {
        self.listeners.write().push(listener);
    }

    pub fn clear_listeners(&self) {
        self.listeners.write().clear();
    }

    /// Fire `event` for `player`. Returns whether a registered processor
    /// received it. Listeners are notified either way; an event without a
    /// player reaches nobody.
    pub fn dispatch(&self, event: FieldEvent, player: Option<PlayerId>, data: &EventData) -> bool {
        let Some(player) = player else {
            return false;
        };

        let delivered = match self.processor(player) {
            Some(processor) => {
                processor.lock().fire_event(event);
                true
            }
            None => false,
        };

        self.notify_listeners(event, player, data);
        delivered
    }

    /// Tell listeners about `event` without routing it to any processor.
    pub fn notify_listeners(&self, event: FieldEvent, player: PlayerId, data: &EventData) {
        // Clone out of the lock so callbacks can re-enter the dispatcher.
        let listeners: Vec<_> = self.listeners.read().iter().cloned().collect();
        for listener in listeners {
            listener.on_event(event, player, data);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trigger::config::{TriggerConfig, TriggerEffect};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn shared(rules: Vec<TriggerConfig>) -> SharedTriggerProcessor {
        Arc::new(Mutex::new(TriggerProcessor::new(rules)))
    }

    #[test]
    fn test_dispatch_reaches_registered_processor() {
        let dispatcher = TriggerEventDispatcher::new();
        let processor = shared(vec![
            TriggerConfig::builder(FieldEvent::PlayerDamage, TriggerEffect::Flash).build(),
        ]);
        dispatcher.register(PlayerId(1), Arc::clone(&processor));

        assert!(dispatcher.dispatch(FieldEvent::PlayerDamage, Some(PlayerId(1)), &EventData::amount(4.0)));
        assert_eq!(processor.lock().active_count(), 1);

        assert!(!dispatcher.dispatch(FieldEvent::PlayerDamage, Some(PlayerId(2)), &EventData::none()));
        assert!(!dispatcher.dispatch(FieldEvent::PlayerDamage, None, &EventData::none()));
        assert_eq!(processor.lock().active_count(), 1);
    }

    #[test]
    fn test_unregister() {
        let dispatcher = TriggerEventDispatcher::new();
        dispatcher.register(PlayerId(5), shared(Vec::new()));
        assert!(dispatcher.is_registered(PlayerId(5)));
        assert_eq!(dispatcher.registered_count(), 1);
        assert!(dispatcher.unregister(PlayerId(5)).is_some());
        assert!(!dispatcher.is_registered(PlayerId(5)));
        assert!(dispatcher.unregister(PlayerId(5)).is_none());
    }

    #[test]
    fn test_listeners_notified_without_processor() {
        let dispatcher = TriggerEventDispatcher::new();
        let seen = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&seen);
        dispatcher.add_listener(Arc::new(FnListener(move |event: FieldEvent, player: PlayerId, data: &EventData| {
            assert_eq!(event, FieldEvent::PlayerHeal);
            assert_eq!(player, PlayerId(3));
            assert_eq!(data.amount, 2.0);
            counter.fetch_add(1, Ordering::SeqCst);
        })));

        assert!(!dispatcher.dispatch(FieldEvent::PlayerHeal, Some(PlayerId(3)), &EventData::amount(2.0)));
        dispatcher.dispatch(FieldEvent::PlayerHeal, None, &EventData::amount(2.0));
        assert_eq!(seen.load(Ordering::SeqCst), 1);

        dispatcher.clear_listeners();
        dispatcher.dispatch(FieldEvent::PlayerHeal, Some(PlayerId(3)), &EventData::amount(2.0));
        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }
}
