//! Deferred event queue for decoupled widget -> app communication.
//!
//! Widgets never mutate app state directly: they push events into the queue
//! (usually via an [`ActionQueue`](crate::widgets::actions::ActionQueue)) and
//! the main loop drains everything once per frame with [`EventBus::poll`].
//! Queue order is FIFO within a frame.

use std::any::Any;
use std::sync::{Arc, Mutex};

use log::warn;

/// Maximum queued events before the oldest half is evicted.
const MAX_QUEUE_SIZE: usize = 1000;

/// Marker trait for events. Blanket-implemented for any sendable static type.
pub trait Event: Any + Send + Sync + 'static {
    fn as_any(&self) -> &dyn Any;
    fn type_name(&self) -> &'static str;
}

impl<T: Any + Send + Sync + 'static> Event for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

/// Boxed event for queue storage.
pub type BoxedEvent = Box<dyn Event>;

/// FIFO event queue drained once per frame by the main loop.
#[derive(Clone, Default)]
pub struct EventBus {
    queue: Arc<Mutex<Vec<BoxedEvent>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an event for the next [`poll`](Self::poll).
    pub fn emit<E: Event>(&self, event: E) {
        self.push(Box::new(event));
    }

    /// Queue an already-boxed event (dynamic dispatch path).
    pub fn emit_boxed(&self, event: BoxedEvent) {
        self.push(event);
    }

    fn push(&self, event: BoxedEvent) {
        let mut queue = self.queue.lock().unwrap_or_else(|e| e.into_inner());
        if queue.len() >= MAX_QUEUE_SIZE {
            let evict = queue.len() / 2;
            warn!("Event queue full ({} events), evicting oldest {}", queue.len(), evict);
            queue.drain(0..evict);
        }
        queue.push(event);
    }

    /// Take all queued events, leaving the queue empty.
    pub fn poll(&self) -> Vec<BoxedEvent> {
        std::mem::take(&mut *self.queue.lock().unwrap_or_else(|e| e.into_inner()))
    }

    pub fn queue_len(&self) -> usize {
        self.queue.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

/// Downcast a queued event to a concrete type.
///
/// Must deref to `dyn Event` before `as_any()`: the blanket impl also covers
/// `Box<dyn Event>` itself, and calling through the box would wrap the wrong
/// type and make every downcast fail.
#[inline]
pub fn downcast_event<E: Event>(event: &BoxedEvent) -> Option<&E> {
    (**event).as_any().downcast_ref::<E>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    struct TestEvent {
        value: i32,
    }

    #[derive(Clone, Debug)]
    struct OtherEvent;

    #[test]
    fn test_emit_queues_for_poll() {
        let bus = EventBus::new();

        bus.emit(TestEvent { value: 1 });
        bus.emit(TestEvent { value: 2 });
        bus.emit(OtherEvent);

        let events = bus.poll();
        assert_eq!(events.len(), 3);

        // Queue is empty after poll
        assert_eq!(bus.poll().len(), 0);
    }

    #[test]
    fn test_poll_preserves_fifo_order() {
        let bus = EventBus::new();
        for i in 0..5 {
            bus.emit(TestEvent { value: i });
        }

        let values: Vec<i32> = bus
            .poll()
            .iter()
            .filter_map(|e| downcast_event::<TestEvent>(e).map(|e| e.value))
            .collect();
        assert_eq!(values, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_downcast_distinguishes_types() {
        let bus = EventBus::new();
        bus.emit(TestEvent { value: 42 });
        bus.emit(OtherEvent);

        let events = bus.poll();
        assert!(downcast_event::<TestEvent>(&events[0]).is_some());
        assert!(downcast_event::<OtherEvent>(&events[0]).is_none());
        assert!(downcast_event::<OtherEvent>(&events[1]).is_some());
    }

    #[test]
    fn test_clone_shares_queue() {
        let bus = EventBus::new();
        let handle = bus.clone();

        handle.emit(TestEvent { value: 7 });
        assert_eq!(bus.queue_len(), 1);
        assert_eq!(bus.poll().len(), 1);
        assert_eq!(handle.queue_len(), 0);
    }

    #[test]
    fn test_eviction_keeps_newest() {
        let bus = EventBus::new();
        for i in 0..(MAX_QUEUE_SIZE as i32 + 10) {
            bus.emit(TestEvent { value: i });
        }

        let events = bus.poll();
        assert!(events.len() < MAX_QUEUE_SIZE + 10);
        // The most recent event survives eviction
        let last = downcast_event::<TestEvent>(events.last().unwrap()).unwrap();
        assert_eq!(last.value, MAX_QUEUE_SIZE as i32 + 9);
    }
}
