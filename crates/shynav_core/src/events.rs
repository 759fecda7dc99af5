//! Page event dispatch
//!
//! Replaces ambient browser listener registration with an explicit
//! dispatcher: the host (window system, web runtime, test harness) feeds
//! page events in, handlers registered per event type consume them.
//!
//! Dispatch is single-threaded and serial - one handler invocation runs to
//! completion before the next begins, so handler-owned state never needs
//! synchronization beyond the handle it is shared through.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Event type identifier
pub type EventType = u32;

/// Common page event types
pub mod event_types {
    use super::EventType;

    /// Document finished loading and layout is measurable
    pub const PAGE_READY: EventType = 1;
    /// Document is being torn down
    pub const PAGE_UNLOAD: EventType = 2;
    /// Vertical scroll position changed
    pub const SCROLL: EventType = 10;
    /// Viewport was resized
    pub const RESIZE: EventType = 20;
}

/// A page event with associated data
#[derive(Clone, Debug)]
pub struct Event {
    pub event_type: EventType,
    pub data: EventData,
    pub propagation_stopped: bool,
}

/// Event-specific data
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EventData {
    /// Vertical scroll offset from the top of the document, logical pixels
    Scroll { top: f32 },
    /// New viewport dimensions in logical pixels
    Resize { width: f32, height: f32 },
    None,
}

impl Event {
    /// Create an event carrying the given payload
    pub fn new(event_type: EventType, data: EventData) -> Self {
        Self {
            event_type,
            data,
            propagation_stopped: false,
        }
    }

    /// Create a scroll event at the given vertical offset
    pub fn scroll(top: f32) -> Self {
        Self::new(event_types::SCROLL, EventData::Scroll { top })
    }

    /// Create a resize event for the given viewport size
    pub fn resize(width: f32, height: f32) -> Self {
        Self::new(event_types::RESIZE, EventData::Resize { width, height })
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }
}

/// Event handler function type
pub type EventHandler = Box<dyn Fn(&Event) + Send + Sync>;

/// Dispatches page events to registered handlers
///
/// Handlers are keyed by event type alone - there is a single page and a
/// single nav bar, so no per-target routing exists. Handlers run in
/// registration order and honor `stop_propagation`.
pub struct EventDispatcher {
    handlers: FxHashMap<EventType, SmallVec<[EventHandler; 2]>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self {
            handlers: FxHashMap::default(),
        }
    }

    /// Register a handler for an event type
    pub fn register<F>(&mut self, event_type: EventType, handler: F)
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        self.handlers
            .entry(event_type)
            .or_default()
            .push(Box::new(handler));
    }

    /// Check whether any handler is registered for an event type
    pub fn has_handlers(&self, event_type: EventType) -> bool {
        self.handlers
            .get(&event_type)
            .is_some_and(|h| !h.is_empty())
    }

    /// Dispatch an event to all registered handlers
    pub fn dispatch(&self, event: &mut Event) {
        let Some(handlers) = self.handlers.get(&event.event_type) else {
            tracing::trace!(event_type = event.event_type, "no handlers for event");
            return;
        };
        for handler in handlers {
            if event.propagation_stopped {
                break;
            }
            handler(event);
        }
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
