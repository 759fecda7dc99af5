//! Scroll-nav controller
//!
//! Owns the one piece of mutable scroll state - the previously observed
//! offset - and turns raw offsets into classified gesture events for the
//! nav state machine. The header height is measured once at initialization
//! and acts as the pin threshold from then on.

use std::sync::{Arc, Mutex};

use shynav_core::events::{event_types, EventData, EventDispatcher};
use shynav_core::state::{nav_events, NavFlags, NavState, StateTransitions};
use shynav_core::EventType;

use crate::config::ScrollNavConfig;

/// Controller for the auto-hiding nav bar
///
/// Created through [`ScrollNavController::initialize`]; a `None` result
/// means the viewport failed the width gate and the behavior is disabled
/// for the page's lifetime.
#[derive(Debug)]
pub struct ScrollNavController {
    /// Rendered header height at initialization, the pin threshold
    header_height: f32,
    /// Offset observed at the end of the last scroll event
    previous_top: f32,
    /// Current presentation state
    state: NavState,
}

impl ScrollNavController {
    /// Create a controller with the default width gate
    ///
    /// `viewport_width` is the viewport width at page-ready,
    /// `header_height` the nav bar's rendered height measured once.
    /// Returns `None` when the viewport is too narrow.
    pub fn initialize(viewport_width: f32, header_height: f32) -> Option<Self> {
        Self::initialize_with_config(viewport_width, header_height, ScrollNavConfig::default())
    }

    /// Create a controller with a custom config
    pub fn initialize_with_config(
        viewport_width: f32,
        header_height: f32,
        config: ScrollNavConfig,
    ) -> Option<Self> {
        if viewport_width <= config.min_viewport_width {
            tracing::debug!(
                viewport_width,
                min_viewport_width = config.min_viewport_width,
                "viewport below width gate, nav controller disabled"
            );
            return None;
        }
        Some(Self {
            header_height,
            previous_top: 0.0,
            state: NavState::default(),
        })
    }

    /// The pin threshold measured at initialization
    pub fn header_height(&self) -> f32 {
        self.header_height
    }

    /// Offset observed at the end of the last scroll event
    pub fn previous_top(&self) -> f32 {
        self.previous_top
    }

    /// Current presentation state
    pub fn state(&self) -> NavState {
        self.state
    }

    /// Current presentation flags
    pub fn flags(&self) -> NavFlags {
        self.state.flags()
    }

    /// Classify an offset against the previous one into a gesture event
    ///
    /// Equal offsets produce no event: the scroll position did not move, so
    /// no flag may change.
    fn classify(&self, current_top: f32) -> Option<EventType> {
        if current_top < self.previous_top {
            Some(if current_top > 0.0 {
                nav_events::UP
            } else {
                nav_events::UP_TO_TOP
            })
        } else if current_top > self.previous_top {
            Some(if current_top > self.header_height {
                nav_events::DOWN_PAST_HEADER
            } else {
                nav_events::DOWN
            })
        } else {
            None
        }
    }

    /// Process one scroll event and return the resulting flags
    ///
    /// `previous_top` is updated unconditionally, whichever branch ran.
    pub fn on_scroll(&mut self, current_top: f32) -> NavFlags {
        if let Some(event) = self.classify(current_top) {
            if let Some(new_state) = self.state.on_event(event) {
                tracing::trace!(
                    current_top,
                    previous_top = self.previous_top,
                    from = ?self.state,
                    to = ?new_state,
                    "nav state transition"
                );
                self.state = new_state;
            }
        }
        self.previous_top = current_top;
        self.state.flags()
    }
}

/// Shared handle to a nav controller for event-loop access
pub type SharedNavController = Arc<Mutex<ScrollNavController>>;

/// Wrap a controller in a shared handle
pub fn shared(controller: ScrollNavController) -> SharedNavController {
    Arc::new(Mutex::new(controller))
}

/// Register a controller on a dispatcher's scroll events
///
/// The host keeps dispatching; the controller updates itself on every
/// `SCROLL` event. The listener stays registered for the dispatcher's
/// lifetime - teardown happens implicitly with the page.
pub fn attach(dispatcher: &mut EventDispatcher, controller: &SharedNavController) {
    let controller = Arc::clone(controller);
    dispatcher.register(event_types::SCROLL, move |event| {
        if let EventData::Scroll { top } = event.data {
            controller.lock().unwrap().on_scroll(top);
        }
    });
}
