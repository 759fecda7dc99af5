//! Nav bar state machine
//!
//! The auto-hiding nav bar is a three-state machine over two presentation
//! flags:
//!
//! - `Normal` - in document flow, neither flag set
//! - `Fixed` - pinned to the viewport top, slid out of view
//! - `FixedVisible` - pinned and revealed (upward scroll)
//!
//! `(fixed = false, visible = true)` is unreachable: no transition sets the
//! visible flag without the bar already being pinned. The controller layer
//! classifies raw scroll offsets into the gesture events in [`nav_events`]
//! and feeds them through [`StateTransitions::on_event`].

use crate::events::EventType;

/// Classified scroll gestures that drive nav state transitions
///
/// The controller derives exactly one of these per scroll event from the
/// current offset, the previous offset and the measured header height.
pub mod nav_events {
    use super::EventType;

    /// Scrolled up, still below the top edge (`current_top > 0`)
    pub const UP: EventType = 1;
    /// Scrolled up and reached (or overshot) the top edge
    pub const UP_TO_TOP: EventType = 2;
    /// Scrolled down, not yet past the header height
    pub const DOWN: EventType = 3;
    /// Scrolled down past the header height
    pub const DOWN_PAST_HEADER: EventType = 4;
}

/// Trait for state types that transition on classified events
///
/// Implement this on a state enum to define how events cause state changes.
/// Returning `None` means the event does not transition the current state.
pub trait StateTransitions:
    Clone + Copy + PartialEq + Eq + Send + Sync + std::fmt::Debug + 'static
{
    /// Handle an event and return the new state, or None if no transition
    fn on_event(&self, event: EventType) -> Option<Self>;
}

/// Presentation flags the style layer consumes
///
/// The machine's only observable output. An external stylesheet (or any
/// other presentation layer) maps these to the pinned/slide appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavFlags {
    /// Bar is pinned to the viewport top regardless of scroll position
    pub fixed: bool,
    /// Bar is revealed while pinned
    pub visible: bool,
}

/// Nav bar presentation state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NavState {
    /// In document flow at the top of the page
    #[default]
    Normal,
    /// Pinned to the viewport top, hidden
    Fixed,
    /// Pinned to the viewport top, revealed
    FixedVisible,
}

impl NavState {
    /// Returns true if the bar is pinned to the viewport top
    pub fn is_fixed(&self) -> bool {
        matches!(self, NavState::Fixed | NavState::FixedVisible)
    }

    /// Returns true if the bar is revealed while pinned
    pub fn is_visible(&self) -> bool {
        matches!(self, NavState::FixedVisible)
    }

    /// The presentation flags for this state
    pub fn flags(&self) -> NavFlags {
        NavFlags {
            fixed: self.is_fixed(),
            visible: self.is_visible(),
        }
    }
}

impl StateTransitions for NavState {
    fn on_event(&self, event: EventType) -> Option<Self> {
        use nav_events::*;
        match (self, event) {
            // Upward scroll away from the top reveals a pinned bar.
            (NavState::Fixed, UP) => Some(NavState::FixedVisible),
            // Reaching the top returns the bar to document flow.
            (NavState::Fixed, UP_TO_TOP) => Some(NavState::Normal),
            (NavState::FixedVisible, UP_TO_TOP) => Some(NavState::Normal),
            // Downward scroll hides the bar; past the header it pins.
            (NavState::Normal, DOWN_PAST_HEADER) => Some(NavState::Fixed),
            (NavState::FixedVisible, DOWN) => Some(NavState::Fixed),
            (NavState::FixedVisible, DOWN_PAST_HEADER) => Some(NavState::Fixed),
            _ => None,
        }
    }
}
