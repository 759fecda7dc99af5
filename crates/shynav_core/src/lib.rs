//! shynav core runtime
//!
//! This crate provides the host-independent primitives for the shynav
//! auto-hiding navigation bar:
//!
//! - **Event Dispatch**: explicit page-event plumbing (scroll, resize) so the
//!   decision logic never touches a real browser or window system
//! - **Nav State Machine**: the three-state `Normal` / `Fixed` /
//!   `FixedVisible` machine that drives the bar's presentation flags
//!
//! # Example
//!
//! ```rust
//! use shynav_core::state::{nav_events, NavState, StateTransitions};
//!
//! let mut state = NavState::Normal;
//!
//! // Scrolling down past the header pins the bar (still hidden).
//! if let Some(next) = state.on_event(nav_events::DOWN_PAST_HEADER) {
//!     state = next;
//! }
//! assert!(state.is_fixed());
//! assert!(!state.is_visible());
//!
//! // Scrolling back up reveals it while it stays pinned.
//! if let Some(next) = state.on_event(nav_events::UP) {
//!     state = next;
//! }
//! assert!(state.flags().visible);
//! ```

pub mod events;
pub mod state;

pub use events::{Event, EventData, EventDispatcher, EventType};
pub use state::{NavFlags, NavState, StateTransitions};
