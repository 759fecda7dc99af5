//! Auto-hiding navigation bar controller
//!
//! Implements the classic "shy header" behavior: the nav bar hides while the
//! user scrolls down and slides back in while scrolling up, pinning itself
//! to the viewport top once the page has scrolled past the header's own
//! height. The decision logic is a pure state transition over scroll
//! offsets, so it runs identically under a real host event loop or a
//! scripted trace in tests.
//!
//! # Example
//!
//! ```rust
//! use shynav::prelude::*;
//!
//! // Viewport is wide enough, header measured at 96px.
//! let mut nav = ScrollNavController::initialize(1280.0, 96.0).expect("wide viewport");
//!
//! // Scroll down past the header: the bar pins, still hidden.
//! let flags = nav.on_scroll(300.0);
//! assert!(flags.fixed && !flags.visible);
//!
//! // Scroll up a little: the pinned bar slides into view.
//! let flags = nav.on_scroll(260.0);
//! assert!(flags.fixed && flags.visible);
//! assert_eq!(NavRenderInfo::from_flags(flags).class_attr(), "is-fixed is-visible");
//! ```
//!
//! # Features
//!
//! - **Width gate**: inert on narrow viewports (mobile layouts keep the bar
//!   static); the gate is evaluated once, at initialization
//! - **Host-independent**: drive it from any event source via
//!   [`controller::attach`] or call [`ScrollNavController::on_scroll`]
//!   directly
//! - **Trace replay**: JSON scroll traces for headless diagnostics

pub mod config;
pub mod controller;
pub mod render;
pub mod replay;

pub use config::{ScrollNavConfig, DEFAULT_MIN_VIEWPORT_WIDTH};
pub use controller::{attach, shared, ScrollNavController, SharedNavController};
pub use render::{NavRenderInfo, CLASS_FIXED, CLASS_VISIBLE};
pub use replay::{ScrollTrace, TraceError, TraceStep};

/// Commonly used types for driving a nav controller
pub mod prelude {
    pub use crate::config::ScrollNavConfig;
    pub use crate::controller::{attach, shared, ScrollNavController, SharedNavController};
    pub use crate::render::NavRenderInfo;
    pub use crate::replay::ScrollTrace;
    pub use shynav_core::state::{NavFlags, NavState};
}
