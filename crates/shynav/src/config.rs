//! Configuration for the nav controller

/// Minimum viewport width, in logical pixels, for the hide/reveal behavior
///
/// Matches the desktop layout breakpoint: below this the site renders its
/// narrow navigation and the bar stays static.
pub const DEFAULT_MIN_VIEWPORT_WIDTH: f32 = 1170.0;

/// Configuration for scroll-nav behavior
///
/// The width gate is checked exactly once, when the controller is
/// initialized. Resizing the viewport afterwards does not re-evaluate it
/// for the lifetime of the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollNavConfig {
    /// Viewport width must exceed this for the controller to activate
    pub min_viewport_width: f32,
}

impl Default for ScrollNavConfig {
    fn default() -> Self {
        Self {
            min_viewport_width: DEFAULT_MIN_VIEWPORT_WIDTH,
        }
    }
}

impl ScrollNavConfig {
    /// Create config that activates on any viewport width
    pub fn any_viewport() -> Self {
        Self {
            min_viewport_width: 0.0,
        }
    }

    /// Create config with a custom width gate
    pub fn with_min_width(min_viewport_width: f32) -> Self {
        Self { min_viewport_width }
    }
}
