//! Presentation bridge
//!
//! The controller's output is two booleans; how they look is a stylesheet
//! concern. This module carries the class-name contract for DOM-like hosts
//! and a small render-info struct for anything else (view-model bindings,
//! immediate-mode UIs).

use shynav_core::state::NavFlags;

/// Class applied while the bar is pinned to the viewport top
pub const CLASS_FIXED: &str = "is-fixed";

/// Class applied while the pinned bar is revealed
pub const CLASS_VISIBLE: &str = "is-visible";

/// Information about nav presentation for the style layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavRenderInfo {
    /// Whether to pin the bar to the viewport top
    pub fixed: bool,
    /// Whether to reveal the pinned bar
    pub visible: bool,
}

impl NavRenderInfo {
    /// Build render info from the machine's output flags
    pub fn from_flags(flags: NavFlags) -> Self {
        Self {
            fixed: flags.fixed,
            visible: flags.visible,
        }
    }

    /// The active class names, in stylesheet order
    pub fn class_list(&self) -> Vec<&'static str> {
        let mut classes = Vec::with_capacity(2);
        if self.fixed {
            classes.push(CLASS_FIXED);
        }
        if self.visible {
            classes.push(CLASS_VISIBLE);
        }
        classes
    }

    /// The class attribute value for a DOM host (`""`, `"is-fixed"`, ...)
    pub fn class_attr(&self) -> String {
        self.class_list().join(" ")
    }
}

impl From<NavFlags> for NavRenderInfo {
    fn from(flags: NavFlags) -> Self {
        Self::from_flags(flags)
    }
}
