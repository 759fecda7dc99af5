//! Scripted scroll traces for headless diagnostics
//!
//! A trace is a JSON list of scroll steps fed through a controller without
//! any host event loop. Integration tests and the demo use this to assert
//! the flag sequence a gesture produces.
//!
//! ```json
//! { "steps": [
//!     { "type": "scroll_to", "top": 150.0 },
//!     { "type": "repeat", "top": 150.0, "count": 3 },
//!     { "type": "scroll_to", "top": 0.0 }
//! ] }
//! ```

use serde::Deserialize;
use thiserror::Error;

use shynav_core::state::NavFlags;

use crate::controller::ScrollNavController;

/// Error parsing a scroll trace
#[derive(Debug, Error)]
pub enum TraceError {
    #[error("invalid scroll trace: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One step of a scripted scroll trace
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TraceStep {
    /// Deliver a scroll event at the given offset
    ScrollTo { top: f32 },
    /// Deliver the same offset `count` times (stationary no-op events)
    Repeat { top: f32, count: u32 },
}

/// Sequence of scroll events to replay against a controller
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScrollTrace {
    pub steps: Vec<TraceStep>,
}

impl ScrollTrace {
    /// Parse a trace from JSON text
    pub fn from_json(input: &str) -> Result<Self, TraceError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Build a trace straight from offsets, one `ScrollTo` per value
    pub fn from_offsets<I: IntoIterator<Item = f32>>(offsets: I) -> Self {
        Self {
            steps: offsets
                .into_iter()
                .map(|top| TraceStep::ScrollTo { top })
                .collect(),
        }
    }

    /// Number of scroll events this trace delivers
    pub fn event_count(&self) -> usize {
        self.steps
            .iter()
            .map(|step| match step {
                TraceStep::ScrollTo { .. } => 1,
                TraceStep::Repeat { count, .. } => *count as usize,
            })
            .sum()
    }

    /// Replay every step through the controller
    ///
    /// Returns the flags observed after each delivered event, in order.
    pub fn run(&self, controller: &mut ScrollNavController) -> Vec<NavFlags> {
        let mut observed = Vec::with_capacity(self.event_count());
        for step in &self.steps {
            match *step {
                TraceStep::ScrollTo { top } => observed.push(controller.on_scroll(top)),
                TraceStep::Repeat { top, count } => {
                    for _ in 0..count {
                        observed.push(controller.on_scroll(top));
                    }
                }
            }
        }
        tracing::debug!(
            events = observed.len(),
            final_state = ?controller.state(),
            "scroll trace replayed"
        );
        observed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trace_from_json() {
        let trace = ScrollTrace::from_json(
            r#"{ "steps": [
                { "type": "scroll_to", "top": 150.0 },
                { "type": "repeat", "top": 150.0, "count": 2 }
            ] }"#,
        )
        .unwrap();
        assert_eq!(trace.steps.len(), 2);
        assert_eq!(trace.event_count(), 3);
    }

    #[test]
    fn test_reject_malformed_trace() {
        let err = ScrollTrace::from_json(r#"{ "steps": [ { "type": "warp" } ] }"#).unwrap_err();
        assert!(matches!(err, TraceError::Parse(_)));
    }

    #[test]
    fn test_run_replays_each_event() {
        let mut nav = ScrollNavController::initialize(1280.0, 100.0).unwrap();
        let trace = ScrollTrace::from_offsets([150.0, 100.0, 0.0]);
        let observed = trace.run(&mut nav);

        assert_eq!(observed.len(), 3);
        assert!(observed[0].fixed && !observed[0].visible);
        assert!(observed[1].fixed && observed[1].visible);
        assert_eq!(observed[2], NavFlags::default());
    }
}
