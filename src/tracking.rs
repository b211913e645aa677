//! Selection tracking capability
//!
//! Adapters report every selection change to an analytics sink through this
//! trait. Tracking is fire-and-forget: implementations must never propagate
//! failures back into the caller. The derivation core (builder, calculator,
//! flattener) never tracks; only adapter layers do.

use serde_json::Value;
use tracing::debug;

/// How detailed the surrounding selection flow is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingMode {
    Quick,
    Detailed,
}

impl TrackingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackingMode::Quick => "quick",
            TrackingMode::Detailed => "detailed",
        }
    }
}

/// Analytics sink for selection changes
pub trait SelectionTracker {
    /// Record that a selection field changed. Must not fail.
    fn track_selection(&self, field_key: &str, value: &Value, mode: TrackingMode);
}

/// Tracker that writes selections to the tracing log
#[derive(Debug, Default)]
pub struct LogTracker;

impl SelectionTracker for LogTracker {
    fn track_selection(&self, field_key: &str, value: &Value, mode: TrackingMode) {
        debug!(field = field_key, %value, mode = mode.as_str(), "selection tracked");
    }
}

/// Tracker that discards everything (for tests and headless use)
#[derive(Debug, Default)]
pub struct NoopTracker;

impl SelectionTracker for NoopTracker {
    fn track_selection(&self, _field_key: &str, _value: &Value, _mode: TrackingMode) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_trackers_accept_any_value() {
        let trackers: [&dyn SelectionTracker; 2] = [&LogTracker, &NoopTracker];
        for tracker in trackers {
            tracker.track_selection("focus", &json!("hiit"), TrackingMode::Quick);
            tracker.track_selection(
                "duration",
                &json!({"total": 45, "warm_up": 5}),
                TrackingMode::Detailed,
            );
        }
    }
}
