// Library interface for PlanRS modules
// This allows integration tests to access the core functionality

pub mod catalog;
pub mod config;
pub mod duration;
pub mod error;
pub mod export;
pub mod flatten;
pub mod focus;
pub mod logging;
pub mod models;
pub mod tracking;

// Re-export commonly used types for convenience
pub use models::*;
pub use catalog::{FocusKind, FormatOption, DurationPreset, ALL_FOCUS_KINDS, DURATION_PRESETS};
pub use duration::DurationCalculator;
pub use focus::{FocusBuilder, FocusSelection};
pub use flatten::{
    FlattenError, FlattenedFocusRecord, FocusFlattener, FocusInput, FLATTEN_SCHEMA_VERSION,
};
pub use export::{ExportError, ExportFormat};
pub use error::{PlanRsError, Result};
pub use logging::{LogConfig, LogFormat, LogLevel};
pub use tracking::{LogTracker, NoopTracker, SelectionTracker, TrackingMode};
