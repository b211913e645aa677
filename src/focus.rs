//! Focus configuration builder
//!
//! Combines a focus selection and an optional format selection with the
//! static catalogs into a fully annotated [`FocusConfiguration`]. This is the
//! lenient path of the pipeline: unknown focus or format ids never raise
//! (selection state can transiently reference ids mid-update), the builder
//! degrades to the supplied labels and default metadata instead. The
//! flattener is the strict counterpart.
//!
//! Focus validation is advisory only. `is_valid` is always true here; hard
//! errors exist only on the duration side.

use crate::catalog::{default_metadata, find_format, FocusKind, FormatOption};
use crate::models::{
    ConfigurationKind, FocusConfiguration, FocusValidation, IntensityLevel,
};
use tracing::debug;

/// Focus configuration assembly and validation
pub struct FocusBuilder;

impl FocusBuilder {
    /// Build a focus configuration from raw selection ids and labels
    ///
    /// Unknown focus ids fall back to the supplied labels with default
    /// metadata; a format id that does not belong to the focus is treated as
    /// no format.
    pub fn build_focus_configuration(
        focus: &str,
        focus_label: &str,
        format: Option<&str>,
        format_label: Option<&str>,
    ) -> FocusConfiguration {
        let kind = FocusKind::from_id(focus);
        if kind.is_none() {
            debug!(focus, "focus id not in catalog, using fallback metadata");
        }

        let resolved_format = Self::resolve_format(kind, format);
        let resolved_format_label = resolved_format.map(|f| {
            format_label
                .filter(|l| !l.is_empty())
                .unwrap_or(f.label)
                .to_string()
        });

        let label = Self::compose_label(kind, focus, focus_label, resolved_format_label.as_deref());
        let description = Self::generate_smart_description(kind, focus_label, resolved_format);

        let configuration = if resolved_format.is_some() {
            ConfigurationKind::FocusWithFormat
        } else {
            ConfigurationKind::FocusOnly
        };

        let value = match resolved_format {
            Some(f) => format!("{}_{}", focus, f.id),
            None => focus.to_string(),
        };

        let metadata = kind.map(|k| k.metadata()).unwrap_or_else(default_metadata);
        let validation = Self::validate_focus_configuration(
            focus,
            resolved_format.map(|f| f.id),
            None,
        );

        FocusConfiguration {
            selected: true,
            focus: focus.to_string(),
            focus_label: focus_label.to_string(),
            format: resolved_format.map(|f| f.id.to_string()),
            format_label: resolved_format_label,
            label,
            value,
            description,
            configuration,
            metadata,
            validation,
        }
    }

    /// Advisory validation of a focus/format/duration combination
    ///
    /// Never blocks: `is_valid` is always true, the strings are for display.
    pub fn validate_focus_configuration(
        focus: &str,
        format: Option<&str>,
        selected_duration: Option<u32>,
    ) -> FocusValidation {
        let mut warnings = Vec::new();
        let mut recommendations = Vec::new();

        let kind = FocusKind::from_id(focus);

        if let (Some(kind), Some(duration)) = (kind, selected_duration) {
            let compatible = kind.duration_compatibility();
            if !compatible.contains(&duration) {
                let durations: Vec<String> =
                    compatible.iter().map(|d| d.to_string()).collect();
                warnings.push(format!(
                    "{} works best with {} minute sessions",
                    kind.label(),
                    durations.join("/")
                ));
            }
        }

        if let Some(format) = Self::resolve_format(kind, format) {
            if !format.beginner_friendly {
                recommendations.push(format!(
                    "Ensure proper form and experience before attempting {}",
                    format.label
                ));
            }
            if let Some(duration) = selected_duration {
                if duration < 30 && !format.time_efficient {
                    warnings.push(format!(
                        "{} can be hard to fit into sessions under 30 minutes",
                        format.label
                    ));
                }
            }
            if let Some(kind) = kind {
                if format.intensity == IntensityLevel::High
                    && kind.intensity() == IntensityLevel::Low
                {
                    recommendations.push(
                        "This format is more intense than the focus suggests; consider current energy levels"
                            .to_string(),
                    );
                }
            }
        }

        FocusValidation {
            is_valid: true,
            warnings,
            recommendations,
        }
    }

    fn resolve_format(
        kind: Option<FocusKind>,
        format: Option<&str>,
    ) -> Option<&'static FormatOption> {
        let kind = kind?;
        let id = format.filter(|f| !f.is_empty())?;
        let resolved = find_format(kind, id);
        if resolved.is_none() {
            debug!(focus = kind.id(), format = id, "format not in focus catalog, ignoring");
        }
        resolved
    }

    fn compose_label(
        kind: Option<FocusKind>,
        focus: &str,
        focus_label: &str,
        format_label: Option<&str>,
    ) -> String {
        let mut parts = Vec::new();
        if !focus_label.is_empty() {
            parts.push(focus_label);
        }
        if let Some(format_label) = format_label {
            parts.push(format_label);
        }

        let label = parts.join(", ");
        if label.is_empty() {
            return kind.map(|k| k.label().to_string()).unwrap_or_else(|| focus.to_string());
        }
        label
    }

    fn generate_smart_description(
        kind: Option<FocusKind>,
        focus_label: &str,
        format: Option<&'static FormatOption>,
    ) -> String {
        let mut description = kind
            .map(|k| k.description().to_string())
            .unwrap_or_else(|| focus_label.to_string());

        if let Some(format) = format {
            description.push_str(" using ");
            description.push_str(&format.description.to_lowercase());
        }
        description
    }
}

/// Caller-held selection state for the focus selection flow
///
/// The builder holds no authoritative state: every transition returns the new
/// selection (or `None` for "cleared") for the caller to store and round-trip
/// back in. Selecting the current focus again toggles it off; selecting a
/// different focus clears any format; selecting the current format again
/// toggles the format off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusSelection {
    pub focus: String,
    pub focus_label: String,
    pub format: Option<String>,
    pub format_label: Option<String>,
}

impl FocusSelection {
    pub fn new(focus: &str, focus_label: &str) -> Self {
        Self {
            focus: focus.to_string(),
            focus_label: focus_label.to_string(),
            format: None,
            format_label: None,
        }
    }

    /// Apply a focus pick to the current selection
    pub fn select_focus(
        current: Option<&FocusSelection>,
        focus: &str,
        focus_label: &str,
    ) -> Option<FocusSelection> {
        match current {
            Some(selection) if selection.focus == focus => None, // toggle off
            _ => Some(FocusSelection::new(focus, focus_label)),
        }
    }

    /// Apply a format pick to the current selection
    ///
    /// A format cannot exist without a focus; with no current selection this
    /// stays cleared.
    pub fn select_format(
        current: Option<&FocusSelection>,
        format: &str,
        format_label: &str,
    ) -> Option<FocusSelection> {
        let selection = current?;
        let mut next = selection.clone();
        if selection.format.as_deref() == Some(format) {
            next.format = None;
            next.format_label = None;
        } else {
            next.format = Some(format.to_string());
            next.format_label = Some(format_label.to_string());
        }
        Some(next)
    }

    /// Build the configuration for the current selection
    pub fn build(&self) -> FocusConfiguration {
        FocusBuilder::build_focus_configuration(
            &self.focus,
            &self.focus_label,
            self.format.as_deref(),
            self.format_label.as_deref(),
        )
    }
}
