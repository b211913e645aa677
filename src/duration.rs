//! Duration and session-structure calculations
//!
//! Pure functions mapping a session length plus warm-up/cool-down selections
//! into a validated duration configuration. Validation distinguishes hard
//! errors (working time collapses below five minutes, structure consumes the
//! whole session) from advisory warnings; both are returned as data, never as
//! `Err`.
//!
//! ## Time allocation model
//! - Working time: `total - warm_up - cool_down`, floored at 5 minutes
//! - Structure share: warm-up plus cool-down as a percentage of total
//! - Session efficiency: working time as a percentage of total, rated
//!   excellent (>=85), good (>=70), moderate (>=50) or poor

use crate::catalog::find_duration_preset;
use crate::models::{
    DurationConfiguration, DurationStructure, DurationValidation, EfficiencyRating,
    SegmentSelection, SessionEfficiency, StructureSegment, StructureSuggestion,
};

/// Minimum minutes of working time a session must keep
pub const MIN_WORKING_TIME: u32 = 5;

/// Duration calculation utilities
pub struct DurationCalculator;

impl DurationCalculator {
    /// Minutes left for actual work after warm-up and cool-down, floored at 5
    pub fn calculate_working_time(total: u32, warm_up: u32, cool_down: u32) -> u32 {
        let working = i64::from(total) - i64::from(warm_up) - i64::from(cool_down);
        working.max(i64::from(MIN_WORKING_TIME)) as u32
    }

    /// Validate a time allocation
    ///
    /// Errors block saving; warnings are independent of each other and of the
    /// errors, so several can fire for one allocation.
    pub fn validate_time_allocation(total: u32, warm_up: u32, cool_down: u32) -> DurationValidation {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        if total == 0 {
            return DurationValidation {
                is_valid: false,
                warnings,
                errors: vec!["Session duration must be greater than zero".to_string()],
            };
        }

        let structure = warm_up + cool_down;
        let raw_working = i64::from(total) - i64::from(structure);
        let working = Self::calculate_working_time(total, warm_up, cool_down);
        let structure_percentage = f64::from(structure) / f64::from(total) * 100.0;
        let working_share = f64::from(working) / f64::from(total) * 100.0;

        if raw_working < i64::from(MIN_WORKING_TIME) {
            errors.push(format!(
                "Only {} minutes remain for actual work; at least {} are needed",
                raw_working.max(0),
                MIN_WORKING_TIME
            ));
        }
        if structure >= total {
            errors.push(format!(
                "Warm-up and cool-down ({} min) leave no time in a {} minute session",
                structure, total
            ));
        }

        if structure_percentage > 60.0 {
            warnings.push(format!(
                "Warm-up and cool-down take {}% of the session",
                structure_percentage.round() as u32
            ));
        }
        if total <= 20 && (warm_up > 5 || cool_down > 5) {
            warnings.push(
                "Warm-up or cool-down is long for a session of 20 minutes or less".to_string(),
            );
        }
        if total >= 60 && warm_up < 5 {
            warnings.push(
                "Sessions of an hour or more benefit from at least 5 minutes of warm-up"
                    .to_string(),
            );
        }
        if total >= 90 && cool_down < 8 {
            warnings.push(
                "Extended sessions benefit from 8 or more minutes of cool-down".to_string(),
            );
        }
        if working_share < 50.0 {
            warnings.push("Less than half of the session is working time".to_string());
        }
        if working_share > 95.0 {
            warnings.push(
                "Almost the entire session is working time; consider adding structure"
                    .to_string(),
            );
        }

        DurationValidation {
            is_valid: errors.is_empty(),
            warnings,
            errors,
        }
    }

    /// Rate how much of a session is actual work
    pub fn calculate_session_efficiency(total: u32, working: u32) -> SessionEfficiency {
        let percentage = if total == 0 {
            0
        } else {
            (f64::from(working) / f64::from(total) * 100.0).round() as u32
        };
        let rating = EfficiencyRating::from_percentage(percentage);
        let recommendation = match rating {
            EfficiencyRating::Excellent => {
                "Great balance of working time and session structure".to_string()
            }
            EfficiencyRating::Good => {
                "Solid session structure with room to tighten transitions".to_string()
            }
            EfficiencyRating::Moderate => {
                "Consider trimming warm-up or cool-down to protect working time".to_string()
            }
            EfficiencyRating::Poor => {
                "Structure time dominates this session; shorten warm-up and cool-down"
                    .to_string()
            }
        };

        SessionEfficiency {
            percentage,
            rating,
            recommendation,
        }
    }

    /// Suggest a warm-up/cool-down split for a session length
    ///
    /// Step function over five duration bands; values are fixed per band.
    pub fn generate_optimal_suggestions(total_duration: u32) -> StructureSuggestion {
        let (warm_up, cool_down, reasoning) = match total_duration {
            d if d <= 10 => (
                1,
                2,
                "Very short session: a brief ramp-up and quick reset keep almost all time for work",
            ),
            d if d <= 20 => (
                3,
                3,
                "Short session: three minutes each way prepares the body without eating the workout",
            ),
            d if d <= 45 => (
                5,
                5,
                "Standard session: five minutes each way balances readiness and working time",
            ),
            d if d <= 75 => (
                8,
                7,
                "Longer session: a full warm-up and an unhurried cool-down support higher workloads",
            ),
            _ => (
                12,
                10,
                "Extended session: thorough preparation and recovery protect quality late in the workout",
            ),
        };

        StructureSuggestion {
            warm_up,
            cool_down,
            reasoning: reasoning.to_string(),
        }
    }

    /// Classify a selection shape from which segments are included
    pub fn determine_structure(warm_up_included: bool, cool_down_included: bool) -> DurationStructure {
        match (warm_up_included, cool_down_included) {
            (true, true) => DurationStructure::FullStructure,
            (true, false) => DurationStructure::WithWarmup,
            (false, true) => DurationStructure::WithCooldown,
            (false, false) => DurationStructure::DurationOnly,
        }
    }

    /// Assemble a full duration configuration
    ///
    /// Returns `None` for a zero duration: that is "no selection", not an
    /// error, and callers treat it as clearing the configuration.
    pub fn build_duration_configuration(
        duration: u32,
        warm_up: SegmentSelection,
        cool_down: SegmentSelection,
    ) -> Option<DurationConfiguration> {
        if duration == 0 {
            return None;
        }

        let warm_up_minutes = if warm_up.included { warm_up.duration } else { 0 };
        let cool_down_minutes = if cool_down.included { cool_down.duration } else { 0 };

        let working_time =
            Self::calculate_working_time(duration, warm_up_minutes, cool_down_minutes);
        let validation =
            Self::validate_time_allocation(duration, warm_up_minutes, cool_down_minutes);
        let configuration = Self::determine_structure(warm_up.included, cool_down.included);

        let preset = find_duration_preset(duration);
        let base_label = preset
            .map(|p| p.label.to_string())
            .unwrap_or_else(|| format!("{} minutes", duration));
        let description = preset
            .map(|p| p.description.to_string())
            .unwrap_or_else(|| format!("A {} minute session", duration));

        let mut label_parts = vec![base_label];
        if warm_up.included {
            label_parts.push(format!("{}min warm-up", warm_up_minutes));
        }
        if cool_down.included {
            label_parts.push(format!("{}min cool-down", cool_down_minutes));
        }
        let label = label_parts.join(" + ");

        let mut value = duration.to_string();
        if warm_up.included {
            value.push_str(&format!("_w{}", warm_up_minutes));
        }
        if cool_down.included {
            value.push_str(&format!("_c{}", cool_down_minutes));
        }

        Some(DurationConfiguration {
            selected: true,
            total_duration: duration,
            label,
            value,
            description,
            warm_up: StructureSegment {
                included: warm_up.included,
                duration: warm_up_minutes,
                percentage: Self::segment_percentage(warm_up_minutes, duration, warm_up.included),
            },
            cool_down: StructureSegment {
                included: cool_down.included,
                duration: cool_down_minutes,
                percentage: Self::segment_percentage(
                    cool_down_minutes,
                    duration,
                    cool_down.included,
                ),
            },
            working_time,
            configuration,
            validation,
        })
    }

    fn segment_percentage(minutes: u32, total: u32, included: bool) -> u32 {
        if !included || total == 0 {
            return 0;
        }
        (f64::from(minutes) / f64::from(total) * 100.0).round() as u32
    }
}
