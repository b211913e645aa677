//! Focus flattener
//!
//! Projects a focus configuration (or a legacy focus string) into a wide,
//! flat record of independent boolean flags plus five 0-100 analytic scores.
//! Downstream systems want queryable boolean columns rather than nested
//! objects; this record is the hand-off to tabular analytics storage.
//!
//! This is the strict path of the pipeline: a structurally invalid
//! configuration is rejected with [`FlattenError::InvalidConfiguration`]
//! instead of being silently degraded, since flattening is the last step
//! before persistence. The builder is the lenient counterpart. Legacy strings
//! stay lenient (they carry no structure to validate): unrecognized keywords
//! yield a default-filled record.

use crate::catalog::{find_format, FocusKind, FormatOption, DURATION_BUCKETS};
use crate::models::{ConfigurationKind, FocusCategory, FocusConfiguration};
use crate::models::{EquipmentLevel, ExperienceLevel, IntensityLevel};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Schema version stamped on every flattened record
pub const FLATTEN_SCHEMA_VERSION: &str = "2.0";

/// Flattening errors
#[derive(Debug, Error)]
pub enum FlattenError {
    /// The configuration fails the structural shape checks
    #[error("invalid configuration data: {reason}")]
    InvalidConfiguration { reason: String },

    /// The source backup could not be serialized
    #[error("failed to serialize source backup: {0}")]
    Backup(#[from] serde_json::Error),
}

/// Input accepted by the flattener
///
/// Stored focus data is either a structured configuration or a bare legacy
/// focus keyword; the untagged representation matches both at the
/// deserialization boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FocusInput {
    Structured(FocusConfiguration),
    Legacy(String),
}

/// The flat analytics record
///
/// One boolean column per focus kind, category, focus-scoped format,
/// intensity level, equipment tier, experience tier, duration bucket,
/// training goal, workout characteristic, location suitability and
/// programming compatibility, plus five bounded scores, validation counters,
/// a JSON backup of the source and a schema version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FlattenedFocusRecord {
    // Focus kind (one-hot)
    pub focus_strength_training: bool,
    pub focus_powerlifting: bool,
    pub focus_strength_hypertrophy: bool,
    pub focus_muscle_building: bool,
    pub focus_bodyweight_building: bool,
    pub focus_hiit: bool,
    pub focus_cardio_endurance: bool,
    pub focus_fat_loss: bool,
    pub focus_functional_fitness: bool,
    pub focus_flexibility_mobility: bool,
    pub focus_recovery_stretching: bool,

    // Category (one-hot)
    pub category_strength_power: bool,
    pub category_muscle_building: bool,
    pub category_conditioning_cardio: bool,
    pub category_functional_recovery: bool,

    // Selection shape
    pub config_focus_only: bool,
    pub config_focus_with_format: bool,

    // Formats, grouped by owning focus (one-hot across all groups)
    pub format_strength_training_traditional_sets: bool,
    pub format_strength_training_supersets: bool,
    pub format_strength_training_pyramid: bool,
    pub format_powerlifting_conjugate: bool,
    pub format_powerlifting_linear_progression: bool,
    pub format_powerlifting_max_effort: bool,
    pub format_strength_hypertrophy_block_periodization: bool,
    pub format_strength_hypertrophy_drop_sets: bool,
    pub format_strength_hypertrophy_cluster: bool,
    pub format_strength_hypertrophy_rest_pause: bool,
    pub format_muscle_building_supersets: bool,
    pub format_muscle_building_drop_sets: bool,
    pub format_muscle_building_giant_sets: bool,
    pub format_muscle_building_pyramid: bool,
    pub format_bodyweight_building_progressive_calisthenics: bool,
    pub format_bodyweight_building_circuit: bool,
    pub format_bodyweight_building_emom: bool,
    pub format_hiit_tabata: bool,
    pub format_hiit_emom: bool,
    pub format_hiit_circuit: bool,
    pub format_hiit_amrap: bool,
    pub format_cardio_endurance_steady_state: bool,
    pub format_cardio_endurance_intervals: bool,
    pub format_cardio_endurance_tempo: bool,
    pub format_cardio_endurance_fartlek: bool,
    pub format_fat_loss_metabolic: bool,
    pub format_fat_loss_circuit: bool,
    pub format_fat_loss_supersets: bool,
    pub format_functional_fitness_circuit: bool,
    pub format_functional_fitness_complexes: bool,
    pub format_functional_fitness_emom: bool,
    pub format_flexibility_mobility_static_stretching: bool,
    pub format_flexibility_mobility_dynamic_flow: bool,
    pub format_flexibility_mobility_yoga_flow: bool,
    pub format_recovery_stretching_gentle_stretching: bool,
    pub format_recovery_stretching_foam_rolling: bool,
    pub format_recovery_stretching_restorative_yoga: bool,

    // Metadata one-hots
    pub intensity_low: bool,
    pub intensity_moderate: bool,
    pub intensity_high: bool,
    pub intensity_variable: bool,
    pub equipment_minimal: bool,
    pub equipment_moderate: bool,
    pub equipment_full_gym: bool,
    pub experience_all_levels: bool,
    pub experience_intermediate: bool,
    pub experience_advanced: bool,

    // Duration compatibility buckets
    pub duration_15_compatible: bool,
    pub duration_20_compatible: bool,
    pub duration_30_compatible: bool,
    pub duration_45_compatible: bool,
    pub duration_60_compatible: bool,
    pub duration_90_compatible: bool,
    pub duration_120_compatible: bool,

    // Training goals
    pub goal_build_strength: bool,
    pub goal_build_muscle: bool,
    pub goal_lose_fat: bool,
    pub goal_improve_endurance: bool,
    pub goal_improve_mobility: bool,
    pub goal_support_recovery: bool,
    pub goal_athletic_performance: bool,
    pub goal_general_health: bool,

    // Workout characteristics
    pub characteristic_high_intensity: bool,
    pub characteristic_low_impact: bool,
    pub characteristic_time_efficient: bool,
    pub characteristic_beginner_friendly: bool,
    pub characteristic_compound_movements: bool,
    pub characteristic_isolation_work: bool,
    pub characteristic_cardio_component: bool,
    pub characteristic_structured_progression: bool,
    pub characteristic_minimal_rest: bool,

    // Location suitability
    pub location_home_suitable: bool,
    pub location_gym_required: bool,
    pub location_outdoor_friendly: bool,
    pub location_travel_friendly: bool,

    // Programming compatibility
    pub program_linear_compatible: bool,
    pub program_periodized: bool,
    pub program_circuit_based: bool,
    pub program_superset_based: bool,
    pub program_interval_based: bool,
    pub program_flexible_scheduling: bool,

    // Analytic scores, each clamped to 0-100
    pub score_complexity: u8,
    pub score_accessibility: u8,
    pub score_time_efficiency: u8,
    pub score_beginner_suitability: u8,
    pub score_advanced_potential: u8,

    // Validation counters
    pub validation_is_valid: bool,
    pub validation_warning_count: u32,
    pub validation_recommendation_count: u32,

    /// JSON backup of the source input (`None` for an empty record)
    pub source_backup: Option<String>,

    /// Flattener schema version
    pub flatten_version: String,
}

impl FlattenedFocusRecord {
    /// An all-false/zero record carrying only the schema version
    pub fn empty() -> Self {
        FlattenedFocusRecord {
            flatten_version: FLATTEN_SCHEMA_VERSION.to_string(),
            ..Default::default()
        }
    }

    // Format-id predicates spanning the focus-scoped columns; the scoring
    // tables are keyed by format id, not by owning focus.

    fn uses_conjugate_or_block(&self) -> bool {
        self.format_powerlifting_conjugate || self.format_strength_hypertrophy_block_periodization
    }

    fn uses_pyramid_or_cluster(&self) -> bool {
        self.format_strength_training_pyramid
            || self.format_muscle_building_pyramid
            || self.format_strength_hypertrophy_cluster
    }

    fn uses_supersets(&self) -> bool {
        self.format_strength_training_supersets
            || self.format_muscle_building_supersets
            || self.format_fat_loss_supersets
    }

    fn uses_drop_sets(&self) -> bool {
        self.format_strength_hypertrophy_drop_sets || self.format_muscle_building_drop_sets
    }

    fn uses_tabata_or_emom(&self) -> bool {
        self.format_hiit_tabata || self.uses_emom()
    }

    fn uses_emom(&self) -> bool {
        self.format_hiit_emom
            || self.format_bodyweight_building_emom
            || self.format_functional_fitness_emom
    }

    fn uses_circuit(&self) -> bool {
        self.format_bodyweight_building_circuit
            || self.format_hiit_circuit
            || self.format_fat_loss_circuit
            || self.format_functional_fitness_circuit
    }

    fn uses_giant_sets(&self) -> bool {
        self.format_muscle_building_giant_sets
    }

    fn uses_steady_state(&self) -> bool {
        self.format_cardio_endurance_steady_state
    }

    fn uses_metabolic(&self) -> bool {
        self.format_fat_loss_metabolic
    }
}

/// Flattening entry points and scoring
pub struct FocusFlattener;

impl FocusFlattener {
    /// Flatten stored focus data into an analytics record
    ///
    /// `None` yields the empty record. Legacy strings never fail. Structured
    /// configurations are shape-checked first and rejected when malformed.
    pub fn flatten_focus_data(
        input: Option<&FocusInput>,
    ) -> Result<FlattenedFocusRecord, FlattenError> {
        match input {
            None => Ok(FlattenedFocusRecord::empty()),
            Some(FocusInput::Legacy(raw)) => Ok(Self::flatten_legacy(raw)),
            Some(FocusInput::Structured(config)) => Self::flatten_structured(config),
        }
    }

    /// Structural shape checks for the strict path
    ///
    /// Mirrors the invariants the builder upholds: non-empty ids and a
    /// configuration tag consistent with format presence.
    pub fn validate_configuration(config: &FocusConfiguration) -> Result<(), FlattenError> {
        if config.focus.is_empty() {
            return Err(FlattenError::InvalidConfiguration {
                reason: "focus id is empty".to_string(),
            });
        }
        if config.value.is_empty() {
            return Err(FlattenError::InvalidConfiguration {
                reason: "value key is empty".to_string(),
            });
        }
        if matches!(&config.format, Some(f) if f.is_empty()) {
            return Err(FlattenError::InvalidConfiguration {
                reason: "format id is empty".to_string(),
            });
        }

        let has_format = config.format.is_some();
        let tagged_with_format = config.configuration == ConfigurationKind::FocusWithFormat;
        if has_format != tagged_with_format {
            return Err(FlattenError::InvalidConfiguration {
                reason: "configuration tag does not match format presence".to_string(),
            });
        }
        Ok(())
    }

    fn flatten_structured(
        config: &FocusConfiguration,
    ) -> Result<FlattenedFocusRecord, FlattenError> {
        Self::validate_configuration(config)?;

        let mut record = FlattenedFocusRecord::empty();
        record.source_backup = Some(serde_json::to_string(config)?);

        match config.configuration {
            ConfigurationKind::FocusOnly => record.config_focus_only = true,
            ConfigurationKind::FocusWithFormat => record.config_focus_with_format = true,
        }

        let kind = FocusKind::from_id(&config.focus);
        if let Some(kind) = kind {
            Self::set_focus_flag(&mut record, kind);
        } else {
            debug!(focus = %config.focus, "flattening configuration with unknown focus id");
        }

        // Metadata one-hots come from the stored metadata, not the catalog:
        // legacy imports may carry overrides the catalog never produced.
        Self::set_category_flag(&mut record, config.metadata.category);
        Self::set_intensity_flag(&mut record, config.metadata.intensity);
        Self::set_equipment_flag(&mut record, config.metadata.equipment);
        Self::set_experience_flag(&mut record, config.metadata.experience);
        Self::set_duration_flags(&mut record, &config.metadata.duration_compatibility);

        // Formats are validated against the closed per-focus catalog; an id
        // outside it simply sets no column.
        let format = match (kind, config.format.as_deref()) {
            (Some(kind), Some(id)) => {
                let resolved = find_format(kind, id);
                if let Some(resolved) = resolved {
                    Self::set_format_flag(&mut record, kind, resolved.id);
                }
                resolved
            }
            _ => None,
        };

        Self::apply_derived_flags(&mut record, kind, format);

        record.validation_is_valid = config.validation.is_valid;
        record.validation_warning_count = config.validation.warnings.len() as u32;
        record.validation_recommendation_count = config.validation.recommendations.len() as u32;

        Self::compute_scores(&mut record);
        Ok(record)
    }

    fn flatten_legacy(raw: &str) -> FlattenedFocusRecord {
        let mut record = FlattenedFocusRecord::empty();
        record.source_backup = serde_json::to_string(raw).ok();

        match Self::legacy_focus_kind(raw) {
            Some(kind) => {
                Self::set_focus_flag(&mut record, kind);
                Self::set_category_flag(&mut record, kind.category());
                Self::set_intensity_flag(&mut record, kind.intensity());
                Self::set_equipment_flag(&mut record, kind.equipment());
                Self::set_experience_flag(&mut record, kind.experience());
                Self::set_duration_flags(&mut record, kind.duration_compatibility());
                record.config_focus_only = true;
                Self::apply_derived_flags(&mut record, Some(kind), None);
                record.validation_is_valid = true;
            }
            None => {
                // Legacy data carries no metadata; fill the general-fitness
                // defaults and nothing else.
                debug!(raw, "unrecognized legacy focus keyword, filling defaults");
                record.intensity_moderate = true;
                record.equipment_moderate = true;
                record.experience_all_levels = true;
                record.duration_30_compatible = true;
                record.duration_45_compatible = true;
                record.duration_60_compatible = true;
            }
        }

        Self::compute_scores(&mut record);
        record
    }

    /// Map a legacy focus keyword (with aliases) onto the closed focus set
    pub fn legacy_focus_kind(raw: &str) -> Option<FocusKind> {
        match raw.trim().to_lowercase().as_str() {
            "strength" | "strength_training" => Some(FocusKind::StrengthTraining),
            "powerlifting" => Some(FocusKind::Powerlifting),
            "strength_hypertrophy" => Some(FocusKind::StrengthHypertrophy),
            "hypertrophy" | "muscle_building" => Some(FocusKind::MuscleBuilding),
            "bodyweight" | "calisthenics" | "bodyweight_building" => {
                Some(FocusKind::BodyweightBuilding)
            }
            "hiit" => Some(FocusKind::Hiit),
            "cardio" | "endurance" | "cardio_endurance" => Some(FocusKind::CardioEndurance),
            "fat_loss" | "weight_loss" => Some(FocusKind::FatLoss),
            "functional" | "functional_fitness" => Some(FocusKind::FunctionalFitness),
            "flexibility" | "mobility" | "flexibility_mobility" => {
                Some(FocusKind::FlexibilityMobility)
            }
            "recovery" | "stretching" | "recovery_stretching" => {
                Some(FocusKind::RecoveryStretching)
            }
            _ => None,
        }
    }

    fn set_focus_flag(record: &mut FlattenedFocusRecord, kind: FocusKind) {
        match kind {
            FocusKind::StrengthTraining => record.focus_strength_training = true,
            FocusKind::Powerlifting => record.focus_powerlifting = true,
            FocusKind::StrengthHypertrophy => record.focus_strength_hypertrophy = true,
            FocusKind::MuscleBuilding => record.focus_muscle_building = true,
            FocusKind::BodyweightBuilding => record.focus_bodyweight_building = true,
            FocusKind::Hiit => record.focus_hiit = true,
            FocusKind::CardioEndurance => record.focus_cardio_endurance = true,
            FocusKind::FatLoss => record.focus_fat_loss = true,
            FocusKind::FunctionalFitness => record.focus_functional_fitness = true,
            FocusKind::FlexibilityMobility => record.focus_flexibility_mobility = true,
            FocusKind::RecoveryStretching => record.focus_recovery_stretching = true,
        }
    }

    fn set_category_flag(record: &mut FlattenedFocusRecord, category: FocusCategory) {
        match category {
            FocusCategory::StrengthPower => record.category_strength_power = true,
            FocusCategory::MuscleBuilding => record.category_muscle_building = true,
            FocusCategory::ConditioningCardio => record.category_conditioning_cardio = true,
            FocusCategory::FunctionalRecovery => record.category_functional_recovery = true,
        }
    }

    fn set_intensity_flag(record: &mut FlattenedFocusRecord, intensity: IntensityLevel) {
        match intensity {
            IntensityLevel::Low => record.intensity_low = true,
            IntensityLevel::Moderate => record.intensity_moderate = true,
            IntensityLevel::High => record.intensity_high = true,
            IntensityLevel::Variable => record.intensity_variable = true,
        }
    }

    fn set_equipment_flag(record: &mut FlattenedFocusRecord, equipment: EquipmentLevel) {
        match equipment {
            EquipmentLevel::Minimal => record.equipment_minimal = true,
            EquipmentLevel::Moderate => record.equipment_moderate = true,
            EquipmentLevel::FullGym => record.equipment_full_gym = true,
        }
    }

    fn set_experience_flag(record: &mut FlattenedFocusRecord, experience: ExperienceLevel) {
        match experience {
            ExperienceLevel::AllLevels => record.experience_all_levels = true,
            ExperienceLevel::Intermediate => record.experience_intermediate = true,
            ExperienceLevel::Advanced => record.experience_advanced = true,
        }
    }

    fn set_duration_flags(record: &mut FlattenedFocusRecord, durations: &[u32]) {
        for duration in durations {
            match duration {
                15 => record.duration_15_compatible = true,
                20 => record.duration_20_compatible = true,
                30 => record.duration_30_compatible = true,
                45 => record.duration_45_compatible = true,
                60 => record.duration_60_compatible = true,
                90 => record.duration_90_compatible = true,
                120 => record.duration_120_compatible = true,
                other => {
                    debug_assert!(
                        !DURATION_BUCKETS.contains(other),
                        "bucket list out of sync"
                    );
                }
            }
        }
    }

    fn set_format_flag(record: &mut FlattenedFocusRecord, kind: FocusKind, format_id: &str) {
        match (kind, format_id) {
            (FocusKind::StrengthTraining, "traditional_sets") => {
                record.format_strength_training_traditional_sets = true
            }
            (FocusKind::StrengthTraining, "supersets") => {
                record.format_strength_training_supersets = true
            }
            (FocusKind::StrengthTraining, "pyramid") => {
                record.format_strength_training_pyramid = true
            }
            (FocusKind::Powerlifting, "conjugate") => record.format_powerlifting_conjugate = true,
            (FocusKind::Powerlifting, "linear_progression") => {
                record.format_powerlifting_linear_progression = true
            }
            (FocusKind::Powerlifting, "max_effort") => {
                record.format_powerlifting_max_effort = true
            }
            (FocusKind::StrengthHypertrophy, "block_periodization") => {
                record.format_strength_hypertrophy_block_periodization = true
            }
            (FocusKind::StrengthHypertrophy, "drop_sets") => {
                record.format_strength_hypertrophy_drop_sets = true
            }
            (FocusKind::StrengthHypertrophy, "cluster") => {
                record.format_strength_hypertrophy_cluster = true
            }
            (FocusKind::StrengthHypertrophy, "rest_pause") => {
                record.format_strength_hypertrophy_rest_pause = true
            }
            (FocusKind::MuscleBuilding, "supersets") => {
                record.format_muscle_building_supersets = true
            }
            (FocusKind::MuscleBuilding, "drop_sets") => {
                record.format_muscle_building_drop_sets = true
            }
            (FocusKind::MuscleBuilding, "giant_sets") => {
                record.format_muscle_building_giant_sets = true
            }
            (FocusKind::MuscleBuilding, "pyramid") => record.format_muscle_building_pyramid = true,
            (FocusKind::BodyweightBuilding, "progressive_calisthenics") => {
                record.format_bodyweight_building_progressive_calisthenics = true
            }
            (FocusKind::BodyweightBuilding, "circuit") => {
                record.format_bodyweight_building_circuit = true
            }
            (FocusKind::BodyweightBuilding, "emom") => {
                record.format_bodyweight_building_emom = true
            }
            (FocusKind::Hiit, "tabata") => record.format_hiit_tabata = true,
            (FocusKind::Hiit, "emom") => record.format_hiit_emom = true,
            (FocusKind::Hiit, "circuit") => record.format_hiit_circuit = true,
            (FocusKind::Hiit, "amrap") => record.format_hiit_amrap = true,
            (FocusKind::CardioEndurance, "steady_state") => {
                record.format_cardio_endurance_steady_state = true
            }
            (FocusKind::CardioEndurance, "intervals") => {
                record.format_cardio_endurance_intervals = true
            }
            (FocusKind::CardioEndurance, "tempo") => record.format_cardio_endurance_tempo = true,
            (FocusKind::CardioEndurance, "fartlek") => {
                record.format_cardio_endurance_fartlek = true
            }
            (FocusKind::FatLoss, "metabolic") => record.format_fat_loss_metabolic = true,
            (FocusKind::FatLoss, "circuit") => record.format_fat_loss_circuit = true,
            (FocusKind::FatLoss, "supersets") => record.format_fat_loss_supersets = true,
            (FocusKind::FunctionalFitness, "circuit") => {
                record.format_functional_fitness_circuit = true
            }
            (FocusKind::FunctionalFitness, "complexes") => {
                record.format_functional_fitness_complexes = true
            }
            (FocusKind::FunctionalFitness, "emom") => {
                record.format_functional_fitness_emom = true
            }
            (FocusKind::FlexibilityMobility, "static_stretching") => {
                record.format_flexibility_mobility_static_stretching = true
            }
            (FocusKind::FlexibilityMobility, "dynamic_flow") => {
                record.format_flexibility_mobility_dynamic_flow = true
            }
            (FocusKind::FlexibilityMobility, "yoga_flow") => {
                record.format_flexibility_mobility_yoga_flow = true
            }
            (FocusKind::RecoveryStretching, "gentle_stretching") => {
                record.format_recovery_stretching_gentle_stretching = true
            }
            (FocusKind::RecoveryStretching, "foam_rolling") => {
                record.format_recovery_stretching_foam_rolling = true
            }
            (FocusKind::RecoveryStretching, "restorative_yoga") => {
                record.format_recovery_stretching_restorative_yoga = true
            }
            _ => {}
        }
    }

    /// Derive the goal, characteristic, location and programming columns from
    /// the focus, format and metadata columns
    fn apply_derived_flags(
        record: &mut FlattenedFocusRecord,
        kind: Option<FocusKind>,
        format: Option<&'static FormatOption>,
    ) {
        if let Some(kind) = kind {
            Self::apply_goal_flags(record, kind);
        }

        record.characteristic_high_intensity = record.intensity_high;
        record.characteristic_low_impact = record.focus_flexibility_mobility
            || record.focus_recovery_stretching
            || record.uses_steady_state();
        record.characteristic_time_efficient =
            record.focus_hiit || format.is_some_and(|f| f.time_efficient);
        record.characteristic_beginner_friendly =
            record.experience_all_levels && format.map_or(true, |f| f.beginner_friendly);
        record.characteristic_compound_movements =
            record.category_strength_power || record.focus_functional_fitness;
        record.characteristic_isolation_work =
            record.focus_muscle_building || record.focus_strength_hypertrophy;
        record.characteristic_cardio_component = record.category_conditioning_cardio;
        record.characteristic_structured_progression = record.focus_powerlifting
            || record.focus_strength_hypertrophy
            || record.format_powerlifting_linear_progression
            || record.format_bodyweight_building_progressive_calisthenics
            || record.uses_conjugate_or_block();
        record.characteristic_minimal_rest = record.focus_hiit
            || record.uses_circuit()
            || record.uses_tabata_or_emom()
            || record.format_hiit_amrap
            || record.uses_giant_sets();

        record.location_home_suitable = record.equipment_minimal || record.equipment_moderate;
        record.location_gym_required = record.equipment_full_gym;
        record.location_outdoor_friendly = record.focus_cardio_endurance
            || record.focus_bodyweight_building
            || record.focus_hiit;
        record.location_travel_friendly = record.equipment_minimal;

        record.program_linear_compatible = record.focus_strength_training
            || record.focus_powerlifting
            || record.focus_muscle_building
            || record.focus_bodyweight_building;
        record.program_periodized = record.focus_powerlifting
            || record.focus_strength_hypertrophy
            || record.format_powerlifting_linear_progression
            || record.uses_conjugate_or_block();
        record.program_circuit_based = record.focus_hiit || record.uses_circuit();
        record.program_superset_based =
            record.uses_supersets() || record.uses_giant_sets() || record.uses_drop_sets();
        record.program_interval_based = record.focus_hiit
            || record.format_cardio_endurance_intervals
            || record.format_cardio_endurance_fartlek
            || record.uses_tabata_or_emom()
            || record.format_hiit_amrap;
        record.program_flexible_scheduling = record.focus_flexibility_mobility
            || record.focus_recovery_stretching
            || record.focus_bodyweight_building
            || record.focus_cardio_endurance;
    }

    fn apply_goal_flags(record: &mut FlattenedFocusRecord, kind: FocusKind) {
        match kind {
            FocusKind::StrengthTraining => record.goal_build_strength = true,
            FocusKind::Powerlifting => {
                record.goal_build_strength = true;
                record.goal_athletic_performance = true;
            }
            FocusKind::StrengthHypertrophy => {
                record.goal_build_strength = true;
                record.goal_build_muscle = true;
            }
            FocusKind::MuscleBuilding => record.goal_build_muscle = true,
            FocusKind::BodyweightBuilding => {
                record.goal_build_muscle = true;
                record.goal_general_health = true;
            }
            FocusKind::Hiit => {
                record.goal_lose_fat = true;
                record.goal_improve_endurance = true;
            }
            FocusKind::CardioEndurance => {
                record.goal_improve_endurance = true;
                record.goal_general_health = true;
            }
            FocusKind::FatLoss => {
                record.goal_lose_fat = true;
                record.goal_general_health = true;
            }
            FocusKind::FunctionalFitness => record.goal_athletic_performance = true,
            FocusKind::FlexibilityMobility => record.goal_improve_mobility = true,
            FocusKind::RecoveryStretching => record.goal_support_recovery = true,
        }
    }

    /// Compute the five analytic scores from the boolean columns
    fn compute_scores(record: &mut FlattenedFocusRecord) {
        record.score_complexity = Self::complexity_score(record);
        record.score_accessibility = Self::accessibility_score(record);
        record.score_time_efficiency = Self::time_efficiency_score(record);
        record.score_beginner_suitability = Self::beginner_suitability_score(record);
        record.score_advanced_potential = Self::advanced_potential_score(record);
    }

    /// Technical complexity of the selection
    pub fn complexity_score(record: &FlattenedFocusRecord) -> u8 {
        let mut score: i32 = if record.focus_powerlifting {
            40
        } else if record.focus_strength_hypertrophy {
            35
        } else if record.focus_functional_fitness {
            30
        } else if record.focus_strength_training || record.focus_hiit {
            25
        } else if record.focus_muscle_building || record.focus_fat_loss {
            20
        } else if record.focus_cardio_endurance {
            15
        } else if record.focus_flexibility_mobility {
            10
        } else if record.focus_recovery_stretching {
            5
        } else {
            0
        };

        if record.uses_conjugate_or_block() {
            score += 30;
        } else if record.uses_pyramid_or_cluster() {
            score += 20;
        } else if record.uses_supersets() || record.uses_drop_sets() {
            score += 15;
        } else if record.uses_tabata_or_emom() {
            score += 10;
        }

        if record.experience_advanced {
            score += 15;
        } else if record.experience_intermediate {
            score += 10;
        }

        clamp_score(score)
    }

    /// How accessible the selection is without equipment or experience
    pub fn accessibility_score(record: &FlattenedFocusRecord) -> u8 {
        let mut score: i32 = 100;

        if record.equipment_full_gym {
            score -= 30;
        } else if record.equipment_moderate {
            score -= 15;
        }

        if record.experience_advanced {
            score -= 25;
        } else if record.experience_intermediate {
            score -= 10;
        }

        if record.intensity_high {
            score -= 15;
        }

        if record.uses_conjugate_or_block() {
            score -= 20;
        } else if record.uses_pyramid_or_cluster() {
            score -= 15;
        }

        if record.focus_recovery_stretching || record.focus_flexibility_mobility {
            score += 10;
        }

        clamp_score(score)
    }

    /// Training stimulus per minute of session time
    pub fn time_efficiency_score(record: &FlattenedFocusRecord) -> u8 {
        let mut score: i32 = 50;

        if record.focus_hiit {
            score += 30;
        }
        if record.uses_metabolic() {
            score += 20;
        }
        if record.uses_supersets() || record.uses_giant_sets() {
            score += 25;
        }
        if record.uses_circuit() || record.format_hiit_tabata {
            score += 30;
        }
        if record.uses_steady_state() {
            score -= 20;
        }
        if record.format_strength_hypertrophy_block_periodization {
            score -= 15;
        }
        if record.focus_bodyweight_building {
            score += 15;
        }
        if record.focus_recovery_stretching {
            score += 10;
        }

        clamp_score(score)
    }

    /// How well the selection suits a newcomer
    pub fn beginner_suitability_score(record: &FlattenedFocusRecord) -> u8 {
        let mut score: i32 = 50;

        if record.experience_all_levels {
            score += 30;
        } else if record.experience_intermediate {
            score -= 10;
        } else if record.experience_advanced {
            score -= 30;
        }

        if record.intensity_low {
            score += 20;
        } else if record.intensity_moderate {
            score += 10;
        } else if record.intensity_high {
            score -= 15;
        }

        if record.equipment_minimal {
            score += 15;
        } else if record.equipment_full_gym {
            score -= 10;
        }

        if record.focus_muscle_building || record.focus_cardio_endurance {
            score += 15;
        }
        if record.focus_powerlifting {
            score -= 20;
        }
        if record.focus_recovery_stretching || record.focus_flexibility_mobility {
            score += 20;
        }

        clamp_score(score)
    }

    /// Headroom the selection offers an advanced trainee
    pub fn advanced_potential_score(record: &FlattenedFocusRecord) -> u8 {
        let mut score: i32 = 50;

        if record.focus_powerlifting {
            score += 40;
        } else if record.focus_strength_hypertrophy {
            score += 35;
        } else if record.focus_functional_fitness {
            score += 30;
        }

        if record.uses_conjugate_or_block() {
            score += 30;
        } else if record.uses_pyramid_or_cluster() {
            score += 20;
        }

        if record.intensity_high {
            score += 15;
        } else if record.intensity_variable {
            score += 10;
        }

        if record.focus_recovery_stretching {
            score -= 20;
        }

        clamp_score(score)
    }
}

fn clamp_score(score: i32) -> u8 {
    score.clamp(0, 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::focus::FocusBuilder;
    use proptest::prelude::*;

    fn flatten_built(
        focus: &str,
        format: Option<&str>,
    ) -> FlattenedFocusRecord {
        let config = FocusBuilder::build_focus_configuration(focus, focus, format, None);
        FocusFlattener::flatten_focus_data(Some(&FocusInput::Structured(config))).unwrap()
    }

    #[test]
    fn test_none_yields_empty_record() {
        let record = FocusFlattener::flatten_focus_data(None).unwrap();
        assert_eq!(record, FlattenedFocusRecord::empty());
        assert_eq!(record.flatten_version, FLATTEN_SCHEMA_VERSION);
        assert_eq!(record.source_backup, None);
        assert_eq!(record.score_complexity, 0);
        assert!(!record.validation_is_valid);
    }

    #[test]
    fn test_structured_one_hot_fields() {
        let record = flatten_built("hiit", Some("tabata"));

        assert!(record.focus_hiit);
        assert!(!record.focus_powerlifting);
        assert!(record.category_conditioning_cardio);
        assert!(record.config_focus_with_format);
        assert!(!record.config_focus_only);
        assert!(record.format_hiit_tabata);
        assert!(record.intensity_high);
        assert!(record.equipment_minimal);
        assert!(record.experience_intermediate);
        assert!(record.duration_15_compatible);
        assert!(record.duration_45_compatible);
        assert!(!record.duration_60_compatible);
        assert!(record.source_backup.is_some());
        assert!(record.validation_is_valid);
    }

    #[test]
    fn test_structured_derived_flags() {
        let record = flatten_built("hiit", Some("tabata"));
        assert!(record.goal_lose_fat);
        assert!(record.goal_improve_endurance);
        assert!(record.characteristic_high_intensity);
        assert!(record.characteristic_time_efficient);
        assert!(record.characteristic_minimal_rest);
        assert!(!record.characteristic_beginner_friendly); // intermediate focus
        assert!(record.location_travel_friendly);
        assert!(record.program_interval_based);
        assert!(!record.program_periodized);

        let record = flatten_built("powerlifting", Some("conjugate"));
        assert!(record.goal_build_strength);
        assert!(record.location_gym_required);
        assert!(!record.location_home_suitable);
        assert!(record.program_periodized);
        assert!(record.characteristic_structured_progression);
        assert!(record.characteristic_compound_movements);
    }

    #[test]
    fn test_hiit_tabata_scores() {
        let record = flatten_built("hiit", Some("tabata"));
        assert_eq!(record.score_complexity, 45); // 25 base + 10 tabata + 10 intermediate
        assert_eq!(record.score_accessibility, 75); // 100 - 10 - 15
        assert_eq!(record.score_time_efficiency, 100); // 50 + 30 + 30, clamped
        assert_eq!(record.score_beginner_suitability, 40); // 50 - 10 - 15 + 15
        assert_eq!(record.score_advanced_potential, 65); // 50 + 15
    }

    #[test]
    fn test_powerlifting_conjugate_scores() {
        let record = flatten_built("powerlifting", Some("conjugate"));
        assert_eq!(record.score_complexity, 85); // 40 + 30 + 15
        assert_eq!(record.score_accessibility, 10); // 100 - 30 - 25 - 15 - 20
        assert_eq!(record.score_time_efficiency, 50);
        assert_eq!(record.score_beginner_suitability, 0); // 50 - 30 - 15 - 10 - 20
        assert_eq!(record.score_advanced_potential, 100); // 50 + 40 + 30 + 15, clamped
    }

    #[test]
    fn test_recovery_scores() {
        let record = flatten_built("recovery_stretching", None);
        assert_eq!(record.score_complexity, 5);
        assert_eq!(record.score_accessibility, 100); // 100 + 10, clamped
        assert_eq!(record.score_time_efficiency, 60);
        assert_eq!(record.score_beginner_suitability, 100); // 50 + 30 + 20 + 15 + 20
        assert_eq!(record.score_advanced_potential, 30);
    }

    #[test]
    fn test_legacy_alias_equivalence() {
        let a = FocusFlattener::flatten_focus_data(Some(&FocusInput::Legacy(
            "strength".to_string(),
        )))
        .unwrap();
        let b = FocusFlattener::flatten_focus_data(Some(&FocusInput::Legacy(
            "strength_training".to_string(),
        )))
        .unwrap();

        // identical flag sets; only the raw backup differs
        let mut a = a;
        let mut b = b;
        a.source_backup = None;
        b.source_backup = None;
        assert_eq!(a, b);
        assert!(a.focus_strength_training);
        assert!(a.category_strength_power);
        assert!(a.config_focus_only);
    }

    #[test]
    fn test_legacy_known_keywords() {
        for (raw, expected) in [
            ("hypertrophy", FocusKind::MuscleBuilding),
            ("cardio", FocusKind::CardioEndurance),
            ("weight_loss", FocusKind::FatLoss),
            ("mobility", FocusKind::FlexibilityMobility),
            ("recovery", FocusKind::RecoveryStretching),
            ("  HIIT ", FocusKind::Hiit),
        ] {
            assert_eq!(FocusFlattener::legacy_focus_kind(raw), Some(expected), "{}", raw);
        }
        assert_eq!(FocusFlattener::legacy_focus_kind("zumba"), None);
    }

    #[test]
    fn test_legacy_unrecognized_fills_defaults() {
        let record = FocusFlattener::flatten_focus_data(Some(&FocusInput::Legacy(
            "zumba".to_string(),
        )))
        .unwrap();

        assert!(record.intensity_moderate);
        assert!(record.equipment_moderate);
        assert!(record.experience_all_levels);
        assert!(record.duration_30_compatible);
        assert!(record.duration_45_compatible);
        assert!(record.duration_60_compatible);

        // nothing else is set
        assert!(!record.focus_hiit);
        assert!(!record.config_focus_only);
        assert!(!record.goal_general_health);
        assert!(!record.location_home_suitable);
        assert!(!record.validation_is_valid);
        assert_eq!(record.source_backup.as_deref(), Some("\"zumba\""));
    }

    #[test]
    fn test_strict_rejection_on_empty_focus() {
        let mut config =
            FocusBuilder::build_focus_configuration("hiit", "HIIT", Some("tabata"), None);
        config.focus = String::new();

        let err = FocusFlattener::flatten_focus_data(Some(&FocusInput::Structured(config)))
            .unwrap_err();
        assert!(matches!(err, FlattenError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_strict_rejection_on_tag_mismatch() {
        let mut config =
            FocusBuilder::build_focus_configuration("hiit", "HIIT", Some("tabata"), None);
        config.format = None; // tag still says focus-with-format

        let err = FocusFlattener::flatten_focus_data(Some(&FocusInput::Structured(config)))
            .unwrap_err();
        assert!(matches!(err, FlattenError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_unknown_focus_structured_is_not_an_error() {
        // structurally valid data with an uncataloged focus id flattens to a
        // record with no focus column set
        let config = FocusBuilder::build_focus_configuration("pilates", "Pilates", None, None);
        let record =
            FocusFlattener::flatten_focus_data(Some(&FocusInput::Structured(config))).unwrap();

        assert!(!record.focus_strength_training);
        assert!(record.intensity_moderate);
        assert!(record.equipment_moderate);
        assert!(record.category_conditioning_cardio);
        assert!(record.config_focus_only);
    }

    #[test]
    fn test_untagged_input_deserialization() {
        let legacy: FocusInput = serde_json::from_str("\"strength\"").unwrap();
        assert_eq!(legacy, FocusInput::Legacy("strength".to_string()));

        let config = FocusBuilder::build_focus_configuration("hiit", "HIIT", None, None);
        let json = serde_json::to_string(&FocusInput::Structured(config.clone())).unwrap();
        let parsed: FocusInput = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, FocusInput::Structured(config));

        // an object missing required fields deserializes as neither variant
        assert!(serde_json::from_str::<FocusInput>("{\"selected\":true}").is_err());
    }

    #[test]
    fn test_flatten_is_idempotent() {
        let config = FocusBuilder::build_focus_configuration(
            "muscle_building",
            "Muscle Building",
            Some("giant_sets"),
            None,
        );
        let input = FocusInput::Structured(config);
        assert_eq!(
            FocusFlattener::flatten_focus_data(Some(&input)).unwrap(),
            FocusFlattener::flatten_focus_data(Some(&input)).unwrap()
        );
    }

    proptest! {
        #[test]
        fn prop_scores_bounded_for_all_catalog_selections(
            focus_idx in 0usize..11,
            format_idx in proptest::option::of(0usize..4),
        ) {
            let kind = crate::catalog::ALL_FOCUS_KINDS[focus_idx];
            let formats = kind.formats();
            let format = format_idx
                .map(|i| formats[i % formats.len()].id);

            let record = flatten_built(kind.id(), format);
            for score in [
                record.score_complexity,
                record.score_accessibility,
                record.score_time_efficiency,
                record.score_beginner_suitability,
                record.score_advanced_potential,
            ] {
                prop_assert!(score <= 100);
            }
        }

        #[test]
        fn prop_legacy_never_errors(raw in ".{0,40}") {
            let input = FocusInput::Legacy(raw);
            prop_assert!(FocusFlattener::flatten_focus_data(Some(&input)).is_ok());
        }
    }
}
