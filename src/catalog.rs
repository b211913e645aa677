//! Static focus, format and duration catalogs
//!
//! Fixed tables backing the configuration builders. All data is `&'static`;
//! lookups are exhaustive matches over the closed focus enum, with a single
//! default-metadata fallback for ids the catalog does not know (legacy data
//! and transient selection state can reference such ids).

use crate::models::{
    EquipmentLevel, ExperienceLevel, FocusCategory, FocusMetadata, IntensityLevel,
};
use serde::{Deserialize, Serialize};

/// The closed set of workout focus kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusKind {
    StrengthTraining,
    Powerlifting,
    StrengthHypertrophy,
    MuscleBuilding,
    BodyweightBuilding,
    Hiit,
    CardioEndurance,
    FatLoss,
    FunctionalFitness,
    FlexibilityMobility,
    RecoveryStretching,
}

/// All focus kinds in catalog order
pub const ALL_FOCUS_KINDS: [FocusKind; 11] = [
    FocusKind::StrengthTraining,
    FocusKind::Powerlifting,
    FocusKind::StrengthHypertrophy,
    FocusKind::MuscleBuilding,
    FocusKind::BodyweightBuilding,
    FocusKind::Hiit,
    FocusKind::CardioEndurance,
    FocusKind::FatLoss,
    FocusKind::FunctionalFitness,
    FocusKind::FlexibilityMobility,
    FocusKind::RecoveryStretching,
];

impl FocusKind {
    /// Resolve a catalog id. Returns `None` for unknown ids; callers decide
    /// whether to fall back (builder) or reject (nothing currently does).
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "strength_training" => Some(FocusKind::StrengthTraining),
            "powerlifting" => Some(FocusKind::Powerlifting),
            "strength_hypertrophy" => Some(FocusKind::StrengthHypertrophy),
            "muscle_building" => Some(FocusKind::MuscleBuilding),
            "bodyweight_building" => Some(FocusKind::BodyweightBuilding),
            "hiit" => Some(FocusKind::Hiit),
            "cardio_endurance" => Some(FocusKind::CardioEndurance),
            "fat_loss" => Some(FocusKind::FatLoss),
            "functional_fitness" => Some(FocusKind::FunctionalFitness),
            "flexibility_mobility" => Some(FocusKind::FlexibilityMobility),
            "recovery_stretching" => Some(FocusKind::RecoveryStretching),
            _ => None,
        }
    }

    /// Catalog id string
    pub fn id(&self) -> &'static str {
        match self {
            FocusKind::StrengthTraining => "strength_training",
            FocusKind::Powerlifting => "powerlifting",
            FocusKind::StrengthHypertrophy => "strength_hypertrophy",
            FocusKind::MuscleBuilding => "muscle_building",
            FocusKind::BodyweightBuilding => "bodyweight_building",
            FocusKind::Hiit => "hiit",
            FocusKind::CardioEndurance => "cardio_endurance",
            FocusKind::FatLoss => "fat_loss",
            FocusKind::FunctionalFitness => "functional_fitness",
            FocusKind::FlexibilityMobility => "flexibility_mobility",
            FocusKind::RecoveryStretching => "recovery_stretching",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FocusKind::StrengthTraining => "Strength Training",
            FocusKind::Powerlifting => "Powerlifting",
            FocusKind::StrengthHypertrophy => "Strength & Hypertrophy",
            FocusKind::MuscleBuilding => "Muscle Building",
            FocusKind::BodyweightBuilding => "Bodyweight Building",
            FocusKind::Hiit => "HIIT",
            FocusKind::CardioEndurance => "Cardio & Endurance",
            FocusKind::FatLoss => "Fat Loss",
            FocusKind::FunctionalFitness => "Functional Fitness",
            FocusKind::FlexibilityMobility => "Flexibility & Mobility",
            FocusKind::RecoveryStretching => "Recovery & Stretching",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            FocusKind::StrengthTraining => {
                "Build overall strength with compound lifts and progressive loading"
            }
            FocusKind::Powerlifting => {
                "Maximize squat, bench and deadlift with heavy, low-rep work"
            }
            FocusKind::StrengthHypertrophy => {
                "Combine heavy strength work with muscle-growth volume"
            }
            FocusKind::MuscleBuilding => {
                "Grow muscle with moderate loads and controlled volume"
            }
            FocusKind::BodyweightBuilding => {
                "Build muscle and control using only your own bodyweight"
            }
            FocusKind::Hiit => {
                "Short bursts of maximal effort with brief recovery periods"
            }
            FocusKind::CardioEndurance => {
                "Develop aerobic capacity with sustained cardiovascular work"
            }
            FocusKind::FatLoss => {
                "Burn calories with mixed-intensity metabolic training"
            }
            FocusKind::FunctionalFitness => {
                "Train movement patterns that carry over to daily life and sport"
            }
            FocusKind::FlexibilityMobility => {
                "Improve range of motion and movement quality"
            }
            FocusKind::RecoveryStretching => {
                "Low-intensity stretching and release work to aid recovery"
            }
        }
    }

    pub fn category(&self) -> FocusCategory {
        match self {
            FocusKind::StrengthTraining
            | FocusKind::Powerlifting
            | FocusKind::StrengthHypertrophy => FocusCategory::StrengthPower,
            FocusKind::MuscleBuilding | FocusKind::BodyweightBuilding => {
                FocusCategory::MuscleBuilding
            }
            FocusKind::Hiit | FocusKind::CardioEndurance | FocusKind::FatLoss => {
                FocusCategory::ConditioningCardio
            }
            FocusKind::FunctionalFitness
            | FocusKind::FlexibilityMobility
            | FocusKind::RecoveryStretching => FocusCategory::FunctionalRecovery,
        }
    }

    pub fn intensity(&self) -> IntensityLevel {
        match self {
            FocusKind::Powerlifting | FocusKind::StrengthHypertrophy | FocusKind::Hiit => {
                IntensityLevel::High
            }
            FocusKind::StrengthTraining
            | FocusKind::MuscleBuilding
            | FocusKind::BodyweightBuilding
            | FocusKind::CardioEndurance => IntensityLevel::Moderate,
            FocusKind::FatLoss | FocusKind::FunctionalFitness => IntensityLevel::Variable,
            FocusKind::FlexibilityMobility | FocusKind::RecoveryStretching => IntensityLevel::Low,
        }
    }

    pub fn equipment(&self) -> EquipmentLevel {
        match self {
            FocusKind::Powerlifting | FocusKind::StrengthHypertrophy => EquipmentLevel::FullGym,
            FocusKind::StrengthTraining
            | FocusKind::MuscleBuilding
            | FocusKind::FunctionalFitness => EquipmentLevel::Moderate,
            FocusKind::BodyweightBuilding
            | FocusKind::Hiit
            | FocusKind::CardioEndurance
            | FocusKind::FatLoss
            | FocusKind::FlexibilityMobility
            | FocusKind::RecoveryStretching => EquipmentLevel::Minimal,
        }
    }

    pub fn experience(&self) -> ExperienceLevel {
        match self {
            FocusKind::Powerlifting | FocusKind::StrengthHypertrophy => ExperienceLevel::Advanced,
            FocusKind::Hiit | FocusKind::FunctionalFitness => ExperienceLevel::Intermediate,
            _ => ExperienceLevel::AllLevels,
        }
    }

    /// Session lengths (minutes) this focus works well with
    pub fn duration_compatibility(&self) -> &'static [u32] {
        match self {
            FocusKind::StrengthTraining => &[30, 45, 60, 90],
            FocusKind::Powerlifting => &[60, 90, 120],
            FocusKind::StrengthHypertrophy => &[45, 60, 90, 120],
            FocusKind::MuscleBuilding => &[45, 60, 90],
            FocusKind::BodyweightBuilding => &[15, 20, 30, 45, 60],
            FocusKind::Hiit => &[15, 20, 30, 45],
            FocusKind::CardioEndurance => &[20, 30, 45, 60, 90, 120],
            FocusKind::FatLoss => &[20, 30, 45, 60],
            FocusKind::FunctionalFitness => &[30, 45, 60],
            FocusKind::FlexibilityMobility => &[15, 20, 30, 45, 60],
            FocusKind::RecoveryStretching => &[15, 20, 30, 45],
        }
    }

    /// Catalog metadata for this focus
    pub fn metadata(&self) -> FocusMetadata {
        FocusMetadata {
            intensity: self.intensity(),
            equipment: self.equipment(),
            experience: self.experience(),
            duration_compatibility: self.duration_compatibility().to_vec(),
            category: self.category(),
        }
    }

    /// Workout formats available for this focus
    pub fn formats(&self) -> &'static [FormatOption] {
        match self {
            FocusKind::StrengthTraining => STRENGTH_TRAINING_FORMATS,
            FocusKind::Powerlifting => POWERLIFTING_FORMATS,
            FocusKind::StrengthHypertrophy => STRENGTH_HYPERTROPHY_FORMATS,
            FocusKind::MuscleBuilding => MUSCLE_BUILDING_FORMATS,
            FocusKind::BodyweightBuilding => BODYWEIGHT_BUILDING_FORMATS,
            FocusKind::Hiit => HIIT_FORMATS,
            FocusKind::CardioEndurance => CARDIO_ENDURANCE_FORMATS,
            FocusKind::FatLoss => FAT_LOSS_FORMATS,
            FocusKind::FunctionalFitness => FUNCTIONAL_FITNESS_FORMATS,
            FocusKind::FlexibilityMobility => FLEXIBILITY_MOBILITY_FORMATS,
            FocusKind::RecoveryStretching => RECOVERY_STRETCHING_FORMATS,
        }
    }
}

/// A workout format option, keyed by its owning focus
///
/// Format ids are unique only within the owning focus; cross-focus id
/// collisions (e.g. `supersets`, `circuit`) are expected, lookup is always
/// focus-scoped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormatOption {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub intensity: IntensityLevel,
    pub beginner_friendly: bool,
    pub time_efficient: bool,
}

const STRENGTH_TRAINING_FORMATS: &[FormatOption] = &[
    FormatOption {
        id: "traditional_sets",
        label: "Traditional Sets",
        description: "Straight sets with full rest between efforts",
        intensity: IntensityLevel::Moderate,
        beginner_friendly: true,
        time_efficient: false,
    },
    FormatOption {
        id: "supersets",
        label: "Supersets",
        description: "Paired exercises performed back to back",
        intensity: IntensityLevel::High,
        beginner_friendly: false,
        time_efficient: true,
    },
    FormatOption {
        id: "pyramid",
        label: "Pyramid Sets",
        description: "Ascending weight with descending reps across sets",
        intensity: IntensityLevel::Moderate,
        beginner_friendly: false,
        time_efficient: false,
    },
];

const POWERLIFTING_FORMATS: &[FormatOption] = &[
    FormatOption {
        id: "conjugate",
        label: "Conjugate Method",
        description: "Rotating max-effort and dynamic-effort sessions",
        intensity: IntensityLevel::High,
        beginner_friendly: false,
        time_efficient: false,
    },
    FormatOption {
        id: "linear_progression",
        label: "Linear Progression",
        description: "Steady weight increases session over session",
        intensity: IntensityLevel::Moderate,
        beginner_friendly: true,
        time_efficient: false,
    },
    FormatOption {
        id: "max_effort",
        label: "Max Effort",
        description: "Working up to near-maximal single lifts",
        intensity: IntensityLevel::High,
        beginner_friendly: false,
        time_efficient: false,
    },
];

const STRENGTH_HYPERTROPHY_FORMATS: &[FormatOption] = &[
    FormatOption {
        id: "block_periodization",
        label: "Block Periodization",
        description: "Focused training blocks cycling volume and intensity",
        intensity: IntensityLevel::High,
        beginner_friendly: false,
        time_efficient: false,
    },
    FormatOption {
        id: "drop_sets",
        label: "Drop Sets",
        description: "Sets extended by immediately reducing the load",
        intensity: IntensityLevel::High,
        beginner_friendly: false,
        time_efficient: true,
    },
    FormatOption {
        id: "cluster",
        label: "Cluster Sets",
        description: "Heavy sets broken into mini-sets with short intra-set rest",
        intensity: IntensityLevel::High,
        beginner_friendly: false,
        time_efficient: false,
    },
    FormatOption {
        id: "rest_pause",
        label: "Rest-Pause",
        description: "Brief pauses to squeeze extra reps from a working weight",
        intensity: IntensityLevel::High,
        beginner_friendly: false,
        time_efficient: true,
    },
];

const MUSCLE_BUILDING_FORMATS: &[FormatOption] = &[
    FormatOption {
        id: "supersets",
        label: "Supersets",
        description: "Opposing muscle groups trained back to back",
        intensity: IntensityLevel::Moderate,
        beginner_friendly: false,
        time_efficient: true,
    },
    FormatOption {
        id: "drop_sets",
        label: "Drop Sets",
        description: "Load drops that push a muscle past initial fatigue",
        intensity: IntensityLevel::High,
        beginner_friendly: false,
        time_efficient: true,
    },
    FormatOption {
        id: "giant_sets",
        label: "Giant Sets",
        description: "Four or more exercises chained for one muscle group",
        intensity: IntensityLevel::High,
        beginner_friendly: false,
        time_efficient: true,
    },
    FormatOption {
        id: "pyramid",
        label: "Pyramid Sets",
        description: "Gradually heavier sets with fewer reps",
        intensity: IntensityLevel::Moderate,
        beginner_friendly: true,
        time_efficient: false,
    },
];

const BODYWEIGHT_BUILDING_FORMATS: &[FormatOption] = &[
    FormatOption {
        id: "progressive_calisthenics",
        label: "Progressive Calisthenics",
        description: "Harder movement variations as strength develops",
        intensity: IntensityLevel::Moderate,
        beginner_friendly: true,
        time_efficient: false,
    },
    FormatOption {
        id: "circuit",
        label: "Circuit",
        description: "Rotating bodyweight stations with little rest",
        intensity: IntensityLevel::Moderate,
        beginner_friendly: true,
        time_efficient: true,
    },
    FormatOption {
        id: "emom",
        label: "EMOM",
        description: "A fixed movement at the top of every minute",
        intensity: IntensityLevel::Moderate,
        beginner_friendly: true,
        time_efficient: true,
    },
];

const HIIT_FORMATS: &[FormatOption] = &[
    FormatOption {
        id: "tabata",
        label: "Tabata",
        description: "Twenty seconds all-out, ten seconds off, eight rounds",
        intensity: IntensityLevel::High,
        beginner_friendly: false,
        time_efficient: true,
    },
    FormatOption {
        id: "emom",
        label: "EMOM",
        description: "Set work at the top of every minute",
        intensity: IntensityLevel::High,
        beginner_friendly: true,
        time_efficient: true,
    },
    FormatOption {
        id: "circuit",
        label: "Circuit",
        description: "High-effort stations with short transitions",
        intensity: IntensityLevel::High,
        beginner_friendly: true,
        time_efficient: true,
    },
    FormatOption {
        id: "amrap",
        label: "AMRAP",
        description: "As many rounds as possible in a fixed window",
        intensity: IntensityLevel::High,
        beginner_friendly: false,
        time_efficient: true,
    },
];

const CARDIO_ENDURANCE_FORMATS: &[FormatOption] = &[
    FormatOption {
        id: "steady_state",
        label: "Steady State",
        description: "A single sustained pace for the whole session",
        intensity: IntensityLevel::Low,
        beginner_friendly: true,
        time_efficient: false,
    },
    FormatOption {
        id: "intervals",
        label: "Intervals",
        description: "Alternating hard efforts and easy recovery",
        intensity: IntensityLevel::High,
        beginner_friendly: true,
        time_efficient: true,
    },
    FormatOption {
        id: "tempo",
        label: "Tempo",
        description: "Comfortably hard pace held for extended blocks",
        intensity: IntensityLevel::Moderate,
        beginner_friendly: false,
        time_efficient: false,
    },
    FormatOption {
        id: "fartlek",
        label: "Fartlek",
        description: "Unstructured speed play over varied terrain",
        intensity: IntensityLevel::Variable,
        beginner_friendly: true,
        time_efficient: false,
    },
];

const FAT_LOSS_FORMATS: &[FormatOption] = &[
    FormatOption {
        id: "metabolic",
        label: "Metabolic Conditioning",
        description: "Compound movements chained to keep the heart rate high",
        intensity: IntensityLevel::High,
        beginner_friendly: false,
        time_efficient: true,
    },
    FormatOption {
        id: "circuit",
        label: "Circuit",
        description: "Full-body stations with minimal rest",
        intensity: IntensityLevel::Moderate,
        beginner_friendly: true,
        time_efficient: true,
    },
    FormatOption {
        id: "supersets",
        label: "Supersets",
        description: "Paired movements that keep work density high",
        intensity: IntensityLevel::Moderate,
        beginner_friendly: true,
        time_efficient: true,
    },
];

const FUNCTIONAL_FITNESS_FORMATS: &[FormatOption] = &[
    FormatOption {
        id: "circuit",
        label: "Circuit",
        description: "Mixed movement stations covering push, pull and carry",
        intensity: IntensityLevel::Moderate,
        beginner_friendly: true,
        time_efficient: true,
    },
    FormatOption {
        id: "complexes",
        label: "Complexes",
        description: "A sequence of lifts done without putting the weight down",
        intensity: IntensityLevel::High,
        beginner_friendly: false,
        time_efficient: true,
    },
    FormatOption {
        id: "emom",
        label: "EMOM",
        description: "Movement-pattern work at the top of every minute",
        intensity: IntensityLevel::Moderate,
        beginner_friendly: true,
        time_efficient: true,
    },
];

const FLEXIBILITY_MOBILITY_FORMATS: &[FormatOption] = &[
    FormatOption {
        id: "static_stretching",
        label: "Static Stretching",
        description: "Long holds at end range",
        intensity: IntensityLevel::Low,
        beginner_friendly: true,
        time_efficient: false,
    },
    FormatOption {
        id: "dynamic_flow",
        label: "Dynamic Flow",
        description: "Continuous movement through full ranges of motion",
        intensity: IntensityLevel::Low,
        beginner_friendly: true,
        time_efficient: true,
    },
    FormatOption {
        id: "yoga_flow",
        label: "Yoga Flow",
        description: "Linked poses moving with the breath",
        intensity: IntensityLevel::Low,
        beginner_friendly: true,
        time_efficient: false,
    },
];

const RECOVERY_STRETCHING_FORMATS: &[FormatOption] = &[
    FormatOption {
        id: "gentle_stretching",
        label: "Gentle Stretching",
        description: "Easy full-body stretches held at mild tension",
        intensity: IntensityLevel::Low,
        beginner_friendly: true,
        time_efficient: false,
    },
    FormatOption {
        id: "foam_rolling",
        label: "Foam Rolling",
        description: "Self-massage over tight tissue",
        intensity: IntensityLevel::Low,
        beginner_friendly: true,
        time_efficient: true,
    },
    FormatOption {
        id: "restorative_yoga",
        label: "Restorative Yoga",
        description: "Fully supported poses held for several minutes",
        intensity: IntensityLevel::Low,
        beginner_friendly: true,
        time_efficient: false,
    },
];

/// Look up a format by id within a focus
pub fn find_format(focus: FocusKind, id: &str) -> Option<&'static FormatOption> {
    focus.formats().iter().find(|f| f.id == id)
}

/// Fallback metadata for ids the catalog does not know
///
/// Describes a general-fitness selection: moderate everything, open to all
/// levels, compatible with the common mid-length sessions.
pub fn default_metadata() -> FocusMetadata {
    FocusMetadata {
        intensity: IntensityLevel::Moderate,
        equipment: EquipmentLevel::Moderate,
        experience: ExperienceLevel::AllLevels,
        duration_compatibility: vec![30, 45, 60],
        category: FocusCategory::ConditioningCardio,
    }
}

/// A preset session length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DurationPreset {
    pub minutes: u32,
    pub label: &'static str,
    pub description: &'static str,
    pub suggested_warm_up: u32,
    pub suggested_cool_down: u32,
}

/// The seven canonical session lengths
///
/// Suggested structure values match the optimal-suggestion bands in the
/// duration calculator.
pub const DURATION_PRESETS: [DurationPreset; 7] = [
    DurationPreset {
        minutes: 15,
        label: "Quick Session",
        description: "A short, focused block for busy days",
        suggested_warm_up: 3,
        suggested_cool_down: 3,
    },
    DurationPreset {
        minutes: 20,
        label: "Express Workout",
        description: "Enough time for a complete, compact workout",
        suggested_warm_up: 3,
        suggested_cool_down: 3,
    },
    DurationPreset {
        minutes: 30,
        label: "Focused Session",
        description: "The sweet spot for a single training quality",
        suggested_warm_up: 5,
        suggested_cool_down: 5,
    },
    DurationPreset {
        minutes: 45,
        label: "Balanced Workout",
        description: "Room for a full main block plus accessories",
        suggested_warm_up: 5,
        suggested_cool_down: 5,
    },
    DurationPreset {
        minutes: 60,
        label: "Full Session",
        description: "A complete hour covering every training phase",
        suggested_warm_up: 8,
        suggested_cool_down: 7,
    },
    DurationPreset {
        minutes: 90,
        label: "Extended Training",
        description: "Extra volume for dedicated training days",
        suggested_warm_up: 12,
        suggested_cool_down: 10,
    },
    DurationPreset {
        minutes: 120,
        label: "Marathon Session",
        description: "Long-form training for high workloads",
        suggested_warm_up: 12,
        suggested_cool_down: 10,
    },
];

/// The fixed duration buckets the flattener one-hots against
pub const DURATION_BUCKETS: [u32; 7] = [15, 20, 30, 45, 60, 90, 120];

/// Look up a duration preset by exact minute value
pub fn find_duration_preset(minutes: u32) -> Option<&'static DurationPreset> {
    DURATION_PRESETS.iter().find(|p| p.minutes == minutes)
}

/// A warm-up or cool-down preset for display layers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StructurePreset {
    pub minutes: u32,
    pub label: &'static str,
}

pub const WARM_UP_PRESETS: [StructurePreset; 7] = [
    StructurePreset { minutes: 0, label: "No warm-up" },
    StructurePreset { minutes: 3, label: "Quick ramp-up" },
    StructurePreset { minutes: 5, label: "Standard warm-up" },
    StructurePreset { minutes: 8, label: "Thorough warm-up" },
    StructurePreset { minutes: 10, label: "Extended warm-up" },
    StructurePreset { minutes: 12, label: "Full preparation" },
    StructurePreset { minutes: 15, label: "Complete preparation" },
];

pub const COOL_DOWN_PRESETS: [StructurePreset; 7] = [
    StructurePreset { minutes: 0, label: "No cool-down" },
    StructurePreset { minutes: 3, label: "Quick reset" },
    StructurePreset { minutes: 5, label: "Standard cool-down" },
    StructurePreset { minutes: 8, label: "Thorough cool-down" },
    StructurePreset { minutes: 10, label: "Extended cool-down" },
    StructurePreset { minutes: 12, label: "Full wind-down" },
    StructurePreset { minutes: 15, label: "Complete recovery block" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_id_round_trip() {
        for kind in ALL_FOCUS_KINDS {
            assert_eq!(FocusKind::from_id(kind.id()), Some(kind));
        }
        assert_eq!(FocusKind::from_id("pilates"), None);
        assert_eq!(FocusKind::from_id(""), None);
    }

    #[test]
    fn test_format_ids_unique_within_focus() {
        for kind in ALL_FOCUS_KINDS {
            let formats = kind.formats();
            for (i, a) in formats.iter().enumerate() {
                for b in &formats[i + 1..] {
                    assert_ne!(a.id, b.id, "duplicate format id in {:?}", kind);
                }
            }
        }
    }

    #[test]
    fn test_format_catalog_width() {
        let total: usize = ALL_FOCUS_KINDS.iter().map(|k| k.formats().len()).sum();
        assert_eq!(total, 37);
    }

    #[test]
    fn test_focus_scoped_format_lookup() {
        // supersets exists for strength_training but not for hiit
        assert!(find_format(FocusKind::StrengthTraining, "supersets").is_some());
        assert!(find_format(FocusKind::Hiit, "supersets").is_none());
        assert!(find_format(FocusKind::Hiit, "tabata").is_some());
    }

    #[test]
    fn test_duration_compatibility_uses_known_buckets() {
        for kind in ALL_FOCUS_KINDS {
            for d in kind.duration_compatibility() {
                assert!(DURATION_BUCKETS.contains(d), "{:?} lists {}", kind, d);
            }
        }
    }

    #[test]
    fn test_duration_preset_lookup() {
        assert_eq!(find_duration_preset(45).unwrap().label, "Balanced Workout");
        assert!(find_duration_preset(47).is_none());
    }

    #[test]
    fn test_preset_suggestions_match_suggestion_bands() {
        use crate::duration::DurationCalculator;
        for preset in DURATION_PRESETS {
            let s = DurationCalculator::generate_optimal_suggestions(preset.minutes);
            assert_eq!(s.warm_up, preset.suggested_warm_up, "warm-up for {}", preset.minutes);
            assert_eq!(s.cool_down, preset.suggested_cool_down, "cool-down for {}", preset.minutes);
        }
    }
}
