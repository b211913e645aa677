use serde::{Deserialize, Serialize};

/// Training focus categories used to group focus options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusCategory {
    StrengthPower,
    MuscleBuilding,
    ConditioningCardio,
    FunctionalRecovery,
}

impl FocusCategory {
    /// Human-readable category label
    pub fn label(&self) -> &'static str {
        match self {
            FocusCategory::StrengthPower => "Strength & Power",
            FocusCategory::MuscleBuilding => "Muscle Building",
            FocusCategory::ConditioningCardio => "Conditioning & Cardio",
            FocusCategory::FunctionalRecovery => "Functional & Recovery",
        }
    }
}

/// Intensity level of a focus or workout format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntensityLevel {
    Low,
    Moderate,
    High,
    Variable,
}

impl IntensityLevel {
    pub fn label(&self) -> &'static str {
        match self {
            IntensityLevel::Low => "Low",
            IntensityLevel::Moderate => "Moderate",
            IntensityLevel::High => "High",
            IntensityLevel::Variable => "Variable",
        }
    }
}

/// Equipment requirement tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentLevel {
    #[serde(rename = "minimal")]
    Minimal,
    #[serde(rename = "moderate")]
    Moderate,
    #[serde(rename = "full-gym")]
    FullGym,
}

impl EquipmentLevel {
    pub fn label(&self) -> &'static str {
        match self {
            EquipmentLevel::Minimal => "Minimal equipment",
            EquipmentLevel::Moderate => "Some equipment",
            EquipmentLevel::FullGym => "Full gym",
        }
    }
}

/// Experience tiers for focus options
///
/// Formats carry a separate `beginner_friendly` flag instead of a distinct
/// beginner tier; the three-tier model here is shared by the builder and the
/// flattener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExperienceLevel {
    #[serde(rename = "all-levels")]
    AllLevels,
    #[serde(rename = "intermediate")]
    Intermediate,
    #[serde(rename = "advanced")]
    Advanced,
}

impl ExperienceLevel {
    pub fn label(&self) -> &'static str {
        match self {
            ExperienceLevel::AllLevels => "All levels",
            ExperienceLevel::Intermediate => "Intermediate",
            ExperienceLevel::Advanced => "Advanced",
        }
    }
}

/// Shape of a focus selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigurationKind {
    #[serde(rename = "focus-only")]
    FocusOnly,
    #[serde(rename = "focus-with-format")]
    FocusWithFormat,
}

/// Shape of a duration selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DurationStructure {
    #[serde(rename = "duration-only")]
    DurationOnly,
    #[serde(rename = "with-warmup")]
    WithWarmup,
    #[serde(rename = "with-cooldown")]
    WithCooldown,
    #[serde(rename = "full-structure")]
    FullStructure,
}

/// Catalog-derived metadata attached to a focus configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FocusMetadata {
    /// Overall intensity of the focus
    pub intensity: IntensityLevel,

    /// Equipment tier the focus expects
    pub equipment: EquipmentLevel,

    /// Experience tier the focus targets
    pub experience: ExperienceLevel,

    /// Session lengths (minutes) the focus works well with
    pub duration_compatibility: Vec<u32>,

    /// Owning category
    pub category: FocusCategory,
}

/// Advisory validation outcome for a focus configuration
///
/// Focus validation never blocks: `is_valid` stays true and the strings are
/// informational only. Duration validation is the path with hard errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FocusValidation {
    pub is_valid: bool,
    pub warnings: Vec<String>,
    pub recommendations: Vec<String>,
}

/// A fully derived focus selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FocusConfiguration {
    /// Whether anything is selected at all
    pub selected: bool,

    /// Focus identifier (catalog id, or a raw id the catalog does not know)
    pub focus: String,

    /// Display label for the focus
    pub focus_label: String,

    /// Optional format identifier, scoped to the focus
    pub format: Option<String>,

    /// Display label for the format
    pub format_label: Option<String>,

    /// Combined human-readable label
    pub label: String,

    /// Stable value key: `focus` or `focus_format`
    pub value: String,

    /// Generated description
    pub description: String,

    /// Selection shape
    pub configuration: ConfigurationKind,

    /// Catalog metadata (defaults when the focus is unknown)
    pub metadata: FocusMetadata,

    /// Advisory validation
    pub validation: FocusValidation,
}

/// A warm-up or cool-down selection passed into the duration builder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SegmentSelection {
    pub included: bool,
    pub duration: u32,
}

/// A warm-up or cool-down segment within a built duration configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureSegment {
    pub included: bool,

    /// Segment length in minutes (0 when excluded)
    pub duration: u32,

    /// Share of the total session, rounded to whole percent (0 when excluded)
    pub percentage: u32,
}

/// Validation outcome for a duration configuration
///
/// Errors block saving; warnings are advisory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DurationValidation {
    pub is_valid: bool,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

/// A fully derived duration selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DurationConfiguration {
    pub selected: bool,

    /// Total session length in minutes
    pub total_duration: u32,

    /// Combined human-readable label
    pub label: String,

    /// Stable value key
    pub value: String,

    /// Preset description, or a generated one for off-preset durations
    pub description: String,

    pub warm_up: StructureSegment,
    pub cool_down: StructureSegment,

    /// Minutes left for actual work, floored at 5
    pub working_time: u32,

    /// Selection shape
    pub configuration: DurationStructure,

    pub validation: DurationValidation,
}

/// Session efficiency rating tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EfficiencyRating {
    Excellent,
    Good,
    Moderate,
    Poor,
}

impl EfficiencyRating {
    /// Classify a working-time percentage
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            p if p >= 85 => EfficiencyRating::Excellent,
            p if p >= 70 => EfficiencyRating::Good,
            p if p >= 50 => EfficiencyRating::Moderate,
            _ => EfficiencyRating::Poor,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EfficiencyRating::Excellent => "Excellent",
            EfficiencyRating::Good => "Good",
            EfficiencyRating::Moderate => "Moderate",
            EfficiencyRating::Poor => "Poor",
        }
    }
}

/// Working-time share of a session with rating and advice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionEfficiency {
    /// Working time as a share of total, rounded to whole percent
    pub percentage: u32,

    pub rating: EfficiencyRating,

    /// Fixed advice string for the rating tier
    pub recommendation: String,
}

/// Suggested warm-up/cool-down split for a session length
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureSuggestion {
    /// Suggested warm-up minutes
    pub warm_up: u32,

    /// Suggested cool-down minutes
    pub cool_down: u32,

    /// Why this split fits the session length
    pub reasoning: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_efficiency_rating_tiers() {
        assert_eq!(EfficiencyRating::from_percentage(100), EfficiencyRating::Excellent);
        assert_eq!(EfficiencyRating::from_percentage(85), EfficiencyRating::Excellent);
        assert_eq!(EfficiencyRating::from_percentage(84), EfficiencyRating::Good);
        assert_eq!(EfficiencyRating::from_percentage(70), EfficiencyRating::Good);
        assert_eq!(EfficiencyRating::from_percentage(69), EfficiencyRating::Moderate);
        assert_eq!(EfficiencyRating::from_percentage(50), EfficiencyRating::Moderate);
        assert_eq!(EfficiencyRating::from_percentage(49), EfficiencyRating::Poor);
        assert_eq!(EfficiencyRating::from_percentage(0), EfficiencyRating::Poor);
    }

    #[test]
    fn test_enum_serialization_keys() {
        assert_eq!(
            serde_json::to_string(&EquipmentLevel::FullGym).unwrap(),
            "\"full-gym\""
        );
        assert_eq!(
            serde_json::to_string(&ExperienceLevel::AllLevels).unwrap(),
            "\"all-levels\""
        );
        assert_eq!(
            serde_json::to_string(&ConfigurationKind::FocusWithFormat).unwrap(),
            "\"focus-with-format\""
        );
        assert_eq!(
            serde_json::to_string(&DurationStructure::FullStructure).unwrap(),
            "\"full-structure\""
        );
        assert_eq!(
            serde_json::to_string(&FocusCategory::ConditioningCardio).unwrap(),
            "\"conditioning_cardio\""
        );
    }
}
