use planrs::{catalog, duration, export, flatten, focus, models};

/// Integration tests that exercise the complete derivation pipeline:
/// selection flow -> builder -> flattener -> export.

#[cfg(test)]
mod integration_tests {
    use super::*;
    use duration::DurationCalculator;
    use flatten::{FocusFlattener, FocusInput};
    use focus::{FocusBuilder, FocusSelection};
    use models::{ConfigurationKind, DurationStructure, EfficiencyRating, SegmentSelection};
    use tempfile::TempDir;

    fn build_hiit_tabata() -> models::FocusConfiguration {
        FocusBuilder::build_focus_configuration("hiit", "HIIT", Some("tabata"), Some("Tabata"))
    }

    /// Selection flow from nothing to a flattened record
    #[test]
    fn test_complete_focus_workflow() {
        // user picks a focus, then a format
        let selection = FocusSelection::select_focus(None, "hiit", "HIIT").unwrap();
        let selection =
            FocusSelection::select_format(Some(&selection), "tabata", "Tabata").unwrap();

        let config = selection.build();
        assert_eq!(config.configuration, ConfigurationKind::FocusWithFormat);
        assert_eq!(config.value, "hiit_tabata");

        // duration advice for the selection
        let validation =
            FocusBuilder::validate_focus_configuration(&config.focus, config.format.as_deref(), Some(60));
        assert!(validation.is_valid);
        assert!(validation.warnings.iter().any(|w| w.contains("HIIT")));

        // flatten for analytics
        let record =
            FocusFlattener::flatten_focus_data(Some(&FocusInput::Structured(config))).unwrap();
        assert!(record.focus_hiit);
        assert!(record.format_hiit_tabata);
        assert!(record.score_complexity <= 100);
    }

    /// A 20 minute session with no structure is fully working time
    #[test]
    fn test_bare_twenty_minute_session() {
        let config = DurationCalculator::build_duration_configuration(
            20,
            SegmentSelection::default(),
            SegmentSelection::default(),
        )
        .unwrap();

        assert_eq!(config.working_time, 20);
        assert_eq!(config.configuration, DurationStructure::DurationOnly);
        assert!(config.validation.is_valid);

        let efficiency =
            DurationCalculator::calculate_session_efficiency(config.total_duration, config.working_time);
        assert_eq!(efficiency.percentage, 100);
        assert_eq!(efficiency.rating, EfficiencyRating::Excellent);
    }

    /// Duration workflow seeded from the optimal suggestion
    #[test]
    fn test_suggested_structure_workflow() {
        let suggestion = DurationCalculator::generate_optimal_suggestions(60);
        let config = DurationCalculator::build_duration_configuration(
            60,
            SegmentSelection { included: true, duration: suggestion.warm_up },
            SegmentSelection { included: true, duration: suggestion.cool_down },
        )
        .unwrap();

        assert_eq!(config.working_time, 45);
        assert_eq!(config.configuration, DurationStructure::FullStructure);
        assert!(config.validation.is_valid);
        assert!(config.validation.errors.is_empty());
        assert_eq!(config.warm_up.percentage, 13);
        assert_eq!(config.cool_down.percentage, 12);
    }

    /// A stored dataset of mixed structured and legacy entries flattens and
    /// exports end to end
    #[test]
    fn test_batch_flatten_and_export() {
        let stored = serde_json::json!([
            build_hiit_tabata(),
            "strength",
            "zumba",
        ]);
        let inputs: Vec<FocusInput> = serde_json::from_value(stored).unwrap();
        assert_eq!(inputs.len(), 3);

        let records: Vec<_> = inputs
            .iter()
            .map(|i| FocusFlattener::flatten_focus_data(Some(i)).unwrap())
            .collect();

        assert!(records[0].focus_hiit);
        assert!(records[1].focus_strength_training);
        assert!(!records[2].focus_strength_training); // unrecognized legacy
        assert!(records[2].experience_all_levels);

        let dir = TempDir::new().unwrap();
        let csv_path = dir.path().join("records.csv");
        export::csv::export_records(&records, &csv_path).unwrap();
        let content = std::fs::read_to_string(&csv_path).unwrap();
        assert_eq!(content.lines().count(), 4); // header + 3 rows
        assert!(content.lines().next().unwrap().contains("score_beginner_suitability"));

        let json_path = dir.path().join("records.json");
        export::json::export_records(records, &json_path).unwrap();
        let content = std::fs::read_to_string(&json_path).unwrap();
        assert!(content.contains("\"record_count\": 3"));
    }

    /// Builder tolerates what the flattener rejects
    #[test]
    fn test_lenient_strict_asymmetry() {
        // the builder degrades unknown ids silently
        let config = FocusBuilder::build_focus_configuration("aquafit", "Aqua Fit", None, None);
        assert!(config.validation.is_valid);

        // the same data stays flattenable because it is structurally sound
        assert!(FocusFlattener::flatten_focus_data(Some(&FocusInput::Structured(config.clone())))
            .is_ok());

        // but structural damage is rejected
        let mut broken = config;
        broken.value = String::new();
        assert!(FocusFlattener::flatten_focus_data(Some(&FocusInput::Structured(broken)))
            .is_err());
    }

    /// Alias keywords produce identical analytics rows
    #[test]
    fn test_legacy_alias_rows_match() {
        for (a, b) in [
            ("strength", "strength_training"),
            ("cardio", "cardio_endurance"),
            ("hypertrophy", "muscle_building"),
        ] {
            let mut left = FocusFlattener::flatten_focus_data(Some(&FocusInput::Legacy(
                a.to_string(),
            )))
            .unwrap();
            let mut right = FocusFlattener::flatten_focus_data(Some(&FocusInput::Legacy(
                b.to_string(),
            )))
            .unwrap();
            left.source_backup = None;
            right.source_backup = None;
            assert_eq!(left, right, "{} vs {}", a, b);
        }
    }

    /// Every catalog focus/format pair survives the full pipeline with
    /// bounded scores
    #[test]
    fn test_all_catalog_pairs_flatten() {
        for kind in catalog::ALL_FOCUS_KINDS {
            let mut variants: Vec<Option<&str>> = vec![None];
            variants.extend(kind.formats().iter().map(|f| Some(f.id)));

            for format in variants {
                let config = FocusBuilder::build_focus_configuration(
                    kind.id(),
                    kind.label(),
                    format,
                    None,
                );
                let record = FocusFlattener::flatten_focus_data(Some(&FocusInput::Structured(
                    config,
                )))
                .unwrap();

                for score in [
                    record.score_complexity,
                    record.score_accessibility,
                    record.score_time_efficiency,
                    record.score_beginner_suitability,
                    record.score_advanced_potential,
                ] {
                    assert!(score <= 100, "{:?}/{:?}", kind, format);
                }

                if format.is_some() {
                    assert!(record.config_focus_with_format);
                } else {
                    assert!(record.config_focus_only);
                }
            }
        }
    }

    /// The source backup round-trips to the original configuration
    #[test]
    fn test_source_backup_round_trip() {
        let config = build_hiit_tabata();
        let record =
            FocusFlattener::flatten_focus_data(Some(&FocusInput::Structured(config.clone())))
                .unwrap();

        let backup = record.source_backup.unwrap();
        let restored: models::FocusConfiguration = serde_json::from_str(&backup).unwrap();
        assert_eq!(restored, config);
    }
}
