use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use serde_json::json;
use std::path::PathBuf;
use std::str::FromStr;
use tabled::{Table, Tabled};

use planrs::catalog::{find_duration_preset, FocusKind, ALL_FOCUS_KINDS, DURATION_PRESETS};
use planrs::config::AppConfig;
use planrs::duration::DurationCalculator;
use planrs::export::{self, ExportFormat};
use planrs::flatten::{FocusFlattener, FocusInput};
use planrs::focus::FocusBuilder;
use planrs::logging::{init_logging, LogLevel};
use planrs::models::SegmentSelection;
use planrs::tracking::{LogTracker, SelectionTracker, TrackingMode};

/// PlanRS - Workout Configuration CLI
///
/// A Rust-based engine for deriving annotated workout configurations from
/// focus, format and duration selections, and for flattening stored
/// configurations into analytics-ready records.
#[derive(Parser)]
#[command(name = "planrs")]
#[command(author = "PlanRS Contributors")]
#[command(version = "0.1.0")]
#[command(about = "Workout Configuration CLI", long_about = None)]
struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase verbosity of output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build and inspect a focus configuration
    Focus {
        /// Focus id (e.g. hiit, strength_training)
        focus: String,

        /// Display label (defaults to the catalog label)
        #[arg(short, long)]
        label: Option<String>,

        /// Workout format id within the focus (e.g. tabata)
        #[arg(short, long)]
        format: Option<String>,

        /// Display label for the format
        #[arg(long)]
        format_label: Option<String>,

        /// Session length in minutes, for compatibility advice
        #[arg(short, long)]
        duration: Option<u32>,

        /// Print the configuration as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build and validate a duration configuration
    Duration {
        /// Total session length in minutes
        minutes: u32,

        /// Warm-up minutes
        #[arg(short, long)]
        warm_up: Option<u32>,

        /// Cool-down minutes
        #[arg(short = 'd', long)]
        cool_down: Option<u32>,

        /// Print the configuration as JSON
        #[arg(long)]
        json: bool,
    },

    /// Suggest an optimal warm-up/cool-down split for a session length
    Suggest {
        /// Total session length in minutes
        minutes: u32,
    },

    /// Flatten stored focus data into analytics records
    Flatten {
        /// JSON file holding an array of stored configurations or legacy strings
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Flatten a single legacy focus string instead of a file
        #[arg(short, long)]
        legacy: Option<String>,

        /// Output file path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format (csv, json)
        #[arg(short = 'f', long, default_value = "csv")]
        format: String,
    },

    /// Display the focus, format and duration catalogs
    Catalog {
        /// List the formats of one focus instead of the focus table
        #[arg(long)]
        focus: Option<String>,

        /// List the duration presets
        #[arg(long)]
        durations: bool,
    },

    /// Configure application settings
    Config {
        /// List all configuration options
        #[arg(short, long)]
        list: bool,

        /// Set a configuration value (key=value)
        #[arg(short, long)]
        set: Option<String>,

        /// Get a configuration value
        #[arg(short, long)]
        get: Option<String>,
    },
}

#[derive(Tabled)]
struct FocusRow {
    #[tabled(rename = "Id")]
    id: &'static str,
    #[tabled(rename = "Label")]
    label: &'static str,
    #[tabled(rename = "Category")]
    category: &'static str,
    #[tabled(rename = "Intensity")]
    intensity: &'static str,
    #[tabled(rename = "Equipment")]
    equipment: &'static str,
    #[tabled(rename = "Experience")]
    experience: &'static str,
    #[tabled(rename = "Durations")]
    durations: String,
}

#[derive(Tabled)]
struct FormatRow {
    #[tabled(rename = "Id")]
    id: &'static str,
    #[tabled(rename = "Label")]
    label: &'static str,
    #[tabled(rename = "Intensity")]
    intensity: &'static str,
    #[tabled(rename = "Beginner friendly")]
    beginner_friendly: bool,
    #[tabled(rename = "Time efficient")]
    time_efficient: bool,
}

#[derive(Tabled)]
struct DurationRow {
    #[tabled(rename = "Minutes")]
    minutes: u32,
    #[tabled(rename = "Label")]
    label: &'static str,
    #[tabled(rename = "Warm-up")]
    warm_up: u32,
    #[tabled(rename = "Cool-down")]
    cool_down: u32,
    #[tabled(rename = "Description")]
    description: &'static str,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => AppConfig::default_path()?,
    };
    let mut app_config = AppConfig::load(&config_path)?;

    // CLI verbosity overrides the configured level
    if cli.verbose > 0 {
        app_config.logging.level = LogLevel::from_verbosity(cli.verbose);
    }
    init_logging(&app_config.logging)?;

    match cli.command {
        Commands::Focus {
            focus,
            label,
            format,
            format_label,
            duration,
            json,
        } => run_focus(focus, label, format, format_label, duration, json),

        Commands::Duration {
            minutes,
            warm_up,
            cool_down,
            json,
        } => run_duration(minutes, warm_up, cool_down, json),

        Commands::Suggest { minutes } => run_suggest(minutes),

        Commands::Flatten {
            input,
            legacy,
            output,
            format,
        } => run_flatten(input, legacy, output, &format, &app_config),

        Commands::Catalog { focus, durations } => run_catalog(focus, durations),

        Commands::Config { list, set, get } => {
            run_config(&mut app_config, &config_path, list, set, get)
        }
    }
}

fn run_focus(
    focus: String,
    label: Option<String>,
    format: Option<String>,
    format_label: Option<String>,
    duration: Option<u32>,
    json: bool,
) -> Result<()> {
    let focus_label = label
        .or_else(|| FocusKind::from_id(&focus).map(|k| k.label().to_string()))
        .unwrap_or_else(|| focus.clone());

    let config = FocusBuilder::build_focus_configuration(
        &focus,
        &focus_label,
        format.as_deref(),
        format_label.as_deref(),
    );
    let validation =
        FocusBuilder::validate_focus_configuration(&focus, config.format.as_deref(), duration);

    LogTracker.track_selection("customization_focus", &json!(config.value), TrackingMode::Detailed);

    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    println!("{}", config.label.green().bold());
    println!("  {}", config.description);
    println!("  Value: {}", config.value);
    println!("  Category: {}", config.metadata.category.label());
    println!("  Intensity: {}", config.metadata.intensity.label());
    println!("  Equipment: {}", config.metadata.equipment.label());
    println!("  Experience: {}", config.metadata.experience.label());
    print_advice(&validation.warnings, &validation.recommendations);
    Ok(())
}

fn run_duration(
    minutes: u32,
    warm_up: Option<u32>,
    cool_down: Option<u32>,
    json: bool,
) -> Result<()> {
    let warm_up = SegmentSelection {
        included: warm_up.is_some(),
        duration: warm_up.unwrap_or(0),
    };
    let cool_down = SegmentSelection {
        included: cool_down.is_some(),
        duration: cool_down.unwrap_or(0),
    };

    let Some(config) = DurationCalculator::build_duration_configuration(minutes, warm_up, cool_down)
    else {
        println!("{}", "No duration selected; configuration cleared".yellow());
        return Ok(());
    };

    LogTracker.track_selection(
        "customization_duration",
        &json!(config.value),
        TrackingMode::Detailed,
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    println!("{}", config.label.blue().bold());
    println!("  {}", config.description);
    println!("  Working time: {} minutes", config.working_time);

    let efficiency =
        DurationCalculator::calculate_session_efficiency(config.total_duration, config.working_time);
    let rating = match efficiency.rating {
        planrs::models::EfficiencyRating::Excellent => efficiency.rating.label().green(),
        planrs::models::EfficiencyRating::Good => efficiency.rating.label().cyan(),
        planrs::models::EfficiencyRating::Moderate => efficiency.rating.label().yellow(),
        planrs::models::EfficiencyRating::Poor => efficiency.rating.label().red(),
    };
    println!("  Efficiency: {}% ({})", efficiency.percentage, rating);
    println!("  {}", efficiency.recommendation.dimmed());

    for error in &config.validation.errors {
        println!("  {} {}", "✗".red(), error.red());
    }
    for warning in &config.validation.warnings {
        println!("  {} {}", "!".yellow(), warning.yellow());
    }
    if config.validation.is_valid {
        println!("{}", "✓ Time allocation is valid".green());
    } else {
        println!("{}", "✗ Time allocation has errors".red().bold());
    }
    Ok(())
}

fn run_suggest(minutes: u32) -> Result<()> {
    let suggestion = DurationCalculator::generate_optimal_suggestions(minutes);
    println!("{}", format!("Suggested structure for {} minutes", minutes).cyan().bold());
    println!("  Warm-up: {} min", suggestion.warm_up);
    println!("  Cool-down: {} min", suggestion.cool_down);
    println!("  {}", suggestion.reasoning.dimmed());

    if let Some(preset) = find_duration_preset(minutes) {
        println!("  Preset: {} — {}", preset.label, preset.description);
    }
    Ok(())
}

fn run_flatten(
    input: Option<PathBuf>,
    legacy: Option<String>,
    output: Option<PathBuf>,
    format: &str,
    app_config: &AppConfig,
) -> Result<()> {
    let inputs: Vec<FocusInput> = match (input, legacy) {
        (Some(path), None) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read input file: {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse input file: {}", path.display()))?
        }
        (None, Some(raw)) => vec![FocusInput::Legacy(raw)],
        (None, None) => bail!("Provide either --input <FILE> or --legacy <STRING>"),
        (Some(_), Some(_)) => bail!("--input and --legacy are mutually exclusive"),
    };

    let mut records = Vec::with_capacity(inputs.len());
    for (index, input) in inputs.iter().enumerate() {
        let mut record = FocusFlattener::flatten_focus_data(Some(input))
            .map_err(planrs::PlanRsError::from)
            .map_err(|e| anyhow::anyhow!("record {}: {}", index, e.user_message()))?;
        if !app_config.settings.include_source_backup {
            record.source_backup = None;
        }
        records.push(record);
    }

    let export_format = ExportFormat::from_str(format).map_err(planrs::PlanRsError::from)?;
    match (output, export_format) {
        (Some(path), ExportFormat::Csv) => {
            export::csv::export_records(&records, &path).map_err(planrs::PlanRsError::from)?;
            println!(
                "{}",
                format!("✓ Exported {} records to {}", records.len(), path.display()).green()
            );
        }
        (Some(path), ExportFormat::Json) => {
            export::json::export_records(records, &path).map_err(planrs::PlanRsError::from)?;
            println!("{}", format!("✓ Exported records to {}", path.display()).green());
        }
        (None, ExportFormat::Csv) => {
            print!("{}", export::csv::records_to_string(&records).map_err(planrs::PlanRsError::from)?);
        }
        (None, ExportFormat::Json) => {
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
    }
    Ok(())
}

fn run_catalog(focus: Option<String>, durations: bool) -> Result<()> {
    if durations {
        let rows: Vec<DurationRow> = DURATION_PRESETS
            .iter()
            .map(|p| DurationRow {
                minutes: p.minutes,
                label: p.label,
                warm_up: p.suggested_warm_up,
                cool_down: p.suggested_cool_down,
                description: p.description,
            })
            .collect();
        println!("{}", Table::new(rows));
        return Ok(());
    }

    if let Some(focus) = focus {
        let Some(kind) = FocusKind::from_id(&focus) else {
            bail!("Unknown focus id: {}", focus);
        };
        println!("{}", format!("Formats for {}", kind.label()).cyan().bold());
        let rows: Vec<FormatRow> = kind
            .formats()
            .iter()
            .map(|f| FormatRow {
                id: f.id,
                label: f.label,
                intensity: f.intensity.label(),
                beginner_friendly: f.beginner_friendly,
                time_efficient: f.time_efficient,
            })
            .collect();
        println!("{}", Table::new(rows));
        return Ok(());
    }

    let rows: Vec<FocusRow> = ALL_FOCUS_KINDS
        .iter()
        .map(|k| FocusRow {
            id: k.id(),
            label: k.label(),
            category: k.category().label(),
            intensity: k.intensity().label(),
            equipment: k.equipment().label(),
            experience: k.experience().label(),
            durations: k
                .duration_compatibility()
                .iter()
                .map(|d| d.to_string())
                .collect::<Vec<_>>()
                .join("/"),
        })
        .collect();
    println!("{}", Table::new(rows));
    Ok(())
}

fn run_config(
    app_config: &mut AppConfig,
    config_path: &PathBuf,
    list: bool,
    set: Option<String>,
    get: Option<String>,
) -> Result<()> {
    if list {
        println!("{}", toml::to_string_pretty(app_config)?);
    } else if let Some(key_value) = set {
        let (key, value) = key_value
            .split_once('=')
            .context("Expected key=value for --set")?;
        app_config.set(key.trim(), value.trim())?;
        app_config.save(config_path)?;
        println!("{}", format!("✓ Set {}", key.trim()).green());
    } else if let Some(key) = get {
        match app_config.get(&key) {
            Some(value) => println!("{}", value),
            None => bail!("Unknown configuration key: {}", key),
        }
    } else {
        println!("Config file: {}", config_path.display());
    }
    Ok(())
}

fn print_advice(warnings: &[String], recommendations: &[String]) {
    for warning in warnings {
        println!("  {} {}", "!".yellow(), warning.yellow());
    }
    for recommendation in recommendations {
        println!("  {} {}", "→".cyan(), recommendation);
    }
}
