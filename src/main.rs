//! tiercolor-templates - administrative tool for project category templates.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use tiercolor::config::{DEFAULT_PRESET, DEFAULT_STORE_PATH, DEFAULT_THEME_KEY};
use tiercolor::theme::all_themes;
use tiercolor::{
    create_from_templates, find_theme, migrate_store, preset_by_name, reset_templates,
    validate_catalog, validate_store, JsonFileStore, LoaderConfig, ValidationResult,
};

/// Seed, reset and migrate category/task templates for projects.
#[derive(Parser, Debug)]
#[command(name = "tiercolor-templates")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Normalize project theme names and assign colors to uncolored categories
    #[arg(long)]
    migrate: bool,

    /// Create template categories and tasks (all projects when no id is given)
    #[arg(long, value_name = "PROJECT_ID", num_args = 0..=1)]
    create: Option<Option<u64>>,

    /// Delete template rows and create them again (all projects when no id is given)
    #[arg(long, value_name = "PROJECT_ID", num_args = 0..=1)]
    reset: Option<Option<u64>>,

    /// Validate the store only, don't modify it
    #[arg(long)]
    validate: bool,

    /// Print the theme catalog as JSON
    #[arg(long)]
    themes: bool,

    /// JSON store file
    #[arg(short, long, env = "TIERCOLOR_STORE", default_value = DEFAULT_STORE_PATH)]
    store: PathBuf,

    /// Template preset to load
    #[arg(short, long, default_value = DEFAULT_PRESET)]
    preset: String,

    /// Global theme for projects without their own
    #[arg(short, long, default_value = DEFAULT_THEME_KEY)]
    theme: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn report_validation(validation: &ValidationResult) {
    for warning in &validation.warnings {
        warn!("{}", warning);
    }

    for err in &validation.errors {
        error!("{}", err);
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if args.themes {
        let json = serde_json::to_string_pretty(all_themes())?;
        println!("{}", json);
        return Ok(());
    }

    let catalog = validate_catalog();
    report_validation(&catalog);
    if !catalog.passed {
        anyhow::bail!("Theme catalog is invalid");
    }

    if find_theme(&args.theme).is_none() {
        warn!("Unknown theme '{}', using {}", args.theme, DEFAULT_THEME_KEY);
    }
    // Fail on a bad preset name before touching the store.
    preset_by_name(&args.preset)?;

    let config = LoaderConfig::new(&args.store)
        .with_preset(&args.preset)
        .with_global_theme(&args.theme);

    // Validate-only mode
    if args.validate {
        let store = JsonFileStore::open(&config.store_path)
            .with_context(|| format!("Failed to open {}", config.store_path.display()))?;
        let validation = validate_store(&store)?;
        report_validation(&validation);
        if !validation.passed {
            anyhow::bail!("Validation failed");
        }
        info!("Validation passed");
        return Ok(());
    }

    if !args.migrate && args.create.is_none() && args.reset.is_none() {
        anyhow::bail!("Nothing to do: pass --migrate, --create or --reset (see --help)");
    }

    info!("Store: {}", config.store_path.display());

    if args.migrate {
        let (report, validation) = migrate_store(&config)
            .with_context(|| format!("Migration of {} failed", config.store_path.display()))?;
        report_validation(&validation);
        info!(
            "Migrated {} project(s): {} theme(s) normalized, {} color(s) assigned",
            report.projects_scanned, report.themes_normalized, report.colors_assigned
        );
    }

    if let Some(project_id) = args.reset {
        let reports = reset_templates(&config, project_id)
            .with_context(|| format!("Reset of preset '{}' failed", config.preset))?;
        for (id, report) in reports {
            info!(
                "Project {}: removed {} categories, {} tasks; created {} categories, {} tasks; relinked {} tasks",
                id,
                report.categories_removed,
                report.tasks_removed,
                report.load.categories_created,
                report.load.tasks_created,
                report.tasks_relinked
            );
        }
    }

    if let Some(project_id) = args.create {
        let reports = create_from_templates(&config, project_id)
            .with_context(|| format!("Loading preset '{}' failed", config.preset))?;
        for (id, report) in reports {
            if report.is_noop() {
                info!("Project {}: already up to date", id);
            }
        }
    }

    Ok(())
}
