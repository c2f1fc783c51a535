//! tiercolor - Tier category color themes and project template loading.
//!
//! Categories in a project are colored in two tiers. Tier1 categories take one
//! of five theme slots; each tier1 position owns a group of five tier2 slots.
//! Lookups never fail: missing data falls back to theme defaults, a stable
//! name hash, or a neutral gray.
//!
//! # Example
//!
//! ```
//! use tiercolor::{get_theme, tier1_color, tier2_color};
//!
//! let theme = get_theme("Classic Construction");
//! assert_eq!(tier1_color("Structural", Some(theme), None), theme.tier1.subcategory2);
//! assert_eq!(tier2_color("Drywall", None, Some(theme), None), theme.tier2_slot(12));
//! ```

pub mod apply;
pub mod color;
pub mod config;
pub mod error;
pub mod model;
pub mod resolve;
pub mod state;
pub mod store;
pub mod template;
pub mod theme;
pub mod validation;

// Re-exports for convenience
pub use apply::{apply_theme, css_variables, CssSink};
pub use color::{contrast_text, hex_to_rgba, is_valid_hex};
pub use config::LoaderConfig;
pub use error::{ErrorCode, PaletteError, Result};
pub use model::{CategoryData, CategoryKind, Project, ProjectThemeData, Task};
pub use resolve::{tier1_color, tier2_color, ColorSource, ProjectContext, Resolution};
pub use state::{ColorResolver, ThemeChange, ThemeState};
pub use store::{CategoryStore, JsonFileStore, MemoryStore};
pub use template::{preset_by_name, LoadReport, MigrationReport, ResetReport, TemplateLoader};
pub use theme::{find_theme, get_theme, ColorTheme};
pub use validation::{validate_catalog, validate_store, ValidationResult};

/// Open the configured store and select the preset and global theme.
fn open(
    config: &LoaderConfig,
) -> Result<(
    JsonFileStore,
    &'static template::TemplatePreset,
    &'static ColorTheme,
)> {
    let preset = preset_by_name(&config.preset)?;
    let store = JsonFileStore::open(&config.store_path)?;
    Ok((store, preset, get_theme(&config.global_theme)))
}

/// Load the configured preset into one project, or every project when `project_id` is `None`.
pub fn create_from_templates(
    config: &LoaderConfig,
    project_id: Option<u64>,
) -> Result<Vec<(u64, LoadReport)>> {
    let (mut store, preset, theme) = open(config)?;
    let mut loader = TemplateLoader::new(&mut store).with_global_theme(theme);

    match project_id {
        Some(id) => Ok(vec![(id, loader.load(id, preset)?)]),
        None => loader.load_all(preset),
    }
}

/// Remove and reload the configured preset in one project, or every project.
pub fn reset_templates(
    config: &LoaderConfig,
    project_id: Option<u64>,
) -> Result<Vec<(u64, ResetReport)>> {
    let (mut store, preset, theme) = open(config)?;
    let mut loader = TemplateLoader::new(&mut store).with_global_theme(theme);

    match project_id {
        Some(id) => Ok(vec![(id, loader.reset(id, preset)?)]),
        None => loader.reset_all(preset),
    }
}

/// Run the migration pass over the configured store.
///
/// Returns the migration report together with a validation of the migrated store.
pub fn migrate_store(config: &LoaderConfig) -> Result<(MigrationReport, ValidationResult)> {
    let mut store = JsonFileStore::open(&config.store_path)?;
    let theme = get_theme(&config.global_theme);

    let report = TemplateLoader::new(&mut store)
        .with_global_theme(theme)
        .migrate()?;
    store.mark_current_version()?;

    let validation = validate_store(&store)?;
    Ok((report, validation))
}
