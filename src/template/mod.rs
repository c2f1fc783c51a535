//! Category/task templates and the loader that seeds them into a project.

mod loader;
mod presets;

pub use loader::{LoadReport, MigrationReport, ResetReport, TemplateLoader};
pub use presets::{
    preset_by_name, preset_names, TaskTemplate, TemplatePreset, Tier1Template, Tier2Template,
    PRESETS,
};
