//! Data model types for categories, projects and tasks.

mod category;
mod project;
mod task;

pub use category::{sorted_siblings, CategoryData, CategoryKind};
pub use project::{Project, ProjectThemeData};
pub use task::Task;
