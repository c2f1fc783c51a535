//! Storage for projects, categories and tasks.
//!
//! Writes are not transactional: each insert or update is committed on its
//! own, so an aborted run leaves earlier rows in place.

mod data;
mod json;
mod memory;

use crate::error::Result;
use crate::model::{CategoryData, Project, Task};

pub use data::StoreData;
pub use json::JsonFileStore;
pub use memory::MemoryStore;

/// Row storage used by the template loader and migrations.
pub trait CategoryStore {
    /// All projects, ordered by id.
    fn projects(&self) -> Result<Vec<Project>>;

    /// One project by id.
    fn project(&self, project_id: u64) -> Result<Option<Project>> {
        Ok(self.projects()?.into_iter().find(|p| p.id == project_id))
    }

    /// Insert a project; an id of 0 is replaced with a fresh one.
    fn insert_project(&mut self, project: Project) -> Result<Project>;

    /// Replace a project row.
    fn update_project(&mut self, project: &Project) -> Result<()>;

    /// Categories of a project, ordered by id.
    fn categories(&self, project_id: u64) -> Result<Vec<CategoryData>>;

    /// Insert a category and return it with its assigned id.
    fn insert_category(&mut self, category: CategoryData) -> Result<CategoryData>;

    /// Set the stored color of a category; malformed hex is rejected.
    fn update_category_color(&mut self, category_id: u64, color: &str) -> Result<()>;

    /// Delete categories by id; returns the number removed.
    fn delete_categories(&mut self, ids: &[u64]) -> Result<usize>;

    /// Tasks of a project, ordered by id.
    fn tasks(&self, project_id: u64) -> Result<Vec<Task>>;

    /// Insert a task and return it with its assigned id.
    fn insert_task(&mut self, task: Task) -> Result<Task>;

    /// Replace a task row.
    fn update_task(&mut self, task: &Task) -> Result<()>;

    /// Delete tasks by id; returns the number removed.
    fn delete_tasks(&mut self, ids: &[u64]) -> Result<usize>;
}
