//! In-memory store.

use super::{CategoryStore, StoreData};
use crate::error::{PaletteError, Result};
use crate::model::{CategoryData, Project, Task};

/// Store backed by a [`StoreData`] value.
///
/// `fail_after` makes the store reject writes once that many have succeeded,
/// which lets callers exercise partial-failure paths.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    data: StoreData,
    writes: usize,
    fail_after: Option<usize>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap existing data.
    pub fn from_data(data: StoreData) -> Self {
        Self {
            data,
            ..Default::default()
        }
    }

    /// Reject every write after `writes` successful ones.
    pub fn fail_after(mut self, writes: usize) -> Self {
        self.fail_after = Some(writes);
        self
    }

    /// Current contents.
    pub fn data(&self) -> &StoreData {
        &self.data
    }

    fn write(&mut self) -> Result<()> {
        if self.fail_after.is_some_and(|limit| self.writes >= limit) {
            return Err(PaletteError::Io(std::io::Error::other(
                "simulated write failure",
            )));
        }
        self.writes += 1;
        Ok(())
    }
}

impl CategoryStore for MemoryStore {
    fn projects(&self) -> Result<Vec<Project>> {
        Ok(self.data.projects())
    }

    fn insert_project(&mut self, project: Project) -> Result<Project> {
        self.write()?;
        self.data.insert_project(project)
    }

    fn update_project(&mut self, project: &Project) -> Result<()> {
        self.write()?;
        self.data.update_project(project)
    }

    fn categories(&self, project_id: u64) -> Result<Vec<CategoryData>> {
        Ok(self.data.categories(project_id))
    }

    fn insert_category(&mut self, category: CategoryData) -> Result<CategoryData> {
        self.write()?;
        self.data.insert_category(category)
    }

    fn update_category_color(&mut self, category_id: u64, color: &str) -> Result<()> {
        self.write()?;
        self.data.update_category_color(category_id, color)
    }

    fn delete_categories(&mut self, ids: &[u64]) -> Result<usize> {
        self.write()?;
        Ok(self.data.delete_categories(ids))
    }

    fn tasks(&self, project_id: u64) -> Result<Vec<Task>> {
        Ok(self.data.tasks(project_id))
    }

    fn insert_task(&mut self, task: Task) -> Result<Task> {
        self.write()?;
        self.data.insert_task(task)
    }

    fn update_task(&mut self, task: &Task) -> Result<()> {
        self.write()?;
        self.data.update_task(task)
    }

    fn delete_tasks(&mut self, ids: &[u64]) -> Result<usize> {
        self.write()?;
        Ok(self.data.delete_tasks(ids))
    }
}
