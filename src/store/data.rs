//! Serializable store contents shared by the store implementations.

use crate::color::is_valid_hex;
use crate::config::STORE_FORMAT_VERSION;
use crate::error::{PaletteError, Result};
use crate::model::{CategoryData, Project, Task};
use serde::{Deserialize, Serialize};

/// Everything a store holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreData {
    /// Layout version of the serialized form.
    #[serde(default = "default_version")]
    pub version: u32,
    /// Next id handed out for any row.
    #[serde(default = "default_next_id")]
    pub next_id: u64,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub categories: Vec<CategoryData>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

fn default_version() -> u32 {
    1
}

fn default_next_id() -> u64 {
    1
}

impl Default for StoreData {
    fn default() -> Self {
        Self {
            version: STORE_FORMAT_VERSION,
            next_id: 1,
            projects: Vec::new(),
            categories: Vec::new(),
            tasks: Vec::new(),
        }
    }
}

impl StoreData {
    /// Hand out a fresh row id.
    pub fn allocate_id(&mut self) -> Result<u64> {
        // Files edited by hand may hold ids past the counter.
        let max_used = self
            .projects
            .iter()
            .map(|p| p.id)
            .chain(self.categories.iter().map(|c| c.id))
            .chain(self.tasks.iter().map(|t| t.id))
            .max()
            .unwrap_or(0);
        let id = max_used
            .checked_add(1)
            .map(|next_free| self.next_id.max(next_free))
            .ok_or(PaletteError::IdsExhausted { max_id: max_used })?;
        self.next_id = id.saturating_add(1);
        Ok(id)
    }

    pub fn projects(&self) -> Vec<Project> {
        let mut projects = self.projects.clone();
        projects.sort_by_key(|p| p.id);
        projects
    }

    pub fn insert_project(&mut self, mut project: Project) -> Result<Project> {
        if project.id == 0 || self.projects.iter().any(|p| p.id == project.id) {
            project.id = self.allocate_id()?;
        }
        self.projects.push(project.clone());
        Ok(project)
    }

    pub fn update_project(&mut self, project: &Project) -> Result<()> {
        let row = self
            .projects
            .iter_mut()
            .find(|p| p.id == project.id)
            .ok_or(PaletteError::ProjectNotFound {
                project_id: project.id,
            })?;
        *row = project.clone();
        Ok(())
    }

    pub fn categories(&self, project_id: u64) -> Vec<CategoryData> {
        let mut rows: Vec<CategoryData> = self
            .categories
            .iter()
            .filter(|c| c.project_id == Some(project_id))
            .cloned()
            .collect();
        rows.sort_by_key(|c| c.id);
        rows
    }

    pub fn insert_category(&mut self, mut category: CategoryData) -> Result<CategoryData> {
        category.id = self.allocate_id()?;
        self.categories.push(category.clone());
        Ok(category)
    }

    /// Set a category color. Only well-formed hex colors are stored.
    pub fn update_category_color(&mut self, category_id: u64, color: &str) -> Result<()> {
        if !is_valid_hex(color) {
            return Err(PaletteError::InvalidColor {
                value: color.to_string(),
            });
        }
        let row = self
            .categories
            .iter_mut()
            .find(|c| c.id == category_id)
            .ok_or(PaletteError::CategoryNotFound { category_id })?;
        row.color = Some(color.to_string());
        Ok(())
    }

    pub fn delete_categories(&mut self, ids: &[u64]) -> usize {
        let before = self.categories.len();
        self.categories.retain(|c| !ids.contains(&c.id));
        before - self.categories.len()
    }

    pub fn tasks(&self, project_id: u64) -> Vec<Task> {
        let mut rows: Vec<Task> = self
            .tasks
            .iter()
            .filter(|t| t.project_id == project_id)
            .cloned()
            .collect();
        rows.sort_by_key(|t| t.id);
        rows
    }

    pub fn insert_task(&mut self, mut task: Task) -> Result<Task> {
        task.id = self.allocate_id()?;
        self.tasks.push(task.clone());
        Ok(task)
    }

    pub fn update_task(&mut self, task: &Task) -> Result<()> {
        let row = self
            .tasks
            .iter_mut()
            .find(|t| t.id == task.id)
            .ok_or(PaletteError::TaskNotFound { task_id: task.id })?;
        *row = task.clone();
        Ok(())
    }

    pub fn delete_tasks(&mut self, ids: &[u64]) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !ids.contains(&t.id));
        before - self.tasks.len()
    }
}
