//! JSON file store.

use super::{CategoryStore, StoreData};
use crate::config::STORE_FORMAT_VERSION;
use crate::error::{PaletteError, Result};
use crate::model::{CategoryData, Project, Task};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Store persisted as a single JSON document, rewritten after every change.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    data: StoreData,
}

impl JsonFileStore {
    /// Open an existing store file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path)?;
        if content.trim().is_empty() {
            return Err(PaletteError::StoreCorrupt {
                path,
                message: "file is empty".to_string(),
            });
        }

        let data: StoreData =
            serde_json::from_str(&content).map_err(|e| PaletteError::StoreCorrupt {
                path: path.clone(),
                message: e.to_string(),
            })?;

        if data.version > STORE_FORMAT_VERSION {
            return Err(PaletteError::StoreCorrupt {
                path,
                message: format!(
                    "format version {} is newer than supported version {}",
                    data.version, STORE_FORMAT_VERSION
                ),
            });
        }

        debug!(
            "Opened {} ({} projects, {} categories, {} tasks)",
            path.display(),
            data.projects.len(),
            data.categories.len(),
            data.tasks.len()
        );
        Ok(Self { path, data })
    }

    /// Create a new, empty store file (overwrites any existing file).
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let store = Self {
            path: path.as_ref().to_path_buf(),
            data: StoreData::default(),
        };
        write_file(&store.path, &store.data)?;
        Ok(store)
    }

    /// Open the file if it exists, otherwise create it.
    pub fn open_or_create(path: impl AsRef<Path>) -> Result<Self> {
        if path.as_ref().exists() {
            Self::open(path)
        } else {
            Self::create(path)
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current contents.
    pub fn data(&self) -> &StoreData {
        &self.data
    }

    /// Layout version read from the file.
    pub fn version(&self) -> u32 {
        self.data.version
    }

    /// Record that the contents now follow the current layout.
    pub fn mark_current_version(&mut self) -> Result<()> {
        if self.data.version == STORE_FORMAT_VERSION {
            return Ok(());
        }
        self.commit(|data| {
            data.version = STORE_FORMAT_VERSION;
            Ok(())
        })
    }

    /// Apply `change` to a copy of the contents and keep it only once the file is written.
    fn commit<T>(&mut self, change: impl FnOnce(&mut StoreData) -> Result<T>) -> Result<T> {
        let mut next = self.data.clone();
        let value = change(&mut next)?;
        write_file(&self.path, &next)?;
        self.data = next;
        Ok(value)
    }
}

fn write_file(path: &Path, data: &StoreData) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    std::fs::write(path, json)?;
    Ok(())
}

impl CategoryStore for JsonFileStore {
    fn projects(&self) -> Result<Vec<Project>> {
        Ok(self.data.projects())
    }

    fn insert_project(&mut self, project: Project) -> Result<Project> {
        self.commit(|data| data.insert_project(project))
    }

    fn update_project(&mut self, project: &Project) -> Result<()> {
        self.commit(|data| data.update_project(project))
    }

    fn categories(&self, project_id: u64) -> Result<Vec<CategoryData>> {
        Ok(self.data.categories(project_id))
    }

    fn insert_category(&mut self, category: CategoryData) -> Result<CategoryData> {
        self.commit(|data| data.insert_category(category))
    }

    fn update_category_color(&mut self, category_id: u64, color: &str) -> Result<()> {
        self.commit(|data| data.update_category_color(category_id, color))
    }

    fn delete_categories(&mut self, ids: &[u64]) -> Result<usize> {
        if !self.data.categories.iter().any(|c| ids.contains(&c.id)) {
            return Ok(0);
        }
        self.commit(|data| Ok(data.delete_categories(ids)))
    }

    fn tasks(&self, project_id: u64) -> Result<Vec<Task>> {
        Ok(self.data.tasks(project_id))
    }

    fn insert_task(&mut self, task: Task) -> Result<Task> {
        self.commit(|data| data.insert_task(task))
    }

    fn update_task(&mut self, task: &Task) -> Result<()> {
        self.commit(|data| data.update_task(task))
    }

    fn delete_tasks(&mut self, ids: &[u64]) -> Result<usize> {
        if !self.data.tasks.iter().any(|t| ids.contains(&t.id)) {
            return Ok(0);
        }
        self.commit(|data| Ok(data.delete_tasks(ids)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_create_then_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let mut store = JsonFileStore::create(&path).unwrap();
        store.insert_project(Project::new(1, "Duplex")).unwrap();
        store
            .insert_category(CategoryData::tier1(0, "Structural", 0).in_project(1))
            .unwrap();

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.projects().unwrap().len(), 1);
        assert_eq!(reopened.categories(1).unwrap()[0].name, "Structural");
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = JsonFileStore::open(dir.path().join("missing.json")).unwrap_err();
        assert_eq!(err.code(), ErrorCode::StoreUnavailable);
    }

    #[test]
    fn test_open_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = JsonFileStore::open(&path).unwrap_err();
        assert_eq!(err.code(), ErrorCode::StoreCorrupt);
    }

    #[test]
    fn test_open_newer_version_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, r#"{"version": 99}"#).unwrap();
        assert!(matches!(
            JsonFileStore::open(&path),
            Err(PaletteError::StoreCorrupt { .. })
        ));
    }

    #[test]
    fn test_failed_write_leaves_contents_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("data");
        std::fs::create_dir(&sub).unwrap();

        let mut store = JsonFileStore::create(sub.join("store.json")).unwrap();
        store.insert_project(Project::new(1, "Duplex")).unwrap();
        std::fs::remove_dir_all(&sub).unwrap();

        assert!(store.insert_project(Project::new(2, "Annex")).is_err());
        assert!(store
            .insert_category(CategoryData::tier1(0, "Structural", 0).in_project(1))
            .is_err());
        assert_eq!(store.projects().unwrap().len(), 1);
        assert!(store.categories(1).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_color_is_not_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        let mut store = JsonFileStore::create(&path).unwrap();
        let category = store
            .insert_category(CategoryData::tier1(0, "Systems", 0).in_project(1))
            .unwrap();

        let err = store.update_category_color(category.id, "blue").unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidColor);
        let reopened = JsonFileStore::open(&path).unwrap();
        assert!(reopened.categories(1).unwrap()[0].color.is_none());
    }
}
