//! Validation logic for themes, categories and tasks.

use crate::color::is_valid_hex;
use crate::config::names::name_key;
use crate::error::Result;
use crate::model::{CategoryData, Task};
use crate::store::CategoryStore;
use crate::theme::{all_themes, find_theme, ColorTheme};
use std::collections::HashSet;

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        if !other.passed {
            self.passed = false;
        }
    }
}

fn validate_theme(theme: &ColorTheme) -> ValidationResult {
    let mut result = ValidationResult::ok();

    for (i, color) in theme.tier1.slots().iter().enumerate() {
        if !is_valid_hex(color) {
            result.add_error(format!(
                "Theme {}: tier1 subcategory{} '{}' is not a hex color",
                theme.key,
                i + 1,
                color
            ));
        }
    }
    if !is_valid_hex(theme.tier1.default) {
        result.add_error(format!(
            "Theme {}: tier1 default '{}' is not a hex color",
            theme.key, theme.tier1.default
        ));
    }
    for (i, color) in theme.tier2.iter().enumerate() {
        if !is_valid_hex(color) {
            result.add_error(format!(
                "Theme {}: tier2_{} '{}' is not a hex color",
                theme.key,
                i + 1,
                color
            ));
        }
    }

    result
}

/// Validate every built-in theme.
pub fn validate_catalog() -> ValidationResult {
    let mut result = ValidationResult::ok();
    let mut keys = HashSet::new();

    for theme in all_themes() {
        if !keys.insert(theme.key) {
            result.add_error(format!("Theme key '{}' is defined twice", theme.key));
        }
        result.merge(validate_theme(theme));
    }

    result
}

/// Validate one project's categories and tasks.
pub fn validate_project(
    project_id: u64,
    theme_name: Option<&str>,
    categories: &[CategoryData],
    tasks: &[Task],
) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if let Some(name) = theme_name {
        if find_theme(name).is_none() {
            result.add_warning(format!(
                "Project {}: unknown theme '{}' (Earth Tone will be used)",
                project_id, name
            ));
        }
    }

    let mut seen = HashSet::new();
    for category in categories {
        let key = (
            name_key(&category.name),
            category.kind,
            category.parent_id,
        );
        if !seen.insert(key) {
            result.add_warning(format!(
                "Project {}: duplicate {} category '{}'",
                project_id, category.kind, category.name
            ));
        }

        if let Some(color) = &category.color {
            if !is_valid_hex(color) {
                result.add_warning(format!(
                    "Project {}, Category {}: invalid color '{}'",
                    project_id, category.id, color
                ));
            }
        }

        if category.is_tier2() {
            let parent = category
                .parent_id
                .and_then(|id| categories.iter().find(|c| c.id == id));
            match parent {
                None => result.add_error(format!(
                    "Project {}, Category {}: tier2 '{}' has no parent",
                    project_id, category.id, category.name
                )),
                Some(p) if !p.is_tier1() => result.add_error(format!(
                    "Project {}, Category {}: parent {} is not a tier1 category",
                    project_id, category.id, p.id
                )),
                Some(_) => {}
            }
        } else if category.parent_id.is_some() {
            result.add_warning(format!(
                "Project {}, Category {}: tier1 '{}' has a parent",
                project_id, category.id, category.name
            ));
        }
    }

    let category_ids: HashSet<u64> = categories.iter().map(|c| c.id).collect();
    for task in tasks {
        for id in [task.tier1_category_id, task.tier2_category_id]
            .into_iter()
            .flatten()
        {
            if !category_ids.contains(&id) {
                result.add_error(format!(
                    "Project {}, Task {}: category {} not found",
                    project_id, task.id, id
                ));
            }
        }
    }

    result
}

/// Validate every project in a store.
pub fn validate_store(store: &impl CategoryStore) -> Result<ValidationResult> {
    let mut result = ValidationResult::ok();

    for project in store.projects()? {
        let categories = store.categories(project.id)?;
        let tasks = store.tasks(project.id)?;
        result.merge(validate_project(
            project.id,
            project.color_theme.as_deref(),
            &categories,
            &tasks,
        ));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Project;
    use crate::store::MemoryStore;

    // ==================== ValidationResult tests ====================

    #[test]
    fn test_validation_result_add_warning() {
        let mut result = ValidationResult::ok();
        result.add_warning("This is a warning");
        assert!(result.passed); // Warnings don't fail validation
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_validation_result_merge() {
        let mut result1 = ValidationResult::ok();
        result1.add_warning("Warning 1");

        let mut result2 = ValidationResult::ok();
        result2.add_error("Error 1");
        result2.add_warning("Warning 2");

        result1.merge(result2);
        assert!(!result1.passed);
        assert_eq!(result1.warnings.len(), 2);
        assert_eq!(result1.errors.len(), 1);
    }

    // ==================== catalog tests ====================

    #[test]
    fn test_catalog_is_valid() {
        let result = validate_catalog();
        assert!(result.passed, "{:?}", result.errors);
    }

    // ==================== project tests ====================

    #[test]
    fn test_orphan_tier2_is_error() {
        let categories = vec![CategoryData::tier2(2, "Drywall", 1, 0).in_project(1)];
        let result = validate_project(1, None, &categories, &[]);
        assert!(!result.passed);
        assert!(result.errors[0].contains("has no parent"));
    }

    #[test]
    fn test_duplicates_and_bad_colors_warn() {
        let categories = vec![
            CategoryData::tier1(1, "Systems", 0).in_project(1),
            CategoryData::tier1(2, "systems ", 1)
                .in_project(1)
                .with_color("red"),
        ];
        let result = validate_project(1, Some("not-a-theme"), &categories, &[]);
        assert!(result.passed);
        assert_eq!(result.warnings.len(), 3);
    }

    #[test]
    fn test_task_with_missing_category() {
        let categories = vec![CategoryData::tier1(1, "Push", 0).in_project(1)];
        let tasks = vec![Task {
            id: 5,
            project_id: 1,
            title: "Bench".to_string(),
            tier1_category_id: Some(1),
            tier2_category_id: Some(77),
            ..Default::default()
        }];
        let result = validate_project(1, None, &categories, &tasks);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains("category 77"));
    }

    #[test]
    fn test_validate_store() {
        let mut store = MemoryStore::new();
        store.insert_project(Project::new(1, "A")).unwrap();
        store
            .insert_category(CategoryData::tier1(0, "Structural", 0).in_project(1))
            .unwrap();
        let result = validate_store(&store).unwrap();
        assert!(result.passed);
        assert!(result.warnings.is_empty());
    }
}
