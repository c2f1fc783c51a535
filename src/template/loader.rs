//! Idempotent template loading, reset and color migration.

use super::TemplatePreset;
use crate::config::names::same_name;
use crate::error::{PaletteError, Result};
use crate::model::{CategoryData, CategoryKind, Project, Task};
use crate::resolve::{tier1_color, tier2_color, ProjectContext};
use crate::store::CategoryStore;
use crate::theme::{default_theme, find_theme, ColorTheme};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, warn};

/// Provisional id for a category that has not been inserted yet.
///
/// Sorts after every stored row with the same sort order, as the real id will.
const PENDING_ID: u64 = u64::MAX;

/// Rows created and skipped by one load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub categories_created: usize,
    pub categories_skipped: usize,
    pub tasks_created: usize,
    pub tasks_skipped: usize,
}

impl LoadReport {
    /// Whether the load wrote nothing.
    pub fn is_noop(&self) -> bool {
        self.categories_created == 0 && self.tasks_created == 0
    }
}

/// Rows removed by a reset, and the reload that followed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ResetReport {
    pub categories_removed: usize,
    pub tasks_removed: usize,
    /// User tasks moved onto recreated categories.
    pub tasks_relinked: usize,
    pub load: LoadReport,
}

/// Changes made by a migration pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MigrationReport {
    pub projects_scanned: usize,
    pub themes_normalized: usize,
    pub colors_assigned: usize,
}

/// Seeds preset categories and tasks into projects of a [`CategoryStore`].
///
/// Writes are committed one row at a time. A store error aborts the run and
/// leaves the rows written so far; running the load again fills in the rest.
pub struct TemplateLoader<'s, S: CategoryStore> {
    store: &'s mut S,
    global_theme: &'static ColorTheme,
}

impl<'s, S: CategoryStore> TemplateLoader<'s, S> {
    /// Create a loader using Earth Tone as the global theme.
    pub fn new(store: &'s mut S) -> Self {
        Self {
            store,
            global_theme: default_theme(),
        }
    }

    /// Use a different global theme for projects without their own.
    pub fn with_global_theme(mut self, theme: &'static ColorTheme) -> Self {
        self.global_theme = theme;
        self
    }

    fn require_project(&self, project_id: u64) -> Result<Project> {
        self.store
            .project(project_id)?
            .ok_or(PaletteError::ProjectNotFound { project_id })
    }

    /// Create the preset's categories and tasks in a project, skipping rows that exist.
    pub fn load(&mut self, project_id: u64, preset: &TemplatePreset) -> Result<LoadReport> {
        let project = self.require_project(project_id)?;
        let projects = [project.theme_data()];
        let mut categories = self.store.categories(project_id)?;
        let mut task_ids: HashSet<String> = self
            .store
            .tasks(project_id)?
            .into_iter()
            .filter_map(|t| t.template_id)
            .collect();
        let mut report = LoadReport::default();

        info!(
            "Loading preset '{}' into project {} ({})",
            preset.key, project.id, project.name
        );

        for (tier1_order, tier1) in preset.tier1.iter().enumerate() {
            let existing = categories
                .iter()
                .find(|c| c.is_tier1() && c.parent_id.is_none() && same_name(&c.name, tier1.name))
                .cloned();

            let tier1_row = match existing {
                Some(row) => {
                    debug!("Tier1 '{}' exists (id {})", row.name, row.id);
                    report.categories_skipped += 1;
                    row
                }
                None => {
                    let mut row = CategoryData {
                        id: PENDING_ID,
                        name: tier1.name.to_string(),
                        kind: CategoryKind::Tier1,
                        project_id: Some(project_id),
                        sort_order: tier1_order as i32,
                        template_id: Some(preset.tier1_id(tier1)),
                        ..Default::default()
                    };
                    categories.push(row.clone());
                    let ctx = ProjectContext::new(project_id, &categories, &projects);
                    row.color = Some(tier1_color(
                        tier1.name,
                        Some(self.global_theme),
                        Some(&ctx),
                    ));
                    categories.pop();

                    let row = self.store.insert_category(row)?;
                    debug!("Created tier1 '{}' (id {})", row.name, row.id);
                    categories.push(row.clone());
                    report.categories_created += 1;
                    row
                }
            };

            for (tier2_order, tier2) in tier1.children.iter().enumerate() {
                let existing = categories
                    .iter()
                    .find(|c| {
                        c.is_tier2()
                            && c.parent_id == Some(tier1_row.id)
                            && same_name(&c.name, tier2.name)
                    })
                    .cloned();

                let tier2_row = match existing {
                    Some(row) => {
                        report.categories_skipped += 1;
                        row
                    }
                    None => {
                        let mut row = CategoryData {
                            id: PENDING_ID,
                            name: tier2.name.to_string(),
                            kind: CategoryKind::Tier2,
                            project_id: Some(project_id),
                            parent_id: Some(tier1_row.id),
                            sort_order: tier2_order as i32,
                            template_id: Some(preset.tier2_id(tier1, tier2)),
                            ..Default::default()
                        };
                        categories.push(row.clone());
                        let ctx = ProjectContext::new(project_id, &categories, &projects);
                        row.color = Some(tier2_color(
                            tier2.name,
                            Some(tier1_row.name.as_str()),
                            Some(self.global_theme),
                            Some(&ctx),
                        ));
                        categories.pop();

                        let row = self.store.insert_category(row)?;
                        categories.push(row.clone());
                        report.categories_created += 1;
                        row
                    }
                };

                for (task_order, template) in tier2.tasks.iter().enumerate() {
                    if task_ids.contains(template.id) {
                        report.tasks_skipped += 1;
                        continue;
                    }

                    self.store.insert_task(Task {
                        project_id,
                        template_id: Some(template.id.to_string()),
                        title: template.title.to_string(),
                        description: template.description.to_string(),
                        tier1_category_id: Some(tier1_row.id),
                        tier2_category_id: Some(tier2_row.id),
                        sort_order: task_order as i32,
                        ..Default::default()
                    })?;
                    task_ids.insert(template.id.to_string());
                    report.tasks_created += 1;
                }
            }
        }

        info!(
            "Project {}: {} categories created, {} skipped; {} tasks created, {} skipped",
            project_id,
            report.categories_created,
            report.categories_skipped,
            report.tasks_created,
            report.tasks_skipped
        );
        Ok(report)
    }

    /// Load the preset into every project in the store.
    pub fn load_all(&mut self, preset: &TemplatePreset) -> Result<Vec<(u64, LoadReport)>> {
        let ids: Vec<u64> = self.store.projects()?.iter().map(|p| p.id).collect();
        if ids.is_empty() {
            warn!("Store has no projects; nothing to load");
        }

        let mut reports = Vec::with_capacity(ids.len());
        for id in ids {
            reports.push((id, self.load(id, preset)?));
        }
        Ok(reports)
    }

    /// Remove rows the preset created in a project, then load it again.
    ///
    /// Rows without a template id (created by users) are kept. Kept tasks that
    /// pointed at removed categories are moved to the recreated rows with the
    /// same template id.
    pub fn reset(&mut self, project_id: u64, preset: &TemplatePreset) -> Result<ResetReport> {
        self.require_project(project_id)?;

        let owned = |template_id: &Option<String>| {
            template_id.as_deref().is_some_and(|id| preset.owns(id))
        };

        let removed_templates: HashMap<u64, String> = self
            .store
            .categories(project_id)?
            .into_iter()
            .filter(|c| owned(&c.template_id))
            .filter_map(|c| c.template_id.map(|template_id| (c.id, template_id)))
            .collect();
        let category_ids: Vec<u64> = removed_templates.keys().copied().collect();

        let (template_tasks, user_tasks): (Vec<Task>, Vec<Task>) = self
            .store
            .tasks(project_id)?
            .into_iter()
            .partition(|t| owned(&t.template_id));
        let task_ids: Vec<u64> = template_tasks.iter().map(|t| t.id).collect();
        let linked: Vec<Task> = user_tasks
            .into_iter()
            .filter(|t| {
                [t.tier1_category_id, t.tier2_category_id]
                    .into_iter()
                    .flatten()
                    .any(|id| removed_templates.contains_key(&id))
            })
            .collect();

        let tasks_removed = self.store.delete_tasks(&task_ids)?;
        let categories_removed = self.store.delete_categories(&category_ids)?;
        info!(
            "Project {}: removed {} categories and {} tasks from preset '{}'",
            project_id, categories_removed, tasks_removed, preset.key
        );

        let load = self.load(project_id, preset)?;

        let recreated: HashMap<String, u64> = self
            .store
            .categories(project_id)?
            .into_iter()
            .filter_map(|c| c.template_id.map(|template_id| (template_id, c.id)))
            .collect();
        let relink = |id: Option<u64>| match id.and_then(|id| removed_templates.get(&id)) {
            Some(template_id) => recreated.get(template_id).copied(),
            None => id,
        };

        let mut tasks_relinked = 0;
        for mut task in linked {
            task.tier1_category_id = relink(task.tier1_category_id);
            task.tier2_category_id = relink(task.tier2_category_id);
            if task.tier1_category_id.is_none() && task.tier2_category_id.is_none() {
                warn!("Task {} ('{}'): category no longer exists", task.id, task.title);
            }
            self.store.update_task(&task)?;
            tasks_relinked += 1;
        }

        Ok(ResetReport {
            categories_removed,
            tasks_removed,
            tasks_relinked,
            load,
        })
    }

    /// Reset every project in the store.
    pub fn reset_all(&mut self, preset: &TemplatePreset) -> Result<Vec<(u64, ResetReport)>> {
        let ids: Vec<u64> = self.store.projects()?.iter().map(|p| p.id).collect();

        let mut reports = Vec::with_capacity(ids.len());
        for id in ids {
            reports.push((id, self.reset(id, preset)?));
        }
        Ok(reports)
    }

    /// Normalize stored theme names and fill in missing category colors.
    pub fn migrate(&mut self) -> Result<MigrationReport> {
        let mut report = MigrationReport::default();

        for mut project in self.store.projects()? {
            report.projects_scanned += 1;

            if let Some(name) = project.color_theme.clone() {
                match find_theme(&name) {
                    Some(theme) if theme.key != name => {
                        debug!("Project {}: theme '{}' -> '{}'", project.id, name, theme.key);
                        project.color_theme = Some(theme.key.to_string());
                        self.store.update_project(&project)?;
                        report.themes_normalized += 1;
                    }
                    Some(_) => {}
                    None => warn!(
                        "Project {}: unknown theme '{}', colors will use the default theme",
                        project.id, name
                    ),
                }
            }

            let projects = [project.theme_data()];
            let categories = self.store.categories(project.id)?;
            let ctx = ProjectContext::new(project.id, &categories, &projects);

            for category in categories.iter().filter(|c| c.valid_color().is_none()) {
                if let Some(color) = &category.color {
                    warn!(
                        "Category {} ('{}'): replacing invalid color '{}'",
                        category.id, category.name, color
                    );
                }

                let color = match category.kind {
                    CategoryKind::Tier1 => {
                        tier1_color(&category.name, Some(self.global_theme), Some(&ctx))
                    }
                    CategoryKind::Tier2 => {
                        let parent = category
                            .parent_id
                            .and_then(|id| ctx.category(id))
                            .map(|p| p.name.as_str());
                        tier2_color(&category.name, parent, Some(self.global_theme), Some(&ctx))
                    }
                };
                self.store.update_category_color(category.id, &color)?;
                report.colors_assigned += 1;
            }
        }

        info!(
            "Migration: {} projects scanned, {} themes normalized, {} colors assigned",
            report.projects_scanned, report.themes_normalized, report.colors_assigned
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::template::preset_by_name;
    use crate::theme::get_theme;
    use crate::validation::validate_store;
    use pretty_assertions::assert_eq;

    fn store_with_project() -> MemoryStore {
        let mut store = MemoryStore::new();
        store
            .insert_project(Project::new(1, "Lakeside Duplex"))
            .unwrap();
        store
    }

    // ==================== load tests ====================

    #[test]
    fn test_load_creates_all_rows() {
        let mut store = store_with_project();
        let preset = preset_by_name("construction").unwrap();
        let report = TemplateLoader::new(&mut store).load(1, preset).unwrap();

        assert_eq!(report.categories_created, preset.category_count());
        assert_eq!(report.tasks_created, preset.task_count());
        assert_eq!(report.categories_skipped, 0);
        assert_eq!(store.categories(1).unwrap().len(), 22);
        assert_eq!(store.tasks(1).unwrap().len(), 34);
    }

    #[test]
    fn test_load_twice_is_idempotent() {
        let mut store = store_with_project();
        let preset = preset_by_name("workout").unwrap();
        TemplateLoader::new(&mut store).load(1, preset).unwrap();
        let second = TemplateLoader::new(&mut store).load(1, preset).unwrap();

        assert!(second.is_noop());
        assert_eq!(second.categories_skipped, 14);
        assert_eq!(second.tasks_skipped, 10);
        assert_eq!(store.categories(1).unwrap().len(), 14);
    }

    #[test]
    fn test_load_unknown_project() {
        let mut store = store_with_project();
        let preset = preset_by_name("workout").unwrap();
        let err = TemplateLoader::new(&mut store).load(99, preset).unwrap_err();
        assert!(matches!(err, PaletteError::ProjectNotFound { project_id: 99 }));
    }

    #[test]
    fn test_load_assigns_theme_colors() {
        let mut store = MemoryStore::new();
        store
            .insert_project(Project::new(1, "Tower").with_theme("Classic Construction"))
            .unwrap();
        let preset = preset_by_name("construction").unwrap();
        TemplateLoader::new(&mut store).load(1, preset).unwrap();

        let theme = get_theme("classic-construction");
        let categories = store.categories(1).unwrap();
        let color_of = |name: &str| {
            categories
                .iter()
                .find(|c| c.name == name)
                .and_then(|c| c.color.clone())
                .unwrap()
        };

        assert_eq!(color_of("Structural"), theme.tier1.subcategory2);
        // Systems is the third tier1; Plumbing is its second child.
        assert_eq!(color_of("Plumbing"), theme.tier2_slot(12));
        // Finishings (fifth tier1) shares group 0.
        assert_eq!(color_of("Flooring"), theme.tier2_slot(5));
    }

    #[test]
    fn test_partial_failure_keeps_committed_rows() {
        let mut store = store_with_project().fail_after(4);
        let preset = preset_by_name("construction").unwrap();

        let err = TemplateLoader::new(&mut store).load(1, preset);
        assert!(err.is_err());
        // project insert + 3 rows succeeded before the failure
        assert_eq!(store.categories(1).unwrap().len() + store.tasks(1).unwrap().len(), 3);
    }

    #[test]
    fn test_existing_user_category_is_reused() {
        let mut store = store_with_project();
        store
            .insert_category(CategoryData::tier1(0, "structural", 0).in_project(1))
            .unwrap();
        let preset = preset_by_name("construction").unwrap();
        let report = TemplateLoader::new(&mut store).load(1, preset).unwrap();

        assert_eq!(report.categories_skipped, 1);
        let structural: Vec<_> = store
            .categories(1)
            .unwrap()
            .into_iter()
            .filter(|c| c.is_tier1() && same_name(&c.name, "Structural"))
            .collect();
        assert_eq!(structural.len(), 1);
    }

    // ==================== reset tests ====================

    #[test]
    fn test_reset_keeps_user_rows() {
        let mut store = store_with_project();
        let preset = preset_by_name("workout").unwrap();
        TemplateLoader::new(&mut store).load(1, preset).unwrap();
        store
            .insert_category(CategoryData::tier1(0, "Mobility", 9).in_project(1))
            .unwrap();

        let report = TemplateLoader::new(&mut store).reset(1, preset).unwrap();
        assert_eq!(report.categories_removed, 14);
        assert_eq!(report.tasks_removed, 10);
        assert_eq!(report.load.categories_created, 14);
        assert_eq!(store.categories(1).unwrap().len(), 15);
    }

    #[test]
    fn test_reset_relinks_user_tasks() {
        let mut store = store_with_project();
        let preset = preset_by_name("workout").unwrap();
        TemplateLoader::new(&mut store).load(1, preset).unwrap();

        let push = &preset.tier1[0];
        let tier1_template = preset.tier1_id(push);
        let tier2_template = preset.tier2_id(push, &push.children[0]);
        let row_for = |store: &MemoryStore, template_id: &str| {
            store
                .categories(1)
                .unwrap()
                .into_iter()
                .find(|c| c.template_id.as_deref() == Some(template_id))
                .map(|c| c.id)
                .unwrap()
        };

        let user_task = store
            .insert_task(Task {
                project_id: 1,
                title: "Extra dips".to_string(),
                tier1_category_id: Some(row_for(&store, &tier1_template)),
                tier2_category_id: Some(row_for(&store, &tier2_template)),
                ..Default::default()
            })
            .unwrap();
        assert!(validate_store(&store).unwrap().passed);

        let report = TemplateLoader::new(&mut store).reset(1, preset).unwrap();
        assert_eq!(report.tasks_relinked, 1);

        let validation = validate_store(&store).unwrap();
        assert!(validation.passed, "{:?}", validation.errors);

        let task = store
            .tasks(1)
            .unwrap()
            .into_iter()
            .find(|t| t.id == user_task.id)
            .unwrap();
        assert_eq!(task.tier1_category_id, Some(row_for(&store, &tier1_template)));
        assert_eq!(task.tier2_category_id, Some(row_for(&store, &tier2_template)));
        assert_ne!(task.tier2_category_id, user_task.tier2_category_id);
    }

    // ==================== migrate tests ====================

    #[test]
    fn test_migrate_normalizes_and_fills_colors() {
        let mut store = MemoryStore::new();
        store
            .insert_project(Project::new(1, "Cabin").with_theme("Neon Noir"))
            .unwrap();
        store
            .insert_category(CategoryData::tier1(0, "Systems", 0).in_project(1))
            .unwrap();
        store
            .insert_category(
                CategoryData::tier1(0, "Custom", 1)
                    .in_project(1)
                    .with_color("#zzzzzz"),
            )
            .unwrap();
        store
            .insert_category(
                CategoryData::tier1(0, "Kept", 2)
                    .in_project(1)
                    .with_color("#010203"),
            )
            .unwrap();

        let report = TemplateLoader::new(&mut store).migrate().unwrap();
        assert_eq!(
            report,
            MigrationReport {
                projects_scanned: 1,
                themes_normalized: 1,
                colors_assigned: 2,
            }
        );

        let theme = get_theme("neon-noir");
        let project = store.project(1).unwrap().unwrap();
        assert_eq!(project.color_theme.as_deref(), Some("neon-noir"));

        let categories = store.categories(1).unwrap();
        assert_eq!(categories[0].color.as_deref(), Some(theme.tier1.subcategory3));
        assert_eq!(categories[1].color.as_deref(), Some(theme.tier1.subcategory2));
        assert_eq!(categories[2].color.as_deref(), Some("#010203"));
    }
}
