//! Project-scoped category data consulted by the resolvers.

use crate::config::names::same_name;
use crate::model::{sorted_siblings, CategoryData, CategoryKind, ProjectThemeData};
use crate::theme::{get_theme, ColorTheme};

/// Admin-defined categories and project theme selections for one project.
#[derive(Debug, Clone, Copy)]
pub struct ProjectContext<'a> {
    /// Project being rendered.
    pub project_id: u64,
    /// Categories (may include other projects; filtered by `project_id`).
    pub categories: &'a [CategoryData],
    /// Theme selections for known projects.
    pub projects: &'a [ProjectThemeData],
    /// Theme that supersedes the stored selection (set from live application state).
    pub theme_override: Option<&'static ColorTheme>,
}

impl<'a> ProjectContext<'a> {
    /// Create a context for `project_id`.
    pub fn new(
        project_id: u64,
        categories: &'a [CategoryData],
        projects: &'a [ProjectThemeData],
    ) -> Self {
        Self {
            project_id,
            categories,
            projects,
            theme_override: None,
        }
    }

    /// Replace the stored theme selection with `theme`.
    pub fn with_theme_override(mut self, theme: Option<&'static ColorTheme>) -> Self {
        self.theme_override = theme;
        self
    }

    /// Theme selection for this project.
    pub fn project(&self) -> Option<&'a ProjectThemeData> {
        self.projects.iter().find(|p| p.id == self.project_id)
    }

    /// The project's explicitly selected theme, if it overrides the global one.
    pub fn project_theme(&self) -> Option<&'static ColorTheme> {
        if self.theme_override.is_some() {
            return self.theme_override;
        }
        self.project()
            .and_then(ProjectThemeData::explicit_theme)
            .map(get_theme)
    }

    /// Tier1 categories of the project in display order.
    pub fn tier1_categories(&self) -> Vec<&'a CategoryData> {
        sorted_siblings(self.categories, self.project_id, CategoryKind::Tier1, None)
    }

    /// Tier2 children of `parent_id` in display order.
    pub fn tier2_children(&self, parent_id: u64) -> Vec<&'a CategoryData> {
        sorted_siblings(
            self.categories,
            self.project_id,
            CategoryKind::Tier2,
            Some(parent_id),
        )
    }

    /// Any category of the project by row id.
    pub fn category(&self, id: u64) -> Option<&'a CategoryData> {
        self.categories
            .iter()
            .find(|c| c.id == id && c.project_id == Some(self.project_id))
    }

    /// Tier1 category by name.
    pub fn find_tier1(&self, name: &str) -> Option<&'a CategoryData> {
        self.tier1_categories()
            .into_iter()
            .find(|c| same_name(&c.name, name))
    }

    /// Tier2 category by name, preferring one under the named parent.
    pub fn find_tier2(&self, name: &str, parent: Option<&str>) -> Option<&'a CategoryData> {
        let mut matches = self
            .categories
            .iter()
            .filter(|c| c.project_id == Some(self.project_id) && c.is_tier2())
            .filter(|c| same_name(&c.name, name))
            .collect::<Vec<_>>();
        matches.sort_by_key(|c| (c.sort_order, c.id));

        if let Some(parent) = parent.and_then(|p| self.find_tier1(p)) {
            if let Some(child) = matches.iter().find(|c| c.parent_id == Some(parent.id)) {
                return Some(*child);
            }
        }
        matches.first().copied()
    }

    /// Position of a tier1 category among the project's tier1 categories.
    pub fn tier1_index(&self, id: u64) -> Option<usize> {
        self.tier1_categories().iter().position(|c| c.id == id)
    }

    /// Position of a tier2 category among its siblings.
    pub fn tier2_index(&self, category: &CategoryData) -> Option<usize> {
        let parent_id = category.parent_id?;
        self.tier2_children(parent_id)
            .iter()
            .position(|c| c.id == category.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories() -> Vec<CategoryData> {
        vec![
            CategoryData::tier1(1, "Structural", 1).in_project(7),
            CategoryData::tier1(2, "Systems", 0).in_project(7),
            CategoryData::tier2(3, "Framing", 1, 0).in_project(7),
            CategoryData::tier2(4, "Framing", 2, 0).in_project(7),
            CategoryData::tier2(5, "Roofing", 1, 1).in_project(7),
        ]
    }

    #[test]
    fn test_tier1_index_uses_sort_order() {
        let categories = categories();
        let ctx = ProjectContext::new(7, &categories, &[]);
        assert_eq!(ctx.tier1_index(2), Some(0));
        assert_eq!(ctx.tier1_index(1), Some(1));
        assert_eq!(ctx.tier1_index(3), None);
    }

    #[test]
    fn test_find_tier2_prefers_named_parent() {
        let categories = categories();
        let ctx = ProjectContext::new(7, &categories, &[]);
        assert_eq!(ctx.find_tier2("framing", Some("Systems")).map(|c| c.id), Some(4));
        assert_eq!(ctx.find_tier2("framing", Some("Structural")).map(|c| c.id), Some(3));
        assert_eq!(ctx.find_tier2("framing", None).map(|c| c.id), Some(3));
        assert!(ctx.find_tier2("Plumbing", None).is_none());
    }

    #[test]
    fn test_tier2_index() {
        let categories = categories();
        let ctx = ProjectContext::new(7, &categories, &[]);
        assert_eq!(ctx.tier2_index(&categories[4]), Some(1));
        assert_eq!(ctx.tier2_index(&categories[0]), None);
    }

    #[test]
    fn test_project_theme_requires_explicit_selection() {
        let projects = vec![
            ProjectThemeData {
                id: 7,
                color_theme: Some("Molten Core".to_string()),
                use_global_theme: false,
            },
            ProjectThemeData {
                id: 8,
                color_theme: Some("pastel".to_string()),
                use_global_theme: true,
            },
        ];
        let ctx = ProjectContext::new(7, &[], &projects);
        assert_eq!(ctx.project_theme().map(|t| t.key), Some("molten-core"));

        let ctx = ProjectContext::new(8, &[], &projects);
        assert!(ctx.project_theme().is_none());
    }
}
