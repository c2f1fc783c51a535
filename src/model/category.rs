//! Admin-configured tier1/tier2 categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    /// Top-level classification of work (e.g., Structural).
    #[default]
    Tier1,
    /// Sub-classification nested under a tier1 category.
    Tier2,
}

impl CategoryKind {
    /// Parse from the persisted `type` value.
    pub fn from_type_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "tier1" => Some(CategoryKind::Tier1),
            "tier2" => Some(CategoryKind::Tier2),
            _ => None,
        }
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryKind::Tier1 => write!(f, "tier1"),
            CategoryKind::Tier2 => write!(f, "tier2"),
        }
    }
}

/// A category belonging to a project, optionally overriding its theme color.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryData {
    /// Row identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Tier1 or tier2.
    #[serde(rename = "type")]
    pub kind: CategoryKind,
    /// Stored color override (hex), if any.
    #[serde(default)]
    pub color: Option<String>,
    /// Owning project.
    #[serde(default)]
    pub project_id: Option<u64>,
    /// Parent tier1 category (tier2 only).
    #[serde(default)]
    pub parent_id: Option<u64>,
    /// Explicit ordering among siblings.
    #[serde(default)]
    pub sort_order: i32,
    /// Template identifier when the row was created from a preset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
}

impl CategoryData {
    /// Create a tier1 category.
    pub fn tier1(id: u64, name: impl Into<String>, sort_order: i32) -> Self {
        Self {
            id,
            name: name.into(),
            kind: CategoryKind::Tier1,
            sort_order,
            ..Default::default()
        }
    }

    /// Create a tier2 category under `parent_id`.
    pub fn tier2(id: u64, name: impl Into<String>, parent_id: u64, sort_order: i32) -> Self {
        Self {
            id,
            name: name.into(),
            kind: CategoryKind::Tier2,
            parent_id: Some(parent_id),
            sort_order,
            ..Default::default()
        }
    }

    /// Assign the category to a project.
    pub fn in_project(mut self, project_id: u64) -> Self {
        self.project_id = Some(project_id);
        self
    }

    /// Set a stored color override.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Check if this is a tier1 category.
    pub fn is_tier1(&self) -> bool {
        self.kind == CategoryKind::Tier1
    }

    /// Check if this is a tier2 category.
    pub fn is_tier2(&self) -> bool {
        self.kind == CategoryKind::Tier2
    }

    /// The stored override when it is a well-formed hex color.
    pub fn valid_color(&self) -> Option<&str> {
        self.color
            .as_deref()
            .filter(|c| crate::color::is_valid_hex(c))
    }
}

/// Categories of `kind` in `project_id` under `parent_id`, ordered by `(sort_order, id)`.
///
/// Tier1 callers pass `parent_id = None`.
pub fn sorted_siblings<'a>(
    categories: &'a [CategoryData],
    project_id: u64,
    kind: CategoryKind,
    parent_id: Option<u64>,
) -> Vec<&'a CategoryData> {
    let mut siblings: Vec<&CategoryData> = categories
        .iter()
        .filter(|c| c.project_id == Some(project_id) && c.kind == kind)
        .filter(|c| kind == CategoryKind::Tier1 || c.parent_id == parent_id)
        .collect();
    siblings.sort_by_key(|c| (c.sort_order, c.id));
    siblings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_type_str() {
        assert_eq!(CategoryKind::from_type_str("Tier1"), Some(CategoryKind::Tier1));
        assert_eq!(CategoryKind::from_type_str(" tier2 "), Some(CategoryKind::Tier2));
        assert_eq!(CategoryKind::from_type_str("tier3"), None);
    }

    #[test]
    fn test_valid_color_filters_malformed() {
        let good = CategoryData::tier1(1, "Structural", 0).with_color("#123abc");
        let bad = CategoryData::tier1(2, "Systems", 1).with_color("blue");
        assert_eq!(good.valid_color(), Some("#123abc"));
        assert_eq!(bad.valid_color(), None);
    }

    #[test]
    fn test_sorted_siblings_orders_and_filters() {
        let categories = vec![
            CategoryData::tier1(3, "C", 2).in_project(1),
            CategoryData::tier1(1, "A", 0).in_project(1),
            CategoryData::tier1(2, "B", 0).in_project(1),
            CategoryData::tier1(9, "Other", 0).in_project(2),
            CategoryData::tier2(10, "Child", 1, 0).in_project(1),
        ];
        let names: Vec<&str> = sorted_siblings(&categories, 1, CategoryKind::Tier1, None)
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["A", "B", "C"]);

        let children = sorted_siblings(&categories, 1, CategoryKind::Tier2, Some(1));
        assert_eq!(children.len(), 1);
        assert!(sorted_siblings(&categories, 1, CategoryKind::Tier2, Some(2)).is_empty());
    }

    #[test]
    fn test_serde_uses_type_field() {
        let json = serde_json::to_value(CategoryData::tier2(5, "Drywall", 2, 1)).unwrap();
        assert_eq!(json["type"], "tier2");
        assert_eq!(json["parentId"], 2);
        assert_eq!(json["sortOrder"], 1);
        assert!(json.get("templateId").is_none());
    }
}
