//! Task rows created from templates.

use serde::{Deserialize, Serialize};

/// A task belonging to a project, linked to its tier1/tier2 categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Row identifier.
    pub id: u64,
    /// Owning project.
    pub project_id: u64,
    /// Stable template identifier (e.g., "construction.structural.framing.walls").
    #[serde(default)]
    pub template_id: Option<String>,
    /// Task title.
    pub title: String,
    /// Longer description.
    #[serde(default)]
    pub description: String,
    /// Tier1 category row.
    #[serde(default)]
    pub tier1_category_id: Option<u64>,
    /// Tier2 category row.
    #[serde(default)]
    pub tier2_category_id: Option<u64>,
    /// Ordering within the tier2 category.
    #[serde(default)]
    pub sort_order: i32,
    /// Completion flag.
    #[serde(default)]
    pub completed: bool,
}
