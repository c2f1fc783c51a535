//! Category color resolution.
//!
//! Precedence, highest first:
//! 1. the project's explicitly selected theme (replaces the theme for every lookup)
//! 2. a stored per-category color override (only when the project follows the global theme)
//! 3. name synonyms (tier1) or legacy slot names (tier2, without project data)
//! 4. index-based assignment from the category's position in the project
//! 5. theme default (tier1) or a hash of the name (tier2)
//!
//! Resolution never fails; missing data degrades to fallback colors.

mod context;
mod hash;
mod synonyms;
mod tier1;
mod tier2;

use crate::theme::{default_theme, ColorTheme};
use serde::Serialize;

pub use context::ProjectContext;
pub use hash::{hash_index, rolling_hash};
pub use synonyms::tier1_synonym_slot;
pub use tier1::{tier1_color, tier1_resolution};
pub use tier2::{tier2_color, tier2_group_for, tier2_resolution};

/// Which rule produced a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ColorSource {
    /// Stored per-category override.
    Override,
    /// Tier1 name synonym.
    Synonym,
    /// Position among the project's categories.
    Index,
    /// Legacy tier2 slot name.
    Legacy,
    /// Hash of the category name.
    Hash,
    /// Theme default slot.
    Default,
    /// Constant fallback for missing data.
    Fallback,
}

/// A resolved color and how it was chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Hex color.
    pub color: String,
    /// Rule that produced the color.
    pub source: ColorSource,
    /// 1-based theme slot, when the color came from one.
    pub slot: Option<usize>,
}

impl Resolution {
    fn new(color: impl Into<String>, source: ColorSource, slot: Option<usize>) -> Self {
        Self {
            color: color.into(),
            source,
            slot,
        }
    }
}

/// Pick the theme a lookup runs against and whether it is a project override.
fn effective_theme<'t>(
    theme: Option<&'t ColorTheme>,
    ctx: Option<&ProjectContext<'_>>,
) -> (&'t ColorTheme, bool) {
    match ctx.and_then(ProjectContext::project_theme) {
        Some(project_theme) => (project_theme, true),
        None => (theme.unwrap_or_else(|| default_theme()), false),
    }
}
