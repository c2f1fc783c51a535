//! Tier1 color resolution.

use super::{effective_theme, tier1_synonym_slot, ColorSource, ProjectContext, Resolution};
use crate::theme::ColorTheme;

/// Resolve a tier1 category color, reporting which rule applied.
///
/// `theme` is the active global theme (Earth Tone when `None`); a project in
/// `ctx` with its own theme replaces it.
pub fn tier1_resolution(
    name: &str,
    theme: Option<&ColorTheme>,
    ctx: Option<&ProjectContext<'_>>,
) -> Resolution {
    let (theme, project_override) = effective_theme(theme, ctx);
    let name = name.trim();

    if name.is_empty() {
        return Resolution::new(theme.tier1.default, ColorSource::Default, None);
    }

    let category = ctx.and_then(|c| c.find_tier1(name));

    if !project_override {
        if let Some(color) = category.and_then(|c| c.valid_color()) {
            return Resolution::new(color, ColorSource::Override, None);
        }
    }

    if let Some(slot) = tier1_synonym_slot(name) {
        return Resolution::new(theme.tier1.slot(slot), ColorSource::Synonym, Some(slot + 1));
    }

    if let (Some(ctx), Some(category)) = (ctx, category) {
        if let Some(index) = ctx.tier1_index(category.id) {
            let slot = index % 5;
            return Resolution::new(theme.tier1.slot(slot), ColorSource::Index, Some(slot + 1));
        }
    }

    tracing::debug!("No tier1 mapping for '{}', using theme default", name);
    Resolution::new(theme.tier1.default, ColorSource::Default, None)
}

/// Resolve a tier1 category color.
pub fn tier1_color(
    name: &str,
    theme: Option<&ColorTheme>,
    ctx: Option<&ProjectContext<'_>>,
) -> String {
    tier1_resolution(name, theme, ctx).color
}
