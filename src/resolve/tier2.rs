//! Tier2 color resolution.

use super::{effective_theme, hash_index, ColorSource, ProjectContext, Resolution};
use crate::config::{DARK_SENTINEL, FALLBACK_GRAY, TIER2_GROUPS, TIER2_GROUP_SIZE};
use crate::theme::{legacy_tier2_slot, ColorTheme};

/// Tier2 group (0..=3) reserved for a tier1 position.
///
/// Tier1 slot 4 has no group of its own and shares group 0.
pub fn tier2_group_for(tier1_index: usize) -> usize {
    let slot = tier1_index % 5;
    if slot >= TIER2_GROUPS {
        0
    } else {
        slot
    }
}

/// Resolve a tier2 category color, reporting which rule applied.
///
/// `parent` names the tier1 parent; when `None` it is taken from the
/// category's `parent_id` in `ctx`.
pub fn tier2_resolution(
    name: &str,
    parent: Option<&str>,
    theme: Option<&ColorTheme>,
    ctx: Option<&ProjectContext<'_>>,
) -> Resolution {
    let (theme, project_override) = effective_theme(theme, ctx);
    let name = name.trim();

    if name.is_empty() {
        return Resolution::new(FALLBACK_GRAY, ColorSource::Fallback, None);
    }

    let mut parent_group = 0;

    if let Some(ctx) = ctx {
        if let Some(parent_name) = parent {
            if let Some(index) = ctx.find_tier1(parent_name).and_then(|p| ctx.tier1_index(p.id)) {
                parent_group = tier2_group_for(index);
            }
        }

        if let Some(category) = ctx.find_tier2(name, parent) {
            if !project_override {
                if let Some(color) = category.valid_color() {
                    return Resolution::new(color, ColorSource::Override, None);
                }
            }

            // A named parent only disambiguates the lookup; the slot follows the row's own parent.
            let parent_category = category
                .parent_id
                .and_then(|id| ctx.category(id))
                .filter(|p| p.is_tier1());
            let Some(parent_category) = parent_category else {
                tracing::debug!("Tier2 category '{}' has no tier1 parent", name);
                return Resolution::new(FALLBACK_GRAY, ColorSource::Fallback, None);
            };
            let (Some(parent_index), Some(child_index)) =
                (ctx.tier1_index(parent_category.id), ctx.tier2_index(category))
            else {
                return Resolution::new(FALLBACK_GRAY, ColorSource::Fallback, None);
            };

            let group = tier2_group_for(parent_index);
            let offset = child_index % TIER2_GROUP_SIZE;
            let slot = group * TIER2_GROUP_SIZE + offset + 1;

            return checked(theme, slot, group, ColorSource::Index);
        }
    }

    if let Some(slot) = legacy_tier2_slot(name) {
        return checked(theme, slot, parent_group, ColorSource::Legacy);
    }

    let slot = hash_index(name) + 1;
    tracing::debug!("Tier2 category '{}' hashed to slot {}", name, slot);
    checked(theme, slot, parent_group, ColorSource::Hash)
}

/// Resolve a tier2 category color.
pub fn tier2_color(
    name: &str,
    parent: Option<&str>,
    theme: Option<&ColorTheme>,
    ctx: Option<&ProjectContext<'_>>,
) -> String {
    tier2_resolution(name, parent, theme, ctx).color
}

/// Read a slot, swapping the badge-unfriendly sentinel for the group's first color.
fn checked(theme: &ColorTheme, slot: usize, group: usize, source: ColorSource) -> Resolution {
    let color = theme.tier2_slot(slot);
    if color.eq_ignore_ascii_case(DARK_SENTINEL) {
        let replacement = group * TIER2_GROUP_SIZE + 1;
        return Resolution::new(theme.tier2_slot(replacement), source, Some(replacement));
    }
    Resolution::new(color, source, Some(slot))
}
