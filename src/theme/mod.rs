//! Theme catalog: named, immutable tier1/tier2 palettes.

mod catalog;

use crate::config::{names::normalize_key, DEFAULT_THEME_KEY, TIER2_GROUP_SIZE, TIER2_SLOTS};
use serde::Serialize;

pub use catalog::{LEGACY_TIER2_SLOTS, THEMES};

/// The five tier1 slots plus the color used when no slot applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tier1Palette {
    pub subcategory1: &'static str,
    pub subcategory2: &'static str,
    pub subcategory3: &'static str,
    pub subcategory4: &'static str,
    pub subcategory5: &'static str,
    pub default: &'static str,
}

impl Tier1Palette {
    /// Color for a 0-based slot; indices past the fifth slot cycle.
    pub fn slot(&self, index: usize) -> &'static str {
        match index % 5 {
            0 => self.subcategory1,
            1 => self.subcategory2,
            2 => self.subcategory3,
            3 => self.subcategory4,
            _ => self.subcategory5,
        }
    }

    /// All five slot colors in order.
    pub fn slots(&self) -> [&'static str; 5] {
        [
            self.subcategory1,
            self.subcategory2,
            self.subcategory3,
            self.subcategory4,
            self.subcategory5,
        ]
    }
}

/// A named palette assigning colors to tier1 and tier2 slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorTheme {
    /// Catalog key in kebab-case (e.g., "earth-tone").
    pub key: &'static str,
    /// Display name (e.g., "Earth Tone").
    pub name: &'static str,
    /// Short description shown in theme pickers.
    pub description: &'static str,
    /// Tier1 slot colors.
    pub tier1: Tier1Palette,
    /// Tier2 slot colors; index 0 holds `tier2_1`.
    pub tier2: [&'static str; TIER2_SLOTS],
}

impl ColorTheme {
    /// Color for a 1-based tier2 slot (`tier2_1` ..= `tier2_20`).
    ///
    /// Out-of-range slots wrap into the table.
    pub fn tier2_slot(&self, slot: usize) -> &'static str {
        self.tier2[slot.saturating_sub(1) % TIER2_SLOTS]
    }

    /// The five tier2 colors reserved for a group (0..=3).
    pub fn tier2_group(&self, group: usize) -> &[&'static str] {
        let start = (group % (TIER2_SLOTS / TIER2_GROUP_SIZE)) * TIER2_GROUP_SIZE;
        &self.tier2[start..start + TIER2_GROUP_SIZE]
    }

    /// Color stored under a legacy tier2 name (e.g., "drywall").
    pub fn legacy_tier2(&self, name: &str) -> Option<&'static str> {
        legacy_tier2_slot(name).map(|slot| self.tier2_slot(slot))
    }

    /// Every color in the theme, tier1 slots first.
    pub fn colors(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.tier1
            .slots()
            .into_iter()
            .chain(std::iter::once(self.tier1.default))
            .chain(self.tier2.iter().copied())
    }
}

/// 1-based slot for a legacy tier2 name.
pub fn legacy_tier2_slot(name: &str) -> Option<usize> {
    let key = normalize_key(name).replace('-', "_");
    LEGACY_TIER2_SLOTS
        .iter()
        .find(|(legacy, _)| *legacy == key)
        .map(|(_, slot)| *slot)
}

/// Look up a theme by key or display name.
///
/// Matching ignores case and treats whitespace, `_` and `-` alike, so
/// "Neon Noir", "neon_noir" and "neon-noir" all find the same theme.
pub fn find_theme(name: &str) -> Option<&'static ColorTheme> {
    let key = normalize_key(name);
    if key.is_empty() {
        return None;
    }
    THEMES.iter().find(|theme| theme.key == key)
}

/// Look up a theme, falling back to Earth Tone for unknown names.
pub fn get_theme(name: &str) -> &'static ColorTheme {
    find_theme(name).unwrap_or_else(|| {
        tracing::debug!("Unknown theme '{}', using {}", name, DEFAULT_THEME_KEY);
        default_theme()
    })
}

/// The Earth Tone theme.
pub fn default_theme() -> &'static ColorTheme {
    &THEMES[0]
}

/// All built-in themes.
pub fn all_themes() -> &'static [ColorTheme] {
    &THEMES
}

/// Keys of all built-in themes in catalog order.
pub fn theme_keys() -> Vec<&'static str> {
    THEMES.iter().map(|theme| theme.key).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::is_valid_hex;
    use pretty_assertions::assert_eq;

    // ==================== catalog tests ====================

    #[test]
    fn test_catalog_keys() {
        assert_eq!(
            theme_keys(),
            vec![
                "earth-tone",
                "pastel",
                "futuristic",
                "classic-construction",
                "molten-core",
                "neon-noir",
                "dust-planet",
                "crystal-cavern",
                "paper-studio",
                "paper-bright",
                "velvet-lounge",
                "volcanic-dunes",
            ]
        );
    }

    #[test]
    fn test_every_color_is_valid_hex() {
        for theme in all_themes() {
            assert!(is_valid_hex(theme.tier1.default), "{} default", theme.key);
            for slot in 1..=TIER2_SLOTS {
                let color = theme.tier2_slot(slot);
                assert!(is_valid_hex(color), "{} tier2_{} = {}", theme.key, slot, color);
            }
            assert_eq!(theme.colors().count(), 26);
            assert!(theme.colors().all(is_valid_hex), "{}", theme.key);
        }
    }

    #[test]
    fn test_default_theme_is_earth_tone() {
        assert_eq!(default_theme().key, DEFAULT_THEME_KEY);
        assert_eq!(default_theme().name, "Earth Tone");
    }

    // ==================== lookup tests ====================

    #[test]
    fn test_find_theme_name_variants() {
        for name in ["neon-noir", "Neon Noir", "NEON_NOIR", "  neon   noir "] {
            assert_eq!(find_theme(name).map(|t| t.key), Some("neon-noir"), "{}", name);
        }
    }

    #[test]
    fn test_get_theme_unknown_falls_back() {
        assert_eq!(get_theme("not-a-theme").key, "earth-tone");
        assert_eq!(get_theme("").key, "earth-tone");
        assert!(find_theme("not-a-theme").is_none());
    }

    // ==================== slot tests ====================

    #[test]
    fn test_tier1_slot_cycles() {
        let tier1 = &get_theme("pastel").tier1;
        assert_eq!(tier1.slot(0), tier1.subcategory1);
        assert_eq!(tier1.slot(4), tier1.subcategory5);
        assert_eq!(tier1.slot(5), tier1.subcategory1);
    }

    #[test]
    fn test_tier2_group_bounds() {
        let theme = default_theme();
        assert_eq!(theme.tier2_group(0), &theme.tier2[0..5]);
        assert_eq!(theme.tier2_group(3), &theme.tier2[15..20]);
        assert_eq!(theme.tier2_group(4), theme.tier2_group(0));
    }

    #[test]
    fn test_legacy_tier2_names() {
        assert_eq!(legacy_tier2_slot("Drywall"), Some(12));
        assert_eq!(legacy_tier2_slot("low voltage"), Some(9));
        assert_eq!(legacy_tier2_slot("gazebo"), None);

        let theme = get_theme("classic-construction");
        assert_eq!(theme.legacy_tier2("foundation"), Some(theme.tier2[0]));
    }
}
