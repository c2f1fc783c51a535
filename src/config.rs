//! Configuration constants and settings for color resolution and template loading.

use std::path::PathBuf;

/// Theme used when no theme is selected or a theme name is unknown.
pub const DEFAULT_THEME_KEY: &str = "earth-tone";

/// Tier1 color returned when no theme slot can be resolved.
pub const FALLBACK_TIER1_COLOR: &str = "#6366f1";

/// Neutral gray used when a tier2 category has lost its parent.
pub const FALLBACK_GRAY: &str = "#64748b";

/// Tier2 color that is too dark to render as a badge background.
pub const DARK_SENTINEL: &str = "#1a1a1a";

/// Number of tier1 slots per theme.
pub const TIER1_SLOTS: usize = 5;

/// Number of tier2 slots per theme.
pub const TIER2_SLOTS: usize = 20;

/// Number of tier2 slots reserved for each tier1 group.
pub const TIER2_GROUP_SIZE: usize = 5;

/// Number of tier2 groups (tier1 slot 4 wraps back to group 0).
pub const TIER2_GROUPS: usize = TIER2_SLOTS / TIER2_GROUP_SIZE;

/// Default location of the JSON store used by the CLI.
pub const DEFAULT_STORE_PATH: &str = "tiercolor-store.json";

/// Preset loaded when none is named.
pub const DEFAULT_PRESET: &str = "construction";

/// Current version of the store file layout.
pub const STORE_FORMAT_VERSION: u32 = 2;

/// Settings for a template loader run.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Path of the JSON store file.
    pub store_path: PathBuf,
    /// Name of the category/task preset to load.
    pub preset: String,
    /// Global theme for projects that do not select their own.
    pub global_theme: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            preset: DEFAULT_PRESET.to_string(),
            global_theme: DEFAULT_THEME_KEY.to_string(),
        }
    }
}

impl LoaderConfig {
    /// Create a configuration for the given store file.
    pub fn new(store_path: impl Into<PathBuf>) -> Self {
        Self {
            store_path: store_path.into(),
            ..Default::default()
        }
    }

    /// Use a different preset.
    pub fn with_preset(mut self, preset: impl Into<String>) -> Self {
        self.preset = preset.into();
        self
    }

    /// Use a different global theme.
    pub fn with_global_theme(mut self, theme: impl Into<String>) -> Self {
        self.global_theme = theme.into();
        self
    }
}

/// Name normalization shared by theme, synonym and preset lookups.
pub mod names {
    /// Lower-case, trim, and turn whitespace runs and underscores into single hyphens.
    ///
    /// `"Earth Tone"`, `"earth_tone"` and `" EARTH-tone "` all become `"earth-tone"`.
    pub fn normalize_key(name: &str) -> String {
        let mut out = String::with_capacity(name.len());
        let mut pending_hyphen = false;

        for c in name.trim().chars() {
            if c.is_whitespace() || c == '_' || c == '-' {
                pending_hyphen = true;
                continue;
            }
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.extend(c.to_lowercase());
        }

        out
    }

    /// Comparison key for a display name: trimmed and Unicode lower-cased.
    pub fn name_key(name: &str) -> String {
        name.trim().to_lowercase()
    }

    /// Names equal under [`name_key`].
    #[inline]
    pub fn same_name(a: &str, b: &str) -> bool {
        name_key(a) == name_key(b)
    }
}

#[cfg(test)]
mod tests {
    use super::names::*;
    use super::*;

    #[test]
    fn test_normalize_key_title_case() {
        assert_eq!(normalize_key("Earth Tone"), "earth-tone");
        assert_eq!(normalize_key("Classic  Construction"), "classic-construction");
    }

    #[test]
    fn test_normalize_key_underscores_and_padding() {
        assert_eq!(normalize_key("  neon_noir "), "neon-noir");
        assert_eq!(normalize_key("paper--bright"), "paper-bright");
        assert_eq!(normalize_key(""), "");
    }

    #[test]
    fn test_same_name() {
        assert!(same_name("Structural", " structural "));
        assert!(!same_name("Structural", "Systems"));
    }

    #[test]
    fn test_same_name_non_ascii() {
        assert!(same_name("ÉTAGE", "étage"));
        assert_eq!(name_key(" Ärmel "), "ärmel");
        assert!(!same_name("Ärmel", "Armel"));
    }

    #[test]
    fn test_loader_config_builder() {
        let config = LoaderConfig::new("/tmp/store.json")
            .with_preset("workout")
            .with_global_theme("pastel");
        assert_eq!(config.store_path, PathBuf::from("/tmp/store.json"));
        assert_eq!(config.preset, "workout");
        assert_eq!(config.global_theme, "pastel");
        assert_eq!(TIER2_GROUPS, 4);
    }
}
