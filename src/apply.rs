//! Theme application: CSS custom properties for a palette.
//!
//! The resolver layer does not depend on this module; applying a theme only
//! reads the catalog and writes properties through a [`CssSink`].

use crate::color::{hex_to_rgba, lighten};
use crate::state::ThemeState;
use crate::theme::ColorTheme;
use std::collections::BTreeMap;

/// Destination for CSS custom properties (a document root, a test map, ...).
pub trait CssSink {
    /// Set `name` (including the leading `--`) to `value`.
    fn set_property(&mut self, name: &str, value: &str);
}

impl CssSink for BTreeMap<String, String> {
    fn set_property(&mut self, name: &str, value: &str) {
        self.insert(name.to_string(), value.to_string());
    }
}

impl CssSink for Vec<(String, String)> {
    fn set_property(&mut self, name: &str, value: &str) {
        self.push((name.to_string(), value.to_string()));
    }
}

/// All custom properties for a theme, in a stable order.
///
/// - `--tier1-subcategory{1..5}`
/// - `--project-{primary,secondary,accent,muted,border,background}`
/// - `--theme-subcategory-{1..20}`
pub fn css_variables(theme: &ColorTheme) -> Vec<(String, String)> {
    let mut vars = Vec::with_capacity(31);

    for (i, color) in theme.tier1.slots().iter().enumerate() {
        vars.push((format!("--tier1-subcategory{}", i + 1), color.to_string()));
    }

    let project = [
        ("primary", theme.tier1.subcategory1.to_string()),
        ("secondary", theme.tier1.subcategory2.to_string()),
        ("accent", theme.tier1.subcategory3.to_string()),
        ("muted", lighten(theme.tier1.default, 0.6)),
        ("border", theme.tier1.default.to_string()),
        ("background", hex_to_rgba(theme.tier1.subcategory1, 0.08)),
    ];
    for (name, value) in project {
        vars.push((format!("--project-{}", name), value));
    }

    for (i, color) in theme.tier2.iter().enumerate() {
        vars.push((format!("--theme-subcategory-{}", i + 1), color.to_string()));
    }

    vars
}

/// Write a theme's properties to `sink`.
pub fn write_theme(theme: &ColorTheme, sink: &mut impl CssSink) {
    for (name, value) in css_variables(theme) {
        sink.set_property(&name, &value);
    }
}

/// Make `name` the global theme and write its properties.
///
/// Unknown names apply Earth Tone. Subscribers of `state` are notified when
/// the selection changes.
pub fn apply_theme(
    state: &mut ThemeState,
    name: &str,
    sink: &mut impl CssSink,
) -> &'static ColorTheme {
    let theme = state.set_global_theme(name);
    write_theme(theme, sink);
    tracing::info!("Applied theme {}", theme.name);
    theme
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::get_theme;

    #[test]
    fn test_css_variables_names() {
        let vars = css_variables(get_theme("earth-tone"));
        assert_eq!(vars.len(), 31);
        assert_eq!(vars[0].0, "--tier1-subcategory1");
        assert_eq!(vars[5].0, "--project-primary");
        assert_eq!(vars[10].0, "--project-background");
        assert_eq!(vars[11].0, "--theme-subcategory-1");
        assert_eq!(vars[30].0, "--theme-subcategory-20");
    }

    #[test]
    fn test_project_variables_snapshot() {
        let vars = css_variables(get_theme("classic-construction"));
        let project: Vec<String> = vars[5..11]
            .iter()
            .map(|(name, value)| format!("{}: {}", name, value))
            .collect();
        insta::assert_snapshot!(project.join("\n"), @r"
        --project-primary: #fbbf24
        --project-secondary: #f97316
        --project-accent: #1e3a8a
        --project-muted: #bababa
        --project-border: #525252
        --project-background: rgba(251, 191, 36, 0.08)
        ");
    }

    #[test]
    fn test_apply_theme_writes_sink_and_notifies() {
        let mut state = ThemeState::default();
        let changes = std::sync::Arc::new(std::sync::Mutex::new(0));
        let counter = std::sync::Arc::clone(&changes);
        state.subscribe(move |_| *counter.lock().unwrap() += 1);

        let mut sink = BTreeMap::new();
        let theme = apply_theme(&mut state, "Molten Core", &mut sink);

        assert_eq!(theme.key, "molten-core");
        assert_eq!(sink.get("--tier1-subcategory1").map(String::as_str), Some("#ff4500"));
        assert_eq!(sink.get("--theme-subcategory-20").map(String::as_str), Some("#b8860b"));
        assert_eq!(*changes.lock().unwrap(), 1);
    }
}
