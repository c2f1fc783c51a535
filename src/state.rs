//! Theme application state.
//!
//! Holds the active global theme and per-project overrides as an owned value
//! that callers pass down explicitly. Listeners are notified synchronously on
//! every change.

use crate::model::ProjectThemeData;
use crate::resolve::{self, ProjectContext, Resolution};
use crate::theme::{default_theme, find_theme, get_theme, ColorTheme};
use std::collections::HashMap;
use std::fmt;

/// A change broadcast to subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeChange {
    /// The global theme changed.
    Global { theme: &'static str },
    /// A project override was set (`Some`) or cleared (`None`).
    Project {
        project_id: u64,
        theme: Option<&'static str>,
    },
}

/// Handle returned by [`ThemeState::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Change callback.
pub type Listener = Box<dyn Fn(&ThemeChange) + Send>;

/// Active theme selection with subscribe/notify.
pub struct ThemeState {
    global: &'static ColorTheme,
    project_overrides: HashMap<u64, &'static ColorTheme>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new(default_theme())
    }
}

impl fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeState")
            .field("global", &self.global.key)
            .field("project_overrides", &self.project_overrides.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl ThemeState {
    /// Create state with the given global theme.
    pub fn new(global: &'static ColorTheme) -> Self {
        Self {
            global,
            project_overrides: HashMap::new(),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// The active global theme.
    pub fn global_theme(&self) -> &'static ColorTheme {
        self.global
    }

    /// Select the global theme by name; unknown names select Earth Tone.
    pub fn set_global_theme(&mut self, name: &str) -> &'static ColorTheme {
        let theme = get_theme(name);
        if theme.key != self.global.key {
            self.global = theme;
            self.notify(ThemeChange::Global { theme: theme.key });
        }
        theme
    }

    /// Override the theme of one project; `None` or an unknown name clears it.
    pub fn set_project_theme(&mut self, project_id: u64, name: Option<&str>) {
        let theme = name.and_then(find_theme);
        let previous = match theme {
            Some(theme) => self.project_overrides.insert(project_id, theme),
            None => self.project_overrides.remove(&project_id),
        };

        if previous.map(|t| t.key) != theme.map(|t| t.key) {
            self.notify(ThemeChange::Project {
                project_id,
                theme: theme.map(|t| t.key),
            });
        }
    }

    /// In-memory override for a project.
    pub fn project_override(&self, project_id: u64) -> Option<&'static ColorTheme> {
        self.project_overrides.get(&project_id).copied()
    }

    /// Theme used to render a project: override, then stored selection, then global.
    pub fn theme_for_project(
        &self,
        project_id: Option<u64>,
        stored: Option<&ProjectThemeData>,
    ) -> &'static ColorTheme {
        project_id
            .and_then(|id| self.project_override(id))
            .or_else(|| stored.and_then(|p| p.explicit_theme()).map(get_theme))
            .unwrap_or(self.global)
    }

    /// Register a change listener.
    pub fn subscribe(
        &mut self,
        listener: impl Fn(&ThemeChange) + Send + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    fn notify(&self, change: ThemeChange) {
        tracing::debug!("Theme change: {:?}", change);
        for (_, listener) in &self.listeners {
            listener(&change);
        }
    }

    /// Bind the state to optional project data for color lookups.
    pub fn resolver<'a>(&'a self, ctx: Option<ProjectContext<'a>>) -> ColorResolver<'a> {
        ColorResolver { state: self, ctx }
    }
}

/// Color lookups against a [`ThemeState`] and optional project data.
#[derive(Debug, Clone, Copy)]
pub struct ColorResolver<'a> {
    state: &'a ThemeState,
    ctx: Option<ProjectContext<'a>>,
}

impl<'a> ColorResolver<'a> {
    /// Project data with any in-memory override applied.
    fn context(&self) -> Option<ProjectContext<'a>> {
        let ctx = self.ctx?;
        Some(ctx.with_theme_override(self.state.project_override(ctx.project_id)))
    }

    /// Theme the lookups run against.
    pub fn theme(&self) -> &'static ColorTheme {
        let stored = self.ctx.and_then(|ctx| ctx.project());
        self.state
            .theme_for_project(self.ctx.map(|ctx| ctx.project_id), stored)
    }

    /// Tier1 color with its resolution details.
    pub fn tier1(&self, name: &str) -> Resolution {
        let ctx = self.context();
        resolve::tier1_resolution(name, Some(self.state.global), ctx.as_ref())
    }

    /// Tier2 color with its resolution details.
    pub fn tier2(&self, name: &str, parent: Option<&str>) -> Resolution {
        let ctx = self.context();
        resolve::tier2_resolution(name, parent, Some(self.state.global), ctx.as_ref())
    }

    /// Color for a category row by id, or the tier1 fallback when it is unknown.
    pub fn category_color(&self, category_id: u64) -> String {
        let Some(category) = self.ctx.and_then(|ctx| ctx.category(category_id)) else {
            return crate::config::FALLBACK_TIER1_COLOR.to_string();
        };
        if category.is_tier1() {
            self.tier1(&category.name).color
        } else {
            let parent = category
                .parent_id
                .and_then(|id| self.ctx.and_then(|ctx| ctx.category(id)))
                .map(|p| p.name.as_str());
            self.tier2(&category.name, parent).color
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CategoryData;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_set_global_theme_notifies_once() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut state = ThemeState::default();
        let sink = Arc::clone(&seen);
        state.subscribe(move |change| sink.lock().unwrap().push(*change));

        state.set_global_theme("Pastel");
        state.set_global_theme("pastel");

        assert_eq!(state.global_theme().key, "pastel");
        assert_eq!(
            *seen.lock().unwrap(),
            vec![ThemeChange::Global { theme: "pastel" }]
        );
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let count = Arc::new(Mutex::new(0));
        let mut state = ThemeState::default();
        let sink = Arc::clone(&count);
        let id = state.subscribe(move |_| *sink.lock().unwrap() += 1);

        state.set_project_theme(3, Some("futuristic"));
        assert!(state.unsubscribe(id));
        assert!(!state.unsubscribe(id));
        state.set_project_theme(3, None);

        assert_eq!(*count.lock().unwrap(), 1);
        assert!(state.project_override(3).is_none());
    }

    #[test]
    fn test_theme_for_project_precedence() {
        let mut state = ThemeState::default();
        state.set_global_theme("pastel");
        let stored = ProjectThemeData {
            id: 4,
            color_theme: Some("molten-core".to_string()),
            use_global_theme: false,
        };

        assert_eq!(state.theme_for_project(Some(4), Some(&stored)).key, "molten-core");
        state.set_project_theme(4, Some("neon noir"));
        assert_eq!(state.theme_for_project(Some(4), Some(&stored)).key, "neon-noir");
        assert_eq!(state.theme_for_project(None, None).key, "pastel");
    }

    #[test]
    fn test_resolver_uses_override_over_stored_selection() {
        let categories = vec![
            CategoryData::tier1(1, "Structural", 0).in_project(9),
            CategoryData::tier2(2, "Framing", 1, 0).in_project(9),
        ];
        let projects = vec![ProjectThemeData {
            id: 9,
            color_theme: Some("pastel".to_string()),
            use_global_theme: false,
        }];
        let mut state = ThemeState::default();

        let color = state
            .resolver(Some(ProjectContext::new(9, &categories, &projects)))
            .tier1("Structural")
            .color;
        assert_eq!(color, get_theme("pastel").tier1.subcategory2);

        state.set_project_theme(9, Some("futuristic"));
        let resolver = state.resolver(Some(ProjectContext::new(9, &categories, &projects)));
        assert_eq!(resolver.theme().key, "futuristic");
        assert_eq!(
            resolver.tier1("Structural").color,
            get_theme("futuristic").tier1.subcategory2
        );
        assert_eq!(resolver.category_color(2), get_theme("futuristic").tier2_slot(1));
        assert_eq!(resolver.category_color(42), crate::config::FALLBACK_TIER1_COLOR);
    }
}
