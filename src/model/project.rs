//! Projects and their theme selection.

use serde::{Deserialize, Serialize};

/// Per-project theme selection, as read by the color resolvers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectThemeData {
    /// Project identifier.
    pub id: u64,
    /// Selected theme key or display name.
    #[serde(default)]
    pub color_theme: Option<String>,
    /// Whether the project follows the global theme instead of its own.
    #[serde(default)]
    pub use_global_theme: bool,
}

impl ProjectThemeData {
    /// Theme name the project has explicitly chosen, if it overrides the global theme.
    pub fn explicit_theme(&self) -> Option<&str> {
        if self.use_global_theme {
            return None;
        }
        self.color_theme
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

/// A project row in the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Project identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Selected theme.
    #[serde(default)]
    pub color_theme: Option<String>,
    /// Follow the global theme.
    #[serde(default)]
    pub use_global_theme: bool,
}

impl Project {
    /// Create a project following the global theme.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color_theme: None,
            use_global_theme: true,
        }
    }

    /// Select a project-specific theme.
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.color_theme = Some(theme.into());
        self.use_global_theme = false;
        self
    }

    /// The theme selection view used by the resolvers.
    pub fn theme_data(&self) -> ProjectThemeData {
        ProjectThemeData {
            id: self.id,
            color_theme: self.color_theme.clone(),
            use_global_theme: self.use_global_theme,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_theme_respects_global_flag() {
        let mut data = Project::new(1, "Cabin").with_theme("Neon Noir").theme_data();
        assert_eq!(data.explicit_theme(), Some("Neon Noir"));

        data.use_global_theme = true;
        assert_eq!(data.explicit_theme(), None);
    }

    #[test]
    fn test_explicit_theme_ignores_blank() {
        let data = ProjectThemeData {
            id: 1,
            color_theme: Some("   ".to_string()),
            use_global_theme: false,
        };
        assert_eq!(data.explicit_theme(), None);
    }
}
