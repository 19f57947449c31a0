/// Light/dark theme with persisted preference
use crate::constants::THEME_STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{Mutex, PoisonError};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Value of the root element's `data-theme` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn from_preference(prefers_dark: bool) -> Self {
        if prefers_dark { Theme::Dark } else { Theme::Light }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("Unknown theme: {}", other)),
        }
    }
}

/// Key-value persistence, `localStorage` in the browser
pub trait ThemeStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

#[derive(Debug, Default)]
pub struct InMemoryThemeStore {
    values: Mutex<HashMap<String, String>>,
}

impl InMemoryThemeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(theme: Theme) -> Self {
        let store = Self::new();
        store.set(THEME_STORAGE_KEY, theme.as_str());
        store
    }
}

impl ThemeStore for InMemoryThemeStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
    }
}

pub struct ThemeController<S: ThemeStore> {
    store: S,
    theme: Theme,
}

impl<S: ThemeStore> ThemeController<S> {
    /// Picks the saved theme, else the system preference, and persists it
    ///
    /// An unreadable saved value counts as absent.
    pub fn init(store: S, prefers_dark: bool) -> Self {
        let theme = store
            .get(THEME_STORAGE_KEY)
            .and_then(|saved| saved.parse().ok())
            .unwrap_or_else(|| Theme::from_preference(prefers_dark));

        let controller = Self { store, theme };
        controller.persist();
        controller
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.persist();
        debug!(theme = %self.theme, "Theme toggled");
        self.theme
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn persist(&self) {
        self.store.set(THEME_STORAGE_KEY, self.theme.as_str());
    }
}
