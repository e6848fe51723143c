//! Theme catalogue and the persisted theme preference.
//!
//! `ThemeStore` owns the current theme id and writes every change through a
//! [`ThemeStorage`] implementation, so the browser's `localStorage` can be
//! swapped for an in-memory cell in tests.

use log::{debug, info};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Storage key holding the selected theme id.
pub const THEME_STORAGE_KEY: &str = "app-theme";

/// Identifier of one of the fixed themes, in toggle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeId {
    #[default]
    Space,
    Earth,
    Data,
}

impl ThemeId {
    pub const ALL: [ThemeId; 3] = [ThemeId::Space, ThemeId::Earth, ThemeId::Data];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeId::Space => "space",
            ThemeId::Earth => "earth",
            ThemeId::Data => "data",
        }
    }

    /// Parse a persisted or user-supplied id. Unknown ids yield `None`.
    pub fn parse(id: &str) -> Option<Self> {
        ThemeId::ALL.into_iter().find(|t| t.as_str() == id)
    }

    /// The next theme in order, wrapping around.
    pub fn next(&self) -> Self {
        let index = ThemeId::ALL.iter().position(|t| t == self).unwrap_or(0);
        ThemeId::ALL[(index + 1) % ThemeId::ALL.len()]
    }

    pub fn theme(&self) -> &'static Theme {
        match self {
            ThemeId::Space => &THEMES[0],
            ThemeId::Earth => &THEMES[1],
            ThemeId::Data => &THEMES[2],
        }
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Semantic colour names and their values for one theme.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub primary: &'static str,
    pub primary_dark: &'static str,
    pub secondary: &'static str,
    pub background: &'static str,
    pub background_secondary: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub accent: &'static str,
    pub border: &'static str,
    pub card_bg: &'static str,
    pub gradient: &'static str,
    pub header_gradient: &'static str,
}

impl Palette {
    /// The palette as `--color-*` CSS custom properties.
    pub fn css_variables(&self) -> [(&'static str, &'static str); 13] {
        [
            ("--color-primary", self.primary),
            ("--color-primary-dark", self.primary_dark),
            ("--color-secondary", self.secondary),
            ("--color-background", self.background),
            ("--color-background-secondary", self.background_secondary),
            ("--color-surface", self.surface),
            ("--color-text", self.text),
            ("--color-text-secondary", self.text_secondary),
            ("--color-accent", self.accent),
            ("--color-border", self.border),
            ("--color-card-bg", self.card_bg),
            ("--color-gradient", self.gradient),
            ("--color-header-gradient", self.header_gradient),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub id: ThemeId,
    pub name: &'static str,
    pub icon: &'static str,
    pub palette: Palette,
}

static THEMES: [Theme; 3] = [
    Theme {
        id: ThemeId::Space,
        name: "Space Dark",
        icon: "🌌",
        palette: Palette {
            primary: "#14b8a6",
            primary_dark: "#0d9488",
            secondary: "#06b6d4",
            background: "#0a0e27",
            background_secondary: "#1a1f3a",
            surface: "#1e293b",
            text: "#ffffff",
            text_secondary: "#cbd5e1",
            accent: "#14b8a6",
            border: "rgba(20, 184, 166, 0.2)",
            card_bg: "#1e293b",
            gradient: "linear-gradient(135deg, #0a0e27 0%, #1a1f3a 50%, #0a0e27 100%)",
            header_gradient: "linear-gradient(135deg, #0d9488 0%, #14b8a6 100%)",
        },
    },
    Theme {
        id: ThemeId::Earth,
        name: "Earth Light",
        icon: "🌍",
        palette: Palette {
            primary: "#10b981",
            primary_dark: "#059669",
            secondary: "#3b82f6",
            background: "#f8fafc",
            background_secondary: "#f1f5f9",
            surface: "#ffffff",
            text: "#1e293b",
            text_secondary: "#64748b",
            accent: "#10b981",
            border: "#e2e8f0",
            card_bg: "#ffffff",
            gradient: "linear-gradient(135deg, #f8fafc 0%, #f1f5f9 100%)",
            header_gradient: "linear-gradient(135deg, #059669 0%, #10b981 100%)",
        },
    },
    Theme {
        id: ThemeId::Data,
        name: "Data Neon",
        icon: "📊",
        palette: Palette {
            primary: "#3b82f6",
            primary_dark: "#2563eb",
            secondary: "#f59e0b",
            background: "#1e293b",
            background_secondary: "#0f172a",
            surface: "#334155",
            text: "#ffffff",
            text_secondary: "#cbd5e1",
            accent: "#3b82f6",
            border: "rgba(59, 130, 246, 0.3)",
            card_bg: "#334155",
            gradient: "linear-gradient(135deg, #1e293b 0%, #0f172a 100%)",
            header_gradient: "linear-gradient(135deg, #2563eb 0%, #3b82f6 100%)",
        },
    },
];

/// Durable key-value slot for the theme id.
pub trait ThemeStorage {
    fn load(&self) -> Option<String>;
    fn save(&self, id: &str);
}

/// In-memory storage. Clones share the same slot, so a store rebuilt from
/// a clone sees what the previous store persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(id: &str) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(id.to_string()))),
        }
    }
}

impl ThemeStorage for MemoryStorage {
    fn load(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn save(&self, id: &str) {
        *self.slot.borrow_mut() = Some(id.to_string());
    }
}

/// Process-wide theme preference backed by a [`ThemeStorage`].
#[derive(Debug, Clone)]
pub struct ThemeStore<S> {
    current: ThemeId,
    storage: S,
}

impl<S: ThemeStorage> ThemeStore<S> {
    /// Read the persisted id, falling back to the default theme when it is
    /// absent or unrecognized, and persist the resolved id.
    pub fn open(storage: S) -> Self {
        let saved = storage.load();
        let current = saved
            .as_deref()
            .and_then(ThemeId::parse)
            .unwrap_or_default();
        if saved.as_deref() != Some(current.as_str()) {
            debug!("Stored theme {:?} not usable, using {}", saved, current);
        }
        storage.save(current.as_str());
        Self { current, storage }
    }

    pub fn theme(&self) -> ThemeId {
        self.current
    }

    pub fn active(&self) -> &'static Theme {
        self.current.theme()
    }

    /// All themes in toggle order.
    pub fn themes() -> &'static [Theme] {
        &THEMES
    }

    /// Switch to the theme named `id`. Unknown ids are ignored.
    ///
    /// Returns whether `id` named a theme.
    pub fn set_theme(&mut self, id: &str) -> bool {
        match ThemeId::parse(id) {
            Some(theme) => {
                self.select(theme);
                true
            }
            None => {
                debug!("Ignoring unknown theme id '{}'", id);
                false
            }
        }
    }

    pub fn select(&mut self, theme: ThemeId) {
        self.current = theme;
        self.storage.save(theme.as_str());
        info!("Theme set to {}", theme);
    }

    /// Advance to the next theme, wrapping around.
    pub fn toggle(&mut self) -> ThemeId {
        let next = self.current.next();
        self.select(next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_space() {
        let store = ThemeStore::open(MemoryStorage::new());
        assert_eq!(store.theme(), ThemeId::Space);
        assert_eq!(store.active().name, "Space Dark");
    }

    #[test]
    fn test_unrecognized_persisted_id_falls_back() {
        let storage = MemoryStorage::with_value("solarized");
        let store = ThemeStore::open(storage.clone());
        assert_eq!(store.theme(), ThemeId::Space);
        assert_eq!(storage.load().as_deref(), Some("space"));
    }

    #[test]
    fn test_set_theme_survives_reload() {
        let storage = MemoryStorage::new();
        let mut store = ThemeStore::open(storage.clone());
        assert!(store.set_theme("earth"));

        let reloaded = ThemeStore::open(storage);
        assert_eq!(reloaded.theme(), ThemeId::Earth);
    }

    #[test]
    fn test_unknown_theme_is_ignored() {
        let storage = MemoryStorage::new();
        let mut store = ThemeStore::open(storage.clone());
        store.select(ThemeId::Data);
        assert!(!store.set_theme("unknown"));
        assert_eq!(store.theme(), ThemeId::Data);
        assert_eq!(storage.load().as_deref(), Some("data"));
    }

    #[test]
    fn test_parse_theme_ids() {
        assert_eq!(ThemeId::parse("earth"), Some(ThemeId::Earth));
        assert_eq!(ThemeId::parse("Earth"), None);
        assert_eq!(ThemeId::parse(""), None);
        assert_eq!(ThemeId::parse("unknown"), None);
    }

    #[test]
    fn test_toggle_wraps_around() {
        let mut store = ThemeStore::open(MemoryStorage::new());
        assert_eq!(store.toggle(), ThemeId::Earth);
        assert_eq!(store.toggle(), ThemeId::Data);
        assert_eq!(store.toggle(), ThemeId::Space);
    }

    #[test]
    fn test_theme_catalogue_order() {
        let ids: Vec<&str> = ThemeStore::<MemoryStorage>::themes()
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(ids, vec!["space", "earth", "data"]);
        for id in ThemeId::ALL {
            assert_eq!(id.theme().id, id);
        }
    }

    #[test]
    fn test_css_variables() {
        let vars = ThemeId::Earth.theme().palette.css_variables();
        assert_eq!(vars[0], ("--color-primary", "#10b981"));
        assert!(vars.iter().any(|(name, value)| *name == "--color-border" && *value == "#e2e8f0"));
    }
}
