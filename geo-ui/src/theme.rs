//! Theme context for the dashboard.
//!
//! `ThemeProvider` opens a [`ThemeStore`] over `localStorage`, provides it to
//! the tree as a [`ThemeContext`], and mirrors the active palette onto the
//! document root as `data-theme` plus `--color-*` custom properties.

use dioxus::prelude::*;
use geo_state::theme::{Palette, Theme, ThemeId, ThemeStorage, ThemeStore, THEME_STORAGE_KEY};
use gloo_storage::{LocalStorage, Storage};
use log::warn;
use wasm_bindgen::JsCast;

/// `localStorage`-backed theme persistence. Read and write failures
/// (private browsing, quota) are logged and otherwise ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl ThemeStorage for BrowserStorage {
    fn load(&self) -> Option<String> {
        match LocalStorage::raw().get_item(THEME_STORAGE_KEY) {
            Ok(value) => value,
            Err(e) => {
                warn!("Failed to read stored theme: {:?}", e);
                None
            }
        }
    }

    fn save(&self, id: &str) {
        if let Err(e) = LocalStorage::raw().set_item(THEME_STORAGE_KEY, id) {
            warn!("Failed to persist theme '{}': {:?}", id, e);
        }
    }
}

/// Handle to the theme store shared via context.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    store: Signal<ThemeStore<BrowserStorage>>,
}

impl ThemeContext {
    pub fn theme(&self) -> ThemeId {
        self.store.read().theme()
    }

    pub fn active(&self) -> &'static Theme {
        self.store.read().active()
    }

    pub fn palette(&self) -> &'static Palette {
        &self.active().palette
    }

    pub fn themes(&self) -> &'static [Theme] {
        ThemeStore::<BrowserStorage>::themes()
    }

    /// Unknown ids are ignored; returns whether `id` named a theme.
    pub fn set_theme(&mut self, id: &str) -> bool {
        match ThemeId::parse(id) {
            Some(theme) => {
                self.store.write().select(theme);
                true
            }
            None => {
                warn!("Ignoring unknown theme id '{}'", id);
                false
            }
        }
    }

    pub fn toggle(&mut self) -> ThemeId {
        self.store.write().toggle()
    }
}

/// The theme context. Must be called below a [`ThemeProvider`].
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
}

/// Copy the theme onto `<html>` so plain CSS can follow it.
fn apply_to_document(theme: &Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    if let Err(e) = root.set_attribute("data-theme", theme.id.as_str()) {
        warn!("Failed to set data-theme: {:?}", e);
    }
    let Ok(html) = root.dyn_into::<web_sys::HtmlElement>() else {
        return;
    };
    let style = html.style();
    for (name, value) in theme.palette.css_variables() {
        if let Err(e) = style.set_property(name, value) {
            warn!("Failed to set {}: {:?}", name, e);
        }
    }
}

/// Provides [`ThemeContext`] and paints the page background for the
/// active theme.
#[component]
pub fn ThemeProvider(children: Element) -> Element {
    let theme = use_context_provider(|| ThemeContext {
        store: Signal::new(ThemeStore::open(BrowserStorage)),
    });

    use_effect(move || {
        apply_to_document(theme.active());
    });

    let palette = theme.palette();
    rsx! {
        div {
            style: "min-height: 100vh; background: {palette.gradient}; color: {palette.text}; font-family: system-ui, -apple-system, sans-serif;",
            style { "@keyframes spin {{ to {{ transform: rotate(360deg); }} }}" }
            {children}
        }
    }
}
