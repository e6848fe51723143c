//! Dashboard state managed via Dioxus context.
//!
//! `DashboardState` bundles the parent page's signals into a single struct
//! provided via `use_context_provider`. Panels retrieve it with
//! `use_context::<DashboardState>()` and react to the location independently.

use dioxus::prelude::*;
use geo_api::Location;

/// Top-level views of the app.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Page {
    #[default]
    Analysis,
    UseCases,
}

/// Shared state owned by the parent page.
#[derive(Clone, Copy)]
pub struct DashboardState {
    /// Location every panel analyses (None until the user submits one)
    pub location: Signal<Option<Location>>,
    /// Optional population hint for the economic panel
    pub population: Signal<Option<u64>>,
    /// Currently shown page
    pub page: Signal<Page>,
}

impl DashboardState {
    /// Create a new DashboardState with default signal values.
    pub fn new() -> Self {
        Self {
            location: Signal::new(None),
            population: Signal::new(None),
            page: Signal::new(Page::default()),
        }
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}
