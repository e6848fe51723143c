//! Dioxus components and JS bridge for the geospatial dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js land-cover chart and Google Maps via `js_sys::eval()`
//! - `script_loader`: one-shot, shared loading of external scripts
//! - `state`: the dashboard's reactive state (selected location, population, page)
//! - `theme`: the theme context, provider and `localStorage` persistence
//! - `use_cases`: the static use-case catalogue
//! - `components`: panels, map widget and shared RSX pieces

pub mod components;
pub mod js_bridge;
pub mod script_loader;
pub mod state;
pub mod theme;
pub mod use_cases;
