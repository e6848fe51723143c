//! View state for the geospatial dashboard, independent of the UI toolkit.
//!
//! Everything here is plain Rust so it can be exercised by native tests:
//! - `theme`: theme catalogue and the persisted `ThemeStore`
//! - `panel`: per-panel fetch state machine with request sequencing
//! - `script_cache`: memoized external script loads keyed by URL
//! - `map`: map widget status resolution
//! - `time_series`, `carbon`, `economic`: response-to-view shaping

pub mod carbon;
pub mod economic;
pub mod map;
pub mod panel;
pub mod script_cache;
pub mod theme;
pub mod time_series;
