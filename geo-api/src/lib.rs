//! Typed client for the geospatial analytics backend.
//!
//! This crate provides:
//! - `location`: the location value every analysis request is keyed by
//! - `endpoints`: endpoint paths and request bodies
//! - `models`: response schemas, decoded at the boundary
//! - `client`: the reqwest-backed `ApiClient`
//! - `config`: base URL and map key resolution

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod location;
pub mod models;

pub use client::ApiClient;
pub use error::ApiError;
pub use location::Location;
