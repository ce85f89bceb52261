//! Movie recommendation and metadata enrichment service.
//!
//! Recommends titles from a precomputed similarity matrix and enriches them
//! with OMDb metadata, keeping a persistent JSON cache of batch results.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
