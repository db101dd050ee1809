//! readycheck-core — Core data model, catalog, and scoring engine.
//!
//! This crate defines the question/response data model, the built-in
//! question bank, and the scoring engine that turns collected responses
//! into a readiness recommendation.

pub mod catalog;
pub mod error;
pub mod insights;
pub mod model;
pub mod parser;
pub mod report;
pub mod results;
pub mod scoring;
pub mod session;
