//! Core business logic - framework-agnostic journaling, goal tracking, and
//! progress calculation operations. Everything here is callable from any
//! surface (HTTP handlers, CLI tooling, tests) and knows nothing about how
//! results are rendered.

/// Admin affirmation curation and daily rotation
pub mod affirmation;
/// Journal entry CRUD and streak calculation
pub mod entry;
/// Goal and target CRUD
pub mod goal;
/// Journal CRUD and template adoption
pub mod journal;
/// Pure progress calculation engine (normalizer, aggregator, timeline)
pub mod progress;
/// Marketplace template curation
pub mod template;
/// Progress submission and history retrieval
pub mod tracking;
