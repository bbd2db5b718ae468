//! critterdex: animal taxonomy lookup with generated illustrations and summaries.

pub mod api;
pub mod client;
pub mod config;
pub mod models;
pub mod orchestrator;
pub mod providers;
pub mod reference;
pub mod render;
