//! Endpoint methods
//!
//! One thin method per backend endpoint, grouped by functional area. Each is
//! a pass-through: a fixed path, optional query or path segments, and a JSON
//! body for mutating calls.

mod agent;
mod agentic;
mod audit;
mod autonomous;
mod enterprise;
mod ingestion;
mod platform;
mod policies;
mod reports;
