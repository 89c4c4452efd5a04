//! State Management
//!
//! Global application state and the helpers pages use to run requests
//! against their page model signals.

pub mod global;

pub use global::{provide_global_state, GlobalState, Navigate};
