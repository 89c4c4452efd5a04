//! SARO Dashboard
//!
//! AI regulatory intelligence dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Overview with a 30 s refresh of the dashboard summary
//! - Regulatory ingestion, audits, enterprise and guardrail workspaces
//! - Autonomous governance, agent pipeline and model output checks
//! - Policy library, regulatory feed log and audit reports
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All page state lives in the `saro` crate's page models; this
//! crate renders them and drives their requests over `gloo-net`.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
