//! SARO REST API client
//!
//! The single chokepoint between the dashboard and the backend. Every
//! endpoint method goes through [`ApiClient::request`], which checks the
//! base URL, attaches JSON headers, rejects HTML bodies and turns non-2xx
//! statuses into [`ClientError::Api`].
//!
//! # Endpoints
//!
//! ## Platform
//! - `GET /api/v1/health`
//! - `GET /api/v1/dashboard`, `GET /api/v1/dashboard/risk-heatmap`
//! - `GET /api/v1/personas`, `POST /api/v1/onboard`
//! - `GET /api/v1/checklist/persona/{persona}`, `GET /api/v1/checklist/compliance-status`
//!
//! ## MVP1: Ingestion
//! - `POST /api/v1/mvp1/ingest`
//! - `GET /api/v1/mvp1/documents?limit=`, `GET /api/v1/mvp1/documents/{id}`
//! - `GET /api/v1/mvp1/forecast?jurisdiction=`, `GET /api/v1/mvp1/stats`
//!
//! ## MVP2: Audit
//! - `POST /api/v1/mvp2/audit`, `GET /api/v1/mvp2/audits`, `GET /api/v1/mvp2/audits/{id}`
//! - `GET /api/v1/mvp2/compliance-matrix?jurisdiction=`
//! - `POST /api/v1/mvp2/orchestrate`, `GET /api/v1/mvp2/pipeline-status`
//!
//! ## MVP3: Enterprise
//! - `POST /api/v1/mvp3/tenants`, `GET /api/v1/mvp3/tenants`
//! - `GET /api/v1/mvp3/ha-status`, `GET /api/v1/mvp3/integrations`
//! - `GET /api/v1/mvp3/dashboard/enterprise`
//!
//! ## MVP4: Agentic GA
//! - `POST /api/v1/mvp4/guardrails/check`, `GET /api/v1/mvp4/guardrails/stats`
//! - `POST /api/v1/mvp4/compliance/generate-report`
//! - `GET /api/v1/mvp4/compliance/regulations?jurisdiction=`
//! - `GET /api/v1/mvp4/compliance/blockchain-verify/{doc_id}`
//! - `GET /api/v1/mvp4/training/courses`, `POST /api/v1/mvp4/training/enroll`
//! - `GET /api/v1/mvp4/commercial/ga-readiness`, `GET /api/v1/mvp4/commercial/billing/{id}`
//! - `POST /api/v1/mvp4/commercial/onboard`
//!
//! ## MVP5: Autonomous Governance
//! - `GET /api/v1/mvp5/bots/status`, `GET /api/v1/mvp5/bots/actions`
//! - `POST /api/v1/mvp5/bots/execute`, `POST /api/v1/mvp5/bots/revert/{job_id}`
//! - `GET /api/v1/mvp5/marketplace/listings?category=`, `GET /api/v1/mvp5/marketplace/stats`
//! - `POST /api/v1/mvp5/marketplace/purchase`, `POST /api/v1/mvp5/marketplace/list`
//! - `GET /api/v1/mvp5/marketplace/verify/{tx_hash}`
//! - `POST /api/v1/mvp5/ethics/surveillance-scan`, `GET /api/v1/mvp5/ethics/prohibited-use-cases`
//! - `POST /api/v1/mvp5/ethics/dpia-generate`
//!
//! ## Workflows
//! - `POST /api/v1/agent/run`, `POST /api/v1/agent/ingest-nonstandard`
//! - `GET /api/v1/agent/runs`, `GET /api/v1/agent/runs/{id}`
//! - `POST /api/v1/model-output/upload`, `GET /api/v1/model-output/uploads`
//! - `GET /api/v1/model-output/{id}`, `GET /api/v1/model-output/policies/list`
//! - `GET /api/v1/policies?jurisdiction=&status=`, `POST /api/v1/policies/upload`
//! - `PUT /api/v1/policies/{id}/review`
//! - `GET /api/v1/feed-log?jurisdiction=`, `POST /api/v1/feed-log/{id}/approve`
//! - `GET /api/v1/audit-reports`, `GET /api/v1/audit-reports/{id}`
//! - `POST /api/v1/audit-reports/generate`
//!
//! # Example
//!
//! ```rust,ignore
//! use saro::api::{ApiClient, ReqwestTransport};
//! use saro::config::{ApiBase, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let client = ApiClient::from_config(&config, None)?;
//!
//!     let health = client.health().await?;
//!     println!("{}", health);
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod dto;
pub mod error;
mod routes;
pub mod transport;

pub use client::{segment, with_query, ApiClient, RequestOptions};
pub use error::{ClientError, ClientResult};
pub use transport::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};

#[cfg(feature = "native")]
pub use transport::ReqwestTransport;
