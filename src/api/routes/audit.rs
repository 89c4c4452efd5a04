//! MVP2: model audits, compliance matrix and orchestration

use serde_json::Value;

use crate::api::client::{segment, with_query, ApiClient};
use crate::api::dto::AuditRequest;
use crate::api::error::ClientResult;
use crate::api::transport::Transport;

impl<T: Transport> ApiClient<T> {
    /// `POST /api/v1/mvp2/audit`
    pub async fn run_audit(&self, request: &AuditRequest) -> ClientResult<Value> {
        self.post("/api/v1/mvp2/audit", request).await
    }

    /// `GET /api/v1/mvp2/audits`
    pub async fn list_audits(&self) -> ClientResult<Value> {
        self.get("/api/v1/mvp2/audits").await
    }

    /// `GET /api/v1/mvp2/audits/{id}`
    pub async fn get_audit(&self, id: &str) -> ClientResult<Value> {
        self.get(&format!("/api/v1/mvp2/audits/{}", segment(id))).await
    }

    /// `GET /api/v1/mvp2/compliance-matrix?jurisdiction=`
    pub async fn compliance_matrix(&self, jurisdiction: &str) -> ClientResult<Value> {
        self.get(&with_query(
            "/api/v1/mvp2/compliance-matrix",
            &[("jurisdiction", jurisdiction)],
        ))
        .await
    }

    /// `POST /api/v1/mvp2/orchestrate`
    pub async fn orchestrate(&self, payload: &Value) -> ClientResult<Value> {
        self.post("/api/v1/mvp2/orchestrate", payload).await
    }

    /// `GET /api/v1/mvp2/pipeline-status`
    pub async fn pipeline_status(&self) -> ClientResult<Value> {
        self.get("/api/v1/mvp2/pipeline-status").await
    }
}
