//! Audit reports

use serde_json::Value;

use crate::api::client::{segment, ApiClient};
use crate::api::dto::AuditReportRequest;
use crate::api::error::ClientResult;
use crate::api::transport::Transport;

impl<T: Transport> ApiClient<T> {
    /// `GET /api/v1/audit-reports`
    pub async fn audit_reports(&self) -> ClientResult<Value> {
        self.get("/api/v1/audit-reports").await
    }

    /// `GET /api/v1/audit-reports/{id}`
    pub async fn audit_report(&self, report_id: &str) -> ClientResult<Value> {
        self.get(&format!("/api/v1/audit-reports/{}", segment(report_id)))
            .await
    }

    /// `POST /api/v1/audit-reports/generate`
    pub async fn generate_audit_report(&self, request: &AuditReportRequest) -> ClientResult<Value> {
        self.post("/api/v1/audit-reports/generate", request).await
    }
}
