//! Health, dashboard, personas, checklist and onboarding endpoints

use serde_json::Value;

use crate::api::client::{segment, ApiClient};
use crate::api::dto::OnboardRequest;
use crate::api::error::ClientResult;
use crate::api::transport::Transport;

impl<T: Transport> ApiClient<T> {
    /// `GET /api/v1/health`
    pub async fn health(&self) -> ClientResult<Value> {
        self.get("/api/v1/health").await
    }

    /// `GET /api/v1/dashboard`
    pub async fn dashboard(&self) -> ClientResult<Value> {
        self.get("/api/v1/dashboard").await
    }

    /// `GET /api/v1/dashboard/risk-heatmap`
    pub async fn risk_heatmap(&self) -> ClientResult<Value> {
        self.get("/api/v1/dashboard/risk-heatmap").await
    }

    /// `GET /api/v1/personas`
    pub async fn personas(&self) -> ClientResult<Value> {
        self.get("/api/v1/personas").await
    }

    /// `POST /api/v1/onboard`
    pub async fn onboard(&self, request: &OnboardRequest) -> ClientResult<Value> {
        self.post("/api/v1/onboard", request).await
    }

    /// `GET /api/v1/checklist/persona/{persona}`
    pub async fn persona_checklist(&self, persona: &str) -> ClientResult<Value> {
        self.get(&format!("/api/v1/checklist/persona/{}", segment(persona)))
            .await
    }

    /// `GET /api/v1/checklist/compliance-status`
    pub async fn compliance_status(&self) -> ClientResult<Value> {
        self.get("/api/v1/checklist/compliance-status").await
    }
}
