//! Agent audit pipeline and model-output checker

use serde_json::Value;

use crate::api::client::{segment, ApiClient};
use crate::api::dto::{NonStandardIngest, OutputSubmission};
use crate::api::error::ClientResult;
use crate::api::transport::Transport;

impl<T: Transport> ApiClient<T> {
    /// `POST /api/v1/agent/run`
    pub async fn run_agent(&self, submission: &OutputSubmission) -> ClientResult<Value> {
        self.post("/api/v1/agent/run", submission).await
    }

    /// `POST /api/v1/agent/ingest-nonstandard`
    pub async fn ingest_nonstandard(&self, document: &NonStandardIngest) -> ClientResult<Value> {
        self.post("/api/v1/agent/ingest-nonstandard", document).await
    }

    /// `GET /api/v1/agent/runs`
    pub async fn agent_runs(&self) -> ClientResult<Value> {
        self.get("/api/v1/agent/runs").await
    }

    /// `GET /api/v1/agent/runs/{id}`
    pub async fn agent_run(&self, run_id: &str) -> ClientResult<Value> {
        self.get(&format!("/api/v1/agent/runs/{}", segment(run_id)))
            .await
    }

    /// `POST /api/v1/model-output/upload`
    pub async fn upload_model_output(&self, submission: &OutputSubmission) -> ClientResult<Value> {
        self.post("/api/v1/model-output/upload", submission).await
    }

    /// `GET /api/v1/model-output/uploads`
    pub async fn model_output_uploads(&self) -> ClientResult<Value> {
        self.get("/api/v1/model-output/uploads").await
    }

    /// `GET /api/v1/model-output/{id}`
    pub async fn model_output(&self, upload_id: &str) -> ClientResult<Value> {
        self.get(&format!("/api/v1/model-output/{}", segment(upload_id)))
            .await
    }

    /// `GET /api/v1/model-output/policies/list`
    pub async fn model_output_policies(&self) -> ClientResult<Value> {
        self.get("/api/v1/model-output/policies/list").await
    }
}
