//! MVP1: regulatory document ingestion and forecasting

use serde_json::Value;

use crate::api::client::{segment, with_query, ApiClient};
use crate::api::dto::DocumentIngest;
use crate::api::error::ClientResult;
use crate::api::transport::Transport;

impl<T: Transport> ApiClient<T> {
    /// `POST /api/v1/mvp1/ingest`
    pub async fn ingest_document(&self, document: &DocumentIngest) -> ClientResult<Value> {
        self.post("/api/v1/mvp1/ingest", document).await
    }

    /// `GET /api/v1/mvp1/documents?limit=`
    pub async fn list_documents(&self, limit: u32) -> ClientResult<Value> {
        let limit = limit.to_string();
        self.get(&with_query("/api/v1/mvp1/documents", &[("limit", limit.as_str())]))
            .await
    }

    /// `GET /api/v1/mvp1/documents/{id}`
    pub async fn get_document(&self, id: &str) -> ClientResult<Value> {
        self.get(&format!("/api/v1/mvp1/documents/{}", segment(id)))
            .await
    }

    /// `GET /api/v1/mvp1/forecast?jurisdiction=`
    pub async fn forecast(&self, jurisdiction: &str) -> ClientResult<Value> {
        self.get(&with_query(
            "/api/v1/mvp1/forecast",
            &[("jurisdiction", jurisdiction)],
        ))
        .await
    }

    /// `GET /api/v1/mvp1/stats`
    pub async fn ingestion_stats(&self) -> ClientResult<Value> {
        self.get("/api/v1/mvp1/stats").await
    }
}
