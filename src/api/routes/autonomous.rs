//! MVP5: remediation bots, model marketplace and ethics scanning

use serde_json::{json, Value};

use crate::api::client::{segment, with_query, ApiClient};
use crate::api::dto::{
    BotExecuteRequest, DpiaRequest, ModelListing, PurchaseRequest, SurveillanceScan,
};
use crate::api::error::ClientResult;
use crate::api::transport::Transport;

impl<T: Transport> ApiClient<T> {
    /// `GET /api/v1/mvp5/bots/status`
    pub async fn bot_status(&self) -> ClientResult<Value> {
        self.get("/api/v1/mvp5/bots/status").await
    }

    /// `GET /api/v1/mvp5/bots/actions`
    pub async fn bot_actions(&self) -> ClientResult<Value> {
        self.get("/api/v1/mvp5/bots/actions").await
    }

    /// `POST /api/v1/mvp5/bots/execute`
    pub async fn execute_bot(&self, request: &BotExecuteRequest) -> ClientResult<Value> {
        self.post("/api/v1/mvp5/bots/execute", request).await
    }

    /// `POST /api/v1/mvp5/bots/revert/{job_id}` with an empty object body
    pub async fn revert_bot(&self, job_id: &str) -> ClientResult<Value> {
        self.post(
            &format!("/api/v1/mvp5/bots/revert/{}", segment(job_id)),
            &json!({}),
        )
        .await
    }

    /// `GET /api/v1/mvp5/marketplace/listings?category=`
    pub async fn marketplace_listings(&self, category: &str) -> ClientResult<Value> {
        self.get(&with_query(
            "/api/v1/mvp5/marketplace/listings",
            &[("category", category)],
        ))
        .await
    }

    /// `POST /api/v1/mvp5/marketplace/purchase`
    pub async fn purchase_model(&self, request: &PurchaseRequest) -> ClientResult<Value> {
        self.post("/api/v1/mvp5/marketplace/purchase", request).await
    }

    /// `POST /api/v1/mvp5/marketplace/list`
    pub async fn list_model(&self, listing: &ModelListing) -> ClientResult<Value> {
        self.post("/api/v1/mvp5/marketplace/list", listing).await
    }

    /// `GET /api/v1/mvp5/marketplace/stats`
    pub async fn marketplace_stats(&self) -> ClientResult<Value> {
        self.get("/api/v1/mvp5/marketplace/stats").await
    }

    /// `GET /api/v1/mvp5/marketplace/verify/{tx_hash}`
    pub async fn verify_transaction(&self, tx_hash: &str) -> ClientResult<Value> {
        self.get(&format!(
            "/api/v1/mvp5/marketplace/verify/{}",
            segment(tx_hash)
        ))
        .await
    }

    /// `POST /api/v1/mvp5/ethics/surveillance-scan`
    pub async fn surveillance_scan(&self, scan: &SurveillanceScan) -> ClientResult<Value> {
        self.post("/api/v1/mvp5/ethics/surveillance-scan", scan).await
    }

    /// `GET /api/v1/mvp5/ethics/prohibited-use-cases`
    pub async fn prohibited_use_cases(&self) -> ClientResult<Value> {
        self.get("/api/v1/mvp5/ethics/prohibited-use-cases").await
    }

    /// `POST /api/v1/mvp5/ethics/dpia-generate`
    pub async fn generate_dpia(&self, request: &DpiaRequest) -> ClientResult<Value> {
        self.post("/api/v1/mvp5/ethics/dpia-generate", request).await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::transport::{HttpMethod, MockTransport};
    use crate::api::ApiClient;
    use crate::config::ApiBase;

    #[tokio::test]
    async fn test_revert_posts_empty_object() {
        let transport = MockTransport::new();
        let api = ApiClient::new(ApiBase::new("https://api.example.com"), transport.clone());

        api.revert_bot("job-7").await.unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url, "https://api.example.com/api/v1/mvp5/bots/revert/job-7");
        assert_eq!(request.body.as_deref(), Some("{}"));
    }

    #[tokio::test]
    async fn test_listings_category_query() {
        let transport = MockTransport::new();
        let api = ApiClient::new(ApiBase::new("https://api.example.com"), transport.clone());

        api.marketplace_listings("ALL").await.unwrap();
        assert_eq!(
            transport.last_request().unwrap().url,
            "https://api.example.com/api/v1/mvp5/marketplace/listings?category=ALL"
        );
    }
}
