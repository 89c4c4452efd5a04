//! Policy library and regulatory feed log

use serde_json::{json, Value};

use crate::api::client::{segment, with_query, ApiClient};
use crate::api::dto::{PolicyReview, PolicyUpload};
use crate::api::error::ClientResult;
use crate::api::transport::Transport;

impl<T: Transport> ApiClient<T> {
    /// `GET /api/v1/policies?jurisdiction=&status=`
    pub async fn list_policies(&self, jurisdiction: &str, status: &str) -> ClientResult<Value> {
        self.get(&with_query(
            "/api/v1/policies",
            &[("jurisdiction", jurisdiction), ("status", status)],
        ))
        .await
    }

    /// `POST /api/v1/policies/upload`
    pub async fn upload_policy(&self, policy: &PolicyUpload) -> ClientResult<Value> {
        self.post("/api/v1/policies/upload", policy).await
    }

    /// `PUT /api/v1/policies/{id}/review`
    pub async fn review_policy(
        &self,
        policy_id: &str,
        review: &PolicyReview,
    ) -> ClientResult<Value> {
        self.put(
            &format!("/api/v1/policies/{}/review", segment(policy_id)),
            review,
        )
        .await
    }

    /// `GET /api/v1/feed-log?jurisdiction=`
    pub async fn feed_log(&self, jurisdiction: &str) -> ClientResult<Value> {
        self.get(&with_query(
            "/api/v1/feed-log",
            &[("jurisdiction", jurisdiction)],
        ))
        .await
    }

    /// `POST /api/v1/feed-log/{id}/approve`
    pub async fn approve_feed(&self, feed_id: &str) -> ClientResult<Value> {
        self.post(
            &format!("/api/v1/feed-log/{}/approve", segment(feed_id)),
            &json!({}),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::dto::PolicyReview;
    use crate::api::transport::{HttpMethod, MockTransport};
    use crate::api::ApiClient;
    use crate::config::ApiBase;

    #[tokio::test]
    async fn test_review_uses_put() {
        let transport = MockTransport::new();
        let api = ApiClient::new(ApiBase::new("https://api.example.com"), transport.clone());

        api.review_policy("POL-1A2B", &PolicyReview::reviewed())
            .await
            .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Put);
        assert_eq!(request.url, "https://api.example.com/api/v1/policies/POL-1A2B/review");
        assert_eq!(request.body.as_deref(), Some(r#"{"status":"reviewed"}"#));
    }

    #[tokio::test]
    async fn test_policy_filters_in_query() {
        let transport = MockTransport::new();
        let api = ApiClient::new(ApiBase::new("https://api.example.com"), transport.clone());

        api.list_policies("ALL", "pending_review").await.unwrap();
        assert_eq!(
            transport.last_request().unwrap().url,
            "https://api.example.com/api/v1/policies?jurisdiction=ALL&status=pending_review"
        );
    }
}
