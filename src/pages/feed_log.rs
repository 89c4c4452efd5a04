//! Regulatory feed log with per-item approval

use serde::Serialize;
use serde_json::Value;

use super::{items, settle};
use crate::api::{ApiClient, ClientResult, Transport};

pub use super::policy_library::JURISDICTIONS;

#[derive(Debug, Clone, Serialize)]
pub struct FeedLogPage {
    pub jurisdiction: String,
    pub feeds: Vec<Value>,
    /// Feed-level metadata: totals and poll timestamps
    pub meta: Option<Value>,
    pub loading: bool,
    pub approving: Option<String>,
    pub error: Option<String>,
}

impl Default for FeedLogPage {
    fn default() -> Self {
        Self {
            jurisdiction: "ALL".to_string(),
            feeds: Vec::new(),
            meta: None,
            loading: false,
            approving: None,
            error: None,
        }
    }
}

impl FeedLogPage {
    pub async fn fetch<T: Transport>(
        client: &ApiClient<T>,
        jurisdiction: &str,
    ) -> ClientResult<Value> {
        client.feed_log(jurisdiction).await
    }

    pub fn apply(&mut self, feed: ClientResult<Value>) {
        self.loading = false;
        self.error = None;
        if let Some(feed) = settle(feed, &mut self.error) {
            self.feeds = items(&feed, "feeds");
            self.meta = Some(feed);
        }
    }

    pub async fn load<T: Transport>(&mut self, client: &ApiClient<T>) {
        self.loading = true;
        let feed = Self::fetch(client, &self.jurisdiction).await;
        self.apply(feed);
    }

    pub fn select_jurisdiction(&mut self, jurisdiction: &str) -> bool {
        if self.jurisdiction == jurisdiction {
            return false;
        }
        self.jurisdiction = jurisdiction.to_string();
        true
    }

    pub fn new_count(&self) -> usize {
        self.feeds
            .iter()
            .filter(|f| f.get("is_new").and_then(Value::as_bool).unwrap_or(false))
            .count()
    }

    /// Feed total from metadata, else the number of loaded items
    pub fn total(&self) -> u64 {
        self.meta
            .as_ref()
            .and_then(|m| m.get("total"))
            .and_then(Value::as_u64)
            .unwrap_or(self.feeds.len() as u64)
    }

    pub fn begin_approve(&mut self, feed_id: &str) {
        self.approving = Some(feed_id.to_string());
    }

    /// Only a successful approval marks the item reviewed.
    pub fn finish_approve(&mut self, feed_id: &str, result: ClientResult<Value>) {
        self.approving = None;
        match result {
            Ok(_) => {
                for feed in self.feeds.iter_mut() {
                    if feed.get("feed_id").and_then(Value::as_str) != Some(feed_id) {
                        continue;
                    }
                    if let Value::Object(entry) = feed {
                        entry.insert("status".to_string(), Value::from("reviewed"));
                        entry.insert("is_new".to_string(), Value::Bool(false));
                    }
                }
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    pub async fn approve<T: Transport>(&mut self, client: &ApiClient<T>, feed_id: &str) {
        self.begin_approve(feed_id);
        let result = client.approve_feed(feed_id).await;
        self.finish_approve(feed_id, result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::transport::MockTransport;
    use crate::config::ApiBase;

    fn client(transport: &MockTransport) -> ApiClient<MockTransport> {
        ApiClient::new(ApiBase::new("https://api.example.com"), transport.clone())
    }

    const FEED: &str = r#"{
        "total": 12,
        "feeds": [
            {"feed_id": "F1", "status": "pending_review", "is_new": true},
            {"feed_id": "F2", "status": "pending_review", "is_new": true}
        ]
    }"#;

    #[tokio::test]
    async fn test_load_and_approve() {
        let transport = MockTransport::new();
        transport.respond(200, FEED).respond(200, r#"{"approved": true}"#);
        let api = client(&transport);
        let mut page = FeedLogPage::default();

        page.load(&api).await;
        assert_eq!(page.new_count(), 2);
        assert_eq!(page.total(), 12);
        assert!(transport.requests()[0].url.ends_with("/api/v1/feed-log?jurisdiction=ALL"));

        page.approve(&api, "F1").await;

        assert_eq!(page.new_count(), 1);
        assert_eq!(page.feeds[0]["status"], "reviewed");
        assert_eq!(page.feeds[1]["status"], "pending_review");
        assert!(page.approving.is_none());
        assert_eq!(transport.last_request().unwrap().body.as_deref(), Some("{}"));
    }

    #[tokio::test]
    async fn test_failed_approve_leaves_item() {
        let transport = MockTransport::new();
        transport.respond(200, FEED).fail("connection reset");
        let api = client(&transport);
        let mut page = FeedLogPage::default();

        page.load(&api).await;
        page.approve(&api, "F2").await;

        assert_eq!(page.feeds[1]["is_new"], true);
        assert!(page.error.as_deref().unwrap().contains("connection reset"));
    }

    #[tokio::test]
    async fn test_reload_replaces_previous_error() {
        let transport = MockTransport::new();
        transport
            .respond(500, r#"{"detail": "feed store offline"}"#)
            .respond(503, r#"{"detail": "second outage"}"#)
            .respond(200, FEED);
        let api = client(&transport);
        let mut page = FeedLogPage::default();

        page.load(&api).await;
        assert_eq!(page.error.as_deref(), Some("feed store offline"));

        page.select_jurisdiction("EU");
        page.load(&api).await;
        assert_eq!(page.error.as_deref(), Some("second outage"));

        page.select_jurisdiction("SG");
        page.load(&api).await;
        assert!(page.error.is_none());
        assert_eq!(page.feeds.len(), 2);
    }

    #[test]
    fn test_jurisdiction_change() {
        let mut page = FeedLogPage::default();
        assert!(!page.select_jurisdiction("ALL"));
        assert!(page.select_jurisdiction("SG"));
        assert_eq!(page.jurisdiction, "SG");
    }
}
