//! Policy library: filtered listing, upload and review

use serde::Serialize;
use serde_json::Value;

use super::{blank, items, settle};
use crate::api::dto::{PolicyReview, PolicyUpload};
use crate::api::{ApiClient, ClientResult, Transport};

pub const JURISDICTIONS: [&str; 6] = ["ALL", "EU", "US", "UK", "SG", "GLOBAL"];
pub const STATUSES: [&str; 4] = ["ALL", "reviewed", "pending_review", "flagged"];

pub const DEMO_TEXTS: [(&str, &str); 2] = [
    (
        "High-Risk Policy",
        "This regulation mandates that all AI systems with high-risk classification must implement bias testing, transparency reporting, and human oversight mechanisms. Facial recognition systems are subject to additional restrictions on fundamental rights grounds. Penalties up to €30M apply for non-compliance.",
    ),
    (
        "Standard Guideline",
        "Organizations should document AI system objectives, data sources, and model architecture. Regular audits of AI performance metrics are recommended. Accountability frameworks should include designated AI governance officers.",
    ),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyTab {
    #[default]
    Library,
    Upload,
    Detail,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolicyFilter {
    pub jurisdiction: String,
    pub status: String,
}

impl Default for PolicyFilter {
    fn default() -> Self {
        Self {
            jurisdiction: "ALL".to_string(),
            status: "ALL".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PolicyLibraryPage {
    pub tab: PolicyTab,
    pub filter: PolicyFilter,
    pub policies: Vec<Value>,
    pub loading: bool,
    pub form: PolicyUpload,
    pub upload_result: Option<Value>,
    pub uploading: bool,
    pub selected: Option<Value>,
    pub error: Option<String>,
}

impl PolicyLibraryPage {
    pub async fn fetch<T: Transport>(
        client: &ApiClient<T>,
        filter: &PolicyFilter,
    ) -> ClientResult<Value> {
        client.list_policies(&filter.jurisdiction, &filter.status).await
    }

    pub fn apply(&mut self, policies: ClientResult<Value>) {
        self.loading = false;
        self.error = None;
        if let Some(policies) = settle(policies, &mut self.error) {
            self.policies = items(&policies, "policies");
        }
    }

    pub async fn load<T: Transport>(&mut self, client: &ApiClient<T>) {
        self.loading = true;
        let policies = Self::fetch(client, &self.filter).await;
        self.apply(policies);
    }

    /// Returns true when the filter changed and the list must be refetched.
    pub fn set_filter(&mut self, jurisdiction: &str, status: &str) -> bool {
        let filter = PolicyFilter {
            jurisdiction: jurisdiction.to_string(),
            status: status.to_string(),
        };
        if filter == self.filter {
            return false;
        }
        self.filter = filter;
        true
    }

    pub fn use_demo(&mut self, index: usize) {
        if let Some((title, text)) = DEMO_TEXTS.get(index) {
            self.form.title = title.to_string();
            self.form.content = text.to_string();
        }
    }

    pub fn begin_upload(&mut self) -> Option<PolicyUpload> {
        if blank(&self.form.title) || blank(&self.form.content) {
            self.error = Some("Title and policy text are required".to_string());
            return None;
        }
        self.error = None;
        self.uploading = true;
        Some(self.form.clone())
    }

    /// A stored policy lands at the top of the library and the form resets.
    pub fn finish_upload(&mut self, result: ClientResult<Value>) {
        self.uploading = false;
        match result {
            Ok(policy) => {
                self.policies.insert(0, policy.clone());
                self.upload_result = Some(policy);
                self.form = PolicyUpload::default();
                self.tab = PolicyTab::Library;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    pub async fn upload<T: Transport>(&mut self, client: &ApiClient<T>) {
        if let Some(policy) = self.begin_upload() {
            let result = client.upload_policy(&policy).await;
            self.finish_upload(result);
        }
    }

    pub fn select(&mut self, index: usize) {
        if let Some(policy) = self.policies.get(index).cloned() {
            self.selected = Some(policy);
            self.tab = PolicyTab::Detail;
        }
    }

    /// Mark a policy reviewed, then reload the list under the current filter.
    pub async fn approve<T: Transport>(&mut self, client: &ApiClient<T>, policy_id: &str) {
        match client.review_policy(policy_id, &PolicyReview::reviewed()).await {
            Ok(_) => {
                if let Some(Value::Object(selected)) = self.selected.as_mut() {
                    if selected.get("policy_id").and_then(Value::as_str) == Some(policy_id) {
                        selected.insert("status".to_string(), Value::from("reviewed"));
                    }
                }
                self.load(client).await;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::transport::MockTransport;
    use crate::api::HttpMethod;
    use crate::config::ApiBase;

    fn client(transport: &MockTransport) -> ApiClient<MockTransport> {
        ApiClient::new(ApiBase::new("https://api.example.com"), transport.clone())
    }

    #[tokio::test]
    async fn test_filter_change_refetches() {
        let transport = MockTransport::new();
        transport
            .respond(200, r#"{"policies": [{"policy_id": "P1"}, {"policy_id": "P2"}]}"#)
            .respond(200, r#"{"policies": [{"policy_id": "P1"}]}"#);
        let api = client(&transport);
        let mut page = PolicyLibraryPage::default();

        page.load(&api).await;
        assert_eq!(page.policies.len(), 2);
        assert!(transport.requests()[0]
            .url
            .ends_with("/api/v1/policies?jurisdiction=ALL&status=ALL"));

        assert!(!page.set_filter("ALL", "ALL"));
        assert!(page.set_filter("EU", "reviewed"));
        page.load(&api).await;

        assert_eq!(page.policies.len(), 1);
        assert!(transport
            .last_request()
            .unwrap()
            .url
            .ends_with("/api/v1/policies?jurisdiction=EU&status=reviewed"));
    }

    #[tokio::test]
    async fn test_upload_resets_form() {
        let transport = MockTransport::new();
        transport.respond(200, r#"{"policy_id": "P9", "title": "High-Risk Policy"}"#);
        let mut page = PolicyLibraryPage {
            tab: PolicyTab::Upload,
            ..Default::default()
        };
        page.use_demo(0);

        page.upload(&client(&transport)).await;

        assert_eq!(page.tab, PolicyTab::Library);
        assert_eq!(page.policies[0]["policy_id"], "P9");
        assert!(page.form.title.is_empty());
        assert_eq!(page.form.regulation, "EU AI Act");
    }

    #[tokio::test]
    async fn test_approve_puts_review_then_reloads() {
        let transport = MockTransport::new();
        transport
            .respond(200, r#"{"status": "reviewed"}"#)
            .respond(200, r#"{"policies": []}"#);
        let mut page = PolicyLibraryPage {
            policies: vec![serde_json::json!({"policy_id": "P1", "status": "pending_review"})],
            ..Default::default()
        };
        page.select(0);

        page.approve(&client(&transport), "P1").await;

        let requests = transport.requests();
        assert_eq!(requests[0].method, HttpMethod::Put);
        assert!(requests[0].url.ends_with("/api/v1/policies/P1/review"));
        assert_eq!(requests[1].method, HttpMethod::Get);
        assert_eq!(page.selected.unwrap()["status"], "reviewed");
        assert!(page.policies.is_empty());
    }
}
