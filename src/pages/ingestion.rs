//! MVP1: ingest regulatory documents and view forecasts

use futures_util::join;
use serde::Serialize;
use serde_json::Value;

use super::{blank, items, settle};
use crate::api::dto::DocumentIngest;
use crate::api::{ApiClient, ClientResult, Transport};

/// Documents fetched on mount
pub const DOCUMENT_LIMIT: u32 = 20;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IngestionTab {
    #[default]
    Ingest,
    Documents,
    Forecast,
}

#[derive(Debug, Clone, Serialize)]
pub struct IngestionPage {
    pub tab: IngestionTab,
    pub form: DocumentIngest,
    pub result: Option<Value>,
    pub submitting: bool,
    pub documents: Vec<Value>,
    pub stats: Option<Value>,
    pub forecast_jurisdiction: String,
    pub forecast: Option<Value>,
    pub error: Option<String>,
}

impl Default for IngestionPage {
    fn default() -> Self {
        Self {
            tab: IngestionTab::default(),
            form: DocumentIngest::default(),
            result: None,
            submitting: false,
            documents: Vec::new(),
            stats: None,
            forecast_jurisdiction: "EU".to_string(),
            forecast: None,
            error: None,
        }
    }
}

pub struct IngestionData {
    pub documents: ClientResult<Value>,
    pub stats: ClientResult<Value>,
    pub forecast: ClientResult<Value>,
}

impl IngestionPage {
    pub async fn fetch<T: Transport>(client: &ApiClient<T>, jurisdiction: &str) -> IngestionData {
        let (documents, stats, forecast) = join!(
            client.list_documents(DOCUMENT_LIMIT),
            client.ingestion_stats(),
            client.forecast(jurisdiction)
        );
        IngestionData {
            documents,
            stats,
            forecast,
        }
    }

    pub fn apply(&mut self, data: IngestionData) {
        self.error = None;
        if let Some(documents) = settle(data.documents, &mut self.error) {
            self.documents = items(&documents, "documents");
        }
        self.stats = settle(data.stats, &mut self.error).or(self.stats.take());
        self.forecast = settle(data.forecast, &mut self.error).or(self.forecast.take());
    }

    pub async fn load<T: Transport>(&mut self, client: &ApiClient<T>) {
        let data = Self::fetch(client, &self.forecast_jurisdiction).await;
        self.apply(data);
    }

    /// Change the forecast jurisdiction; true when a refetch is needed.
    pub fn select_jurisdiction(&mut self, jurisdiction: &str) -> bool {
        if self.forecast_jurisdiction == jurisdiction {
            return false;
        }
        self.forecast_jurisdiction = jurisdiction.to_string();
        true
    }

    pub fn apply_forecast(&mut self, result: ClientResult<Value>) {
        self.error = None;
        self.forecast = settle(result, &mut self.error);
    }

    pub fn begin_ingest(&mut self) -> Option<DocumentIngest> {
        if blank(&self.form.title) || blank(&self.form.content) {
            self.error = Some("Title and content are required".to_string());
            return None;
        }
        self.error = None;
        self.submitting = true;
        Some(self.form.clone())
    }

    /// New document goes to the top of the list and the form resets.
    pub fn finish_ingest(&mut self, result: ClientResult<Value>) {
        self.submitting = false;
        match result {
            Ok(document) => {
                self.documents.insert(0, document.clone());
                self.result = Some(document);
                self.form = DocumentIngest::default();
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    pub async fn ingest<T: Transport>(&mut self, client: &ApiClient<T>) {
        if let Some(document) = self.begin_ingest() {
            let result = client.ingest_document(&document).await;
            self.finish_ingest(result);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::transport::MockTransport;
    use crate::api::ClientError;
    use crate::config::ApiBase;
    use serde_json::json;

    fn client(transport: &MockTransport) -> ApiClient<MockTransport> {
        ApiClient::new(ApiBase::new("https://api.example.com"), transport.clone())
    }

    #[tokio::test]
    async fn test_load_uses_limit_and_jurisdiction() {
        let transport = MockTransport::new();
        transport
            .route("/api/v1/mvp1/documents", 200, r#"[{"id": "DOC-1"}]"#)
            .route("/api/v1/mvp1/stats", 200, r#"{"total_documents": 1}"#)
            .route("/api/v1/mvp1/forecast", 200, r#"{"predictions": []}"#);

        let mut page = IngestionPage::default();
        page.load(&client(&transport)).await;

        assert_eq!(page.documents.len(), 1);
        assert_eq!(page.stats.as_ref().unwrap()["total_documents"], 1);
        assert!(page.forecast.is_some());

        let urls: Vec<String> = transport.requests().into_iter().map(|r| r.url).collect();
        assert!(urls.iter().any(|u| u.ends_with("/api/v1/mvp1/documents?limit=20")));
        assert!(urls.iter().any(|u| u.ends_with("/api/v1/mvp1/forecast?jurisdiction=EU")));
    }

    #[tokio::test]
    async fn test_ingest_requires_title_and_content() {
        let transport = MockTransport::new();
        let mut page = IngestionPage::default();
        page.form.title = "AI Act amendment".to_string();

        page.ingest(&client(&transport)).await;

        assert_eq!(page.error.as_deref(), Some("Title and content are required"));
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_ingest_prepends_and_resets_form() {
        let transport = MockTransport::new();
        transport.respond(200, r#"{"id": "DOC-2", "risk_score": 0.7}"#);
        let mut page = IngestionPage {
            documents: vec![serde_json::json!({"id": "DOC-1"})],
            ..Default::default()
        };
        page.form.title = "AI Act amendment".to_string();
        page.form.content = "High-risk systems must register.".to_string();
        page.form.jurisdiction = "UK".to_string();

        page.ingest(&client(&transport)).await;

        assert_eq!(page.documents[0]["id"], "DOC-2");
        assert_eq!(page.documents.len(), 2);
        assert_eq!(page.form, DocumentIngest::default());
        assert!(page.error.is_none());
        assert!(!page.submitting);
    }

    #[test]
    fn test_failed_forecast_drops_previous_jurisdiction() {
        let mut page = IngestionPage::default();
        page.apply_forecast(Ok(json!({"predictions": [{"regulation": "EU AI Act"}]})));

        assert!(page.select_jurisdiction("SG"));
        page.apply_forecast(Err(ClientError::Network("timeout".to_string())));
        assert!(page.forecast.is_none());
        assert_eq!(page.error.as_deref(), Some("Network error: timeout"));

        page.apply_forecast(Ok(json!({"predictions": []})));
        assert!(page.forecast.is_some());
        assert!(page.error.is_none());
    }
}
