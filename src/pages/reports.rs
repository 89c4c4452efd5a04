//! Generated standards reports

use serde::Serialize;
use serde_json::Value;

use super::{items, settle};
use crate::api::{ApiClient, ClientResult, Transport};

#[derive(Debug, Clone, Default, Serialize)]
pub struct ReportsPage {
    pub reports: Vec<Value>,
    pub selected: Option<Value>,
    pub loading: bool,
    pub error: Option<String>,
}

impl ReportsPage {
    pub async fn fetch<T: Transport>(client: &ApiClient<T>) -> ClientResult<Value> {
        client.audit_reports().await
    }

    pub fn apply(&mut self, reports: ClientResult<Value>) {
        self.loading = false;
        self.error = None;
        if let Some(reports) = settle(reports, &mut self.error) {
            self.reports = items(&reports, "reports");
        }
    }

    pub async fn load<T: Transport>(&mut self, client: &ApiClient<T>) {
        self.loading = true;
        let reports = Self::fetch(client).await;
        self.apply(reports);
    }

    pub fn select(&mut self, index: usize) {
        self.selected = self.reports.get(index).cloned();
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected
            .as_ref()
            .and_then(|r| r.get("report_id"))
            .and_then(Value::as_str)
    }

    /// Fetch the full report for `report_id` into the detail panel
    pub async fn open<T: Transport>(&mut self, client: &ApiClient<T>, report_id: &str) {
        match client.audit_report(report_id).await {
            Ok(report) => self.selected = Some(report),
            Err(e) => self.error = Some(e.to_string()),
        }
    }
}

/// Overall compliance score of a report in `0.0..=1.0`
pub fn compliance_score(report: &Value) -> Option<f64> {
    report
        .get("executive_summary")
        .and_then(|s| s.get("overall_compliance_score"))
        .and_then(Value::as_f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::transport::MockTransport;
    use crate::config::ApiBase;
    use serde_json::json;

    #[tokio::test]
    async fn test_load_and_select() {
        let transport = MockTransport::new();
        transport.respond(
            200,
            r#"{"reports": [{"report_id": "RPT-1"}, {"report_id": "RPT-2", "executive_summary": {"overall_compliance_score": 0.82}}]}"#,
        );
        let client = ApiClient::new(ApiBase::new("https://api.example.com"), transport.clone());
        let mut page = ReportsPage::default();

        page.load(&client).await;
        page.select(1);

        assert_eq!(page.selected_id(), Some("RPT-2"));
        assert_eq!(compliance_score(page.selected.as_ref().unwrap()), Some(0.82));
        assert!(!page.loading);
    }

    #[tokio::test]
    async fn test_unconfigured_client_sets_error() {
        let transport = MockTransport::new();
        let client = ApiClient::new(ApiBase::unset(), transport.clone());
        let mut page = ReportsPage::default();

        page.load(&client).await;

        assert!(page.error.as_deref().unwrap().contains("SARO_API_URL"));
        assert_eq!(transport.request_count(), 0);
        assert_eq!(compliance_score(&json!({})), None);
    }
}
