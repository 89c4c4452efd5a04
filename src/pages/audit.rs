//! MVP2: run model audits, browse history and the compliance matrix, and
//! turn the latest result into a standards report.

use futures_util::join;
use serde::Serialize;
use serde_json::Value;

use super::{blank, items, settle};
use crate::api::dto::{AuditReportRequest, AuditRequest};
use crate::api::{ApiClient, ClientResult, Transport};

pub const REPORT_STANDARDS: [&str; 3] = ["EU AI Act", "NIST AI RMF", "ISO 42001"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditTab {
    #[default]
    Run,
    History,
    Matrix,
    Report,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuditPage {
    pub tab: AuditTab,
    pub form: AuditRequest,
    pub result: Option<Value>,
    pub submitting: bool,
    pub audits: Vec<Value>,
    pub matrix: Option<Value>,
    pub report_standard: String,
    pub report: Option<Value>,
    pub generating_report: bool,
    pub error: Option<String>,
}

impl Default for AuditPage {
    fn default() -> Self {
        Self {
            tab: AuditTab::default(),
            form: AuditRequest::default(),
            result: None,
            submitting: false,
            audits: Vec::new(),
            matrix: None,
            report_standard: REPORT_STANDARDS[0].to_string(),
            report: None,
            generating_report: false,
            error: None,
        }
    }
}

pub struct AuditData {
    pub audits: ClientResult<Value>,
    pub matrix: ClientResult<Value>,
}

impl AuditPage {
    pub async fn fetch<T: Transport>(client: &ApiClient<T>) -> AuditData {
        let (audits, matrix) = join!(client.list_audits(), client.compliance_matrix("EU"));
        AuditData { audits, matrix }
    }

    pub fn apply(&mut self, data: AuditData) {
        self.error = None;
        if let Some(audits) = settle(data.audits, &mut self.error) {
            self.audits = items(&audits, "audits");
        }
        self.matrix = settle(data.matrix, &mut self.error).or(self.matrix.take());
    }

    pub async fn load<T: Transport>(&mut self, client: &ApiClient<T>) {
        let data = Self::fetch(client).await;
        self.apply(data);
    }

    pub fn begin_audit(&mut self) -> Option<AuditRequest> {
        if blank(&self.form.model_name) || blank(&self.form.use_case) {
            self.error = Some("Model name and use case are required".to_string());
            return None;
        }
        self.error = None;
        self.submitting = true;
        Some(self.form.clone())
    }

    pub fn finish_audit(&mut self, result: ClientResult<Value>) {
        self.submitting = false;
        match result {
            Ok(audit) => {
                self.audits.insert(0, audit.clone());
                self.result = Some(audit);
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    pub async fn run_audit<T: Transport>(&mut self, client: &ApiClient<T>) {
        if let Some(request) = self.begin_audit() {
            let result = client.run_audit(&request).await;
            self.finish_audit(result);
        }
    }

    /// Report body built from the latest audit result
    pub fn begin_report(&mut self) -> Option<AuditReportRequest> {
        let Some(result) = &self.result else {
            self.error = Some("Run an audit before generating a report".to_string());
            return None;
        };
        let request = AuditReportRequest {
            audit_result: result.clone(),
            standard: self.report_standard.clone(),
            sector: self.form.use_case.clone(),
            jurisdiction: self.form.jurisdiction.clone(),
        };
        self.error = None;
        self.generating_report = true;
        Some(request)
    }

    pub fn finish_report(&mut self, result: ClientResult<Value>) {
        self.generating_report = false;
        match result {
            Ok(report) => {
                self.report = Some(report);
                self.tab = AuditTab::Report;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    pub async fn generate_report<T: Transport>(&mut self, client: &ApiClient<T>) {
        if let Some(request) = self.begin_report() {
            let result = client.generate_audit_report(&request).await;
            self.finish_report(result);
        }
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

    #[tokio::test]
    async fn test_validation_message() {
        let transport = MockTransport::new();
        let mut page = AuditPage::default();
        page.form.model_name = "CreditScorer-v3".to_string();

        page.run_audit(&client(&transport)).await;

        assert_eq!(page.error.as_deref(), Some("Model name and use case are required"));
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_backend_detail_shown_inline() {
        let transport = MockTransport::new();
        transport.respond(422, r#"{"detail": "model_name is required"}"#);
        let mut page = AuditPage::default();
        page.form.model_name = "CreditScorer-v3".to_string();
        page.form.use_case = "credit scoring".to_string();

        page.run_audit(&client(&transport)).await;

        assert_eq!(page.error.as_deref(), Some("model_name is required"));
        assert!(page.result.is_none());
    }

    #[tokio::test]
    async fn test_report_from_last_result() {
        let transport = MockTransport::new();
        transport
            .respond(200, r#"{"audit_id": "AUD-1", "model_name": "CreditScorer-v3"}"#)
            .respond(200, r#"{"report_id": "RPT-1"}"#);
        let api = client(&transport);
        let mut page = AuditPage::default();

        page.generate_report(&api).await;
        assert!(page.error.is_some());
        assert_eq!(transport.request_count(), 0);

        page.form.model_name = "CreditScorer-v3".to_string();
        page.form.use_case = "credit scoring".to_string();
        page.run_audit(&api).await;
        page.report_standard = "NIST AI RMF".to_string();
        page.generate_report(&api).await;

        assert_eq!(page.tab, AuditTab::Report);
        assert_eq!(page.report.as_ref().unwrap()["report_id"], "RPT-1");
        assert_eq!(page.audits.len(), 1);

        let body: Value =
            serde_json::from_str(transport.last_request().unwrap().body.as_deref().unwrap())
                .unwrap();
        assert_eq!(body["audit_result"]["audit_id"], "AUD-1");
        assert_eq!(body["standard"], "NIST AI RMF");
        assert_eq!(body["sector"], "credit scoring");
        assert_eq!(body["jurisdiction"], "EU");
    }
}
