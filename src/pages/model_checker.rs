//! Single-shot model output check against a policy benchmark

use serde::Serialize;
use serde_json::Value;

use super::checklist::{checklist_items, ChecklistReview, DemoOutput, DemoScenario, OutputForm};
use super::{items, settle};
use crate::api::dto::{OutputMetrics, OutputSubmission};
use crate::api::{ApiClient, ClientResult, Transport};

pub const DEMO_SCENARIOS: [DemoScenario; 5] = [
    DemoScenario {
        label: "Finance: Bias + Missing Fields",
        description: "Credit model with direct protected attribute use, no adverse action reason, no human review",
        model_name: "CreditScorer-v2",
        domain: "finance",
        policy: "EU AI Act",
        output: DemoOutput::Text(
            "Loan denied. The model used gender and race as input features. No adverse action reason provided. Decision confidence: unknown. No human review was applied.",
        ),
    },
    DemoScenario {
        label: "Healthcare: Accuracy + Oversight Gap",
        description: "Diagnostic AI with incomplete dataset, no contraindication check",
        model_name: "DiagnosticAI-v1",
        domain: "healthcare",
        policy: "FDA SaMD",
        output: DemoOutput::Text(
            "Cancer probability: 73%. Model was trained on limited dataset of 200 patients. Physician override mechanism is not configured. No contraindication check performed. Clinical documentation incomplete.",
        ),
    },
    DemoScenario {
        label: "HR: Clean Compliant Output",
        description: "Well-documented HR screening model with human review and audit trail",
        model_name: "HRScreener-v3",
        domain: "hr",
        policy: "NIST AI RMF",
        output: DemoOutput::Text(
            "Candidate ranked #3. Selection reason: technical skills score 92/100. Disparate impact ratio: 0.87 (above 4/5 threshold). Human review flag: YES. Audit trail ID: HR-20260301-A. Documentation complete.",
        ),
    },
    DemoScenario {
        label: "Structured: Direct Metrics",
        description: "Provide numeric metric values directly (bias, accuracy, transparency)",
        model_name: "CustomModel-v1",
        domain: "general",
        policy: "ISO 42001",
        output: DemoOutput::Metrics(OutputMetrics {
            bias_score: 0.22,
            accuracy: 0.81,
            transparency_score: 0.52,
            human_oversight: false,
        }),
    },
    DemoScenario {
        label: "General: Critical Violations",
        description: "Multiple critical findings across bias, transparency, and oversight",
        model_name: "RiskModel-v4",
        domain: "finance",
        policy: "EU AI Act",
        output: DemoOutput::Metrics(OutputMetrics {
            bias_score: 0.35,
            accuracy: 0.71,
            transparency_score: 0.38,
            human_oversight: false,
        }),
    },
];

#[derive(Debug, Clone, Default, Serialize)]
pub struct ModelCheckerPage {
    pub form: OutputForm,
    pub result: Option<Value>,
    pub checking: bool,
    pub review: ChecklistReview,
    pub history: Vec<Value>,
    pub error: Option<String>,
}

impl ModelCheckerPage {
    pub async fn fetch<T: Transport>(client: &ApiClient<T>) -> ClientResult<Value> {
        client.model_output_uploads().await
    }

    pub fn apply(&mut self, uploads: ClientResult<Value>) {
        self.error = None;
        if let Some(uploads) = settle(uploads, &mut self.error) {
            self.history = items(&uploads, "uploads");
        }
    }

    pub async fn load<T: Transport>(&mut self, client: &ApiClient<T>) {
        let uploads = Self::fetch(client).await;
        self.apply(uploads);
    }

    pub fn use_demo(&mut self, index: usize) -> bool {
        match DEMO_SCENARIOS.get(index) {
            Some(demo) => {
                self.form = demo.to_form();
                self.result = None;
                true
            }
            None => false,
        }
    }

    /// Demos run as soon as they are picked.
    pub async fn run_demo<T: Transport>(&mut self, client: &ApiClient<T>, index: usize) {
        if self.use_demo(index) {
            self.check(client).await;
        }
    }

    pub fn begin_check(&mut self) -> Option<OutputSubmission> {
        match self.form.submission() {
            Ok(submission) => {
                self.error = None;
                self.result = None;
                self.review = ChecklistReview::default();
                self.checking = true;
                Some(submission)
            }
            Err(message) => {
                self.error = Some(message);
                None
            }
        }
    }

    pub fn finish_check(&mut self, result: ClientResult<Value>) {
        self.checking = false;
        match result {
            Ok(upload) => {
                self.history.insert(0, upload.clone());
                self.result = Some(upload);
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    pub async fn check<T: Transport>(&mut self, client: &ApiClient<T>) {
        if let Some(submission) = self.begin_check() {
            let result = client.upload_model_output(&submission).await;
            self.finish_check(result);
        }
    }

    pub fn verdict(&self) -> Option<&str> {
        self.result
            .as_ref()
            .and_then(|r| r.get("summary"))
            .and_then(|s| s.get("overall_verdict"))
            .and_then(Value::as_str)
    }

    pub fn checklist(&self) -> Vec<Value> {
        self.result.as_ref().map(checklist_items).unwrap_or_default()
    }

    pub async fn fix_item<T: Transport>(&mut self, client: &ApiClient<T>, index: usize) {
        let Some(item) = self.checklist().get(index).cloned() else {
            return;
        };
        let upload_id = self
            .result
            .as_ref()
            .and_then(|r| r.get("upload_id"))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let request = self.review.begin_bot(index, &item, &upload_id);
        let result = client.execute_bot(&request).await;
        self.review.finish_bot(index, &result);
    }

    /// Show a previous upload from the history list
    pub fn select_upload(&mut self, index: usize) {
        if let Some(upload) = self.history.get(index).cloned() {
            self.result = Some(upload);
            self.review = ChecklistReview::default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::transport::MockTransport;
    use crate::config::ApiBase;
    use crate::pages::checklist::BotRun;

    fn client(transport: &MockTransport) -> ApiClient<MockTransport> {
        ApiClient::new(ApiBase::new("https://api.example.com"), transport.clone())
    }

    #[tokio::test]
    async fn test_demo_runs_immediately() {
        let transport = MockTransport::new();
        transport.respond(
            200,
            r#"{"upload_id": "UP-3", "summary": {"overall_verdict": "FAIL"}, "checklist": [{"check": "Transparency"}]}"#,
        );
        let mut page = ModelCheckerPage::default();

        page.run_demo(&client(&transport), 4).await;

        assert_eq!(page.verdict(), Some("FAIL"));
        assert_eq!(page.history.len(), 1);
        let request = transport.last_request().unwrap();
        assert!(request.url.ends_with("/api/v1/model-output/upload"));
        let body: Value = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["model_name"], "RiskModel-v4");
        assert_eq!(body["output_data"]["bias_score"], 0.35);
    }

    #[tokio::test]
    async fn test_unknown_demo_is_ignored() {
        let transport = MockTransport::new();
        let mut page = ModelCheckerPage::default();

        page.run_demo(&client(&transport), 9).await;

        assert_eq!(transport.request_count(), 0);
        assert!(page.error.is_none());
    }

    #[tokio::test]
    async fn test_fix_item_uses_upload_id() {
        let transport = MockTransport::new();
        transport.respond(500, r#"{"detail": "bot pool exhausted"}"#);
        let mut page = ModelCheckerPage {
            result: Some(serde_json::json!({
                "upload_id": "UP-1",
                "checklist": [{"check": "Documentation"}]
            })),
            ..Default::default()
        };

        page.fix_item(&client(&transport), 0).await;

        assert_eq!(page.review.bot(0), Some(BotRun::Failed));
        let body: Value =
            serde_json::from_str(transport.last_request().unwrap().body.as_deref().unwrap())
                .unwrap();
        assert_eq!(body["finding_id"], "FIND-UP-1-0");
        assert_eq!(body["bot_type"], "remediation_bot");
    }

    #[tokio::test]
    async fn test_history_from_uploads() {
        let transport = MockTransport::new();
        transport.respond(200, r#"{"uploads": [{"upload_id": "UP-1"}]}"#);
        let mut page = ModelCheckerPage::default();

        page.load(&client(&transport)).await;
        page.select_upload(0);

        assert_eq!(page.result.unwrap()["upload_id"], "UP-1");
    }
}
