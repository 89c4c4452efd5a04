//! End-to-end audit pipeline: submit a model output, read back the agent's
//! checklist, and extract requirements from free-form policy documents.

use serde::Serialize;
use serde_json::Value;

use super::checklist::{checklist_items, ChecklistReview, DemoOutput, DemoScenario, OutputForm};
use super::{blank, items, settle};
use crate::api::dto::{NonStandardIngest, OutputMetrics, OutputSubmission};
use crate::api::{ApiClient, ClientResult, Transport};

pub const DEMO_SCENARIOS: [DemoScenario; 4] = [
    DemoScenario {
        label: "Finance: Bias + PII + No Oversight",
        description: "Worst-case credit model with multiple critical violations",
        model_name: "CreditScorer-v2",
        domain: "finance",
        policy: "EU AI Act",
        output: DemoOutput::Text(
            "Loan denied. Model used gender and race as direct input features, leading to disparate impact ratio of 0.61. No adverse action reason provided. No human review mechanism configured. Bias score exceeds threshold. Black box decision, no explanation available.",
        ),
    },
    DemoScenario {
        label: "Healthcare: Accuracy + Documentation Gap",
        description: "Diagnostic AI below FDA accuracy threshold",
        model_name: "DiagnosticAI-v1",
        domain: "healthcare",
        policy: "FDA SaMD",
        output: DemoOutput::Text(
            "Cancer probability: 64%. Model validation on limited 200-patient dataset. Technical documentation is incomplete. Physician override mechanism is configured for review. Explainability features available for clinicians.",
        ),
    },
    DemoScenario {
        label: "HR: Clean Compliant Output",
        description: "Well-documented HR screening model passing all checks",
        model_name: "HRScreener-v3",
        domain: "hr",
        policy: "NIST AI RMF",
        output: DemoOutput::Text(
            "Candidate ranked #4/47. Selection reason: technical assessment 91/100, experience match 87%. Disparate impact ratio: 0.88 (above 4/5 threshold). Human review flag: YES, all decisions reviewed by HR lead. Audit trail ID: HR-20260301-881. Documentation complete. Override mechanism active.",
        ),
    },
    DemoScenario {
        label: "Structured: Custom Metrics",
        description: "Provide your own metric values directly",
        model_name: "CustomModel-v1",
        domain: "general",
        policy: "ISO 42001",
        output: DemoOutput::Metrics(OutputMetrics {
            bias_score: 0.22,
            accuracy: 0.81,
            transparency_score: 0.57,
            human_oversight: false,
        }),
    },
];

pub const NONSTANDARD_DEMOS: [(&str, &str); 2] = [
    (
        "Custom Internal AI Policy",
        "All AI systems that process personal data must undergo a DPIA before deployment. High-risk AI systems require documented bias testing, transparency obligations, and mandatory human oversight. Prohibited use cases include emotion recognition in workplace settings and social scoring. Model documentation must include training data sources, accuracy metrics, and fairness validation results.",
    ),
    (
        "Vendor Contract AI Clause",
        "The vendor warrants that all AI models are free from discriminatory bias affecting protected characteristics. Accuracy must meet or exceed 85% on validation dataset. Facial recognition features are explicitly prohibited. Customer retains right to audit model behaviour and contest automated decisions. Model card and technical specifications must be provided prior to deployment.",
    ),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditFlowTab {
    #[default]
    Pipeline,
    NonStandard,
    History,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AuditFlowPage {
    pub tab: AuditFlowTab,
    pub form: OutputForm,
    pub result: Option<Value>,
    pub running: bool,
    pub review: ChecklistReview,

    pub doc_form: NonStandardIngest,
    pub doc_result: Option<Value>,
    pub extracting: bool,

    pub runs: Vec<Value>,
    pub selected_run: Option<Value>,
    pub error: Option<String>,
}

impl AuditFlowPage {
    pub async fn fetch<T: Transport>(client: &ApiClient<T>) -> ClientResult<Value> {
        client.agent_runs().await
    }

    pub fn apply(&mut self, runs: ClientResult<Value>) {
        self.error = None;
        if let Some(runs) = settle(runs, &mut self.error) {
            self.runs = items(&runs, "runs");
        }
    }

    pub async fn load<T: Transport>(&mut self, client: &ApiClient<T>) {
        let runs = Self::fetch(client).await;
        self.apply(runs);
    }

    /// Fill the pipeline form from a demo; the result of a previous run is cleared.
    pub fn use_demo(&mut self, index: usize) {
        if let Some(demo) = DEMO_SCENARIOS.get(index) {
            self.form = demo.to_form();
            self.result = None;
        }
    }

    pub fn begin_run(&mut self) -> Option<OutputSubmission> {
        match self.form.submission() {
            Ok(submission) => {
                self.error = None;
                self.result = None;
                self.review = ChecklistReview::default();
                self.running = true;
                Some(submission)
            }
            Err(message) => {
                self.error = Some(message);
                None
            }
        }
    }

    pub fn finish_run(&mut self, result: ClientResult<Value>) {
        self.running = false;
        match result {
            Ok(run) => {
                self.runs.insert(0, run.clone());
                self.result = Some(run);
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    pub async fn run_pipeline<T: Transport>(&mut self, client: &ApiClient<T>) {
        if let Some(submission) = self.begin_run() {
            let result = client.run_agent(&submission).await;
            self.finish_run(result);
        }
    }

    /// `FAIL`, `REVIEW` or `PASS` from the last run
    pub fn verdict(&self) -> Option<&str> {
        self.result
            .as_ref()
            .and_then(|r| r.get("summary"))
            .and_then(|s| s.get("verdict"))
            .and_then(Value::as_str)
    }

    pub fn checklist(&self) -> Vec<Value> {
        self.result.as_ref().map(checklist_items).unwrap_or_default()
    }

    fn run_id(&self) -> String {
        self.result
            .as_ref()
            .and_then(|r| r.get("run_id"))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    }

    /// Launch a remediation bot for checklist item `index`
    pub async fn fix_item<T: Transport>(&mut self, client: &ApiClient<T>, index: usize) {
        let Some(item) = self.checklist().get(index).cloned() else {
            return;
        };
        let run_id = self.run_id();
        let request = self.review.begin_bot(index, &item, &run_id);
        let result = client.execute_bot(&request).await;
        self.review.finish_bot(index, &result);
    }

    pub fn use_document_demo(&mut self, index: usize) {
        if let Some((title, text)) = NONSTANDARD_DEMOS.get(index) {
            self.doc_form.title = title.to_string();
            self.doc_form.content = text.to_string();
        }
    }

    pub fn begin_extract(&mut self) -> Option<NonStandardIngest> {
        if blank(&self.doc_form.content) {
            self.error = Some("Document content is required".to_string());
            return None;
        }
        self.error = None;
        self.doc_result = None;
        self.extracting = true;
        Some(self.doc_form.clone())
    }

    pub fn finish_extract(&mut self, result: ClientResult<Value>) {
        self.extracting = false;
        match result {
            Ok(extracted) => self.doc_result = Some(extracted),
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    pub async fn extract<T: Transport>(&mut self, client: &ApiClient<T>) {
        if let Some(document) = self.begin_extract() {
            let result = client.ingest_nonstandard(&document).await;
            self.finish_extract(result);
        }
    }

    pub fn select_run(&mut self, index: usize) {
        self.selected_run = self.runs.get(index).cloned();
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

    fn body(transport: &MockTransport, index: usize) -> Value {
        let requests = transport.requests();
        serde_json::from_str(requests[index].body.as_deref().unwrap()).unwrap()
    }

    #[tokio::test]
    async fn test_demo_run_then_fix() {
        let transport = MockTransport::new();
        transport
            .respond(
                200,
                r#"{
                    "run_id": "RUN-7",
                    "summary": {"verdict": "FAIL"},
                    "checklist": [
                        {"check": "Human Oversight", "status": "critical"},
                        {"check": "Bias Score", "status": "critical"}
                    ]
                }"#,
            )
            .respond(200, r#"{"job_id": "J1"}"#);
        let api = client(&transport);
        let mut page = AuditFlowPage::default();

        page.use_demo(0);
        page.run_pipeline(&api).await;

        assert_eq!(page.verdict(), Some("FAIL"));
        assert_eq!(page.checklist().len(), 2);
        assert_eq!(page.runs.len(), 1);
        let submitted = body(&transport, 0);
        assert_eq!(submitted["model_name"], "CreditScorer-v2");
        assert!(submitted.get("output_data").is_none());

        page.fix_item(&api, 1).await;
        assert_eq!(page.review.bot(1), Some(BotRun::Done));
        let bot = body(&transport, 1);
        assert_eq!(bot["bot_type"], "retrain_bot");
        assert_eq!(bot["finding_id"], "FIND-RUN-7-1");
    }

    #[tokio::test]
    async fn test_structured_demo_sends_metrics() {
        let transport = MockTransport::new();
        let mut page = AuditFlowPage::default();

        page.use_demo(3);
        page.run_pipeline(&client(&transport)).await;

        let submitted = body(&transport, 0);
        assert_eq!(submitted["output_data"]["transparency_score"], 0.57);
        assert_eq!(submitted["output_data"]["human_oversight"], false);
        assert!(submitted.get("output_text").is_none());
    }

    #[tokio::test]
    async fn test_nonstandard_requires_content() {
        let transport = MockTransport::new();
        transport.respond(200, r#"{"requirements": ["DPIA"]}"#);
        let api = client(&transport);
        let mut page = AuditFlowPage::default();

        page.extract(&api).await;
        assert_eq!(transport.request_count(), 0);
        assert!(page.error.is_some());

        page.use_document_demo(1);
        page.extract(&api).await;
        assert!(page.error.is_none());
        assert!(page.doc_result.is_some());
        assert_eq!(body(&transport, 0)["jurisdiction"], "EU");
    }

    #[tokio::test]
    async fn test_load_runs() {
        let transport = MockTransport::new();
        transport.respond(200, r#"{"runs": [{"run_id": "RUN-1"}, {"run_id": "RUN-2"}]}"#);
        let mut page = AuditFlowPage::default();

        page.load(&client(&transport)).await;
        page.select_run(1);

        assert_eq!(page.selected_run.unwrap()["run_id"], "RUN-2");
    }
}
