//! MVP4: guardrail checks, compliance reports, training and commercial readiness

use futures_util::join;
use serde::Serialize;
use serde_json::Value;

use super::{blank, items, settle};
use crate::api::dto::{ComplianceReportRequest, EnrollRequest, GuardrailCheckRequest};
use crate::api::{ApiClient, ClientResult, Transport};

/// User enrolled by the training panel
pub const DEMO_USER_ID: &str = "demo-user-001";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DemoText {
    pub label: &'static str,
    pub text: &'static str,
}

pub const DEMO_TEXTS: [DemoText; 3] = [
    DemoText {
        label: "Bias + PII",
        text: "All women are bad at math. Patient SSN 123-45-6789 is stored in our system.",
    },
    DemoText {
        label: "Hallucination",
        text: "This drug is 100% guaranteed to cure cancer. I am certain it will work for everyone.",
    },
    DemoText {
        label: "Clean",
        text: "Transaction reviewed fairly across all protected characteristics. Human oversight applied.",
    },
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AgenticTab {
    #[default]
    Guardrails,
    Compliance,
    Training,
    Commercial,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AgenticPage {
    pub tab: AgenticTab,

    pub guard_form: GuardrailCheckRequest,
    pub guard_result: Option<Value>,
    pub guard_error: Option<String>,
    pub checking: bool,
    pub guard_stats: Option<Value>,

    pub report_form: ComplianceReportRequest,
    pub report_result: Option<Value>,
    pub report_error: Option<String>,
    pub generating: bool,
    pub regulations: Vec<Value>,

    pub courses: Vec<Value>,
    pub enroll_message: Option<String>,

    pub ga_readiness: Option<Value>,
    pub billing_tenant: String,
    pub billing: Option<Value>,

    pub error: Option<String>,
}

pub struct AgenticData {
    pub guard_stats: ClientResult<Value>,
    pub regulations: ClientResult<Value>,
    pub courses: ClientResult<Value>,
    pub ga_readiness: ClientResult<Value>,
}

impl AgenticPage {
    pub async fn fetch<T: Transport>(client: &ApiClient<T>) -> AgenticData {
        let (guard_stats, regulations, courses, ga_readiness) = join!(
            client.guardrail_stats(),
            client.list_regulations("ALL"),
            client.list_courses(),
            client.ga_readiness()
        );
        AgenticData {
            guard_stats,
            regulations,
            courses,
            ga_readiness,
        }
    }

    pub fn apply(&mut self, data: AgenticData) {
        self.error = None;
        self.guard_stats = settle(data.guard_stats, &mut self.error);
        if let Some(regulations) = settle(data.regulations, &mut self.error) {
            self.regulations = items(&regulations, "regulations");
        }
        if let Some(courses) = settle(data.courses, &mut self.error) {
            self.courses = items(&courses, "courses");
        }
        self.ga_readiness = settle(data.ga_readiness, &mut self.error);
    }

    pub async fn load<T: Transport>(&mut self, client: &ApiClient<T>) {
        let data = Self::fetch(client).await;
        self.apply(data);
    }

    pub fn use_demo(&mut self, index: usize) {
        if let Some(demo) = DEMO_TEXTS.get(index) {
            self.guard_form.output_text = demo.text.to_string();
        }
    }

    /// Each check gets its own request id.
    pub fn begin_check(&mut self) -> Option<GuardrailCheckRequest> {
        if blank(&self.guard_form.output_text) {
            self.guard_error = Some("Enter text to check".to_string());
            return None;
        }
        self.guard_error = None;
        self.guard_result = None;
        self.checking = true;
        Some(GuardrailCheckRequest {
            request_id: String::new(),
            ..self.guard_form.clone()
        })
    }

    pub fn finish_check(&mut self, result: ClientResult<Value>) {
        self.checking = false;
        match result {
            Ok(verdict) => self.guard_result = Some(verdict),
            Err(e) => self.guard_error = Some(e.to_string()),
        }
    }

    pub async fn check<T: Transport>(&mut self, client: &ApiClient<T>) {
        if let Some(request) = self.begin_check() {
            let result = client.check_guardrails(&request).await;
            self.finish_check(result);
        }
    }

    pub fn begin_report(&mut self) -> Option<ComplianceReportRequest> {
        if blank(&self.report_form.model_name) {
            self.report_error = Some("Model name is required".to_string());
            return None;
        }
        self.report_error = None;
        self.report_result = None;
        self.generating = true;
        Some(self.report_form.clone())
    }

    pub fn finish_report(&mut self, result: ClientResult<Value>) {
        self.generating = false;
        match result {
            Ok(report) => self.report_result = Some(report),
            Err(e) => self.report_error = Some(e.to_string()),
        }
    }

    pub async fn generate_report<T: Transport>(&mut self, client: &ApiClient<T>) {
        if let Some(request) = self.begin_report() {
            let result = client.generate_compliance_report(&request).await;
            self.finish_report(result);
        }
    }

    pub fn begin_enroll(&mut self, course_id: &str) -> EnrollRequest {
        self.enroll_message = None;
        EnrollRequest {
            course_id: course_id.to_string(),
            user_id: DEMO_USER_ID.to_string(),
        }
    }

    pub fn finish_enroll(&mut self, course_id: &str, result: ClientResult<Value>) {
        self.enroll_message = Some(match result {
            Ok(_) => format!("Enrolled in course {}", course_id),
            Err(e) => format!("Error: {}", e),
        });
    }

    pub async fn enroll<T: Transport>(&mut self, client: &ApiClient<T>, course_id: &str) {
        let request = self.begin_enroll(course_id);
        let result = client.enroll_course(&request).await;
        self.finish_enroll(course_id, result);
    }

    pub fn begin_billing(&mut self) -> Option<String> {
        if blank(&self.billing_tenant) {
            self.error = Some("Tenant ID is required".to_string());
            return None;
        }
        self.error = None;
        Some(self.billing_tenant.trim().to_string())
    }

    pub fn finish_billing(&mut self, result: ClientResult<Value>) {
        match result {
            Ok(billing) => self.billing = Some(billing),
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    pub async fn lookup_billing<T: Transport>(&mut self, client: &ApiClient<T>) {
        if let Some(tenant_id) = self.begin_billing() {
            let result = client.billing(&tenant_id).await;
            self.finish_billing(result);
        }
    }
}
