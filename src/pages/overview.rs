//! Overview dashboard
//!
//! Platform summary (refreshed by polling), persona workflow, compliance
//! status and the quick-entry cards that navigate to the main workflows.

use chrono::{DateTime, Utc};
use futures_util::join;
use serde::Serialize;
use serde_json::Value;

use super::{items, settle};
use crate::api::{ApiClient, ClientResult, Transport};
use crate::navigation::PageId;

/// User role that selects workflow hints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Persona {
    Forecaster,
    Autopsier,
    #[default]
    Enabler,
    Evangelist,
}

impl Persona {
    pub const ALL: [Persona; 4] = [
        Persona::Forecaster,
        Persona::Autopsier,
        Persona::Enabler,
        Persona::Evangelist,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Persona::Forecaster => "forecaster",
            Persona::Autopsier => "autopsier",
            Persona::Enabler => "enabler",
            Persona::Evangelist => "evangelist",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Persona::Forecaster => "Forecaster",
            Persona::Autopsier => "Autopsier",
            Persona::Enabler => "Enabler",
            Persona::Evangelist => "Evangelist",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Persona::Forecaster => "Regulatory intelligence, risk prediction, upcoming changes",
            Persona::Autopsier => "Deep-dive audit findings, evidence chains, standards reports",
            Persona::Enabler => "Implement controls, manage policies, drive remediation",
            Persona::Evangelist => "Executive summaries, ROI metrics, board reporting",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|persona| persona.id().eq_ignore_ascii_case(value.trim()))
    }
}

/// A card on the overview that jumps to a workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuickEntry {
    pub label: &'static str,
    pub description: &'static str,
    pub target: PageId,
}

pub const QUICK_ENTRIES: [QuickEntry; 4] = [
    QuickEntry {
        label: "Run Full Audit",
        description: "Model output to checklist",
        target: PageId::AuditFlow,
    },
    QuickEntry {
        label: "Check Model Output",
        description: "Upload & analyze AI output",
        target: PageId::ModelChecker,
    },
    QuickEntry {
        label: "Policy Library",
        description: "Browse & upload policies",
        target: PageId::PolicyLibrary,
    },
    QuickEntry {
        label: "New Client Setup",
        description: "Onboard in under 5 minutes",
        target: PageId::Onboarding,
    },
];

/// Page reached from a persona quick-start action
pub fn persona_action_target(action: &str) -> Option<PageId> {
    let target = match action {
        "Go to Ingestion & Forecast" | "Run 90-day forecast" => PageId::Ingestion,
        "Check Regulatory Feed" => PageId::FeedLog,
        "Upload Model Output" => PageId::AuditFlow,
        "Go to Audit & Compliance" => PageId::Audit,
        "Generate Standards Report" | "Export Board Report" => PageId::Reports,
        "Check Guardrails" => PageId::Agentic,
        "Trigger Remediation Bot" | "Run Ethics Scan" => PageId::Autonomous,
        "Upload Policy for Analysis" => PageId::PolicyLibrary,
        "Review Platform Overview" => PageId::Overview,
        _ => return None,
    };
    Some(target)
}

/// Page that fixes a compliance-status item for `module`
pub fn module_target(module: &str) -> Option<PageId> {
    let target = match module {
        "Ingestion" => PageId::Ingestion,
        "Audit" => PageId::AuditFlow,
        "Guardrails" => PageId::Agentic,
        "Policies" => PageId::PolicyLibrary,
        "Bots" => PageId::Autonomous,
        "Reports" => PageId::Reports,
        _ => return None,
    };
    Some(target)
}

/// A persona quick-start step and where it leads
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkflowStep {
    pub action: String,
    pub detail: String,
    pub target: Option<PageId>,
}

/// A failing or warning compliance item with its fix page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComplianceFix {
    pub check: String,
    pub module: String,
    pub status: String,
    pub target: PageId,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct OverviewPage {
    pub summary: Option<Value>,
    pub loading: bool,
    pub persona: Persona,
    pub workflow: Option<Value>,
    pub compliance: Option<Value>,
    pub error: Option<String>,
    pub last_refreshed: Option<DateTime<Utc>>,
}

/// Mount-time results
pub struct OverviewData {
    pub summary: ClientResult<Value>,
    pub persona: PersonaData,
}

/// Persona-dependent results, refetched when the persona changes
pub struct PersonaData {
    pub workflow: ClientResult<Value>,
    pub compliance: ClientResult<Value>,
}

impl OverviewPage {
    pub fn new(persona: Persona) -> Self {
        Self {
            persona,
            ..Self::default()
        }
    }

    pub async fn fetch<T: Transport>(client: &ApiClient<T>, persona: Persona) -> OverviewData {
        let (summary, persona) = join!(client.dashboard(), Self::fetch_persona(client, persona));
        OverviewData { summary, persona }
    }

    pub async fn fetch_persona<T: Transport>(
        client: &ApiClient<T>,
        persona: Persona,
    ) -> PersonaData {
        let (workflow, compliance) = join!(
            client.persona_checklist(persona.id()),
            client.compliance_status()
        );
        PersonaData {
            workflow,
            compliance,
        }
    }

    pub fn apply(&mut self, data: OverviewData) {
        self.loading = false;
        self.error = None;
        if let Some(summary) = settle(data.summary, &mut self.error) {
            self.summary = Some(summary);
            self.last_refreshed = Some(Utc::now());
        }
        self.apply_persona(data.persona);
    }

    pub fn apply_persona(&mut self, data: PersonaData) {
        if let Some(checklist) = settle(data.workflow, &mut self.error) {
            self.workflow = checklist.get("workflow").cloned();
        }
        if let Some(compliance) = settle(data.compliance, &mut self.error) {
            self.compliance = Some(compliance);
        }
    }

    pub async fn load<T: Transport>(&mut self, client: &ApiClient<T>) {
        self.loading = true;
        let data = Self::fetch(client, self.persona).await;
        self.apply(data);
    }

    /// Store a background refresh. Failures are dropped so a transient
    /// outage does not replace the last good summary.
    pub fn apply_poll(&mut self, result: ClientResult<Value>) {
        match result {
            Ok(summary) => {
                self.summary = Some(summary);
                self.last_refreshed = Some(Utc::now());
            }
            Err(e) => tracing::debug!(error = %e, "Dashboard poll failed"),
        }
    }

    /// Switch persona; returns true when the persona data must be refetched.
    pub fn select_persona(&mut self, persona: Persona) -> bool {
        if self.persona == persona {
            return false;
        }
        self.persona = persona;
        self.workflow = None;
        true
    }

    /// Section of the summary, e.g. `mvp1_ingestion`
    pub fn module(&self, key: &str) -> Option<&Value> {
        self.summary.as_ref()?.get(key)
    }

    pub fn quick_steps(&self) -> Vec<WorkflowStep> {
        let Some(workflow) = &self.workflow else {
            return Vec::new();
        };
        items(workflow, "quick_start")
            .iter()
            .map(|step| {
                let action = text(step, "action");
                WorkflowStep {
                    target: persona_action_target(&action),
                    detail: text(step, "detail"),
                    action,
                }
            })
            .collect()
    }

    pub fn compliance_items(&self) -> Vec<Value> {
        self.compliance
            .as_ref()
            .map(|c| items(c, "items"))
            .unwrap_or_default()
    }

    /// (critical, warn) counts
    pub fn compliance_counts(&self) -> (usize, usize) {
        let list = self.compliance_items();
        let count = |status: &str| {
            list.iter()
                .filter(|item| item.get("status").and_then(Value::as_str) == Some(status))
                .count()
        };
        (count("critical"), count("warn"))
    }

    /// Items that are not passing and have a page that fixes them
    pub fn fixes(&self) -> Vec<ComplianceFix> {
        self.compliance_items()
            .iter()
            .filter_map(|item| {
                let status = text(item, "status");
                if status == "pass" {
                    return None;
                }
                let module = text(item, "module");
                let target = module_target(&module)?;
                Some(ComplianceFix {
                    check: text(item, "check"),
                    module,
                    status,
                    target,
                })
            })
            .collect()
    }
}

fn text(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::transport::MockTransport;
    use crate::config::ApiBase;
    use serde_json::json;

    fn client(transport: &MockTransport) -> ApiClient<MockTransport> {
        ApiClient::new(ApiBase::new("https://api.example.com"), transport.clone())
    }

    #[tokio::test]
    async fn test_load_fetches_summary_and_persona() {
        let transport = MockTransport::new();
        transport
            .route("/api/v1/dashboard", 200, r#"{"mvp1_ingestion": {"documents_total": 1247}}"#)
            .route(
                "/api/v1/checklist/persona/enabler",
                200,
                r#"{"workflow": {"quick_start": [{"action": "Check Guardrails", "detail": "Scan outputs"}, {"action": "Call a friend", "detail": ""}]}}"#,
            )
            .route(
                "/api/v1/checklist/compliance-status",
                200,
                r#"{"items": [
                    {"check": "Bias testing", "module": "Audit", "status": "critical"},
                    {"check": "Feed reviewed", "module": "Unknown", "status": "warn"},
                    {"check": "Guardrails on", "module": "Guardrails", "status": "pass"}
                ]}"#,
            );

        let mut page = OverviewPage::default();
        page.load(&client(&transport)).await;

        assert!(page.error.is_none());
        assert!(!page.loading);
        assert!(page.last_refreshed.is_some());
        assert_eq!(page.module("mvp1_ingestion").unwrap()["documents_total"], 1247);
        assert_eq!(transport.request_count(), 3);

        let steps = page.quick_steps();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].target, Some(PageId::Agentic));
        assert_eq!(steps[1].target, None);

        assert_eq!(page.compliance_counts(), (1, 1));
        let fixes = page.fixes();
        assert_eq!(fixes.len(), 1);
        assert_eq!(fixes[0].target, PageId::AuditFlow);
    }

    #[tokio::test]
    async fn test_mount_failure_recorded() {
        let transport = MockTransport::new();
        transport.route("/api/v1/dashboard", 500, r#"{"detail": "database offline"}"#);

        let mut page = OverviewPage::default();
        page.load(&client(&transport)).await;

        assert_eq!(page.error.as_deref(), Some("database offline"));
        assert!(page.summary.is_none());
    }

    #[test]
    fn test_poll_errors_are_swallowed() {
        let mut page = OverviewPage::default();
        page.apply_poll(Ok(json!({"total": 1})));
        let refreshed = page.last_refreshed;

        page.apply_poll(Err(crate::api::ClientError::Network("timeout".to_string())));
        assert_eq!(page.summary, Some(json!({"total": 1})));
        assert_eq!(page.last_refreshed, refreshed);
        assert!(page.error.is_none());
    }

    #[test]
    fn test_select_persona() {
        let mut page = OverviewPage::default();
        assert_eq!(page.persona, Persona::Enabler);
        assert!(!page.select_persona(Persona::Enabler));
        assert!(page.select_persona(Persona::Forecaster));
        assert_eq!(Persona::parse("Evangelist"), Some(Persona::Evangelist));
    }

    #[test]
    fn test_navigation_maps() {
        assert_eq!(persona_action_target("Run Ethics Scan"), Some(PageId::Autonomous));
        assert_eq!(persona_action_target("Export Board Report"), Some(PageId::Reports));
        assert_eq!(module_target("Policies"), Some(PageId::PolicyLibrary));
        assert_eq!(module_target("Billing"), None);
        assert_eq!(QUICK_ENTRIES[3].target, PageId::Onboarding);
    }
}
