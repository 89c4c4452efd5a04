//! Data Transfer Objects
//!
//! Request bodies for the mutating endpoints. Field names match the backend's
//! JSON keys. Responses are left as `serde_json::Value`; the backend owns
//! their shape.

use serde::{Deserialize, Serialize};

// ============================================
// SHARED
// ============================================

/// Risk levels accepted by the backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::Low,
        RiskLevel::Medium,
        RiskLevel::High,
        RiskLevel::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }

    /// Case-insensitive parse, e.g. from an `overall_risk` of `"HIGH"`
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

// ============================================
// MVP1: INGESTION
// ============================================

/// `POST /api/v1/mvp1/ingest`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentIngest {
    pub title: String,
    pub content: String,
    pub jurisdiction: String,
    pub doc_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Default for DocumentIngest {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            jurisdiction: "EU".to_string(),
            doc_type: "regulation".to_string(),
            source: None,
            tags: Vec::new(),
        }
    }
}

// ============================================
// MVP2: AUDIT
// ============================================

/// `POST /api/v1/mvp2/audit`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditRequest {
    pub model_name: String,
    pub model_version: String,
    pub use_case: String,
    pub jurisdiction: String,
    pub risk_category: RiskLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_data_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment_context: Option<String>,
}

impl Default for AuditRequest {
    fn default() -> Self {
        Self {
            model_name: String::new(),
            model_version: "1.0".to_string(),
            use_case: String::new(),
            jurisdiction: "EU".to_string(),
            risk_category: RiskLevel::Medium,
            training_data_description: None,
            deployment_context: None,
        }
    }
}

/// `POST /api/v1/audit-reports/generate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditReportRequest {
    /// The audit result the report is built from
    pub audit_result: serde_json::Value,
    pub standard: String,
    pub sector: String,
    pub jurisdiction: String,
}

// ============================================
// MVP3: ENTERPRISE
// ============================================

/// `POST /api/v1/mvp3/tenants`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenantCreate {
    pub name: String,
    pub industry: String,
    pub plan: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub jurisdictions: Vec<String>,
}

impl Default for TenantCreate {
    fn default() -> Self {
        Self {
            name: String::new(),
            industry: "technology".to_string(),
            plan: "professional".to_string(),
            contact_email: None,
            jurisdictions: Vec::new(),
        }
    }
}

// ============================================
// MVP4: AGENTIC GA
// ============================================

/// `POST /api/v1/mvp4/guardrails/check`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuardrailCheckRequest {
    /// Filled with a fresh id by the client when empty
    pub request_id: String,
    pub model_id: String,
    pub output_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_text: Option<String>,
}

impl Default for GuardrailCheckRequest {
    fn default() -> Self {
        Self {
            request_id: String::new(),
            model_id: "HRScreener-v1".to_string(),
            output_text: String::new(),
            input_text: None,
        }
    }
}

/// `POST /api/v1/mvp4/compliance/generate-report`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceReportRequest {
    pub model_name: String,
    pub report_type: String,
}

impl Default for ComplianceReportRequest {
    fn default() -> Self {
        Self {
            model_name: "DiagnosticAI-v2".to_string(),
            report_type: "EU_AI_ACT".to_string(),
        }
    }
}

/// `POST /api/v1/mvp4/training/enroll`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrollRequest {
    pub course_id: String,
    pub user_id: String,
}

/// `POST /api/v1/mvp4/commercial/onboard`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerOnboard {
    pub name: String,
    pub plan: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
}

// ============================================
// MVP5: AUTONOMOUS GOVERNANCE
// ============================================

/// `POST /api/v1/mvp5/bots/execute`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotExecuteRequest {
    pub bot_type: String,
    pub finding_id: String,
}

impl Default for BotExecuteRequest {
    fn default() -> Self {
        Self {
            bot_type: "remediation_bot".to_string(),
            finding_id: String::new(),
        }
    }
}

/// `POST /api/v1/mvp5/marketplace/purchase`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRequest {
    pub listing_id: String,
    pub tenant_id: String,
}

/// `POST /api/v1/mvp5/marketplace/list`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelListing {
    pub name: String,
    pub vendor: String,
    pub category: String,
    pub price_usd: u64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub jurisdictions: Vec<String>,
}

impl Default for ModelListing {
    fn default() -> Self {
        Self {
            name: String::new(),
            vendor: String::new(),
            category: "finance".to_string(),
            price_usd: 5000,
            jurisdictions: Vec::new(),
        }
    }
}

/// `POST /api/v1/mvp5/ethics/surveillance-scan`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SurveillanceScan {
    pub system_name: String,
    pub description: String,
}

/// `POST /api/v1/mvp5/ethics/dpia-generate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DpiaRequest {
    pub system_name: String,
    pub risk_level: RiskLevel,
}

// ============================================
// AGENT PIPELINE / MODEL OUTPUT
// ============================================

/// How a model output is submitted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    #[default]
    Text,
    Structured,
}

/// Structured metrics for a model output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputMetrics {
    pub bias_score: f64,
    pub accuracy: f64,
    pub transparency_score: f64,
    pub human_oversight: bool,
}

impl Default for OutputMetrics {
    fn default() -> Self {
        Self {
            bias_score: 0.18,
            accuracy: 0.83,
            transparency_score: 0.61,
            human_oversight: true,
        }
    }
}

/// `POST /api/v1/agent/run` and `POST /api/v1/model-output/upload`.
///
/// Exactly one of `output_text` / `output_data` is sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSubmission {
    pub model_name: String,
    pub domain: String,
    pub policy: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_data: Option<OutputMetrics>,
}

/// `POST /api/v1/agent/ingest-nonstandard`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NonStandardIngest {
    pub title: String,
    pub jurisdiction: String,
    pub content: String,
}

impl Default for NonStandardIngest {
    fn default() -> Self {
        Self {
            title: String::new(),
            jurisdiction: "EU".to_string(),
            content: String::new(),
        }
    }
}

// ============================================
// POLICY LIBRARY
// ============================================

/// `POST /api/v1/policies/upload`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyUpload {
    pub title: String,
    pub content: String,
    pub jurisdiction: String,
    pub regulation: String,
    pub doc_type: String,
}

impl Default for PolicyUpload {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            jurisdiction: "EU".to_string(),
            regulation: "EU AI Act".to_string(),
            doc_type: "regulation".to_string(),
        }
    }
}

/// `PUT /api/v1/policies/{id}/review`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyReview {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl PolicyReview {
    pub fn reviewed() -> Self {
        Self {
            status: "reviewed".to_string(),
            notes: None,
        }
    }
}

// ============================================
// ONBOARDING
// ============================================

/// `POST /api/v1/onboard`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnboardRequest {
    pub company_name: String,
    pub industry: String,
    pub plan: String,
    pub persona: String,
}

impl Default for OnboardRequest {
    fn default() -> Self {
        Self {
            company_name: String::new(),
            industry: "Technology".to_string(),
            plan: "professional".to_string(),
            persona: "enabler".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_risk_level_wire_format() {
        assert_eq!(serde_json::to_value(RiskLevel::High).unwrap(), json!("high"));
        assert_eq!(RiskLevel::parse("CRITICAL"), Some(RiskLevel::Critical));
        assert_eq!(RiskLevel::parse("unknown"), None);
    }

    #[test]
    fn test_output_submission_sends_one_payload() {
        let text = OutputSubmission {
            model_name: "CreditScorer-v3".to_string(),
            domain: "finance".to_string(),
            policy: "EU AI Act".to_string(),
            output_text: Some("approved".to_string()),
            output_data: None,
        };
        let value = serde_json::to_value(&text).unwrap();
        assert_eq!(value["output_text"], "approved");
        assert!(value.get("output_data").is_none());
    }

    #[test]
    fn test_optional_fields_omitted() {
        let value = serde_json::to_value(DocumentIngest::default()).unwrap();
        assert_eq!(
            value,
            json!({"title": "", "content": "", "jurisdiction": "EU", "doc_type": "regulation"})
        );
    }
}
