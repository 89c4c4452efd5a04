//! Client onboarding wizard: company, persona, plan, review, then the
//! provisioned account (step 5).

use serde::Serialize;
use serde_json::Value;

use super::blank;
use crate::api::dto::OnboardRequest;
use crate::api::{ApiClient, ClientResult, Transport};

pub const STEPS: [&str; 4] = ["Company", "Persona", "Plan", "Review"];

/// Step shown after a successful submission
pub const RESULT_STEP: u8 = 5;

pub const INDUSTRIES: [&str; 8] = [
    "Technology",
    "Financial Services",
    "Healthcare",
    "Retail",
    "Manufacturing",
    "Government",
    "Legal",
    "Other",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Plan {
    pub id: &'static str,
    pub name: &'static str,
    pub price: &'static str,
}

pub const PLANS: [Plan; 3] = [
    Plan {
        id: "starter",
        name: "Starter",
        price: "$299/mo",
    },
    Plan {
        id: "professional",
        name: "Professional",
        price: "$899/mo",
    },
    Plan {
        id: "enterprise",
        name: "Enterprise",
        price: "Custom",
    },
];

#[derive(Debug, Clone, Serialize)]
pub struct OnboardingPage {
    pub step: u8,
    pub form: OnboardRequest,
    pub result: Option<Value>,
    pub submitting: bool,
    pub error: Option<String>,
}

impl Default for OnboardingPage {
    fn default() -> Self {
        Self {
            step: 1,
            form: OnboardRequest::default(),
            result: None,
            submitting: false,
            error: None,
        }
    }
}

impl OnboardingPage {
    /// Advance one step; the company name gates the first step.
    pub fn next(&mut self) -> bool {
        if self.step == 1 && blank(&self.form.company_name) {
            self.error = Some("Company name is required".to_string());
            return false;
        }
        if self.step >= STEPS.len() as u8 {
            return false;
        }
        self.error = None;
        self.step += 1;
        true
    }

    pub fn back(&mut self) -> bool {
        if self.step <= 1 || self.step >= RESULT_STEP {
            return false;
        }
        self.step -= 1;
        true
    }

    pub fn is_complete(&self) -> bool {
        self.step == RESULT_STEP
    }

    pub fn begin_submit(&mut self) -> Option<OnboardRequest> {
        if blank(&self.form.company_name) {
            self.error = Some("Company name is required".to_string());
            return None;
        }
        self.error = None;
        self.submitting = true;
        Some(self.form.clone())
    }

    pub fn finish_submit(&mut self, result: ClientResult<Value>) {
        self.submitting = false;
        match result {
            Ok(account) => {
                self.result = Some(account);
                self.step = RESULT_STEP;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    pub async fn submit<T: Transport>(&mut self, client: &ApiClient<T>) {
        if let Some(request) = self.begin_submit() {
            let result = client.onboard(&request).await;
            self.finish_submit(result);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::transport::MockTransport;
    use crate::config::ApiBase;

    #[test]
    fn test_company_name_gates_first_step() {
        let mut page = OnboardingPage::default();
        assert!(!page.next());
        assert_eq!(page.step, 1);
        assert_eq!(page.error.as_deref(), Some("Company name is required"));

        page.form.company_name = "Acme AI".to_string();
        assert!(page.next());
        assert!(page.next());
        assert!(page.next());
        assert_eq!(page.step, 4);
        assert!(!page.next());
        assert!(page.back());
        assert_eq!(page.step, 3);
        assert!(page.error.is_none());
    }

    #[tokio::test]
    async fn test_submit_moves_to_result_step() {
        let transport = MockTransport::new();
        transport.respond(200, r#"{"tenant_id": "TEN-1", "api_key": "saro-live-abc"}"#);
        let client = ApiClient::new(ApiBase::new("https://api.example.com"), transport.clone());

        let mut page = OnboardingPage::default();
        page.form.company_name = "Acme AI".to_string();
        page.form.persona = "forecaster".to_string();
        page.submit(&client).await;

        assert!(page.is_complete());
        assert!(!page.back());
        assert_eq!(page.result.as_ref().unwrap()["tenant_id"], "TEN-1");

        let request = transport.last_request().unwrap();
        assert!(request.url.ends_with("/api/v1/onboard"));
        let body: Value = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["persona"], "forecaster");
        assert_eq!(body["plan"], "professional");
    }

    #[tokio::test]
    async fn test_submit_failure_stays_on_review() {
        let transport = MockTransport::new();
        transport.respond(400, r#"{"detail": "company exists"}"#);
        let client = ApiClient::new(ApiBase::new("https://api.example.com"), transport);

        let mut page = OnboardingPage {
            step: 4,
            ..Default::default()
        };
        page.form.company_name = "Acme AI".to_string();
        page.submit(&client).await;

        assert_eq!(page.step, 4);
        assert_eq!(page.error.as_deref(), Some("company exists"));
    }
}
