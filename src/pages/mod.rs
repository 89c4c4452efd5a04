//! Page view models
//!
//! Each page owns its form inputs, last-fetched results and a page-local
//! error message. Nothing is shared between pages: the shell drops a page's
//! state when another page is mounted.
//!
//! Every page follows the same shape:
//! - `fetch(client, ..)` gathers the mount-time data concurrently and
//!   `apply(data)` stores it (`load` does both);
//! - each user operation is split into `begin_*` (validate, mark busy, return
//!   the request body) and `finish_*` (store the result or the error), so the
//!   browser can run the request without borrowing the page across an await.

pub mod agentic;
pub mod audit;
pub mod audit_flow;
pub mod autonomous;
pub mod checklist;
pub mod enterprise;
pub mod feed_log;
pub mod ingestion;
pub mod model_checker;
pub mod onboarding;
pub mod overview;
pub mod policy_library;
pub mod reports;

pub use agentic::AgenticPage;
pub use audit::AuditPage;
pub use audit_flow::AuditFlowPage;
pub use autonomous::AutonomousPage;
pub use enterprise::EnterprisePage;
pub use feed_log::FeedLogPage;
pub use ingestion::IngestionPage;
pub use model_checker::ModelCheckerPage;
pub use onboarding::OnboardingPage;
pub use overview::OverviewPage;
pub use policy_library::PolicyLibraryPage;
pub use reports::ReportsPage;

use serde::Serialize;
use serde_json::Value;

use crate::api::{ApiClient, ClientResult, Transport};
use crate::navigation::PageId;

/// Transient state of the mounted page
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum PageState {
    Overview(OverviewPage),
    Onboarding(OnboardingPage),
    Ingestion(IngestionPage),
    Audit(AuditPage),
    Enterprise(EnterprisePage),
    Agentic(AgenticPage),
    Autonomous(AutonomousPage),
    AuditFlow(AuditFlowPage),
    ModelChecker(ModelCheckerPage),
    PolicyLibrary(PolicyLibraryPage),
    FeedLog(FeedLogPage),
    Reports(ReportsPage),
}

impl PageState {
    /// Default state for a freshly mounted page
    pub fn fresh(page: PageId) -> Self {
        match page {
            PageId::Overview => PageState::Overview(OverviewPage::default()),
            PageId::Onboarding => PageState::Onboarding(OnboardingPage::default()),
            PageId::Ingestion => PageState::Ingestion(IngestionPage::default()),
            PageId::Audit => PageState::Audit(AuditPage::default()),
            PageId::Enterprise => PageState::Enterprise(EnterprisePage::default()),
            PageId::Agentic => PageState::Agentic(AgenticPage::default()),
            PageId::Autonomous => PageState::Autonomous(AutonomousPage::default()),
            PageId::AuditFlow => PageState::AuditFlow(AuditFlowPage::default()),
            PageId::ModelChecker => PageState::ModelChecker(ModelCheckerPage::default()),
            PageId::PolicyLibrary => PageState::PolicyLibrary(PolicyLibraryPage::default()),
            PageId::FeedLog => PageState::FeedLog(FeedLogPage::default()),
            PageId::Reports => PageState::Reports(ReportsPage::default()),
        }
    }

    pub fn page_id(&self) -> PageId {
        match self {
            PageState::Overview(_) => PageId::Overview,
            PageState::Onboarding(_) => PageId::Onboarding,
            PageState::Ingestion(_) => PageId::Ingestion,
            PageState::Audit(_) => PageId::Audit,
            PageState::Enterprise(_) => PageId::Enterprise,
            PageState::Agentic(_) => PageId::Agentic,
            PageState::Autonomous(_) => PageId::Autonomous,
            PageState::AuditFlow(_) => PageId::AuditFlow,
            PageState::ModelChecker(_) => PageId::ModelChecker,
            PageState::PolicyLibrary(_) => PageId::PolicyLibrary,
            PageState::FeedLog(_) => PageId::FeedLog,
            PageState::Reports(_) => PageId::Reports,
        }
    }

    /// Run the page's mount-time fetch
    pub async fn load<T: Transport>(&mut self, client: &ApiClient<T>) {
        match self {
            PageState::Overview(page) => page.load(client).await,
            PageState::Onboarding(_) => {}
            PageState::Ingestion(page) => page.load(client).await,
            PageState::Audit(page) => page.load(client).await,
            PageState::Enterprise(page) => page.load(client).await,
            PageState::Agentic(page) => page.load(client).await,
            PageState::Autonomous(page) => page.load(client).await,
            PageState::AuditFlow(page) => page.load(client).await,
            PageState::ModelChecker(page) => page.load(client).await,
            PageState::PolicyLibrary(page) => page.load(client).await,
            PageState::FeedLog(page) => page.load(client).await,
            PageState::Reports(page) => page.load(client).await,
        }
    }

    /// The page-local error message, if any
    pub fn error(&self) -> Option<&str> {
        match self {
            PageState::Overview(page) => page.error.as_deref(),
            PageState::Onboarding(page) => page.error.as_deref(),
            PageState::Ingestion(page) => page.error.as_deref(),
            PageState::Audit(page) => page.error.as_deref(),
            PageState::Enterprise(page) => page.error.as_deref(),
            PageState::Agentic(page) => page.error.as_deref(),
            PageState::Autonomous(page) => page.error.as_deref(),
            PageState::AuditFlow(page) => page.error.as_deref(),
            PageState::ModelChecker(page) => page.error.as_deref(),
            PageState::PolicyLibrary(page) => page.error.as_deref(),
            PageState::FeedLog(page) => page.error.as_deref(),
            PageState::Reports(page) => page.error.as_deref(),
        }
    }
}

/// Array under `key`, or the value itself when the backend returned a bare array
pub fn items(value: &Value, key: &str) -> Vec<Value> {
    match value {
        Value::Array(list) => list.clone(),
        _ => value
            .get(key)
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default(),
    }
}

/// Unwrap a mount-time result; the first failure becomes the page error.
pub(crate) fn settle(result: ClientResult<Value>, error: &mut Option<String>) -> Option<Value> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            if error.is_none() {
                *error = Some(e.to_string());
            }
            None
        }
    }
}

/// Non-blank check used by every form
pub(crate) fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_items_accepts_wrapped_and_bare_arrays() {
        assert_eq!(items(&json!({"runs": [1, 2]}), "runs"), vec![json!(1), json!(2)]);
        assert_eq!(items(&json!([3]), "runs"), vec![json!(3)]);
        assert!(items(&json!({"other": []}), "runs").is_empty());
        assert!(items(&Value::Null, "runs").is_empty());
    }

    #[test]
    fn test_fresh_state_matches_page() {
        for page in PageId::ALL {
            let state = PageState::fresh(page);
            assert_eq!(state.page_id(), page);
            assert!(state.error().is_none());
        }
    }

    #[test]
    fn test_settle_keeps_first_error() {
        let mut error = None;
        let first = settle(
            Err(crate::api::ClientError::Network("down".to_string())),
            &mut error,
        );
        let second = settle(Err(crate::api::ClientError::ConfigurationMissing), &mut error);
        assert!(first.is_none() && second.is_none());
        assert_eq!(error.as_deref(), Some("Network error: down"));
    }
}
