//! Headless dashboard shell
//!
//! Couples [`Navigation`] with the state of the one mounted page. The
//! browser dashboard renders the same transitions; the CLI drives this type
//! directly.

use serde::Serialize;

use crate::api::{ApiClient, Transport};
use crate::navigation::{Navigation, PageId};
use crate::pages::PageState;

/// Outcome of a navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Already on the requested page; its state is untouched.
    Unchanged,
    /// A fresh page was mounted and the previous page's state dropped.
    Mounted(PageId),
}

#[derive(Debug, Clone, Serialize)]
pub struct Shell {
    nav: Navigation,
    page: PageState,
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

impl Shell {
    pub fn new() -> Self {
        let nav = Navigation::new();
        let page = PageState::fresh(nav.active());
        Self { nav, page }
    }

    pub fn active(&self) -> PageId {
        self.nav.active()
    }

    pub fn sidebar_open(&self) -> bool {
        self.nav.sidebar_open()
    }

    pub fn page(&self) -> &PageState {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut PageState {
        &mut self.page
    }

    /// Navigate by page key; unknown keys land on the overview.
    pub fn navigate(&mut self, key: &str) -> Transition {
        let changed = self.nav.navigate(key);
        self.remount(changed)
    }

    pub fn navigate_to(&mut self, page: PageId) -> Transition {
        let changed = self.nav.navigate_to(page);
        self.remount(changed)
    }

    fn remount(&mut self, changed: bool) -> Transition {
        if !changed {
            return Transition::Unchanged;
        }
        let active = self.nav.active();
        self.page = PageState::fresh(active);
        Transition::Mounted(active)
    }

    pub fn toggle_sidebar(&mut self) {
        self.nav.toggle_sidebar();
    }

    /// Header breadcrumb, e.g. `SARO / Audit Flow`
    pub fn breadcrumb(&self) -> String {
        format!("SARO / {}", self.nav.active().title())
    }

    /// Run the mounted page's initial fetch
    pub async fn load<T: Transport>(&mut self, client: &ApiClient<T>) {
        self.page.load(client).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::transport::MockTransport;
    use crate::config::ApiBase;

    #[test]
    fn test_starts_on_overview() {
        let shell = Shell::new();
        assert_eq!(shell.active(), PageId::Overview);
        assert_eq!(shell.page().page_id(), PageId::Overview);
        assert!(shell.sidebar_open());
        assert_eq!(shell.breadcrumb(), format!("SARO / {}", PageId::Overview.title()));
    }

    #[test]
    fn test_same_page_keeps_state() {
        let mut shell = Shell::new();
        assert_eq!(shell.navigate("mvp2"), Transition::Mounted(PageId::Audit));

        if let PageState::Audit(page) = shell.page_mut() {
            page.form.model_name = "CreditScorer-v3".to_string();
        }

        assert_eq!(shell.navigate("mvp2"), Transition::Unchanged);
        assert_eq!(shell.navigate_to(PageId::Audit), Transition::Unchanged);
        match shell.page() {
            PageState::Audit(page) => assert_eq!(page.form.model_name, "CreditScorer-v3"),
            other => panic!("unexpected page {:?}", other.page_id()),
        }
    }

    #[test]
    fn test_leaving_page_drops_state() {
        let mut shell = Shell::new();
        shell.navigate("onboarding");
        if let PageState::Onboarding(page) = shell.page_mut() {
            page.form.company_name = "Acme".to_string();
            page.step = 3;
        }

        shell.navigate("reports");
        shell.navigate("onboarding");

        match shell.page() {
            PageState::Onboarding(page) => {
                assert_eq!(page.step, 1);
                assert!(page.form.company_name.is_empty());
            }
            other => panic!("unexpected page {:?}", other.page_id()),
        }
    }

    #[test]
    fn test_unknown_key_falls_back() {
        let mut shell = Shell::new();
        shell.navigate("feed");
        assert_eq!(shell.navigate("no-such-page"), Transition::Mounted(PageId::Overview));
        assert_eq!(shell.page().page_id(), PageId::Overview);
    }

    #[test]
    fn test_sidebar_survives_navigation() {
        let mut shell = Shell::new();
        shell.toggle_sidebar();
        shell.navigate("policies");
        assert!(!shell.sidebar_open());
    }

    #[tokio::test]
    async fn test_load_fetches_mounted_page_only() {
        let transport = MockTransport::new();
        transport.respond(200, r#"{"reports": [{"report_id": "RPT-1"}]}"#);
        let client = ApiClient::new(ApiBase::new("https://api.example.com"), transport.clone());

        let mut shell = Shell::new();
        shell.navigate("reports");
        shell.load(&client).await;

        assert_eq!(transport.request_count(), 1);
        assert!(transport
            .last_request()
            .unwrap()
            .url
            .ends_with("/api/v1/audit-reports"));
        match shell.page() {
            PageState::Reports(page) => assert_eq!(page.reports.len(), 1),
            other => panic!("unexpected page {:?}", other.page_id()),
        }
    }
}
