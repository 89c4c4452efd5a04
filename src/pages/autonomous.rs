//! MVP5: remediation bots, model marketplace, ethics and DPIA

use futures_util::join;
use serde::Serialize;
use serde_json::Value;

use super::{blank, items, settle};
use crate::api::dto::{
    BotExecuteRequest, DpiaRequest, ModelListing, PurchaseRequest, RiskLevel, SurveillanceScan,
};
use crate::api::{ApiClient, ClientResult, Transport};

/// Tenant that marketplace purchases are billed to
pub const DEMO_TENANT_ID: &str = "TENANT-DEMO";

pub const BOT_TYPES: [(&str, &str); 4] = [
    ("remediation_bot", "Risk Remediation Bot"),
    ("retrain_bot", "Auto-Retrain Bot"),
    ("policy_bot", "Policy Enforcement Bot"),
    ("oversight_bot", "Oversight Injection Bot"),
];

pub const SURVEILLANCE_DEMOS: [(&str, &str); 3] = [
    (
        "Prohibited",
        "Our system uses real-time facial recognition and emotion detection in public spaces for law enforcement and predictive policing based on behavioral profiling.",
    ),
    (
        "High Risk",
        "Employee monitoring system tracks location history and biometric fingerprint data for attendance and performance scoring.",
    ),
    (
        "Compliant",
        "Our AI assistant provides customer recommendations based on purchase history with explicit consent and opt-out mechanisms.",
    ),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AutonomousTab {
    #[default]
    Bots,
    Marketplace,
    Ethics,
}

#[derive(Debug, Clone, Serialize)]
pub struct AutonomousPage {
    pub tab: AutonomousTab,

    pub bot_status: Option<Value>,
    pub bot_actions: Vec<Value>,
    pub bot_form: BotExecuteRequest,
    pub bot_result: Option<Value>,
    pub revert_message: Option<String>,

    pub category: String,
    pub listings: Vec<Value>,
    pub market_stats: Option<Value>,
    pub purchase_result: Option<Value>,
    pub list_form: ModelListing,
    pub list_result: Option<Value>,

    pub ethics_form: SurveillanceScan,
    pub ethics_result: Option<Value>,
    pub prohibited: Vec<Value>,
    pub dpia: Option<Value>,

    pub busy: bool,
    pub error: Option<String>,
}

impl Default for AutonomousPage {
    fn default() -> Self {
        Self {
            tab: AutonomousTab::default(),
            bot_status: None,
            bot_actions: Vec::new(),
            bot_form: BotExecuteRequest::default(),
            bot_result: None,
            revert_message: None,
            category: "ALL".to_string(),
            listings: Vec::new(),
            market_stats: None,
            purchase_result: None,
            list_form: ModelListing::default(),
            list_result: None,
            ethics_form: SurveillanceScan::default(),
            ethics_result: None,
            prohibited: Vec::new(),
            dpia: None,
            busy: false,
            error: None,
        }
    }
}

pub struct AutonomousData {
    pub bot_status: ClientResult<Value>,
    pub bot_actions: ClientResult<Value>,
    pub listings: ClientResult<Value>,
    pub market_stats: ClientResult<Value>,
    pub prohibited: ClientResult<Value>,
}

impl AutonomousPage {
    pub async fn fetch<T: Transport>(client: &ApiClient<T>, category: &str) -> AutonomousData {
        let (bot_status, bot_actions, listings, market_stats, prohibited) = join!(
            client.bot_status(),
            client.bot_actions(),
            client.marketplace_listings(category),
            client.marketplace_stats(),
            client.prohibited_use_cases()
        );
        AutonomousData {
            bot_status,
            bot_actions,
            listings,
            market_stats,
            prohibited,
        }
    }

    pub fn apply(&mut self, data: AutonomousData) {
        self.apply_listings(data.listings);
        self.bot_status = settle(data.bot_status, &mut self.error);
        if let Some(actions) = settle(data.bot_actions, &mut self.error) {
            self.bot_actions = items(&actions, "actions");
        }
        self.market_stats = settle(data.market_stats, &mut self.error);
        if let Some(prohibited) = settle(data.prohibited, &mut self.error) {
            self.prohibited = items(&prohibited, "prohibited");
        }
    }

    pub async fn load<T: Transport>(&mut self, client: &ApiClient<T>) {
        let data = Self::fetch(client, &self.category).await;
        self.apply(data);
    }

    /// Change the marketplace category; true when listings must be refetched.
    pub fn select_category(&mut self, category: &str) -> bool {
        if self.category == category {
            return false;
        }
        self.category = category.to_string();
        true
    }

    pub fn apply_listings(&mut self, result: ClientResult<Value>) {
        self.error = None;
        if let Some(listings) = settle(result, &mut self.error) {
            self.listings = items(&listings, "listings");
        }
    }

    // Bots

    pub fn begin_execute(&mut self) -> BotExecuteRequest {
        self.error = None;
        self.bot_result = None;
        self.busy = true;
        self.bot_form.clone()
    }

    pub fn finish_execute(&mut self, result: ClientResult<Value>) {
        self.busy = false;
        match result {
            Ok(job) => {
                self.bot_actions.insert(0, job.clone());
                self.bot_result = Some(job);
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    pub async fn execute_bot<T: Transport>(&mut self, client: &ApiClient<T>) {
        let request = self.begin_execute();
        let result = client.execute_bot(&request).await;
        self.finish_execute(result);
    }

    pub fn finish_revert(&mut self, result: ClientResult<Value>) {
        match result {
            Ok(reply) => {
                self.revert_message = reply
                    .get("message")
                    .and_then(Value::as_str)
                    .map(str::to_string)
                    .or_else(|| Some("Action reverted".to_string()));
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    pub async fn revert<T: Transport>(&mut self, client: &ApiClient<T>, job_id: &str) {
        let result = client.revert_bot(job_id).await;
        self.finish_revert(result);
    }

    // Marketplace

    pub fn begin_purchase(&mut self, listing_id: &str) -> PurchaseRequest {
        self.error = None;
        self.busy = true;
        PurchaseRequest {
            listing_id: listing_id.to_string(),
            tenant_id: DEMO_TENANT_ID.to_string(),
        }
    }

    pub fn finish_purchase(&mut self, result: ClientResult<Value>) {
        self.busy = false;
        match result {
            Ok(receipt) => self.purchase_result = Some(receipt),
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    pub async fn purchase<T: Transport>(&mut self, client: &ApiClient<T>, listing_id: &str) {
        let request = self.begin_purchase(listing_id);
        let result = client.purchase_model(&request).await;
        self.finish_purchase(result);
    }

    pub fn begin_list(&mut self) -> Option<ModelListing> {
        if blank(&self.list_form.name) {
            self.error = Some("Model name is required".to_string());
            return None;
        }
        self.error = None;
        self.busy = true;
        Some(self.list_form.clone())
    }

    pub fn finish_list(&mut self, result: ClientResult<Value>) {
        self.busy = false;
        match result {
            Ok(listing) => {
                self.listings.insert(0, listing.clone());
                self.list_result = Some(listing);
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    pub async fn list_model<T: Transport>(&mut self, client: &ApiClient<T>) {
        if let Some(listing) = self.begin_list() {
            let result = client.list_model(&listing).await;
            self.finish_list(result);
        }
    }

    // Ethics

    pub fn use_surveillance_demo(&mut self, index: usize) {
        if let Some((label, text)) = SURVEILLANCE_DEMOS.get(index) {
            if blank(&self.ethics_form.system_name) {
                self.ethics_form.system_name = format!("{} demo system", label);
            }
            self.ethics_form.description = text.to_string();
        }
    }

    pub fn begin_scan(&mut self) -> Option<SurveillanceScan> {
        if blank(&self.ethics_form.description) {
            self.error = Some("System description is required".to_string());
            return None;
        }
        self.error = None;
        self.ethics_result = None;
        self.dpia = None;
        self.busy = true;
        Some(self.ethics_form.clone())
    }

    pub fn finish_scan(&mut self, result: ClientResult<Value>) {
        self.busy = false;
        match result {
            Ok(scan) => self.ethics_result = Some(scan),
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    pub async fn scan<T: Transport>(&mut self, client: &ApiClient<T>) {
        if let Some(request) = self.begin_scan() {
            let result = client.surveillance_scan(&request).await;
            self.finish_scan(result);
        }
    }

    /// DPIA for the last scanned system at the scan's overall risk
    pub fn begin_dpia(&mut self) -> Option<DpiaRequest> {
        let Some(scan) = &self.ethics_result else {
            self.error = Some("Run an ethics scan first".to_string());
            return None;
        };
        let risk_level = scan
            .get("overall_risk")
            .and_then(Value::as_str)
            .and_then(RiskLevel::parse)
            .unwrap_or(RiskLevel::High);
        self.error = None;
        Some(DpiaRequest {
            system_name: self.ethics_form.system_name.clone(),
            risk_level,
        })
    }

    pub fn finish_dpia(&mut self, result: ClientResult<Value>) {
        match result {
            Ok(dpia) => self.dpia = Some(dpia),
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    pub async fn generate_dpia<T: Transport>(&mut self, client: &ApiClient<T>) {
        if let Some(request) = self.begin_dpia() {
            let result = client.generate_dpia(&request).await;
            self.finish_dpia(result);
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

    fn last_body(transport: &MockTransport) -> Value {
        serde_json::from_str(transport.last_request().unwrap().body.as_deref().unwrap()).unwrap()
    }

    #[tokio::test]
    async fn test_load_unwraps_lists() {
        let transport = MockTransport::new();
        transport
            .route("/api/v1/mvp5/bots/actions", 200, r#"{"actions": [{"job_id": "J1"}]}"#)
            .route(
                "/api/v1/mvp5/marketplace/listings",
                200,
                r#"{"listings": [{"listing_id": "L1"}]}"#,
            )
            .route(
                "/api/v1/mvp5/ethics/prohibited-use-cases",
                200,
                r#"{"prohibited": ["social scoring"]}"#,
            );

        let mut page = AutonomousPage::default();
        page.load(&client(&transport)).await;

        assert_eq!(page.bot_actions.len(), 1);
        assert_eq!(page.listings[0]["listing_id"], "L1");
        assert_eq!(page.prohibited.len(), 1);
        assert_eq!(transport.request_count(), 5);
    }

    #[tokio::test]
    async fn test_execute_prepends_action() {
        let transport = MockTransport::new();
        transport.respond(200, r#"{"job_id": "J2", "status": "completed"}"#);
        let mut page = AutonomousPage {
            bot_actions: vec![serde_json::json!({"job_id": "J1"})],
            ..Default::default()
        };
        page.bot_form.finding_id = "FIND-9".to_string();

        page.execute_bot(&client(&transport)).await;

        assert_eq!(page.bot_actions[0]["job_id"], "J2");
        assert_eq!(last_body(&transport)["bot_type"], "remediation_bot");
        assert_eq!(last_body(&transport)["finding_id"], "FIND-9");
    }

    #[tokio::test]
    async fn test_purchase_uses_demo_tenant() {
        let transport = MockTransport::new();
        let mut page = AutonomousPage::default();

        page.purchase(&client(&transport), "L1").await;

        let body = last_body(&transport);
        assert_eq!(body["listing_id"], "L1");
        assert_eq!(body["tenant_id"], DEMO_TENANT_ID);
        assert!(page.purchase_result.is_some());
    }

    #[tokio::test]
    async fn test_dpia_uses_scan_risk() {
        let transport = MockTransport::new();
        transport
            .respond(200, r#"{"overall_risk": "CRITICAL", "verdict": "PROHIBITED"}"#)
            .respond(200, r#"{"dpia_id": "DPIA-1"}"#);
        let api = client(&transport);
        let mut page = AutonomousPage::default();

        page.generate_dpia(&api).await;
        assert_eq!(transport.request_count(), 0);

        page.use_surveillance_demo(0);
        page.scan(&api).await;
        page.generate_dpia(&api).await;

        assert_eq!(page.dpia.as_ref().unwrap()["dpia_id"], "DPIA-1");
        let body = last_body(&transport);
        assert_eq!(body["risk_level"], "critical");
        assert_eq!(body["system_name"], "Prohibited demo system");
    }

    #[tokio::test]
    async fn test_revert_message() {
        let transport = MockTransport::new();
        transport.respond(200, r#"{"message": "Job J1 reverted"}"#);
        let mut page = AutonomousPage::default();

        page.revert(&client(&transport), "J1").await;
        assert_eq!(page.revert_message.as_deref(), Some("Job J1 reverted"));
    }
}
