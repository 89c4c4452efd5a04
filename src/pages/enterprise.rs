//! MVP3: tenants, HA status, integrations and enterprise metrics

use futures_util::join;
use serde::Serialize;
use serde_json::Value;

use super::{blank, items, settle};
use crate::api::dto::TenantCreate;
use crate::api::{ApiClient, ClientResult, Transport};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EnterpriseTab {
    #[default]
    Overview,
    Tenants,
    Ha,
    Integrations,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct EnterprisePage {
    pub tab: EnterpriseTab,
    pub tenants: Vec<Value>,
    pub ha_status: Option<Value>,
    pub integrations: Option<Value>,
    pub metrics: Option<Value>,
    pub form: TenantCreate,
    pub created: Option<Value>,
    pub creating: bool,
    pub error: Option<String>,
}

pub struct EnterpriseData {
    pub tenants: ClientResult<Value>,
    pub ha_status: ClientResult<Value>,
    pub integrations: ClientResult<Value>,
    pub metrics: ClientResult<Value>,
}

impl EnterprisePage {
    pub async fn fetch<T: Transport>(client: &ApiClient<T>) -> EnterpriseData {
        let (tenants, ha_status, integrations, metrics) = join!(
            client.list_tenants(),
            client.ha_status(),
            client.integrations(),
            client.enterprise_dashboard()
        );
        EnterpriseData {
            tenants,
            ha_status,
            integrations,
            metrics,
        }
    }

    pub fn apply(&mut self, data: EnterpriseData) {
        self.error = None;
        if let Some(tenants) = settle(data.tenants, &mut self.error) {
            self.tenants = items(&tenants, "tenants");
        }
        self.ha_status = settle(data.ha_status, &mut self.error);
        self.integrations = settle(data.integrations, &mut self.error);
        self.metrics = settle(data.metrics, &mut self.error);
    }

    pub async fn load<T: Transport>(&mut self, client: &ApiClient<T>) {
        let data = Self::fetch(client).await;
        self.apply(data);
    }

    pub fn begin_create(&mut self) -> Option<TenantCreate> {
        if blank(&self.form.name) {
            self.error = Some("Tenant name is required".to_string());
            return None;
        }
        self.error = None;
        self.creating = true;
        Some(self.form.clone())
    }

    pub fn finish_create(&mut self, result: ClientResult<Value>) {
        self.creating = false;
        match result {
            Ok(tenant) => {
                self.tenants.insert(0, tenant.clone());
                self.created = Some(tenant);
                self.form = TenantCreate::default();
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    pub async fn create_tenant<T: Transport>(&mut self, client: &ApiClient<T>) {
        if let Some(tenant) = self.begin_create() {
            let result = client.create_tenant(&tenant).await;
            self.finish_create(result);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::transport::MockTransport;
    use crate::config::ApiBase;

    #[tokio::test]
    async fn test_load_all_panels() {
        let transport = MockTransport::new();
        transport
            .route("/api/v1/mvp3/tenants", 200, r#"[{"tenant_id": "T-1"}, {"tenant_id": "T-2"}]"#)
            .route("/api/v1/mvp3/ha-status", 200, r#"{"status": "healthy"}"#)
            .route("/api/v1/mvp3/integrations", 200, r#"{"integrations": []}"#)
            .route("/api/v1/mvp3/dashboard/enterprise", 200, r#"{"tenant_count": 2}"#);
        let client = ApiClient::new(ApiBase::new("https://api.example.com"), transport.clone());

        let mut page = EnterprisePage::default();
        page.load(&client).await;

        assert_eq!(page.tenants.len(), 2);
        assert_eq!(page.ha_status.as_ref().unwrap()["status"], "healthy");
        assert_eq!(page.metrics.as_ref().unwrap()["tenant_count"], 2);
        assert_eq!(transport.request_count(), 4);
    }

    #[tokio::test]
    async fn test_create_tenant() {
        let transport = MockTransport::new();
        transport.respond(200, r#"{"tenant_id": "T-3", "name": "Acme"}"#);
        let client = ApiClient::new(ApiBase::new("https://api.example.com"), transport.clone());

        let mut page = EnterprisePage::default();
        assert!(page.begin_create().is_none());
        assert_eq!(page.error.as_deref(), Some("Tenant name is required"));

        page.form.name = "Acme".to_string();
        page.create_tenant(&client).await;

        assert_eq!(page.tenants[0]["tenant_id"], "T-3");
        assert_eq!(page.form.name, "");
        assert_eq!(page.form.plan, "professional");
        assert!(page.error.is_none());
    }
}
