//! MVP3: tenants, availability and integrations

use serde_json::Value;

use crate::api::client::ApiClient;
use crate::api::dto::TenantCreate;
use crate::api::error::ClientResult;
use crate::api::transport::Transport;

impl<T: Transport> ApiClient<T> {
    /// `POST /api/v1/mvp3/tenants`
    pub async fn create_tenant(&self, tenant: &TenantCreate) -> ClientResult<Value> {
        self.post("/api/v1/mvp3/tenants", tenant).await
    }

    /// `GET /api/v1/mvp3/tenants`
    pub async fn list_tenants(&self) -> ClientResult<Value> {
        self.get("/api/v1/mvp3/tenants").await
    }

    /// `GET /api/v1/mvp3/ha-status`
    pub async fn ha_status(&self) -> ClientResult<Value> {
        self.get("/api/v1/mvp3/ha-status").await
    }

    /// `GET /api/v1/mvp3/integrations`
    pub async fn integrations(&self) -> ClientResult<Value> {
        self.get("/api/v1/mvp3/integrations").await
    }

    /// `GET /api/v1/mvp3/dashboard/enterprise`
    pub async fn enterprise_dashboard(&self) -> ClientResult<Value> {
        self.get("/api/v1/mvp3/dashboard/enterprise").await
    }
}
