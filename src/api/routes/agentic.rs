//! MVP4: guardrails, compliance reports, training and commercial

use serde_json::Value;

use crate::api::client::{segment, with_query, ApiClient};
use crate::api::dto::{
    ComplianceReportRequest, CustomerOnboard, EnrollRequest, GuardrailCheckRequest,
};
use crate::api::error::ClientResult;
use crate::api::transport::Transport;

impl<T: Transport> ApiClient<T> {
    /// `POST /api/v1/mvp4/guardrails/check`
    ///
    /// An empty `request_id` is replaced by a fresh UUID.
    pub async fn check_guardrails(&self, request: &GuardrailCheckRequest) -> ClientResult<Value> {
        if request.request_id.trim().is_empty() {
            let request = GuardrailCheckRequest {
                request_id: uuid::Uuid::new_v4().to_string(),
                ..request.clone()
            };
            return self.post("/api/v1/mvp4/guardrails/check", &request).await;
        }
        self.post("/api/v1/mvp4/guardrails/check", request).await
    }

    /// `GET /api/v1/mvp4/guardrails/stats`
    pub async fn guardrail_stats(&self) -> ClientResult<Value> {
        self.get("/api/v1/mvp4/guardrails/stats").await
    }

    /// `POST /api/v1/mvp4/compliance/generate-report`
    pub async fn generate_compliance_report(
        &self,
        request: &ComplianceReportRequest,
    ) -> ClientResult<Value> {
        self.post("/api/v1/mvp4/compliance/generate-report", request)
            .await
    }

    /// `GET /api/v1/mvp4/compliance/regulations?jurisdiction=`
    pub async fn list_regulations(&self, jurisdiction: &str) -> ClientResult<Value> {
        self.get(&with_query(
            "/api/v1/mvp4/compliance/regulations",
            &[("jurisdiction", jurisdiction)],
        ))
        .await
    }

    /// `GET /api/v1/mvp4/compliance/blockchain-verify/{doc_id}`
    pub async fn blockchain_verify(&self, doc_id: &str) -> ClientResult<Value> {
        self.get(&format!(
            "/api/v1/mvp4/compliance/blockchain-verify/{}",
            segment(doc_id)
        ))
        .await
    }

    /// `GET /api/v1/mvp4/training/courses`
    pub async fn list_courses(&self) -> ClientResult<Value> {
        self.get("/api/v1/mvp4/training/courses").await
    }

    /// `POST /api/v1/mvp4/training/enroll`
    pub async fn enroll_course(&self, request: &EnrollRequest) -> ClientResult<Value> {
        self.post("/api/v1/mvp4/training/enroll", request).await
    }

    /// `GET /api/v1/mvp4/commercial/ga-readiness`
    pub async fn ga_readiness(&self) -> ClientResult<Value> {
        self.get("/api/v1/mvp4/commercial/ga-readiness").await
    }

    /// `GET /api/v1/mvp4/commercial/billing/{tenant_id}`
    pub async fn billing(&self, tenant_id: &str) -> ClientResult<Value> {
        self.get(&format!(
            "/api/v1/mvp4/commercial/billing/{}",
            segment(tenant_id)
        ))
        .await
    }

    /// `POST /api/v1/mvp4/commercial/onboard`
    pub async fn onboard_customer(&self, request: &CustomerOnboard) -> ClientResult<Value> {
        self.post("/api/v1/mvp4/commercial/onboard", request).await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::dto::GuardrailCheckRequest;
    use crate::api::transport::MockTransport;
    use crate::api::ApiClient;
    use crate::config::ApiBase;
    use serde_json::Value;

    fn sent_body(transport: &MockTransport) -> Value {
        let request = transport.last_request().unwrap();
        serde_json::from_str(request.body.as_deref().unwrap()).unwrap()
    }

    #[tokio::test]
    async fn test_guardrail_request_id_generated_when_empty() {
        let transport = MockTransport::new();
        let api = ApiClient::new(ApiBase::new("https://api.example.com"), transport.clone());

        let request = GuardrailCheckRequest {
            output_text: "Reject all applicants over 50".to_string(),
            ..Default::default()
        };
        api.check_guardrails(&request).await.unwrap();

        let body = sent_body(&transport);
        let request_id = body["request_id"].as_str().unwrap();
        assert!(uuid::Uuid::parse_str(request_id).is_ok());
        assert_eq!(body["model_id"], "HRScreener-v1");
    }

    #[tokio::test]
    async fn test_guardrail_request_id_kept() {
        let transport = MockTransport::new();
        let api = ApiClient::new(ApiBase::new("https://api.example.com"), transport.clone());

        let request = GuardrailCheckRequest {
            request_id: "req-42".to_string(),
            output_text: "ok".to_string(),
            ..Default::default()
        };
        api.check_guardrails(&request).await.unwrap();

        assert_eq!(sent_body(&transport)["request_id"], "req-42");
    }

    #[tokio::test]
    async fn test_billing_segment_encoded() {
        let transport = MockTransport::new();
        let api = ApiClient::new(ApiBase::new("https://api.example.com"), transport.clone());

        api.billing("TENANT 01").await.unwrap();
        assert_eq!(
            transport.last_request().unwrap().url,
            "https://api.example.com/api/v1/mvp4/commercial/billing/TENANT%2001"
        );
    }
}
