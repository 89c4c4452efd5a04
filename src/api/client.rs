//! SARO REST API Client
//!
//! The single request core every endpoint method and page goes through.

use serde::Serialize;
use serde_json::Value;

use super::error::{ClientError, ClientResult};
use super::transport::{HttpMethod, HttpRequest, HttpResponse, Transport};
use crate::config::ApiBase;

/// Per-request options
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: HttpMethod,
    pub body: Option<String>,
    pub headers: Vec<(String, String)>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: HttpMethod::Get,
            body: None,
            headers: Vec::new(),
        }
    }
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn with_method(method: HttpMethod) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    /// Serialize `body` as the JSON request body
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> ClientResult<Self> {
        self.body = Some(serde_json::to_string(body)?);
        Ok(self)
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// SARO REST API client
pub struct ApiClient<T> {
    base: ApiBase,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    /// Create a client bound to a resolved base URL
    pub fn new(base: ApiBase, transport: T) -> Self {
        Self { base, transport }
    }

    pub fn base(&self) -> &ApiBase {
        &self.base
    }

    pub fn is_configured(&self) -> bool {
        self.base.is_configured()
    }

    /// Issue a request to `base + path` and decode the JSON body.
    ///
    /// Fails with [`ClientError::ConfigurationMissing`] before any I/O when
    /// the base URL is unset. Every failure is logged and returned.
    pub async fn request(&self, path: &str, options: RequestOptions) -> ClientResult<Value> {
        let result = self.execute(path, options).await;
        if let Err(e) = &result {
            tracing::error!(path = %path, error = %e, "API request failed");
        }
        result
    }

    pub async fn get(&self, path: &str) -> ClientResult<Value> {
        self.request(path, RequestOptions::get()).await
    }

    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ClientResult<Value> {
        let options = RequestOptions::with_method(HttpMethod::Post).json(body)?;
        self.request(path, options).await
    }

    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ClientResult<Value> {
        let options = RequestOptions::with_method(HttpMethod::Put).json(body)?;
        self.request(path, options).await
    }

    async fn execute(&self, path: &str, options: RequestOptions) -> ClientResult<Value> {
        if !self.base.is_configured() {
            return Err(ClientError::ConfigurationMissing);
        }

        let url = self.base.url_for(path);
        let request = HttpRequest {
            method: options.method,
            url: url.clone(),
            headers: merge_headers(options.headers),
            body: options.body,
            cross_origin: true,
        };

        tracing::debug!(method = %request.method, url = %url, "Sending request");

        let response = self
            .transport
            .send(request)
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        decode_response(&url, response)
    }
}

#[cfg(feature = "native")]
impl ApiClient<super::transport::ReqwestTransport> {
    /// Build a native client from loaded configuration.
    ///
    /// `api_url_override` is the `--api-url` flag, if any.
    pub fn from_config(
        config: &crate::config::Config,
        api_url_override: Option<&str>,
    ) -> ClientResult<Self> {
        let base = config.resolve_api_base(api_url_override);
        let transport = super::transport::ReqwestTransport::new(std::time::Duration::from_secs(
            config.api.request_timeout_secs,
        ))?;
        Ok(Self::new(base, transport))
    }
}

/// `Content-Type: application/json` first; caller headers replace entries
/// with the same name.
fn merge_headers(extra: Vec<(String, String)>) -> Vec<(String, String)> {
    let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
    for (name, value) in extra {
        match headers.iter_mut().find(|(key, _)| key.eq_ignore_ascii_case(&name)) {
            Some(existing) => *existing = (name, value),
            None => headers.push((name, value)),
        }
    }
    headers
}

fn decode_response(url: &str, response: HttpResponse) -> ClientResult<Value> {
    let text = response.body.trim();

    if text.starts_with('<') {
        return Err(ClientError::UnexpectedHtmlResponse {
            url: url.to_string(),
        });
    }

    let parsed = if text.is_empty() {
        Ok(Value::Null)
    } else {
        serde_json::from_str::<Value>(text)
    };

    if !response.is_success() {
        let message = parsed
            .ok()
            .as_ref()
            .and_then(detail_message)
            .unwrap_or_else(|| format!("HTTP {}", response.status));
        return Err(ClientError::Api {
            status: response.status,
            message,
        });
    }

    parsed.map_err(|e| ClientError::InvalidJson {
        url: url.to_string(),
        message: e.to_string(),
    })
}

fn detail_message(body: &Value) -> Option<String> {
    match body.get("detail")? {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Array(items) if items.is_empty() => None,
        Value::Object(map) if map.is_empty() => None,
        other => Some(other.to_string()),
    }
}

/// Build `path?key=value&...`, percent-encoding values and skipping empty ones.
pub fn with_query(path: &str, params: &[(&str, &str)]) -> String {
    let query: Vec<String> = params
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect();

    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query.join("&"))
    }
}

/// Percent-encode a single path segment
pub fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::transport::MockTransport;
    use serde_json::json;

    fn client(base: &str, transport: &MockTransport) -> ApiClient<MockTransport> {
        ApiClient::new(ApiBase::new(base), transport.clone())
    }

    #[tokio::test]
    async fn test_unset_base_issues_no_request() {
        let transport = MockTransport::new();
        let api = ApiClient::new(ApiBase::unset(), transport.clone());

        let err = api.get("/api/v1/dashboard").await.unwrap_err();
        assert!(matches!(err, ClientError::ConfigurationMissing));

        let err = api.post("/api/v1/mvp2/audit", &json!({})).await.unwrap_err();
        assert!(matches!(err, ClientError::ConfigurationMissing));
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_url_joining_with_trailing_slash() {
        let transport = MockTransport::new();
        let api = client("https://api.example.com/", &transport);

        api.get("/api/v1/health").await.unwrap();
        api.get("api/v1/health").await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].url, "https://api.example.com/api/v1/health");
        assert_eq!(requests[1].url, "https://api.example.com/api/v1/health");
    }

    #[tokio::test]
    async fn test_json_headers_and_cors_flag() {
        let transport = MockTransport::new();
        let api = client("https://api.example.com", &transport);

        let options = RequestOptions::with_method(HttpMethod::Post)
            .header("X-Tenant", "acme")
            .header("content-type", "application/merge-patch+json");
        api.request("/api/v1/mvp3/tenants", options).await.unwrap();

        let request = transport.last_request().unwrap();
        assert!(request.cross_origin);
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.header("Content-Type"), Some("application/merge-patch+json"));
        assert_eq!(request.header("x-tenant"), Some("acme"));
        assert_eq!(request.headers.len(), 2);
    }

    #[tokio::test]
    async fn test_post_serializes_body() {
        let transport = MockTransport::new();
        let api = client("https://api.example.com", &transport);

        api.post("/api/v1/onboard", &json!({"company_name": "Acme"}))
            .await
            .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.header("content-type"), Some("application/json"));
        let body: Value = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["company_name"], "Acme");
    }

    #[tokio::test]
    async fn test_html_body_rejected_regardless_of_status() {
        let transport = MockTransport::new();
        transport
            .respond(200, "  <!doctype html><html></html>")
            .respond(404, "<html>Not Found</html>");
        let api = client("https://app.example.com", &transport);

        for _ in 0..2 {
            match api.get("/api/v1/dashboard").await.unwrap_err() {
                ClientError::UnexpectedHtmlResponse { url } => {
                    assert_eq!(url, "https://app.example.com/api/v1/dashboard")
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn test_detail_used_verbatim() {
        let transport = MockTransport::new();
        transport.respond(422, r#"{"detail": "model_name is required"}"#);
        let api = client("https://api.example.com", &transport);

        let err = api.post("/api/v1/mvp2/audit", &json!({})).await.unwrap_err();
        assert_eq!(err.to_string(), "model_name is required");
        assert_eq!(err.status(), Some(422));
    }

    #[tokio::test]
    async fn test_status_fallback_message() {
        let transport = MockTransport::new();
        transport
            .respond(500, r#"{"error": "boom"}"#)
            .respond(503, "")
            .respond(502, "Bad Gateway");
        let api = client("https://api.example.com", &transport);

        assert_eq!(api.get("/a").await.unwrap_err().to_string(), "HTTP 500");
        assert_eq!(api.get("/b").await.unwrap_err().to_string(), "HTTP 503");
        assert_eq!(api.get("/c").await.unwrap_err().to_string(), "HTTP 502");
    }

    #[tokio::test]
    async fn test_structured_detail_rendered_as_json() {
        let transport = MockTransport::new();
        transport.respond(422, r#"{"detail": [{"loc": ["body"], "msg": "field required"}]}"#);
        let api = client("https://api.example.com", &transport);

        let message = api.get("/x").await.unwrap_err().to_string();
        assert_eq!(message, r#"[{"loc":["body"],"msg":"field required"}]"#);
    }

    #[tokio::test]
    async fn test_success_decoding() {
        let transport = MockTransport::new();
        transport
            .respond(200, r#"{"status": "ok"}"#)
            .respond(204, "")
            .respond(200, "not json");
        let api = client("https://api.example.com", &transport);

        assert_eq!(api.get("/a").await.unwrap(), json!({"status": "ok"}));
        assert_eq!(api.get("/b").await.unwrap(), Value::Null);
        assert!(matches!(
            api.get("/c").await.unwrap_err(),
            ClientError::InvalidJson { .. }
        ));
    }

    #[tokio::test]
    async fn test_transport_failure_is_network_error() {
        let transport = MockTransport::new();
        transport.fail("connection refused");
        let api = client("https://api.example.com", &transport);

        let err = api.get("/api/v1/health").await.unwrap_err();
        assert!(matches!(err, ClientError::Network(ref m) if m.contains("connection refused")));
    }

    #[test]
    fn test_with_query_encodes_and_skips_empty() {
        assert_eq!(
            with_query("/api/v1/policies", &[("jurisdiction", "EU"), ("status", "")]),
            "/api/v1/policies?jurisdiction=EU"
        );
        assert_eq!(
            with_query("/api/v1/mvp1/forecast", &[("jurisdiction", "EU & UK")]),
            "/api/v1/mvp1/forecast?jurisdiction=EU%20%26%20UK"
        );
        assert_eq!(with_query("/api/v1/feed-log", &[]), "/api/v1/feed-log");
        assert_eq!(segment("a/b c"), "a%2Fb%20c");
    }
}
