//! Transport seam
//!
//! The client core builds an [`HttpRequest`] and hands it to a [`Transport`].
//! `ReqwestTransport` is the native implementation; the browser crate
//! supplies its own on top of `gloo-net`.

use async_trait::async_trait;
use std::fmt;

/// HTTP methods used by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully built request
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    /// Absolute URL
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    /// Always set by the client core; browser transports map it to CORS mode.
    pub cross_origin: bool,
}

impl HttpRequest {
    /// Case-insensitive header lookup
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Raw response: status plus body text
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A transport-level failure
#[derive(Debug, Clone, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Sends requests over the wire
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[cfg(feature = "native")]
pub use native::ReqwestTransport;

#[cfg(feature = "native")]
mod native {
    use super::*;
    use crate::api::error::{ClientError, ClientResult};
    use reqwest::Client;
    use std::time::Duration;

    /// Native transport on top of `reqwest`
    #[derive(Clone)]
    pub struct ReqwestTransport {
        client: Client,
    }

    impl ReqwestTransport {
        pub fn new(timeout: Duration) -> ClientResult<Self> {
            let client = Client::builder()
                .timeout(timeout)
                .build()
                .map_err(|e| ClientError::Network(e.to_string()))?;

            Ok(Self { client })
        }
    }

    #[async_trait]
    impl Transport for ReqwestTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            let method = match request.method {
                HttpMethod::Get => reqwest::Method::GET,
                HttpMethod::Post => reqwest::Method::POST,
                HttpMethod::Put => reqwest::Method::PUT,
            };

            let mut builder = self.client.request(method, &request.url);
            for (name, value) in &request.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
            if let Some(body) = request.body {
                builder = builder.body(body);
            }

            let response = builder.send().await.map_err(|e| {
                if e.is_timeout() {
                    TransportError(format!("request timed out: {}", e))
                } else if e.is_connect() {
                    TransportError(format!("connection failed: {}", e))
                } else {
                    TransportError(e.to_string())
                }
            })?;

            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .map_err(|e| TransportError(e.to_string()))?;

            Ok(HttpResponse { status, body })
        }
    }
}

#[cfg(test)]
pub(crate) use mock::MockTransport;

#[cfg(test)]
mod mock {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct MockState {
        requests: Vec<HttpRequest>,
        queued: VecDeque<Result<HttpResponse, TransportError>>,
        routes: Vec<(String, HttpResponse)>,
    }

    /// Records every request; answers from per-path routes, then a FIFO
    /// queue, then `200 {}`.
    #[derive(Clone, Default)]
    pub struct MockTransport {
        state: Arc<Mutex<MockState>>,
    }

    impl MockTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn respond(&self, status: u16, body: &str) -> &Self {
            self.state.lock().unwrap().queued.push_back(Ok(HttpResponse {
                status,
                body: body.to_string(),
            }));
            self
        }

        pub fn fail(&self, message: &str) -> &Self {
            self.state
                .lock()
                .unwrap()
                .queued
                .push_back(Err(TransportError(message.to_string())));
            self
        }

        /// Answer any request whose URL path (without query) ends with `path`.
        pub fn route(&self, path: &str, status: u16, body: &str) -> &Self {
            self.state.lock().unwrap().routes.push((
                path.to_string(),
                HttpResponse {
                    status,
                    body: body.to_string(),
                },
            ));
            self
        }

        pub fn requests(&self) -> Vec<HttpRequest> {
            self.state.lock().unwrap().requests.clone()
        }

        pub fn request_count(&self) -> usize {
            self.state.lock().unwrap().requests.len()
        }

        pub fn last_request(&self) -> Option<HttpRequest> {
            self.state.lock().unwrap().requests.last().cloned()
        }
    }

    #[async_trait]
    impl Transport for MockTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            let mut state = self.state.lock().unwrap();
            let path = request.url.split('?').next().unwrap_or_default().to_string();
            state.requests.push(request);

            let routed = state.routes.iter().find(|(p, _)| path.ends_with(p.as_str()));
            if let Some((_, response)) = routed {
                return Ok(response.clone());
            }
            state.queued.pop_front().unwrap_or_else(|| {
                Ok(HttpResponse {
                    status: 200,
                    body: "{}".to_string(),
                })
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_names() {
        let names: Vec<String> = [HttpMethod::Get, HttpMethod::Post, HttpMethod::Put]
            .iter()
            .map(HttpMethod::to_string)
            .collect();
        assert_eq!(names, ["GET", "POST", "PUT"]);
    }
}
