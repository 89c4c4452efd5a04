//! `gloo-net` transport

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};
use saro::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};
use web_sys::RequestMode;

/// Browser `fetch` transport
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

fn builder(request: &HttpRequest) -> RequestBuilder {
    let builder = match request.method {
        HttpMethod::Get => Request::get(&request.url),
        HttpMethod::Post => Request::post(&request.url),
        HttpMethod::Put => Request::put(&request.url),
    };

    let builder = if request.cross_origin {
        builder.mode(RequestMode::Cors)
    } else {
        builder
    };

    request
        .headers
        .iter()
        .fold(builder, |builder, (name, value)| builder.header(name, value))
}

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let builder = builder(&request);
        let prepared = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| TransportError(e.to_string()))?;

        let response = prepared
            .send()
            .await
            .map_err(|e| TransportError(format!("Network error: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError(format!("Failed to read response: {}", e)))?;

        Ok(HttpResponse { status, body })
    }
}
