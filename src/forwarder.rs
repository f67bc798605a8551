// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Pass-through request forwarding
//!
//! The worker's functional core: claim every intercepted request, issue
//! it to the network unmodified, and resolve the claim with whatever the
//! network produced. No cache is read or written, nothing is retried,
//! and the forwarding path emits no log records.

use async_trait::async_trait;

use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig};
use crate::worker::{FetchEvent, FetchHandler, FetchOutcome, InstallEvent, InstallHandler};

/// Fetch handler that forwards every request to the network unmodified
///
/// The requester receives exactly the network's response; a network
/// failure (offline, DNS, timeout) propagates unchanged, with no
/// fallback response and no error translation.
pub struct PassThrough {
    client: HttpClient,
}

impl PassThrough {
    /// Create a forwarder with a default transparent client
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: HttpClient::new()?,
        })
    }

    /// Create a forwarder with a custom client configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        Ok(Self {
            client: HttpClient::with_config(config)?,
        })
    }

    /// Create a forwarder around an existing client
    pub fn with_client(client: HttpClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FetchHandler for PassThrough {
    async fn on_fetch(&self, event: &FetchEvent) -> Result<FetchOutcome> {
        let response = self.client.execute(event.request.clone()).await?;
        Ok(FetchOutcome::Response(response))
    }
}

/// Install handler that emits a single diagnostic log line
#[derive(Debug, Default, Clone, Copy)]
pub struct InstallLogger;

#[async_trait]
impl InstallHandler for InstallLogger {
    async fn on_install(&self, event: &InstallEvent) {
        tracing::info!(event_id = event.id, "worker installed");
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::http::Request;
    use crate::worker::{HandlerRegistry, Worker};

    async fn installed_worker() -> Worker {
        let registry = HandlerRegistry::new()
            .on_install(InstallLogger)
            .on_fetch(PassThrough::new().unwrap());
        let worker = Worker::new(registry).unwrap();
        worker.install().await.unwrap();
        worker
    }

    #[tokio::test]
    async fn test_pass_through_returns_live_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/index.html"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("<html>live</html>")
                    .insert_header("x-served-by", "origin"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let worker = installed_worker().await;
        let request = Request::get(format!("{}/index.html", server.uri())).unwrap();
        let response = worker.dispatch_fetch(request).await.unwrap();

        assert_eq!(response.status_code(), 200);
        assert_eq!(response.text_lossy(), "<html>live</html>");
        assert_eq!(response.header("x-served-by"), Some("origin"));
    }

    #[tokio::test]
    async fn test_forwarded_request_is_unmodified() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/data"))
            .and(header("content-type", "application/json"))
            .and(header("x-correlation", "abc123"))
            .and(body_string(r#"{"live":true}"#))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        let worker = installed_worker().await;
        let request = Request::post(format!("{}/api/data", server.uri()))
            .unwrap()
            .header("content-type", "application/json")
            .header("x-correlation", "abc123")
            .body(r#"{"live":true}"#);

        let response = worker.dispatch_fetch(request).await.unwrap();
        assert_eq!(response.status_code(), 201);
    }

    #[tokio::test]
    async fn test_no_cache_between_dispatches() {
        let server = MockServer::start().await;
        // Two identical dispatches must produce two wire requests.
        Mock::given(method("GET"))
            .and(path("/cacheable"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("fresh")
                    .insert_header("cache-control", "max-age=3600"),
            )
            .expect(2)
            .mount(&server)
            .await;

        let worker = installed_worker().await;
        for _ in 0..2 {
            let request = Request::get(format!("{}/cacheable", server.uri())).unwrap();
            let response = worker.dispatch_fetch(request).await.unwrap();
            assert_eq!(response.text_lossy(), "fresh");
        }

        server.verify().await;
    }

    #[tokio::test]
    async fn test_network_failure_propagates_unchanged() {
        let server = MockServer::start().await;
        let dead_uri = format!("{}/api/data", server.uri());
        drop(server);

        let worker = installed_worker().await;
        let request = Request::get(dead_uri).unwrap();
        let err = worker.dispatch_fetch(request).await.unwrap_err();

        assert!(err.is_network());
        assert!(err.status_code().is_none());
    }

    #[tokio::test]
    async fn test_error_status_is_a_response_not_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_string("not here"))
            .expect(1)
            .mount(&server)
            .await;

        let worker = installed_worker().await;
        let request = Request::get(format!("{}/missing", server.uri())).unwrap();
        let response = worker.dispatch_fetch(request).await.unwrap();

        assert!(response.is_client_error());
        assert_eq!(response.text_lossy(), "not here");
    }

    #[tokio::test]
    async fn test_install_logger_terminates() {
        let worker = installed_worker().await;
        assert!(worker.is_installed());
    }
}
