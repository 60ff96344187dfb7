//! Wiremock-backed stand-in for the REST API.

use std::time::Duration;

use serde_json::{json, Value};
use wiremock::{
    matchers::{body_partial_json, header, method, path, query_param},
    Mock, MockServer, Request, ResponseTemplate,
};

/// Wraps `data` in a successful response envelope.
pub fn envelope(data: Value) -> Value {
    json!({ "status": true, "message": "Request successful", "data": data })
}

/// Mock API server.
pub struct ApiMock {
    server: MockServer,
}

impl ApiMock {
    /// Starts a mock server on a random port.
    pub async fn start() -> Self {
        Self { server: MockServer::start().await }
    }

    /// Base URL to configure the client with.
    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Underlying wiremock server, for custom mocks.
    pub fn server(&self) -> &MockServer {
        &self.server
    }

    /// Mounts `endpoint`.
    pub async fn mock(&self, endpoint: MockEndpoint) {
        let mut response = ResponseTemplate::new(endpoint.status).set_body_json(endpoint.response);
        if let Some(delay) = endpoint.delay {
            response = response.set_delay(delay);
        }

        let mut mock = Mock::given(method(endpoint.method.as_str())).and(path(endpoint.path));
        for (key, value) in endpoint.query {
            mock = mock.and(query_param(key, value));
        }
        if let Some(body) = endpoint.body {
            mock = mock.and(body_partial_json(body));
        }
        if let Some(token) = endpoint.bearer {
            mock = mock.and(header("authorization", format!("Bearer {token}").as_str()));
        }

        let mut mock = mock.respond_with(response);
        if let Some(calls) = endpoint.expected_calls {
            mock = mock.expect(calls);
        }
        mock.mount(&self.server).await;
    }

    /// Requests received so far.
    pub async fn received_requests(&self) -> Vec<Request> {
        self.server.received_requests().await.unwrap_or_default()
    }

    /// Asserts that exactly `expected` requests were received.
    pub async fn assert_request_count(&self, expected: usize) {
        let requests = self.received_requests().await;
        assert_eq!(
            requests.len(),
            expected,
            "Expected {} requests, received {}",
            expected,
            requests.len()
        );
    }
}

/// One mocked route and its response.
#[derive(Debug, Clone)]
pub struct MockEndpoint {
    method: String,
    path: String,
    query: Vec<(String, String)>,
    body: Option<Value>,
    bearer: Option<String>,
    status: u16,
    response: Value,
    delay: Option<Duration>,
    expected_calls: Option<u64>,
}

impl MockEndpoint {
    /// Route answering 200 with `data` in a successful envelope.
    pub fn ok(method: &str, path: impl Into<String>, data: Value) -> Self {
        Self::raw(method, path, 200, envelope(data))
    }

    /// Route answering 200 with a paginated envelope.
    pub fn ok_paginated(method: &str, path: impl Into<String>, data: Value, total: u64) -> Self {
        let mut body = envelope(data);
        body["meta"] =
            json!({ "total": total, "skipped": 0, "perPage": 50, "page": 1, "pageCount": 1 });
        Self::raw(method, path, 200, body)
    }

    /// Route answering `status` with a failed envelope.
    pub fn error(method: &str, path: impl Into<String>, status: u16, message: &str) -> Self {
        Self::raw(method, path, status, json!({ "status": false, "message": message }))
    }

    /// Route answering `status` with `body` as is.
    pub fn raw(method: &str, path: impl Into<String>, status: u16, body: Value) -> Self {
        Self {
            method: method.to_ascii_uppercase(),
            path: path.into(),
            query: Vec::new(),
            body: None,
            bearer: None,
            status,
            response: body,
            delay: None,
            expected_calls: None,
        }
    }

    /// Matches only requests carrying this query parameter.
    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Matches only requests whose JSON body contains `body`.
    #[must_use]
    pub fn with_json_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Matches only requests authorized with `token`.
    #[must_use]
    pub fn with_bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer = Some(token.into());
        self
    }

    /// Delays the response.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Verifies, when the server is dropped, that the route was called
    /// exactly `calls` times.
    #[must_use]
    pub fn expect_calls(mut self, calls: u64) -> Self {
        self.expected_calls = Some(calls);
        self
    }
}
