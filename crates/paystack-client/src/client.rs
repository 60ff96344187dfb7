//! HTTP exchanger for the REST API.
//!
//! Builds authenticated requests, sends them with the configured timeout and
//! decodes the response envelope every endpoint shares:
//!
//! ```text
//! { "status": true, "message": "...", "data": <T>, "meta": { ... } }
//! ```
//!
//! `GET` and `DELETE` send parameters as a query string; `POST` and `PUT`
//! send them as a JSON body.

use std::time::{Duration, Instant};

use paystack_core::SecretKey;
use reqwest::{header, Method, RequestBuilder, Url};
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::{debug, info_span, warn, Instrument};

use crate::error::{ApiError, Result};

/// Production API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.paystack.co";

/// User agent sent unless configured otherwise.
pub const DEFAULT_USER_AGENT: &str = concat!("paystack-rust/", env!("CARGO_PKG_VERSION"));

/// Longest error body kept in an `ApiError` message.
const MAX_ERROR_BODY: usize = 1024;

/// Configuration for the HTTP exchanger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL requests are resolved against.
    pub base_url: String,
    /// Timeout for a whole request.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Decoded response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Always `true`; failed envelopes become [`ApiError::Api`].
    pub status: bool,
    /// Human-readable message from the service.
    pub message: String,
    /// Response payload.
    pub data: T,
    /// Pagination details on list endpoints.
    pub meta: Option<Meta>,
}

impl<T> ApiResponse<T> {
    /// Consumes the envelope, returning the payload.
    pub fn into_data(self) -> T {
        self.data
    }
}

/// Pagination details.
///
/// Some endpoints send counts as strings; both forms are accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    /// Total number of records.
    #[serde(default, deserialize_with = "lenient_u64")]
    pub total: Option<u64>,
    /// Records skipped before this page.
    #[serde(default, deserialize_with = "lenient_u64")]
    pub skipped: Option<u64>,
    /// Page size.
    #[serde(rename = "perPage", default, deserialize_with = "lenient_u64")]
    pub per_page: Option<u64>,
    /// Current page, 1-based.
    #[serde(default, deserialize_with = "lenient_u64")]
    pub page: Option<u64>,
    /// Number of pages.
    #[serde(rename = "pageCount", default, deserialize_with = "lenient_u64")]
    pub page_count: Option<u64>,
    /// Cursor of the next page on cursor-paginated endpoints.
    pub next: Option<String>,
    /// Cursor of the previous page on cursor-paginated endpoints.
    pub previous: Option<String>,
}

fn lenient_u64<'de, D>(deserializer: D) -> std::result::Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => s.parse().ok(),
        _ => None,
    })
}

#[derive(Deserialize)]
struct RawEnvelope {
    status: bool,
    #[serde(default)]
    message: String,
    #[serde(default)]
    data: Value,
    meta: Option<Meta>,
}

/// Authenticated HTTP client shared by all resource modules.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: Url,
    secret: SecretKey,
    config: ClientConfig,
}

impl HttpClient {
    /// Creates a client authenticating with `secret`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Configuration` if the base URL does not parse or
    /// the HTTP client cannot be built.
    pub fn new(secret: SecretKey, config: ClientConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            ApiError::configuration(format!("invalid base URL {}: {e}", config.base_url))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::configuration(format!(
                "base URL {} cannot carry a path",
                config.base_url
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| ApiError::configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, base_url, secret, config })
    }

    /// Creates a client with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Configuration` if the HTTP client cannot be built.
    pub fn with_defaults(secret: SecretKey) -> Result<Self> {
        Self::new(secret, ClientConfig::default())
    }

    /// Configuration in use.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Secret key requests are authorized with.
    pub fn secret(&self) -> &SecretKey {
        &self.secret
    }

    /// Resolves path segments against the base URL, percent-encoding each.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Configuration` if the base URL cannot carry a path.
    pub fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::configuration("base URL cannot carry a path"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Sends a `GET` without parameters.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn get<T: DeserializeOwned>(&self, path: &[&str]) -> Result<ApiResponse<T>> {
        let request = self.request(Method::GET, path)?;
        self.execute(Method::GET, path, request).await
    }

    /// Sends a `GET` with `query` encoded as a query string.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn get_with_query<Q, T>(&self, path: &[&str], query: &Q) -> Result<ApiResponse<T>>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(Method::GET, path)?.query(query);
        self.execute(Method::GET, path, request).await
    }

    /// Sends a `POST` with `body` as JSON.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn post<B, T>(&self, path: &[&str], body: &B) -> Result<ApiResponse<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(Method::POST, path)?.json(body);
        self.execute(Method::POST, path, request).await
    }

    /// Sends a `PUT` with `body` as JSON.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn put<B, T>(&self, path: &[&str], body: &B) -> Result<ApiResponse<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(Method::PUT, path)?.json(body);
        self.execute(Method::PUT, path, request).await
    }

    /// Sends a `DELETE` without parameters.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn delete<T: DeserializeOwned>(&self, path: &[&str]) -> Result<ApiResponse<T>> {
        let request = self.request(Method::DELETE, path)?;
        self.execute(Method::DELETE, path, request).await
    }

    fn request(&self, method: Method, path: &[&str]) -> Result<RequestBuilder> {
        Ok(self
            .client
            .request(method, self.url(path)?)
            .bearer_auth(self.secret.expose())
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json"))
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &[&str],
        request: RequestBuilder,
    ) -> Result<ApiResponse<T>> {
        let span = info_span!("paystack_request", method = %method, path = %path.join("/"));

        async move {
            let start_time = Instant::now();

            let response = match request.send().await {
                Ok(response) => response,
                Err(e) => {
                    let duration = start_time.elapsed();
                    warn!(duration_ms = duration.as_millis(), "Request failed: {}", e);

                    if e.is_timeout() {
                        return Err(ApiError::timeout(self.config.timeout.as_secs()));
                    }
                    if e.is_connect() {
                        return Err(ApiError::network(format!("connection failed: {e}")));
                    }
                    return Err(ApiError::network(e.to_string()));
                },
            };

            let status = response.status().as_u16();
            let body = response.bytes().await.map_err(|e| {
                if e.is_timeout() {
                    ApiError::timeout(self.config.timeout.as_secs())
                } else {
                    ApiError::network(format!("failed to read response body: {e}"))
                }
            })?;

            debug!(
                status,
                duration_ms = start_time.elapsed().as_millis(),
                body_len = body.len(),
                "Received response"
            );

            let decoded = decode_envelope(status, &body);
            if let Err(e) = &decoded {
                warn!(status, error = %e, "Request rejected");
            }
            decoded
        }
        .instrument(span)
        .await
    }
}

/// Decodes a response body into an envelope carrying `T`.
///
/// # Errors
///
/// - `Api` for a non-2xx status or an envelope with `status: false`.
/// - `Decode` if the body is not an envelope or `data` does not match `T`.
pub fn decode_envelope<T: DeserializeOwned>(status: u16, body: &[u8]) -> Result<ApiResponse<T>> {
    if !(200..300).contains(&status) {
        return Err(ApiError::api(status, error_message(body)));
    }

    let envelope: RawEnvelope = serde_json::from_slice(body)
        .map_err(|e| ApiError::decode(format!("response is not an API envelope: {e}")))?;

    if !envelope.status {
        return Err(ApiError::api(status, envelope.message));
    }

    let data = serde_json::from_value(envelope.data)
        .map_err(|e| ApiError::decode(format!("data: {e}")))?;

    Ok(ApiResponse { status: true, message: envelope.message, data, meta: envelope.meta })
}

fn error_message(body: &[u8]) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: String,
    }

    if let Ok(ErrorBody { message }) = serde_json::from_slice(body) {
        return message;
    }

    let text = String::from_utf8_lossy(body);
    if text.len() > MAX_ERROR_BODY {
        let mut end = MAX_ERROR_BODY;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}... (truncated)", &text[..end])
    } else {
        text.into_owned()
    }
}
