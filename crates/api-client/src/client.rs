//! Main store client implementation

use crate::config::ClientConfig;
use crate::endpoints::SoundEffectsApi;
use crate::error::{ApiError, ApiResult, ErrorContext};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Method, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use sfx_core::rate_limit::RateLimiter;
use sfx_core::retry::{CircuitBreaker, CircuitBreakerConfig, CircuitState};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

/// Request correlation ID header
const X_REQUEST_ID: &str = "X-Request-ID";

/// API key header for Supabase
const APIKEY_HEADER: &str = "apikey";

/// PostgREST preference header
const PREFER_HEADER: &str = "Prefer";

/// Remote row store client with built-in resilience patterns
///
/// This client wraps `reqwest` and adds:
/// - Automatic retry with exponential backoff
/// - Circuit breaker to stop hammering a failing backend
/// - Per-table rate limiting
/// - Request correlation IDs for tracing
#[derive(Clone)]
pub struct StoreClient {
    inner: Client,
    config: Arc<ClientConfig>,
    circuit_breaker: Arc<CircuitBreaker>,
    rate_limiter: Arc<RateLimiter>,
}

impl StoreClient {
    /// Create a new client with specific configuration
    pub fn with_config(config: ClientConfig) -> ApiResult<Self> {
        config.validate()?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        default_headers.insert(USER_AGENT, HeaderValue::from_static("sfx-api-client/0.3"));

        if let Some(ref key) = config.anon_key {
            let apikey = HeaderValue::from_str(key)
                .map_err(|_| ApiError::config("anon key contains invalid header characters"))?;
            let bearer = HeaderValue::from_str(&format!("Bearer {key}"))
                .map_err(|_| ApiError::config("anon key contains invalid header characters"))?;
            default_headers.insert(APIKEY_HEADER, apikey);
            default_headers.insert(AUTHORIZATION, bearer);
        }

        let inner = Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers)
            .build()
            .map_err(ApiError::Request)?;

        let circuit_breaker = Arc::new(CircuitBreaker::new(CircuitBreakerConfig::default()));
        let rate_limiter = Arc::new(RateLimiter::new(config.rate_limit.clone()));

        Ok(Self {
            inner,
            config: Arc::new(config),
            circuit_breaker,
            rate_limiter,
        })
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get circuit breaker state
    #[must_use]
    pub fn circuit_state(&self) -> CircuitState {
        self.circuit_breaker.state()
    }

    /// Reset the circuit breaker
    pub fn reset_circuit(&self) {
        self.circuit_breaker.reset();
    }

    /// Access the sound-effects table
    #[must_use]
    pub fn sound_effects(&self) -> SoundEffectsApi {
        SoundEffectsApi::new(self.clone())
    }

    /// Build a URL on the configured table with query parameters
    pub fn table_url(&self, params: &[(&str, &str)]) -> ApiResult<Url> {
        let base = self.config.table_url();
        Url::parse_with_params(&base, params).map_err(|e| ApiError::InvalidUrl(format!("{base}: {e}")))
    }

    // -------------------------------------------------------------------------
    // HTTP methods with resilience
    // -------------------------------------------------------------------------

    /// Perform a GET request and decode the JSON body
    #[instrument(skip(self))]
    pub async fn get<T: DeserializeOwned>(&self, url: Url) -> ApiResult<T> {
        let body = self
            .request_url(Method::GET, &url, Option::<&()>::None, None)
            .await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Perform a POST request, ignoring the response body
    #[instrument(skip(self, body))]
    pub async fn post<B: Serialize>(&self, url: Url, body: &B, prefer: &str) -> ApiResult<()> {
        self.request_url(Method::POST, &url, Some(body), Some(prefer))
            .await
            .map(drop)
    }

    /// Perform a DELETE request
    #[instrument(skip(self))]
    pub async fn delete(&self, url: Url) -> ApiResult<()> {
        self.request_url(Method::DELETE, &url, Option::<&()>::None, None)
            .await
            .map(drop)
    }

    /// Execute a request with full resilience patterns, returning the body text
    async fn request_url<B: Serialize>(
        &self,
        method: Method,
        url: &Url,
        body: Option<&B>,
        prefer: Option<&str>,
    ) -> ApiResult<String> {
        let request_id = Uuid::new_v4().to_string();
        let rate_limit_key = extract_rate_limit_key(url.as_str());

        if !self.circuit_breaker.can_execute() {
            warn!(
                request_id = %request_id,
                url = %url,
                "Circuit breaker is open, rejecting request"
            );
            return Err(ApiError::CircuitOpen);
        }

        if !self.rate_limiter.try_acquire(&rate_limit_key) {
            warn!(request_id = %request_id, url = %url, "Rate limited");
            return Err(ApiError::RateLimited);
        }

        self.execute_with_retry(&request_id, method, url, body, prefer)
            .await
    }

    /// Execute request with retry logic
    async fn execute_with_retry<B: Serialize>(
        &self,
        request_id: &str,
        method: Method,
        url: &Url,
        body: Option<&B>,
        prefer: Option<&str>,
    ) -> ApiResult<String> {
        let retry_config = &self.config.retry;
        let mut last_error: Option<ApiError> = None;
        let context = ErrorContext {
            request_id: Some(request_id.to_string()),
            endpoint: extract_rate_limit_key(url.as_str()),
            method: method.to_string(),
        };

        for attempt in 0..retry_config.max_attempts {
            if attempt > 0 {
                let delay = retry_config.delay_for_attempt(attempt);
                debug!(
                    request_id = %request_id,
                    attempt = attempt,
                    delay_ms = delay.as_millis(),
                    "Retrying after delay"
                );
                tokio::time::sleep(delay).await;
            }

            let start = Instant::now();
            let result = self
                .execute_single_request(request_id, method.clone(), url, body, prefer)
                .await;
            let elapsed = start.elapsed();

            match result {
                Ok(value) => {
                    self.circuit_breaker.record_success();
                    debug!(
                        request = %context,
                        attempt = attempt + 1,
                        elapsed_ms = elapsed.as_millis(),
                        "Request succeeded"
                    );
                    return Ok(value);
                }
                Err(e) => {
                    // 4xx means the backend is healthy; only count real outages
                    if !e.is_client_error() {
                        self.circuit_breaker.record_failure();
                    }

                    if e.is_retryable() && attempt + 1 < retry_config.max_attempts {
                        debug!(
                            request = %context,
                            attempt = attempt + 1,
                            error = %e,
                            "Request failed, will retry"
                        );
                        last_error = Some(e);
                    } else {
                        debug!(
                            request = %context,
                            attempt = attempt + 1,
                            error = %e,
                            "Request failed, not retrying"
                        );
                        return Err(e);
                    }
                }
            }
        }

        Err(ApiError::RetriesExhausted {
            attempts: retry_config.max_attempts,
            last_error: last_error.map_or_else(|| "Unknown error".to_string(), |e| e.to_string()),
        })
    }

    /// Execute a single request without retry
    async fn execute_single_request<B: Serialize>(
        &self,
        request_id: &str,
        method: Method,
        url: &Url,
        body: Option<&B>,
        prefer: Option<&str>,
    ) -> ApiResult<String> {
        let mut request = self
            .inner
            .request(method, url.clone())
            .header(X_REQUEST_ID, request_id);

        if let Some(prefer) = prefer {
            request = request.header(PREFER_HEADER, prefer);
        }

        if let Some(b) = body {
            request = request.json(b);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Turn non-2xx statuses into errors and return the body text
    async fn handle_response(response: Response) -> ApiResult<String> {
        let status = response.status();

        if status.is_success() {
            response.text().await.map_err(ApiError::Request)
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(ApiError::api_response(status.as_u16(), message))
        }
    }
}

/// Extract a rate limit key from a URL (the last path segment, i.e. the table)
fn extract_rate_limit_key(url: &str) -> String {
    url.split('?')
        .next()
        .and_then(|s| s.split("://").nth(1))
        .and_then(|s| s.trim_end_matches('/').rsplit('/').next())
        .filter(|segment| !segment.is_empty())
        .unwrap_or("default")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sfx_core::rate_limit::RateLimitConfig;
    use std::time::Duration;

    #[test]
    fn test_extract_rate_limit_key() {
        assert_eq!(
            extract_rate_limit_key("https://abc.supabase.co/rest/v1/sound_effects?select=*"),
            "sound_effects"
        );
        assert_eq!(extract_rate_limit_key("http://localhost:54321/"), "localhost:54321");
        assert_eq!(extract_rate_limit_key("not a url"), "default");
    }

    #[test]
    fn test_client_creation() {
        let config = ClientConfig::development();
        let client = StoreClient::with_config(config);
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_rejects_invalid_config() {
        let config = ClientConfig::new("");
        assert!(StoreClient::with_config(config).is_err());
    }

    #[test]
    fn test_table_url_encodes_params() {
        let client = StoreClient::with_config(ClientConfig::new("https://abc.supabase.co")).unwrap();
        let url = client
            .table_url(&[("user_id", "eq.a b"), ("select", "*")])
            .unwrap();
        assert_eq!(url.path(), "/rest/v1/sound_effects");
        assert_eq!(url.query(), Some("user_id=eq.a+b&select=*"));
    }

    #[test]
    fn test_rate_limited_request_fails_fast() {
        let config = ClientConfig::new("http://127.0.0.1:9")
            .with_rate_limit(RateLimitConfig::strict(0, Duration::from_secs(60)));
        let client = StoreClient::with_config(config).unwrap();
        let url = client.table_url(&[]).unwrap();

        let result: ApiResult<serde_json::Value> = tokio_test::block_on(client.get(url));
        assert!(matches!(result, Err(ApiError::RateLimited)));
        assert_eq!(client.circuit_state(), CircuitState::Closed);
    }
}
