use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use super::RateLimiter;
use crate::error::{Error, Res};

pub const DEFAULT_API_URL: &str = "https://api.discogs.com";

/// The catalog rejects requests without a User-Agent.
pub const USER_AGENT: &str = concat!("toprated/", env!("CARGO_PKG_VERSION"));

/// Whether the caller's credential parameters are added to a request.
///
/// Pagination links handed out by the catalog already embed every query
/// parameter of the original request, so they are fetched with `Suppress`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Credentials {
    Attach,
    Suppress,
}

/// Immutable settings for [`HttpJsonClient`], built once at startup.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub token: String,
    pub user_agent: String,
    pub timeout: Duration,
}

impl ClientConfig {
    /// Uses the default User-Agent and a 30 second timeout. A trailing `/` on
    /// `base_url` is dropped.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
            user_agent: USER_AGENT.to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn credential_params(&self) -> [(&'static str, &str); 1] {
        [("token", self.token.as_str())]
    }
}

/// A GET-only JSON transport.
///
/// [`HttpJsonClient`] talks to the real catalog; tests plug in an in-memory
/// implementation.
#[async_trait]
pub trait JsonFetch: Send + Sync {
    /// Root URL the endpoint paths are appended to.
    fn base_url(&self) -> &str;

    /// GETs `url` with `params` and returns the decoded JSON body.
    async fn get_json(
        &self,
        url: &str,
        params: &[(String, String)],
        credentials: Credentials,
    ) -> Res<Value>;
}

/// [`JsonFetch`] over HTTP with `reqwest`.
///
/// Non-success statuses are [`Error::Transport`] failures, except a 4xx
/// response whose body is an error envelope (`{"message": ...}`): that body
/// is returned as-is so callers can treat it as a per-item notice.
pub struct HttpJsonClient {
    http: Client,
    config: ClientConfig,
}

impl HttpJsonClient {
    /// Builds the underlying `reqwest` client with the configured User-Agent
    /// and timeout.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Res<Self> {
        let http = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::configuration(format!("Cannot build HTTP client: {}", e)))?;

        Ok(Self { http, config })
    }
}

#[async_trait]
impl JsonFetch for HttpJsonClient {
    fn base_url(&self) -> &str {
        &self.config.base_url
    }

    async fn get_json(
        &self,
        url: &str,
        params: &[(String, String)],
        credentials: Credentials,
    ) -> Res<Value> {
        let transport = |source: reqwest::Error| Error::Transport {
            url: url.to_string(),
            source,
        };

        let mut request = self.http.get(url).query(params);
        if credentials == Credentials::Attach {
            request = request.query(&self.config.credential_params());
        }

        let response = request.send().await.map_err(transport)?;
        let status_error = response.error_for_status_ref().err();
        let is_client_error = response.status().is_client_error();
        let body = response.text().await.map_err(transport)?;

        match status_error {
            None => parse_json(url, &body),
            Some(error) if is_client_error => {
                error_envelope(&body).ok_or_else(|| transport(error))
            }
            Some(error) => Err(transport(error)),
        }
    }
}

/// The body as JSON if it is an error envelope: an object with a string `message`.
pub fn error_envelope(body: &str) -> Option<Value> {
    serde_json::from_str::<Value>(body)
        .ok()
        .filter(|value| value.get("message").is_some_and(Value::is_string))
}

/// Parses a response body, keeping the raw body on failure.
pub fn parse_json(url: &str, body: &str) -> Res<Value> {
    serde_json::from_str(body).map_err(|_| Error::malformed(url, body))
}

/// A [`JsonFetch`] paired with the rate limiter every request must pass.
///
/// Stages build their URLs and parameters first and only then call
/// [`Discogs::get_json`], so the limiter wraps nothing but the network call.
pub struct Discogs<F: JsonFetch> {
    fetcher: F,
    limiter: RateLimiter,
}

impl<F: JsonFetch> Discogs<F> {
    pub fn new(fetcher: F, limiter: RateLimiter) -> Self {
        Self { fetcher, limiter }
    }

    pub fn base_url(&self) -> &str {
        self.fetcher.base_url()
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub async fn get_json(
        &mut self,
        url: &str,
        params: &[(String, String)],
        credentials: Credentials,
    ) -> Res<Value> {
        self.limiter.throttle().await;
        self.fetcher.get_json(url, params, credentials).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_trims_trailing_slash() {
        let config = ClientConfig::new("https://api.discogs.com/", "secret");
        assert_eq!(config.base_url, "https://api.discogs.com");
        assert_eq!(config.credential_params(), [("token", "secret")]);
    }

    #[test]
    fn user_agent_names_the_tool() {
        assert!(USER_AGENT.starts_with("toprated/"));
    }

    #[test]
    fn error_envelope_requires_message_string() {
        assert!(error_envelope(r#"{"message": "Release not found."}"#).is_some());
        assert!(error_envelope(r#"{"message": 404}"#).is_none());
        assert!(error_envelope(r#"{"id": 1}"#).is_none());
        assert!(error_envelope("<html>Not Found</html>").is_none());
    }

    #[test]
    fn parse_json_keeps_body_on_failure() {
        let err = parse_json("https://api.test/x", "<html>busy</html>").unwrap_err();
        match err {
            Error::MalformedResponse { url, body } => {
                assert_eq!(url, "https://api.test/x");
                assert_eq!(body, "<html>busy</html>");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
