//! HTTP transport for the proof API

use reqwest::header::{HeaderMap, COOKIE, SET_COOKIE};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use pob_core::SessionCookies;

use crate::config::ApiConfig;
use crate::error::{ClientError, Result};

pub const PRE_LOGIN: &str = "pre-login";
pub const LOGIN: &str = "login";
pub const PROVERS: &str = "provers";
pub const CHALLENGE_REQUEST: &str = "challenge-request-dcl";
pub const CHALLENGE_STATUS: &str = "challenge-status-dcl";

/// Decoded response of a successful call
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// `Set-Cookie` values, in the order the server sent them
    pub cookies: SessionCookies,
    /// JSON body (`Null` when empty, a string when not JSON)
    pub body: Value,
}

/// HTTP client for the proof API
///
/// Every call is a single JSON `POST`. There is no cookie jar: credentials
/// are passed explicitly per call so only the intended cookies are sent.
#[derive(Debug, Clone)]
pub struct ProofApiClient {
    config: ApiConfig,
    client: reqwest::Client,
}

impl ProofApiClient {
    pub fn new(config: ApiConfig) -> Self {
        let client = reqwest::Client::new();
        Self { config, client }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// POST `body` to `endpoint`, optionally presenting a `Cookie` header
    pub async fn post<B>(&self, endpoint: &str, body: &B, cookie: Option<&str>) -> Result<ApiResponse>
    where
        B: Serialize + ?Sized,
    {
        let url = self.config.endpoint_url(endpoint);
        debug!("POST {}", url);

        let mut request = self.client.post(&url).json(body);
        if let Some(cookie) = cookie.filter(|c| !c.is_empty()) {
            request = request.header(COOKIE, cookie);
        }

        let resp = request.send().await?;
        let status = resp.status();
        let cookies = set_cookies(resp.headers());
        let text = resp.text().await?;
        debug!("{} -> {} ({} cookies)", endpoint, status, cookies.len());

        if !status.is_success() {
            let body: Option<Value> = serde_json::from_str(&text).ok();
            let payload = match &body {
                Some(json) => json.to_string(),
                None if text.is_empty() => status.to_string(),
                None => text,
            };
            return Err(ClientError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
                body,
                payload,
            });
        }

        // Non-JSON payloads are passed on as a string
        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(Value::String(text))
        };

        Ok(ApiResponse { cookies, body })
    }
}

/// `Set-Cookie` values of a response, in order
///
/// Values that are not visible ASCII cannot be forwarded and are skipped.
pub(crate) fn set_cookies(headers: &HeaderMap) -> SessionCookies {
    SessionCookies::new(
        headers
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|value| match value.to_str() {
                Ok(cookie) => Some(cookie.to_string()),
                Err(_) => {
                    debug!("Discarding unreadable Set-Cookie header: {:?}", value);
                    None
                }
            })
            .collect(),
    )
}
