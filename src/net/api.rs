//! REST API client for the review backend's auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`GatewayError::Unavailable`] since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure comes back as a `GatewayError` value and is logged here;
//! nothing panics, so the session store can turn it into a UI message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::gateway::{AuthGateway, GatewayError};
use super::types::{Credentials, Registration, Restaurant, UserRecord};
use crate::config::ApiConfig;

const LOGIN_PATH: &str = "login";
const REGISTER_PATH: &str = "register";
const RESTAURANTS_PATH: &str = "restaurants";

/// Turn a non-2xx status and its raw body into a gateway error.
#[cfg(any(test, feature = "hydrate"))]
fn rejected(status: u16, text: String) -> GatewayError {
    let body = if text.trim().is_empty() { None } else { Some(text) };
    GatewayError::Rejected { status, body }
}

#[cfg(any(test, feature = "hydrate"))]
fn decode<T: serde::de::DeserializeOwned>(text: &str) -> Result<T, GatewayError> {
    serde_json::from_str(text).map_err(|e| GatewayError::Decode(e.to_string()))
}

/// [`AuthGateway`] over HTTP against a single configured base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpAuthGateway {
    config: ApiConfig,
}

impl HttpAuthGateway {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn login_url(&self) -> String {
        self.config.endpoint(LOGIN_PATH)
    }

    pub fn register_url(&self) -> String {
        self.config.endpoint(REGISTER_PATH)
    }
}

#[cfg(feature = "hydrate")]
async fn post_json<B: serde::Serialize>(url: &str, body: &B) -> Result<UserRecord, GatewayError> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| GatewayError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| GatewayError::Transport(e.to_string()))?;
    let status = resp.status();
    let text = resp.text().await.unwrap_or_default();
    if !resp.ok() {
        return Err(rejected(status, text));
    }
    decode(&text)
}

#[async_trait::async_trait(?Send)]
impl AuthGateway for HttpAuthGateway {
    async fn login(&self, credentials: &Credentials) -> Result<UserRecord, GatewayError> {
        #[cfg(feature = "hydrate")]
        {
            let result = post_json(&self.login_url(), credentials).await;
            if let Err(e) = &result {
                log::error!("login error: {e}");
            }
            result
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(GatewayError::Unavailable)
        }
    }

    async fn register(&self, registration: &Registration) -> Result<UserRecord, GatewayError> {
        #[cfg(feature = "hydrate")]
        {
            let result = post_json(&self.register_url(), registration).await;
            if let Err(e) = &result {
                log::error!("registration error: {e}");
            }
            result
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = registration;
            Err(GatewayError::Unavailable)
        }
    }
}

/// Fetch the restaurant listing from `GET {base}/restaurants`.
///
/// # Errors
///
/// Returns a [`GatewayError`] if the request fails, the server rejects it, or
/// the body is not a list of restaurants.
pub async fn fetch_restaurants(config: &ApiConfig) -> Result<Vec<Restaurant>, GatewayError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&config.endpoint(RESTAURANTS_PATH))
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;
        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        if !resp.ok() {
            log::error!("restaurant listing failed with status {status}");
            return Err(rejected(status, text));
        }
        decode(&text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, RESTAURANTS_PATH);
        Err(GatewayError::Unavailable)
    }
}
