//! Authentication gateway seam.
//!
//! DESIGN
//! ======
//! The session store and any standalone caller share this one trait, so the
//! request shape and base URL live in a single implementation
//! ([`crate::net::api::HttpAuthGateway`]) and tests can swap in a mock.

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use super::types::{Credentials, Registration, UserRecord};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-success status.
    #[error("server rejected request with status {status}")]
    Rejected { status: u16, body: Option<String> },
    /// The server answered 2xx but the body is not a user record.
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("auth api not available on server")]
    Unavailable,
}

impl GatewayError {
    /// Whether the server sent an error body along with the failure.
    pub fn has_response_body(&self) -> bool {
        matches!(self, Self::Rejected { body: Some(_), .. })
    }
}

/// Remote login/registration calls. One outbound request per call, no retry.
#[async_trait::async_trait(?Send)]
pub trait AuthGateway: Send + Sync {
    /// `POST {base}/login` with the given credentials.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] if the request fails, the server rejects it,
    /// or the response is not a user record.
    async fn login(&self, credentials: &Credentials) -> Result<UserRecord, GatewayError>;

    /// `POST {base}/register` with the new account's details.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`AuthGateway::login`].
    async fn register(&self, registration: &Registration) -> Result<UserRecord, GatewayError>;
}
