//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthState` is the plain session model with its transitions; `Session` is
//! the handle the app constructs once, provides through context, and pages
//! call into. The handle owns the gateway and the storage seam, so the
//! transitions themselves stay synchronous and testable.
//!
//! ERROR HANDLING
//! ==============
//! Actions never panic and never leak a raw transport error to the UI: a
//! failed login/register sets `errors.message` and returns `Err(AuthError)`
//! whose `Display` is that same message.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::net::gateway::{AuthGateway, GatewayError};
use crate::net::types::{Credentials, Registration, UserRecord};
use crate::util::storage::{KeyValueStorage, StorageError};

/// Storage key for the session snapshot.
pub const SESSION_KEY: &str = "userData";

pub const LOGIN_REJECTED_MESSAGE: &str = "Error, Incorrect email or password";
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please try again.";
pub const REGISTER_REJECTED_MESSAGE: &str = "Registration failed. Please try again later.";
pub const REGISTER_FAILED_MESSAGE: &str = "An error occurred during registration";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("{message}")]
    Gateway {
        message: String,
        #[source]
        source: GatewayError,
    },
    #[error("{message}")]
    Storage {
        message: String,
        #[source]
        source: StorageError,
    },
    #[error("session is no longer available")]
    Disposed,
}

/// Error messages from the last auth action.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthErrors {
    pub message: Option<String>,
}

impl AuthErrors {
    pub fn is_empty(&self) -> bool {
        self.message.is_none()
    }
}

/// What [`AuthState::check_local_storage`] found.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// No snapshot stored; nothing changed.
    Empty,
    /// Snapshot parsed and loaded into memory.
    Restored,
    /// Snapshot was corrupt and has been removed; memory untouched.
    Discarded,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AuthAction {
    Login,
    Register,
}

impl AuthAction {
    fn failure_message(self, err: &GatewayError) -> &'static str {
        if err.has_response_body() {
            match self {
                Self::Login => LOGIN_REJECTED_MESSAGE,
                Self::Register => REGISTER_REJECTED_MESSAGE,
            }
        } else {
            self.fallback_message()
        }
    }

    fn fallback_message(self) -> &'static str {
        match self {
            Self::Login => LOGIN_FAILED_MESSAGE,
            Self::Register => REGISTER_FAILED_MESSAGE,
        }
    }
}

/// Authentication state: current user, logged-in flag, last error.
///
/// `logged` is true exactly when `user_data` is present, except after a
/// corrupt snapshot was discarded on restore, which leaves memory as it was.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user_data: Option<UserRecord>,
    pub logged: bool,
    pub errors: AuthErrors,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.logged
    }

    pub fn user(&self) -> Option<&UserRecord> {
        self.user_data.as_ref()
    }

    pub fn errors(&self) -> &AuthErrors {
        &self.errors
    }

    /// Apply the outcome of a login request.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Gateway`] when the request failed and
    /// [`AuthError::Storage`] when the session snapshot could not be written.
    pub fn apply_login(
        &mut self,
        result: Result<UserRecord, GatewayError>,
        storage: &dyn KeyValueStorage,
    ) -> Result<UserRecord, AuthError> {
        self.apply_auth_result(AuthAction::Login, result, storage)
    }

    /// Apply the outcome of a registration request.
    ///
    /// # Errors
    ///
    /// Same as [`AuthState::apply_login`], with registration messages.
    pub fn apply_register(
        &mut self,
        result: Result<UserRecord, GatewayError>,
        storage: &dyn KeyValueStorage,
    ) -> Result<UserRecord, AuthError> {
        self.apply_auth_result(AuthAction::Register, result, storage)
    }

    fn apply_auth_result(
        &mut self,
        action: AuthAction,
        result: Result<UserRecord, GatewayError>,
        storage: &dyn KeyValueStorage,
    ) -> Result<UserRecord, AuthError> {
        let user = match result {
            Ok(user) => user,
            Err(source) => {
                let message = action.failure_message(&source).to_owned();
                self.errors.message = Some(message.clone());
                return Err(AuthError::Gateway { message, source });
            }
        };

        // Snapshot first so a rejected write leaves memory untouched.
        if let Err(source) = write_snapshot(storage, &user) {
            log::warn!("session snapshot not saved: {source}");
            let message = action.fallback_message().to_owned();
            self.errors.message = Some(message.clone());
            return Err(AuthError::Storage { message, source });
        }

        log::info!("session started for user {}", user.id);
        self.user_data = Some(user.clone());
        self.logged = true;
        self.errors = AuthErrors::default();
        Ok(user)
    }

    /// Drop the session in memory and in storage. Always succeeds.
    pub fn logout(&mut self, storage: &dyn KeyValueStorage) {
        self.user_data = None;
        self.logged = false;
        self.errors = AuthErrors::default();
        if let Err(e) = storage.remove_item(SESSION_KEY) {
            log::warn!("session snapshot not removed: {e}");
        }
    }

    pub fn clear_errors(&mut self) {
        self.errors = AuthErrors::default();
    }

    /// Restore a session saved by a previous login/register.
    ///
    /// A corrupt snapshot is deleted without touching the in-memory state.
    pub fn check_local_storage(&mut self, storage: &dyn KeyValueStorage) -> RestoreOutcome {
        let raw = match storage.get_item(SESSION_KEY) {
            Ok(Some(raw)) if !raw.is_empty() => raw,
            Ok(_) => return RestoreOutcome::Empty,
            Err(e) => {
                log::warn!("session snapshot not readable: {e}");
                return RestoreOutcome::Empty;
            }
        };

        match serde_json::from_str::<UserRecord>(&raw) {
            Ok(user) => {
                log::debug!("session restored for user {}", user.id);
                self.user_data = Some(user);
                self.logged = true;
                RestoreOutcome::Restored
            }
            Err(e) => {
                log::warn!("discarding corrupt session snapshot: {e}");
                if let Err(e) = storage.remove_item(SESSION_KEY) {
                    log::warn!("corrupt session snapshot not removed: {e}");
                }
                RestoreOutcome::Discarded
            }
        }
    }
}

fn write_snapshot(storage: &dyn KeyValueStorage, user: &UserRecord) -> Result<(), StorageError> {
    let raw = serde_json::to_string(user).map_err(|e| StorageError::Serialize(e.to_string()))?;
    storage.set_item(SESSION_KEY, &raw)
}

/// Session store handle shared through Leptos context.
///
/// Construct once at startup, call [`Session::check_local_storage`] once,
/// and hand clones to whatever needs auth. Concurrent calls are not
/// de-duplicated; whichever request settles last writes the state.
#[derive(Clone)]
pub struct Session {
    state: RwSignal<AuthState>,
    gateway: Arc<dyn AuthGateway>,
    storage: Arc<dyn KeyValueStorage>,
}

impl Session {
    pub fn new(gateway: Arc<dyn AuthGateway>, storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { state: RwSignal::new(AuthState::default()), gateway, storage }
    }

    /// Reactive view of the session for components.
    pub fn state(&self) -> RwSignal<AuthState> {
        self.state
    }

    /// Storage the session persists to.
    pub fn storage(&self) -> &dyn KeyValueStorage {
        self.storage.as_ref()
    }

    /// Log in against the API and record the session.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] carrying the message also stored in
    /// `errors.message`.
    pub async fn login(&self, credentials: Credentials) -> Result<UserRecord, AuthError> {
        let result = self.gateway.login(&credentials).await;
        let storage = self.storage.as_ref();
        self.state
            .try_update(|s| s.apply_login(result, storage))
            .unwrap_or(Err(AuthError::Disposed))
    }

    /// Create an account against the API and record the session.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] carrying the message also stored in
    /// `errors.message`.
    pub async fn register(&self, registration: Registration) -> Result<UserRecord, AuthError> {
        let result = self.gateway.register(&registration).await;
        let storage = self.storage.as_ref();
        self.state
            .try_update(|s| s.apply_register(result, storage))
            .unwrap_or(Err(AuthError::Disposed))
    }

    pub fn logout(&self) {
        let storage = self.storage.as_ref();
        self.state.update(|s| s.logout(storage));
    }

    pub fn clear_errors(&self) {
        self.state.update(AuthState::clear_errors);
    }

    pub fn check_local_storage(&self) -> RestoreOutcome {
        let storage = self.storage.as_ref();
        self.state
            .try_update(|s| s.check_local_storage(storage))
            .unwrap_or(RestoreOutcome::Empty)
    }
}
