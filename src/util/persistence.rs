//! Snapshot helper for writing a user record to durable storage.
//!
//! Writes under `"user"`. The session store keeps its own snapshot under
//! `"userData"` (see [`crate::state::auth`]); the two keys are independent.

#[cfg(test)]
#[path = "persistence_test.rs"]
mod persistence_test;

use serde::Serialize;

use super::storage::{KeyValueStorage, StorageError};

pub const USER_KEY: &str = "user";

/// Serialize `user` to JSON and store it under [`USER_KEY`], replacing any
/// previous value.
///
/// # Errors
///
/// Returns [`StorageError::Serialize`] if `user` cannot be encoded, or the
/// storage backend's error if the write is rejected.
pub fn store_user<T: Serialize>(storage: &dyn KeyValueStorage, user: &T) -> Result<(), StorageError> {
    let raw = serde_json::to_string(user).map_err(|e| StorageError::Serialize(e.to_string()))?;
    storage.set_item(USER_KEY, &raw)
}
