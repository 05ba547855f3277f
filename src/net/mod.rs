//! Networking modules for the review API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `gateway` defines the auth seam the session depends on, `api` is its HTTP
//! implementation, and `types` defines the shared wire schema.

pub mod api;
pub mod gateway;
pub mod types;
