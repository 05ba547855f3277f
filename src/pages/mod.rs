//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and reads shared state from
//! context. Form parsing lives in plain functions next to each page.

pub mod contact;
pub mod home;
pub mod profile;
pub mod restaurant_review;
pub mod restaurants;
