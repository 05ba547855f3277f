use super::*;

// =============================================================================
// ApiConfig::from_env — env manipulation requires unsafe in edition 2024.
// Only one test in the crate touches RESTO_API_URL.
// =============================================================================

/// # Safety
/// Caller must be the only code reading or writing `RESTO_API_URL`.
unsafe fn clear_api_env() {
    unsafe {
        std::env::remove_var(API_URL_ENV);
    }
}

#[test]
fn from_env_reads_override_then_rejects_garbage() {
    unsafe {
        clear_api_env();
        std::env::set_var(API_URL_ENV, "https://reviews.example.test/api/");
    }
    let cfg = ApiConfig::from_env().unwrap();
    assert_eq!(cfg.base_url, "https://reviews.example.test/api");

    unsafe { std::env::set_var(API_URL_ENV, "not a url") };
    let err = ApiConfig::from_env().unwrap_err();
    assert_eq!(err, ConfigError::InvalidBaseUrl("not a url".to_owned()));
    assert!(err.to_string().contains("RESTO_API_URL"));

    unsafe { clear_api_env() };
}

#[test]
fn default_points_at_local_api() {
    assert_eq!(ApiConfig::default().base_url, "http://localhost:8000/api");
}

#[test]
fn from_base_url_trims_trailing_slashes() {
    let cfg = ApiConfig::from_base_url("http://localhost:8000/api//").unwrap();
    assert_eq!(cfg.base_url, "http://localhost:8000/api");
}

#[test]
fn from_base_url_requires_host() {
    assert!(ApiConfig::from_base_url("").is_err());
    assert!(ApiConfig::from_base_url("https://").is_err());
    assert!(ApiConfig::from_base_url("ftp://example.test").is_err());
}

#[test]
fn endpoint_joins_with_single_slash() {
    let cfg = ApiConfig::default();
    assert_eq!(cfg.endpoint("login"), "http://localhost:8000/api/login");
    assert_eq!(cfg.endpoint("/register"), "http://localhost:8000/api/register");
}
