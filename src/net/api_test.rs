use super::*;

#[test]
fn endpoints_use_configured_base_url() {
    let gateway = HttpAuthGateway::new(ApiConfig::from_base_url("https://api.example.test/v1/").unwrap());
    assert_eq!(gateway.login_url(), "https://api.example.test/v1/login");
    assert_eq!(gateway.register_url(), "https://api.example.test/v1/register");
}

#[test]
fn default_gateway_targets_local_api() {
    let gateway = HttpAuthGateway::new(ApiConfig::default());
    assert_eq!(gateway.login_url(), "http://localhost:8000/api/login");
}

#[test]
fn rejected_keeps_non_empty_body() {
    let err = rejected(401, r#"{"message":"invalid"}"#.to_owned());
    assert_eq!(
        err,
        GatewayError::Rejected { status: 401, body: Some(r#"{"message":"invalid"}"#.to_owned()) }
    );
    assert!(err.has_response_body());
}

#[test]
fn rejected_drops_blank_body() {
    let err = rejected(500, "  \n".to_owned());
    assert_eq!(err, GatewayError::Rejected { status: 500, body: None });
}

#[test]
fn decode_parses_user_record() {
    let user: UserRecord = decode(r#"{"id":1,"name":"A"}"#).unwrap();
    assert_eq!(user, UserRecord::new(1).with_field("name", "A"));
}

#[test]
fn decode_reports_bad_body() {
    assert!(matches!(decode::<UserRecord>("<html>"), Err(GatewayError::Decode(_))));
    assert!(matches!(decode::<UserRecord>(r#"{"name":"no id"}"#), Err(GatewayError::Decode(_))));
}

#[test]
fn decode_parses_restaurant_list() {
    let list: Vec<Restaurant> = decode(r#"[{"id":1,"name":"Casa Lola"},{"id":"r2"}]"#).unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].name(), Some("Casa Lola"));
    assert_eq!(list[1].id.to_string(), "r2");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_outside_browser() {
    let gateway = HttpAuthGateway::new(ApiConfig::default());
    let creds = Credentials { email: "a@b.co".to_owned(), password: "longenough1".to_owned() };
    let result = futures::executor::block_on(gateway.login(&creds));
    assert_eq!(result, Err(GatewayError::Unavailable));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn restaurant_listing_is_unavailable_outside_browser() {
    let result = futures::executor::block_on(fetch_restaurants(&ApiConfig::default()));
    assert_eq!(result, Err(GatewayError::Unavailable));
}
