use super::*;

#[test]
fn rejected_with_body_has_response_body() {
    let err = GatewayError::Rejected { status: 401, body: Some(r#"{"error":"bad"}"#.to_owned()) };
    assert!(err.has_response_body());
}

#[test]
fn rejected_without_body_has_no_response_body() {
    let err = GatewayError::Rejected { status: 502, body: None };
    assert!(!err.has_response_body());
}

#[test]
fn transport_and_decode_have_no_response_body() {
    assert!(!GatewayError::Transport("offline".to_owned()).has_response_body());
    assert!(!GatewayError::Decode("missing field `id`".to_owned()).has_response_body());
    assert!(!GatewayError::Unavailable.has_response_body());
}

#[test]
fn rejected_display_includes_status() {
    let err = GatewayError::Rejected { status: 422, body: None };
    assert_eq!(err.to_string(), "server rejected request with status 422");
}
