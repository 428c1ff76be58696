use serde_json::json;

use super::*;

#[test]
fn response_error_exposes_status_and_payload() {
    let err = FetchError::Response { status: 422, data: json!({"message": "bad"}) };
    assert_eq!(err.status(), Some(422));
    assert_eq!(err.data(), Some(&json!({"message": "bad"})));
    assert!(!err.is_network());
    assert_eq!(err.to_string(), "request failed with status 422");
}

#[test]
fn client_build_error_has_no_status() {
    let err = FetchError::ClientBuild("tls backend".to_owned());
    assert_eq!(err.status(), None);
    assert_eq!(err.data(), None);
}

#[test]
fn decode_error_wraps_serde() {
    let serde_err = serde_json::from_str::<u32>("\"x\"").unwrap_err();
    let err = FetchError::from(serde_err);
    assert!(err.to_string().starts_with("response decode failed"));
}

#[test]
fn redirect_loop_message() {
    let err = NavigationError::RedirectLoop { to: "/boards".to_owned(), hops: 5 };
    assert_eq!(err.to_string(), "too many redirects navigating to /boards (5 hops)");
}
