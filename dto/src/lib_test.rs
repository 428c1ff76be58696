use super::*;

#[test]
fn user_profile_serializes_camel_case() {
    let profile = UserProfile {
        id: Uuid::nil(),
        email: "john@example.com".to_owned(),
        name: None,
        is_active: true,
    };
    let json = serde_json::to_value(&profile).expect("serialize");
    assert_eq!(json["isActive"], true);
    assert!(json.get("name").is_none());
    assert!(json.get("is_active").is_none());
}

#[test]
fn user_profile_deserializes_without_name() {
    let raw = r#"{"id":"00000000-0000-0000-0000-000000000000","email":"a@b.com","isActive":false}"#;
    let profile: UserProfile = serde_json::from_str(raw).expect("deserialize");
    assert_eq!(profile.name, None);
    assert!(!profile.is_active);
}

#[test]
fn login_response_reads_token() {
    let resp: LoginResponse = serde_json::from_str(r#"{"token":"abc"}"#).expect("deserialize");
    assert_eq!(resp.token, "abc");
}
