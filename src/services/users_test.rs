use super::*;

fn dto(email: &str, password: &str) -> CreateUserDto {
    CreateUserDto { email: email.to_owned(), name: None, password: password.to_owned(), is_active: None }
}

// =============================================================================
// helpers
// =============================================================================

#[test]
fn normalize_email_trims_and_lowercases() {
    assert_eq!(normalize_email("  John@Example.COM "), "john@example.com");
}

#[test]
fn hash_password_depends_on_salt() {
    assert_eq!(hash_password("s1", "secret"), hash_password("s1", "secret"));
    assert_ne!(hash_password("s1", "secret"), hash_password("s2", "secret"));
    assert_eq!(hash_password("s1", "secret").len(), 64);
}

#[test]
fn generate_salt_is_32_hex_chars() {
    let salt = generate_salt();
    assert_eq!(salt.len(), 32);
    assert!(salt.chars().all(|c| c.is_ascii_hexdigit()));
}

// =============================================================================
// create_user
// =============================================================================

#[tokio::test]
async fn create_user_defaults_to_active() {
    let state = AppState::new();
    let profile = create_user(&state, dto("a@b.com", "abcdef")).await.unwrap();
    assert!(profile.is_active);
    assert_eq!(profile.email, "a@b.com");

    let users = state.users.read().await;
    let stored = users.get(&profile.id).unwrap();
    assert_ne!(stored.password_hash, "abcdef");
}

#[tokio::test]
async fn create_user_keeps_explicit_flags() {
    let state = AppState::new();
    let mut payload = dto("a@b.com", "abcdef");
    payload.name = Some("Alice".into());
    payload.is_active = Some(false);

    let profile = create_user(&state, payload).await.unwrap();
    assert!(!profile.is_active);
    assert_eq!(profile.name.as_deref(), Some("Alice"));
}

#[tokio::test]
async fn create_user_rejects_duplicate_email_case_insensitively() {
    let state = AppState::new();
    create_user(&state, dto("a@b.com", "abcdef")).await.unwrap();
    let err = create_user(&state, dto("A@B.com", "ghijkl")).await.unwrap_err();
    assert!(matches!(err, UserError::EmailTaken));
    assert_eq!(state.users.read().await.len(), 1);
}

// =============================================================================
// authenticate
// =============================================================================

#[tokio::test]
async fn authenticate_accepts_right_password() {
    let state = AppState::new();
    let profile = create_user(&state, dto("a@b.com", "abcdef")).await.unwrap();
    assert_eq!(authenticate(&state, " A@b.com", "abcdef").await, Some(profile.id));
}

#[tokio::test]
async fn authenticate_rejects_wrong_password_or_unknown_email() {
    let state = AppState::new();
    create_user(&state, dto("a@b.com", "abcdef")).await.unwrap();
    assert_eq!(authenticate(&state, "a@b.com", "abcdeg").await, None);
    assert_eq!(authenticate(&state, "c@d.com", "abcdef").await, None);
}
