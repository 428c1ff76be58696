use super::*;

// =============================================================================
// accepted
// =============================================================================

#[test]
fn accepts_simple_address() {
    assert!(is_email("a@b.com"));
    assert!(is_email("john@example.com"));
}

#[test]
fn accepts_plus_and_dots_in_local_part() {
    assert!(is_email("first.last+tag@mail.example.org"));
}

#[test]
fn accepts_hyphenated_subdomain() {
    assert!(is_email("ops@eu-west.example.io"));
}

#[test]
fn accepts_punycode_tld() {
    assert!(is_email("user@example.xn--p1ai"));
}

#[test]
fn accepts_unicode_local_part() {
    assert!(is_email("jörg@example.de"));
}

// =============================================================================
// rejected
// =============================================================================

#[test]
fn rejects_missing_at() {
    assert!(!is_email("not-an-email"));
}

#[test]
fn rejects_empty_parts() {
    assert!(!is_email("@example.com"));
    assert!(!is_email("user@"));
    assert!(!is_email(""));
}

#[test]
fn rejects_domain_without_tld() {
    assert!(!is_email("user@localhost"));
}

#[test]
fn rejects_single_letter_or_numeric_tld() {
    assert!(!is_email("user@example.c"));
    assert!(!is_email("user@example.123"));
}

#[test]
fn rejects_dot_placement_in_local_part() {
    assert!(!is_email(".user@example.com"));
    assert!(!is_email("user.@example.com"));
    assert!(!is_email("us..er@example.com"));
}

#[test]
fn rejects_bad_domain_labels() {
    assert!(!is_email("user@-example.com"));
    assert!(!is_email("user@example-.com"));
    assert!(!is_email("user@example..com"));
}

#[test]
fn rejects_whitespace_and_double_at() {
    assert!(!is_email("us er@example.com"));
    assert!(!is_email("a@b@example.com"));
    assert!(!is_email("user@exa mple.com"));
}

#[test]
fn rejects_display_name_form() {
    assert!(!is_email("John <john@example.com>"));
}

#[test]
fn rejects_overlong_local_part() {
    let local = "a".repeat(65);
    assert!(!is_email(&format!("{local}@example.com")));
}
