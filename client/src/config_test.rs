use super::*;

#[test]
fn new_trims_trailing_slashes() {
    let cfg = ClientConfig::new("https://api.example.test/").unwrap();
    assert_eq!(cfg.api_base_url, "https://api.example.test");

    let cfg = ClientConfig::new("http://127.0.0.1:3000/api//").unwrap();
    assert_eq!(cfg.api_base_url, "http://127.0.0.1:3000/api");
}

#[test]
fn new_applies_ten_second_timeout() {
    let cfg = ClientConfig::new(DEFAULT_API_BASE_URL).unwrap();
    assert_eq!(cfg.timeout, Duration::from_secs(10));
}

#[test]
fn new_rejects_relative_url() {
    let err = ClientConfig::new("/v1").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
}

#[test]
fn new_rejects_non_http_scheme() {
    let err = ClientConfig::new("ftp://files.example.test").unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid API base URL `ftp://files.example.test`: unsupported scheme `ftp`"
    );
}

#[test]
fn from_env_reads_base_url() {
    unsafe { std::env::set_var(API_BASE_URL_ENV, "https://env.example.test/") };
    let cfg = ClientConfig::from_env().unwrap();
    unsafe { std::env::remove_var(API_BASE_URL_ENV) };
    assert_eq!(cfg.api_base_url, "https://env.example.test");
}
