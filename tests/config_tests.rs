//! Tests for configuration resolution.

use std::time::Duration;

use onzy_assist::config::{AssistConfig, DEFAULT_BASE_URL};

#[test]
fn explicit_key_uses_the_default_endpoint() {
    let config = AssistConfig::new("secret");

    assert_eq!(config.api_key(), "secret");
    assert_eq!(config.base_url(), DEFAULT_BASE_URL);
}

#[test]
fn overrides_apply() {
    let config = AssistConfig::new("secret")
        .with_base_url("http://127.0.0.1:9999")
        .with_request_timeout(Duration::from_secs(5));

    assert_eq!(config.base_url(), "http://127.0.0.1:9999");
    assert_eq!(config.request_timeout(), Duration::from_secs(5));
}
