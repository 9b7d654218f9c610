use serial_test::serial;
use shelfscout::config::{Config, DEFAULT_BASE_URL};
use std::time::Duration;

const KEYS: [&str; 3] = [
    "CATALOG_BASE_URL",
    "CATALOG_TIMEOUT_SECS",
    "CATALOG_USER_AGENT",
];

fn clear_env() {
    for key in KEYS {
        unsafe { std::env::remove_var(key) };
    }
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_env();
    let config = Config::from_env().expect("defaults should load");
    assert_eq!(config.catalog_base_url, DEFAULT_BASE_URL);
    assert!(config.request_timeout.is_none());
}

#[test]
#[serial]
fn test_from_env_overrides() {
    clear_env();
    unsafe {
        std::env::set_var("CATALOG_BASE_URL", "http://localhost:4010/");
        std::env::set_var("CATALOG_TIMEOUT_SECS", "3");
        std::env::set_var("CATALOG_USER_AGENT", "custom-agent");
    }

    let config = Config::from_env().expect("overrides should load");
    assert_eq!(config.catalog_base_url, "http://localhost:4010");
    assert_eq!(config.request_timeout, Some(Duration::from_secs(3)));
    assert_eq!(config.user_agent, "custom-agent");

    clear_env();
}

#[test]
#[serial]
fn test_from_env_rejects_bad_timeout() {
    clear_env();
    unsafe { std::env::set_var("CATALOG_TIMEOUT_SECS", "-1") };
    assert!(Config::from_env().is_err());
    clear_env();
}
