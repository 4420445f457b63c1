//! Config Tests: endpoint overrides from the environment

#![cfg(feature = "native")]

use once_cell::sync::Lazy;
use std::sync::Mutex;
use walletgate::core::constants::endpoints;
use walletgate::GateConfig;

static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

fn lock_env() -> std::sync::MutexGuard<'static, ()> {
    let guard = ENV_LOCK.lock().unwrap_or_else(|p| p.into_inner());
    std::env::remove_var("WALLETGATE_TERMS_URL");
    std::env::remove_var("WALLETGATE_BACKEND_URL");
    guard
}

#[test]
fn env_overrides_both_endpoints() {
    let _guard = lock_env();
    std::env::set_var("WALLETGATE_TERMS_URL", "https://terms.example/tandc");
    std::env::set_var("WALLETGATE_BACKEND_URL", "  https://relay.example/authorize  ");

    let config = GateConfig::from_env().expect("config");
    assert_eq!(config.terms_url, "https://terms.example/tandc");
    assert_eq!(config.backend_url, "https://relay.example/authorize");

    std::env::remove_var("WALLETGATE_TERMS_URL");
    std::env::remove_var("WALLETGATE_BACKEND_URL");
}

#[test]
fn blank_env_falls_back_to_defaults() {
    let _guard = lock_env();
    std::env::set_var("WALLETGATE_BACKEND_URL", "   ");

    let config = GateConfig::from_env().expect("config");
    assert_eq!(config, GateConfig::default());
    assert_eq!(config.terms_url, endpoints::TERMS_URL);

    std::env::remove_var("WALLETGATE_BACKEND_URL");
}

#[test]
fn invalid_env_url_is_rejected() {
    let _guard = lock_env();
    std::env::set_var("WALLETGATE_BACKEND_URL", "not a url");

    let err = GateConfig::from_env().unwrap_err();
    assert!(err.to_string().contains("backend_url"));

    std::env::remove_var("WALLETGATE_BACKEND_URL");
}
