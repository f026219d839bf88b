use std::sync::{Mutex, MutexGuard};

use super::*;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Serialize tests that touch the shared `CMS_*` variables.
fn env_guard() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// # Safety
/// Callers must hold `env_guard()`.
unsafe fn clear_cms_env() {
    unsafe {
        std::env::remove_var("CMS_ENDPOINT");
        std::env::remove_var("CMS_TOKEN");
        std::env::remove_var("CMS_REVALIDATE_SECS");
        std::env::remove_var("CMS_REQUEST_TIMEOUT_SECS");
        std::env::remove_var("CMS_CONNECT_TIMEOUT_SECS");
    }
}

#[test]
fn from_env_applies_defaults() {
    let _guard = env_guard();
    unsafe {
        clear_cms_env();
        std::env::set_var("CMS_ENDPOINT", "https://cms.example.test/graphql");
    }

    let cfg = CmsConfig::from_env().unwrap();
    assert_eq!(cfg.endpoint, "https://cms.example.test/graphql");
    assert_eq!(cfg.token, None);
    assert_eq!(cfg.revalidate_secs, DEFAULT_REVALIDATE_SECS);
    assert_eq!(cfg.revalidate_interval(), Duration::from_secs(10));
    assert_eq!(
        cfg.timeouts,
        CmsTimeouts { request_secs: DEFAULT_CMS_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CMS_CONNECT_TIMEOUT_SECS }
    );

    unsafe { clear_cms_env() };
}

#[test]
fn from_env_parses_overrides() {
    let _guard = env_guard();
    unsafe {
        clear_cms_env();
        std::env::set_var("CMS_ENDPOINT", "  https://cms.example.test/graphql  ");
        std::env::set_var("CMS_TOKEN", "tok");
        std::env::set_var("CMS_REVALIDATE_SECS", "60");
        std::env::set_var("CMS_REQUEST_TIMEOUT_SECS", "5");
        std::env::set_var("CMS_CONNECT_TIMEOUT_SECS", "2");
    }

    let cfg = CmsConfig::from_env().unwrap();
    assert_eq!(cfg.endpoint, "https://cms.example.test/graphql");
    assert_eq!(cfg.token.as_deref(), Some("tok"));
    assert_eq!(cfg.revalidate_secs, 60);
    assert_eq!(cfg.timeouts, CmsTimeouts { request_secs: 5, connect_secs: 2 });

    unsafe { clear_cms_env() };
}

#[test]
fn from_env_zero_revalidate_is_clamped() {
    let _guard = env_guard();
    unsafe {
        clear_cms_env();
        std::env::set_var("CMS_ENDPOINT", "https://cms.example.test/graphql");
        std::env::set_var("CMS_REVALIDATE_SECS", "0");
    }

    let cfg = CmsConfig::from_env().unwrap();
    assert_eq!(cfg.revalidate_secs, 1);

    unsafe { clear_cms_env() };
}

#[test]
fn from_env_missing_endpoint_errors() {
    let _guard = env_guard();
    unsafe { clear_cms_env() };

    let err = CmsConfig::from_env().unwrap_err();
    assert!(matches!(err, CmsError::MissingConfig { ref var } if var == "CMS_ENDPOINT"));
}

#[test]
fn from_env_blank_token_is_none() {
    let _guard = env_guard();
    unsafe {
        clear_cms_env();
        std::env::set_var("CMS_ENDPOINT", "https://cms.example.test/graphql");
        std::env::set_var("CMS_TOKEN", "   ");
    }

    let cfg = CmsConfig::from_env().unwrap();
    assert_eq!(cfg.token, None);

    unsafe { clear_cms_env() };
}
