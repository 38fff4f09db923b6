//! Unit tests for the configuration use-cases.

#![allow(clippy::expect_used)]

use beanstalk_cleaner::application::services::config_service;

use crate::mocks::MemoryConfigStore;

#[test]
fn test_set_value_persists_valid_setting() {
    let store = MemoryConfigStore::default();

    let config =
        config_service::set_value(&store, "aws.profile", "ops").expect("valid setting");

    assert_eq!(config.aws.profile, "ops");
    assert_eq!(*store.saves.borrow(), 1);
    assert_eq!(
        config_service::load_config(&store)
            .expect("load")
            .aws
            .profile,
        "ops"
    );
}

#[test]
fn test_set_value_unknown_key_writes_nothing() {
    let store = MemoryConfigStore::default();

    let err = config_service::set_value(&store, "aws.account", "123").expect_err("unknown key");

    assert!(err.to_string().contains("aws.account"));
    assert_eq!(*store.saves.borrow(), 0);
}

#[test]
fn test_set_value_invalid_bool_writes_nothing() {
    let store = MemoryConfigStore::default();

    let result = config_service::set_value(&store, "policy.kill_oldest_instance", "maybe");

    assert!(result.is_err());
    assert_eq!(*store.saves.borrow(), 0);
    assert!(!store.config.borrow().policy.kill_oldest_instance);
}
