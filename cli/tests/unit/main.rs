//! Unit tests for beanstalk-cleaner
//!
//! These tests use fake cloud ports and run fast without network access.

mod architecture;
mod config_service;
mod mocks;
mod plan_service;
