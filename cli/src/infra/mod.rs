//! Infrastructure layer: concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: AWS API calls, config file
//! access, and logger installation.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod aws;
pub mod config;
pub mod logging;
