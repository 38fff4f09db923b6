//! Integration tests for beanstalk-cleaner
//!
//! These tests spawn the actual binary and test argument parsing, output
//! modes, and configuration handling. None of them reach AWS.

mod cli_tests;
