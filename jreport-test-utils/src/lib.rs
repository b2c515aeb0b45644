//! Test utilities shared across the jreport workspace
//!
//! This crate provides common testing infrastructure including:
//! - Environment variable isolation ([`EnvVarGuard`])
//! - A complete report environment ([`sample_env`])
//! - Jira search payload builders ([`IssueJson`], [`search_response`])
//!
//! The clippy dead_code lint is disabled for this crate because test utilities
//! may not be used by all tests, and the compiler cannot detect usage across
//! crate boundaries in development dependencies.

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

// Re-export commonly used items
pub use env::EnvVarGuard;
pub use fixtures::{IssueJson, sample_env, search_response};
