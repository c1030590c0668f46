//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`]: domain-level errors
//! - [`error::ConfigurationError`]: rejected flow configurations
//! - [`string`]: small text helpers

pub mod error;
pub mod string;
