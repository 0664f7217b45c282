//! HTTP middleware for request processing and protection.
//!
//! Provides rate limiting for form submissions and request tracing.

pub mod rate_limit;
pub mod tracing;
