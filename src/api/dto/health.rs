//! Health check response.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `healthy` or `degraded`.
    pub status: &'static str,
    pub version: &'static str,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: ComponentCheck,
}

/// Outcome of probing one dependency.
#[derive(Debug, Serialize)]
pub struct ComponentCheck {
    /// `ok` or `error`.
    pub status: &'static str,
    pub latency_ms: u128,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ComponentCheck {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
