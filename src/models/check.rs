use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// Outcome of a single hard check against a draft
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    pub check_name: String,
    pub passed: bool,
    pub message: String,
    pub severity: Severity,
}

impl CheckResult {
    /// A failed check that blocks publishing
    pub fn is_blocking(&self) -> bool {
        !self.passed && self.severity == Severity::Error
    }
}
