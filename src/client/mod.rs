//! Signup submission client
//!
//! One outbound HTTP POST per submission attempt; the outcome classification
//! is the only thing callers branch on.

mod http;
mod traits;

pub use http::SignupClient;
pub use traits::SignupApi;

#[cfg(test)]
pub use traits::MockSignupApi;

use serde::Serialize;

/// Typed request body for the signup endpoint.
///
/// The wire schema is fixed: `firstName`, `lastName`, `phoneNumber`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
}

/// Result classification of one network submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// HTTP status in [200, 299]
    Success,
    /// Transport-level failure (connectivity, timeout)
    NetworkFailure(String),
    /// Non-2xx response; the status is kept for diagnostics only
    ServerRejected(u16),
}

impl SubmissionOutcome {
    #[allow(dead_code)]
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Success)
    }
}
