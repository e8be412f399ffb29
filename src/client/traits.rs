//! Trait abstraction for the signup client to enable mocking in tests

use super::{SignupRequest, SubmissionOutcome};
use async_trait::async_trait;

/// Trait for signup submission, enabling mocking in tests
///
/// Implementations must issue exactly one outbound request per call and fold
/// every failure mode into the returned [`SubmissionOutcome`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SignupApi: Send + Sync {
    /// Submit a validated signup payload
    async fn submit(&self, request: SignupRequest) -> SubmissionOutcome;
}
