//! Submission flow state machine
//!
//! Drives one signup attempt from submit trigger through validation and the
//! network call to a navigation or feedback decision. The `Submitting` state
//! is the re-entry guard: while a request is in flight, further submit
//! triggers are ignored, so at most one submission exists at a time.

use crate::client::{SignupRequest, SubmissionOutcome};
use crate::state::SignupForm;
use crate::validate;

/// Generic failure feedback shown for any submission failure
const SUBMIT_FAILED_MESSAGE: &str = "Something went wrong. Try Again !";

/// Where the flow currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowState {
    #[default]
    Idle,
    /// Transient: validation runs synchronously inside `trigger`
    Validating,
    /// A request is in flight; re-entrant triggers are ignored
    Submitting,
    /// Submission succeeded and navigation has fired
    Done,
}

/// What the caller must do after a submit trigger
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerAction {
    /// Validation passed: dispatch this request, flow is now Submitting
    Dispatch(SignupRequest),
    /// Validation failed: show this message, flow is back to Idle
    Reject(String),
    /// Trigger arrived while Submitting or Done; nothing to do
    Ignored,
}

/// What the caller must do after an outcome resolves
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveAction {
    /// Submission succeeded: advance to the next screen
    Navigate,
    /// Submission failed: show this message, flow is back to Idle
    Fail(String),
    /// Outcome arrived while not Submitting; nothing to do
    Ignored,
}

/// State machine for one screen's submission flow
#[derive(Debug, Default)]
pub struct SubmitFlow {
    state: FlowState,
}

impl SubmitFlow {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == FlowState::Submitting
    }

    /// Handle a submit trigger: Idle -> Validating -> Idle | Submitting
    pub fn trigger(&mut self, form: &SignupForm) -> TriggerAction {
        if self.state != FlowState::Idle {
            tracing::debug!("Submit trigger ignored in state {:?}", self.state);
            return TriggerAction::Ignored;
        }

        self.state = FlowState::Validating;
        match validate::validate_signup(form) {
            Ok(request) => {
                self.state = FlowState::Submitting;
                TriggerAction::Dispatch(request)
            }
            Err(e) => {
                self.state = FlowState::Idle;
                TriggerAction::Reject(e.to_string())
            }
        }
    }

    /// Handle the submission outcome: Submitting -> Done | Idle
    pub fn resolve(&mut self, outcome: SubmissionOutcome) -> ResolveAction {
        if self.state != FlowState::Submitting {
            tracing::debug!("Outcome ignored in state {:?}", self.state);
            return ResolveAction::Ignored;
        }

        match outcome {
            SubmissionOutcome::Success => {
                self.state = FlowState::Done;
                ResolveAction::Navigate
            }
            SubmissionOutcome::NetworkFailure(message) => {
                tracing::warn!("Submission failed: {message}");
                self.state = FlowState::Idle;
                ResolveAction::Fail(SUBMIT_FAILED_MESSAGE.to_string())
            }
            SubmissionOutcome::ServerRejected(status) => {
                tracing::warn!("Submission rejected by server: status {status}");
                self.state = FlowState::Idle;
                ResolveAction::Fail(SUBMIT_FAILED_MESSAGE.to_string())
            }
        }
    }
}
