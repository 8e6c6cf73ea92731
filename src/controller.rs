//! Shared per-screen submission state machine.
//!
//! Every form screen runs the same linear flow: gate blank input, build and
//! preview the envelope, send it, acknowledge the outcome.  The flow lives
//! here once and each screen instantiates a [`FormController`] with its own
//! field type, envelope builder and submit path.
//!
//! The state transitions (`begin` / `finish`) are synchronous and free of
//! I/O; the screens string them together around the single network call from
//! their event handlers.  Failure is always terminal for a call and always
//! returns the controller to `Idle`.

use crate::envelope::FormError;
use crate::network::ApiError;
use crate::notify::Notify;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
}

/// Per-screen notice strings for the terminal acknowledgement.
pub struct Feedback {
    pub success: &'static str,
    pub failure: &'static str,
}

type EnvelopeBuilder<F> = fn(&F) -> Result<serde_json::Value, FormError>;

pub struct FormController<F> {
    submit_path: &'static str,
    build: EnvelopeBuilder<F>,
    feedback: Feedback,
    phase: Phase,
}

impl<F> FormController<F> {
    pub fn new(submit_path: &'static str, build: EnvelopeBuilder<F>, feedback: Feedback) -> Self {
        Self {
            submit_path,
            build,
            feedback,
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn submit_path(&self) -> &'static str {
        self.submit_path
    }

    /// Handle a submit trigger.  Returns the serialized body to send, or
    /// `None` when nothing should happen:
    ///
    /// * blank primary input is silently suppressed (no notice, no request);
    /// * any other validation failure is surfaced and suppressed;
    /// * otherwise the envelope is previewed to the user (blocking
    ///   acknowledgement of what is about to be sent) and the controller
    ///   enters `Submitting`.
    pub fn begin(&mut self, fields: &F, notify: &dyn Notify) -> Option<String> {
        let envelope = match (self.build)(fields) {
            Ok(envelope) => envelope,
            Err(FormError::BlankInput) => return None,
            Err(err) => {
                notify.notify(&err.to_string());
                return None;
            }
        };

        let preview = serde_json::to_string_pretty(&envelope).unwrap_or_else(|_| envelope.to_string());
        notify.notify(&preview);

        self.phase = Phase::Submitting;
        Some(envelope.to_string())
    }

    /// Resolve the pending call: surface the outcome and return to `Idle`.
    /// Returns `true` on success so screens can run their follow-ups
    /// (clearing fields, navigation).
    pub fn finish(&mut self, result: &Result<String, ApiError>, notify: &dyn Notify) -> bool {
        self.phase = Phase::Idle;
        match result {
            Ok(_) => {
                notify.notify(self.feedback.success);
                true
            }
            Err(err) => {
                notify.notify(&err.user_message(self.feedback.failure));
                false
            }
        }
    }
}
