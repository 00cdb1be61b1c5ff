//! Client-side submission state machine.
//!
//! Owns the form lifecycle: idle, submitting, and the transient feedback
//! notification shown after each attempt. The phase is an explicit enum, not
//! a boolean, so the re-entrancy guard (one in-flight submission at a time)
//! and feedback expiry are unambiguous and testable.
//!
//! Time is injected - transitions take `Instant` values and the async driver
//! takes a clock function - which keeps feedback expiry deterministic in
//! tests.

use std::time::{Duration, Instant};

use crate::client::ContactApi;
use crate::contact::ContactSubmission;

/// How long feedback stays visible before auto-dismissing.
pub const FEEDBACK_TTL: Duration = Duration::from_millis(4000);

/// Feedback shown after a successful submission.
pub const SUCCESS_TEXT: &str = "Message sent! I'll get back to you soon.";

/// Feedback shown when the server rejects the submission.
pub const SEND_FAILED_TEXT: &str = "Failed to send message. Please try again later.";

/// Feedback shown when the request itself never completes.
pub const NETWORK_FAILED_TEXT: &str = "Something went wrong. Please try again later.";

/// Form lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No submission in flight.
    Idle,
    /// A request is in flight; further submit triggers are no-ops.
    Submitting,
}

/// Kind of feedback notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    /// Both emails were delivered.
    Success,
    /// The attempt failed; the form is preserved for a retry.
    Error,
}

/// A transient notification with its display deadline.
#[derive(Debug, Clone)]
pub struct Feedback {
    /// Success or error.
    pub kind: FeedbackKind,
    /// Text shown to the user.
    pub text: String,
    shown_at: Instant,
}

impl Feedback {
    fn expired(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) >= FEEDBACK_TTL
    }
}

/// Outcome of one submission attempt, as seen by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The server accepted and delivered; clear the form.
    Success,
    /// The server answered with an error; keep the form for a retry.
    ServerError,
    /// The request never completed; keep the form for a retry.
    NetworkError,
}

/// State machine mediating one user-initiated submission at a time.
///
/// A submission attempt runs `begin` -> network request -> `settle`. The
/// async [`submit`](Self::submit) method drives the whole attempt against a
/// [`ContactApi`]; the individual transitions are public so the machine can
/// be tested without I/O.
#[derive(Debug)]
pub struct SubmissionController {
    phase: Phase,
    feedback: Option<Feedback>,
}

impl SubmissionController {
    /// Create a controller in the idle phase with no feedback.
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            feedback: None,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Start a submission attempt.
    ///
    /// Returns `false` (and changes nothing) if one is already in flight;
    /// a second click while submitting is a no-op.
    pub fn begin(&mut self) -> bool {
        if self.phase == Phase::Submitting {
            return false;
        }
        self.phase = Phase::Submitting;
        true
    }

    /// Record the outcome of the in-flight attempt.
    ///
    /// Sets the feedback (restarting the display window from `now`), returns
    /// the phase to idle, and reports whether the form should be cleared.
    pub fn settle(&mut self, outcome: Outcome, now: Instant) -> bool {
        let (kind, text, clear_form) = match outcome {
            Outcome::Success => (FeedbackKind::Success, SUCCESS_TEXT, true),
            Outcome::ServerError => (FeedbackKind::Error, SEND_FAILED_TEXT, false),
            Outcome::NetworkError => (FeedbackKind::Error, NETWORK_FAILED_TEXT, false),
        };

        self.feedback = Some(Feedback {
            kind,
            text: text.to_string(),
            shown_at: now,
        });
        self.phase = Phase::Idle;
        clear_form
    }

    /// The currently visible feedback, if any.
    ///
    /// Feedback older than [`FEEDBACK_TTL`] is dropped on the way out; a
    /// newer feedback replaces the old one and restarts the window.
    pub fn feedback(&mut self, now: Instant) -> Option<&Feedback> {
        if self
            .feedback
            .as_ref()
            .is_some_and(|feedback| feedback.expired(now))
        {
            self.feedback = None;
        }
        self.feedback.as_ref()
    }

    /// Explicitly dismiss the feedback before it expires.
    pub fn dismiss(&mut self) {
        self.feedback = None;
    }

    /// Drive one submission attempt end to end.
    ///
    /// No-op (returns `false`) while a previous attempt is in flight. Returns
    /// whether the form should be cleared: `true` only when the server
    /// reported success. Failures are never retried automatically.
    ///
    /// `clock` is read after the response arrives, so the feedback display
    /// window starts when the feedback is actually set, not when the user
    /// clicked. Pass `Instant::now` in production.
    pub async fn submit(
        &mut self,
        api: &dyn ContactApi,
        form: &ContactSubmission,
        clock: impl Fn() -> Instant,
    ) -> bool {
        if !self.begin() {
            return false;
        }

        let outcome = match api.submit(form).await {
            Ok(response) if response.ok => Outcome::Success,
            Ok(response) => {
                tracing::debug!(error = ?response.error, "Contact submission rejected");
                Outcome::ServerError
            }
            Err(e) => {
                tracing::warn!(error = %e, "Contact submission request failed");
                Outcome::NetworkError
            }
        };

        self.settle(outcome, clock())
    }
}

impl Default for SubmissionController {
    fn default() -> Self {
        Self::new()
    }
}
