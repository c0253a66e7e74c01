use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

use super::client::{SubmissionGateway, SubmitError};
use super::draft::{ApplicationDraft, Field};
use super::steps::TERMINAL_STEP;
use super::validation::{validate_step, ValidationErrors};

/// Delay between an accepted submission and the automatic wizard reset.
pub const RESET_DELAY: Duration = Duration::from_millis(3000);

/// Display phase the hosting UI renders from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardPhase {
    #[default]
    Editing,
    Submitting,
    Submitted,
}

/// Result of a forward transition attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Advanced,
    Rejected,
    AtTerminal,
}

/// What the confirm key ("Enter") means on the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    Stepped(StepOutcome),
    SubmitRequested,
}

/// Why a submission attempt was refused before reaching the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRefusal {
    NotAtFinalStep,
    AlreadyInFlight,
}

/// Finite-state machine over the 14 intake steps.
///
/// Owns the mutable [`ApplicationDraft`] and the current error set; the
/// hosting UI only opens/closes the wizard, forwards input events, and renders
/// the read-only views exposed here.
#[derive(Debug, Default)]
pub struct WizardController {
    step: usize,
    draft: ApplicationDraft,
    errors: ValidationErrors,
    phase: WizardPhase,
    submit_error: Option<String>,
}

impl WizardController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_step(&self) -> usize {
        self.step
    }

    pub fn draft(&self) -> &ApplicationDraft {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn phase(&self) -> WizardPhase {
        self.phase
    }

    /// Error message from the last failed submission, shown on step 13.
    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    /// Progress fraction for an observer: 0 on the intro step, otherwise
    /// `(step - 1) / 13`.
    pub fn progress(&self) -> f32 {
        if self.step == 0 {
            return 0.0;
        }
        (self.step - 1) as f32 / (TERMINAL_STEP) as f32
    }

    /// Attempt a forward transition. The intro step and the optional
    /// Instagram step advance unconditionally; every other step runs the
    /// validation engine and stays put with a published error set on failure.
    /// Never advances past the terminal step.
    pub fn advance(&mut self) -> StepOutcome {
        if self.step >= TERMINAL_STEP {
            return StepOutcome::AtTerminal;
        }

        if self.step != 0 && self.step != 12 {
            let errors = validate_step(&self.draft, self.step);
            if !errors.is_empty() {
                debug!(step = self.step, failures = errors.len(), "step blocked");
                self.errors = errors;
                return StepOutcome::Rejected;
            }
            self.errors = errors;
        }

        self.step += 1;
        StepOutcome::Advanced
    }

    /// Go back one step. Never validates; any errors for the step being left
    /// stay recorded but unseen.
    pub fn retreat(&mut self) -> bool {
        if self.step > 0 {
            self.step -= 1;
            true
        } else {
            false
        }
    }

    /// Mutate one draft field and optimistically clear its error entry.
    /// No re-validation happens until the next forward attempt.
    pub fn set_field(&mut self, field: Field, value: &str) {
        self.draft.set(field, value);
        self.errors.remove(&field);
    }

    /// Add or remove one interest, clearing the interests error on change.
    pub fn toggle_interest(&mut self, value: &str, included: bool) {
        self.draft.toggle_interest(value, included);
        self.errors.remove(&Field::Interests);
    }

    /// Confirm-key semantics: advance everywhere except the terminal step,
    /// where confirmation requests submission instead.
    pub fn confirm(&mut self) -> ConfirmAction {
        if self.step == TERMINAL_STEP {
            ConfirmAction::SubmitRequested
        } else {
            ConfirmAction::Stepped(self.advance())
        }
    }

    /// Open a submission attempt. Legal only on the terminal step, only while
    /// no other attempt is outstanding, and never after one was accepted; the
    /// success screen stays up until the scheduled reset runs.
    pub fn begin_submission(&mut self) -> Result<(), SubmitRefusal> {
        if self.step != TERMINAL_STEP {
            return Err(SubmitRefusal::NotAtFinalStep);
        }
        if self.phase != WizardPhase::Editing {
            return Err(SubmitRefusal::AlreadyInFlight);
        }
        self.phase = WizardPhase::Submitting;
        self.submit_error = None;
        Ok(())
    }

    /// Close the outstanding attempt. Success enters the transient
    /// `Submitted` phase; failure re-enables submission on step 13 with the
    /// failure message published for display.
    pub fn complete_submission(&mut self, result: Result<(), SubmitError>) {
        match result {
            Ok(()) => {
                self.phase = WizardPhase::Submitted;
            }
            Err(err) => {
                self.phase = WizardPhase::Editing;
                self.submit_error = Some(err.to_string());
            }
        }
    }

    /// Drive one full submission attempt through the gateway.
    ///
    /// The refusal is returned to the caller; gateway failures are absorbed
    /// into the controller state (phase and [`submit_error`](Self::submit_error)).
    pub async fn submit<G: SubmissionGateway>(&mut self, gateway: &G) -> Result<(), SubmitRefusal> {
        self.begin_submission()?;
        let result = gateway.submit(&self.draft).await.map(|_| ());
        self.complete_submission(result);
        Ok(())
    }

    /// Return to the initial state: step 0, empty draft, no errors. Invoked
    /// by the scheduled reset once the success screen has been shown.
    pub fn finish_reset(&mut self) {
        self.step = 0;
        self.draft = ApplicationDraft::default();
        self.errors.clear();
        self.phase = WizardPhase::Editing;
        self.submit_error = None;
    }
}

/// Cancellable scheduled callback tied to the wizard's lifetime.
///
/// Dropping the timer aborts the pending task, so tearing the wizard down
/// mid-delay never fires a stale reset.
#[derive(Debug)]
pub struct ResetTimer {
    handle: JoinHandle<()>,
}

impl ResetTimer {
    pub fn schedule<F>(delay: Duration, callback: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            callback();
        });
        Self { handle }
    }

    pub fn cancel(self) {
        self.handle.abort();
    }
}

impl Drop for ResetTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
