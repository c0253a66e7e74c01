//! Client-side intake: the fixed step registry, the per-step validation
//! engine, the wizard state machine that owns the draft, and the submission
//! client the wizard drives on the terminal step.

pub mod client;
pub mod draft;
pub mod steps;
pub mod validation;
pub mod wizard;

pub use client::{HttpSubmissionClient, SubmissionGateway, SubmitError, GENERIC_FAILURE};
pub use draft::{ApplicationDraft, Field};
pub use steps::{definition, InputKind, StepDefinition, REGISTRY, STEP_COUNT, TERMINAL_STEP};
pub use validation::{validate_step, ValidationErrors};
pub use wizard::{
    ConfirmAction, ResetTimer, StepOutcome, SubmitRefusal, WizardController, WizardPhase,
    RESET_DELAY,
};
