use crate::infra::InMemoryBlobStore;
use clap::Args;
use std::sync::Arc;

use guestlist::error::AppError;
use guestlist::intake::{
    ApplicationDraft, Field, StepOutcome, SubmissionGateway, SubmitError, WizardController,
    WizardPhase,
};
use guestlist::submission::SubmissionStore;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Number of scripted submissions to run; more than one shows that
    /// retries append duplicate records to the shared document.
    #[arg(long, default_value_t = 1)]
    pub(crate) submissions: u32,
}

const DEMO_DOCUMENT: &str = "submissions/demo.json";

/// Answers for each required step, in step order.
const SCRIPT: [(Field, &str); 10] = [
    (Field::FullName, "Jane Doe"),
    (Field::Email, "jane@x.com"),
    (Field::Phone, "+994 50 123 45 67"),
    (Field::Age, "29"),
    (Field::Gender, "Female"),
    (Field::Nationality, "French"),
    (Field::EnglishFluent, "Yes"),
    (Field::Profession, "Designer"),
    (Field::TimeInBaku, "1-2 years"),
    (Field::ReasonInBaku, "Work"),
];

struct DirectGateway {
    store: Arc<SubmissionStore<InMemoryBlobStore>>,
}

impl SubmissionGateway for DirectGateway {
    async fn submit(&self, draft: &ApplicationDraft) -> Result<String, SubmitError> {
        self.store
            .append(draft.clone())
            .await
            .map(|_| "Application submitted successfully".to_string())
            .map_err(|err| SubmitError::new(err.to_string()))
    }
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let blob = InMemoryBlobStore::default();
    let store = Arc::new(SubmissionStore::new(Arc::new(blob.clone()), DEMO_DOCUMENT));
    let gateway = DirectGateway { store };

    for round in 1..=args.submissions.max(1) {
        println!("=== submission {round} ===");
        let mut wizard = WizardController::new();
        wizard.advance();

        // Show the validation gate once before filling anything in.
        if round == 1 {
            wizard.advance();
            for (field, message) in wizard.errors() {
                println!("  blocked on step 1: {}: {message}", field.name());
            }
        }

        for (field, answer) in SCRIPT {
            wizard.set_field(field, answer);
            if wizard.advance() == StepOutcome::Advanced {
                println!(
                    "  step {:>2} reached, progress {:>3.0}%",
                    wizard.current_step(),
                    wizard.progress() * 100.0
                );
            }
        }

        wizard.toggle_interest("Expanding my network", true);
        wizard.advance();
        // Instagram is optional; continue without an answer.
        wizard.advance();

        if wizard.submit(&gateway).await.is_err() {
            println!("  submission refused by the controller");
            continue;
        }
        match wizard.phase() {
            WizardPhase::Submitted => println!("  application submitted"),
            _ => println!(
                "  submission failed: {}",
                wizard.submit_error().unwrap_or("unknown error")
            ),
        }
        wizard.finish_reset();
    }

    if let Some(document) = blob.document(DEMO_DOCUMENT) {
        println!("\nshared document {DEMO_DOCUMENT}:\n{document}");
    }

    Ok(())
}
