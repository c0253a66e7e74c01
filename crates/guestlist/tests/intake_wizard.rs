//! End-to-end intake scenarios: a complete wizard walk driven through the
//! public controller API, submitting into the shared-document store.

mod common {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use guestlist::intake::{ApplicationDraft, Field, SubmissionGateway, SubmitError};
    use guestlist::submission::{BlobError, BlobStore, SubmissionStore};

    #[derive(Default, Clone)]
    pub struct MemoryBlobStore {
        documents: Arc<Mutex<HashMap<String, String>>>,
    }

    impl MemoryBlobStore {
        pub fn document(&self, name: &str) -> Option<String> {
            self.documents
                .lock()
                .expect("blob mutex poisoned")
                .get(name)
                .cloned()
        }
    }

    impl BlobStore for MemoryBlobStore {
        async fn fetch(&self, name: &str) -> Result<Option<String>, BlobError> {
            Ok(self.document(name))
        }

        async fn put(&self, name: &str, content: String) -> Result<(), BlobError> {
            self.documents
                .lock()
                .expect("blob mutex poisoned")
                .insert(name.to_string(), content);
            Ok(())
        }
    }

    /// Gateway wired straight into the store, bypassing HTTP so the walk can
    /// run fully in-process.
    pub struct DirectGateway {
        pub store: Arc<SubmissionStore<MemoryBlobStore>>,
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

    pub const DOCUMENT: &str = "submissions/test.json";

    pub fn store_over(blob: &MemoryBlobStore) -> Arc<SubmissionStore<MemoryBlobStore>> {
        Arc::new(SubmissionStore::new(Arc::new(blob.clone()), DOCUMENT))
    }

    /// The answers for each required step, in step order.
    pub const ANSWERS: [(Field, &str); 10] = [
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
}

use std::time::Duration;

use common::{store_over, DirectGateway, MemoryBlobStore, ANSWERS, DOCUMENT};
use guestlist::intake::{
    ConfirmAction, Field, StepOutcome, WizardController, WizardPhase, TERMINAL_STEP,
};
use serde_json::Value;

fn stored_log(blob: &MemoryBlobStore) -> Vec<Value> {
    let content = blob.document(DOCUMENT).expect("document written");
    match serde_json::from_str::<Value>(&content).expect("document is JSON") {
        Value::Array(entries) => entries,
        other => panic!("submission log is not an array: {other}"),
    }
}

#[tokio::test]
async fn full_walk_blocks_each_incomplete_step_then_submits() {
    let blob = MemoryBlobStore::default();
    let store = store_over(&blob);
    let gateway = DirectGateway {
        store: store.clone(),
    };

    let mut wizard = WizardController::new();

    // Intro advances with an empty draft.
    assert_eq!(wizard.advance(), StepOutcome::Advanced);

    // Steps 1-10: advancing before answering is rejected with an error for
    // exactly the violated field; answering unblocks the step.
    for (field, answer) in ANSWERS {
        let step = wizard.current_step();
        assert_eq!(wizard.advance(), StepOutcome::Rejected);
        assert_eq!(wizard.current_step(), step);
        assert!(wizard.errors().contains_key(&field));

        wizard.set_field(field, answer);
        assert_eq!(wizard.advance(), StepOutcome::Advanced);
    }

    // Step 11: interests need at least one member.
    assert_eq!(wizard.current_step(), 11);
    assert_eq!(wizard.advance(), StepOutcome::Rejected);
    wizard.toggle_interest("Expanding my network", true);
    assert_eq!(wizard.advance(), StepOutcome::Advanced);

    // Step 12 is optional: Enter continues without an answer.
    assert_eq!(
        wizard.confirm(),
        ConfirmAction::Stepped(StepOutcome::Advanced)
    );
    assert_eq!(wizard.current_step(), TERMINAL_STEP);

    // Enter on the terminal step requests submission.
    assert_eq!(wizard.confirm(), ConfirmAction::SubmitRequested);
    wizard.submit(&gateway).await.expect("attempt opens");
    assert_eq!(wizard.phase(), WizardPhase::Submitted);

    let log = stored_log(&blob);
    assert_eq!(log.len(), 1);
    let entry = &log[0];
    assert_eq!(entry["fullName"], "Jane Doe");
    assert_eq!(entry["email"], "jane@x.com");
    assert_eq!(entry["age"], "29");
    assert_eq!(entry["interests"], serde_json::json!(["Expanding my network"]));
    assert_eq!(entry["instagram"], "");
    assert!(entry["timestamp"].is_string(), "record carries a timestamp");

    // The scheduled reset returns the wizard to its initial state.
    wizard.finish_reset();
    assert_eq!(wizard.current_step(), 0);
    assert!(wizard.draft().full_name.is_empty());
}

#[tokio::test]
async fn repeated_submissions_append_independent_records() {
    let blob = MemoryBlobStore::default();
    let store = store_over(&blob);
    let gateway = DirectGateway {
        store: store.clone(),
    };

    let mut wizard = WizardController::new();

    // Two full walks with identical answers. The success screen blocks a
    // direct re-submit, so the second pass goes through the reset, exactly as
    // a guest re-applying would.
    for round in 0..2 {
        wizard.advance();
        for (field, answer) in ANSWERS {
            wizard.set_field(field, answer);
            wizard.advance();
        }
        wizard.toggle_interest("Expanding my network", true);
        wizard.advance();
        wizard.advance();
        assert_eq!(wizard.current_step(), TERMINAL_STEP);

        if round > 0 {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        wizard.submit(&gateway).await.expect("attempt opens");
        assert_eq!(wizard.phase(), WizardPhase::Submitted);
        wizard.finish_reset();
    }

    let log = stored_log(&blob);
    assert_eq!(log.len(), 2);
    assert_eq!(log[0]["email"], log[1]["email"]);
    assert_ne!(
        log[0]["timestamp"], log[1]["timestamp"],
        "each record is stamped independently"
    );
}

#[tokio::test]
async fn backend_failure_keeps_the_wizard_on_the_terminal_step() {
    struct RefusingGateway;

    impl guestlist::intake::SubmissionGateway for RefusingGateway {
        async fn submit(
            &self,
            _draft: &guestlist::intake::ApplicationDraft,
        ) -> Result<String, guestlist::intake::SubmitError> {
            Err(guestlist::intake::SubmitError::new(
                "Failed to submit application",
            ))
        }
    }

    let mut wizard = WizardController::new();
    wizard.advance();
    for (field, answer) in ANSWERS {
        wizard.set_field(field, answer);
        wizard.advance();
    }
    wizard.toggle_interest("Expanding my network", true);
    wizard.advance();
    wizard.advance();

    wizard.submit(&RefusingGateway).await.expect("attempt opens");
    assert_eq!(wizard.phase(), WizardPhase::Editing);
    assert_eq!(wizard.current_step(), TERMINAL_STEP);
    assert_eq!(wizard.submit_error(), Some("Failed to submit application"));

    // Retreating from the terminal step still works without validation.
    assert!(wizard.retreat());
    assert_eq!(wizard.current_step(), 12);
}

#[test]
fn retreat_walks_back_to_the_intro() {
    let mut wizard = WizardController::new();
    wizard.advance();
    wizard.set_field(Field::FullName, "Jane Doe");
    wizard.advance();
    assert_eq!(wizard.current_step(), 2);

    assert!(wizard.retreat());
    assert!(wizard.retreat());
    assert_eq!(wizard.current_step(), 0);
    assert!(!wizard.retreat());
}
