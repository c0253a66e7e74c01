use std::collections::BTreeMap;

use super::draft::{ApplicationDraft, Field};
use super::steps::{DURATION_CHOICES, ENGLISH_CHOICES, GENDER_CHOICES, REASON_CHOICES};

/// Field-keyed human-readable messages for the step being validated.
pub type ValidationErrors = BTreeMap<Field, String>;

const MIN_AGE: i64 = 18;
const MAX_AGE: i64 = 65;

/// Validate one step of the draft. Pure and deterministic: the same draft and
/// step always produce the same error set, empty when every applicable rule
/// passes.
///
/// Steps 0 (intro), 12 (optional Instagram), and 13 (review) have no rules;
/// the terminal step is guarded by the controller's step gate instead.
pub fn validate_step(draft: &ApplicationDraft, step: usize) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    match step {
        1 => {
            if draft.full_name.trim().is_empty() {
                fail(&mut errors, Field::FullName, "Please enter your full name");
            }
        }
        2 => {
            let email = draft.email.trim();
            if email.is_empty() || !email.contains('@') {
                fail(&mut errors, Field::Email, "Please enter a valid email");
            }
        }
        3 => {
            if draft.phone.trim().is_empty() {
                fail(&mut errors, Field::Phone, "Please enter your phone number");
            }
        }
        4 => {
            if draft.age.trim().is_empty() {
                fail(&mut errors, Field::Age, "Please select your age");
            } else {
                match draft.age.trim().parse::<i64>() {
                    Ok(age) if (MIN_AGE..=MAX_AGE).contains(&age) => {}
                    _ => fail(
                        &mut errors,
                        Field::Age,
                        "Please enter a valid age between 18 and 65",
                    ),
                }
            }
        }
        5 => {
            if !GENDER_CHOICES.contains(&draft.gender.as_str()) {
                fail(&mut errors, Field::Gender, "Please select an option");
            }
        }
        6 => {
            if draft.nationality.trim().is_empty() {
                fail(
                    &mut errors,
                    Field::Nationality,
                    "Please enter your nationality",
                );
            }
        }
        7 => {
            if !ENGLISH_CHOICES.contains(&draft.english_fluent.as_str()) {
                fail(&mut errors, Field::EnglishFluent, "Please select an option");
            }
        }
        8 => {
            if draft.profession.trim().is_empty() {
                fail(
                    &mut errors,
                    Field::Profession,
                    "Please enter your profession",
                );
            }
        }
        9 => {
            if !DURATION_CHOICES.contains(&draft.time_in_baku.as_str()) {
                fail(&mut errors, Field::TimeInBaku, "Please select a duration");
            }
        }
        10 => {
            if !REASON_CHOICES.contains(&draft.reason_in_baku.as_str()) {
                fail(&mut errors, Field::ReasonInBaku, "Please select a reason");
            }
        }
        11 => {
            if draft.interests.is_empty() {
                fail(
                    &mut errors,
                    Field::Interests,
                    "Please select at least one interest",
                );
            }
        }
        _ => {}
    }

    errors
}

fn fail(errors: &mut ValidationErrors, field: Field, message: &str) {
    errors.insert(field, message.to_string());
}
