use serde::{Deserialize, Serialize};

/// A field the wizard can collect, named as it appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FullName,
    Email,
    Phone,
    Age,
    Gender,
    Nationality,
    EnglishFluent,
    Profession,
    TimeInBaku,
    ReasonInBaku,
    Interests,
    Instagram,
}

impl Field {
    pub const fn name(self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Age => "age",
            Field::Gender => "gender",
            Field::Nationality => "nationality",
            Field::EnglishFluent => "englishFluent",
            Field::Profession => "profession",
            Field::TimeInBaku => "timeInBaku",
            Field::ReasonInBaku => "reasonInBaku",
            Field::Interests => "interests",
            Field::Instagram => "instagram",
        }
    }
}

/// The in-progress set of answers a guest is building.
///
/// Every scalar answer is kept exactly as entered (age included) so the wire
/// payload matches what the guest typed; parsing happens during validation.
/// Owned solely by the [`WizardController`](crate::intake::WizardController);
/// observers get a read-only view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDraft {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub age: String,
    pub gender: String,
    pub nationality: String,
    pub english_fluent: String,
    pub profession: String,
    pub time_in_baku: String,
    pub reason_in_baku: String,
    pub interests: Vec<String>,
    #[serde(default)]
    pub instagram: String,
}

impl ApplicationDraft {
    /// Overwrite a scalar answer. The interests set is multi-choice and goes
    /// through [`toggle_interest`](Self::toggle_interest) instead.
    pub fn set(&mut self, field: Field, value: &str) {
        match field {
            Field::FullName => self.full_name = value.to_string(),
            Field::Email => self.email = value.to_string(),
            Field::Phone => self.phone = value.to_string(),
            Field::Age => self.age = value.to_string(),
            Field::Gender => self.gender = value.to_string(),
            Field::Nationality => self.nationality = value.to_string(),
            Field::EnglishFluent => self.english_fluent = value.to_string(),
            Field::Profession => self.profession = value.to_string(),
            Field::TimeInBaku => self.time_in_baku = value.to_string(),
            Field::ReasonInBaku => self.reason_in_baku = value.to_string(),
            Field::Interests => {}
            Field::Instagram => self.instagram = value.to_string(),
        }
    }

    /// Add or remove one interest; the set stays duplicate-free and keeps
    /// selection order.
    pub fn toggle_interest(&mut self, value: &str, included: bool) {
        if included {
            if !self.interests.iter().any(|entry| entry == value) {
                self.interests.push(value.to_string());
            }
        } else {
            self.interests.retain(|entry| entry != value);
        }
    }
}
