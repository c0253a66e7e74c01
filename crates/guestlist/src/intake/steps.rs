use super::draft::Field;

/// How a step collects its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Range,
    SingleChoice,
    MultiChoice,
    None,
}

/// One entry of the static step catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepDefinition {
    pub index: usize,
    pub field: Option<Field>,
    pub kind: InputKind,
    pub optional: bool,
}

/// Total step count; fixed at 14 and never varies at runtime.
pub const STEP_COUNT: usize = 14;

/// The only step from which submission is legal.
pub const TERMINAL_STEP: usize = STEP_COUNT - 1;

pub const GENDER_CHOICES: [&str; 3] = ["Male", "Female", "Prefer not to say"];

pub const ENGLISH_CHOICES: [&str; 2] = ["Yes", "No"];

pub const DURATION_CHOICES: [&str; 4] =
    ["Less than 6 months", "6-12 months", "1-2 years", "2+ years"];

pub const REASON_CHOICES: [&str; 4] = ["Work", "Business", "Relocation", "Other"];

pub const INTEREST_CHOICES: [&str; 4] = [
    "Meeting international community",
    "Experiencing Baku's premium scene",
    "Expanding my network",
    "Exclusive cultural experience",
];

/// Ordered catalogue of the wizard's 14 steps: an intro, eleven questions, an
/// optional Instagram handle, and the review/submit screen.
pub const REGISTRY: [StepDefinition; STEP_COUNT] = [
    StepDefinition {
        index: 0,
        field: None,
        kind: InputKind::None,
        optional: false,
    },
    StepDefinition {
        index: 1,
        field: Some(Field::FullName),
        kind: InputKind::Text,
        optional: false,
    },
    StepDefinition {
        index: 2,
        field: Some(Field::Email),
        kind: InputKind::Text,
        optional: false,
    },
    StepDefinition {
        index: 3,
        field: Some(Field::Phone),
        kind: InputKind::Text,
        optional: false,
    },
    StepDefinition {
        index: 4,
        field: Some(Field::Age),
        kind: InputKind::Range,
        optional: false,
    },
    StepDefinition {
        index: 5,
        field: Some(Field::Gender),
        kind: InputKind::SingleChoice,
        optional: false,
    },
    StepDefinition {
        index: 6,
        field: Some(Field::Nationality),
        kind: InputKind::Text,
        optional: false,
    },
    StepDefinition {
        index: 7,
        field: Some(Field::EnglishFluent),
        kind: InputKind::SingleChoice,
        optional: false,
    },
    StepDefinition {
        index: 8,
        field: Some(Field::Profession),
        kind: InputKind::Text,
        optional: false,
    },
    StepDefinition {
        index: 9,
        field: Some(Field::TimeInBaku),
        kind: InputKind::SingleChoice,
        optional: false,
    },
    StepDefinition {
        index: 10,
        field: Some(Field::ReasonInBaku),
        kind: InputKind::SingleChoice,
        optional: false,
    },
    StepDefinition {
        index: 11,
        field: Some(Field::Interests),
        kind: InputKind::MultiChoice,
        optional: false,
    },
    StepDefinition {
        index: 12,
        field: Some(Field::Instagram),
        kind: InputKind::Text,
        optional: true,
    },
    StepDefinition {
        index: 13,
        field: None,
        kind: InputKind::None,
        optional: false,
    },
];

pub fn definition(index: usize) -> Option<&'static StepDefinition> {
    REGISTRY.get(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_indices_match_positions() {
        assert_eq!(REGISTRY.len(), STEP_COUNT);
        for (position, step) in REGISTRY.iter().enumerate() {
            assert_eq!(step.index, position);
        }
    }

    #[test]
    fn only_instagram_step_is_optional() {
        let optional: Vec<usize> = REGISTRY
            .iter()
            .filter(|step| step.optional)
            .map(|step| step.index)
            .collect();
        assert_eq!(optional, vec![12]);
    }

    #[test]
    fn terminal_step_collects_nothing() {
        let step = definition(TERMINAL_STEP).expect("terminal step exists");
        assert_eq!(step.field, None);
        assert_eq!(step.kind, InputKind::None);
        assert!(definition(STEP_COUNT).is_none());
    }
}
