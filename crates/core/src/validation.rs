use regex::Regex;

/// A single failed validation rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    pub field: String,
    pub message: String,
}

/// Outcome of validating a pokemon name
///
/// Holds every failing rule in evaluation order. The request pipeline only
/// surfaces the first message to the caller.
#[derive(Debug, Clone, Default)]
pub struct ValidationOutcome {
    pub failures: Vec<ValidationFailure>,
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    /// First failure message, if any
    pub fn first_message(&self) -> Option<&str> {
        self.failures.first().map(|f| f.message.as_str())
    }
}

/// Validate a pokemon name against the API rules
///
/// Rules are evaluated in a fixed order and are independent of each other,
/// so a single bad name can fail more than one rule:
///
/// 1. Must be non-empty (and not all whitespace)
/// 2. Must contain ASCII letters only
/// 3. Must be between 3 and 20 characters long
pub fn validate_name(name: &str) -> ValidationOutcome {
    let mut outcome = ValidationOutcome::default();

    if name.trim().is_empty() {
        fail(&mut outcome, "Name cannot be empty.");
    }

    let letters_only = Regex::new("^[a-zA-Z]+$").unwrap();
    if !letters_only.is_match(name) {
        fail(&mut outcome, "Name must contain only letters.");
    }

    let length = name.chars().count();
    if length < 3 || length > 20 {
        fail(&mut outcome, "Name length must be between 3 and 20 characters.");
    }

    outcome
}

fn fail(outcome: &mut ValidationOutcome, message: &str) {
    outcome.failures.push(ValidationFailure {
        field: "name".to_string(),
        message: message.to_string(),
    });
}
