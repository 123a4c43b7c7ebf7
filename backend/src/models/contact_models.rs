use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// The budget options the contact form offers. A submission must carry one
/// of these verbatim.
pub const BUDGET_RANGES: [&str; 5] = [
    "Less than $5,000",
    "$5,000 - $10,000",
    "$10,000 - $25,000",
    "$25,000 - $50,000",
    "More than $50,000",
];

// Same shape the form checks client-side: local@domain.tld with no
// whitespace and a single '@'.
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex must compile"));

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactSubmission {
    pub name: String,
    pub mobile: String,
    pub email: String,
    pub company: String,
    pub budget: String,
    pub requirements: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MissingField(&'static str),
    InvalidFormat(&'static str),
}

impl ValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingField(field) => field,
            ValidationError::InvalidFormat(field) => field,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ValidationError::MissingField("name") => "Name is required".to_string(),
            ValidationError::MissingField("mobile") => "Mobile number is required".to_string(),
            ValidationError::MissingField("email") => "Email is required".to_string(),
            ValidationError::MissingField("company") => "Company name is required".to_string(),
            ValidationError::MissingField("budget") => "Please select a budget range".to_string(),
            ValidationError::MissingField("requirements") => {
                "Requirements are required".to_string()
            }
            ValidationError::MissingField(field) => format!("{} is required", field),
            ValidationError::InvalidFormat(_) => "Invalid email format".to_string(),
        }
    }
}

impl ContactSubmission {
    /// Checks every field and reports all failures at once so the caller can
    /// surface them together rather than one per attempt.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(ValidationError::MissingField("name"));
        }
        if self.mobile.trim().is_empty() {
            errors.push(ValidationError::MissingField("mobile"));
        }
        if self.email.trim().is_empty() {
            errors.push(ValidationError::MissingField("email"));
        } else if !EMAIL_REGEX.is_match(self.email.trim()) {
            errors.push(ValidationError::InvalidFormat("email"));
        }
        if self.company.trim().is_empty() {
            errors.push(ValidationError::MissingField("company"));
        }
        if !BUDGET_RANGES.contains(&self.budget.as_str()) {
            errors.push(ValidationError::MissingField("budget"));
        }
        if self.requirements.trim().is_empty() {
            errors.push(ValidationError::MissingField("requirements"));
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_submission() -> ContactSubmission {
        ContactSubmission {
            name: "Jane Doe".to_string(),
            mobile: "555-0100".to_string(),
            email: "jane@example.com".to_string(),
            company: "Acme".to_string(),
            budget: "$10,000 - $25,000".to_string(),
            requirements: "Need a chatbot".to_string(),
        }
    }

    #[test]
    fn valid_submission_passes() {
        assert!(valid_submission().validate().is_empty());
    }

    #[test]
    fn each_missing_field_is_reported_alone() {
        let cases: [(&str, fn(&mut ContactSubmission)); 6] = [
            ("name", |s| s.name = "   ".to_string()),
            ("mobile", |s| s.mobile = String::new()),
            ("email", |s| s.email = " ".to_string()),
            ("company", |s| s.company = "\t".to_string()),
            ("budget", |s| s.budget = String::new()),
            ("requirements", |s| s.requirements = "\n".to_string()),
        ];

        for (field, blank) in cases {
            let mut submission = valid_submission();
            blank(&mut submission);
            let errors = submission.validate();
            assert_eq!(errors.len(), 1, "expected one error for {}", field);
            assert_eq!(errors[0], ValidationError::MissingField(field));
        }
    }

    #[test]
    fn malformed_email_is_invalid_format_only() {
        for bad in ["not-an-email", "jane@example", "jane@@example.com", "jane @example.com"] {
            let mut submission = valid_submission();
            submission.email = bad.to_string();
            let errors = submission.validate();
            assert_eq!(errors, vec![ValidationError::InvalidFormat("email")], "{}", bad);
        }
    }

    #[test]
    fn budget_outside_the_fixed_set_is_rejected() {
        let mut submission = valid_submission();
        submission.budget = "one million".to_string();
        assert_eq!(submission.validate(), vec![ValidationError::MissingField("budget")]);
    }

    #[test]
    fn all_failures_are_reported_together() {
        let submission = ContactSubmission {
            name: String::new(),
            mobile: String::new(),
            email: "nope".to_string(),
            company: String::new(),
            budget: String::new(),
            requirements: String::new(),
        };
        let fields: Vec<&str> = submission.validate().iter().map(|e| e.field()).collect();
        assert_eq!(fields, vec!["name", "mobile", "email", "company", "budget", "requirements"]);
    }
}
