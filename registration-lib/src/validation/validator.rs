use crate::form::{Field, RegistrationForm};

use super::result::{FieldResult, FormReport};
use super::rules::{
    DEFAULT_EMAIL_DOMAIN, validate_dob, validate_email, validate_first_name, validate_last_name,
    validate_zip_code,
};

/// Applies the registration rules to a [`RegistrationForm`].
///
/// Stateless apart from the email domain; every call reads the given form
/// and returns a fresh verdict.
#[derive(Debug, Clone)]
pub struct FormValidator {
    email_domain: String,
}

impl FormValidator {
    pub fn new() -> Self {
        Self::with_email_domain(DEFAULT_EMAIL_DOMAIN)
    }

    /// Use a different domain when deriving the expected email.
    pub fn with_email_domain(domain: impl Into<String>) -> Self {
        Self {
            email_domain: domain.into(),
        }
    }

    pub fn email_domain(&self) -> &str {
        &self.email_domain
    }

    /// Validate a single field. Email also reads both name fields.
    pub fn validate_field(&self, form: &RegistrationForm, field: Field) -> FieldResult {
        let result = match field {
            Field::FirstName => validate_first_name(&form.first_name),
            Field::LastName => validate_last_name(&form.last_name),
            Field::Email => validate_email(
                &form.email,
                &form.first_name,
                &form.last_name,
                &self.email_domain,
            ),
            Field::Dob => validate_dob(&form.dob),
            Field::ZipCode => validate_zip_code(&form.zip_code),
        };
        log::trace!("[validate] {} valid={}", field, result.is_valid);
        result
    }

    /// Validate every field. All five rules always run.
    pub fn validate(&self, form: &RegistrationForm) -> FormReport {
        FormReport::new(Field::ALL.map(|field| self.validate_field(form, field)))
    }

    /// Aggregate validity of the form.
    pub fn is_form_valid(&self, form: &RegistrationForm) -> bool {
        self.validate(form).is_valid()
    }
}

impl Default for FormValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> RegistrationForm {
        RegistrationForm::new()
            .with(Field::FirstName, "Jane")
            .with(Field::LastName, "Doe")
            .with(Field::Email, "doj@farmingdale.edu")
            .with(Field::Dob, "05/12/1999")
            .with(Field::ZipCode, "11735")
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let report = FormValidator::default().validate(&RegistrationForm::new());
        assert!(report.is_invalid());
        assert_eq!(report.errors().len(), 5);
        assert_eq!(report.first_invalid(), Some(Field::FirstName));
        assert_eq!(
            report.get(Field::Email).message,
            "Enter first and last name first"
        );
    }

    #[test]
    fn test_all_fields_evaluated_past_first_failure() {
        let form = jane().with(Field::FirstName, "J").with(Field::ZipCode, "1");
        let report = FormValidator::default().validate(&form);

        let failing: Vec<Field> = report.errors().into_iter().map(|e| e.field).collect();
        // Email only needs both names to be non-empty
        assert_eq!(failing, vec![Field::FirstName, Field::ZipCode]);
        assert!(report.get(Field::Dob).is_valid);
    }

    #[test]
    fn test_custom_domain() {
        let validator = FormValidator::with_email_domain("example.org");
        assert_eq!(validator.email_domain(), "example.org");
        assert_eq!(FormValidator::default().email_domain(), DEFAULT_EMAIL_DOMAIN);
        let form = jane().with(Field::Email, "doj@example.org");
        assert!(validator.is_form_valid(&form));
        assert!(!FormValidator::default().is_form_valid(&form));
    }

    #[test]
    fn test_error_display() {
        let report = FormValidator::default().validate(&jane().with(Field::ZipCode, "abc"));
        let errors = report.errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].to_string(), "zipCode: Zip code must be 5 digits");
    }
}
