//! The two screens and their bindings to the form controller.

use registration_lib::{Field, FormView, NavigationError, Navigator, RegistrationForm};

use crate::input::TextInput;

/// Inputs, error labels and button state of the registration screen.
#[derive(Debug, Default)]
pub struct RegistrationScreen {
    inputs: [TextInput; 5],
    errors: [String; 5],
    submit_enabled: bool,
}

impl RegistrationScreen {
    pub fn input(&self, field: Field) -> &TextInput {
        &self.inputs[field.index()]
    }

    pub fn input_mut(&mut self, field: Field) -> &mut TextInput {
        &mut self.inputs[field.index()]
    }

    pub fn error(&self, field: Field) -> &str {
        &self.errors[field.index()]
    }

    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }
}

impl FormView for RegistrationScreen {
    fn field_text(&self, field: Field) -> String {
        self.input(field).text().to_string()
    }

    fn set_error(&mut self, field: Field, message: &str) {
        let slot = &mut self.errors[field.index()];
        slot.clear();
        slot.push_str(message);
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit_enabled = enabled;
    }
}

/// Receives the accepted form; the next frame draws the completed screen.
#[derive(Debug, Default)]
pub struct CompletedScreen {
    submitted: Option<RegistrationForm>,
}

impl CompletedScreen {
    pub fn submitted(&self) -> Option<&RegistrationForm> {
        self.submitted.as_ref()
    }
}

impl Navigator for CompletedScreen {
    fn show_completed(&mut self, form: &RegistrationForm) -> Result<(), NavigationError> {
        log::info!(
            "Registration accepted for {} {}",
            form.first_name,
            form.last_name
        );
        self.submitted = Some(form.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_reads_inputs() {
        let mut screen = RegistrationScreen::default();
        for c in "11735".chars() {
            screen.input_mut(Field::ZipCode).insert(c);
        }
        assert_eq!(screen.field_text(Field::ZipCode), "11735");
        assert_eq!(screen.snapshot().zip_code, "11735");
    }

    #[test]
    fn test_navigator_records_form() {
        let mut completed = CompletedScreen::default();
        assert!(completed.submitted().is_none());

        let form = RegistrationForm::new().with(Field::FirstName, "Jane");
        completed.show_completed(&form).expect("recording cannot fail");
        assert_eq!(completed.submitted(), Some(&form));
    }

    #[test]
    fn test_error_labels() {
        let mut screen = RegistrationScreen::default();
        screen.set_error(Field::Dob, "Date must be in MM/DD/YYYY format");
        assert_eq!(screen.error(Field::Dob), "Date must be in MM/DD/YYYY format");
        screen.set_error(Field::Dob, "");
        assert_eq!(screen.error(Field::Dob), "");
    }
}
