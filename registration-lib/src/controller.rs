//! Event handlers connecting the validator to a UI.
//!
//! The hosting UI implements [`FormView`] (field text, error labels, submit
//! flag) and [`Navigator`] (screen replacement), then forwards focus changes
//! and submit clicks to a [`FormController`]. All work is synchronous and
//! runs on the caller's thread.

use crate::error::NavigationError;
use crate::form::{Field, RegistrationForm};
use crate::submit::SubmitState;
use crate::validation::{FieldResult, FormReport, FormValidator};

/// The UI side of the registration screen.
pub trait FormView {
    /// Current text of an input.
    fn field_text(&self, field: Field) -> String;

    /// Set the error label of an input. An empty message clears it.
    fn set_error(&mut self, field: Field, message: &str);

    /// Enable or disable the submit control.
    fn set_submit_enabled(&mut self, enabled: bool);

    /// Snapshot of all five inputs.
    fn snapshot(&self) -> RegistrationForm {
        let mut form = RegistrationForm::new();
        for field in Field::ALL {
            form.set(field, self.field_text(field));
        }
        form
    }
}

/// Replaces the registration screen once the form is accepted.
pub trait Navigator {
    fn show_completed(&mut self, form: &RegistrationForm) -> Result<(), NavigationError>;
}

/// What happened when the submit control was activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The form was valid and the next screen is showing.
    Navigated,
    /// The guard failed; labels were refreshed and the screen is unchanged.
    Rejected(FormReport),
}

/// Drives a [`FormView`] from focus and click notifications.
pub struct FormController<V, N> {
    view: V,
    navigator: N,
    validator: FormValidator,
    state: SubmitState,
}

impl<V: FormView, N: Navigator> FormController<V, N> {
    /// Create a controller and push the initial disabled state to the view.
    pub fn new(view: V, navigator: N) -> Self {
        Self::with_validator(view, navigator, FormValidator::default())
    }

    pub fn with_validator(mut view: V, navigator: N, validator: FormValidator) -> Self {
        let state = SubmitState::default();
        view.set_submit_enabled(state.is_enabled());
        Self {
            view,
            navigator,
            validator,
            state,
        }
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Handle a focus change on `field`.
    ///
    /// Losing focus validates that field first. Either direction then
    /// re-evaluates the whole form.
    pub fn on_focus_changed(&mut self, field: Field, focused: bool) -> FormReport {
        if !focused {
            let form = self.view.snapshot();
            let result = self.validator.validate_field(&form, field);
            self.write_label(field, &result);
        }
        self.refresh()
    }

    /// Validate every field, refresh all labels and the submit flag.
    pub fn refresh(&mut self) -> FormReport {
        let form = self.view.snapshot();
        let report = self.validator.validate(&form);

        for (field, result) in report.iter() {
            self.write_label(field, result);
        }

        if self.state.apply(report.is_valid()) {
            log::debug!("[submit] state -> {:?}", self.state);
        }
        self.view.set_submit_enabled(self.state.is_enabled());

        report
    }

    /// Handle a click on the submit control.
    ///
    /// Re-checks the form before navigating, even when the control is enabled.
    pub fn on_submit(&mut self) -> Result<SubmitOutcome, NavigationError> {
        let report = self.refresh();
        if report.is_invalid() {
            log::debug!("[submit] rejected, {} invalid field(s)", report.errors().len());
            return Ok(SubmitOutcome::Rejected(report));
        }

        let form = self.view.snapshot();
        self.navigator.show_completed(&form)?;
        log::debug!("[submit] navigated to completed screen");
        Ok(SubmitOutcome::Navigated)
    }

    fn write_label(&mut self, field: Field, result: &FieldResult) {
        self.view.set_error(field, &result.message);
    }
}
