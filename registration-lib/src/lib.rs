//! Student registration form logic.
//!
//! Holds the field model, the per-field validation rules, the submit button
//! state machine and the controller that reacts to focus and click
//! notifications from whatever UI hosts the form.

pub mod controller;
pub mod error;
pub mod form;
pub mod submit;
pub mod validation;

pub use controller::{FormController, FormView, Navigator, SubmitOutcome};
pub use error::NavigationError;
pub use form::{Field, RegistrationForm};
pub use submit::SubmitState;
pub use validation::{FieldError, FieldResult, FormReport, FormValidator};
