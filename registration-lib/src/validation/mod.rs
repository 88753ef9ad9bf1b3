//! Field validation for the registration form.
//!
//! Every rule is a total function over its input: it always yields a
//! [`FieldResult`], never an error. The [`FormValidator`] evaluates all five
//! rules together so that every error label can be refreshed in one pass.
//!
//! # Example
//!
//! ```
//! use registration_lib::{Field, FormValidator, RegistrationForm};
//!
//! let form = RegistrationForm::new()
//!     .with(Field::FirstName, "Jane")
//!     .with(Field::LastName, "Doe")
//!     .with(Field::Email, "doj@farmingdale.edu")
//!     .with(Field::Dob, "05/12/1999")
//!     .with(Field::ZipCode, "11735");
//!
//! let report = FormValidator::default().validate(&form);
//! assert!(report.is_valid());
//! ```

mod result;
mod rules;
mod validator;

pub use result::{FieldError, FieldResult, FormReport};
pub use rules::{
    DEFAULT_EMAIL_DOMAIN, expected_email, validate_dob, validate_email, validate_first_name,
    validate_last_name, validate_zip_code,
};
pub use validator::FormValidator;
