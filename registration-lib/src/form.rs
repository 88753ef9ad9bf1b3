//! The registration record and its field identifiers.

use std::fmt;

/// One of the five inputs on the registration screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Dob,
    ZipCode,
}

impl Field {
    /// All fields in display and evaluation order.
    pub const ALL: [Field; 5] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Dob,
        Field::ZipCode,
    ];

    /// Human-readable label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First name",
            Field::LastName => "Last name",
            Field::Email => "Email",
            Field::Dob => "Date of birth",
            Field::ZipCode => "Zip code",
        }
    }

    /// Stable widget id for the input.
    pub fn id(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Dob => "dob",
            Field::ZipCode => "zipCode",
        }
    }

    /// Position of this field in [`Field::ALL`].
    pub fn index(self) -> usize {
        match self {
            Field::FirstName => 0,
            Field::LastName => 1,
            Field::Email => 2,
            Field::Dob => 3,
            Field::ZipCode => 4,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Transient in-memory values of the five inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub dob: String,
    pub zip_code: String,
}

impl RegistrationForm {
    /// Create a form with every field empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Dob => &self.dob,
            Field::ZipCode => &self.zip_code,
        }
    }

    /// Mutable access to a field's value.
    pub fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Dob => &mut self.dob,
            Field::ZipCode => &mut self.zip_code,
        }
    }

    /// Replace a field's value.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }

    /// Builder-style setter.
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Reset every field to empty.
    pub fn clear(&mut self) {
        for field in Field::ALL {
            self.field_mut(field).clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_form_is_empty() {
        let form = RegistrationForm::new();
        for field in Field::ALL {
            assert_eq!(form.get(field), "");
        }
    }

    #[test]
    fn test_set_and_clear() {
        let mut form = RegistrationForm::new().with(Field::FirstName, "Jane");
        form.set(Field::ZipCode, "11735");
        assert_eq!(form.get(Field::FirstName), "Jane");
        assert_eq!(form.zip_code, "11735");

        form.clear();
        assert_eq!(form, RegistrationForm::default());
    }

    #[test]
    fn test_index_matches_order() {
        for (i, field) in Field::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
        }
    }
}
