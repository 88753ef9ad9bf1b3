use std::fmt;

use crate::form::Field;

/// Verdict for a single field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldResult {
    pub is_valid: bool,
    /// Empty when the field is valid.
    pub message: String,
}

impl FieldResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            message: String::new(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: message.into(),
        }
    }
}

/// Information about a single field validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of validating every field of the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormReport {
    results: [FieldResult; 5],
}

impl FormReport {
    pub(crate) fn new(results: [FieldResult; 5]) -> Self {
        Self { results }
    }

    /// Aggregate validity: every field passed.
    pub fn is_valid(&self) -> bool {
        self.results.iter().all(|r| r.is_valid)
    }

    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Verdict for one field.
    pub fn get(&self, field: Field) -> &FieldResult {
        &self.results[field.index()]
    }

    /// Field/verdict pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldResult)> {
        Field::ALL.into_iter().zip(self.results.iter())
    }

    /// All failing fields with their messages.
    pub fn errors(&self) -> Vec<FieldError> {
        self.iter()
            .filter(|(_, r)| !r.is_valid)
            .map(|(field, r)| FieldError {
                field,
                message: r.message.clone(),
            })
            .collect()
    }

    /// First failing field, for focusing.
    pub fn first_invalid(&self) -> Option<Field> {
        self.iter().find(|(_, r)| !r.is_valid).map(|(f, _)| f)
    }
}
