//! Enabled/disabled state of the submit button.

/// Whether the submit control accepts clicks.
///
/// Starts `Disabled` and follows aggregate validity on every re-evaluation.
/// There is no terminal state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Disabled,
    Enabled,
}

impl SubmitState {
    pub fn from_validity(valid: bool) -> Self {
        if valid { Self::Enabled } else { Self::Disabled }
    }

    /// Move to the state implied by `valid`.
    /// Returns true if the state changed.
    pub fn apply(&mut self, valid: bool) -> bool {
        let next = Self::from_validity(valid);
        if *self == next {
            return false;
        }
        *self = next;
        true
    }

    pub fn is_enabled(self) -> bool {
        matches!(self, Self::Enabled)
    }
}
