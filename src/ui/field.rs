pub const REQUIRED_MESSAGE: &str = "This field is required";

/// One text input: its raw value and an optional inline error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub error: Option<String>,
}

impl FieldState {
    /// Replace the value; typing something non-empty clears the error.
    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
        if !self.value.is_empty() {
            self.error = None;
        }
    }

    /// Set or clear the required-field error. Returns whether the field is valid.
    pub fn validate_required(&mut self) -> bool {
        if self.value.is_empty() {
            self.error = Some(REQUIRED_MESSAGE.to_string());
            false
        } else {
            self.error = None;
            true
        }
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_keeps_error_when_cleared_to_empty() {
        let mut field = FieldState::default();
        assert!(!field.validate_required());
        field.set("");
        assert_eq!(field.error.as_deref(), Some(REQUIRED_MESSAGE));
        field.set("x");
        assert!(field.error.is_none());
    }
}
