use crate::domain::Credentials;

use super::{Alert, FieldState};

pub const MISMATCH_MESSAGE: &str = "Invalid username or password";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Identifier,
    Secret,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Credentials matched; the session gate should open
    Success,
    /// At least one field is empty; field errors are set
    Invalid,
    /// Both fields filled but the pair did not match
    Rejected(Alert),
}

/// Login screen state.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    credentials: Credentials,
    identifier: FieldState,
    secret: FieldState,
}

impl LoginForm {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            identifier: FieldState::default(),
            secret: FieldState::default(),
        }
    }

    pub fn field(&self, field: LoginField) -> &FieldState {
        match field {
            LoginField::Identifier => &self.identifier,
            LoginField::Secret => &self.secret,
        }
    }

    fn field_mut(&mut self, field: LoginField) -> &mut FieldState {
        match field {
            LoginField::Identifier => &mut self.identifier,
            LoginField::Secret => &mut self.secret,
        }
    }

    pub fn update_field(&mut self, field: LoginField, value: impl Into<String>) {
        self.field_mut(field).set(value);
    }

    /// Check both fields for emptiness; both are always visited.
    pub fn validate(&mut self) -> bool {
        let identifier_ok = self.identifier.validate_required();
        let secret_ok = self.secret.validate_required();
        identifier_ok && secret_ok
    }

    pub fn submit(&mut self) -> LoginOutcome {
        if !self.validate() {
            return LoginOutcome::Invalid;
        }

        if self
            .credentials
            .matches(&self.identifier.value, &self.secret.value)
        {
            tracing::info!("Login succeeded for user: {}", self.identifier.value);
            LoginOutcome::Success
        } else {
            tracing::warn!("Login rejected for user: {}", self.identifier.value);
            LoginOutcome::Rejected(Alert::new(MISMATCH_MESSAGE))
        }
    }

    pub fn on_focus(&mut self, field: LoginField) {
        self.field_mut(field).clear_error();
    }

    pub fn on_blur(&mut self, field: LoginField) {
        self.field_mut(field).validate_required();
    }
}
