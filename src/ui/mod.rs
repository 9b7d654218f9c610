//! Screen state for the two-screen client.
//!
//! Each screen owns a typed view-state struct and is only mutated through
//! its operations. Rendering turns that state into text; the terminal loop
//! in `app` feeds user input in.

pub mod field;
pub mod login;
pub mod picker;
pub mod render;
pub mod search;
pub mod session;

use std::fmt;

pub use field::FieldState;
pub use login::{LoginField, LoginForm, LoginOutcome};
pub use picker::KindPicker;
pub use search::{SearchRequest, SearchScreen};
pub use session::{Screen, SessionGate};

/// Transient user-facing message, shown once and then discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub message: String,
}

impl Alert {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
