use crate::domain::Credentials;

use super::{LoginForm, LoginOutcome, SearchScreen};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Search,
}

/// Top-level switch between the login and search screens.
///
/// Authentication is one-way for the life of the process.
#[derive(Debug, Clone)]
pub struct SessionGate {
    authenticated: bool,
    base_url: String,
    login: LoginForm,
    search: Option<SearchScreen>,
}

impl SessionGate {
    pub fn new(credentials: Credentials, base_url: impl Into<String>) -> Self {
        Self {
            authenticated: false,
            base_url: base_url.into(),
            login: LoginForm::new(credentials),
            search: None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn active_screen(&self) -> Screen {
        if self.authenticated {
            Screen::Search
        } else {
            Screen::Login
        }
    }

    /// Flip to the search screen, mounting it on first use.
    pub fn mark_authenticated(&mut self) {
        self.authenticated = true;
        if self.search.is_none() {
            self.search = Some(SearchScreen::new(self.base_url.clone()));
        }
    }

    pub fn login(&self) -> &LoginForm {
        &self.login
    }

    pub fn login_mut(&mut self) -> &mut LoginForm {
        &mut self.login
    }

    pub fn search(&self) -> Option<&SearchScreen> {
        self.search.as_ref()
    }

    pub fn search_mut(&mut self) -> Option<&mut SearchScreen> {
        self.search.as_mut()
    }

    /// Submit the login form and open the gate on success.
    pub fn submit_login(&mut self) -> LoginOutcome {
        let outcome = self.login.submit();
        if outcome == LoginOutcome::Success {
            self.mark_authenticated();
        }
        outcome
    }
}
