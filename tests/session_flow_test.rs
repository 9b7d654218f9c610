use shelfscout::domain::DEFAULT_CREDENTIALS;
use shelfscout::ui::login::MISMATCH_MESSAGE;
use shelfscout::ui::{LoginField, LoginOutcome, Screen, SessionGate};

fn gate() -> SessionGate {
    SessionGate::new(DEFAULT_CREDENTIALS, "https://openlibrary.org")
}

fn fill(gate: &mut SessionGate, identifier: &str, secret: &str) {
    let login = gate.login_mut();
    login.on_focus(LoginField::Identifier);
    login.update_field(LoginField::Identifier, identifier);
    login.on_blur(LoginField::Identifier);
    login.on_focus(LoginField::Secret);
    login.update_field(LoginField::Secret, secret);
    login.on_blur(LoginField::Secret);
}

#[test]
fn test_empty_identifier_never_opens_gate() {
    let mut gate = gate();
    fill(&mut gate, "", "admin123");

    assert_eq!(gate.submit_login(), LoginOutcome::Invalid);
    assert_eq!(gate.active_screen(), Screen::Login);
    assert!(gate.login().field(LoginField::Identifier).error.is_some());
    assert!(gate.login().field(LoginField::Secret).error.is_none());
}

#[test]
fn test_valid_credentials_open_gate() {
    let mut gate = gate();
    fill(&mut gate, "admin", "admin123");

    assert_eq!(gate.submit_login(), LoginOutcome::Success);
    assert_eq!(gate.active_screen(), Screen::Search);
    assert!(gate.login().field(LoginField::Identifier).error.is_none());
    assert!(gate.login().field(LoginField::Secret).error.is_none());
}

#[test]
fn test_mismatch_alerts_without_field_errors() {
    let mut gate = gate();
    fill(&mut gate, "admin", "wrong");

    match gate.submit_login() {
        LoginOutcome::Rejected(alert) => assert_eq!(alert.message, MISMATCH_MESSAGE),
        other => panic!("expected rejection, got {:?}", other),
    }
    assert_eq!(gate.active_screen(), Screen::Login);
    assert!(gate.login().field(LoginField::Identifier).error.is_none());
    assert!(gate.login().field(LoginField::Secret).error.is_none());
}

#[test]
fn test_retry_after_mismatch() {
    let mut gate = gate();
    fill(&mut gate, "admin", "wrong");
    assert!(matches!(gate.submit_login(), LoginOutcome::Rejected(_)));

    gate.login_mut().update_field(LoginField::Secret, "admin123");
    assert_eq!(gate.submit_login(), LoginOutcome::Success);
    assert!(gate.is_authenticated());
}
