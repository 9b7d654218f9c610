/// Identifier/secret pair the login form compares against.
///
/// This is a placeholder gate: a plaintext, case-sensitive equality check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Credentials {
    pub identifier: &'static str,
    pub secret: &'static str,
}

pub const DEFAULT_CREDENTIALS: Credentials = Credentials {
    identifier: "admin",
    secret: "admin123",
};

impl Credentials {
    pub fn matches(&self, identifier: &str, secret: &str) -> bool {
        self.identifier == identifier && self.secret == secret
    }
}

impl Default for Credentials {
    fn default() -> Self {
        DEFAULT_CREDENTIALS
    }
}
