//! Domain layer - Pure business abstractions
//!
//! No HTTP or terminal dependencies here: the credential gate and the
//! error types shared by the other layers.

pub mod credentials;
pub mod errors;

pub use credentials::{Credentials, DEFAULT_CREDENTIALS};
pub use errors::DomainError;
