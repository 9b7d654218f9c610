pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod models;
pub mod modules;
pub mod ui;

pub use infrastructure::config;
pub use infrastructure::logging;
pub use modules::integrations::openlibrary;
