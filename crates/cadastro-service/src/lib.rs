//! Cadastro Service — the user directory: creation behind the legal-age
//! gate, lookup, deactivation with the admin exemption, and the text
//! report.

pub mod config;
pub mod error;
pub mod report;
pub mod service;

pub use config::DirectoryConfig;
pub use error::ValidationError;
pub use service::UserService;
