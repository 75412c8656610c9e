//! Domain models for Cadastro.

pub mod user;
