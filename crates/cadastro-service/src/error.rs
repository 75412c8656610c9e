//! Validation error types.

use cadastro_core::error::CadastroError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("O usuário deve ser maior de idade.")]
    Underage { age: u32, minimum: u32 },
}

impl From<ValidationError> for CadastroError {
    fn from(err: ValidationError) -> Self {
        CadastroError::Validation {
            message: err.to_string(),
        }
    }
}
