//! Error types for the Cadastro system.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CadastroError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    /// User-facing validation failure. The message is shown verbatim.
    #[error("{message}")]
    Validation { message: String },
}

pub type CadastroResult<T> = Result<T, CadastroError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_displays_message_verbatim() {
        let err = CadastroError::Validation {
            message: "O usuário deve ser maior de idade.".into(),
        };
        assert_eq!(err.to_string(), "O usuário deve ser maior de idade.");
    }

    #[test]
    fn not_found_names_entity_and_id() {
        let err = CadastroError::NotFound {
            entity: "user".into(),
            id: "abc".into(),
        };
        assert_eq!(err.to_string(), "Entity not found: user with id abc");
    }
}
