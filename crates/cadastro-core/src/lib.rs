//! Cadastro Core — domain models, error taxonomy and the storage
//! abstraction shared by the other Cadastro crates.

pub mod error;
pub mod models;
pub mod repository;

pub use error::{CadastroError, CadastroResult};
pub use models::user::{CreateUser, User, UserStatus};
pub use repository::UserRepository;
