//! Cadastro Store — process-local storage behind the
//! [`UserRepository`](cadastro_core::UserRepository) trait.
//!
//! Nothing here is persisted; dropping the repository drops every user.

mod memory;

pub use memory::MemoryUserRepository;
