//! Repository trait definitions for data access abstraction.
//!
//! Operations are synchronous: the directory lives in process memory
//! and is owned by a single caller. Mutating methods take `&mut self`.

use crate::error::CadastroResult;
use crate::models::user::{CreateUser, User, UserStatus};

pub trait UserRepository: Send + Sync {
    /// Store a new user as [`UserStatus::Active`] under a freshly
    /// generated id. The input is assumed to be validated already.
    fn create(&mut self, input: CreateUser) -> CadastroResult<User>;

    fn get_by_id(&self, id: &str) -> Option<User>;

    /// Overwrite the status of an existing user and bump `updated_at`.
    fn set_status(&mut self, id: &str, status: UserStatus) -> CadastroResult<User>;

    /// All users in insertion order.
    fn list(&self) -> Vec<User>;

    fn count(&self) -> usize;

    /// Drop every stored user.
    fn clear(&mut self);
}
