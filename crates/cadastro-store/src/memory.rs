//! In-memory implementation of [`UserRepository`].

use std::collections::HashMap;

use cadastro_core::error::{CadastroError, CadastroResult};
use cadastro_core::models::user::{CreateUser, User, UserStatus};
use cadastro_core::repository::UserRepository;
use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

/// Users kept in insertion order, with an id → slot index on the side.
#[derive(Debug, Default, Clone)]
pub struct MemoryUserRepository {
    users: Vec<User>,
    index: HashMap<String, usize>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }
}

impl UserRepository for MemoryUserRepository {
    fn create(&mut self, input: CreateUser) -> CadastroResult<User> {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now();

        let user = User {
            id: id.clone(),
            name: input.name,
            email: input.email,
            age: input.age,
            is_admin: input.is_admin,
            status: UserStatus::Active,
            created_at: now,
            updated_at: now,
        };

        self.index.insert(id, self.users.len());
        self.users.push(user.clone());

        debug!(user_id = %user.id, slot = self.users.len() - 1, "Stored user");
        Ok(user)
    }

    fn get_by_id(&self, id: &str) -> Option<User> {
        self.slot(id).map(|slot| self.users[slot].clone())
    }

    fn set_status(&mut self, id: &str, status: UserStatus) -> CadastroResult<User> {
        let slot = self.slot(id).ok_or_else(|| CadastroError::NotFound {
            entity: "user".into(),
            id: id.into(),
        })?;

        let user = &mut self.users[slot];
        user.status = status;
        user.updated_at = Utc::now();
        Ok(user.clone())
    }

    fn list(&self) -> Vec<User> {
        self.users.clone()
    }

    fn count(&self) -> usize {
        self.users.len()
    }

    fn clear(&mut self) {
        debug!(dropped = self.users.len(), "Clearing user store");
        self.users.clear();
        self.index.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_tracks_insertion_slots() {
        let mut repo = MemoryUserRepository::new();
        let a = repo.create(CreateUser::new("A", "a@example.com", 20)).unwrap();
        let b = repo.create(CreateUser::new("B", "b@example.com", 21)).unwrap();

        assert_eq!(repo.slot(&a.id), Some(0));
        assert_eq!(repo.slot(&b.id), Some(1));
        assert_eq!(repo.slot("missing"), None);
    }

    #[test]
    fn clear_empties_index() {
        let mut repo = MemoryUserRepository::new();
        let a = repo.create(CreateUser::new("A", "a@example.com", 20)).unwrap();
        repo.clear();

        assert_eq!(repo.slot(&a.id), None);
        assert!(repo.users.is_empty());
    }
}
