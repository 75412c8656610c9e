//! User directory service.

use cadastro_core::error::CadastroResult;
use cadastro_core::models::user::{CreateUser, User, UserStatus};
use cadastro_core::repository::UserRepository;
use cadastro_store::MemoryUserRepository;
use tracing::{debug, info, warn};

use crate::config::DirectoryConfig;
use crate::error::ValidationError;
use crate::report;

/// The user directory.
///
/// Generic over the repository so the rules here do not depend on how
/// users are stored. Every value handed out is a copy; the only way to
/// change a stored user is [`deactivate_user`](Self::deactivate_user).
pub struct UserService<R: UserRepository> {
    repo: R,
    config: DirectoryConfig,
}

impl UserService<MemoryUserRepository> {
    /// An empty in-memory directory with the default configuration.
    pub fn in_memory() -> Self {
        Self::new(MemoryUserRepository::new())
    }
}

impl Default for UserService<MemoryUserRepository> {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repo: R) -> Self {
        Self::with_config(repo, DirectoryConfig::default())
    }

    pub fn with_config(repo: R, config: DirectoryConfig) -> Self {
        Self { repo, config }
    }

    pub fn config(&self) -> &DirectoryConfig {
        &self.config
    }

    /// Create a regular (non-admin) user.
    pub fn create_user(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
        age: u32,
    ) -> CadastroResult<User> {
        self.create(CreateUser::new(name, email, age))
    }

    /// Create an admin user. Admins cannot be deactivated.
    pub fn create_admin(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
        age: u32,
    ) -> CadastroResult<User> {
        self.create(CreateUser::admin(name, email, age))
    }

    /// Validate `input` and store it as a new active user.
    ///
    /// Fails with a validation error, storing nothing, when the age is
    /// below [`DirectoryConfig::minimum_age`].
    pub fn create(&mut self, input: CreateUser) -> CadastroResult<User> {
        let minimum = self.config.minimum_age;
        if input.age < minimum {
            warn!(age = input.age, minimum, "Rejected underage user");
            return Err(ValidationError::Underage {
                age: input.age,
                minimum,
            }
            .into());
        }

        let user = self.repo.create(input)?;
        info!(user_id = %user.id, is_admin = user.is_admin, "Created user");
        Ok(user)
    }

    /// Look up a user. `None` means no user has this id.
    pub fn get_user_by_id(&self, id: &str) -> Option<User> {
        let user = self.repo.get_by_id(id);
        if user.is_none() {
            debug!(user_id = %id, "User not found");
        }
        user
    }

    /// Deactivate a user.
    ///
    /// Returns `false` for admins (left active) and for unknown ids.
    /// Returns `true` once a regular user is inactive, including when
    /// it already was; an inactive user is not touched again.
    pub fn deactivate_user(&mut self, id: &str) -> bool {
        let Some(user) = self.repo.get_by_id(id) else {
            debug!(user_id = %id, "Cannot deactivate unknown user");
            return false;
        };

        if user.is_admin {
            warn!(user_id = %id, "Refused to deactivate admin user");
            return false;
        }

        if user.status == UserStatus::Inactive {
            return true;
        }

        match self.repo.set_status(id, UserStatus::Inactive) {
            Ok(_) => {
                info!(user_id = %id, "Deactivated user");
                true
            }
            Err(err) => {
                warn!(user_id = %id, error = %err, "Failed to deactivate user");
                false
            }
        }
    }

    /// All users in creation order.
    pub fn list_users(&self) -> Vec<User> {
        self.repo.list()
    }

    pub fn user_count(&self) -> usize {
        self.repo.count()
    }

    pub fn generate_user_report(&self) -> String {
        let users = self.repo.list();
        debug!(users = users.len(), "Generating user report");
        report::render(&users)
    }

    /// Empty the directory, as if freshly constructed.
    pub fn clear(&mut self) {
        debug!("Clearing user directory");
        self.repo.clear();
    }
}
