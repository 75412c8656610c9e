//! Directory configuration.

/// Configuration for the user directory.
#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    /// Minimum age accepted at creation (default: 18).
    pub minimum_age: u32,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self { minimum_age: 18 }
    }
}
