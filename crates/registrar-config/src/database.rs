//! Database location configuration.

use serde::{Deserialize, Serialize};

/// Default database file, relative to the working directory.
fn default_path() -> String {
    ".registrar/registrar.db".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Path to the libSQL database file. `:memory:` is accepted for
    /// throwaway stores.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

impl DatabaseConfig {
    /// Whether the configured store is in-memory (nothing persists).
    #[must_use]
    pub fn is_ephemeral(&self) -> bool {
        self.path == ":memory:"
    }
}
