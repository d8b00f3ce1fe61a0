//! # registrar-config
//!
//! Layered configuration loading for Registrar using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`REGISTRAR_*` prefix, `__` as separator)
//! 2. Project-level `.registrar/config.toml`
//! 3. User-level `~/.config/registrar/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `REGISTRAR_DATABASE__PATH` -> `database.path`,
//! `REGISTRAR_SEED__RNG_SEED` -> `seed.rng_seed`, etc. The `__` (double
//! underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use registrar_config::RegistrarConfig;
//!
//! let config = RegistrarConfig::load().expect("config");
//! println!("store at {}", config.database.path);
//! ```

mod database;
mod error;
mod seed;

pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use seed::SeedConfig;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RegistrarConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

impl RegistrarConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Precedence (highest to lowest):
    /// 1. Environment variables (`REGISTRAR_*` prefix)
    /// 2. `.registrar/config.toml` (project-local)
    /// 3. `~/.config/registrar/config.toml` (user-global)
    /// 4. Default values
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add additional
    /// providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".registrar/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment = figment.merge(Env::prefixed("REGISTRAR_").split("__"));

        figment
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("registrar").join("config.toml"))
    }
}
