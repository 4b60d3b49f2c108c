//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/collection-rules/collection-rules.toml`
//! 3. Explicit config file passed with `--config`
//! 4. Environment variables: `COLLECTION_RULES_*` prefix, `__` between section and key
//!
//! The defaults reproduce the canonical demonstration inputs exactly.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult};

/// Upper bound accepted for `demo.initial_capacity`.
pub const MAX_INITIAL_CAPACITY: usize = 1 << 20;

/// Map flavour used by the entry traversal demonstration.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MapKind {
    /// Unspecified iteration order
    #[default]
    Hash,
    /// Iteration sorted by key
    Btree,
}

/// Inputs of the demonstrations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DemoSettings {
    /// Capacity hint for the presized list
    pub initial_capacity: usize,
    /// Element removed during the iteration demonstration
    pub sentinel: String,
    /// Route de-duplication through an insertion-ordered set
    pub preserve_insertion_order: bool,
    pub map_kind: MapKind,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            initial_capacity: 100,
            sentinel: "b".into(),
            preserve_insertion_order: true,
            map_kind: MapKind::Hash,
        }
    }
}

/// Effective settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub demo: DemoSettings,
}

/// Get the XDG config directory for collection-rules.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "collection-rules").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("collection-rules.toml"))
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `explicit` - Optional config file; must exist when given
    pub fn load(explicit: Option<&Path>) -> ApplicationResult<Self> {
        let mut builder = Config::builder();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("load: global config {}", global_path.display());
                builder = builder.add_source(File::from(global_path).required(false));
            }
        }

        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ApplicationError::Config {
                    message: format!("config file not found: {}", path.display()),
                });
            }
            debug!("load: explicit config {}", path.display());
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("COLLECTION_RULES")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_err)?;
        let settings: Self = config.try_deserialize().map_err(config_err)?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> ApplicationResult<()> {
        if self.demo.sentinel.is_empty() {
            return Err(ApplicationError::Config {
                message: "demo.sentinel must not be empty".into(),
            });
        }
        if self.demo.initial_capacity > MAX_INITIAL_CAPACITY {
            return Err(ApplicationError::Config {
                message: format!(
                    "demo.initial_capacity {} exceeds maximum {MAX_INITIAL_CAPACITY}",
                    self.demo.initial_capacity
                ),
            });
        }
        Ok(())
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> ApplicationResult<String> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# collection-rules configuration
#
# Locations (by precedence, lowest to highest):
#   Global:   ~/.config/collection-rules/collection-rules.toml
#   Explicit: --config <path>
#   Env:      COLLECTION_RULES_DEMO__<KEY> environment variables

[demo]
# Capacity hint for the presized list (at most 1048576)
# initial_capacity = 100

# Element removed through the cursor in the iteration demonstration
# sentinel = "b"

# De-duplicate through an insertion-ordered set (false: hash set, unspecified order)
# preserve_insertion_order = true

# Map used for entry traversal: "hash" (unspecified order) or "btree" (sorted by key)
# map_kind = "hash"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
