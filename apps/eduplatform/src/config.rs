//! # Configuration
//!
//! Layered configuration for the EduPlatform binary.
//!
//! Precedence (lowest to highest):
//! 1. Built-in defaults
//! 2. TOML file (optional; a missing file means defaults)
//! 3. Environment variables
//! 4. CLI flags (applied by the caller)
//!
//! ## File Format
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 8080
//!
//! [dashboard]
//! default_role = "student"
//! viewer_name = "Alexander Ivanov"
//! ```
//!
//! ## Environment Variables
//!
//! - `EDUPLATFORM_HOST`: server bind host
//! - `EDUPLATFORM_PORT`: server bind port
//! - `EDUPLATFORM_ROLE`: default role (unknown values fall back to student,
//!   empty values are ignored)

use eduplatform_core::{EduError, Role};
use serde::Deserialize;
use std::path::Path;

/// Maximum accepted config file size (64 KB).
const MAX_CONFIG_FILE_SIZE: u64 = 64 * 1024;

// =============================================================================
// CONFIG STRUCTURE
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    /// Role used when a request or command does not name one.
    pub default_role: Role,
    /// Name shown in the dashboard header.
    pub viewer_name: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_role: Role::Student,
            viewer_name: "Alexander Ivanov".to_string(),
        }
    }
}

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub dashboard: DashboardConfig,
}

// =============================================================================
// LOADING
// =============================================================================

impl AppConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, EduError> {
        toml::from_str(text).map_err(|e| EduError::Config(e.to_string()))
    }

    /// Read the config file at `path`, or defaults if it does not exist.
    pub fn from_file(path: &Path) -> Result<Self, EduError> {
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let metadata = std::fs::metadata(path)
            .map_err(|e| EduError::Io(format!("Cannot read config metadata: {}", e)))?;
        if metadata.len() > MAX_CONFIG_FILE_SIZE {
            return Err(EduError::Config(format!(
                "Config file {} bytes exceeds maximum {} bytes",
                metadata.len(),
                MAX_CONFIG_FILE_SIZE
            )));
        }

        let text = std::fs::read_to_string(path)
            .map_err(|e| EduError::Io(format!("Cannot read config file: {}", e)))?;
        let config = Self::from_toml_str(&text)?;
        tracing::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Apply overrides from an environment lookup.
    ///
    /// Takes the lookup as a function so tests need not touch process env.
    pub fn apply_env_with<F>(mut self, lookup: F) -> Result<Self, EduError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("EDUPLATFORM_HOST").filter(|h| !h.is_empty()) {
            self.server.host = host;
        }
        if let Some(port) = lookup("EDUPLATFORM_PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| EduError::Config(format!("EDUPLATFORM_PORT is not a port: {}", port)))?;
        }
        if let Some(role) = lookup("EDUPLATFORM_ROLE").filter(|r| !r.trim().is_empty()) {
            self.dashboard.default_role = resolve_role(&role);
        }
        Ok(self)
    }

    /// Load file then environment.
    pub fn load(path: &Path) -> Result<Self, EduError> {
        Self::from_file(path)?.apply_env_with(|key| std::env::var(key).ok())
    }
}

/// Parse a role tag leniently, warning when it falls back to student.
pub fn resolve_role(text: &str) -> Role {
    match text.parse::<Role>() {
        Ok(role) => role,
        Err(e) => {
            tracing::warn!("{}; falling back to least-privileged role 'student'", e);
            Role::Student
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: BTreeMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_toml_is_default() {
        let config = AppConfig::from_toml_str("").expect("parse");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config = AppConfig::from_toml_str("[dashboard]\ndefault_role = \"teacher\"\n")
            .expect("parse");
        assert_eq!(config.dashboard.default_role, Role::Teacher);
        assert_eq!(config.server, ServerConfig::default());
    }

    #[test]
    fn unknown_key_rejected() {
        let result = AppConfig::from_toml_str("[server]\nhots = \"x\"\n");
        assert!(matches!(result, Err(EduError::Config(_))));
    }

    #[test]
    fn unknown_role_in_file_rejected() {
        let result = AppConfig::from_toml_str("[dashboard]\ndefault_role = \"root\"\n");
        assert!(matches!(result, Err(EduError::Config(_))));
    }

    #[test]
    fn env_overrides_file() {
        let config = AppConfig::from_toml_str("[server]\nport = 9000\n")
            .expect("parse")
            .apply_env_with(env(&[
                ("EDUPLATFORM_PORT", "9100"),
                ("EDUPLATFORM_ROLE", "admin"),
            ]))
            .expect("env");
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.dashboard.default_role, Role::Admin);
    }

    #[test]
    fn env_bad_port_is_error() {
        let result = AppConfig::default().apply_env_with(env(&[("EDUPLATFORM_PORT", "http")]));
        assert!(matches!(result, Err(EduError::Config(_))));
    }

    #[test]
    fn env_unknown_role_falls_back() {
        let config = AppConfig::default()
            .apply_env_with(env(&[("EDUPLATFORM_ROLE", "superuser")]))
            .expect("env");
        assert_eq!(config.dashboard.default_role, Role::Student);
    }

    #[test]
    fn env_empty_role_keeps_file_role() {
        let config = AppConfig::from_toml_str("[dashboard]\ndefault_role = \"admin\"\n")
            .expect("parse")
            .apply_env_with(env(&[("EDUPLATFORM_ROLE", ""), ("EDUPLATFORM_HOST", "")]))
            .expect("env");
        assert_eq!(config.dashboard.default_role, Role::Admin);
        assert_eq!(config.server.host, "127.0.0.1");

        let config = AppConfig::from_toml_str("[dashboard]\ndefault_role = \"teacher\"\n")
            .expect("parse")
            .apply_env_with(env(&[("EDUPLATFORM_ROLE", "  ")]))
            .expect("env");
        assert_eq!(config.dashboard.default_role, Role::Teacher);
    }
}
