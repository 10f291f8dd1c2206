//! Server configuration for the FHIR REST API.
//!
//! Every setting can be given as a command line flag or through the
//! environment.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `PORT` | 8080 | Server port |
//! | `HFS_HOST` | 0.0.0.0 | Host to bind |
//! | `HFS_LOG_LEVEL` | info | Log level |
//! | `HFS_REQUEST_TIMEOUT` | 15 | Request timeout (seconds) |
//! | `HFS_MAX_BODY_SIZE` | 1048576 | Max request body (bytes) |
//! | `HFS_RESOURCE_TYPE` | Patient | The single resource type served |
//! | `HFS_FHIR_BASE` | /fhir | Path prefix for FHIR routes and references |
//! | `HFS_ENABLE_CORS` | false | Enable permissive CORS |
//!
//! # Example
//!
//! ```rust
//! use hfs_lite_rest::ServerConfig;
//!
//! let config = ServerConfig {
//!     port: 3000,
//!     resource_type: "Observation".to_string(),
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

use clap::Parser;

use crate::fhir_types::is_valid_resource_type;

/// Server configuration for the FHIR REST API.
#[derive(Debug, Clone, Parser)]
#[command(name = "hfs-lite")]
#[command(about = "Single-resource FHIR RESTful API Server")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "PORT", default_value = "8080")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "HFS_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "HFS_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Request timeout in seconds.
    #[arg(long, env = "HFS_REQUEST_TIMEOUT", default_value = "15")]
    pub request_timeout: u64,

    /// Maximum request body size in bytes.
    #[arg(long, env = "HFS_MAX_BODY_SIZE", default_value = "1048576")]
    pub max_body_size: usize,

    /// The resource type served under the FHIR base.
    #[arg(long, env = "HFS_RESOURCE_TYPE", default_value = "Patient")]
    pub resource_type: String,

    /// Path prefix for FHIR routes and the references the server emits.
    #[arg(long, env = "HFS_FHIR_BASE", default_value = "/fhir")]
    pub fhir_base: String,

    /// Enable permissive CORS.
    #[arg(long, env = "HFS_ENABLE_CORS", default_value = "false")]
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "0.0.0.0".to_string(),
            log_level: "info".to_string(),
            request_timeout: 15,
            max_body_size: 1024 * 1024, // 1MB
            resource_type: "Patient".to_string(),
            fhir_base: "/fhir".to_string(),
            enable_cors: false,
        }
    }
}

impl ServerConfig {
    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the FHIR base without a trailing slash (empty for the root).
    pub fn fhir_base(&self) -> &str {
        self.fhir_base.trim_end_matches('/')
    }

    /// Returns the type-level path, e.g. `/fhir/Patient`.
    pub fn type_path(&self) -> String {
        format!("{}/{}", self.fhir_base(), self.resource_type)
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.max_body_size == 0 {
            errors.push("Max body size cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if !is_valid_resource_type(&self.resource_type) {
            errors.push(format!(
                "Resource type '{}' is not a FHIR resource type name",
                self.resource_type
            ));
        }

        let base = self.fhir_base();
        if !base.is_empty() && !base.starts_with('/') {
            errors.push(format!("FHIR base '{}' must start with '/'", self.fhir_base));
        }
        if base.contains(['{', '}', '*']) {
            errors.push(format!(
                "FHIR base '{}' cannot contain route wildcards",
                self.fhir_base
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a configuration suitable for testing.
    ///
    /// Binds to an ephemeral localhost port and uses a short timeout.
    pub fn for_testing() -> Self {
        Self {
            port: 0, // Let OS assign port
            host: "127.0.0.1".to_string(),
            log_level: "debug".to_string(),
            request_timeout: 5,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.request_timeout, 15);
        assert_eq!(config.resource_type, "Patient");
        assert!(!config.enable_cors);
    }

    #[test]
    fn test_clap_defaults_match_default_impl() {
        let parsed = ServerConfig::try_parse_from(["hfs-lite"]).unwrap();
        let default = ServerConfig::default();
        assert_eq!(parsed.host, default.host);
        assert_eq!(parsed.max_body_size, default.max_body_size);
        assert_eq!(parsed.fhir_base, default.fhir_base);
    }

    #[test]
    fn test_parse_flags() {
        let config = ServerConfig::try_parse_from([
            "hfs-lite",
            "--port",
            "9090",
            "--resource-type",
            "Observation",
            "--fhir-base",
            "/r4",
        ])
        .unwrap();
        assert_eq!(config.port, 9090);
        assert_eq!(config.type_path(), "/r4/Observation");
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            port: 3000,
            host: "127.0.0.1".to_string(),
            ..Default::default()
        };
        assert_eq!(config.socket_addr(), "127.0.0.1:3000");
    }

    #[test]
    fn test_paths() {
        let config = ServerConfig {
            fhir_base: "/fhir/".to_string(),
            ..Default::default()
        };
        assert_eq!(config.fhir_base(), "/fhir");
        assert_eq!(config.type_path(), "/fhir/Patient");

        let root = ServerConfig {
            fhir_base: String::new(),
            ..Default::default()
        };
        assert_eq!(root.type_path(), "/Patient");
    }

    #[test]
    fn test_validate_valid() {
        assert!(ServerConfig::default().validate().is_ok());
        assert!(ServerConfig::for_testing().validate().is_ok());
    }

    #[test]
    fn test_validate_invalid_resource_type() {
        let config = ServerConfig {
            resource_type: "patient".to_string(),
            ..Default::default()
        };
        let errors = config.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.contains("Resource type")));
    }

    #[test]
    fn test_validate_invalid_base_and_limits() {
        let config = ServerConfig {
            fhir_base: "fhir".to_string(),
            request_timeout: 0,
            max_body_size: 0,
            ..Default::default()
        };
        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_for_testing() {
        let config = ServerConfig::for_testing();
        assert_eq!(config.port, 0);
        assert_eq!(config.request_timeout, 5);
        assert!(!config.enable_cors);
    }
}
