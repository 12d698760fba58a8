//! Profile service configuration.

use std::env;

use common::{DatabaseConfig, ServiceConfig};

/// Profile service configuration.
#[derive(Debug, Clone)]
pub struct ProfileServiceConfig {
    pub service: ServiceConfig,
    pub database: DatabaseConfig,
}

impl ProfileServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads `.env` first; service-specific variables win over the generic ones.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        Self {
            service: ServiceConfig {
                service_name: defaults.service.service_name,
                log_level: env::var("PROFILE_SERVICE_LOG_LEVEL")
                    .unwrap_or(defaults.service.log_level),
            },
            database: DatabaseConfig {
                url: env::var("PROFILE_SERVICE_DATABASE_URL")
                    .or_else(|_| env::var("DATABASE_URL"))
                    .unwrap_or(defaults.database.url),
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.database.max_connections),
                min_connections: env::var("DATABASE_MIN_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.database.min_connections),
            },
        }
    }
}

impl Default for ProfileServiceConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                service_name: "profile-service".to_string(),
                log_level: "info".to_string(),
            },
            database: DatabaseConfig::default(),
        }
    }
}
