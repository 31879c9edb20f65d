//! # Configuration Management
//!
//! This module handles loading configuration from environment variables,
//! 12-factor style.
//!
//! ## Environment Variables
//! - `HOST`: Server bind address (default: 127.0.0.1)
//! - `PORT`: Server port (default: 8080)

use anyhow::Result;
use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host/IP address to bind to
    /// Examples: "127.0.0.1" (localhost only), "0.0.0.0" (all interfaces)
    pub host: String,

    /// Server port number
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Variables from a `.env` file are loaded first if one exists, then
    /// each value falls back to its default when unset.
    ///
    /// # Errors
    /// Returns an error if `PORT` is set but is not a valid port number.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
        })
    }

    /// Get the socket address to bind the server to.
    ///
    /// Example: "127.0.0.1:8080"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_address_joins_host_and_port() {
        let config = Config {
            host: "0.0.0.0".to_string(),
            port: 9000,
        };
        assert_eq!(config.bind_address(), "0.0.0.0:9000");
    }
}
