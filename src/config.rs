//! Configuration module

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Default dataset file name (2015-2024 global threats export)
pub const DEFAULT_DATA_PATH: &str = "Global_Cybersecurity_Threats_2015-2024.csv";

/// Number of categories kept by the ranked charts
pub const DEFAULT_TOP_N: usize = 5;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the incident CSV file
    pub data_path: PathBuf,

    /// Bind address
    pub host: IpAddr,

    /// Server port
    pub port: u16,

    /// Entries kept by top-N aggregations
    pub top_n: usize,

    /// Environment (development, production)
    pub environment: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 5000,
            top_n: DEFAULT_TOP_N,
            environment: "development".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup, falling back to
    /// the defaults for missing or unparseable values.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            data_path: lookup("DATA_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),

            host: lookup("HOST")
                .and_then(|h| h.parse().ok())
                .unwrap_or(defaults.host),

            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),

            top_n: lookup("TOP_N")
                .and_then(|n| n.parse().ok())
                .filter(|n: &usize| *n > 0)
                .unwrap_or(defaults.top_n),

            environment: lookup("ENVIRONMENT")
                .unwrap_or(defaults.environment),
        }
    }

    /// Socket address the server binds to
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
