use serde::{Deserialize, Serialize};
use std::net::IpAddr;

use crate::converter::{ConverterConfig, DEFAULT_BITRATE};

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub converter: ConverterConfig,
    #[serde(default)]
    pub defaults: ConversionDefaults,
    #[serde(default)]
    pub server: ServerConfig,
}

/// Defaults applied when a caller leaves an option out
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConversionDefaults {
    /// Target bitrate (e.g. "192k")
    #[serde(default = "default_bitrate")]
    pub bitrate: String,
}

impl Default for ConversionDefaults {
    fn default() -> Self {
        Self {
            bitrate: default_bitrate(),
        }
    }
}

fn default_bitrate() -> String {
    DEFAULT_BITRATE.to_string()
}

/// Prediction server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::from([0, 0, 0, 0])
}

fn default_port() -> u16 {
    8080
}
