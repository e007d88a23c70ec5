use std::net::SocketAddr;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

/// Server configuration, loadable from a TOML file.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: SocketAddr,

    /// Credentials written into the store at startup, after bootstrap.
    #[serde(default)]
    pub seed_credentials: Vec<SeedCredential>,
}

/// A `(name, ecert)` pair seeded at startup for the `get_ecert` lookup.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SeedCredential {
    pub name: String,
    pub ecert: String,
}

fn default_bind_addr() -> SocketAddr {
    "127.0.0.1:7051".parse().expect("static addr parses")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            seed_credentials: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> ServerResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        toml::from_str(&text).map_err(|e| ServerError::Config(e.to_string()))
    }
}
