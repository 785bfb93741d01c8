//! Configuration for the cinegraph-api server.
//!
//! Loaded from (in priority order):
//! 1. Environment variables (`CINEGRAPH__` prefix, e.g. `CINEGRAPH__NEO4J__PASSWORD`)
//! 2. Config file (`cinegraph.toml` by default)
//! 3. Defaults

use serde::Deserialize;

use cinegraph_graph::GraphConfig;

use crate::error::Result;

/// Everything the server needs at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub graph: GraphConfig,
}

/// HTTP listener settings, from the `[server]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    4000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Load configuration from `<file_prefix>.{toml,yaml,json,...}` and the environment.
pub fn load(file_prefix: &str) -> Result<AppConfig> {
    let cfg = config::Config::builder()
        .add_source(config::File::with_name(file_prefix).required(false))
        .add_source(
            config::Environment::with_prefix("CINEGRAPH")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let server = match cfg.get::<ServerConfig>("server") {
        Ok(s) => s,
        Err(config::ConfigError::NotFound(_)) => ServerConfig::default(),
        Err(e) => return Err(e.into()),
    };

    Ok(AppConfig {
        server,
        graph: graph_config(&cfg),
    })
}

/// Read the `[neo4j]` section, falling back to defaults key by key.
fn graph_config(cfg: &config::Config) -> GraphConfig {
    let defaults = GraphConfig::default();
    GraphConfig {
        uri: cfg.get_string("neo4j.uri").unwrap_or(defaults.uri),
        user: cfg.get_string("neo4j.user").unwrap_or(defaults.user),
        password: cfg.get_string("neo4j.password").unwrap_or(defaults.password),
        max_connections: cfg
            .get_int("neo4j.max_connections")
            .ok()
            .and_then(|v| u32::try_from(v).ok())
            .unwrap_or(defaults.max_connections),
        fetch_size: cfg
            .get_int("neo4j.fetch_size")
            .ok()
            .and_then(|v| usize::try_from(v).ok())
            .unwrap_or(defaults.fetch_size),
    }
}
