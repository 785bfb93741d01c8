//! Neo4j connection management and session minting.

use async_trait::async_trait;
use neo4rs::{ConfigBuilder, Graph, Txn};

use crate::queries::QueryDescriptor;
use crate::session::{GraphSession, SessionSource};

/// Errors from graph operations.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("Neo4j connection error: {0}")]
    Connection(String),

    #[error("Neo4j query error: {0}")]
    Query(#[from] neo4rs::Error),

    #[error("No {label} found for the given id")]
    NotFound { label: String, id: String },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Configuration for connecting to Neo4j.
#[derive(Debug, Clone)]
pub struct GraphConfig {
    pub uri: String,
    pub user: String,
    pub password: String,
    pub max_connections: u32,
    pub fetch_size: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            uri: "bolt://localhost:7687".to_string(),
            user: "neo4j".to_string(),
            password: "neo4j".to_string(),
            max_connections: 16,
            fetch_size: 256,
        }
    }
}

/// Long-lived Neo4j client that mints one session per unit of work.
///
/// Construct it once at startup and hand it to whatever needs it.
/// Clone is cheap (inner Arc).
#[derive(Clone)]
pub struct GraphClient {
    graph: Graph,
}

impl GraphClient {
    /// Connect to Neo4j with the given configuration.
    pub async fn connect(config: &GraphConfig) -> Result<Self, GraphError> {
        let neo_config = ConfigBuilder::default()
            .uri(&config.uri)
            .user(&config.user)
            .password(&config.password)
            .max_connections(config.max_connections as usize)
            .fetch_size(config.fetch_size)
            .build()
            .map_err(|e| GraphError::Connection(e.to_string()))?;

        let graph = Graph::connect(neo_config)
            .await
            .map_err(|e| GraphError::Connection(e.to_string()))?;

        tracing::info!(uri = %config.uri, "Connected to Neo4j");
        Ok(Self { graph })
    }

    /// Get a reference to the underlying neo4rs Graph for direct operations.
    pub fn inner(&self) -> &Graph {
        &self.graph
    }
}

#[async_trait]
impl SessionSource for GraphClient {
    type Session = Neo4jSession;

    async fn session(&self) -> Result<Neo4jSession, GraphError> {
        let txn = self.graph.start_txn().await?;
        Ok(Neo4jSession { txn })
    }
}

/// A session backed by a Neo4j transaction.
///
/// The transaction pins one pooled connection until [`GraphSession::close`]
/// hands it back.
pub struct Neo4jSession {
    txn: Txn,
}

#[async_trait]
impl GraphSession for Neo4jSession {
    type Row = neo4rs::Row;

    async fn run(&mut self, query: &QueryDescriptor) -> Result<Vec<neo4rs::Row>, GraphError> {
        let mut stream = self.txn.execute(query.to_query()).await?;
        let mut rows = Vec::new();
        while let Some(row) = stream.next(self.txn.handle()).await? {
            rows.push(row);
        }
        Ok(rows)
    }

    async fn close(self) {
        // Catalog queries are read-only, so nothing needs committing.
        if let Err(e) = self.txn.rollback().await {
            tracing::warn!(error = %e, "Failed to release Neo4j session");
        }
    }
}
