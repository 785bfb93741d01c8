//! cinegraph-api: GraphQL HTTP server for the Cinegraph movie graph.
//!
//! Exposes four movie queries at `/graphql` and resolves them through
//! [`cinegraph_graph::MovieService`].

pub mod config;
pub mod error;
pub mod graphql;
pub mod server;
