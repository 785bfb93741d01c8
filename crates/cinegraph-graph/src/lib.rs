//! Cinegraph Graph — Neo4j session management and movie queries.
//!
//! Every read goes through [`MovieService`], which opens one session per
//! call via [`with_session`] and always releases it before returning,
//! including when the query fails.

pub mod client;
pub mod mapper;
pub mod queries;
pub mod service;
pub mod session;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use client::{GraphClient, GraphConfig, GraphError, Neo4jSession};
pub use mapper::{movies_from_rows, MovieRow};
pub use queries::{MovieQuery, ParamValue, QueryDescriptor};
pub use service::MovieService;
pub use session::{with_session, GraphSession, SessionSource};
