//! cinegraph-core: Shared domain types for the Cinegraph movie API.
//!
//! Relationships between movies, directors, actors, and genres live only in
//! the graph store and are expressed through query patterns. The types here
//! are the flat records handed back to callers.

pub mod types;

pub use types::Movie;
