//! Row-to-record mapping for movie query results.

use cinegraph_core::Movie;

use crate::client::GraphError;

/// Typed accessors over a single result row.
pub trait MovieRow {
    fn id(&self) -> Result<i64, GraphError>;
    fn name(&self) -> Result<String, GraphError>;
}

impl MovieRow for neo4rs::Row {
    fn id(&self) -> Result<i64, GraphError> {
        self.get::<i64>("id")
            .map_err(|e| GraphError::Serialization(format!("Failed to read movie id: {e}")))
    }

    fn name(&self) -> Result<String, GraphError> {
        self.get::<String>("name")
            .map_err(|e| GraphError::Serialization(format!("Failed to read movie name: {e}")))
    }
}

/// Convert result rows into movies, one per row, in row order.
///
/// Stops at the first row whose accessor fails and returns that error.
pub fn movies_from_rows<R: MovieRow>(rows: &[R]) -> Result<Vec<Movie>, GraphError> {
    rows.iter()
        .map(|row| {
            Ok(Movie {
                id: row.id()?,
                name: row.name()?,
            })
        })
        .collect()
}
