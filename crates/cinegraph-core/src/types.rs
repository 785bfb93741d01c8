//! Domain records returned by the movie queries.

use serde::{Deserialize, Serialize};

/// A movie as returned to API callers.
///
/// One `Movie` is built per result row; it carries no identity beyond its
/// fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Internal graph id of the movie node.
    pub id: i64,
    pub name: String,
}

impl Movie {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
