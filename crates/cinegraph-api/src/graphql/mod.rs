mod context;
mod schema;
mod types;

pub use context::MovieQueries;
pub use schema::{build_schema, ApiSchema, QueryRoot};
pub use types::GqlMovie;
