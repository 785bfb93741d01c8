use async_trait::async_trait;

use cinegraph_core::Movie;
use cinegraph_graph::{GraphError, MovieService, SessionSource};

/// The movie lookups the resolvers depend on.
///
/// Stored in the schema as `Arc<dyn MovieQueries>` so the schema type does
/// not depend on which session source backs the service.
#[async_trait]
pub trait MovieQueries: Send + Sync {
    async fn get_movie_by_id(&self, id: i64) -> Result<Movie, GraphError>;
    async fn get_movies_by_director(&self, name: &str) -> Result<Vec<Movie>, GraphError>;
    async fn get_movies_featuring_actor(&self, name: &str) -> Result<Vec<Movie>, GraphError>;
    async fn get_movies_of_genre(&self, name: &str) -> Result<Vec<Movie>, GraphError>;
}

#[async_trait]
impl<S: SessionSource + 'static> MovieQueries for MovieService<S> {
    async fn get_movie_by_id(&self, id: i64) -> Result<Movie, GraphError> {
        MovieService::get_movie_by_id(self, id).await
    }

    async fn get_movies_by_director(&self, name: &str) -> Result<Vec<Movie>, GraphError> {
        MovieService::get_movies_by_director(self, name).await
    }

    async fn get_movies_featuring_actor(&self, name: &str) -> Result<Vec<Movie>, GraphError> {
        MovieService::get_movies_featuring_actor(self, name).await
    }

    async fn get_movies_of_genre(&self, name: &str) -> Result<Vec<Movie>, GraphError> {
        MovieService::get_movies_of_genre(self, name).await
    }
}
