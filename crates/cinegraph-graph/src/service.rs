//! Movie lookups over the graph.
//!
//! Each operation binds its argument into a catalog query, runs it in its
//! own session, and maps the rows to [`Movie`] records. Graph errors come
//! back unchanged.

use cinegraph_core::Movie;

use crate::client::{GraphClient, GraphError};
use crate::mapper::movies_from_rows;
use crate::queries::QueryDescriptor;
use crate::session::{with_session, GraphSession, SessionSource};

/// Query service for movies, directors, actors, and genres.
pub struct MovieService<S = GraphClient> {
    source: S,
}

impl<S: SessionSource> MovieService<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Get a single movie by its graph id.
    ///
    /// Unlike the list operations, an empty result is an error:
    /// [`GraphError::NotFound`]. If several rows come back, the first wins.
    pub async fn get_movie_by_id(&self, id: i64) -> Result<Movie, GraphError> {
        let movies = self.fetch_movies(QueryDescriptor::movie_by_id(id)).await?;

        movies.into_iter().next().ok_or_else(|| GraphError::NotFound {
            label: "movie".to_string(),
            id: id.to_string(),
        })
    }

    /// Movies directed by the named director. Empty if none match.
    pub async fn get_movies_by_director(&self, name: &str) -> Result<Vec<Movie>, GraphError> {
        self.fetch_movies(QueryDescriptor::movies_by_director(name))
            .await
    }

    /// Movies the named actor starred in. Empty if none match.
    pub async fn get_movies_featuring_actor(&self, name: &str) -> Result<Vec<Movie>, GraphError> {
        self.fetch_movies(QueryDescriptor::movies_featuring_actor(name))
            .await
    }

    /// Movies of the named genre. Empty if none match.
    pub async fn get_movies_of_genre(&self, name: &str) -> Result<Vec<Movie>, GraphError> {
        self.fetch_movies(QueryDescriptor::movies_of_genre(name))
            .await
    }

    async fn fetch_movies(&self, descriptor: QueryDescriptor) -> Result<Vec<Movie>, GraphError> {
        let operation = descriptor.kind().name();

        let movies = with_session(&self.source, |session| {
            Box::pin(async move {
                let rows = session.run(&descriptor).await?;
                movies_from_rows(&rows)
            })
        })
        .await?;

        tracing::debug!(operation, count = movies.len(), "Movie query completed");
        Ok(movies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queries::{MovieQuery, ParamValue};
    use crate::testing::{FakeRow, FakeSessionSource};

    fn service(rows: Vec<FakeRow>) -> (MovieService<FakeSessionSource>, FakeSessionSource) {
        let source = FakeSessionSource::with_rows(rows);
        (MovieService::new(source.clone()), source)
    }

    fn failing_service() -> (MovieService<FakeSessionSource>, FakeSessionSource) {
        let source = FakeSessionSource::default();
        source.fail_next_run(GraphError::Connection("Dummy error".to_string()));
        (MovieService::new(source.clone()), source)
    }

    fn assert_single_session(source: &FakeSessionSource) {
        assert_eq!(source.opened(), 1);
        assert_eq!(source.closed(), 1);
    }

    fn assert_dummy_error<T: std::fmt::Debug>(result: Result<T, GraphError>) {
        match result {
            Err(GraphError::Connection(msg)) => assert_eq!(msg, "Dummy error"),
            other => panic!("expected the driver error back, got {other:?}"),
        }
    }

    // ── getMovieById ─────────────────────────────────────────────

    #[tokio::test]
    async fn test_get_movie_by_id_runs_correct_query() {
        let (svc, source) = service(vec![FakeRow::new(0, "Test movie")]);

        svc.get_movie_by_id(0).await.unwrap();

        let executed = source.executed();
        assert_eq!(executed.len(), 1);
        assert_eq!(executed[0].kind(), MovieQuery::ById);
        assert_eq!(executed[0].text(), MovieQuery::ById.text());
        assert_eq!(executed[0].params(), &[("id", ParamValue::Int(0))]);
    }

    #[tokio::test]
    async fn test_get_movie_by_id_returns_movie() {
        let (svc, source) = service(vec![FakeRow::new(0, "Test movie")]);

        let movie = svc.get_movie_by_id(0).await.unwrap();

        assert_eq!(movie, Movie::new(0, "Test movie"));
        assert_single_session(&source);
    }

    #[tokio::test]
    async fn test_get_movie_by_id_not_found() {
        let (svc, source) = service(vec![]);

        let err = svc.get_movie_by_id(99).await.unwrap_err();

        assert!(matches!(err, GraphError::NotFound { ref id, .. } if id == "99"));
        assert_eq!(err.to_string(), "No movie found for the given id");
        assert_single_session(&source);
    }

    #[tokio::test]
    async fn test_get_movie_by_id_takes_first_row() {
        let (svc, _source) = service(vec![FakeRow::new(5, "First"), FakeRow::new(6, "Second")]);

        let movie = svc.get_movie_by_id(5).await.unwrap();

        assert_eq!(movie, Movie::new(5, "First"));
    }

    #[tokio::test]
    async fn test_get_movie_by_id_rethrows_and_closes() {
        let (svc, source) = failing_service();

        assert_dummy_error(svc.get_movie_by_id(0).await);
        assert_single_session(&source);
    }

    // ── List operations ──────────────────────────────────────────

    #[tokio::test]
    async fn test_get_movies_by_director() {
        let (svc, source) = service(vec![FakeRow::new(0, "Test Movie")]);

        let movies = svc.get_movies_by_director("Test Director").await.unwrap();

        assert_eq!(movies, vec![Movie::new(0, "Test Movie")]);
        assert_single_session(&source);
    }

    #[tokio::test]
    async fn test_get_movies_by_director_binds_name() {
        let (svc, source) = service(vec![]);

        svc.get_movies_by_director("Stanley Kubrick").await.unwrap();

        let executed = source.executed();
        assert_eq!(executed[0].text(), MovieQuery::ByDirector.text());
        assert_eq!(
            executed[0].params(),
            &[("name", ParamValue::String("Stanley Kubrick".to_string()))]
        );
    }

    #[tokio::test]
    async fn test_get_movies_featuring_actor_preserves_order() {
        let rows = vec![
            FakeRow::new(10, "Spartacus"),
            FakeRow::new(4, "Paths of Glory"),
            FakeRow::new(7, "Lonely Are the Brave"),
        ];
        let (svc, source) = service(rows);

        let movies = svc.get_movies_featuring_actor("Kirk Douglas").await.unwrap();

        let ids: Vec<i64> = movies.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![10, 4, 7]);
        assert_eq!(movies[1].name, "Paths of Glory");
        assert_eq!(source.executed()[0].kind(), MovieQuery::FeaturingActor);
        assert_eq!(
            source.executed()[0].param("name"),
            Some(&ParamValue::String("Kirk Douglas".to_string()))
        );
        assert_single_session(&source);
    }

    #[tokio::test]
    async fn test_get_movies_of_genre_empty() {
        let (svc, source) = service(vec![]);

        let movies = svc.get_movies_of_genre("Test Genre").await.unwrap();

        assert!(movies.is_empty());
        assert_eq!(source.executed()[0].kind(), MovieQuery::OfGenre);
        assert_single_session(&source);
    }

    #[tokio::test]
    async fn test_list_operations_rethrow_and_close() {
        let (svc, source) = failing_service();
        assert_dummy_error(svc.get_movies_by_director("x").await);
        assert_single_session(&source);

        let (svc, source) = failing_service();
        assert_dummy_error(svc.get_movies_featuring_actor("x").await);
        assert_single_session(&source);

        let (svc, source) = failing_service();
        assert_dummy_error(svc.get_movies_of_genre("x").await);
        assert_single_session(&source);
    }

    #[tokio::test]
    async fn test_malformed_row_closes_session() {
        let (svc, source) = service(vec![FakeRow::missing_name(1)]);

        let err = svc.get_movies_of_genre("Horror").await.unwrap_err();

        assert!(matches!(err, GraphError::Serialization(_)));
        assert_single_session(&source);
    }
}
