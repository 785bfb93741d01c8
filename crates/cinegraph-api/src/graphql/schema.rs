use std::sync::Arc;

use async_graphql::{Context, EmptyMutation, EmptySubscription, Object, Result, Schema};

use super::context::MovieQueries;
use super::types::GqlMovie;

pub type ApiSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// The root query type.
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Movies the named actor starred in.
    async fn get_movies_featuring_actor(
        &self,
        ctx: &Context<'_>,
        name: String,
    ) -> Result<Vec<GqlMovie>> {
        let movies = ctx.data_unchecked::<Arc<dyn MovieQueries>>();
        let found = movies.get_movies_featuring_actor(&name).await?;
        Ok(found.into_iter().map(GqlMovie::from).collect())
    }

    /// Movies directed by the named director.
    async fn get_movies_by_director(
        &self,
        ctx: &Context<'_>,
        name: String,
    ) -> Result<Vec<GqlMovie>> {
        let movies = ctx.data_unchecked::<Arc<dyn MovieQueries>>();
        let found = movies.get_movies_by_director(&name).await?;
        Ok(found.into_iter().map(GqlMovie::from).collect())
    }

    /// Gets the movie for a specified id.
    async fn get_movie_by_id(&self, ctx: &Context<'_>, id: i64) -> Result<Option<GqlMovie>> {
        let movies = ctx.data_unchecked::<Arc<dyn MovieQueries>>();
        let movie = movies.get_movie_by_id(id).await?;
        Ok(Some(GqlMovie(movie)))
    }

    /// Movies of the named genre.
    async fn get_movies_of_genre(&self, ctx: &Context<'_>, name: String) -> Result<Vec<GqlMovie>> {
        let movies = ctx.data_unchecked::<Arc<dyn MovieQueries>>();
        let found = movies.get_movies_of_genre(&name).await?;
        Ok(found.into_iter().map(GqlMovie::from).collect())
    }
}

pub fn build_schema(movies: Arc<dyn MovieQueries>) -> ApiSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(movies)
        .finish()
}
