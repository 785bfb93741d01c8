use async_graphql::Object;

use cinegraph_core::Movie;

// --- Movie ---

pub struct GqlMovie(pub Movie);

#[Object(name = "Movie")]
impl GqlMovie {
    async fn id(&self) -> i64 {
        self.0.id
    }
    async fn name(&self) -> &str {
        &self.0.name
    }
}

impl From<Movie> for GqlMovie {
    fn from(movie: Movie) -> Self {
        Self(movie)
    }
}
