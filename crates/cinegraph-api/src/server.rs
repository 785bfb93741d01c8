//! HTTP surface: GraphQL endpoint, GraphiQL, and a health check.

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{extract::State, response::Html, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::Result;
use crate::graphql::ApiSchema;

async fn graphql_handler(State(schema): State<ApiSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

/// Build the application router around a schema.
pub fn router(schema: ApiSchema) -> Router {
    Router::new()
        .route("/graphql", get(graphiql).post(graphql_handler))
        .route("/", get(|| async { "ok" }))
        .with_state(schema)
        .layer(TraceLayer::new_for_http())
}

/// Bind the configured address and serve until the process is stopped.
pub async fn serve(config: &ServerConfig, app: Router) -> Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "GraphQL endpoint listening on /graphql");
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use cinegraph_graph::testing::{FakeRow, FakeSessionSource};
    use cinegraph_graph::MovieService;
    use tower::ServiceExt;

    use super::*;
    use crate::graphql::build_schema;

    fn app(rows: Vec<FakeRow>) -> Router {
        let source = FakeSessionSource::with_rows(rows);
        router(build_schema(Arc::new(MovieService::new(source))))
    }

    #[tokio::test]
    async fn test_health_check() {
        let resp = app(vec![])
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"ok");
    }

    #[tokio::test]
    async fn test_graphiql_served_on_get() {
        let resp = app(vec![])
            .oneshot(Request::get("/graphql").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        assert!(String::from_utf8_lossy(&body).contains("graphiql"));
    }

    #[tokio::test]
    async fn test_graphql_post() {
        let payload = serde_json::json!({
            "query": "{ getMoviesByDirector(name: \"Test Director\") { id name } }"
        });
        let req = Request::post("/graphql")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap();

        let resp = app(vec![FakeRow::new(0, "Test Movie")])
            .oneshot(req)
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            json["data"]["getMoviesByDirector"],
            serde_json::json!([{"id": 0, "name": "Test Movie"}])
        );
    }
}
