//! The HTTP surface of the API server: a liveness route, the GraphQL
//! endpoint, and a GraphiQL page, all behind a permissive CORS policy.
//!
//! `GET /graphql` runs the query carried in the query string, if any, and
//! serves GraphiQL otherwise.

use std::future::Future;

use async_graphql::http::{parse_query_string, GraphiQLSource};
use async_graphql_axum::{GraphQL, GraphQLResponse};
use axum::extract::{MatchedPath, RawQuery, Request, State};
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    ACCESS_CONTROL_MAX_AGE, ACCESS_CONTROL_REQUEST_HEADERS,
};
use axum::http::{HeaderValue, Method, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

use crate::graphql_api::ApiSchema;
use crate::metrics;

pub const GRAPHQL_ROUTE: &str = "/graphql";

/// Allowed request headers when a preflight doesn't name any.
const DEFAULT_ALLOWED_HEADERS: &str = "Content-Type, Authorization, token";

/// Builds the router serving `schema` at [`GRAPHQL_ROUTE`].
pub fn router(schema: ApiSchema) -> Router {
    Router::new()
        .route("/", get(liveness_route))
        .route(
            GRAPHQL_ROUTE,
            get(graphql_get_route).post_service(GraphQL::new(schema.clone())),
        )
        .layer(middleware::from_fn(track_requests))
        .layer(middleware::from_fn(cors))
        .with_state(schema)
}

/// Serves `schema` on `listener` until `shutdown` resolves, then waits for
/// in-flight requests to finish.
pub async fn serve(
    listener: TcpListener,
    schema: ApiSchema,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
    axum::serve(listener, router(schema))
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("API server stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, draining connections");
}

async fn liveness_route() -> Json<serde_json::Value> {
    Json(json!({ "message": "Server is up and running." }))
}

async fn graphql_get_route(
    State(schema): State<ApiSchema>,
    RawQuery(query): RawQuery,
) -> Response {
    let Some(query) = query else {
        return Html(GraphiQLSource::build().endpoint(GRAPHQL_ROUTE).finish()).into_response();
    };

    match parse_query_string(&query) {
        Ok(request) => GraphQLResponse::from(schema.execute(request).await).into_response(),
        Err(err) => (StatusCode::BAD_REQUEST, err.to_string()).into_response(),
    }
}

async fn cors(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        let requested_headers = request
            .headers()
            .get(ACCESS_CONTROL_REQUEST_HEADERS)
            .cloned();
        return preflight_response(requested_headers);
    }

    let mut response = next.run(request).await;
    response
        .headers_mut()
        .insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    response
}

/// Answers a CORS preflight, allowing whatever headers the client asked for.
fn preflight_response(requested_headers: Option<HeaderValue>) -> Response {
    let allowed_headers =
        requested_headers.unwrap_or_else(|| HeaderValue::from_static(DEFAULT_ALLOWED_HEADERS));

    let mut response = (
        StatusCode::NO_CONTENT,
        [
            (ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (ACCESS_CONTROL_ALLOW_METHODS, "GET, POST, OPTIONS"),
            (ACCESS_CONTROL_MAX_AGE, "86400"),
        ],
    )
        .into_response();
    response
        .headers_mut()
        .insert(ACCESS_CONTROL_ALLOW_HEADERS, allowed_headers);
    response
}

async fn track_requests(request: Request, next: Next) -> Response {
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".to_owned());
    let method = request.method().clone();

    let response = next.run(request).await;
    let status = response.status();

    debug!(%method, route = %route, status = status.as_u16(), "Served request");
    metrics()
        .http_requests
        .with_label_values(&[route.as_str(), status.as_str()])
        .inc();

    response
}
