//! HTTP route definitions

use crate::{handlers, middleware, AppState};
use axum::{
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{any, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main router.
///
/// | Path         | Method | Handler      |
/// |--------------|--------|--------------|
/// | `/`          | any    | status       |
/// | `/listNotes` | any    | list_notes   |
/// | `/readNote`  | POST   | read_note    |
/// | `/writeNote` | POST   | write_note   |
///
/// Everything else, including other methods on the POST routes, is an
/// unknown route.
pub fn create_router(state: Arc<AppState>) -> Router {
    let router = Router::new()
        .route("/", any(handlers::status))
        .route("/listNotes", any(handlers::list_notes))
        .route(
            "/readNote",
            post(handlers::read_note).fallback(handlers::unknown_route),
        )
        .route(
            "/writeNote",
            post(handlers::write_note).fallback(handlers::unknown_route),
        )
        .fallback(handlers::unknown_route)
        // Logging runs inside the request id layer so it can see the id
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        .layer(axum_middleware::from_fn(middleware::request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(state.config.max_body_size));

    let router = if state.config.cors_enabled {
        router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
                .expose_headers(Any),
        )
    } else {
        router
    };

    router.with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GatewayConfig;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use notes_store::StoreSettings;
    use rstest::rstest;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn router(store: StoreSettings) -> Router {
        let config = GatewayConfig {
            store,
            ..Default::default()
        };
        create_router(Arc::new(AppState::new(config).unwrap()))
    }

    async fn call(app: Router, method: &str, uri: &str, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        assert!(response.headers().contains_key("x-request-id"));

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[rstest]
    #[case("GET")]
    #[case("POST")]
    #[case("DELETE")]
    #[tokio::test]
    async fn test_status_route_without_configuration(#[case] method: &str) {
        let (status, body) = call(router(StoreSettings::new()), method, "/", "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "notes gateway is running" }));
    }

    #[rstest]
    #[case("GET", "/listNotes", "")]
    #[case("POST", "/readNote", r#"{"filename":"foo.md"}"#)]
    #[case("POST", "/writeNote", r#"{"filename":"foo.md","content":"Hello"}"#)]
    #[tokio::test]
    async fn test_note_routes_require_configuration(
        #[case] method: &str,
        #[case] uri: &str,
        #[case] payload: &str,
    ) {
        let (status, body) = call(router(StoreSettings::new()), method, uri, payload).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "missing configuration");
        assert_eq!(
            body["missing"],
            json!(["STORJ_ENDPOINT", "STORJ_BUCKET", "STORJ_ACCESS_KEY", "STORJ_SECRET_KEY"])
        );
    }

    #[rstest]
    #[case("GET", "/unknown")]
    #[case("POST", "/notes")]
    #[case("GET", "/readNote")]
    #[case("PUT", "/writeNote")]
    #[tokio::test]
    async fn test_unknown_routes_without_configuration(#[case] method: &str, #[case] uri: &str) {
        let (status, body) = call(router(StoreSettings::new()), method, uri, "").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "unknown route" }));
    }

    #[rstest]
    #[case("GET", "/unknown")]
    #[case("POST", "/notes")]
    #[case("GET", "/readNote")]
    #[case("PUT", "/writeNote")]
    #[tokio::test]
    async fn test_unknown_routes(#[case] method: &str, #[case] uri: &str) {
        // Unroutable endpoint: nothing may be sent for these requests
        let store = StoreSettings::new().with_credentials("http://127.0.0.1:9", "bucket", "a", "s");
        let (status, body) = call(router(store), method, uri, "").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "unknown route" }));
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let store = StoreSettings::new().with_credentials("http://127.0.0.1:9", "bucket", "a", "s");
        let (status, body) = call(router(store), "POST", "/readNote", "{not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "bad request");
    }

    #[rstest]
    #[case("/readNote", r#"{"filename":"foo.md","padding":"xxxxxxxxxxxxxxxx"}"#)]
    #[case("/writeNote", r#"{"filename":"foo.md","content":"Hello, this note is too long"}"#)]
    #[tokio::test]
    async fn test_oversized_body_is_json_error(#[case] uri: &str, #[case] payload: &str) {
        let config = GatewayConfig {
            store: StoreSettings::new().with_credentials("http://127.0.0.1:9", "bucket", "a", "s"),
            max_body_size: 16,
            ..Default::default()
        };
        let app = create_router(Arc::new(AppState::new(config).unwrap()));

        let (status, body) = call(app, "POST", uri, payload).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body["error"], "payload too large");
        assert!(body["message"].is_string());
    }
}
