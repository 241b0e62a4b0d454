use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{
        auth::{login, logout, session_status},
        health::{healthz, livez},
        journals::{
            create_journal, delete_journal, get_journal, list_journal_todos, list_journals,
            update_journal,
        },
        todos::{create_todo, delete_todo, get_todo, list_todos, update_todo},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    // API routes with CORS
    let api_routes = Router::new()
        // Journal routes
        .route("/journals", get(list_journals).post(create_journal))
        .route(
            "/journals/{id}",
            get(get_journal).put(update_journal).delete(delete_journal),
        )
        .route("/journals/{id}/todos", get(list_journal_todos))
        // Todo routes
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        // Auth routes
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .route("/auth/session", get(session_status))
        .layer(cors);

    // Main application router
    Router::new()
        .route("/livez", get(livez))
        .route("/healthz", get(healthz))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, Response, StatusCode},
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use std::sync::Arc;

    use async_trait::async_trait;
    use logbook_core::storage::{
        ExecOutcome, RepositoryError, Result as StorageResult, SqlEngine, SqlRow, SqlValue,
    };

    use crate::{config::Config, sessions::SessionStore, storage::SqlRepository};

    async fn test_app() -> Router {
        create_app(AppState::for_tests().await)
    }

    /// Engine whose every call fails as an unreadable disk would.
    struct BrokenEngine;

    #[async_trait]
    impl SqlEngine for BrokenEngine {
        fn name(&self) -> &'static str {
            "broken"
        }

        async fn query(&self, _sql: &str, _params: Vec<SqlValue>) -> StorageResult<Vec<SqlRow>> {
            Err(RepositoryError::QueryFailed("disk I/O error".to_string()))
        }

        async fn execute(&self, _sql: &str, _params: Vec<SqlValue>) -> StorageResult<ExecOutcome> {
            Err(RepositoryError::QueryFailed("disk I/O error".to_string()))
        }
    }

    fn broken_app() -> Router {
        let engine: Arc<dyn SqlEngine> = Arc::new(BrokenEngine);
        let repository = Arc::new(SqlRepository::new(engine.clone()));
        create_app(AppState {
            journals: repository.clone(),
            todos: repository,
            engine,
            sessions: SessionStore::new(),
            credentials: Arc::new(Config::default().credentials()),
        })
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn body_json(response: Response<Body>) -> Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).unwrap()
        };
        (status, json)
    }

    #[tokio::test]
    async fn test_livez() {
        let app = test_app().await;

        let response = app.oneshot(empty_request("GET", "/livez")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_healthz_reports_engine() {
        let app = test_app().await;

        let response = app.oneshot(empty_request("GET", "/healthz")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json, json!({ "healthy": true, "engine": "sqlite" }));
    }

    #[tokio::test]
    async fn test_list_journals_empty() {
        let app = test_app().await;

        let (status, json) = send(&app, empty_request("GET", "/api/journals")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!([]));
    }

    #[tokio::test]
    async fn test_create_and_get_journal() {
        let app = test_app().await;

        let (status, created) = send(
            &app,
            json_request("POST", "/api/journals", json!({ "text": "Day one" })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["id"], 1);
        assert_eq!(created["text"], "Day one");
        assert!(created["created_at"].is_string());
        assert!(created["updated_at"].is_string());

        let (status, fetched) = send(&app, empty_request("GET", "/api/journals/1")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_create_journal_rejects_blank_text() {
        let app = test_app().await;

        for body in [json!({ "text": "   " }), json!({ "text": "" }), json!({})] {
            let (status, json) = send(&app, json_request("POST", "/api/journals", body)).await;

            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(json["statusCode"], 400);
            assert_eq!(json["statusMessage"], "Text required");
        }

        let (_, journals) = send(&app, empty_request("GET", "/api/journals")).await;
        assert_eq!(journals, json!([]));
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let app = test_app().await;

        let request = Request::builder()
            .method("POST")
            .uri("/api/journals")
            .header("Content-Type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, json) = send(&app, request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["statusCode"], 400);
    }

    #[tokio::test]
    async fn test_invalid_path_id_is_bad_request() {
        let app = test_app().await;

        for uri in ["/api/journals/abc", "/api/journals/0", "/api/todos/-4"] {
            let (status, _) = send(&app, empty_request("GET", uri)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        }
    }

    #[tokio::test]
    async fn test_get_nonexistent_journal() {
        let app = test_app().await;

        let (status, json) = send(&app, empty_request("GET", "/api/journals/999")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["statusMessage"], "Journal not found");
    }

    #[tokio::test]
    async fn test_update_journal() {
        let app = test_app().await;
        send(
            &app,
            json_request("POST", "/api/journals", json!({ "text": "Draft" })),
        )
        .await;

        let (status, json) = send(
            &app,
            json_request("PUT", "/api/journals/1", json!({ "text": "Final" })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["text"], "Final");

        let (status, _) = send(
            &app,
            json_request("PUT", "/api/journals/1", json!({ "text": " " })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(
            &app,
            json_request("PUT", "/api/journals/42", json!({ "text": "Nope" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_journal_unlinks_todo() {
        let app = test_app().await;

        let (status, journal) = send(
            &app,
            json_request("POST", "/api/journals", json!({ "text": "Day one" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(journal["id"], 1);

        let (status, todo) = send(
            &app,
            json_request(
                "POST",
                "/api/todos",
                json!({ "text": "Buy milk", "journal_id": 1 }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(todo["id"], 1);
        assert_eq!(todo["text"], "Buy milk");
        assert_eq!(todo["done"], false);
        assert_eq!(todo["priority"], "medium");
        assert_eq!(todo["journal_id"], 1);

        let (status, body) = send(&app, empty_request("DELETE", "/api/journals/1")).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(body, Value::Null);

        let (status, todo) = send(&app, empty_request("GET", "/api/todos/1")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(todo["journal_id"], Value::Null);

        let (_, todos) = send(&app, empty_request("GET", "/api/todos")).await;
        assert_eq!(todos.as_array().unwrap().len(), 1);
        assert_eq!(todos[0]["journal_id"], Value::Null);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let app = test_app().await;

        let (status, _) = send(&app, empty_request("DELETE", "/api/journals/5")).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(&app, empty_request("DELETE", "/api/todos/5")).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_update_nonexistent_todo() {
        let app = test_app().await;

        let (status, json) = send(
            &app,
            json_request("PUT", "/api/todos/999", json!({ "done": true })),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["statusMessage"], "Todo not found");
    }

    #[tokio::test]
    async fn test_update_todo_merges_fields() {
        let app = test_app().await;
        send(
            &app,
            json_request(
                "POST",
                "/api/todos",
                json!({ "text": "Water plants", "priority": "low" }),
            ),
        )
        .await;

        let (status, json) = send(
            &app,
            json_request("PUT", "/api/todos/1", json!({ "done": 1 })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["done"], true);
        assert_eq!(json["text"], "Water plants");
        assert_eq!(json["priority"], "low");

        let (status, _) = send(
            &app,
            json_request("PUT", "/api/todos/1", json!({ "text": "" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_todo_validation() {
        let app = test_app().await;

        let (status, json) = send(
            &app,
            json_request("POST", "/api/todos", json!({ "text": "  " })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["statusMessage"], "Text required");

        let (status, json) = send(
            &app,
            json_request(
                "POST",
                "/api/todos",
                json!({ "text": "Orphan", "journal_id": 77 }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["statusMessage"], "Journal 77 not found");

        let (status, _) = send(
            &app,
            json_request(
                "POST",
                "/api/todos",
                json!({ "text": "Odd", "priority": "urgent" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, todos) = send(&app, empty_request("GET", "/api/todos")).await;
        assert_eq!(todos, json!([]));
    }

    #[tokio::test]
    async fn test_create_todo_treats_zero_journal_as_absent() {
        let app = test_app().await;

        let (status, json) = send(
            &app,
            json_request(
                "POST",
                "/api/todos",
                json!({ "text": "Loose end", "journal_id": 0, "priority": "" }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["journal_id"], Value::Null);
        assert_eq!(json["priority"], "medium");
    }

    #[tokio::test]
    async fn test_list_journal_todos_oldest_first() {
        let app = test_app().await;
        send(
            &app,
            json_request("POST", "/api/journals", json!({ "text": "Day one" })),
        )
        .await;
        for text in ["first", "second"] {
            send(
                &app,
                json_request(
                    "POST",
                    "/api/todos",
                    json!({ "text": text, "journal_id": 1 }),
                ),
            )
            .await;
        }

        let (status, json) = send(&app, empty_request("GET", "/api/journals/1/todos")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json[0]["text"], "first");
        assert_eq!(json[1]["text"], "second");

        let (_, all) = send(&app, empty_request("GET", "/api/todos")).await;
        assert_eq!(all[0]["text"], "second");
        assert_eq!(all[1]["text"], "first");

        let (status, json) = send(&app, empty_request("GET", "/api/journals/99/todos")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!([]));
    }

    #[tokio::test]
    async fn test_login_session_logout() {
        let app = test_app().await;

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/auth/login",
                json!({ "username": "admin", "password": "password12345" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let set_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(set_cookie.starts_with("logbook_session="));
        assert!(set_cookie.contains("HttpOnly"));
        let cookie = set_cookie.split(';').next().unwrap().to_string();

        let json = body_json(response).await;
        assert_eq!(
            json,
            json!({ "success": true, "user": { "username": "admin" } })
        );

        let request = Request::builder()
            .uri("/api/auth/session")
            .header(header::COOKIE, &cookie)
            .body(Body::empty())
            .unwrap();
        let (status, json) = send(&app, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["logged_in"], true);
        assert_eq!(json["user"]["username"], "admin");

        let request = Request::builder()
            .method("POST")
            .uri("/api/auth/logout")
            .header(header::COOKIE, &cookie)
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(&app, request).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let request = Request::builder()
            .uri("/api/auth/session")
            .header(header::COOKIE, &cookie)
            .body(Body::empty())
            .unwrap();
        let (_, json) = send(&app, request).await;
        assert_eq!(json, json!({ "logged_in": false }));
    }

    #[tokio::test]
    async fn test_login_rejects_bad_credentials() {
        let app = test_app().await;

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/auth/login",
                json!({ "username": "admin", "password": "wrong" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(response.headers().get(header::SET_COOKIE).is_none());
        let json = body_json(response).await;
        assert_eq!(json["statusCode"], 401);
    }

    #[tokio::test]
    async fn test_session_without_cookie() {
        let app = test_app().await;

        let (status, json) = send(&app, empty_request("GET", "/api/auth/session")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!({ "logged_in": false }));
    }

    #[tokio::test]
    async fn test_storage_fault_is_internal_error_with_data() {
        let app = broken_app();

        let (status, json) = send(&app, empty_request("GET", "/api/journals")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json,
            json!({
                "statusCode": 500,
                "statusMessage": "Failed to fetch journals",
                "data": "Query failed: disk I/O error"
            })
        );

        let (status, json) = send(
            &app,
            json_request("POST", "/api/journals", json!({ "text": "Day one" })),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["statusCode"], 500);
        assert_eq!(json["data"], "Query failed: disk I/O error");
    }

    #[tokio::test]
    async fn test_healthz_reports_broken_engine() {
        let app = broken_app();

        let (status, json) = send(&app, empty_request("GET", "/healthz")).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(json["healthy"], false);
        assert_eq!(json["engine"], "broken");
    }
}
