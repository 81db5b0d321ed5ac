use axum::http::StatusCode;
use sea_orm::DbErr;
use serde_json::json;

mod support;

use aprobaciones_db::entities::users;
use support::{app, attachments, legacy, post_json, send_json, user};

#[tokio::test]
async fn login_returns_bearer_token_with_trimmed_user() {
    let legacy_db = legacy()
        .append_query_results([vec![user("GERENTE", "clave1")]])
        .into_connection();
    let app = app(legacy_db, attachments().into_connection());

    let (status, body) = send_json(
        app,
        post_json(
            "/api/v1/auth/login",
            None,
            &json!({ "usuario": "GERENTE", "password": "clave1" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["token_type"], "bearer");
    assert_eq!(body["usuario"], "GERENTE");
    assert_eq!(body["nombre"], "Gerente General");
    assert_eq!(body["expires_in"], 1800);

    let token = body["access_token"].as_str().unwrap();
    let claims = support::jwt_service().validate_token(token).unwrap();
    assert_eq!(claims.user_code(), "GERENTE");
}

#[tokio::test]
async fn unknown_user_and_wrong_password_are_indistinguishable() {
    let unknown = legacy()
        .append_query_results([Vec::<users::Model>::new()])
        .into_connection();
    let (unknown_status, unknown_body) = send_json(
        app(unknown, attachments().into_connection()),
        post_json(
            "/api/v1/auth/login",
            None,
            &json!({ "usuario": "NADIE", "password": "clave1" }),
        ),
    )
    .await;

    let known = legacy()
        .append_query_results([vec![user("GERENTE", "clave1")]])
        .into_connection();
    let (wrong_status, wrong_body) = send_json(
        app(known, attachments().into_connection()),
        post_json(
            "/api/v1/auth/login",
            None,
            &json!({ "usuario": "GERENTE", "password": "otra" }),
        ),
    )
    .await;

    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_body, wrong_body);
    assert_eq!(unknown_body["error"], "invalid_credentials");
    assert_eq!(unknown_body["message"], "Invalid user or password");
}

#[tokio::test]
async fn overlong_user_code_is_rejected_before_lookup() {
    let app = app(legacy().into_connection(), attachments().into_connection());

    let (status, body) = send_json(
        app,
        post_json(
            "/api/v1/auth/login",
            None,
            &json!({ "usuario": "ABCDEFGHIJK", "password": "x" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert_eq!(body["message"], "usuario must be at most 10 characters");
}

#[tokio::test]
async fn login_lookup_failure_is_500() {
    let legacy_db = legacy()
        .append_query_errors([DbErr::Custom("connection reset".to_string())])
        .into_connection();
    let app = app(legacy_db, attachments().into_connection());

    let (status, body) = send_json(
        app,
        post_json(
            "/api/v1/auth/login",
            None,
            &json!({ "usuario": "GERENTE", "password": "clave1" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "DATABASE_ERROR");
}

#[tokio::test]
async fn protected_route_without_token_is_401() {
    let app = app(legacy().into_connection(), attachments().into_connection());

    let (status, body) = send_json(app, support::get("/api/v1/presupuestos/pendientes", None)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "missing_token");
}

#[tokio::test]
async fn protected_route_with_garbage_token_is_401() {
    let app = app(legacy().into_connection(), attachments().into_connection());

    let (status, body) = send_json(
        app,
        support::get("/api/v1/usuarios", Some("Bearer not.a.jwt")),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "invalid_token");
}

#[tokio::test]
async fn token_for_deleted_user_is_401() {
    let legacy_db = legacy()
        .append_query_results([Vec::<users::Model>::new()])
        .into_connection();
    let app = app(legacy_db, attachments().into_connection());

    let (status, body) = send_json(
        app,
        support::get("/api/v1/usuarios", Some(&support::bearer("BORRADO"))),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "unknown_user");
}

#[tokio::test]
async fn token_subject_lookup_failure_is_500() {
    let legacy_db = legacy()
        .append_query_errors([DbErr::Custom("connection reset".to_string())])
        .into_connection();
    let app = app(legacy_db, attachments().into_connection());

    let (status, body) = send_json(
        app,
        support::get("/api/v1/usuarios", Some(&support::bearer("GERENTE"))),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "DATABASE_ERROR");
}

#[tokio::test]
async fn health_is_public() {
    let app = app(legacy().into_connection(), attachments().into_connection());

    let (status, body) = send_json(app, support::get("/health", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}
