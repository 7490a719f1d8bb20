use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tower::ServiceExt;

use crate::server::{
    config::DEV_JWT_SECRET, middleware::token::CookiePolicy, router::router,
    service::token::TokenService, state::AppState,
};


fn app(db: &DatabaseConnection) -> Router {
    router().with_state(AppState {
        db: db.clone(),
        tokens: TokenService::new(DEV_JWT_SECRET),
        cookies: CookiePolicy::new(false),
    })
}

/// Signs a token for a factory user the same way the running server would.
fn token_for(user: &entity::user::Model) -> String {
    TokenService::new(DEV_JWT_SECRET)
        .issue(user.id, user.role)
        .unwrap()
}

struct TestResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Value,
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> TestResponse {
    let mut request = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    TestResponse {
        status,
        headers,
        body,
    }
}
