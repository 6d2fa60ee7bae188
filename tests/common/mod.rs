#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, Response},
    Router,
};
use tower::util::ServiceExt;
use vastu_backend::{build_router, Config};

pub fn app() -> Router {
    app_with(Config::default())
}

pub fn app_with(config: Config) -> Router {
    build_router(config).expect("Failed to build router")
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.expect("Failed to execute request")
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(
        app,
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body")
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).expect("Failed to parse JSON")
}

pub fn header<'a>(response: &'a Response<Body>, name: &str) -> Option<&'a str> {
    response
        .headers()
        .get(name)
        .map(|v| v.to_str().expect("Invalid header value"))
}
