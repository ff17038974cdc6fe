// In-process stand-in for the /crew backend
#![allow(dead_code)]

use axum::extract::State;
use axum::http::{header::CONTENT_TYPE, HeaderMap, StatusCode};
use axum::routing::post;
use axum::Router;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

#[derive(Debug, Clone)]
pub struct Recorded {
    pub content_type: Option<String>,
    pub body: String,
}

pub type Log = Arc<Mutex<Vec<Recorded>>>;

/// Spawns a fake `/crew` backend that answers every request with `status` and `body`.
pub async fn spawn_backend(status: StatusCode, body: &'static str) -> (String, Log) {
    let log: Log = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route(
            "/crew",
            post(move |State(log): State<Log>, headers: HeaderMap, req_body: String| async move {
                log.lock().unwrap().push(Recorded {
                    content_type: headers
                        .get(CONTENT_TYPE)
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string),
                    body: req_body,
                });
                (status, body)
            }),
        )
        .with_state(log.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{}/crew", addr), log)
}
