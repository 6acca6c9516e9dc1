// In-process generation endpoint for tests.

use axum::{http::StatusCode, routing::post, Json, Router};
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// Request bodies received by a [`spawn_endpoint`] server, in arrival order.
pub type Received = Arc<Mutex<Vec<Value>>>;

/// Serves `POST /generate` on an ephemeral local port. `respond` maps each
/// request body to the status and raw body to send back.
pub async fn spawn_endpoint<F>(respond: F) -> (String, Received)
where
    F: Fn(&Value) -> (StatusCode, String) + Send + Sync + 'static,
{
    let received: Received = Arc::new(Mutex::new(Vec::new()));
    let respond = Arc::new(respond);

    let seen = received.clone();
    let app = Router::new().route(
        "/generate",
        post(move |Json(body): Json<Value>| {
            let respond = respond.clone();
            let seen = seen.clone();
            async move {
                let reply = respond(&body);
                seen.lock().unwrap().push(body);
                reply
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}/generate", addr), received)
}

/// Replies 200 with `{"result": <result>}`.
pub fn reply_with(result: &str) -> (StatusCode, String) {
    (
        StatusCode::OK,
        serde_json::json!({ "result": result }).to_string(),
    )
}

/// A URL nothing is listening on.
pub async fn closed_endpoint() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/generate", addr)
}
