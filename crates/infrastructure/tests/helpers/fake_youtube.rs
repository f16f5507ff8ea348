#![allow(dead_code)]

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{oneshot, Mutex};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FakeBehavior {
    Ok,
    Status(u16),
    Garbage,
    Slow(Duration),
}

#[derive(Clone)]
struct FakeState {
    behavior: Arc<Mutex<FakeBehavior>>,
    requests: Arc<Mutex<Vec<(String, HashMap<String, String>)>>>,
}

/// In-process stand-in for the YouTube Data API, bound to a random port.
pub struct FakeYouTube {
    addr: SocketAddr,
    state: FakeState,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl FakeYouTube {
    pub async fn start() -> Self {
        let state = FakeState {
            behavior: Arc::new(Mutex::new(FakeBehavior::Ok)),
            requests: Arc::new(Mutex::new(Vec::new())),
        };

        let app = Router::new()
            .route("/videos", get(videos))
            .route("/search", get(search))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
                .unwrap();
        });

        Self {
            addr,
            state,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn set_behavior(&self, behavior: FakeBehavior) {
        *self.state.behavior.lock().await = behavior;
    }

    pub async fn requests(&self) -> Vec<(String, HashMap<String, String>)> {
        self.state.requests.lock().await.clone()
    }
}

impl Drop for FakeYouTube {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn respond(
    state: &FakeState,
    path: &str,
    params: HashMap<String, String>,
    body: serde_json::Value,
) -> Response {
    state
        .requests
        .lock()
        .await
        .push((path.to_string(), params));

    let behavior = *state.behavior.lock().await;
    match behavior {
        FakeBehavior::Ok => Json(body).into_response(),
        FakeBehavior::Status(code) => (
            StatusCode::from_u16(code).unwrap(),
            Json(json!({ "error": { "code": code, "message": "quota exceeded" } })),
        )
            .into_response(),
        FakeBehavior::Garbage => (StatusCode::OK, "<html>not json</html>").into_response(),
        FakeBehavior::Slow(delay) => {
            tokio::time::sleep(delay).await;
            Json(body).into_response()
        }
    }
}

async fn videos(
    State(state): State<FakeState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let body = json!({
        "kind": "youtube#videoListResponse",
        "items": [
            { "kind": "youtube#video", "id": "vid1", "snippet": { "title": "One" } },
            { "kind": "youtube#video", "id": "vid2", "snippet": { "title": "Two" } }
        ]
    });
    respond(&state, "/videos", params, body).await
}

async fn search(
    State(state): State<FakeState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let body = if params.get("pageToken").map(String::as_str) == Some("LAST") {
        json!({ "items": [ { "id": { "videoId": "last" } } ] })
    } else {
        json!({
            "nextPageToken": "NEXT",
            "items": [ { "id": { "videoId": "abc" }, "snippet": { "channelTitle": "Chan" } } ]
        })
    };
    respond(&state, "/search", params, body).await
}
