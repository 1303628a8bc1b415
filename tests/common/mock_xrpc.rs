//! Mock XRPC server: captures every call and replays queued responses.

#![allow(dead_code)]

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, Response, StatusCode};
use axum::routing::any;
use axum::Router;
use serde_json::Value;
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// A captured call for assertions.
#[derive(Debug, Clone)]
pub struct CapturedCall {
    pub method: String,
    /// NSID, taken from the `/xrpc/<nsid>` path.
    pub nsid: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl CapturedCall {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("request body is not JSON")
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.query.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
    }
}

/// A response to replay.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Default for MockResponse {
    fn default() -> Self {
        Self::json(r#"{}"#)
    }
}

impl MockResponse {
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            body: body.as_bytes().to_vec(),
        }
    }

    pub fn value(body: Value) -> Self {
        Self {
            status: 200,
            body: body.to_string().into_bytes(),
        }
    }

    /// An XRPC error body (`{"error", "message"}`).
    pub fn error(status: u16, error: &str, message: &str) -> Self {
        Self {
            status,
            body: serde_json::json!({ "error": error, "message": message })
                .to_string()
                .into_bytes(),
        }
    }

    /// A createRecord / putRecord result.
    pub fn record(uri: &str, validation_status: &str) -> Self {
        Self::value(serde_json::json!({
            "uri": uri,
            "cid": "bafyreib2rxk3rh6kzwq",
            "validationStatus": validation_status,
        }))
    }

    /// An applyWrites result with one entry per status.
    pub fn applied(statuses: &[&str]) -> Self {
        let results: Vec<Value> = statuses
            .iter()
            .map(|s| {
                serde_json::json!({
                    "$type": "com.atproto.repo.applyWrites#createResult",
                    "uri": "at://did:plc:me/app.bsky.graph.listitem/x",
                    "validationStatus": s,
                })
            })
            .collect();
        Self::value(serde_json::json!({ "results": results }))
    }
}

#[derive(Clone)]
struct MockState {
    calls: Arc<Mutex<Vec<CapturedCall>>>,
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
}

/// Mock XRPC service for testing.
pub struct MockXrpc {
    pub addr: SocketAddr,
    state: MockState,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockXrpc {
    /// Start a new mock server.
    pub async fn start() -> Self {
        let state = MockState {
            calls: Arc::new(Mutex::new(Vec::new())),
            responses: Arc::new(Mutex::new(VecDeque::new())),
        };

        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        let app = Router::new()
            .route("/xrpc/{nsid}", any(handle_call))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        Self {
            addr,
            state,
            shutdown: shutdown_tx,
        }
    }

    /// Enqueue a response for the next call.
    pub async fn enqueue(&self, resp: MockResponse) {
        self.state.responses.lock().await.push_back(resp);
    }

    pub async fn calls(&self) -> Vec<CapturedCall> {
        self.state.calls.lock().await.clone()
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for MockXrpc {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

async fn handle_call(State(state): State<MockState>, req: Request<Body>) -> Response<Body> {
    let method = req.method().to_string();
    let nsid = req.uri().path().trim_start_matches("/xrpc/").to_string();
    let query = req.uri().query().map(url_pairs).unwrap_or_default();
    let headers: Vec<(String, String)> = req
        .headers()
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
        .collect();

    let body = axum::body::to_bytes(req.into_body(), 1024 * 1024)
        .await
        .unwrap_or_default()
        .to_vec();

    state.calls.lock().await.push(CapturedCall {
        method,
        nsid,
        query,
        headers,
        body,
    });

    let resp = state.responses.lock().await.pop_front().unwrap_or_default();

    Response::builder()
        .status(StatusCode::from_u16(resp.status).unwrap())
        .header("content-type", "application/json")
        .body(Body::from(resp.body))
        .unwrap()
}

/// Decode `a=b&c=d`, including the percent-escapes reqwest produces.
fn url_pairs(query: &str) -> Vec<(String, String)> {
    let url = reqwest::Url::parse(&format!("http://localhost/?{}", query)).unwrap();
    url.query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}
