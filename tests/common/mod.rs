//! In-process stand-in for an OpenAI-compatible provider.
//!
//! Records every request it receives so tests can assert on the endpoint,
//! headers, body, and the number of calls made.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
enum Reply {
    Fixed { status: StatusCode, body: String },
    /// 200 with the first message's content as the reply.
    Echo,
}

struct ProviderState {
    reply: Reply,
    requests: Mutex<Vec<RecordedRequest>>,
}

pub struct MockProvider {
    addr: SocketAddr,
    state: Arc<ProviderState>,
    handle: JoinHandle<()>,
}

impl MockProvider {
    pub async fn replying(status: StatusCode, body: impl Into<String>) -> Self {
        Self::start(Reply::Fixed {
            status,
            body: body.into(),
        })
        .await
    }

    /// 200 with `{"choices":[{"message":{"content": content}}]}`.
    pub async fn with_content(content: &str) -> Self {
        let body = json!({
            "id": "chatcmpl-test",
            "object": "chat.completion",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": content},
                "finish_reason": "stop"
            }],
            "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
        });
        Self::replying(StatusCode::OK, body.to_string()).await
    }

    pub async fn echo() -> Self {
        Self::start(Reply::Echo).await
    }

    async fn start(reply: Reply) -> Self {
        let state = Arc::new(ProviderState {
            reply,
            requests: Mutex::new(Vec::new()),
        });
        let app = axum::Router::new()
            .fallback(handle)
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind mock provider");
        let addr = listener.local_addr().expect("mock provider has no address");
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock provider crashed");
        });

        Self {
            addr,
            state,
            handle,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }
}

impl Drop for MockProvider {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn handle(
    State(state): State<Arc<ProviderState>>,
    method: axum::http::Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    let header_text = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    let body: Value = serde_json::from_str(&body).unwrap_or(Value::Null);

    state.requests.lock().unwrap().push(RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        authorization: header_text(header::AUTHORIZATION),
        content_type: header_text(header::CONTENT_TYPE),
        body: body.clone(),
    });

    match &state.reply {
        Reply::Fixed { status, body } => (*status, body.clone()).into_response(),
        Reply::Echo => {
            let content = body
                .pointer("/messages/0/content")
                .cloned()
                .unwrap_or(Value::Null);
            let reply = json!({"choices": [{"message": {"role": "assistant", "content": content}}]});
            (StatusCode::OK, reply.to_string()).into_response()
        }
    }
}

/// A port with nothing listening on it.
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
