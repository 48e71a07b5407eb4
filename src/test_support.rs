//! In-process HTTP stub standing in for a beacon node in tests.

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::routing::{MethodRouter, get, post};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

#[derive(Debug, Clone)]
pub enum StubResponse {
    Reply { status: u16, body: String },
    /// Accept the request and never answer.
    Hang,
}

impl StubResponse {
    pub fn ok(body: &str) -> Self {
        Self::status(200, body)
    }

    pub fn status(status: u16, body: &str) -> Self {
        StubResponse::Reply {
            status,
            body: body.to_string(),
        }
    }
}

/// One request as the stub received it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: String,
}

type RequestLog = Arc<Mutex<Vec<RecordedRequest>>>;

/// Serves canned responses keyed by `"METHOD /path"`; unknown routes get 404.
pub struct StubNode {
    addr: SocketAddr,
    requests: RequestLog,
    handle: JoinHandle<()>,
}

impl StubNode {
    pub async fn start(routes: Vec<(&str, StubResponse)>) -> Self {
        let requests = RequestLog::default();

        let mut app = Router::new();
        for (route, response) in routes {
            let (method, path) = route.split_once(' ').unwrap();
            app = app.route(path, method_router(method, response));
        }
        let app = app.with_state(requests.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            addr,
            requests,
            handle,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Every routed request received so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for StubNode {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn method_router(method: &str, response: StubResponse) -> MethodRouter<RequestLog> {
    let handler = move |State(log): State<RequestLog>,
                        method: Method,
                        uri: Uri,
                        headers: HeaderMap,
                        body: String| {
        let response = response.clone();
        async move {
            log.lock().unwrap().push(RecordedRequest {
                method,
                path: uri.path().to_string(),
                headers,
                body,
            });
            match response {
                StubResponse::Hang => std::future::pending().await,
                StubResponse::Reply { status, body } => {
                    (StatusCode::from_u16(status).unwrap(), body)
                }
            }
        }
    };

    match method {
        "GET" => get(handler),
        "POST" => post(handler),
        other => panic!("stub does not serve {} routes", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let stub = StubNode::start(vec![("GET /node/health", StubResponse::ok("{}"))]).await;
        let status = reqwest::get(format!("{}/node/missing", stub.base_url()))
            .await
            .unwrap()
            .status();
        assert_eq!(status, reqwest::StatusCode::NOT_FOUND);
        assert!(stub.requests().is_empty());
    }
}
