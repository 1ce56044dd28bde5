//! Shared utilities for integration testing.
//!
//! Mock backends here record everything they observe (method, path, query,
//! headers, body) so tests can assert on the outbound side of the relay,
//! not just the relayed response.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::body::{Body, Bytes};
use axum::http::{request::Parts, Request, Response};
use axum::Router;
use tokio::net::TcpListener;

use api_gateway::config::origin::BackendOrigin;
use api_gateway::config::schema::GatewayConfig;
use api_gateway::http::GatewayServer;
use api_gateway::lifecycle::Shutdown;

/// Everything the mock backend observed about one request.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    /// Case-insensitive single-header lookup (recorded names are lowercase).
    #[allow(dead_code)]
    pub fn header(&self, name: &str) -> Option<&str> {
        let name = name.to_lowercase();
        self.headers
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }
}

pub type Recorded = Arc<Mutex<Vec<RecordedRequest>>>;

/// Start a mock backend on an ephemeral port. Every request is recorded,
/// then answered by `respond`.
pub async fn start_recording_backend<F>(respond: F) -> (SocketAddr, Recorded)
where
    F: Fn(&Parts, &Bytes) -> Response<Body> + Clone + Send + Sync + 'static,
{
    let recorded: Recorded = Arc::new(Mutex::new(Vec::new()));
    let sink = recorded.clone();

    let app = Router::new().fallback(move |req: Request<Body>| {
        let sink = sink.clone();
        let respond = respond.clone();
        async move {
            let (parts, body) = req.into_parts();
            let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();

            sink.lock().unwrap().push(RecordedRequest {
                method: parts.method.to_string(),
                path: parts.uri.path().to_string(),
                query: parts.uri.query().map(str::to_string),
                headers: parts
                    .headers
                    .iter()
                    .map(|(n, v)| {
                        (
                            n.as_str().to_string(),
                            v.to_str().unwrap_or_default().to_string(),
                        )
                    })
                    .collect(),
                body: bytes.to_vec(),
            });

            respond(&parts, &bytes)
        }
    });

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    (addr, recorded)
}

/// Canned 200 JSON response for backends whose reply doesn't matter.
pub fn json_ok(_parts: &Parts, _body: &Bytes) -> Response<Body> {
    Response::builder()
        .status(200)
        .header("content-type", "application/json")
        .body(Body::from(r#"{"ok":true}"#))
        .unwrap()
}

/// Spawn a gateway relaying to `origin_url` on an ephemeral port.
///
/// The returned `Shutdown` must be held for the test's lifetime; dropping
/// it stops the server.
pub async fn spawn_gateway(origin_url: &str, config: GatewayConfig) -> (SocketAddr, Shutdown) {
    let origin = BackendOrigin::parse(origin_url).unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = GatewayServer::new(config, origin);
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}

/// reqwest client that ignores any ambient proxy configuration.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
