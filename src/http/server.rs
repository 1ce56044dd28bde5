//! HTTP server setup and the relay handler.
//!
//! # Responsibilities
//! - Create the Axum router with wildcard handlers on `/` and `/{*path}`
//! - Wire up middleware (timeout, request ID, in-flight cap, tracing)
//! - Short-circuit CORS preflights before any backend call
//! - Dispatch everything else through the upstream client
//!
//! # State machine per request
//! `Received → Dispatching → {Succeeded | Failed}`, with `Preflight`
//! branching directly from `Received` when the method is OPTIONS. Every
//! state is terminal after one transition; no request is re-entered.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::State,
    http::{Method, Request, Response, StatusCode},
    response::IntoResponse,
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::limit::GlobalConcurrencyLimitLayer;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::origin::BackendOrigin;
use crate::config::schema::GatewayConfig;
use crate::http::{cors, response};
use crate::proxy::request::ProxyRequest;
use crate::proxy::upstream::Upstream;

/// Application state injected into the handler.
#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<Upstream>,
    pub max_body_bytes: usize,
}

/// HTTP server for the gateway.
pub struct GatewayServer {
    router: Router,
    origin: BackendOrigin,
}

impl GatewayServer {
    /// Create a new server. The origin is resolved by the caller, once per
    /// process, and injected here; it is never re-read.
    pub fn new(config: GatewayConfig, origin: BackendOrigin) -> Self {
        let state = AppState {
            upstream: Arc::new(Upstream::new(origin.clone())),
            max_body_bytes: config.limits.max_body_bytes,
        };

        let router = Self::build_router(&config, state);
        Self { router, origin }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &GatewayConfig, state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(relay_handler))
            .route("/", any(relay_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(GlobalConcurrencyLimitLayer::new(config.listener.max_in_flight))
    }

    /// The backend origin this server relays to.
    pub fn origin(&self) -> &BackendOrigin {
        &self.origin
    }

    /// Run the server until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            backend = %self.origin,
            "Gateway listening"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("Gateway stopped");
        Ok(())
    }
}

/// Main relay handler: every path, every method.
async fn relay_handler(
    State(state): State<AppState>,
    request: Request<Body>,
) -> Response<Body> {
    // Preflights are answered locally; the backend never sees them.
    if request.method() == Method::OPTIONS {
        return cors::preflight_response();
    }

    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    let (parts, body) = request.into_parts();

    tracing::debug!(
        request_id = %request_id,
        method = %parts.method,
        path = %parts.uri.path(),
        "Relaying request"
    );

    // GET and HEAD never carry a body forward, even if one was sent.
    let body_bytes = if parts.method == Method::GET || parts.method == Method::HEAD {
        None
    } else {
        match axum::body::to_bytes(body, state.max_body_bytes).await {
            Ok(bytes) if bytes.is_empty() => None,
            Ok(bytes) => Some(bytes),
            Err(_) => {
                // The only realistic failure here is the length limit.
                tracing::warn!(
                    request_id = %request_id,
                    limit = state.max_body_bytes,
                    "Request body exceeded limit"
                );
                return (StatusCode::PAYLOAD_TOO_LARGE, "Request body too large")
                    .into_response();
            }
        }
    };

    let proxy_request = ProxyRequest::new(&parts, body_bytes);

    match state.upstream.send(proxy_request).await {
        Ok(backend_response) => {
            let status = backend_response.status();
            match response::relay(backend_response).await {
                Ok(relayed) => {
                    tracing::debug!(
                        request_id = %request_id,
                        status = %status,
                        "Relayed backend response"
                    );
                    relayed
                }
                Err(e) => {
                    tracing::error!(
                        request_id = %request_id,
                        error = %e,
                        "Failed reading backend response"
                    );
                    response::bad_gateway(&e, state.upstream.origin())
                }
            }
        }
        Err(e) => {
            tracing::error!(
                request_id = %request_id,
                backend = %state.upstream.origin(),
                error = %e,
                "Backend call failed"
            );
            response::bad_gateway(&e, state.upstream.origin())
        }
    }
}
