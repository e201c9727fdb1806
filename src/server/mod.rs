//! HTTP wrapper around the validators and generators.
//!
//! ```text
//! GET  /                                     service info
//! GET  /api/v1/health                        liveness
//! POST /api/v1/validate/{type}               { value, options? }
//! POST /api/v1/validate/generic              { type, value, options? }
//! GET  /api/v1/validate/generate/{type}      ?brand= for credit-card
//! ```

mod handlers;
pub mod rate_limit;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use axum::extract::{DefaultBodyLimit, Request};
use axum::http::{header, HeaderValue, Method};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};
use axum::Router;
use log::{info, warn};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::CheckitConfig;

pub use handlers::{ApiResponse, GeneratedValue};
pub use rate_limit::RateLimiter;

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.is_empty() || origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|o| match HeaderValue::from_str(o) {
                Ok(v) => Some(v),
                Err(_) => {
                    warn!("ignoring invalid CORS origin '{o}'");
                    None
                }
            })
            .collect();
        AllowOrigin::list(parsed)
    };
    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();
    let response = next.run(request).await;
    info!(
        "{method} {path} {} {}ms",
        response.status().as_u16(),
        start.elapsed().as_millis()
    );
    response
}

/// Build the application router for `config`.
pub fn router(config: &CheckitConfig) -> Router {
    // unmatched methods answer like unknown routes
    let validate_routes = Router::new()
        .route(
            "/generic",
            post(handlers::validate_generic).fallback(handlers::not_found),
        )
        .route(
            "/:kind",
            post(handlers::validate_one).fallback(handlers::not_found),
        )
        .route(
            "/generate/:kind",
            get(handlers::generate_one).fallback(handlers::not_found),
        );

    let mut app = Router::new()
        .route("/", get(handlers::index).fallback(handlers::not_found))
        .route(
            "/api/v1/health",
            get(handlers::health).fallback(handlers::not_found),
        )
        .nest("/api/v1/validate", validate_routes)
        .fallback(handlers::not_found)
        .layer(DefaultBodyLimit::max(config.server.body_limit_bytes));

    if config.rate_limit.enabled {
        let limiter = Arc::new(RateLimiter::from_config(&config.rate_limit));
        app = app.layer(middleware::from_fn_with_state(
            limiter,
            rate_limit::limit_requests,
        ));
    }
    if config.server.compression {
        app = app.layer(CompressionLayer::new());
    }

    app.layer(cors_layer(&config.server.allowed_origins))
        .layer(middleware::from_fn(log_requests))
}

/// Serve the API until the process is stopped.
pub async fn run_server(config: CheckitConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr()?;
    let app = router(&config);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("checkit API listening on http://{addr}");
    info!(
        "CORS origins: {}",
        if config.server.allowed_origins.is_empty() {
            "*".to_string()
        } else {
            config.server.allowed_origins.join(", ")
        }
    );
    if config.rate_limit.enabled {
        info!(
            "rate limit: {} requests per {}s per IP",
            config.rate_limit.max_requests, config.rate_limit.window_secs
        );
    }

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("checkit API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
