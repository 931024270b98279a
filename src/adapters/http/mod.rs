//! HTTP surface of the catalog: routing, CORS, request tracing and shutdown.

pub mod handlers;
pub mod query;
pub mod response;

use crate::core::engine::CatalogEngine;
use crate::core::ConfigProvider;
use crate::utils::error::{CatalogError, Result};
use axum::http::HeaderValue;
use axum::routing::get;
use axum::Router;
use std::future::Future;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// 每個處理器共享的唯讀狀態
#[derive(Debug, Clone)]
pub struct AppState {
    pub engine: CatalogEngine,
    pub default_page_size: usize,
}

pub fn router(engine: CatalogEngine, config: &dyn ConfigProvider) -> Result<Router> {
    let state = AppState {
        engine,
        default_page_size: config.default_page_size(),
    };

    Ok(Router::new()
        .route("/api/items", get(handlers::list_items))
        .route("/api/items/{item_id}", get(handlers::get_item))
        .route("/api/categories", get(handlers::list_by_category))
        .route("/api/sizes", get(handlers::list_by_size))
        .route("/api/colors", get(handlers::list_by_color))
        .route("/api/designers", get(handlers::list_by_designer))
        .layer(cors_layer(config.allowed_origins())?)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        return Ok(CorsLayer::permissive());
    }

    let values = origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|e| CatalogError::InvalidConfigValueError {
                field: "cors.allow_origins".to_string(),
                value: origin.clone(),
                reason: e.to_string(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(values))
        .allow_methods(Any)
        .allow_headers(Any))
}

/// 啟動服務並在收到 Ctrl-C / SIGTERM 時優雅關閉
pub async fn serve(listener: TcpListener, app: Router) -> Result<()> {
    serve_with_shutdown(listener, app, shutdown_signal()).await
}

pub async fn serve_with_shutdown<F>(listener: TcpListener, app: Router, signal: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(signal)
        .await
        .map_err(|e| CatalogError::ServerError {
            message: e.to_string(),
        })
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("🛑 Shutdown signal received, draining in-flight requests");
}
