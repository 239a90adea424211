//! # HTTP Server
//!
//! Combines the table routes, the health check and optional static assets
//! into one Axum service.

use axum::http::HeaderValue;
use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::config::HttpServerConfig;
use super::observability_routes::health_routes;
use crate::rest_api::{RestServer, StoreFacade};
use crate::store::Store;

/// HTTP server over one store
pub struct HttpServer {
    config: HttpServerConfig,
    facade: StoreFacade,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server serving `store`
    pub fn new(config: HttpServerConfig, store: Store) -> Self {
        let facade = StoreFacade::new(store);
        let router = Self::build_router(&config, facade.clone());
        Self {
            config,
            facade,
            router,
        }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, facade: StoreFacade) -> Router {
        let mut router = Router::new()
            .merge(health_routes())
            .merge(RestServer::new(facade).router());

        if let Some(dir) = &config.static_dir {
            router = router.fallback_service(ServeDir::new(dir));
        }

        router.layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(&config.cors_origins)),
        )
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Handle to the served store
    pub fn facade(&self) -> &StoreFacade {
        &self.facade
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until Ctrl-C or SIGTERM
    pub async fn start(self) -> Result<(), std::io::Error> {
        let listener = TcpListener::bind(self.config.socket_addr()).await?;
        let addr = listener.local_addr()?;

        info!(%addr, "tablestore HTTP server listening");
        for (table, rows) in self.facade.snapshot().summary() {
            info!(table = %table, rows, "table loaded");
        }
        if let Some(dir) = &self.config.static_dir {
            info!(dir = %dir.display(), "serving static assets");
        }

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("HTTP server stopped");
        Ok(())
    }
}

/// Any origin when none are configured, otherwise only the listed ones
fn cors_layer(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        return cors.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    cors.allow_origin(AllowOrigin::list(allowed))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(%err, "cannot listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
            }
            Err(err) => {
                warn!(%err, "cannot listen for SIGTERM");
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

    info!("shutdown signal received");
}
