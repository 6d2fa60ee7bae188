use crate::{
    config::Config,
    docs::api_doc,
    error::ServerError,
    handlers::root,
    routes::{create_api_routes, CorsPolicy},
    state::AppState,
};
use axum::{body::Body, http::Request, routing::get, Router};
use std::{future::Future, net::SocketAddr, time::Duration};
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use utoipa_swagger_ui::SwaggerUi;

/// Build the full application router for a configuration
pub fn build_router(config: Config) -> Result<Router, ServerError> {
    let cors = CorsPolicy::from_origins(config.cors_origins.as_deref())?;
    if cors.is_permissive() && config.is_production() {
        warn!("CORS allows any origin with credentials; set CORS_ORIGINS to an allow-list for production");
    }

    let docs = SwaggerUi::new("/docs").url("/openapi.json", api_doc(&config.service_name));
    let state = AppState::new(config);

    let app_routes = Router::new()
        .route("/", get(root))
        // Mount API routes
        .nest("/api", create_api_routes())
        // Mount Swagger UI
        .merge(docs)
        .with_state(state)
        // Add tracing layer
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        );

    Ok(cors.apply(app_routes))
}

/// A bound listener together with the router it serves
pub struct Application {
    listener: TcpListener,
    router: Router,
    shutdown_grace: Duration,
}

impl Application {
    /// Build the router and bind the listener. Fails if the address is taken.
    pub async fn build(config: Config) -> Result<Self, ServerError> {
        let addr = config.socket_address()?;
        let shutdown_grace = config.shutdown_grace();
        let router = build_router(config)?;

        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;

        Ok(Self {
            listener,
            router,
            shutdown_grace,
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, ServerError> {
        self.listener.local_addr().map_err(ServerError::Serve)
    }

    /// Serve until SIGINT or SIGTERM
    pub async fn run(self) -> Result<(), ServerError> {
        let grace = self.shutdown_grace;
        self.run_until(shutdown_signal(grace)).await
    }

    /// Serve until `shutdown` completes, then drain in-flight requests
    pub async fn run_until<F>(self, shutdown: F) -> Result<(), ServerError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.local_addr()?;
        info!("Server running on http://{}", addr);
        info!("Swagger UI available at http://{}/docs", addr);

        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(ServerError::Serve)?;

        info!("Server shutdown complete");
        Ok(())
    }
}

async fn shutdown_signal(grace: Duration) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received SIGINT, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }

    if !grace.is_zero() {
        tokio::time::sleep(grace).await;
    }
}
