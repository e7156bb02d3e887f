//! HTTP storefront: routes map storefront paths to JSON views and
//! mutation endpoints over a shared [`Store`].

pub mod error;
mod handlers;
mod health;
mod router;
pub mod shutdown;
pub mod views;

pub use error::ApiError;
pub use router::build_router;

use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::checkout::Checkout;
use crate::config::ServerConfig;
use crate::server::shutdown::ShutdownManager;
use crate::store::Store;

/// Number of ports tried after the configured one when it is busy.
const PORT_FALLBACK_RANGE: u16 = 100;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub checkout: Checkout,
}

impl AppState {
    pub fn new(store: Store, checkout: Checkout) -> Self {
        Self { store, checkout }
    }
}

pub struct StorefrontServer {
    pub addr: SocketAddr,
    /// The bound listener, kept alive to prevent port race conditions.
    /// Populated by try_bind(), consumed by run().
    listener: Option<TcpListener>,
    state: AppState,
    shutdown: Arc<ShutdownManager>,
}

impl StorefrontServer {
    pub fn new(state: AppState) -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 0)), // Will be determined at bind time
            listener: None,
            state,
            shutdown: Arc::new(ShutdownManager::new()),
        }
    }

    /// Try to bind to the configured address, falling back to incremental
    /// ports if busy. Returns the bound address.
    pub async fn try_bind(
        &mut self,
        config: &ServerConfig,
    ) -> Result<SocketAddr, Box<dyn std::error::Error + Send + Sync>> {
        let bind_addr: SocketAddr = config
            .bind_addr
            .parse()
            .map_err(|e| format!("Invalid bind address '{}': {}", config.bind_addr, e))?;

        let start_port = bind_addr.port();
        let host = bind_addr.ip();

        for port in start_port..=start_port.saturating_add(PORT_FALLBACK_RANGE) {
            let try_addr = SocketAddr::new(host, port);
            match TcpListener::bind(try_addr).await {
                Ok(listener) => {
                    let actual_addr = listener.local_addr()?;
                    self.addr = actual_addr;
                    self.listener = Some(listener);
                    tracing::info!("Storefront bound to {}", actual_addr);
                    return Ok(actual_addr);
                }
                Err(e) => {
                    tracing::debug!("Port {} busy: {}", port, e);
                    continue;
                }
            }
        }

        Err(format!(
            "Could not find available port in range {}-{}",
            start_port,
            start_port.saturating_add(PORT_FALLBACK_RANGE)
        )
        .into())
    }

    pub fn shutdown_handle(&self) -> Arc<ShutdownManager> {
        self.shutdown.clone()
    }

    /// Run the storefront server until shutdown is signalled.
    ///
    /// Consumes self to take ownership of the pre-bound listener.
    /// Call try_bind() before run().
    pub async fn run(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let listener = self
            .listener
            .ok_or("try_bind() must be called before run()")?;

        tracing::info!("Starting storefront on {}", self.addr);

        let app = build_router(self.state);
        let shutdown = self.shutdown.clone();
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                if let Err(e) = shutdown.wait_for_shutdown().await {
                    tracing::warn!(error = %e, "Failed to install signal handler");
                }
            })
            .into_future()
            .await?;

        tracing::info!("Storefront stopped");
        Ok(())
    }
}
