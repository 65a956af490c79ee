//! # codr.io Server
//!
//! Serves the server-rendered site with `Axum`: the home page, flag-gated section
//! pages, static assets from the configured directory and a `/health` probe.
//!
//! ## Example
//! ```no_run
//! use codr_server::Server;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Server::builder().port(4321).build()?.run().await
//! }
//! ```

mod pages;
pub mod router;

use anyhow::{Context, Result};
use axum::Router;
use axum_server::Handle;
use codr_domain::config::SiteConfig;
use codr_domain::features::FeatureFlags;
use codr_kernel::server::SiteState;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::signal;
use tracing::{error, info, warn};

const SHUTDOWN_GRACE: Duration = Duration::from_secs(30);

/// A fluent builder for configuring the [`Server`].
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct ServerBuilder {
    cfg: SiteConfig,
}

impl ServerBuilder {
    pub fn config(mut self, cfg: SiteConfig) -> Self {
        self.cfg = cfg;
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.cfg.server.port = port;
        self
    }

    /// Replaces the feature flags from the config.
    pub fn features(mut self, flags: FeatureFlags) -> Self {
        self.cfg.features = flags;
        self
    }

    fn validate_ssl_config(&self) -> Result<()> {
        let Some(ssl) = &self.cfg.server.ssl else {
            return Ok(());
        };

        if cfg!(not(feature = "tls")) {
            anyhow::bail!("TLS is configured but codr-server was built without the `tls` feature");
        }
        if !ssl.cert.exists() {
            anyhow::bail!("SSL certificate not found at: {}", ssl.cert.display());
        }
        if !ssl.key.exists() {
            anyhow::bail!("SSL key not found at: {}", ssl.key.display());
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let metadata = ssl.key.metadata()?;
            if metadata.permissions().mode() & 0o077 != 0 {
                warn!(
                    "SECURITY: SSL Private Key {} has insecure permissions (should be 600)",
                    ssl.key.display()
                );
            }
        }
        Ok(())
    }

    /// Validates the configuration and prepares the shared state.
    ///
    /// A missing static directory is only warned about: pages still render, the
    /// background and stylesheet will 404.
    ///
    /// # Errors
    /// Returns an error if TLS is configured but the cert/key files are missing or
    /// the `tls` feature is disabled.
    pub fn build(self) -> Result<Server> {
        self.validate_ssl_config()?;

        let static_dir = &self.cfg.storage.static_dir;
        if !static_dir.is_dir() {
            warn!(path = %static_dir.display(), "Static directory not found");
        }

        info!(
            address = %SocketAddr::new(self.cfg.server.address, self.cfg.server.port),
            features = ?self.cfg.features.names().collect::<Vec<_>>(),
            "Initializing server"
        );

        Ok(Server { state: SiteState::new(self.cfg) })
    }
}

/// A configured server ready to bind.
#[must_use = "call .run().await to start the server"]
#[derive(Debug)]
pub struct Server {
    state: SiteState,
}

impl Server {
    pub fn builder() -> ServerBuilder {
        ServerBuilder::default()
    }

    #[must_use]
    pub const fn state(&self) -> &SiteState {
        &self.state
    }

    /// The application router, for serving on a custom listener or in tests.
    pub fn router(&self) -> Router {
        router::init(self.state.clone())
    }

    /// Binds the configured address and serves until Ctrl+C or SIGTERM.
    ///
    /// # Errors
    /// Returns an error if binding fails or the TLS material can't be loaded.
    pub async fn run(self) -> Result<()> {
        let cfg = self.state.config.clone();
        let address = SocketAddr::new(cfg.server.address, cfg.server.port);
        let app = self.router();

        let handle = Handle::<SocketAddr>::new();
        let shutdown_handle = handle.clone();
        tokio::spawn(async move {
            if let Err(e) = shutdown_signal().await {
                error!("Error while waiting for shutdown signal: {e}");
                return;
            }
            info!("Shutdown signal received, starting graceful shutdown...");
            shutdown_handle.graceful_shutdown(Some(SHUTDOWN_GRACE));
        });

        #[cfg(feature = "tls")]
        if let Some(ssl) = &cfg.server.ssl {
            info!("Starting HTTPS server on https://{address}");
            let tls = axum_server::tls_rustls::RustlsConfig::from_pem_file(&ssl.cert, &ssl.key)
                .await
                .context("Failed to load SSL/TLS certificates")?;

            axum_server::bind_rustls(address, tls)
                .handle(handle)
                .serve(app.into_make_service())
                .await
                .context("HTTPS server failed")?;

            info!("Server shutdown complete");
            return Ok(());
        }

        info!("Starting HTTP server on http://{address}");
        axum_server::bind(address)
            .handle(handle)
            .serve(app.into_make_service())
            .await
            .context("HTTP server failed")?;

        info!("Server shutdown complete");
        Ok(())
    }
}

/// Resolves on Ctrl+C or, on unix, SIGTERM.
async fn shutdown_signal() -> Result<()> {
    let ctrl_c = async { signal::ctrl_c().await.context("Failed to install Ctrl+C handler") };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .context("Failed to install SIGTERM handler")?
            .recv()
            .await;
        Ok::<_, anyhow::Error>(())
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<Result<()>>();

    tokio::select! {
        res = ctrl_c => res?,
        res = terminate => res?,
    }

    Ok(())
}
