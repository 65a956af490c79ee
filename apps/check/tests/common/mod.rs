#![allow(dead_code)]

use axum::Router;
use codr_domain::config::SiteConfig;
use codr_domain::features::FeatureFlags;
use codr_server::Server;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tokio::net::TcpListener;

pub(crate) const PUBLIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../public");

/// The real site router serving `static_dir`.
pub(crate) fn site(flags: FeatureFlags, static_dir: &Path) -> Router {
    let mut cfg = SiteConfig::default();
    cfg.storage.static_dir = static_dir.to_path_buf();
    Server::builder().config(cfg).features(flags).build().expect("server builds").router()
}

pub(crate) fn shipped_site(flags: FeatureFlags) -> Router {
    site(flags, &PathBuf::from(PUBLIC_DIR))
}

/// Serves `router` on an ephemeral local port and returns its base URL.
pub(crate) async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind ephemeral port");
    let addr: SocketAddr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("test server");
    });
    format!("http://{addr}")
}
