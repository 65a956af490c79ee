use anyhow::Context;
use codr_domain::config::SiteConfig;
use codr_kernel::config::load_config;
use codr_logger::Logger;
use codr_server::Server;

/// Overrides the config file location, e.g. `CODR_CONFIG=deploy/site.prod`.
const CONFIG_PATH_VAR: &str = "CODR_CONFIG";

#[codr_runtime::main(high_performance)]
async fn main() -> anyhow::Result<()> {
    let _log = Logger::builder().name(env!("CARGO_PKG_NAME")).init()?;

    let path = std::env::var(CONFIG_PATH_VAR).ok();
    let cfg: SiteConfig = load_config(path).context("Critical: Configuration is malformed")?;

    Server::builder().config(cfg).build()?.run().await
}
