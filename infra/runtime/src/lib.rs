//! # Runtime
//!
//! Named [Tokio](https://tokio.rs) runtime profiles shared by the binaries.
//!
//! * [`RuntimeConfig::high_performance`] backs `codr-server`.
//! * [`RuntimeConfig::memory_efficient`] backs short-lived tools such as `codr-check`.
//!
//! ```rust,ignore
//! #[codr_runtime::main(high_performance)]
//! async fn main() -> anyhow::Result<()> {
//!     Ok(())
//! }
//! ```

pub use anyhow::Result;
pub use codr_derive::main;

use anyhow::Context;
use std::num::NonZero;
use std::sync::OnceLock;
use std::thread::available_parallelism;
use std::time::Duration;
use tokio::runtime::{Builder, Runtime};
use tracing::debug;

const FALLBACK_WORKERS: usize = 4;
const MAX_WORKERS: usize = 1024;
/// Stack bounds in bytes (1 `MiB` .. 16 `MiB`).
const STACK_RANGE: (usize, usize) = (1024 * 1024, 16 * 1024 * 1024);
const DEFAULT_THREAD_NAME: &str = "codr-worker";

/// Worker count from `TOKIO_WORKER_THREADS`, else the host parallelism.
fn detected_workers() -> usize {
    static WORKERS: OnceLock<usize> = OnceLock::new();
    *WORKERS.get_or_init(|| {
        std::env::var("TOKIO_WORKER_THREADS")
            .ok()
            .and_then(|raw| raw.parse::<usize>().ok())
            .filter(|n| (1..=MAX_WORKERS).contains(n))
            .unwrap_or_else(|| available_parallelism().map_or(FALLBACK_WORKERS, NonZero::get))
    })
}

/// Settings for a multi-threaded Tokio runtime. Setters clamp to safe bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub worker_threads: usize,
    pub stack_size: usize,
    pub thread_name: String,
    pub thread_keep_alive: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            worker_threads: detected_workers(),
            stack_size: 3 * 1024 * 1024,
            thread_name: DEFAULT_THREAD_NAME.to_owned(),
            thread_keep_alive: Duration::from_secs(60),
        }
    }
}

impl RuntimeConfig {
    /// Long running HTTP serving.
    #[must_use]
    pub fn high_performance() -> Self {
        Self::default()
            .with_stack_size(4 * 1024 * 1024)
            .with_thread_name("codr-http")
            .with_thread_keep_alive(Duration::from_secs(300))
    }

    /// Half the workers and a small stack for CLI tools.
    #[must_use]
    pub fn memory_efficient() -> Self {
        Self::default()
            .with_worker_threads(detected_workers() / 2)
            .with_stack_size(2 * 1024 * 1024)
            .with_thread_name("codr-tool")
            .with_thread_keep_alive(Duration::from_secs(30))
    }

    #[must_use]
    pub fn with_worker_threads(mut self, threads: usize) -> Self {
        self.worker_threads = threads.clamp(1, MAX_WORKERS);
        self
    }

    #[must_use]
    pub fn with_stack_size(mut self, bytes: usize) -> Self {
        self.stack_size = bytes.clamp(STACK_RANGE.0, STACK_RANGE.1);
        self
    }

    /// Blank names fall back to `codr-worker`.
    #[must_use]
    pub fn with_thread_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.thread_name =
            if name.trim().is_empty() { DEFAULT_THREAD_NAME.to_owned() } else { name };
        self
    }

    #[must_use]
    pub const fn with_thread_keep_alive(mut self, keep_alive: Duration) -> Self {
        self.thread_keep_alive = keep_alive;
        self
    }
}

/// Builds a multi-threaded runtime with I/O and timers enabled.
///
/// Fields set directly on the struct are clamped here as well.
///
/// # Errors
/// Returns an error when the OS refuses to spawn the worker threads.
pub fn build_runtime_with_config(config: &RuntimeConfig) -> Result<Runtime> {
    let config = config
        .clone()
        .with_worker_threads(config.worker_threads)
        .with_stack_size(config.stack_size)
        .with_thread_name(config.thread_name.clone());
    debug!(?config, "Building tokio runtime");

    Builder::new_multi_thread()
        .worker_threads(config.worker_threads)
        .thread_name(&config.thread_name)
        .thread_stack_size(config.stack_size)
        .thread_keep_alive(config.thread_keep_alive)
        .enable_all()
        .build()
        .context("Failed to initialize tokio runtime")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worker_threads_are_clamped() {
        assert_eq!(RuntimeConfig::default().with_worker_threads(0).worker_threads, 1);
        assert_eq!(RuntimeConfig::default().with_worker_threads(5000).worker_threads, MAX_WORKERS);
    }

    #[test]
    fn stack_size_is_clamped() {
        assert_eq!(RuntimeConfig::default().with_stack_size(10).stack_size, STACK_RANGE.0);
        assert_eq!(RuntimeConfig::default().with_stack_size(usize::MAX).stack_size, STACK_RANGE.1);
    }

    #[test]
    fn profiles_differ() {
        let server = RuntimeConfig::high_performance();
        let tool = RuntimeConfig::memory_efficient();
        assert_eq!(server.thread_name, "codr-http");
        assert_eq!(tool.thread_name, "codr-tool");
        assert!(tool.worker_threads <= server.worker_threads);
        assert!(tool.stack_size < server.stack_size);
    }

    #[test]
    fn blank_thread_name_falls_back() {
        assert_eq!(RuntimeConfig::default().with_thread_name(" ").thread_name, DEFAULT_THREAD_NAME);
    }

    #[test]
    fn unclamped_fields_are_normalized_when_building() {
        let config = RuntimeConfig { worker_threads: 0, ..RuntimeConfig::default() };
        let runtime = build_runtime_with_config(&config).expect("runtime");
        assert_eq!(runtime.block_on(async { 2 + 2 }), 4);
    }
}
