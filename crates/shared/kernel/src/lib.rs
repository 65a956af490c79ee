//! Kernel utilities shared by the site binaries.
//! Keep this crate lightweight: config loading plus the state and system routes
//! every server build needs.
//!
//! ## Config loading
//! ```rust,ignore
//! use codr_domain::config::SiteConfig;
//! use codr_kernel::config::load_config;
//!
//! let cfg: SiteConfig = load_config(Some("site"))?;
//! ```
pub mod config;
#[cfg(feature = "server")]
pub mod server;

pub use codr_domain as domain;
