use axum::extract::FromRef;
use codr_domain::config::SiteConfig;
use codr_domain::features::FeatureFlags;
use std::ops::Deref;
use std::sync::Arc;
use std::time::Instant;

#[derive(Debug)]
pub struct SiteStateInner {
    pub config: SiteConfig,
    pub started_at: Instant,
}

/// Shared, read-only state handed to every handler.
#[derive(Debug, Clone)]
pub struct SiteState {
    inner: Arc<SiteStateInner>,
}

impl SiteState {
    #[must_use]
    pub fn new(config: SiteConfig) -> Self {
        Self { inner: Arc::new(SiteStateInner { config, started_at: Instant::now() }) }
    }

    #[must_use]
    pub fn flags(&self) -> FeatureFlags {
        self.inner.config.features
    }

    /// Whole seconds since the state was created.
    #[must_use]
    pub fn uptime(&self) -> u64 {
        self.inner.started_at.elapsed().as_secs()
    }
}

impl Deref for SiteState {
    type Target = SiteStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FromRef<SiteState> for SiteConfig {
    fn from_ref(state: &SiteState) -> Self {
        state.inner.config.clone()
    }
}

impl FromRef<SiteState> for FeatureFlags {
    fn from_ref(state: &SiteState) -> Self {
        state.flags()
    }
}
