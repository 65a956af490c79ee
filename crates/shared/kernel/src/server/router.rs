use super::{SiteState, health};
use axum::Router;
use axum::routing::get;
use codr_domain::constants::HEALTH_PATH;

/// Routes every deployment exposes regardless of content.
pub fn system_router() -> Router<SiteState> {
    Router::new().route(HEALTH_PATH, get(health::health_handler))
}
